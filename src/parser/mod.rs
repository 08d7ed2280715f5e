pub mod extract;
pub mod sections;

use std::path::Path;
use std::sync::LazyLock;

use anyhow::{Context, Result};
use regex::Regex;

pub use extract::RoomSpec;

static NUMBER_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"room_(\d+)_").unwrap());

/// Parse one room specification document. Field extraction is best-effort;
/// only the file read itself can fail.
pub fn parse_room_spec(path: &Path) -> Result<RoomSpec> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    Ok(extract::extract_all(room_number(path), &content))
}

/// Room number embedded in the file name
/// (`room_031_the_laboratory.md` -> "031").
pub fn room_number(path: &Path) -> Option<String> {
    let name = path.file_name()?.to_str()?;
    NUMBER_RE.captures(name).map(|caps| caps[1].to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn number_from_file_name() {
        assert_eq!(
            room_number(Path::new("rooms/room_031_the_laboratory.md")).as_deref(),
            Some("031")
        );
    }

    #[test]
    fn no_number_in_file_name() {
        assert!(room_number(Path::new("rooms/room_notes.md")).is_none());
        assert!(room_number(Path::new("rooms/README.md")).is_none());
    }

    #[test]
    fn parse_fixture_end_to_end() {
        let spec = parse_room_spec(Path::new("tests/fixtures/room_031_the_laboratory.md")).unwrap();
        assert_eq!(spec.number.as_deref(), Some("031"));
        assert_eq!(spec.archetype.as_deref(), Some("The Reactor"));
    }

    #[test]
    fn parse_missing_file_is_an_error() {
        assert!(parse_room_spec(Path::new("tests/fixtures/room_404_nowhere.md")).is_err());
    }
}
