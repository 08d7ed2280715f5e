use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde::Serialize;
use serde_json::Value;

/// Load the wings document into memory in full. The file is the source of
/// truth for every existing room field; object keys keep their on-disk
/// order through a load/save cycle.
pub fn load_wings(path: &Path) -> Result<Value> {
    let raw = fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    serde_json::from_str(&raw).with_context(|| format!("{} is not valid JSON", path.display()))
}

/// Overwrite the wings document in place, 4-space indented. No temp-file
/// rename: an interrupted write can leave a truncated file.
pub fn save_wings(path: &Path, wings: &Value) -> Result<()> {
    fs::write(path, to_pretty_string(wings)?)
        .with_context(|| format!("failed to write {}", path.display()))
}

fn to_pretty_string(wings: &Value) -> Result<String> {
    let mut buf = Vec::new();
    let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
    let mut ser = serde_json::Serializer::with_formatter(&mut buf, formatter);
    wings.serialize(&mut ser)?;
    buf.push(b'\n');
    Ok(String::from_utf8(buf)?)
}

// ── Tests ──
