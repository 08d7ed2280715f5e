use std::collections::HashMap;
use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use indicatif::{ProgressBar, ProgressStyle};
use serde_json::Value;
use tracing::debug;

use crate::parser::{self, RoomSpec};
use crate::store;

/// Merge every `room_*.md` document under `specs_dir` into the wings
/// document at `data_path`, overwriting it in place. Returns how many room
/// records were updated.
pub fn merge(data_path: &Path, specs_dir: &Path) -> Result<usize> {
    let mut wings = store::load_wings(data_path)?;
    let specs = parse_specs(specs_dir)?;
    let updated = apply_specs(&mut wings, &specs)?;
    store::save_wings(data_path, &wings)?;
    Ok(updated)
}

/// Parse every room document in the directory into a number-keyed map.
/// Documents without a number in their file name are skipped; duplicate
/// numbers last-wins in enumeration order, which is filesystem-dependent
/// and deliberately not sorted.
fn parse_specs(specs_dir: &Path) -> Result<HashMap<String, RoomSpec>> {
    let mut paths = Vec::new();
    for entry in fs::read_dir(specs_dir)
        .with_context(|| format!("failed to read directory {}", specs_dir.display()))?
    {
        let path = entry?.path();
        let Some(name) = path.file_name().and_then(|n| n.to_str()) else {
            continue;
        };
        if path.is_file() && name.starts_with("room_") && name.ends_with(".md") {
            paths.push(path);
        }
    }

    let pb = ProgressBar::new(paths.len() as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("[{elapsed_precise}] {bar:40} {pos}/{len}")?
            .progress_chars("=> "),
    );

    let mut specs = HashMap::new();
    for path in &paths {
        let spec = parser::parse_room_spec(path)?;
        match spec.number.clone() {
            Some(number) => {
                specs.insert(number, spec);
            }
            None => debug!("no room number in {}, skipping", path.display()),
        }
        pb.inc(1);
    }
    pb.finish_and_clear();

    Ok(specs)
}

/// Overlay extracted fields onto every room record whose `number` has a
/// parsed document. Present fields overwrite same-named keys on the room;
/// every other existing key is untouched. A match counts as updated even
/// when the document carried nothing beyond its number.
fn apply_specs(wings: &mut Value, specs: &HashMap<String, RoomSpec>) -> Result<usize> {
    let wing_list = wings
        .as_array_mut()
        .context("wings document is not a JSON array")?;

    let mut updated = 0;
    for wing in wing_list {
        let Some(rooms) = wing.get_mut("rooms").and_then(Value::as_array_mut) else {
            continue;
        };
        for room in rooms {
            let Some(record) = room.as_object_mut() else {
                continue;
            };
            let Some(number) = record.get("number").and_then(Value::as_str).map(str::to_owned)
            else {
                continue;
            };
            if let Some(spec) = specs.get(&number) {
                for (key, value) in spec.fields() {
                    record.insert(key.to_string(), value);
                }
                updated += 1;
            }
        }
    }
    Ok(updated)
}

// ── Tests ──
