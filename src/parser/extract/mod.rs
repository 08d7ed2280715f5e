pub mod checklist;
pub mod narrative;
pub mod ritual;
pub mod scalars;

use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};
use serde_json::{json, Map, Value};

use super::sections;

/// A named bullet item from one of the list sections
/// (`- **Name**: Description`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NamedItem {
    pub name: String,
    pub description: String,
}

/// The liturgy protocol: optional entry/exit lines plus the steps in their
/// order of appearance.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Liturgy {
    pub entry: Option<String>,
    pub exit: Option<String>,
    pub steps: Vec<String>,
}

impl Liturgy {
    pub fn is_empty(&self) -> bool {
        self.entry.is_none() && self.exit.is_none() && self.steps.is_empty()
    }
}

// Serialized as `entry`, `exit`, then `step_1..step_n`. Step numbering is
// by appearance order; digits printed in the source labels are ignored.
impl Serialize for Liturgy {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(None)?;
        if let Some(entry) = &self.entry {
            map.serialize_entry("entry", entry)?;
        }
        if let Some(exit) = &self.exit {
            map.serialize_entry("exit", exit)?;
        }
        for (i, step) in self.steps.iter().enumerate() {
            map.serialize_entry(&format!("step_{}", i + 1), step)?;
        }
        map.end()
    }
}

/// The failure mode of a room: how focus leaks and what it costs.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Trap {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub leak: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<String>,
}

impl Trap {
    pub fn is_empty(&self) -> bool {
        self.leak.is_none() && self.result.is_none()
    }
}

/// Everything recoverable from one room document. A field the document does
/// not carry stays `None` and never reaches the persisted JSON.
#[derive(Debug, Clone, Default, Serialize)]
pub struct RoomSpec {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub number: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub archetype: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub physics_description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub equation: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub input_logic: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub output_logic: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub evocative_quote: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub evocative_description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub constraints: Option<Vec<NamedItem>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub altar: Option<Vec<NamedItem>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub liturgy: Option<Liturgy>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub trap: Option<Trap>,
}

/// Run every field extractor over one document. Each extraction is an
/// independent best-effort match; none can fail, only come back empty.
pub fn extract_all(number: Option<String>, content: &str) -> RoomSpec {
    let sections = sections::split_sections(content);
    let narrative = narrative::extract(&sections);

    RoomSpec {
        number,
        archetype: scalars::labeled_line(content, "Archetype"),
        physics_description: narrative.physics_description,
        equation: scalars::equation(content),
        input_logic: scalars::labeled_line(content, "Input Logic"),
        output_logic: scalars::labeled_line(content, "Output Logic"),
        evocative_quote: narrative.quote,
        evocative_description: narrative.description,
        constraints: checklist::extract(&sections, "architecture"),
        altar: checklist::extract(&sections, "altar"),
        liturgy: ritual::liturgy(&sections),
        trap: ritual::trap(&sections),
    }
}

impl RoomSpec {
    /// Present fields in persistence order, ready to overlay onto a room
    /// record. `number` is the merge key and is not re-copied.
    pub fn fields(&self) -> Vec<(&'static str, Value)> {
        let mut out: Vec<(&'static str, Value)> = Vec::new();

        let scalars: [(&'static str, &Option<String>); 7] = [
            ("archetype", &self.archetype),
            ("physics_description", &self.physics_description),
            ("equation", &self.equation),
            ("input_logic", &self.input_logic),
            ("output_logic", &self.output_logic),
            ("evocative_quote", &self.evocative_quote),
            ("evocative_description", &self.evocative_description),
        ];
        for (key, value) in scalars {
            if let Some(v) = value {
                out.push((key, Value::String(v.clone())));
            }
        }

        for (key, items) in [("constraints", &self.constraints), ("altar", &self.altar)] {
            if let Some(items) = items {
                let list = items
                    .iter()
                    .map(|item| json!({ "name": item.name, "description": item.description }))
                    .collect();
                out.push((key, Value::Array(list)));
            }
        }

        if let Some(liturgy) = &self.liturgy {
            let mut map = Map::new();
            if let Some(entry) = &liturgy.entry {
                map.insert("entry".into(), Value::String(entry.clone()));
            }
            if let Some(exit) = &liturgy.exit {
                map.insert("exit".into(), Value::String(exit.clone()));
            }
            for (i, step) in liturgy.steps.iter().enumerate() {
                map.insert(format!("step_{}", i + 1), Value::String(step.clone()));
            }
            out.push(("liturgy", Value::Object(map)));
        }

        if let Some(trap) = &self.trap {
            let mut map = Map::new();
            if let Some(leak) = &trap.leak {
                map.insert("leak".into(), Value::String(leak.clone()));
            }
            if let Some(result) = &trap.result {
                map.insert("result".into(), Value::String(result.clone()));
            }
            out.push(("trap", Value::Object(map)));
        }

        out
    }
}

// ── Tests ──

#[cfg(test)]
mod tests {
    use super::*;

    fn fixture(name: &str) -> String {
        std::fs::read_to_string(format!("tests/fixtures/{}.md", name)).unwrap()
    }

    #[test]
    fn laboratory_full_record() {
        let spec = extract_all(Some("031".into()), &fixture("room_031_the_laboratory"));
        assert_eq!(spec.number.as_deref(), Some("031"));
        assert_eq!(spec.archetype.as_deref(), Some("The Reactor"));
        assert!(spec.physics_description.is_some());
        assert!(spec.equation.is_some());
        assert!(spec.evocative_quote.is_some());
        assert!(spec.evocative_description.is_some());
        assert_eq!(spec.constraints.as_ref().map(Vec::len), Some(3));
        assert_eq!(spec.altar.as_ref().map(Vec::len), Some(2));
        assert!(spec.liturgy.is_some());
        assert!(spec.trap.is_some());
    }

    #[test]
    fn archive_sparse_record() {
        let spec = extract_all(Some("007".into()), &fixture("room_007_the_archive"));
        assert_eq!(spec.archetype.as_deref(), Some("The Vault"));
        assert!(spec.altar.is_none());
        assert!(spec.liturgy.is_none());
        assert!(spec.trap.is_none());
        assert!(spec.equation.is_none());
    }

    #[test]
    fn empty_document_yields_only_number() {
        let spec = extract_all(Some("099".into()), "nothing recognizable here");
        assert!(spec.fields().is_empty());
        assert_eq!(spec.number.as_deref(), Some("099"));
    }

    #[test]
    fn fields_keep_persistence_order() {
        let spec = extract_all(Some("031".into()), &fixture("room_031_the_laboratory"));
        let keys: Vec<&str> = spec.fields().into_iter().map(|(k, _)| k).collect();
        assert_eq!(
            keys,
            vec![
                "archetype",
                "physics_description",
                "equation",
                "input_logic",
                "output_logic",
                "evocative_quote",
                "evocative_description",
                "constraints",
                "altar",
                "liturgy",
                "trap",
            ]
        );
    }

    #[test]
    fn liturgy_serializes_steps_by_appearance() {
        let liturgy = Liturgy {
            entry: Some("sit down".into()),
            exit: None,
            steps: vec!["pour".into(), "ignite".into()],
        };
        let value = serde_json::to_value(&liturgy).unwrap();
        assert_eq!(value["entry"], "sit down");
        assert_eq!(value["step_1"], "pour");
        assert_eq!(value["step_2"], "ignite");
        assert!(value.get("exit").is_none());
    }
}
