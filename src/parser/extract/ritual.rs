use std::sync::LazyLock;

use regex::Regex;

use super::{Liturgy, Trap};
use crate::parser::sections::{find_section, Section};

static ENTRY_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\*\*Entry:\*\*\s*(.+)").unwrap());
static EXIT_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\*\*Exit:\*\*\s*(.+)").unwrap());
static STEP_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\*\*Step\s*\d*[:\s]*\*\*\s*(.+)").unwrap());
static LEAK_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\*\*The Leak:\*\*\s*(.+)").unwrap());
static RESULT_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\*\*The Result:\*\*\s*(.+)").unwrap());

/// The Liturgy section: entry/exit plus steps numbered by order of
/// appearance, whatever digits the author put in the labels.
pub fn liturgy(sections: &[Section<'_>]) -> Option<Liturgy> {
    let section = find_section(sections, "liturgy")?;
    let liturgy = Liturgy {
        entry: capture(&ENTRY_RE, section.body),
        exit: capture(&EXIT_RE, section.body),
        steps: STEP_RE
            .captures_iter(section.body)
            .map(|caps| caps[1].trim().to_string())
            .collect(),
    };
    if liturgy.is_empty() {
        None
    } else {
        Some(liturgy)
    }
}

/// The Trap section: the leak and its result.
pub fn trap(sections: &[Section<'_>]) -> Option<Trap> {
    let section = find_section(sections, "trap")?;
    let trap = Trap {
        leak: capture(&LEAK_RE, section.body),
        result: capture(&RESULT_RE, section.body),
    };
    if trap.is_empty() {
        None
    } else {
        Some(trap)
    }
}

fn capture(re: &Regex, text: &str) -> Option<String> {
    re.captures(text).map(|caps| caps[1].trim().to_string())
}
