use std::sync::LazyLock;

use regex::Regex;

use crate::parser::sections::{find_section, section_body_until, Section};

static QUOTE_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r#"(?s)>\s*"(.+?)""#).unwrap());

/// The free-prose fields of a room document.
pub struct Narrative {
    pub physics_description: Option<String>,
    pub quote: Option<String>,
    pub description: Option<String>,
}

pub fn extract(sections: &[Section<'_>]) -> Narrative {
    let physics_description = section_body_until(sections, "physics", "**Equation")
        .map(flatten)
        .filter(|s| !s.is_empty());

    // The quote is the `>`-blockquoted double-quoted text in the Evocative
    // Why section; the description is whatever prose follows it. Without a
    // quote there is no anchor, so both come back absent.
    let (quote, description) = match find_section(sections, "evocative why") {
        Some(section) => match QUOTE_RE.captures(section.body) {
            Some(caps) => {
                let quote = caps[1].trim().replace('\n', " ");
                let tail_start = caps.get(0).map_or(section.body.len(), |m| m.end());
                let description =
                    Some(flatten(&section.body[tail_start..])).filter(|s| !s.is_empty());
                (Some(quote), description)
            }
            None => (None, None),
        },
        None => (None, None),
    };

    Narrative {
        physics_description,
        quote,
        description,
    }
}

/// Collapse a prose block to one line: trim, then newlines become spaces.
fn flatten(text: &str) -> String {
    text.trim().replace('\n', " ")
}
