use std::sync::LazyLock;

use regex::Regex;

static HEADING_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?m)^##\s+(?:\d+\.\s*)?(.+?)\s*$").unwrap());

/// One `##`-level section of a room document: the heading title (numbering
/// prefix stripped) and the body text running to the next `##` heading or
/// the end of the document.
#[derive(Debug, Clone, Copy)]
pub struct Section<'a> {
    pub title: &'a str,
    pub body: &'a str,
}

/// Split a document into its `##`-heading sections. Text before the first
/// heading belongs to no section.
pub fn split_sections(content: &str) -> Vec<Section<'_>> {
    let headings: Vec<(usize, usize, &str)> = HEADING_RE
        .captures_iter(content)
        .map(|caps| {
            let whole = caps.get(0).map_or(0..0, |m| m.range());
            let title = caps.get(1).map_or("", |m| m.as_str());
            (whole.start, whole.end, title)
        })
        .collect();

    headings
        .iter()
        .enumerate()
        .map(|(i, &(_, body_start, title))| {
            let body_end = headings.get(i + 1).map_or(content.len(), |h| h.0);
            Section {
                title,
                body: &content[body_start..body_end],
            }
        })
        .collect()
}

/// Find the section whose title contains `keyword`, case-insensitive.
/// The documents are hand-authored, so matching is deliberately loose.
pub fn find_section<'a>(sections: &[Section<'a>], keyword: &str) -> Option<Section<'a>> {
    let keyword = keyword.to_lowercase();
    sections
        .iter()
        .copied()
        .find(|s| s.title.to_lowercase().contains(&keyword))
}

/// Body of the keyword section, cut short at `stop` if that marker appears
/// before the next heading. The Physics prose ends where its `**Equation`
/// line begins.
pub fn section_body_until<'a>(
    sections: &[Section<'a>],
    keyword: &str,
    stop: &str,
) -> Option<&'a str> {
    let section = find_section(sections, keyword)?;
    Some(match section.body.find(stop) {
        Some(idx) => &section.body[..idx],
        None => section.body,
    })
}

// ── Tests ──
