use std::sync::LazyLock;

use regex::Regex;

use super::NamedItem;
use crate::parser::sections::{find_section, Section};

static BULLET_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"-\s*\*\*(.+?)\*\*[:\s]*(.+)").unwrap());

/// Ordered `- **Name**: Description` bullets of the keyword section.
/// A missing section or one with no matching bullets yields `None`,
/// never an empty list.
pub fn extract(sections: &[Section<'_>], keyword: &str) -> Option<Vec<NamedItem>> {
    let section = find_section(sections, keyword)?;
    let items: Vec<NamedItem> = BULLET_RE
        .captures_iter(section.body)
        .map(|caps| NamedItem {
            name: caps[1].trim().to_string(),
            description: caps[2].trim().to_string(),
        })
        .collect();
    if items.is_empty() {
        None
    } else {
        Some(items)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::sections::split_sections;

    #[test]
    fn bullets_in_document_order() {
        let md = "## 4. The Architecture\n\n- **A**: desc1\n- **B**: desc2\n";
        let items = extract(&split_sections(md), "architecture").unwrap();
        assert_eq!(items.len(), 2);
        assert_eq!(items[0], NamedItem { name: "A".into(), description: "desc1".into() });
        assert_eq!(items[1], NamedItem { name: "B".into(), description: "desc2".into() });
    }

    #[test]
    fn section_without_bullets_is_absent() {
        let md = "## 5. The Altar\n\nOnly prose, nothing listed.\n";
        assert!(extract(&split_sections(md), "altar").is_none());
    }

    #[test]
    fn missing_section_is_absent() {
        assert!(extract(&split_sections("## 1. The Function\n\ntext\n"), "altar").is_none());
    }

    #[test]
    fn bullets_outside_the_section_are_ignored() {
        let md = "## 4. The Architecture\n\n- **Wall**: stone\n\n## 5. The Altar\n\n- **Candle**: wax\n";
        let sections = split_sections(md);
        let constraints = extract(&sections, "architecture").unwrap();
        assert_eq!(constraints.len(), 1);
        assert_eq!(constraints[0].name, "Wall");
        let altar = extract(&sections, "altar").unwrap();
        assert_eq!(altar.len(), 1);
        assert_eq!(altar[0].name, "Candle");
    }

    #[test]
    fn name_and_description_are_trimmed() {
        let md = "## 4. The Architecture\n\n- ** Sealed door **:  No inputs after start.  \n";
        let items = extract(&split_sections(md), "architecture").unwrap();
        assert_eq!(items[0].name, "Sealed door");
        assert_eq!(items[0].description, "No inputs after start.");
    }
}
