use std::sync::LazyLock;

use regex::Regex;

static EQUATION_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\*\*Equation:\*\*\s*(.+)").unwrap());

/// Value of a single-line bold-labeled field: `**Label:** value`, captured
/// as the rest of the line, trimmed. Labels here are fixed literals.
pub fn labeled_line(text: &str, label: &str) -> Option<String> {
    let re = Regex::new(&format!(r"\*\*{}:\*\*\s*(.+)", label)).ok()?;
    re.captures(text).map(|caps| caps[1].trim().to_string())
}

/// The equation line, shedding one wrapping backtick on each side if the
/// author wrote it as inline code.
pub fn equation(text: &str) -> Option<String> {
    let raw = EQUATION_RE.captures(text).map(|caps| caps[1].trim().to_string())?;
    let eq = raw.strip_prefix('`').unwrap_or(&raw);
    let eq = eq.strip_suffix('`').unwrap_or(eq);
    Some(eq.trim().to_string())
}
