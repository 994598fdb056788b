use std::sync::LazyLock;

use regex::Regex;
use tracing::debug;

use crate::extraction::vocabulary::{
    DEFAULT_NAME, DEGENERATE_LINE_CHARS, NAME_DISQUALIFIERS, NAME_LOCATION_TOKENS,
    NAME_MAX_LINE_CHARS, NAME_SCAN_LINES,
};

/// Up to two leading capitalized words of a single-line text dump.
static LEADING_CAPITALIZED: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Z][A-Za-z'.-]*(?:[ \t]+[A-Z][A-Za-z'.-]*)?").expect("valid leading name regex")
});

static PHONE_RUN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\+?[0-9][0-9 ().-]{6,}[0-9]").expect("valid phone run regex")
});

static WHITESPACE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+").expect("valid whitespace regex"));

/// Picks the candidate's name from the top of the document, or `DEFAULT_NAME`.
pub fn extract_name(lines: &[String]) -> String {
    if let Some(first) = lines
        .first()
        .filter(|line| line.chars().count() > DEGENERATE_LINE_CHARS)
    {
        if let Some(found) = LEADING_CAPITALIZED.find(first) {
            debug!("name taken from degenerate first line");
            return found.as_str().to_string();
        }
    }

    lines
        .iter()
        .take(NAME_SCAN_LINES)
        .find_map(|line| name_candidate(line))
        .unwrap_or_else(|| {
            debug!("no name candidate in leading lines, using fallback");
            DEFAULT_NAME.to_string()
        })
}

fn name_candidate(line: &str) -> Option<String> {
    let line = line.trim();
    if line.is_empty() || line.chars().count() > NAME_MAX_LINE_CHARS {
        return None;
    }

    let lowered = line.to_lowercase();
    if NAME_DISQUALIFIERS
        .iter()
        .chain(NAME_LOCATION_TOKENS)
        .any(|token| lowered.contains(token))
    {
        return None;
    }

    let stripped = PHONE_RUN.replace_all(line, " ").replace(['+', '/'], " ");
    let cleaned = WHITESPACE.replace_all(&stripped, " ").trim().to_string();
    let len = cleaned.chars().count();

    (len > 5 && len < 50 && cleaned.chars().any(char::is_alphabetic)).then_some(cleaned)
}
