//! Section location: finds the lines belonging to one logical resume section.
//!
//! Header keywords are tried in the caller's priority order; a section runs
//! until the next line that reads as any known section header.

use tracing::trace;

use crate::extraction::normalizer::NormalizedText;
use crate::extraction::vocabulary::SECTION_BOUNDARIES;

/// Tries `candidates` in order and returns the first result `attempt` yields.
pub fn first_match<'a, T, F>(candidates: &[&'a str], attempt: F) -> Option<T>
where
    F: FnMut(&'a str) -> Option<T>,
{
    candidates.iter().copied().find_map(attempt)
}

/// Whether `line` reads as the header `keyword`.
///
/// Compared trimmed and lowercased, a line matches when it equals the keyword,
/// starts with the keyword followed by a space or colon, or equals the keyword
/// with its spaces squeezed out (`workexperience`). A trailing colon is ignored.
pub fn is_header_line(line: &str, keyword: &str) -> bool {
    let lowered = line.trim().to_lowercase();
    let line = lowered.strip_suffix(':').unwrap_or(&lowered).trim_end();

    line == keyword
        || line.starts_with(&format!("{keyword} "))
        || line.starts_with(&format!("{keyword}:"))
        || line == keyword.split_whitespace().collect::<String>()
}

fn is_boundary(line: &str) -> bool {
    SECTION_BOUNDARIES
        .iter()
        .any(|term| is_header_line(line, term))
}

/// Text on the header line after the keyword, e.g. `Python, Go` in
/// `Skills: Python, Go`.
fn header_tail<'a>(line: &'a str, keyword: &str) -> &'a str {
    line.trim()
        .get(keyword.len()..)
        .unwrap_or("")
        .trim_start()
        .trim_start_matches(':')
        .trim()
}

/// Returns the text of the first section introduced by one of `keywords`.
///
/// For each keyword in order, the first header line is found and the section
/// collects the lines after it up to (not including) the next boundary
/// header, or to the end of the text. Content sharing the header line leads
/// the section. Keywords whose section is empty are skipped.
pub fn locate(text: &NormalizedText, keywords: &[&str]) -> Option<String> {
    let lines = text.lines();

    first_match(keywords, |keyword| {
        let start = lines
            .iter()
            .position(|line| is_header_line(line, keyword))?;
        let body = &lines[start + 1..];
        let end = body
            .iter()
            .position(|line| is_boundary(line))
            .unwrap_or(body.len());

        let tail = header_tail(&lines[start], keyword);
        let section = std::iter::once(tail)
            .chain(body[..end].iter().map(String::as_str))
            .collect::<Vec<_>>()
            .join("\n");
        let section = section.trim();

        if section.is_empty() {
            trace!(keyword, "section header found but section is empty");
            return None;
        }
        trace!(keyword, header_line = start, lines = end, "located section");
        Some(section.to_string())
    })
}

/// Trimmed, non-empty lines of a located section (none when it is unset).
pub fn section_lines(section: Option<&str>) -> Vec<&str> {
    section
        .unwrap_or_default()
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect()
}
