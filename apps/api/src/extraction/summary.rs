//! Summary: the prose following a `Summary:` marker, tidied and capped.

use std::sync::LazyLock;

use regex::Regex;
use tracing::debug;

use crate::extraction::vocabulary::{
    DEFAULT_SUMMARY, ELLIPSIS, SUMMARY_MAX_CHARS, SUMMARY_MIN_CHARS, SUMMARY_MIN_SENTENCE_CUT,
    SUMMARY_STOPS,
};

static MARKER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)summary:").expect("valid summary marker regex"));

/// One case-insensitive pattern per stop phrase, in priority order.
static STOPS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    SUMMARY_STOPS
        .iter()
        .map(|phrase| {
            Regex::new(&format!("(?i){}", regex::escape(phrase))).expect("valid summary stop regex")
        })
        .collect()
});

static WHITESPACE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+").expect("valid whitespace regex"));
static SPACE_BEFORE_PUNCT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+([,.])").expect("valid punctuation regex"));
static COMMA_GLUED: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r",(\S)").expect("valid comma regex"));
static SENTENCE_GLUED: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\.([A-Z])").expect("valid sentence regex"));

/// Extracts the summary, or `DEFAULT_SUMMARY` when there is no usable one.
pub fn extract_summary(text: &str) -> String {
    let summary = summary_body(text)
        .map(tidy)
        .map(cap_length)
        .filter(|summary| summary.chars().count() > SUMMARY_MIN_CHARS);

    summary.unwrap_or_else(|| {
        debug!("no usable summary, using fallback");
        DEFAULT_SUMMARY.to_string()
    })
}

/// Text after the first `summary:` marker up to the first stop phrase found,
/// trying stop phrases in priority order rather than by position.
fn summary_body(text: &str) -> Option<&str> {
    let rest = &text[MARKER.find(text)?.end()..];
    let end = STOPS
        .iter()
        .find_map(|stop| stop.find(rest))
        .map_or(rest.len(), |m| m.start());
    Some(&rest[..end])
}

fn tidy(body: &str) -> String {
    let text = WHITESPACE.replace_all(body, " ");
    let text = SPACE_BEFORE_PUNCT.replace_all(&text, "$1");
    let text = COMMA_GLUED.replace_all(&text, ", $1");
    let text = SENTENCE_GLUED.replace_all(&text, ". $1");
    text.trim().to_string()
}

/// Caps the summary at `SUMMARY_MAX_CHARS`, cutting at the last full sentence
/// when one ends late enough, otherwise at the last word with an ellipsis.
fn cap_length(summary: String) -> String {
    if summary.chars().count() <= SUMMARY_MAX_CHARS {
        return summary;
    }

    let truncated: String = summary.chars().take(SUMMARY_MAX_CHARS).collect();
    match truncated.rfind('.') {
        Some(period) if truncated[..period].chars().count() > SUMMARY_MIN_SENTENCE_CUT => {
            truncated[..=period].to_string()
        }
        _ => {
            let cut = truncated.rfind(' ').unwrap_or(truncated.len());
            format!("{}{ELLIPSIS}", truncated[..cut].trim_end())
        }
    }
}
