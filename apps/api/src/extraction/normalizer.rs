//! Text normalization: turns a decoded document blob into scannable lines.
//!
//! Decoders hand over text with layout artifacts: several logical lines glued
//! into one, repeated runs, ragged spacing. Normalization only inserts line
//! breaks and collapses whitespace; it never invents content.
//!
//! A break is inserted before:
//! - section header tokens in any case (`Summary`, `work experience`, ...),
//!   unless the token is part of an email address or link
//! - capitalized category labels ending in `:` (`Backend:`, `AI Tools:`)
//! - the role lead-in `as` followed by a space (`... as a Software Engineer`)
//! - bullet glyphs and numbered markers followed by a capital (`2. Led`)
//! - `MM/YYYY` / `MM-YYYY` dates, unless they close a range
//!
//! No break is inserted where the token already opens a line, so running the
//! normalizer over its own output changes nothing.

use std::sync::LazyLock;

use regex::{Captures, Regex};
use tracing::trace;

/// One or two capitalized words closed by a colon.
const LABEL: &str = r"[A-Z][A-Za-z/&+]*(?:[ \t][A-Z][A-Za-z/&+]*)?:";

static SENTENCE_THEN_LABEL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(r"\.[ \t]+({LABEL})")).expect("valid sentence label regex")
});

static SECTION_HEADER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)[ \t]*\b(work experience|technical skills|summary|experience|education|projects)\b",
    )
    .expect("valid section header regex")
});

static CATEGORY_LABEL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(r"[ \t]+({LABEL})")).expect("valid category label regex")
});

/// Only `as` itself is matched; the following space is checked, not consumed,
/// so `as as` breaks twice in one pass.
static ROLE_LEAD_IN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[ \t]+as").expect("valid role lead-in regex"));

static BULLET: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[ \t]*([•●])").expect("valid bullet regex"));

static NUMBERED_ITEM: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"[ \t]+([0-9]{1,2}\.[ \t]*[A-Z])").expect("valid numbered item regex")
});

static MONTH_YEAR: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"[ \t]*\b((?:0?[1-9]|1[0-2])[/-](?:19|20)[0-9]{2})\b")
        .expect("valid month/year regex")
});

static WIDE_SPACE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^\S\n]{3,}").expect("valid wide space regex"));

static BLANK_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\n{3,}").expect("valid blank run regex"));

/// Characters that, right before a date, mean it closes a range (`01/2020 - 03/2022`).
const RANGE_JOINERS: [char; 4] = ['-', '–', '—', '/'];

/// Cleaned document text, available both joined and as lines.
///
/// Lines are trimmed, consecutive duplicates are gone, and there is never
/// more than one empty line in a row (nor any at either end).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NormalizedText {
    text: String,
    lines: Vec<String>,
}

impl NormalizedText {
    pub fn as_str(&self) -> &str {
        &self.text
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn into_string(self) -> String {
        self.text
    }
}

/// Normalizes a raw document blob. Empty or whitespace-only input yields an
/// empty `NormalizedText`.
pub fn normalize(raw: &str) -> NormalizedText {
    let text = raw.replace("\r\n", "\n").replace(['\r', '\x0C'], "\n");

    let text = SENTENCE_THEN_LABEL.replace_all(&text, ".\n\n$1").into_owned();
    let text = break_before(&text, &SECTION_HEADER, |line, rest, caps| {
        !inside_address(line, rest, caps)
    });
    let text = break_before_labels(&text);
    let text = break_before(&text, &ROLE_LEAD_IN, |_, rest, _| rest.starts_with(' '));
    let text = break_before(&text, &BULLET, |_, _, _| true);
    let text = break_before(&text, &NUMBERED_ITEM, |_, _, _| true);
    let text = break_before(&text, &MONTH_YEAR, |line, _, _| {
        !line.trim_end().ends_with(RANGE_JOINERS)
    });

    let text = WIDE_SPACE.replace_all(&text, " ");
    let text = BLANK_RUN.replace_all(&text, "\n\n");

    let lines = clean_lines(&text);
    trace!(input_len = raw.len(), lines = lines.len(), "normalized document text");

    NormalizedText {
        text: lines.join("\n"),
        lines,
    }
}

/// Replaces each match of `pattern` with a line break followed by the match
/// minus its leading blanks. Matches that already open a line, or that
/// `allow` rejects, are left alone. `allow` sees the current line up to the
/// match and the text after it.
fn break_before<F>(text: &str, pattern: &Regex, allow: F) -> String
where
    F: Fn(&str, &str, &Captures) -> bool,
{
    pattern
        .replace_all(text, |caps: &Captures| {
            let whole = &caps[0];
            let (start, end) = caps.get(0).map_or((0, 0), |m| (m.start(), m.end()));
            let line_so_far = text[..start].rsplit('\n').next().unwrap_or("");

            if line_so_far.trim().is_empty() || !allow(line_so_far, &text[end..], caps) {
                whole.to_string()
            } else {
                format!("\n{}", whole.trim_start_matches([' ', '\t']))
            }
        })
        .into_owned()
}

/// Category labels get their own pass: in `Rust, Go Frontend:` the two-word
/// match is really a list item followed by a one-word label.
fn break_before_labels(text: &str) -> String {
    CATEGORY_LABEL
        .replace_all(text, |caps: &Captures| {
            let start = caps.get(0).map_or(0, |m| m.start());
            let line_so_far = text[..start].rsplit('\n').next().unwrap_or("");
            let label = &caps[1];

            if line_so_far.trim().is_empty() {
                return caps[0].to_string();
            }
            match label.split_once([' ', '\t']) {
                Some((item, label)) if line_so_far.trim_end().ends_with(',') => {
                    format!(" {item}\n{label}")
                }
                _ => format!("\n{label}"),
            }
        })
        .into_owned()
}

/// Whether the matched token is glued into a word containing `@` or `/`,
/// as in `education@uni.edu` or `linkedin.com/in/summary`.
fn inside_address(line_so_far: &str, rest: &str, caps: &Captures) -> bool {
    let prefix = if caps[0].starts_with([' ', '\t']) {
        ""
    } else {
        line_so_far
            .rsplit(char::is_whitespace)
            .next()
            .unwrap_or("")
    };
    let suffix = rest.split(char::is_whitespace).next().unwrap_or("");
    [prefix, suffix]
        .iter()
        .any(|part| part.contains(['@', '/']))
}

fn clean_lines(text: &str) -> Vec<String> {
    let mut lines: Vec<String> = Vec::new();
    let mut last_content: Option<&str> = None;

    for line in text.split('\n').map(str::trim) {
        if line.is_empty() {
            if lines.last().is_some_and(|l| !l.is_empty()) {
                lines.push(String::new());
            }
            continue;
        }
        if last_content == Some(line) {
            continue;
        }
        last_content = Some(line);
        lines.push(line.to_string());
    }

    while lines.last().is_some_and(|l| l.is_empty()) {
        lines.pop();
    }
    lines
}
