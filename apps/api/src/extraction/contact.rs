//! Contact fields: email, phone, LinkedIn and GitHub links via fixed patterns.

use std::sync::LazyLock;

use regex::Regex;

use crate::models::profile::ContactFields;

static EMAIL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"[\w.+-]+@[\w-]+(?:\.[\w-]+)*\.[A-Za-z]{2,}").expect("valid email regex")
});

static PHONE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?:\+?[0-9]{1,3}[-. ]?)?\(?[0-9]{3}\)?[-. ]?[0-9]{3}[-. ]?[0-9]{4}")
        .expect("valid phone regex")
});

static LINKEDIN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)(?:https?://)?(?:www\.)?linkedin\.com/in/[\w-]+").expect("valid linkedin regex")
});

static GITHUB: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)(?:https?://)?(?:www\.)?github\.com/[\w-]+").expect("valid github regex")
});

fn first(pattern: &Regex, text: &str) -> Option<String> {
    pattern.find(text).map(|m| m.as_str().to_string())
}

/// Extracts every contact field independently; the first match of each wins.
pub fn extract_contact(text: &str) -> ContactFields {
    ContactFields {
        email: first(&EMAIL, text),
        phone: first(&PHONE, text),
        linkedin: first(&LINKEDIN, text),
        github: first(&GITHUB, text),
    }
}
