use std::sync::LazyLock;

use regex::Regex;
use tracing::debug;

use crate::extraction::sections::section_lines;
use crate::extraction::vocabulary::{
    DEGREE_MARKERS, EDUCATION_CAP, EDUCATION_HEADER_WORDS, EDUCATION_SCAN_LINES,
    PLACEHOLDER_DEGREE, PLACEHOLDER_INSTITUTION, PLACEHOLDER_YEAR,
};
use crate::models::profile::EducationEntry;

static YEAR: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[0-9]{4}").expect("valid year regex"));

/// Each degree-looking line becomes an entry, with the following line as
/// the institution.
pub fn extract_education(section: Option<&str>) -> Vec<EducationEntry> {
    let lines = section_lines(section);

    let mut entries: Vec<EducationEntry> = lines
        .iter()
        .enumerate()
        .take(EDUCATION_SCAN_LINES)
        .filter(|(_, line)| is_degree_line(line))
        .map(|(index, degree)| {
            let institution = lines.get(index + 1).copied().unwrap_or_default();
            EducationEntry {
                degree: degree.to_string(),
                institution: institution.to_string(),
                year: first_year(degree)
                    .or_else(|| first_year(institution))
                    .unwrap_or_default(),
            }
        })
        .collect();

    if entries.is_empty() {
        debug!("no degree lines, using placeholder entry");
        entries.push(EducationEntry {
            degree: PLACEHOLDER_DEGREE.to_string(),
            institution: PLACEHOLDER_INSTITUTION.to_string(),
            year: PLACEHOLDER_YEAR.to_string(),
        });
    }
    entries.truncate(EDUCATION_CAP);
    entries
}

fn is_degree_line(line: &str) -> bool {
    let lowered = line.to_lowercase();
    if EDUCATION_HEADER_WORDS.iter().any(|word| lowered.contains(word)) {
        return false;
    }
    line.chars().count() > 5 && DEGREE_MARKERS.iter().any(|marker| lowered.contains(marker))
}

fn first_year(text: &str) -> Option<String> {
    YEAR.find(text).map(|m| m.as_str().to_string())
}
