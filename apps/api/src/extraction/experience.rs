//! Experience entries: a dated line opens an entry; the next line is the company.
//!
//! The scan is a fold over the section lines carrying the entries built so far
//! and the entry in progress. Lookahead for company and description reads the
//! full line list, so an entry near the end of the scan window still sees them.

use std::sync::LazyLock;

use regex::Regex;
use tracing::debug;

use crate::extraction::sections::section_lines;
use crate::extraction::vocabulary::{
    EXPERIENCE_CAP, EXPERIENCE_DESCRIPTION_LINES, EXPERIENCE_HEADER_WORDS, EXPERIENCE_SCAN_LINES,
    PLACEHOLDER_COMPANY, PLACEHOLDER_DESCRIPTION, PLACEHOLDER_DURATION, PLACEHOLDER_TITLE,
};
use crate::models::profile::ExperienceEntry;

static DATED_LINE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[0-9]{4}|[0-9]{2}/[0-9]{2}").expect("valid dated line regex"));

static DURATION: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)[0-9]{4}\s*[-–—]\s*(?:[0-9]{4}|present|current)").expect("valid duration regex")
});

#[derive(Debug, Default)]
struct ExperienceScan {
    entries: Vec<ExperienceEntry>,
    pending: Option<ExperienceEntry>,
}

impl ExperienceScan {
    /// Flushes the entry in progress and starts `entry`.
    fn start(self, entry: ExperienceEntry) -> Self {
        let mut entries = self.entries;
        entries.extend(self.pending);
        Self {
            entries,
            pending: Some(entry),
        }
    }

    fn finish(self) -> Vec<ExperienceEntry> {
        let mut entries = self.entries;
        entries.extend(self.pending);
        entries
    }
}

pub fn extract_experience(section: Option<&str>) -> Vec<ExperienceEntry> {
    let lines = section_lines(section);

    let mut entries = lines
        .iter()
        .enumerate()
        .take(EXPERIENCE_SCAN_LINES)
        .fold(ExperienceScan::default(), |scan, (index, line)| {
            if is_stray_header(line) || !DATED_LINE.is_match(line) {
                return scan;
            }
            scan.start(entry_at(&lines, index))
        })
        .finish();

    if entries.is_empty() {
        debug!("no dated experience lines, using placeholder entry");
        entries.push(placeholder());
    }
    entries.truncate(EXPERIENCE_CAP);
    entries
}

fn is_stray_header(line: &str) -> bool {
    let lowered = line.to_lowercase();
    EXPERIENCE_HEADER_WORDS
        .iter()
        .any(|word| lowered.contains(word))
}

fn entry_at(lines: &[&str], index: usize) -> ExperienceEntry {
    let title = lines[index];
    ExperienceEntry {
        title: title.to_string(),
        company: lines.get(index + 1).copied().unwrap_or_default().to_string(),
        duration: DURATION
            .find(title)
            .map(|m| m.as_str().to_string())
            .unwrap_or_default(),
        description: lines
            .iter()
            .skip(index + 2)
            .take(EXPERIENCE_DESCRIPTION_LINES)
            .copied()
            .collect::<Vec<_>>()
            .join(" "),
    }
}

fn placeholder() -> ExperienceEntry {
    ExperienceEntry {
        title: PLACEHOLDER_TITLE.to_string(),
        company: PLACEHOLDER_COMPANY.to_string(),
        duration: PLACEHOLDER_DURATION.to_string(),
        description: PLACEHOLDER_DESCRIPTION.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_entry_with_duration_and_description() {
        let section = "Senior Engineer 2019 - 2022\nAcme Corp\nBuilt distributed systems.\nLed a team of 5.";
        let entries = extract_experience(Some(section));
        assert_eq!(entries.len(), 1);
        let entry = &entries[0];
        assert_eq!(entry.title, "Senior Engineer 2019 - 2022");
        assert_eq!(entry.company, "Acme Corp");
        assert_eq!(entry.duration, "2019 - 2022");
        assert!(entry.description.contains("Built distributed systems."));
        assert!(entry.description.contains("Led a team of 5."));
    }

    #[test]
    fn test_entries_keep_source_order() {
        let section = "Lead 2021 - Present\nGlobex\nScaled the platform\n\nEngineer 2018 - 2021\nInitech\nWrote services";
        let entries = extract_experience(Some(section));
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].company, "Globex");
        assert_eq!(entries[0].duration, "2021 - Present");
        assert_eq!(entries[1].company, "Initech");
        assert_eq!(entries[1].description, "Wrote services");
    }

    #[test]
    fn test_description_takes_at_most_three_lines() {
        let section = "Dev 2020\nAcme\none\ntwo\nthree\nfour";
        let entries = extract_experience(Some(section));
        assert_eq!(entries[0].description, "one two three");
    }

    #[test]
    fn test_duration_variants() {
        let entries = extract_experience(Some("Analyst 2017 – current\nBank"));
        assert_eq!(entries[0].duration, "2017 – current");

        let entries = extract_experience(Some("Analyst since 2017\nBank"));
        assert_eq!(entries[0].duration, "");
    }

    #[test]
    fn test_month_day_dates_open_entries() {
        let entries = extract_experience(Some("Intern 06/15 to 09/15\nStartup"));
        assert_eq!(entries[0].title, "Intern 06/15 to 09/15");
        assert_eq!(entries[0].company, "Startup");
    }

    #[test]
    fn test_stray_headers_are_skipped() {
        let section = "Professional Experience 2015\nEngineer 2016 - 2020\nAcme";
        let entries = extract_experience(Some(section));
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].title, "Engineer 2016 - 2020");
    }

    #[test]
    fn test_at_most_three_entries() {
        let section = (2010..2016)
            .map(|year| format!("Role {year}\nAcme"))
            .collect::<Vec<_>>()
            .join("\n");
        let entries = extract_experience(Some(&section));
        assert_eq!(entries.len(), EXPERIENCE_CAP);
        assert_eq!(entries[0].title, "Role 2010");
        assert_eq!(entries[2].title, "Role 2012");
    }

    #[test]
    fn test_only_first_fifteen_lines_are_scanned() {
        let mut lines: Vec<String> = (0..15).map(|i| format!("Note {}", "x".repeat(i + 1))).collect();
        lines.push("Engineer 2020".to_string());
        let entries = extract_experience(Some(&lines.join("\n")));
        assert_eq!(entries, vec![placeholder()]);
    }

    #[test]
    fn test_missing_section_yields_placeholder() {
        let entries = extract_experience(None);
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].title, PLACEHOLDER_TITLE);
        assert_eq!(entries[0].duration, PLACEHOLDER_DURATION);
    }
}
