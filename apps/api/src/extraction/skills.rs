use tracing::debug;

use crate::extraction::vocabulary::{DEFAULT_SKILLS, SKILL_VOCABULARY};

/// Matches the fixed skill vocabulary against the skills section.
///
/// Matching is a case-insensitive substring test; results follow vocabulary
/// order. Falls back to `DEFAULT_SKILLS` when nothing matches.
pub fn extract_skills(section: Option<&str>) -> Vec<String> {
    let haystack = section.unwrap_or_default().to_lowercase();

    let found: Vec<String> = SKILL_VOCABULARY
        .iter()
        .filter(|skill| haystack.contains(&skill.to_lowercase()))
        .map(|skill| skill.to_string())
        .collect();

    if found.is_empty() {
        debug!("no known skills in section, using fallback");
        return DEFAULT_SKILLS.iter().map(|s| s.to_string()).collect();
    }
    debug!(count = found.len(), "matched skills");
    found
}
