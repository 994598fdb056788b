//! Profile assembly: runs the whole pipeline over one decoded document.
//!
//! `assemble` is total: any string, including "", yields a fully populated
//! `Profile`, with fallbacks standing in wherever a heuristic finds nothing.
//! It is pure and synchronous; callers on the async runtime should move it
//! onto `spawn_blocking` together with decoding.

use tracing::debug;

use crate::extraction::contact::extract_contact;
use crate::extraction::education::extract_education;
use crate::extraction::experience::extract_experience;
use crate::extraction::name::extract_name;
use crate::extraction::normalizer::normalize;
use crate::extraction::sections::locate;
use crate::extraction::skills::extract_skills;
use crate::extraction::summary::extract_summary;
use crate::extraction::vocabulary::{EDUCATION_HEADERS, EXPERIENCE_HEADERS, SKILLS_HEADERS};
use crate::models::profile::Profile;

pub fn assemble(raw: &str) -> Profile {
    let normalized = normalize(raw);

    let contact = extract_contact(normalized.as_str());
    let name = extract_name(normalized.lines());
    let summary = extract_summary(normalized.as_str());
    let skills = extract_skills(locate(&normalized, SKILLS_HEADERS).as_deref());
    let experience = extract_experience(locate(&normalized, EXPERIENCE_HEADERS).as_deref());
    let education = extract_education(locate(&normalized, EDUCATION_HEADERS).as_deref());

    debug!(
        lines = normalized.lines().len(),
        skills = skills.len(),
        experience = experience.len(),
        education = education.len(),
        has_email = contact.email.is_some(),
        "assembled profile"
    );

    Profile {
        name,
        summary,
        contact,
        skills,
        experience,
        education,
        raw_text: normalized.into_string(),
    }
}
