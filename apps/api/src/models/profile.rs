use serde::{Deserialize, Serialize};

/// Contact links found anywhere in the document. Each field is independent;
/// unset fields are omitted from JSON so templates can suppress them.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactFields {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub linkedin: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub github: Option<String>,
}

impl ContactFields {
    pub fn is_empty(&self) -> bool {
        self.email.is_none() && self.phone.is_none() && self.linkedin.is_none() && self.github.is_none()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExperienceEntry {
    pub title: String,
    pub company: String,
    /// Empty when the title line carries no `YYYY - YYYY|present|current` range.
    pub duration: String,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EducationEntry {
    pub degree: String,
    pub institution: String,
    pub year: String,
}

/// Structured profile reconstructed from one document.
///
/// Built once by `extraction::assemble` and handed to the consumer by value.
/// `skills`, `experience` and `education` are never empty: fallbacks fill them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profile {
    pub name: String,
    pub summary: String,
    pub contact: ContactFields,
    pub skills: Vec<String>,
    pub experience: Vec<ExperienceEntry>,
    pub education: Vec<EducationEntry>,
    /// Normalized text the fields were extracted from, lines joined with `\n`.
    pub raw_text: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unset_contact_fields_are_omitted_from_json() {
        let contact = ContactFields {
            email: Some("jane@example.com".to_string()),
            ..Default::default()
        };
        let json = serde_json::to_value(&contact).unwrap();
        assert_eq!(json["email"], "jane@example.com");
        assert!(json.get("phone").is_none());
        assert!(json.get("linkedin").is_none());
        assert!(json.get("github").is_none());
    }

    #[test]
    fn test_contact_deserializes_with_missing_fields() {
        let contact: ContactFields = serde_json::from_str(r#"{"github": "github.com/jane"}"#).unwrap();
        assert_eq!(contact.github.as_deref(), Some("github.com/jane"));
        assert!(contact.email.is_none());
        assert!(!contact.is_empty());
        assert!(ContactFields::default().is_empty());
    }
}
