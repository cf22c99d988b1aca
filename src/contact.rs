//! Contact form handling
//!
//! Submissions are accepted as-is and dropped after acknowledgement. There is
//! no validation and no storage.

use serde::Deserialize;

/// Fields posted by the contact form, each optional
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct ContactSubmission {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
}

impl ContactSubmission {
    /// Which fields were supplied, for logging without recording contents
    pub fn present_fields(&self) -> Vec<&'static str> {
        [
            ("name", &self.name),
            ("email", &self.email),
            ("message", &self.message),
        ]
        .into_iter()
        .filter(|(_, value)| value.is_some())
        .map(|(field, _)| field)
        .collect()
    }
}

/// State of the contact page
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ContactForm {
    #[default]
    Unsubmitted,
    Acknowledged,
}

impl ContactForm {
    /// Accept a submission; any combination of fields is acknowledged
    pub fn submit(self, submission: &ContactSubmission) -> Self {
        tracing::debug!(
            fields = ?submission.present_fields(),
            "Contact form submitted"
        );
        ContactForm::Acknowledged
    }

    /// Whether the success banner is shown
    pub fn success(self) -> bool {
        self == ContactForm::Acknowledged
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_submission_is_acknowledged() {
        let state = ContactForm::default().submit(&ContactSubmission::default());
        assert_eq!(state, ContactForm::Acknowledged);
        assert!(state.success());
    }

    #[test]
    fn test_unsubmitted_shows_no_banner() {
        assert!(!ContactForm::Unsubmitted.success());
    }

    #[test]
    fn test_present_fields() {
        let submission = ContactSubmission {
            name: Some("Li".to_string()),
            email: None,
            message: Some(String::new()),
        };
        assert_eq!(submission.present_fields(), vec!["name", "message"]);
    }
}
