use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Field {
    FullName,
    Email,
    Details,
}

impl Field {
    pub const ALL: [Field; 3] = [Field::FullName, Field::Email, Field::Details];

    pub fn label(self) -> &'static str {
        match self {
            Field::FullName => "Full name",
            Field::Email => "Email",
            Field::Details => "Project details",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Why a draft cannot be sent yet.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum DraftProblem {
    #[error("{0} is required")]
    Missing(Field),
    #[error("Email does not look like an email address")]
    MalformedEmail,
}

/// The values currently typed into the contact form.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Draft {
    pub full_name: String,
    pub email: String,
    pub details: String,
}

impl Draft {
    pub fn new(full_name: impl Into<String>, email: impl Into<String>, details: impl Into<String>) -> Self {
        Self {
            full_name: full_name.into(),
            email: email.into(),
            details: details.into(),
        }
    }

    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::FullName => &self.full_name,
            Field::Email => &self.email,
            Field::Details => &self.details,
        }
    }

    pub fn set(&mut self, field: Field, value: String) {
        match field {
            Field::FullName => self.full_name = value,
            Field::Email => self.email = value,
            Field::Details => self.details = value,
        }
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }

    pub fn is_empty(&self) -> bool {
        Field::ALL.iter().all(|f| self.get(*f).is_empty())
    }

    /// Everything that blocks submission. Whitespace-only values count as missing.
    pub fn problems(&self) -> Vec<DraftProblem> {
        let mut problems: Vec<DraftProblem> = Field::ALL
            .iter()
            .filter(|f| self.get(**f).trim().is_empty())
            .map(|f| DraftProblem::Missing(*f))
            .collect();

        if !self.email.trim().is_empty() && !looks_like_email(self.email.trim()) {
            problems.push(DraftProblem::MalformedEmail);
        }
        problems
    }
}

// Same rough shape a browser accepts for <input type="email">.
fn looks_like_email(value: &str) -> bool {
    if value.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = value.split_once('@') else {
        return false;
    };
    !local.is_empty()
        && !domain.contains('@')
        && domain.contains('.')
        && !domain.starts_with('.')
        && !domain.ends_with('.')
}

/// One row of the `contact_submissions` table.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ContactSubmission {
    pub full_name: String,
    pub email: String,
    pub details: String,
    pub created_at: DateTime<Utc>,
}

impl ContactSubmission {
    pub fn from_draft(draft: &Draft, created_at: DateTime<Utc>) -> Self {
        Self {
            full_name: draft.full_name.clone(),
            email: draft.email.clone(),
            details: draft.details.clone(),
            created_at,
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum SubmissionStatus {
    #[default]
    Idle,
    Sending,
    Success,
    Error(String),
}

impl SubmissionStatus {
    pub fn is_sending(&self) -> bool {
        matches!(self, SubmissionStatus::Sending)
    }

    pub fn error_message(&self) -> Option<&str> {
        match self {
            SubmissionStatus::Error(message) => Some(message),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn complete_draft_has_no_problems() {
        let draft = Draft::new("Jane Doe", "jane@example.com", "Need a redesign");
        assert!(draft.problems().is_empty());
    }

    #[test]
    fn blank_and_whitespace_fields_are_missing() {
        let draft = Draft::new("", "jane@example.com", "   ");
        assert_eq!(
            draft.problems(),
            vec![
                DraftProblem::Missing(Field::FullName),
                DraftProblem::Missing(Field::Details)
            ]
        );
    }

    #[test]
    fn email_shape() {
        for bad in ["jane", "jane@", "@example.com", "jane@example", "ja ne@example.com", "a@b@c.com", "jane@.com"] {
            assert!(!looks_like_email(bad), "{bad} should be rejected");
        }
        for good in ["jane@example.com", "j.doe+site@studio.co.uk"] {
            assert!(looks_like_email(good), "{good} should be accepted");
        }
    }

    #[test]
    fn missing_email_is_not_also_malformed() {
        let draft = Draft::new("Jane", "", "Hi");
        assert_eq!(draft.problems(), vec![DraftProblem::Missing(Field::Email)]);
    }

    #[test]
    fn submission_serializes_to_table_columns() {
        let created_at = DateTime::parse_from_rfc3339("2024-05-01T10:00:00Z")
            .unwrap()
            .with_timezone(&Utc);
        let record = ContactSubmission::from_draft(
            &Draft::new("Jane Doe", "jane@example.com", "Need a redesign"),
            created_at,
        );
        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(json["full_name"], "Jane Doe");
        assert_eq!(json["email"], "jane@example.com");
        assert_eq!(json["details"], "Need a redesign");
        assert_eq!(json["created_at"], "2024-05-01T10:00:00Z");
    }
}
