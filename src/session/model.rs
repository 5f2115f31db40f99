//! Candidate data models — fields, transcript messages, and the record
//! built up during screening.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One unit of candidate information, collected in a fixed order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Field {
    FullName,
    Email,
    Phone,
    Experience,
    DesiredRole,
    Location,
    TechStack,
}

impl Field {
    /// All fields, in collection order.
    pub const ALL: [Field; 7] = [
        Field::FullName,
        Field::Email,
        Field::Phone,
        Field::Experience,
        Field::DesiredRole,
        Field::Location,
        Field::TechStack,
    ];

    /// Stable identifier used in logs and serialized records.
    pub fn key(&self) -> &'static str {
        match self {
            Self::FullName => "full_name",
            Self::Email => "email",
            Self::Phone => "phone",
            Self::Experience => "experience",
            Self::DesiredRole => "desired_role",
            Self::Location => "location",
            Self::TechStack => "tech_stack",
        }
    }

    /// The assistant line that asks for this field.
    pub fn prompt(&self) -> &'static str {
        match self {
            Self::FullName => "What is your full name?",
            Self::Email => "What is your email address?",
            Self::Phone => "What is your phone number?",
            Self::Experience => "How many years of professional experience do you have?",
            Self::DesiredRole => "What position(s) are you applying for?",
            Self::Location => "What is your current location?",
            Self::TechStack => {
                "Please list your tech stack (languages, frameworks, databases, tools).\n\
                 Example: Python, Django, PostgreSQL, Docker"
            }
        }
    }
}

impl std::fmt::Display for Field {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.key())
    }
}

/// Who authored a transcript message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    Assistant,
    User,
}

/// One turn in the conversation transcript. Append-only; never edited or
/// removed once pushed.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Message {
    pub role: Role,
    pub content: String,
    pub sent_at: DateTime<Utc>,
}

impl Message {
    pub fn assistant(content: impl Into<String>) -> Self {
        Self {
            role: Role::Assistant,
            content: content.into(),
            sent_at: Utc::now(),
        }
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: Role::User,
            content: content.into(),
            sent_at: Utc::now(),
        }
    }
}

/// Accepted candidate answers keyed by field.
///
/// Grows monotonically as answers are accepted; a value is never
/// overwritten once set.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CandidateRecord {
    values: BTreeMap<Field, String>,
}

impl CandidateRecord {
    pub fn get(&self, field: Field) -> Option<&str> {
        self.values.get(&field).map(String::as_str)
    }

    /// Record an accepted answer. The first value for a field wins.
    pub fn insert(&mut self, field: Field, value: String) {
        self.values.entry(field).or_insert(value);
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Whether every field has an accepted answer.
    pub fn is_complete(&self) -> bool {
        self.values.len() == Field::ALL.len()
    }

    pub fn desired_role(&self) -> &str {
        self.get(Field::DesiredRole).unwrap_or_default()
    }

    pub fn experience(&self) -> &str {
        self.get(Field::Experience).unwrap_or_default()
    }

    pub fn tech_stack(&self) -> &str {
        self.get(Field::TechStack).unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fields_are_in_collection_order() {
        let keys: Vec<&str> = Field::ALL.iter().map(Field::key).collect();
        assert_eq!(
            keys,
            [
                "full_name",
                "email",
                "phone",
                "experience",
                "desired_role",
                "location",
                "tech_stack"
            ]
        );
    }

    #[test]
    fn display_matches_serde() {
        for field in Field::ALL {
            let json = serde_json::to_string(&field).unwrap();
            assert_eq!(format!("\"{field}\""), json);
        }
    }

    #[test]
    fn every_field_has_a_prompt() {
        for field in Field::ALL {
            assert!(!field.prompt().is_empty(), "{field} has no prompt");
        }
    }

    #[test]
    fn record_grows_monotonically() {
        let mut record = CandidateRecord::default();
        assert!(record.is_empty());

        record.insert(Field::FullName, "Jane Doe".to_string());
        assert_eq!(record.len(), 1);
        assert_eq!(record.get(Field::FullName), Some("Jane Doe"));

        // First value wins; a second insert does not overwrite.
        record.insert(Field::FullName, "Someone Else".to_string());
        assert_eq!(record.get(Field::FullName), Some("Jane Doe"));
        assert_eq!(record.len(), 1);
    }

    #[test]
    fn record_complete_after_all_fields() {
        let mut record = CandidateRecord::default();
        for field in Field::ALL {
            assert!(!record.is_complete());
            record.insert(field, format!("value for {field}"));
        }
        assert!(record.is_complete());
    }

    #[test]
    fn typed_accessors_default_to_empty() {
        let record = CandidateRecord::default();
        assert_eq!(record.desired_role(), "");
        assert_eq!(record.experience(), "");
        assert_eq!(record.tech_stack(), "");

        let mut record = CandidateRecord::default();
        record.insert(Field::TechStack, "Python, SQL".to_string());
        assert_eq!(record.tech_stack(), "Python, SQL");
    }

    #[test]
    fn message_constructors_set_role() {
        let m = Message::assistant("hello");
        assert_eq!(m.role, Role::Assistant);
        assert_eq!(m.content, "hello");

        let m = Message::user("hi");
        assert_eq!(m.role, Role::User);
    }

    #[test]
    fn record_serde_roundtrip() {
        let mut record = CandidateRecord::default();
        record.insert(Field::Email, "jane@x.com".to_string());
        record.insert(Field::Phone, "9876543210".to_string());

        let json = serde_json::to_string(&record).unwrap();
        let parsed: CandidateRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.get(Field::Email), Some("jane@x.com"));
        assert_eq!(parsed.len(), 2);
    }
}
