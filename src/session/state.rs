//! Session state — the aggregate a screening conversation mutates turn by
//! turn.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::model::{CandidateRecord, Field, Message, Role};

/// The phases of a screening conversation.
///
/// Progresses linearly: Greeting → Collecting → Generating → Asking →
/// Complete. Exited is reachable from any phase via an exit keyword.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Phase {
    Greeting,
    Collecting,
    Generating,
    Asking,
    Complete,
    Exited,
}

impl Phase {
    /// Whether this phase accepts no further input at all.
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Exited)
    }
}

impl std::fmt::Display for Phase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::Greeting => "greeting",
            Self::Collecting => "collecting",
            Self::Generating => "generating",
            Self::Asking => "asking",
            Self::Complete => "complete",
            Self::Exited => "exited",
        };
        write!(f, "{s}")
    }
}

/// Aggregate state for one screening session.
///
/// Created with all defaults at session start, mutated once per turn by the
/// controller, never shared across sessions. The current [`Phase`] is
/// derived from cursors and flags so the two cannot disagree.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionState {
    pub id: Uuid,
    pub started_at: DateTime<Utc>,
    /// Append-only conversation transcript.
    pub messages: Vec<Message>,
    /// Accepted candidate answers.
    pub record: CandidateRecord,
    /// Index into [`Field::ALL`] of the field currently being collected.
    pub field_cursor: usize,
    /// Generated technical questions, set at most once per session.
    pub questions: Vec<String>,
    /// Index into `questions` of the question currently being asked.
    pub question_cursor: usize,
    /// Raw candidate answers to the technical questions, in question order.
    pub answers: Vec<String>,
    /// True once the greeting has been emitted.
    pub greeted: bool,
    /// True once the transition into question generation has been announced.
    pub generation_announced: bool,
    /// True once the question source has returned a question list.
    pub questions_generated: bool,
    /// True once the candidate ended the conversation with an exit keyword.
    pub exited: bool,
    /// Field cursor value whose prompt was last emitted, if any.
    pub prompted_field: Option<usize>,
    /// Question cursor value whose question was last emitted, if any.
    pub prompted_question: Option<usize>,
}

impl SessionState {
    pub fn new() -> Self {
        Self {
            id: Uuid::new_v4(),
            started_at: Utc::now(),
            messages: Vec::new(),
            record: CandidateRecord::default(),
            field_cursor: 0,
            questions: Vec::new(),
            question_cursor: 0,
            answers: Vec::new(),
            greeted: false,
            generation_announced: false,
            questions_generated: false,
            exited: false,
            prompted_field: None,
            prompted_question: None,
        }
    }

    /// The field currently being collected, if collection is still running.
    pub fn current_field(&self) -> Option<Field> {
        Field::ALL.get(self.field_cursor).copied()
    }

    /// The question currently being asked, if any remain.
    pub fn current_question(&self) -> Option<&str> {
        self.questions.get(self.question_cursor).map(String::as_str)
    }

    /// Whether every candidate field has an accepted answer.
    pub fn collection_complete(&self) -> bool {
        self.field_cursor == Field::ALL.len()
    }

    /// Whether every generated question has an answer.
    pub fn questions_complete(&self) -> bool {
        self.questions_generated && self.question_cursor == self.questions.len()
    }

    /// Derive the current phase from cursors and flags.
    pub fn phase(&self) -> Phase {
        if self.exited {
            Phase::Exited
        } else if !self.greeted {
            Phase::Greeting
        } else if !self.collection_complete() {
            Phase::Collecting
        } else if !self.questions_generated {
            Phase::Generating
        } else if self.question_cursor < self.questions.len() {
            Phase::Asking
        } else {
            Phase::Complete
        }
    }

    /// Append an assistant message and return a copy of it.
    pub(crate) fn push_assistant(&mut self, content: impl Into<String>) -> Message {
        let message = Message::assistant(content);
        self.messages.push(message.clone());
        message
    }

    /// Append a user message to the transcript.
    pub(crate) fn push_user(&mut self, content: impl Into<String>) {
        self.messages.push(Message::user(content));
    }

    /// Count of transcript messages with the given role.
    pub fn count_role(&self, role: Role) -> usize {
        self.messages.iter().filter(|m| m.role == role).count()
    }
}

impl Default for SessionState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fresh_session_defaults() {
        let state = SessionState::new();
        assert!(state.messages.is_empty());
        assert!(state.record.is_empty());
        assert_eq!(state.field_cursor, 0);
        assert_eq!(state.question_cursor, 0);
        assert!(!state.greeted);
        assert!(!state.questions_generated);
        assert!(!state.exited);
        assert_eq!(state.phase(), Phase::Greeting);
    }

    #[test]
    fn phase_follows_cursors_and_flags() {
        let mut state = SessionState::new();
        state.greeted = true;
        assert_eq!(state.phase(), Phase::Collecting);

        for field in Field::ALL {
            state.record.insert(field, "x".to_string());
            state.field_cursor += 1;
        }
        assert_eq!(state.phase(), Phase::Generating);

        state.questions = vec!["Q1".to_string(), "Q2".to_string()];
        state.questions_generated = true;
        assert_eq!(state.phase(), Phase::Asking);

        state.question_cursor = 2;
        assert_eq!(state.phase(), Phase::Complete);
        assert!(state.questions_complete());

        state.exited = true;
        assert_eq!(state.phase(), Phase::Exited);
    }

    #[test]
    fn exit_preempts_every_phase() {
        let mut state = SessionState::new();
        state.exited = true;
        assert_eq!(state.phase(), Phase::Exited);
        assert!(state.phase().is_terminal());
    }

    #[test]
    fn current_field_walks_collection_order() {
        let mut state = SessionState::new();
        assert_eq!(state.current_field(), Some(Field::FullName));
        state.field_cursor = 6;
        assert_eq!(state.current_field(), Some(Field::TechStack));
        state.field_cursor = 7;
        assert_eq!(state.current_field(), None);
        assert!(state.collection_complete());
    }

    #[test]
    fn display_matches_serde() {
        let phases = [
            Phase::Greeting,
            Phase::Collecting,
            Phase::Generating,
            Phase::Asking,
            Phase::Complete,
            Phase::Exited,
        ];
        for phase in phases {
            let json = serde_json::to_string(&phase).unwrap();
            assert_eq!(format!("\"{phase}\""), json);
        }
    }

    #[test]
    fn state_serde_roundtrip() {
        let mut state = SessionState::new();
        state.greeted = true;
        state.push_assistant("What is your full name?");
        state.push_user("Jane Doe");
        state.record.insert(Field::FullName, "Jane Doe".to_string());
        state.field_cursor = 1;

        let json = serde_json::to_string(&state).unwrap();
        let parsed: SessionState = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.id, state.id);
        assert_eq!(parsed.messages.len(), 2);
        assert_eq!(parsed.field_cursor, 1);
        assert_eq!(parsed.record.get(Field::FullName), Some("Jane Doe"));
        assert_eq!(parsed.phase(), Phase::Collecting);
    }
}
