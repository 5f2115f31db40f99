//! Conversation controller — decides what the assistant says next and how
//! each candidate turn mutates the session.

use std::sync::Arc;

use crate::questions::QuestionSource;

use super::model::Message;
use super::state::{Phase, SessionState};
use super::validator;

/// Keywords that end the conversation from any phase, matched
/// case-insensitively after trimming.
const EXIT_KEYWORDS: [&str; 5] = ["exit", "quit", "bye", "stop", "end"];

const GREETING: &str = "Hello! I'm TalentScout, your hiring assistant.\n\n\
    I will collect your basic details and then ask technical questions \
    based on your tech stack.\n\n\
    You can type 'exit' at any time to end the conversation.";

const FAREWELL: &str = "Thank you for your time!\n\n\
    Our recruitment team will review your information and reach out with \
    next steps.";

const GENERATION_NOTICE: &str = "Thank you for sharing your details!\n\n\
    Let's begin with the technical questions.";

const WRAP_UP: &str = "Technical screening completed.\n\n\
    Thank you for answering the technical questions. Our recruitment team \
    will review your responses and contact you if your profile matches the \
    requirements.\n\n\
    Have a great day!";

/// Drives a screening session turn by turn.
///
/// The controller holds no per-session data; all conversation state lives
/// in the [`SessionState`] passed to each call, so sessions stay isolated
/// and one controller can serve any number of them.
pub struct ScreeningController {
    source: Arc<dyn QuestionSource>,
}

impl ScreeningController {
    pub fn new(source: Arc<dyn QuestionSource>) -> Self {
        Self { source }
    }

    /// Emit the next due assistant line, if any.
    ///
    /// Idempotent: repeated calls without an intervening [`advance`] append
    /// each due message at most once. Callers loop until `None` before
    /// reading input.
    ///
    /// [`advance`]: Self::advance
    pub fn next_prompt(&self, state: &mut SessionState) -> Option<Message> {
        match state.phase() {
            Phase::Greeting => {
                state.greeted = true;
                Some(state.push_assistant(GREETING))
            }
            Phase::Collecting => {
                let field = state.current_field()?;
                if state.prompted_field == Some(state.field_cursor) {
                    return None;
                }
                state.prompted_field = Some(state.field_cursor);
                Some(state.push_assistant(field.prompt()))
            }
            Phase::Asking => {
                let question = state.current_question()?.to_string();
                if state.prompted_question == Some(state.question_cursor) {
                    return None;
                }
                state.prompted_question = Some(state.question_cursor);
                Some(state.push_assistant(question))
            }
            // Generation runs inside `advance`; its outcome messages are
            // appended there. Nothing is due here.
            Phase::Generating | Phase::Complete | Phase::Exited => None,
        }
    }

    /// Process one submitted candidate turn to completion, including the
    /// at-most-one question source call made when field collection
    /// finishes.
    pub async fn advance(&self, state: &mut SessionState, input: &str) {
        if state.exited {
            return;
        }

        // Exit keywords work in every phase.
        let normalized = input.trim().to_lowercase();
        if EXIT_KEYWORDS.contains(&normalized.as_str()) {
            state.push_user(input);
            state.push_assistant(FAREWELL);
            state.exited = true;
            tracing::info!(session = %state.id, "Candidate ended the session");
            return;
        }

        state.push_user(input);

        match state.phase() {
            Phase::Greeting | Phase::Collecting => {
                self.collect_field(state, input);
                if state.collection_complete() && !state.questions_generated {
                    self.generate_questions(state).await;
                }
            }
            Phase::Generating => {
                // A prior generation attempt failed; try again this turn.
                self.generate_questions(state).await;
            }
            Phase::Asking => {
                state.answers.push(input.to_string());
                state.question_cursor += 1;
                if state.question_cursor == state.questions.len() {
                    state.push_assistant(WRAP_UP);
                    tracing::info!(
                        session = %state.id,
                        answers = state.answers.len(),
                        "Screening complete"
                    );
                }
            }
            Phase::Complete => {
                // Screening is over; the turn is recorded but not processed.
            }
            Phase::Exited => {}
        }
    }

    fn collect_field(&self, state: &mut SessionState, input: &str) {
        let Some(field) = state.current_field() else {
            return;
        };
        match validator::validate(field, input) {
            Ok(()) => {
                state.record.insert(field, input.to_string());
                state.field_cursor += 1;
                tracing::debug!(session = %state.id, %field, "Accepted candidate answer");
            }
            Err(reason) => {
                tracing::debug!(session = %state.id, %field, %reason, "Rejected candidate answer");
                state.push_assistant(format!("⚠️ {reason}"));
            }
        }
    }

    /// Announce the transition once, then ask the question source for the
    /// technical question list. Failure is surfaced as a single assistant
    /// message and leaves the session retryable on the next turn.
    async fn generate_questions(&self, state: &mut SessionState) {
        if !state.generation_announced {
            state.push_assistant(GENERATION_NOTICE);
            state.generation_announced = true;
        }

        let result = self
            .source
            .generate(
                state.record.desired_role(),
                state.record.experience(),
                state.record.tech_stack(),
            )
            .await;

        match result {
            Ok(questions) => {
                tracing::info!(
                    session = %state.id,
                    source = self.source.name(),
                    count = questions.len(),
                    "Technical questions ready"
                );
                state.questions = questions;
                state.questions_generated = true;
            }
            Err(e) => {
                tracing::warn!(session = %state.id, error = %e, "Question generation failed");
                state.push_assistant(format!("⚠️ Could not generate technical questions: {e}"));
            }
        }
    }
}
