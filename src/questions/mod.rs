//! Technical question sources.
//!
//! Two interchangeable implementations produce the question list asked
//! after candidate details are collected:
//! - [`KeywordBank`]: fixed in-process banks matched by tech-stack keyword
//! - [`LlmQuestionSource`]: one chat completion via rig-core

pub mod bank;
pub mod llm;
pub mod prompts;

pub use bank::KeywordBank;
pub use llm::{LlmBackend, LlmConfig, LlmQuestionSource, create_source};

use async_trait::async_trait;

use crate::error::QuestionError;

/// Maximum number of questions any source may return.
pub const MAX_QUESTIONS: usize = 5;

/// Produces the ordered technical question list for one candidate.
///
/// Invoked exactly once per session, at the boundary between field
/// collection and the question-asking phase.
#[async_trait]
pub trait QuestionSource: Send + Sync {
    /// Source name used in logs and the CLI banner.
    fn name(&self) -> &str;

    /// Generate 1-5 technical questions for the candidate profile.
    async fn generate(
        &self,
        desired_role: &str,
        experience: &str,
        tech_stack: &str,
    ) -> Result<Vec<String>, QuestionError>;
}
