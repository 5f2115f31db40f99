//! LLM-backed question source.
//!
//! Issues one chat completion per session via rig-core, with the
//! interviewer preamble and the structured prompt from
//! [`super::prompts`]. Anthropic and OpenAI are supported behind the same
//! [`QuestionSource`] contract.

use std::sync::Arc;

use async_trait::async_trait;
use rig::agent::Agent;
use rig::client::CompletionClient;
use rig::completion::{CompletionModel, Prompt};
use secrecy::ExposeSecret;

use crate::error::QuestionError;

use super::prompts::{INTERVIEWER_PREAMBLE, parse_question_list, technical_question_prompt};
use super::{MAX_QUESTIONS, QuestionSource};

/// Sampling temperature. Kept low so repeated runs over the same profile
/// produce similar question lists.
const TEMPERATURE: f64 = 0.3;

const MAX_TOKENS: u64 = 1024;

/// Supported LLM backends.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LlmBackend {
    Anthropic,
    OpenAi,
}

/// Configuration for creating an LLM question source.
#[derive(Debug, Clone)]
pub struct LlmConfig {
    pub backend: LlmBackend,
    pub api_key: secrecy::SecretString,
    pub model: String,
}

/// Generates technical questions with a single completion call.
pub struct LlmQuestionSource<M: CompletionModel> {
    agent: Agent<M>,
    provider: &'static str,
}

#[async_trait]
impl<M: CompletionModel> QuestionSource for LlmQuestionSource<M> {
    fn name(&self) -> &str {
        self.provider
    }

    async fn generate(
        &self,
        desired_role: &str,
        experience: &str,
        tech_stack: &str,
    ) -> Result<Vec<String>, QuestionError> {
        if tech_stack.trim().is_empty() {
            return Err(QuestionError::EmptyTechStack);
        }

        let prompt = technical_question_prompt(desired_role, experience, tech_stack);
        let completion =
            self.agent
                .prompt(prompt)
                .await
                .map_err(|e| QuestionError::RequestFailed {
                    provider: self.provider.to_string(),
                    reason: e.to_string(),
                })?;

        let mut questions = parse_question_list(&completion);
        if questions.is_empty() {
            return Err(QuestionError::InvalidResponse {
                provider: self.provider.to_string(),
                reason: "completion contained no questions".to_string(),
            });
        }
        questions.truncate(MAX_QUESTIONS);
        Ok(questions)
    }
}

/// Create a question source from configuration.
pub fn create_source(config: &LlmConfig) -> Result<Arc<dyn QuestionSource>, QuestionError> {
    match config.backend {
        LlmBackend::Anthropic => create_anthropic_source(config),
        LlmBackend::OpenAi => create_openai_source(config),
    }
}

fn create_anthropic_source(config: &LlmConfig) -> Result<Arc<dyn QuestionSource>, QuestionError> {
    use rig::providers::anthropic;

    let client: rig::client::Client<anthropic::client::AnthropicExt> =
        anthropic::Client::new(config.api_key.expose_secret()).map_err(|e| {
            QuestionError::RequestFailed {
                provider: "anthropic".to_string(),
                reason: format!("Failed to create Anthropic client: {}", e),
            }
        })?;

    let agent = client
        .agent(&config.model)
        .preamble(INTERVIEWER_PREAMBLE)
        .temperature(TEMPERATURE)
        .max_tokens(MAX_TOKENS)
        .build();
    tracing::info!("Using Anthropic (model: {})", config.model);
    Ok(Arc::new(LlmQuestionSource {
        agent,
        provider: "anthropic",
    }))
}

fn create_openai_source(config: &LlmConfig) -> Result<Arc<dyn QuestionSource>, QuestionError> {
    use rig::providers::openai;

    let client: rig::client::Client<openai::client::OpenAIResponsesExt> =
        openai::Client::new(config.api_key.expose_secret()).map_err(|e| {
            QuestionError::RequestFailed {
                provider: "openai".to_string(),
                reason: format!("Failed to create OpenAI client: {}", e),
            }
        })?;

    let agent = client
        .agent(&config.model)
        .preamble(INTERVIEWER_PREAMBLE)
        .temperature(TEMPERATURE)
        .max_tokens(MAX_TOKENS)
        .build();
    tracing::info!("Using OpenAI (model: {})", config.model);
    Ok(Arc::new(LlmQuestionSource {
        agent,
        provider: "openai",
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn anthropic_source_constructs_with_any_key() {
        // rig-core clients accept any string as API key at construction
        // time; the actual auth failure happens when making a request.
        let config = LlmConfig {
            backend: LlmBackend::Anthropic,
            api_key: secrecy::SecretString::from("test-key"),
            model: "claude-3-5-sonnet-latest".to_string(),
        };
        let source = create_source(&config);
        assert!(source.is_ok());
        assert_eq!(source.unwrap().name(), "anthropic");
    }

    #[tokio::test]
    async fn openai_source_constructs_with_any_key() {
        let config = LlmConfig {
            backend: LlmBackend::OpenAi,
            api_key: secrecy::SecretString::from("sk-test"),
            model: "gpt-4o-mini".to_string(),
        };
        let source = create_source(&config);
        assert!(source.is_ok());
        assert_eq!(source.unwrap().name(), "openai");
    }

    #[tokio::test]
    async fn empty_tech_stack_fails_before_any_request() {
        let config = LlmConfig {
            backend: LlmBackend::OpenAi,
            api_key: secrecy::SecretString::from("sk-test"),
            model: "gpt-4o-mini".to_string(),
        };
        let source = create_source(&config).unwrap();
        let result = source.generate("Backend Developer", "3", "   ").await;
        assert!(matches!(result, Err(QuestionError::EmptyTechStack)));
    }
}
