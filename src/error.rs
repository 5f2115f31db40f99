//! Error types for Talent Assist.

/// Top-level error type for the assistant.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Question generation error: {0}")]
    Question(#[from] QuestionError),
}

/// Configuration-related errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Missing required environment variable: {0}")]
    MissingEnvVar(String),

    #[error("Invalid configuration value for {key}: {message}")]
    InvalidValue { key: String, message: String },
}

/// Question generation errors.
///
/// Raised by the question source at the collection→questions boundary and
/// surfaced to the candidate as a single assistant message.
#[derive(Debug, thiserror::Error)]
pub enum QuestionError {
    #[error("Tech stack is empty")]
    EmptyTechStack,

    #[error("Provider {provider} request failed: {reason}")]
    RequestFailed { provider: String, reason: String },

    #[error("Invalid response from {provider}: {reason}")]
    InvalidResponse { provider: String, reason: String },
}

/// Result type alias for the assistant.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn top_level_error_prefixes_the_source() {
        let e: Error = ConfigError::MissingEnvVar("OPENAI_API_KEY".to_string()).into();
        assert!(e.to_string().starts_with("Configuration error:"));

        let e: Error = QuestionError::EmptyTechStack.into();
        assert_eq!(
            e.to_string(),
            "Question generation error: Tech stack is empty"
        );
    }
}
