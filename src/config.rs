//! Configuration types.

use secrecy::SecretString;

use crate::error::ConfigError;
use crate::questions::LlmBackend;

const DEFAULT_MODEL: &str = "gpt-4o-mini";

/// Which question source to run.
#[derive(Debug, Clone)]
pub enum SourceConfig {
    /// Built-in keyword banks, no network.
    Bank,
    /// LLM-backed generation.
    Llm {
        backend: LlmBackend,
        api_key: SecretString,
    },
}

/// Assistant configuration resolved from the environment.
#[derive(Debug, Clone)]
pub struct AssistantConfig {
    /// Assistant name used in the banner and session logs.
    pub name: String,
    /// Model identifier for LLM-backed question generation.
    pub model: String,
    pub source: SourceConfig,
}

impl AssistantConfig {
    /// Resolve configuration from the environment.
    ///
    /// `TALENT_ASSIST_SOURCE` (bank | anthropic | openai) forces a source;
    /// unset, the source is detected from whichever API key is present,
    /// with the keyword banks as the no-key fallback.
    /// `TALENT_ASSIST_MODEL` overrides the default model id.
    pub fn from_env() -> Result<Self, ConfigError> {
        let model =
            std::env::var("TALENT_ASSIST_MODEL").unwrap_or_else(|_| DEFAULT_MODEL.to_string());
        let source = resolve_source(
            std::env::var("TALENT_ASSIST_SOURCE").ok().as_deref(),
            std::env::var("ANTHROPIC_API_KEY").ok(),
            std::env::var("OPENAI_API_KEY").ok(),
        )?;
        Ok(Self {
            name: "TalentScout".to_string(),
            model,
            source,
        })
    }
}

/// Pick the question source from the requested name and available keys.
fn resolve_source(
    requested: Option<&str>,
    anthropic_key: Option<String>,
    openai_key: Option<String>,
) -> Result<SourceConfig, ConfigError> {
    match requested {
        None => Ok(detect_source(anthropic_key, openai_key)),
        Some("bank") => Ok(SourceConfig::Bank),
        Some("anthropic") => {
            let api_key = anthropic_key
                .ok_or_else(|| ConfigError::MissingEnvVar("ANTHROPIC_API_KEY".to_string()))?;
            Ok(SourceConfig::Llm {
                backend: LlmBackend::Anthropic,
                api_key: SecretString::from(api_key),
            })
        }
        Some("openai") => {
            let api_key = openai_key
                .ok_or_else(|| ConfigError::MissingEnvVar("OPENAI_API_KEY".to_string()))?;
            Ok(SourceConfig::Llm {
                backend: LlmBackend::OpenAi,
                api_key: SecretString::from(api_key),
            })
        }
        Some(other) => Err(ConfigError::InvalidValue {
            key: "TALENT_ASSIST_SOURCE".to_string(),
            message: format!("unknown source '{other}' (expected bank, anthropic, or openai)"),
        }),
    }
}

/// No source requested: prefer Anthropic, then OpenAI, then the banks.
fn detect_source(anthropic_key: Option<String>, openai_key: Option<String>) -> SourceConfig {
    if let Some(key) = anthropic_key {
        SourceConfig::Llm {
            backend: LlmBackend::Anthropic,
            api_key: SecretString::from(key),
        }
    } else if let Some(key) = openai_key {
        SourceConfig::Llm {
            backend: LlmBackend::OpenAi,
            api_key: SecretString::from(key),
        }
    } else {
        SourceConfig::Bank
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_request_and_no_keys_falls_back_to_bank() {
        let source = resolve_source(None, None, None).unwrap();
        assert!(matches!(source, SourceConfig::Bank));
    }

    #[test]
    fn anthropic_key_wins_detection() {
        let source = resolve_source(None, Some("sk-ant".into()), Some("sk-oai".into())).unwrap();
        assert!(matches!(
            source,
            SourceConfig::Llm {
                backend: LlmBackend::Anthropic,
                ..
            }
        ));
    }

    #[test]
    fn openai_key_detected_when_anthropic_absent() {
        let source = resolve_source(None, None, Some("sk-oai".into())).unwrap();
        assert!(matches!(
            source,
            SourceConfig::Llm {
                backend: LlmBackend::OpenAi,
                ..
            }
        ));
    }

    #[test]
    fn explicit_bank_ignores_keys() {
        let source = resolve_source(Some("bank"), Some("sk-ant".into()), None).unwrap();
        assert!(matches!(source, SourceConfig::Bank));
    }

    #[test]
    fn explicit_llm_source_requires_its_key() {
        let err = resolve_source(Some("anthropic"), None, None).unwrap_err();
        assert!(err.to_string().contains("ANTHROPIC_API_KEY"));

        let err = resolve_source(Some("openai"), None, None).unwrap_err();
        assert!(err.to_string().contains("OPENAI_API_KEY"));
    }

    #[test]
    fn unknown_source_is_rejected() {
        let err = resolve_source(Some("llama"), None, None).unwrap_err();
        assert!(err.to_string().contains("TALENT_ASSIST_SOURCE"));
        assert!(err.to_string().contains("llama"));
    }
}
