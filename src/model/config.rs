//! Model endpoint configuration.

use serde::Serialize;

use crate::error::{Error, Result};

/// Default OpenAI-compatible endpoint (Groq).
pub const DEFAULT_BASE_URL: &str = "https://api.groq.com/openai/v1";

/// Default model identifier.
pub const DEFAULT_MODEL: &str = "gemma2-9b-it";

/// Completion token cap per chunk.
pub const DEFAULT_MAX_TOKENS: u32 = 2048;

/// Nucleus sampling mass.
pub const DEFAULT_TOP_P: f32 = 1.0;

/// Environment variable holding the API key.
pub const API_KEY_ENV: &str = "GROQ_API_KEY";

/// Settings for the completion endpoint.
#[derive(Clone, Serialize)]
pub struct ModelConfig {
    /// Bearer credential.
    #[serde(skip)]
    pub api_key: String,
    /// API base URL.
    pub base_url: String,
    /// Model identifier.
    pub model: String,
    /// Completion token cap.
    pub max_tokens: u32,
    /// Nucleus sampling mass.
    pub top_p: f32,
}

impl std::fmt::Debug for ModelConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ModelConfig")
            .field("api_key", &"<redacted>")
            .field("base_url", &self.base_url)
            .field("model", &self.model)
            .field("max_tokens", &self.max_tokens)
            .field("top_p", &self.top_p)
            .finish()
    }
}

impl ModelConfig {
    /// Creates a config with defaults for everything but the key.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Config`] if the key is missing or blank.
    pub fn new(api_key: Option<String>) -> Result<Self> {
        let api_key = api_key
            .map(|k| k.trim().to_string())
            .filter(|k| !k.is_empty())
            .ok_or_else(|| Error::Config {
                message: format!("{API_KEY_ENV} is not set"),
            })?;

        Ok(Self {
            api_key,
            base_url: DEFAULT_BASE_URL.to_string(),
            model: DEFAULT_MODEL.to_string(),
            max_tokens: DEFAULT_MAX_TOKENS,
            top_p: DEFAULT_TOP_P,
        })
    }

    /// Sets the base URL. Trailing slashes are dropped.
    #[must_use]
    pub fn base_url(mut self, base_url: &str) -> Self {
        self.base_url = base_url.trim_end_matches('/').to_string();
        self
    }

    /// Sets the model identifier.
    #[must_use]
    pub fn model(mut self, model: &str) -> Self {
        self.model = model.to_string();
        self
    }

    /// Sets the completion token cap.
    #[must_use]
    pub const fn max_tokens(mut self, max_tokens: u32) -> Self {
        self.max_tokens = max_tokens;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_key_is_config_error() {
        let err = ModelConfig::new(None).unwrap_err();
        assert!(matches!(err, Error::Config { .. }));
        assert!(err.to_string().contains("GROQ_API_KEY"));
    }

    #[test]
    fn test_blank_key_is_config_error() {
        assert!(ModelConfig::new(Some("   ".to_string())).is_err());
    }

    #[test]
    fn test_defaults() {
        let config = ModelConfig::new(Some("gsk_test".to_string())).unwrap();
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.model, DEFAULT_MODEL);
        assert_eq!(config.max_tokens, 2048);
        assert!((config.top_p - 1.0).abs() < f32::EPSILON);
    }

    #[test]
    fn test_builders() {
        let config = ModelConfig::new(Some("k".to_string()))
            .unwrap()
            .base_url("http://localhost:8080/v1/")
            .model("llama-3.1-8b-instant")
            .max_tokens(512);
        assert_eq!(config.base_url, "http://localhost:8080/v1");
        assert_eq!(config.model, "llama-3.1-8b-instant");
        assert_eq!(config.max_tokens, 512);
    }

    #[test]
    fn test_debug_redacts_key() {
        let config = ModelConfig::new(Some("gsk_secret".to_string())).unwrap();
        let debug = format!("{config:?}");
        assert!(!debug.contains("gsk_secret"));
        assert!(debug.contains("redacted"));
    }
}
