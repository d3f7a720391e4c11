//! AI Client configuration

use std::time::Duration;

use crate::config::GenerationConfig;
use crate::constants;

/// Configuration for the AI client
#[derive(Debug, Clone)]
pub struct AiClientConfig {
    /// Model ID to use for API calls
    pub model: String,
    /// API base, e.g. `https://generativelanguage.googleapis.com/v1beta`
    pub endpoint: String,
    /// Maximum output tokens
    pub max_tokens: usize,
    /// Whole-request timeout
    pub timeout: Duration,
}

impl Default for AiClientConfig {
    fn default() -> Self {
        Self {
            model: constants::ai::DEFAULT_MODEL.to_string(),
            endpoint: constants::ai::DEFAULT_ENDPOINT.to_string(),
            max_tokens: constants::ai::MAX_OUTPUT_TOKENS,
            timeout: constants::http::REQUEST_TIMEOUT,
        }
    }
}

impl From<&GenerationConfig> for AiClientConfig {
    fn from(config: &GenerationConfig) -> Self {
        Self {
            model: config.model.clone(),
            endpoint: config.endpoint.clone(),
            max_tokens: config.max_output_tokens,
            timeout: config.timeout(),
        }
    }
}

impl AiClientConfig {
    /// Full `generateContent` URL for the configured model
    pub fn api_url(&self) -> String {
        format!(
            "{}/models/{}:generateContent",
            self.endpoint.trim_end_matches('/'),
            self.model
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_url() {
        let config = AiClientConfig {
            endpoint: "http://localhost:9/v1beta/".into(),
            model: "gemini-test".into(),
            ..Default::default()
        };
        assert_eq!(
            config.api_url(),
            "http://localhost:9/v1beta/models/gemini-test:generateContent"
        );
    }

    #[test]
    fn test_from_generation_config() {
        let gen = GenerationConfig {
            timeout_secs: 7,
            ..Default::default()
        };
        let config = AiClientConfig::from(&gen);
        assert_eq!(config.timeout, Duration::from_secs(7));
        assert_eq!(config.model, constants::ai::DEFAULT_MODEL);
    }
}
