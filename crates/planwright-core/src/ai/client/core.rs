//! Core AI Client
//!
//! Holds the HTTP client, configuration and credential for Gemini calls.

use anyhow::Result;
use reqwest::Client;
use serde_json::Value;
use tracing::{debug, error};

use super::config::AiClientConfig;
use crate::constants;

/// Gemini API client bound to one credential
pub struct AiClient {
    http: Client,
    config: AiClientConfig,
    api_key: String,
}

impl AiClient {
    fn create_http_client(config: &AiClientConfig) -> Client {
        Client::builder()
            .user_agent("Planwright/0.1")
            .connect_timeout(constants::http::CONNECT_TIMEOUT)
            .timeout(config.timeout)
            .build()
            .unwrap_or_else(|e| {
                error!("Failed to build HTTP client: {}. Using default client.", e);
                Client::new()
            })
    }

    /// Create a new client with API key
    pub fn new(config: AiClientConfig, api_key: String) -> Self {
        Self {
            http: Self::create_http_client(&config),
            config,
            api_key,
        }
    }

    /// Get the current configuration
    pub fn config(&self) -> &AiClientConfig {
        &self.config
    }

    /// Build a request with proper authentication headers
    pub(crate) fn build_request(&self, url: &str) -> reqwest::RequestBuilder {
        debug!("Gemini request to model {}", self.config.model);
        self.http
            .post(url)
            .header("x-goog-api-key", &self.api_key)
            .header("content-type", "application/json")
    }

    /// Handle an error response and return a formatted error
    ///
    /// Gemini wraps failures as `{"error": {"message": ...}}`; that message is
    /// what the user sees when present.
    pub(crate) async fn handle_error_response(
        &self,
        response: reqwest::Response,
    ) -> Result<reqwest::Response> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let error_text = response.text().await.unwrap_or_default();
        error!("API error response: {} - {}", status, error_text);

        let message = serde_json::from_str::<Value>(&error_text)
            .ok()
            .and_then(|json| {
                json.get("error")
                    .and_then(|e| e.get("message"))
                    .and_then(|m| m.as_str())
                    .map(str::to_string)
            });

        match message {
            Some(message) if !message.trim().is_empty() => Err(anyhow::anyhow!(message)),
            _ => Err(anyhow::anyhow!("API error: {} - {}", status, error_text)),
        }
    }
}
