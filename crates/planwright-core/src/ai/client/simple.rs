//! Non-streaming `generateContent` calls

use anyhow::{bail, Result};
use serde_json::Value;
use tracing::debug;

use super::core::AiClient;
use crate::ai::parsers;

impl AiClient {
    /// Text completion; returns the trimmed candidate text
    pub async fn call_simple(&self, system_prompt: &str, user_message: &str) -> Result<String> {
        let body = self.request_body(system_prompt, user_message, None);
        let json = self.send(&body).await?;

        let text = extract_candidate_text(&json);
        if text.is_empty() {
            bail!("The model returned an empty response");
        }
        Ok(text)
    }

    /// Structured completion constrained by `schema`; returns the parsed JSON
    pub async fn call_json(
        &self,
        system_prompt: &str,
        user_message: &str,
        schema: Value,
    ) -> Result<Value> {
        let body = self.request_body(system_prompt, user_message, Some(schema));
        let json = self.send(&body).await?;

        let text = extract_candidate_text(&json);
        if text.is_empty() {
            bail!("The model returned an empty response");
        }
        parsers::parse_json_payload(&text)
    }

    fn request_body(
        &self,
        system_prompt: &str,
        user_message: &str,
        schema: Option<Value>,
    ) -> Value {
        let mut generation_config = serde_json::json!({
            "maxOutputTokens": self.config().max_tokens
        });
        if let Some(schema) = schema {
            generation_config["responseMimeType"] = Value::from("application/json");
            generation_config["responseSchema"] = schema;
        }

        serde_json::json!({
            "contents": [{
                "role": "user",
                "parts": [{"text": user_message}]
            }],
            "systemInstruction": {
                "parts": [{"text": system_prompt}]
            },
            "generationConfig": generation_config
        })
    }

    async fn send(&self, body: &Value) -> Result<Value> {
        let request = self.build_request(&self.config().api_url());
        let response = request.json(body).send().await?;
        let response = self.handle_error_response(response).await?;
        let json: Value = response.json().await?;
        debug!("Gemini response received");
        Ok(json)
    }
}

/// Join the text parts of the first candidate
pub(crate) fn extract_candidate_text(json: &Value) -> String {
    json.get("candidates")
        .and_then(|c| c.as_array())
        .and_then(|arr| arr.first())
        .and_then(|candidate| candidate.get("content"))
        .and_then(|content| content.get("parts"))
        .and_then(|parts| parts.as_array())
        .map(|parts| {
            parts
                .iter()
                .filter_map(|part| part.get("text").and_then(|t| t.as_str()))
                .collect::<Vec<_>>()
                .join("")
        })
        .unwrap_or_default()
        .trim()
        .to_string()
}
