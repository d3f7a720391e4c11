//! Parsers for model output
//!
//! Even with `responseMimeType: application/json` some models wrap the payload
//! in a markdown fence or add a sentence around it, so every structured
//! response goes through [`parse_json_payload`] first.

use anyhow::{anyhow, bail, Context, Result};
use once_cell::sync::Lazy;
use regex::Regex;
use serde_json::Value;

use crate::plan::LeanCanvasData;

/// ```json ... ``` (language tag optional)
static RE_CODE_FENCE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?s)```[a-zA-Z]*\s*\n?(.*?)\n?\s*```").unwrap());

/// Parse a JSON value out of model text
pub fn parse_json_payload(text: &str) -> Result<Value> {
    let trimmed = text.trim();

    if let Ok(value) = serde_json::from_str::<Value>(trimmed) {
        return Ok(value);
    }

    if let Some(inner) = RE_CODE_FENCE
        .captures(trimmed)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().trim())
    {
        if let Ok(value) = serde_json::from_str::<Value>(inner) {
            return Ok(value);
        }
    }

    // Last resort: outermost object or array in the text
    let start = trimmed.find(['{', '[']);
    let end = trimmed.rfind(['}', ']']);
    if let (Some(start), Some(end)) = (start, end) {
        if start < end {
            if let Ok(value) = serde_json::from_str::<Value>(&trimmed[start..=end]) {
                return Ok(value);
            }
        }
    }

    bail!("The model response was not valid JSON")
}

/// Idea list from either `["a", "b"]` or `{"ideas": ["a", "b"]}`
///
/// Entries are trimmed and blanks dropped. An empty list is an error.
pub fn parse_ideas(value: &Value) -> Result<Vec<String>> {
    let items = value
        .as_array()
        .or_else(|| value.get("ideas").and_then(|v| v.as_array()))
        .ok_or_else(|| anyhow!("Expected a list of ideas in the model response"))?;

    let ideas: Vec<String> = items
        .iter()
        .filter_map(|item| item.as_str())
        .map(str::trim)
        .filter(|idea| !idea.is_empty())
        .map(str::to_string)
        .collect();

    if ideas.is_empty() {
        bail!("The model did not return any ideas");
    }
    Ok(ideas)
}

/// All nine canvas blocks, or an error
pub fn parse_canvas(value: Value) -> Result<LeanCanvasData> {
    serde_json::from_value(value).context("The model returned an incomplete Lean Canvas")
}
