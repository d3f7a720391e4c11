//! AI Client module
//!
//! Gemini `generateContent` client:
//! - Plain text calls for drafts and action items
//! - JSON-schema calls for idea lists and the canvas

pub mod config;
pub mod core;
pub mod simple;

// Re-export main types
pub use config::AiClientConfig;
pub use core::AiClient;
