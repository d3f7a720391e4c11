//! AI integration
//!
//! - `client`: Gemini HTTP client
//! - `generation`: the generation service seam and its Gemini implementation
//! - `prompts`, `parsers`: what goes to the model and how answers are read back
//! - `examples`: canned content for the free tier

pub mod client;
pub mod examples;
pub mod generation;
pub mod parsers;
pub mod prompts;

pub use generation::{GeminiGenerator, GenerationService};
