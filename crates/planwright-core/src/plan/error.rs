//! Errors surfaced to the presentation layer

use thiserror::Error;

use super::section::SectionId;

/// Shown when the service gave no usable message
pub const GENERATION_FALLBACK: &str =
    "Failed to generate content. Please check your API key and try again.";

/// Shown when canvas generation failed without a usable message
pub const CANVAS_FALLBACK: &str =
    "Failed to generate the Lean Canvas. The AI could not summarize the plan. Please try again.";

/// Plan operation error
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PlanError {
    /// A credential must be configured first
    #[error("an API key is required for this action; add one in settings")]
    CredentialRequired,

    /// The section needs user input before generating
    #[error("please describe your idea for {} before generating", .0.title())]
    MissingInput(SectionId),

    /// Generation service call failed
    #[error("{0}")]
    GenerationFailed(String),

    /// Canvas generation failed
    #[error("{0}")]
    CanvasGenerationFailed(String),

    /// Revert index does not exist in the section's history
    #[error("no version {0} in history")]
    InvalidVersion(usize),
}

impl PlanError {
    /// Wrap a service error, keeping its message when it has one
    pub fn generation(err: &anyhow::Error) -> Self {
        PlanError::GenerationFailed(message_or(err, GENERATION_FALLBACK))
    }

    /// Canvas-channel counterpart of [`PlanError::generation`]
    pub fn canvas(err: &anyhow::Error) -> Self {
        PlanError::CanvasGenerationFailed(message_or(err, CANVAS_FALLBACK))
    }

    /// Whether the presentation layer should open settings
    pub fn needs_credential(&self) -> bool {
        matches!(self, PlanError::CredentialRequired)
    }
}

fn message_or(err: &anyhow::Error, fallback: &str) -> String {
    let message = err.to_string();
    if message.trim().is_empty() {
        fallback.to_string()
    } else {
        message
    }
}
