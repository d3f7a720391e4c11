//! Planwright Core - Shared library for the product plan wizard
//!
//! This crate provides the core functionality for the Planwright CLI:
//! - Plan state, navigation and version history
//! - Gemini-backed content generation
//! - SQLite persistence for the plan and credential
//! - Configuration loading

pub mod ai;
pub mod config;
pub mod constants;
pub mod paths;
pub mod plan;
pub mod storage;

// Re-exports for convenience
pub use ai::{GeminiGenerator, GenerationService};
pub use config::Config;
pub use plan::{PlanError, PlanManager, ProductPlan, SectionId, ViewMode};
pub use storage::{Database, MemoryStore, PersistenceStore, Preferences};
