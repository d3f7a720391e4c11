//! Product plan model and state
//!
//! - `section`: the fixed, ordered list of wizard sections
//! - `data`: per-section content and version history
//! - `canvas`: the nine-block Lean Canvas summary
//! - `manager`: the single owner of plan state and wizard navigation

mod canvas;
mod data;
mod error;
mod manager;
mod section;

pub use canvas::{LeanCanvasBlock, LeanCanvasData};
pub use data::{ProductPlan, SectionData};
pub use error::{PlanError, CANVAS_FALLBACK, GENERATION_FALLBACK};
pub use manager::{PlanManager, ViewMode};
pub use section::{SectionId, FREE_SECTIONS, SECTION_COUNT};
