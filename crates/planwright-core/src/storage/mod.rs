//! Persistence layer
//!
//! Key/value storage for the two things that survive restarts:
//! - The whole plan as a single JSON blob
//! - The generation service credential
//!
//! SQLite backs the real store; an in-memory store stands in for tests and
//! for when the database can't be opened.

use std::time::{SystemTime, UNIX_EPOCH};

mod database;
mod preferences;
mod store;

pub use database::Database;
pub use preferences::Preferences;
pub use store::{MemoryStore, PersistenceStore};

/// Get current Unix timestamp in seconds
#[inline]
pub fn unix_timestamp() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0)
}
