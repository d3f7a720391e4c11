//! SQLite-backed key/value store

use anyhow::Result;
use rusqlite::params;

use super::{database::Database, store::PersistenceStore, unix_timestamp};

/// User preferences table exposed as a [`PersistenceStore`]
pub struct Preferences {
    db: Database,
}

impl Preferences {
    pub fn new(db: Database) -> Self {
        Self { db }
    }

    /// Get a preference value
    pub fn get(&self, key: &str) -> Option<String> {
        self.db
            .conn()
            .query_row(
                "SELECT value FROM user_preferences WHERE key = ?1",
                [key],
                |row| row.get(0),
            )
            .ok()
    }

    /// Set a preference value
    pub fn set(&self, key: &str, value: &str) -> Result<()> {
        self.db.conn().execute(
            "INSERT INTO user_preferences (key, value, updated_at)
             VALUES (?1, ?2, ?3)
             ON CONFLICT(key) DO UPDATE SET value = ?2, updated_at = ?3",
            params![key, value, unix_timestamp() as i64],
        )?;
        Ok(())
    }

    /// Delete a preference
    pub fn delete(&self, key: &str) -> Result<()> {
        self.db
            .conn()
            .execute("DELETE FROM user_preferences WHERE key = ?1", [key])?;
        Ok(())
    }

    /// Seconds since epoch of the last write to `key`
    pub fn updated_at(&self, key: &str) -> Option<u64> {
        self.db
            .conn()
            .query_row(
                "SELECT updated_at FROM user_preferences WHERE key = ?1",
                [key],
                |row| row.get::<_, i64>(0),
            )
            .ok()
            .map(|ts| ts as u64)
    }
}

impl PersistenceStore for Preferences {
    fn get(&self, key: &str) -> Option<String> {
        Preferences::get(self, key)
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        Preferences::set(self, key, value)
    }

    fn remove(&self, key: &str) -> Result<()> {
        self.delete(key)
    }
}
