//! Filesystem locations
//!
//! Everything lives under one data directory, `~/.planwright` by default.
//! `PLANWRIGHT_HOME` overrides it (handy for tests and portable installs).

use std::path::PathBuf;

use crate::constants::{paths, storage};

/// Root data directory
pub fn config_dir() -> PathBuf {
    if let Some(dir) = std::env::var_os(paths::HOME_ENV).filter(|v| !v.is_empty()) {
        return PathBuf::from(dir);
    }
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(paths::DATA_DIR_NAME)
}

/// SQLite database holding the plan blob and the credential
pub fn database_path() -> PathBuf {
    config_dir().join(storage::DATABASE_FILE)
}

/// Optional TOML config file
pub fn config_file() -> PathBuf {
    config_dir().join(paths::CONFIG_FILE)
}

/// Log output directory
pub fn logs_dir() -> PathBuf {
    config_dir().join("logs")
}
