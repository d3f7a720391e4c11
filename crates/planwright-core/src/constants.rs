//! Application constants and configuration defaults
//!
//! Centralized location for magic numbers and default values

use std::time::Duration;

/// HTTP client configuration
pub mod http {
    use super::*;

    /// Connection timeout for HTTP requests
    pub const CONNECT_TIMEOUT: Duration = Duration::from_secs(30);

    /// Whole-request timeout for generation calls
    pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(120);
}

/// AI/LLM configuration
pub mod ai {
    /// Default Gemini model
    pub const DEFAULT_MODEL: &str = "gemini-2.5-flash";

    /// Default Gemini API base (without the `/models/...` suffix)
    pub const DEFAULT_ENDPOINT: &str = "https://generativelanguage.googleapis.com/v1beta";

    /// Default maximum output tokens
    pub const MAX_OUTPUT_TOKENS: usize = 8192;

    /// How many alternative drafts to ask for per section
    pub const DEFAULT_IDEA_COUNT: usize = 3;

    /// Upper bound accepted for `idea_count` in the config file
    pub const MAX_IDEA_COUNT: usize = 10;
}

/// Keys used in the persistence store
pub mod storage {
    /// Whole-plan JSON blob
    pub const PLAN_KEY: &str = "product-plan-architect";

    /// Generation service credential
    pub const CREDENTIAL_KEY: &str = "gemini-api-key";

    /// Database file name inside the data directory
    pub const DATABASE_FILE: &str = "planwright.db";
}

/// Filesystem layout
pub mod paths {
    /// Data directory name under the user's home
    pub const DATA_DIR_NAME: &str = ".planwright";

    /// Environment variable overriding the data directory
    pub const HOME_ENV: &str = "PLANWRIGHT_HOME";

    /// Config file name inside the data directory
    pub const CONFIG_FILE: &str = "config.toml";
}
