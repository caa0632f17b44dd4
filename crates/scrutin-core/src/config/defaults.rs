//! Compiled default values for every config section.

pub const DEFAULT_DB_PATH: &str = "data/processed/elections.db";
pub const DEFAULT_READ_POOL_SIZE: usize = 4;
pub const DEFAULT_BUSY_TIMEOUT_MS: u64 = 5_000;

pub const DEFAULT_COMPLETION_ENDPOINT: &str = "https://api.mistral.ai/v1";
pub const DEFAULT_COMPLETION_MODEL: &str = "mistral-small-latest";
pub const DEFAULT_API_KEY_ENV: &str = "MISTRAL_API_KEY";
pub const DEFAULT_TEMPERATURE: f64 = 0.0;
pub const DEFAULT_TIMEOUT_SECS: u64 = 60;

pub const DEFAULT_BM25_K1: f64 = 1.5;
pub const DEFAULT_BM25_B: f64 = 0.75;
pub const DEFAULT_BM25_EPSILON: f64 = 0.25;
pub const DEFAULT_TOP_K: usize = 2;
pub const DEFAULT_MIN_SCORE: f64 = 0.5;

pub const DEFAULT_ROW_LIMIT: usize = 10;
pub const DEFAULT_COMPOSER_MAX_ROWS: usize = 15;

pub const DEFAULT_LOG_LEVEL: &str = "info";

/// Project-level config file name, looked up in the config root.
pub const CONFIG_FILE_NAME: &str = "scrutin.toml";
