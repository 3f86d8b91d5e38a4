use std::path::PathBuf;

use pizza_core::AppError;

/// Default location of the JSON document file.
pub const DEFAULT_DB_PATH: &str = "db.json";

/// Configuration for the file-backed document store.
#[derive(Debug, Clone)]
pub struct StoreConfig {
    pub path: PathBuf,
}

impl StoreConfig {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Read configuration from environment variables.
    ///
    /// - `PIZZA_DB_PATH` (optional, defaults to `db.json`)
    pub fn from_env() -> Result<Self, AppError> {
        match std::env::var("PIZZA_DB_PATH") {
            Err(_) => Ok(Self::new(DEFAULT_DB_PATH)),
            Ok(raw) if raw.trim().is_empty() => Err(AppError::ConfigError(
                "PIZZA_DB_PATH is set but empty".into(),
            )),
            Ok(raw) => Ok(Self::new(raw)),
        }
    }
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self::new(DEFAULT_DB_PATH)
    }
}
