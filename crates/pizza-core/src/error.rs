use thiserror::Error;

/// Application-wide error types for the pizza API.
#[derive(Error, Debug)]
pub enum AppError {
    /// Reading or writing the document store failed.
    #[error("Store error: {0}")]
    StoreError(String),

    /// JSON serialization/deserialization failed.
    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    /// The request payload could not be read as a record body.
    #[error("Invalid payload: {0}")]
    InvalidPayload(String),

    /// Missing or malformed configuration.
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// Generic error.
    #[error("{0}")]
    Generic(String),
}

impl AppError {
    /// Short machine-readable label, used as the `error` field of API error bodies.
    pub fn kind(&self) -> &'static str {
        match self {
            AppError::StoreError(_) => "store_error",
            AppError::SerializationError(_) => "serialization_error",
            AppError::InvalidPayload(_) => "invalid_payload",
            AppError::ConfigError(_) => "config_error",
            AppError::Generic(_) => "internal_error",
        }
    }
}

impl From<std::io::Error> for AppError {
    fn from(err: std::io::Error) -> Self {
        AppError::StoreError(err.to_string())
    }
}
