//! Error types for logbook.
//!
//! Lookups are the only domain operation that can fail, and they fail
//! recoverably. The remaining variants cover configuration and rendering.

use thiserror::Error;

/// The main error type for logbook operations.
#[derive(Error, Debug)]
pub enum Error {
    // === Lookup Errors ===
    /// No record in the store carries the requested key.
    #[error("{kind} {key} not found")]
    NotFound {
        /// Human name of the record kind (e.g. `"Flight"`).
        kind: &'static str,
        /// The key that was looked up, rendered for display.
        key: String,
    },

    // === Configuration Errors ===
    /// Failed to load configuration.
    #[error("failed to load configuration: {0}")]
    ConfigLoad(Box<figment::Error>),

    /// Configuration validation failed.
    #[error("invalid configuration: {message}")]
    ConfigValidation {
        /// Description of the validation failure.
        message: String,
    },

    // === Serialization Errors ===
    /// JSON serialization failed.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// A specialized Result type for logbook operations.
pub type Result<T> = std::result::Result<T, Error>;

impl From<figment::Error> for Error {
    fn from(err: figment::Error) -> Self {
        Self::ConfigLoad(Box::new(err))
    }
}

impl Error {
    /// Create a not-found error for a record kind and key.
    #[must_use]
    pub fn not_found(kind: &'static str, key: impl std::fmt::Display) -> Self {
        Self::NotFound {
            kind,
            key: key.to_string(),
        }
    }

    /// Check if this error is a lookup miss.
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }
}
