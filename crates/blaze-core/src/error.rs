//! Core error types for blaze-core.
//!
//! One thiserror hierarchy for the whole library. Reminder-domain failures
//! are deliberately absorbed before they reach the user; the variants here
//! exist so callers and tests can distinguish them.

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for blaze-core.
#[derive(Error, Debug)]
pub enum CoreError {
    /// Database-related errors
    #[error("Database error: {0}")]
    Database(#[from] DatabaseError),

    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Validation errors
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    /// Notification capability errors
    #[error("Notification error: {0}")]
    Capability(#[from] CapabilityError),

    /// Webhook relay errors
    #[error("Relay error: {0}")]
    Relay(#[from] RelayError),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Generic errors with context
    #[error("{0}")]
    Custom(String),
}

/// Database-specific errors.
#[derive(Error, Debug)]
pub enum DatabaseError {
    /// Failed to open database connection
    #[error("Failed to open database at {path}: {source}")]
    OpenFailed {
        path: PathBuf,
        #[source]
        source: rusqlite::Error,
    },

    /// Query execution failed
    #[error("Query failed: {0}")]
    QueryFailed(String),

    /// Database is locked
    #[error("Database is locked")]
    Locked,
}

/// Configuration-specific errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to save configuration
    #[error("Failed to save configuration to {path}: {message}")]
    SaveFailed { path: PathBuf, message: String },

    /// Unknown configuration key
    #[error("Unknown configuration key: {0}")]
    UnknownKey(String),

    /// Invalid configuration value
    #[error("Invalid configuration value for '{key}': {message}")]
    InvalidValue { key: String, message: String },

    /// Failed to parse configuration
    #[error("Failed to parse configuration: {0}")]
    ParseFailed(String),
}

/// Validation errors.
#[derive(Error, Debug)]
pub enum ValidationError {
    /// Invalid value
    #[error("Invalid value for '{field}': {message}")]
    InvalidValue { field: String, message: String },

    /// Out of range
    #[error("Value {value} for '{field}' is outside [{min}, {max}]")]
    OutOfRange {
        field: String,
        value: i64,
        min: i64,
        max: i64,
    },
}

/// Notification-capability errors.
///
/// Modeled explicitly (rather than as swallowed exceptions) so tests can
/// simulate capability-absent platforms deterministically.
#[derive(Error, Debug)]
pub enum CapabilityError {
    /// Notifications are not available on this host
    #[error("notification capability unavailable on this platform")]
    Unavailable,

    /// The user denied the notification permission
    #[error("notification permission denied")]
    PermissionDenied,

    /// A single trigger failed to register
    #[error("failed to schedule notification: {0}")]
    ScheduleFailed(String),
}

/// Webhook relay errors.
#[derive(Error, Debug)]
pub enum RelayError {
    /// The request carried no signature header
    #[error("missing webhook signature")]
    MissingSignature,

    /// The signature did not match the body
    #[error("invalid webhook signature")]
    InvalidSignature,

    /// The payload was not valid JSON for the expected shape
    #[error("malformed webhook payload: {0}")]
    Payload(#[from] serde_json::Error),

    /// The dispatch request failed to send
    #[error("dispatch request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// GitHub rejected the dispatch
    #[error("GitHub API error: HTTP {status}")]
    Dispatch { status: u16 },
}

// Helper implementations for converting from other error types

impl From<rusqlite::Error> for DatabaseError {
    fn from(err: rusqlite::Error) -> Self {
        match &err {
            rusqlite::Error::SqliteFailure(err, _msg) => {
                if err.code == rusqlite::ErrorCode::DatabaseLocked {
                    DatabaseError::Locked
                } else {
                    DatabaseError::QueryFailed(err.to_string())
                }
            }
            _ => DatabaseError::QueryFailed(err.to_string()),
        }
    }
}

impl From<Box<dyn std::error::Error + Send + Sync>> for CoreError {
    fn from(err: Box<dyn std::error::Error + Send + Sync>) -> Self {
        CoreError::Custom(err.to_string())
    }
}

/// Result type alias for CoreError
pub type Result<T, E = CoreError> = std::result::Result<T, E>;
