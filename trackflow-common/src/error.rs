//! Common error types for Trackflow

use thiserror::Error;

/// Common result type for Trackflow operations
pub type Result<T> = std::result::Result<T, Error>;

/// Common error types across the Trackflow services
///
/// The first four variants form the review-workflow taxonomy: every failure
/// a caller of the workflow or router can observe maps to exactly one of
/// them, and each carries a human-readable message.
#[derive(Error, Debug)]
pub enum Error {
    /// Caller's identity or role fails a precondition
    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    /// Missing or malformed required field
    #[error("Validation failed: {0}")]
    Validation(String),

    /// Attempted transition from a non-pending state (covers the
    /// concurrent double-decision race: the losing writer observes this)
    #[error("Invalid state: {0}")]
    InvalidState(String),

    /// Underlying blob storage read/write failed
    #[error("Storage failure: {0}")]
    Storage(String),

    /// Database operation error (wraps sqlx::Error)
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// I/O operation error (wraps std::io::Error)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration loading or validation error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Requested resource not found
    #[error("Not found: {0}")]
    NotFound(String),

    /// Internal server error
    #[error("Internal error: {0}")]
    Internal(String),
}
