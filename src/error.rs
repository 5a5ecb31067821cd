//! Error types for the campus chat engine.
//!
//! The taxonomy is deliberately small: ambiguous course matches and
//! unparsable grade scores are handled in-band (disambiguation payloads,
//! skipped scores), not as errors.

use thiserror::Error;

/// Result type alias for chat engine operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for query processing and session handling
#[derive(Debug, Error)]
pub enum Error {
    /// A data-access or translation collaborator failed
    #[error("Upstream unavailable: {0}")]
    Upstream(String),

    /// No record matched the query
    #[error("Not found: {0}")]
    NotFound(String),

    /// Session initialization failed: the student identifier is unknown.
    /// The only fatal condition; surfaced before any query is processed.
    #[error("Unknown student: {0}")]
    UnknownStudent(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// JSON serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
