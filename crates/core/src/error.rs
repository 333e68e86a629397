//! Error taxonomy.

use thiserror::Error;

/// Result type used by the store adapters and the domain operations.
pub type StoreResult<T> = Result<T, StoreError>;

/// Failure talking to the backing document collection.
///
/// The domain layer never retries or recovers from these; they propagate to
/// the caller unchanged.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum StoreError {
    /// The collection could not be reached (network or auth failure).
    #[error("store unavailable: {0}")]
    Unavailable(String),

    /// A stored document could not be decoded.
    #[error("malformed store payload: {0}")]
    Malformed(String),
}

impl StoreError {
    pub fn unavailable(msg: impl Into<String>) -> Self {
        Self::Unavailable(msg.into())
    }

    pub fn malformed(msg: impl Into<String>) -> Self {
        Self::Malformed(msg.into())
    }
}

/// Failure talking to the completion service.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CompletionError {
    /// The service answered with a non-2xx status.
    #[error("completion service returned status {0}")]
    Status(u16),

    /// The response body was not the expected JSON shape.
    #[error("malformed completion response: {0}")]
    Malformed(String),

    /// The response carried an `error` field.
    #[error("completion service error: {0}")]
    Service(String),

    /// The request never completed (connect/transport failure).
    #[error("completion service unreachable: {0}")]
    Unreachable(String),
}

impl CompletionError {
    pub fn malformed(msg: impl Into<String>) -> Self {
        Self::Malformed(msg.into())
    }

    pub fn service(msg: impl Into<String>) -> Self {
        Self::Service(msg.into())
    }

    pub fn unreachable(msg: impl Into<String>) -> Self {
        Self::Unreachable(msg.into())
    }
}
