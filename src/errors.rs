// Copyright (c) 2025 - Cowboy AI, Inc.
//! Error types for notary infrastructure operations

use thiserror::Error;

/// Errors that can occur outside of command validation
#[derive(Debug, Error)]
pub enum NotaryError {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// Event store error
    #[error("Event store error: {0}")]
    EventStore(String),

    /// Optimistic concurrency check failed on append
    #[error("Concurrency conflict: expected version {expected}, got {actual}")]
    Concurrency { expected: u64, actual: u64 },
}

/// Result type for notary infrastructure operations
pub type NotaryResult<T> = Result<T, NotaryError>;

impl From<serde_json::Error> for NotaryError {
    fn from(err: serde_json::Error) -> Self {
        NotaryError::Serialization(err.to_string())
    }
}
