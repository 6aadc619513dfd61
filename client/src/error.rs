//! Error taxonomy shared by the session, space-mode, and storage modules.
//!
//! ERROR HANDLING
//! ==============
//! Identity errors travel back to whoever invoked the mutator so pages can
//! show a message. Storage errors never leave the store that hit them; the
//! store logs and keeps its in-memory value.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

use thiserror::Error;

/// A context accessor was called outside the provider that owns the value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ConfigurationError {
    #[error("{0} accessed outside its provider")]
    MissingProvider(&'static str),
}

/// Failure reported by the identity backend.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AuthError {
    #[error("invalid credentials")]
    InvalidCredentials,
    #[error("network failure: {0}")]
    NetworkFailure(String),
}

/// A space mode string outside `couple | personal`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid space mode: {0:?}")]
pub struct InvalidMode(pub String);

/// Failure of the persistent key-value storage.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StorageError {
    #[error("storage unavailable")]
    Unavailable,
    #[error("storage write failed: {0}")]
    Write(String),
}
