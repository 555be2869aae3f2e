//! Result and error types for Abacus.
//!
//! Arithmetic failures are not in here: they are part of the session
//! state (see [`crate::core::ArithmeticError`]). These errors cover the
//! edges around the engine: snapshots, stores and key tokens.

use thiserror::Error;

/// Result type for Abacus operations
pub type AbacusResult<T> = Result<T, AbacusError>;

/// Errors that can occur around the calculator engine
#[derive(Debug, Error)]
pub enum AbacusError {
    /// Snapshot store I/O failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Snapshot could not be encoded or decoded
    #[error("Snapshot serialization failed: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Snapshot decoded but describes an impossible session
    #[error("Invalid snapshot: {message}")]
    InvalidSnapshot {
        /// What was wrong with it
        message: String,
    },

    /// Key token not in the keypad vocabulary
    #[error("Unknown key: {key}")]
    UnknownKey {
        /// The token as received
        key: String,
    },
}

impl AbacusError {
    /// Create an invalid snapshot error
    #[must_use]
    pub fn invalid_snapshot(message: impl Into<String>) -> Self {
        Self::InvalidSnapshot {
            message: message.into(),
        }
    }

    /// Create an unknown key error
    #[must_use]
    pub fn unknown_key(key: impl Into<String>) -> Self {
        Self::UnknownKey { key: key.into() }
    }
}
