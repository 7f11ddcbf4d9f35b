//! Error types for the crate.

use thiserror::Error;

use super::moves::Move;

/// Main error type for the crate.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum GameError {
    #[error("illegal move '{mv}' in position: {position}")]
    IllegalMove { mv: Move, position: String },

    #[error("cannot read '{input}' as a move: {reason}")]
    InvalidMoveSyntax { input: String, reason: String },

    #[error("invalid hand value {value} (expected 0 to 4)")]
    InvalidHand { value: u8 },

    #[error("game already over")]
    GameOver,

    #[error("move input closed before a move was chosen")]
    InputClosed,

    #[error("invalid configuration: {message}")]
    InvalidConfiguration { message: String },

    #[error("failed to {operation}: {source}")]
    Io {
        operation: String,
        #[source]
        source: std::io::Error,
    },

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl GameError {
    /// Wrap an I/O error with the operation that failed.
    pub fn io(operation: impl Into<String>, source: std::io::Error) -> Self {
        GameError::Io {
            operation: operation.into(),
            source,
        }
    }
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, GameError>;
