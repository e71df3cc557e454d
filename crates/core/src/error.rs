//! Error types for the engine.

use thiserror::Error;

/// Result type alias using DatasetError.
pub type Result<T> = std::result::Result<T, DatasetError>;

/// Errors that prevent a game from being dealt.
///
/// Both variants are fatal to game start: the caller shows one message and
/// never builds a board.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DatasetError {
    /// The data matches neither the pairs shape nor the alternatives shape.
    #[error("unrecognized dataset format: {0}")]
    Format(String),

    /// The data has a known shape but yields zero usable word pairs.
    #[error("dataset has no usable word pairs")]
    Empty,
}
