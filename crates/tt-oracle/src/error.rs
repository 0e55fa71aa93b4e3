//! Error types for drawing and performing readings.

use thiserror::Error;

/// Result type for reading operations.
pub type ReadingResult<T> = Result<T, ReadingError>;

/// Errors that can occur while preparing or performing a reading.
#[derive(Debug, Error)]
pub enum ReadingError {
    /// More cards were requested than the deck holds.
    #[error("cannot draw {requested} cards from a deck of {available}")]
    NotEnoughCards {
        /// Cards requested.
        requested: usize,
        /// Cards in the deck.
        available: usize,
    },

    /// A custom question was rejected.
    #[error("{0}")]
    InvalidQuestion(String),

    /// The reading log failed.
    #[error("{0}")]
    Store(#[from] tt_core::StoreError),
}
