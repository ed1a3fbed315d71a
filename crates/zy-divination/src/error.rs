//! Error types for the divination core.

use thiserror::Error;

/// Result type for divination operations.
pub type DivinationResult<T> = Result<T, DivinationError>;

/// Errors that can occur while building or resolving a reading.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum DivinationError {
    /// Resolution was attempted on a reading with fewer than six lines.
    #[error("reading is incomplete: {0} of 6 lines thrown")]
    IncompleteReading(usize),

    /// A seventh throw was attempted on a complete reading.
    #[error("reading already has all six lines")]
    ReadingFull,
}
