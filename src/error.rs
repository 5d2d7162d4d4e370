//! Error types shared by the nucleotide model.

use thiserror::Error;

/// Errors that can occur while building or querying nucleotide data.
#[derive(Error, Debug)]
pub enum SequenceError {
    #[error("Invalid nucleobase: {0:?}")]
    InvalidBase(char),

    #[error("Invalid quality: {0} (expected 33..=126)")]
    InvalidQuality(i64),

    #[error("Invalid position: {0}")]
    InvalidPosition(i64),

    #[error("Sequence is empty")]
    EmptySequence,

    #[error("Failed to write sequence: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for nucleotide model operations.
pub type SequenceResult<T> = Result<T, SequenceError>;
