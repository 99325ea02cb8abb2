//! Error types for packing runs.

use thiserror::Error;

/// Result type alias for packing operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors surfaced by strategies, adapters and the dataset readers.
#[derive(Debug, Error)]
pub enum Error {
    /// Non-positive capacity, weight or bin count.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// The stream was already consumed (or is being consumed) by a previous run.
    #[error("weight stream already consumed")]
    ExhaustedStream,

    /// A baseline backend returned a packing that does not hold exactly the input items.
    #[error("backend packing does not match its input: {0}")]
    BackendMismatch(String),

    /// Missing or malformed dataset.
    #[error("dataset error: {0}")]
    Dataset(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}
