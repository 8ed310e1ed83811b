//! Error handling types and utilities.

use thiserror::Error;

/// A specialized Result type for search-engine operations.
pub type Result<T> = std::result::Result<T, SearchError>;

/// Error returned when a search-engine operation is given bad input.
///
/// Every error is detected synchronously at the point of first violation and
/// aborts only the current operation; the engine's state is left unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SearchError {
    /// Malformed text reached the tokenizer: a control character, a `--`
    /// sequence, or a token ending in a dangling `-`.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// A document-id precondition was violated: a negative or duplicate id
    /// on ingestion, or a negative or unknown id on matching.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// An enumeration index fell outside `[0, document_count)`.
    #[error("document number {index} is out of range for {count} stored documents")]
    OutOfRange { index: usize, count: usize },
}
