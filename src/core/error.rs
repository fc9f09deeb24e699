//! Error types for positional access.

use thiserror::Error;

/// Result type alias for index-addressed map operations
pub type Result<T> = std::result::Result<T, MapError>;

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum MapError {
    /// Index outside `0..len`
    #[error("index {index} out of range for map of length {len}")]
    IndexOutOfRange { index: usize, len: usize },
}
