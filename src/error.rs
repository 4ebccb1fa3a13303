//! Error types for grid construction, editing and search.

use thiserror::Error;

/// Everything that can go wrong when building, editing or searching a [Grid](crate::Grid).
///
/// All variants are fatal to the single operation that produced them; nothing is retried.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GridError {
    #[error("cell ({row}, {col}) is outside of the {size}x{size} grid")]
    OutOfBounds { row: i32, col: i32, size: usize },

    #[error("grid size must be positive, got {0}")]
    InvalidSize(usize),

    #[error("invalid query: {0}")]
    InvalidQuery(String),

    #[error("search cancelled by step callback")]
    Cancelled,

    #[error("map line {line} has {found} cells, expected {expected}")]
    RaggedMap {
        line: usize,
        found: usize,
        expected: usize,
    },

    #[error("unexpected {found:?} in map at line {line}, column {column}")]
    InvalidMap {
        line: usize,
        column: usize,
        found: char,
    },
}

pub type Result<T> = std::result::Result<T, GridError>;
