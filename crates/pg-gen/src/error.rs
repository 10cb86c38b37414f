//! Error types for party generation.

use thiserror::Error;

/// Result type for generation operations.
pub type GenResult<T> = Result<T, GenError>;

/// Errors that abort a generation run. No partial party is returned.
#[derive(Debug, Error)]
pub enum GenError {
    /// A roll fell outside every range of a table.
    #[error("{0}")]
    Table(#[from] pg_dice::TableError),

    /// The kindred table named a kindred with no entry.
    #[error("unknown kindred: {0}")]
    UnknownKindred(String),

    /// No unused name turned up within the attempt limit.
    #[error("no unused {kindred} name after {attempts} attempts")]
    NamesExhausted {
        /// The kindred being named.
        kindred: String,
        /// How many names were tried.
        attempts: usize,
    },

    /// A pool that must yield a value was empty.
    #[error("nothing to draw from: {0}")]
    EmptyPool(String),
}
