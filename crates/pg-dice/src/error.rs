//! Error types for dice parsing and table lookups.

use thiserror::Error;

/// Result type for dice operations.
pub type DiceResult<T> = Result<T, DiceError>;

/// Errors raised while parsing a dice expression.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DiceError {
    /// The text is not a constant, `NdS`, or `NdS+M`.
    #[error("malformed dice expression: \"{0}\" (expected N, NdS or NdS+M)")]
    Malformed(String),

    /// The expression parsed but asks for zero dice or zero-sided dice.
    #[error("dice expression \"{0}\" needs at least one die with at least one side")]
    Degenerate(String),

    /// The expression asks for more dice or sides than can be rolled, or its
    /// largest total does not fit in a `u32`.
    #[error(
        "dice expression \"{0}\" is too large (at most {max_dice} dice of {max_sides} sides)",
        max_dice = crate::expr::MAX_DICE,
        max_sides = crate::expr::MAX_SIDES
    )]
    TooLarge(String),
}

/// Errors raised by roll tables.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TableError {
    /// A table key is not of the form `start-end`.
    #[error("invalid range key \"{0}\" (expected \"start-end\")")]
    InvalidRange(String),

    /// Two ranges in the same table share at least one value.
    #[error("ranges {first} and {second} overlap")]
    Overlap {
        /// The range that came first in the table.
        first: String,
        /// The range that overlaps it.
        second: String,
    },

    /// No range in the table contains the rolled value.
    #[error("no table entry covers roll {value}")]
    Miss {
        /// The value that was looked up.
        value: u32,
    },
}
