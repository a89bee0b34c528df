//! Errors raised while parsing folds or building puzzle instances.

use thiserror::Error;

/// Everything that can go wrong before a search starts.
///
/// Running out of states is not an error; see [`crate::solver::SearchOutcome`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PuzzleError {
    #[error("invalid direction symbol {0:?}, expected one of N, S, E, W, U, D")]
    InvalidDirection(char),

    #[error("cube width must be at least 1")]
    ZeroWidth,

    #[error("a {width}-wide cube or its multipliers are too large to represent")]
    TooLarge { width: usize },

    #[error("a puzzle needs at least one segment")]
    NoSegments,

    #[error("multiplier at index {index} is zero, every segment needs at least one cube")]
    ZeroMultiplier { index: usize },

    #[error("multipliers sum to {actual} but a {width}x{width}x{width} cube has {expected} cells")]
    MultiplierSum {
        width: usize,
        expected: usize,
        actual: usize,
    },
}
