//! Snake cube puzzle definitions.
//!
//! Each snake is described by its straight segments, given as move counts in
//! order along the chain. The last count also includes the closing cell, so
//! the counts of a `width`^3 snake sum to `width`^3.

use crate::error::PuzzleError;
use crate::space::SnakePuzzle;

/// A named puzzle with its cube width and segment multipliers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PuzzleDefinition {
    pub name: &'static str,
    /// Cells per axis of the target cube.
    pub width: usize,
    pub multipliers: &'static [usize],
}

impl PuzzleDefinition {
    pub const fn new(name: &'static str, width: usize, multipliers: &'static [usize]) -> Self {
        Self {
            name,
            width,
            multipliers,
        }
    }

    /// Validates the definition and builds its search space.
    pub fn build(&self) -> Result<SnakePuzzle, PuzzleError> {
        SnakePuzzle::new(self.multipliers, self.width)
    }
}

/// A 2x2x2 snake that turns at every cube.
pub const TINY: PuzzleDefinition = PuzzleDefinition::new("tiny", 2, &[1, 1, 1, 1, 1, 1, 1, 1]);

/// The common 27-cube wooden snake (segments 3-2-2-3-2-3-2-2-3-3-2-2-2-3-3-3-3
/// counted with shared corners).
pub const PUZZLE_A: PuzzleDefinition = PuzzleDefinition::new(
    "a",
    3,
    &[2, 1, 1, 2, 1, 2, 1, 1, 2, 2, 1, 1, 1, 2, 2, 2, 3],
);

pub const PUZZLE_B: PuzzleDefinition = PuzzleDefinition::new(
    "b",
    3,
    &[2, 2, 2, 1, 1, 1, 1, 1, 2, 1, 2, 2, 1, 1, 1, 1, 1, 1, 1, 2],
);

pub const PUZZLE_C: PuzzleDefinition = PuzzleDefinition::new(
    "c",
    3,
    &[2, 2, 2, 2, 1, 1, 1, 1, 1, 1, 1, 1, 1, 2, 1, 1, 1, 2, 1, 2],
);

/// A 64-cube snake for the 4x4x4 cube.
pub const PUZZLE_LARGE: PuzzleDefinition = PuzzleDefinition::new(
    "large",
    4,
    &[
        1, 1, 3, 1, 1, 1, 1, 1, 2, 1, 1, 1, 1, 3, 2, 3, 1, 3, 1, 2, 1, 1, 1, 1, 2, 2, 1, 2, 1, 2,
        1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 2,
    ],
);

/// Every built-in puzzle, smallest first.
pub const PUZZLES: &[PuzzleDefinition] = &[TINY, PUZZLE_A, PUZZLE_B, PUZZLE_C, PUZZLE_LARGE];

/// Looks up a built-in puzzle by name, ignoring case.
pub fn find(name: &str) -> Option<&'static PuzzleDefinition> {
    PUZZLES
        .iter()
        .find(|definition| definition.name.eq_ignore_ascii_case(name))
}
