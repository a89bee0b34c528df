//! The snake cube puzzle as a search space.
//!
//! States are [`Trajectory`] values. Successor generation only offers moves
//! the physical snake allows (straight inside a segment, a perpendicular turn
//! at a segment boundary) and drops every candidate that cannot be completed.

use rustc_hash::FxHashSet;
use tracing::debug;

use crate::error::PuzzleError;
use crate::geometry::{
    is_connected, positions_visited, shift_into_positive_space, Coord, Direction,
};
use crate::grid::{goal_cells, in_bounds};
use crate::trajectory::Trajectory;
use crate::SearchSpace;

/// Direction of the first move of every search.
const START_DIRECTION: Direction = Direction::E;

/// Largest cube accepted; the goal set and pivot table hold one entry per cell.
pub const MAX_CELLS: usize = 1 << 24;

/// A validated snake cube puzzle.
///
/// Built once from its multipliers and cube width; read-only afterwards.
pub struct SnakePuzzle {
    width: usize,
    multipliers: Vec<usize>,
    /// Sum of all multipliers. No trajectory may grow past this length.
    total_length: usize,
    /// `pivots[len]` is true when a trajectory of `len` moves must turn next.
    pivots: Vec<bool>,
    goal: FxHashSet<Coord>,
}

impl SnakePuzzle {
    /// Builds a puzzle from segment lengths and cube width.
    ///
    /// Multiplier `k` is the number of moves in straight run `k`; the final
    /// multiplier also counts the closing cell, so the multipliers must sum to
    /// `width^3`.
    pub fn new(multipliers: &[usize], width: usize) -> Result<Self, PuzzleError> {
        if width == 0 {
            return Err(PuzzleError::ZeroWidth);
        }
        if multipliers.is_empty() {
            return Err(PuzzleError::NoSegments);
        }
        if let Some(index) = multipliers.iter().position(|&m| m == 0) {
            return Err(PuzzleError::ZeroMultiplier { index });
        }

        let expected = width
            .checked_mul(width)
            .and_then(|square| square.checked_mul(width))
            .filter(|&cells| cells <= MAX_CELLS)
            .ok_or(PuzzleError::TooLarge { width })?;
        let total_length = multipliers
            .iter()
            .try_fold(0usize, |sum, &m| sum.checked_add(m))
            .ok_or(PuzzleError::TooLarge { width })?;
        if total_length != expected {
            return Err(PuzzleError::MultiplierSum {
                width,
                expected,
                actual: total_length,
            });
        }

        let mut pivots = vec![false; total_length + 1];
        let mut prefix_sum = 0;
        for &multiplier in multipliers {
            prefix_sum += multiplier;
            pivots[prefix_sum] = true;
        }

        debug!(
            width,
            segments = multipliers.len(),
            total_length,
            "built snake puzzle"
        );

        Ok(Self {
            width,
            multipliers: multipliers.to_vec(),
            total_length,
            pivots,
            goal: goal_cells(width),
        })
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn multipliers(&self) -> &[usize] {
        &self.multipliers
    }

    pub fn total_length(&self) -> usize {
        self.total_length
    }

    pub fn segment_count(&self) -> usize {
        self.multipliers.len()
    }

    /// Returns true if a trajectory with `len` moves must turn on its next move.
    #[inline]
    pub fn is_pivot(&self, len: usize) -> bool {
        self.pivots.get(len).copied().unwrap_or(false)
    }

    /// Index of the straight segment the cell entered at `cell_index` belongs to.
    ///
    /// Cell 0 is the origin and belongs to the first segment, as does the cell
    /// reached by each move of that segment.
    pub fn segment_of_cell(&self, cell_index: usize) -> usize {
        let mut prefix_sum = 0;
        for (segment, &multiplier) in self.multipliers.iter().enumerate() {
            prefix_sum += multiplier;
            if cell_index <= prefix_sum {
                return segment;
            }
        }
        self.multipliers.len() - 1
    }

    /// Returns true if `state` may still be extended to fill the cube.
    ///
    /// Rejects a state when the shifted fold leaves the cube, crosses itself,
    /// or splits the still-empty cells into more than one pocket.
    pub fn is_valid_state(&self, state: &Trajectory) -> bool {
        let positions = shift_into_positive_space(positions_visited(state.directions()));

        let mut visited: FxHashSet<Coord> = FxHashSet::default();
        for &position in &positions {
            if !in_bounds(self.width, position) || !visited.insert(position) {
                return false;
            }
        }

        let remaining: FxHashSet<Coord> = self.goal.difference(&visited).copied().collect();
        is_connected(&remaining)
    }

    /// Moves the snake allows after `state`, before validity filtering.
    fn candidate_directions(&self, state: &Trajectory) -> Vec<Direction> {
        match state.last() {
            None => Direction::ALL.to_vec(),
            Some(last) if self.is_pivot(state.len()) => last.perpendicular().collect(),
            Some(last) => vec![last],
        }
    }
}

impl SearchSpace for SnakePuzzle {
    type State = Trajectory;

    /// A single move east, or no moves at all when the cube is one cell.
    fn start_state(&self) -> Trajectory {
        if self.total_length == 1 {
            return Trajectory::new();
        }
        Trajectory::new().push(START_DIRECTION)
    }

    fn is_goal_state(&self, state: &Trajectory) -> bool {
        let positions = shift_into_positive_space(positions_visited(state.directions()));
        if positions.len() != self.goal.len() {
            return false;
        }
        let visited: FxHashSet<Coord> = positions.into_iter().collect();
        visited == self.goal
    }

    fn successors(&self, state: &Trajectory) -> Vec<Trajectory> {
        if state.len() >= self.total_length {
            return Vec::new();
        }

        self.candidate_directions(state)
            .into_iter()
            .map(|direction| state.push(direction))
            .filter(|candidate| self.is_valid_state(candidate))
            .collect()
    }
}
