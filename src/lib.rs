//! Snake Cube Solver Library
//!
//! Folds a chain of unit cubes, split into straight segments of known length,
//! so that it fills an NxNxN cube. The puzzle is a search space whose
//! successor function prunes every fold that leaves the cube, crosses itself,
//! or cuts the empty cells into separate pockets; a plain depth-first search
//! then finds a solution.

pub mod error;
pub mod geometry;
pub mod grid;
pub mod puzzles;
pub mod solver;
pub mod space;
pub mod trajectory;

pub use error::PuzzleError;
pub use puzzles::PuzzleDefinition;
pub use solver::{depth_first_search, SearchOutcome, SearchResult, SearchStats};
pub use space::SnakePuzzle;
pub use trajectory::Trajectory;

/// A state space that [`depth_first_search`] can explore.
pub trait SearchSpace {
    type State;

    fn start_state(&self) -> Self::State;
    fn is_goal_state(&self, state: &Self::State) -> bool;
    /// States reachable in one step, in the order they should be explored.
    fn successors(&self, state: &Self::State) -> Vec<Self::State>;
}

/// Builds `definition` and searches it, stopping after `node_limit` expansions
/// if given.
pub fn solve(
    definition: &PuzzleDefinition,
    node_limit: Option<u64>,
) -> Result<SearchResult<Trajectory>, PuzzleError> {
    let puzzle = definition.build()?;
    Ok(depth_first_search(&puzzle, node_limit))
}

fn first_solution(definition: &PuzzleDefinition) -> Result<Option<Trajectory>, PuzzleError> {
    Ok(solve(definition, None)?.solution())
}

/// Fold for the common 27-cube snake.
pub fn solution_a() -> Result<Option<Trajectory>, PuzzleError> {
    first_solution(&puzzles::PUZZLE_A)
}

/// Fold for the 27-cube snake handed out with the puzzle set; same as
/// [`solution_a`].
pub fn puzzle_solution() -> Result<Option<Trajectory>, PuzzleError> {
    solution_a()
}

pub fn solution_b() -> Result<Option<Trajectory>, PuzzleError> {
    first_solution(&puzzles::PUZZLE_B)
}

pub fn solution_c() -> Result<Option<Trajectory>, PuzzleError> {
    first_solution(&puzzles::PUZZLE_C)
}

/// Fold for the 4x4x4 snake.
pub fn solution_large() -> Result<Option<Trajectory>, PuzzleError> {
    first_solution(&puzzles::PUZZLE_LARGE)
}
