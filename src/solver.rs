//! Depth-first search over any [`SearchSpace`].
//!
//! Iterative with an explicit stack to avoid recursion depth limits. The
//! search holds no domain knowledge: pruning happens inside the space's
//! successor function, so every state pushed here is worth exploring.

use std::time::{Duration, Instant};

use tracing::{debug, trace};

use crate::SearchSpace;

/// How a search ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchOutcome<S> {
    /// A goal state was reached; holds the full state.
    Solved(S),
    /// Every reachable state was explored without reaching a goal.
    Exhausted,
    /// The caller's node limit was hit before the search finished.
    LimitReached,
}

/// Counters collected during a search.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// States whose successors were generated.
    pub expanded: u64,
    /// Successor states returned by the space.
    pub generated: u64,
    pub elapsed: Duration,
}

/// Outcome plus the statistics of the run that produced it.
#[derive(Debug, Clone)]
pub struct SearchResult<S> {
    pub outcome: SearchOutcome<S>,
    pub stats: SearchStats,
}

impl<S> SearchResult<S> {
    /// Returns the goal state if the search found one.
    pub fn solution(self) -> Option<S> {
        match self.outcome {
            SearchOutcome::Solved(state) => Some(state),
            SearchOutcome::Exhausted | SearchOutcome::LimitReached => None,
        }
    }

    pub fn is_solved(&self) -> bool {
        matches!(self.outcome, SearchOutcome::Solved(_))
    }
}

/// Explores `space` depth-first and returns the first goal state found.
///
/// Successors are explored in the order the space lists them. `node_limit`
/// caps the number of expansions; `None` searches until solved or exhausted.
pub fn depth_first_search<S: SearchSpace>(
    space: &S,
    node_limit: Option<u64>,
) -> SearchResult<S::State> {
    let started = Instant::now();
    let mut stats = SearchStats::default();
    let mut search_stack = vec![space.start_state()];

    let outcome = loop {
        let Some(state) = search_stack.pop() else {
            break SearchOutcome::Exhausted;
        };

        if space.is_goal_state(&state) {
            break SearchOutcome::Solved(state);
        }

        if node_limit.is_some_and(|limit| stats.expanded >= limit) {
            break SearchOutcome::LimitReached;
        }

        let successors = space.successors(&state);
        stats.expanded += 1;
        stats.generated += successors.len() as u64;
        trace!(
            expanded = stats.expanded,
            successors = successors.len(),
            depth = search_stack.len(),
            "expand"
        );

        // reversed so the first-listed successor is popped first
        search_stack.extend(successors.into_iter().rev());
    };

    stats.elapsed = started.elapsed();
    debug!(
        solved = matches!(outcome, SearchOutcome::Solved(_)),
        exhausted = matches!(outcome, SearchOutcome::Exhausted),
        expanded = stats.expanded,
        generated = stats.generated,
        elapsed_ms = stats.elapsed.as_millis() as u64,
        "search finished"
    );

    SearchResult { outcome, stats }
}
