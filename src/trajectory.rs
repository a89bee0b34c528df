//! Immutable fold sequences.
//!
//! Every search state is a [`Trajectory`]. Appending a move allocates one link
//! and shares the parent's prefix, so sibling branches never see each other's
//! moves and backtracking is just dropping a value.

use std::fmt;
use std::rc::Rc;
use std::str::FromStr;

use crate::error::PuzzleError;
use crate::geometry::Direction;

struct Link {
    direction: Direction,
    parent: Option<Rc<Link>>,
}

/// A persistent list of moves starting from the origin.
#[derive(Clone, Default)]
pub struct Trajectory {
    head: Option<Rc<Link>>,
    len: usize,
}

impl Trajectory {
    /// The trajectory with no moves.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a new trajectory with `direction` appended; `self` is untouched.
    pub fn push(&self, direction: Direction) -> Self {
        Self {
            head: Some(Rc::new(Link {
                direction,
                parent: self.head.clone(),
            })),
            len: self.len + 1,
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// The most recent move.
    #[inline]
    pub fn last(&self) -> Option<Direction> {
        self.head.as_ref().map(|link| link.direction)
    }

    /// Moves in order from the first to the last.
    pub fn directions(&self) -> Vec<Direction> {
        let mut directions = Vec::with_capacity(self.len);
        let mut cursor = self.head.as_deref();
        while let Some(link) = cursor {
            directions.push(link.direction);
            cursor = link.parent.as_deref();
        }
        directions.reverse();
        directions
    }
}

impl Drop for Trajectory {
    /// Unlinks uniquely owned links one at a time so long folds do not
    /// recurse once per move while dropping.
    fn drop(&mut self) {
        let mut cursor = self.head.take();
        while let Some(link) = cursor {
            match Rc::try_unwrap(link) {
                Ok(mut owned) => cursor = owned.parent.take(),
                Err(_) => break,
            }
        }
    }
}

impl FromIterator<Direction> for Trajectory {
    fn from_iter<I: IntoIterator<Item = Direction>>(iter: I) -> Self {
        iter.into_iter()
            .fold(Trajectory::new(), |trajectory, direction| {
                trajectory.push(direction)
            })
    }
}

impl FromStr for Trajectory {
    type Err = PuzzleError;

    /// Parses the joined-symbol form, e.g. `"EENWU"`. Whitespace is ignored.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.chars()
            .filter(|c| !c.is_whitespace())
            .map(Direction::try_from)
            .collect()
    }
}

impl PartialEq for Trajectory {
    fn eq(&self, other: &Self) -> bool {
        self.len == other.len && self.directions() == other.directions()
    }
}

impl Eq for Trajectory {}

impl fmt::Display for Trajectory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for direction in self.directions() {
            write!(f, "{direction}")?;
        }
        Ok(())
    }
}

impl fmt::Debug for Trajectory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Trajectory({self})")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use Direction::*;

    #[test]
    fn test_push_leaves_parent_untouched() {
        let parent = Trajectory::new().push(E).push(E);
        let north = parent.push(N);
        let south = parent.push(S);

        assert_eq!(parent.len(), 2);
        assert_eq!(parent.directions(), vec![E, E]);
        assert_eq!(north.directions(), vec![E, E, N]);
        assert_eq!(south.directions(), vec![E, E, S]);
        assert_eq!(north.last(), Some(N));
        assert_eq!(south.last(), Some(S));
    }

    #[test]
    fn test_empty_trajectory() {
        let empty = Trajectory::new();
        assert!(empty.is_empty());
        assert_eq!(empty.last(), None);
        assert!(empty.directions().is_empty());
        assert_eq!(empty.to_string(), "");
    }

    #[test]
    fn test_parse_and_display() {
        let trajectory: Trajectory = "ENWU SED".parse().unwrap();
        assert_eq!(trajectory.len(), 7);
        assert_eq!(trajectory.to_string(), "ENWUSED");
        assert_eq!(trajectory.directions(), vec![E, N, W, U, S, E, D]);
    }

    #[test]
    fn test_parse_rejects_unknown_symbol() {
        let parsed = "ENQ".parse::<Trajectory>();
        assert_eq!(parsed, Err(PuzzleError::InvalidDirection('Q')));
    }

    #[test]
    fn test_dropping_long_trajectory() {
        let long: Trajectory = std::iter::repeat(E).take(1_000_000).collect();
        assert_eq!(long.len(), 1_000_000);
        drop(long);
    }

    #[test]
    fn test_drop_keeps_shared_prefix() {
        let prefix: Trajectory = [N, E, U].into_iter().collect();
        let child = prefix.push(W);
        drop(prefix);
        assert_eq!(child.directions(), vec![N, E, U, W]);

        let sibling = child.push(S);
        drop(child);
        assert_eq!(sibling.to_string(), "NEUWS");
    }

    #[test]
    fn test_equality_is_by_moves() {
        let built = Trajectory::new().push(U).push(W);
        let collected: Trajectory = [U, W].into_iter().collect();
        assert_eq!(built, collected);
        assert_ne!(built, Trajectory::new().push(U).push(E));
    }
}
