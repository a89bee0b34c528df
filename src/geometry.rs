//! Integer 3D geometry for folding a snake through a cube.
//!
//! A fold is a sequence of unit moves along one of the six axis directions.
//! Replaying the moves from the origin yields the cells the snake occupies,
//! which are then shifted so the minimum coordinate on every axis is zero.

use std::collections::VecDeque;
use std::fmt;

use rustc_hash::FxHashSet;

use crate::error::PuzzleError;

/// A 3D coordinate representing a unit cube position.
pub type Coord = (i32, i32, i32);

/// The axis a direction moves along.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Axis {
    X,
    Y,
    Z,
}

/// One of the six unit moves.
///
/// Declaration order is the enumeration order used for successor generation,
/// so changing it changes which solution the search finds first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Direction {
    /// +Y
    N,
    /// -Y
    S,
    /// +X
    E,
    /// -X
    W,
    /// +Z
    U,
    /// -Z
    D,
}

impl Direction {
    /// All directions in enumeration order.
    pub const ALL: [Direction; 6] = [
        Direction::N,
        Direction::S,
        Direction::E,
        Direction::W,
        Direction::U,
        Direction::D,
    ];

    /// Unit displacement for this direction.
    #[inline]
    pub const fn offset(self) -> Coord {
        match self {
            Direction::N => (0, 1, 0),
            Direction::S => (0, -1, 0),
            Direction::E => (1, 0, 0),
            Direction::W => (-1, 0, 0),
            Direction::U => (0, 0, 1),
            Direction::D => (0, 0, -1),
        }
    }

    pub const fn inverse(self) -> Direction {
        match self {
            Direction::N => Direction::S,
            Direction::S => Direction::N,
            Direction::E => Direction::W,
            Direction::W => Direction::E,
            Direction::U => Direction::D,
            Direction::D => Direction::U,
        }
    }

    pub const fn axis(self) -> Axis {
        match self {
            Direction::N | Direction::S => Axis::Y,
            Direction::E | Direction::W => Axis::X,
            Direction::U | Direction::D => Axis::Z,
        }
    }

    #[inline]
    pub fn is_perpendicular(self, other: Direction) -> bool {
        self.axis() != other.axis()
    }

    /// The four directions perpendicular to this one, in enumeration order.
    pub fn perpendicular(self) -> impl Iterator<Item = Direction> {
        Direction::ALL
            .into_iter()
            .filter(move |&candidate| candidate.is_perpendicular(self))
    }

    pub const fn symbol(self) -> char {
        match self {
            Direction::N => 'N',
            Direction::S => 'S',
            Direction::E => 'E',
            Direction::W => 'W',
            Direction::U => 'U',
            Direction::D => 'D',
        }
    }
}

impl TryFrom<char> for Direction {
    type Error = PuzzleError;

    fn try_from(symbol: char) -> Result<Self, Self::Error> {
        match symbol {
            'N' => Ok(Direction::N),
            'S' => Ok(Direction::S),
            'E' => Ok(Direction::E),
            'W' => Ok(Direction::W),
            'U' => Ok(Direction::U),
            'D' => Ok(Direction::D),
            other => Err(PuzzleError::InvalidDirection(other)),
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// Returns the position one unit away from `position` in `direction`.
#[inline]
pub fn step(position: Coord, direction: Direction) -> Coord {
    let (dx, dy, dz) = direction.offset();
    (position.0 + dx, position.1 + dy, position.2 + dz)
}

/// Replays moves from the origin.
///
/// The result starts with the origin and has one entry per move, so its
/// length is always `directions.len() + 1`.
pub fn positions_visited<I>(directions: I) -> Vec<Coord>
where
    I: IntoIterator<Item = Direction>,
{
    let directions = directions.into_iter();
    let mut positions = Vec::with_capacity(directions.size_hint().0 + 1);
    let mut current = (0, 0, 0);
    positions.push(current);
    for direction in directions {
        current = step(current, direction);
        positions.push(current);
    }
    positions
}

/// Translates coordinates so the minimum x, y, z values are all zero.
///
/// Relative offsets are preserved. An empty input is returned unchanged.
pub fn shift_into_positive_space(mut coords: Vec<Coord>) -> Vec<Coord> {
    let Some(&first) = coords.first() else {
        return coords;
    };
    let (min_x, min_y, min_z) = coords.iter().fold(first, |(mx, my, mz), &(x, y, z)| {
        (mx.min(x), my.min(y), mz.min(z))
    });

    for (x, y, z) in &mut coords {
        *x -= min_x;
        *y -= min_y;
        *z -= min_z;
    }

    coords
}

/// Checks whether `cells` form a single face-connected component.
///
/// Breadth-first traversal over the six axis neighbours. The empty set counts
/// as connected.
pub fn is_connected(cells: &FxHashSet<Coord>) -> bool {
    let Some(&start) = cells.iter().next() else {
        return true;
    };

    let mut reached: FxHashSet<Coord> = FxHashSet::default();
    reached.insert(start);
    let mut frontier = VecDeque::from([start]);

    while let Some(cell) = frontier.pop_front() {
        for direction in Direction::ALL {
            let neighbour = step(cell, direction);
            if cells.contains(&neighbour) && reached.insert(neighbour) {
                frontier.push_back(neighbour);
            }
        }
    }

    reached.len() == cells.len()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn set(cells: &[Coord]) -> FxHashSet<Coord> {
        cells.iter().copied().collect()
    }

    #[test]
    fn test_moves_are_invertible() {
        let samples = [(0, 0, 0), (2, -1, 5), (-3, 4, -7)];
        for position in samples {
            for direction in Direction::ALL {
                let there = step(position, direction);
                assert_ne!(there, position);
                assert_eq!(
                    step(there, direction.inverse()),
                    position,
                    "{direction} then its inverse should return to {position:?}"
                );
            }
        }
    }

    #[test]
    fn test_perpendicular_excludes_own_axis() {
        for direction in Direction::ALL {
            let turns: Vec<Direction> = direction.perpendicular().collect();
            assert_eq!(turns.len(), 4);
            assert!(!turns.contains(&direction));
            assert!(!turns.contains(&direction.inverse()));
        }
        let from_east: Vec<Direction> = Direction::E.perpendicular().collect();
        assert_eq!(
            from_east,
            vec![Direction::N, Direction::S, Direction::U, Direction::D]
        );
    }

    #[test]
    fn test_symbol_parsing() {
        for direction in Direction::ALL {
            assert_eq!(Direction::try_from(direction.symbol()), Ok(direction));
        }
        assert_eq!(
            Direction::try_from('x'),
            Err(PuzzleError::InvalidDirection('x'))
        );
        assert_eq!(
            Direction::try_from('n'),
            Err(PuzzleError::InvalidDirection('n'))
        );
    }

    #[test]
    fn test_positions_visited_length() {
        use Direction::*;
        let moves = [E, E, N, U, W, S, D];
        for prefix in 0..=moves.len() {
            let positions = positions_visited(moves[..prefix].iter().copied());
            assert_eq!(positions.len(), prefix + 1);
            assert_eq!(positions[0], (0, 0, 0));
        }
        assert_eq!(
            positions_visited([E, N, W]),
            vec![(0, 0, 0), (1, 0, 0), (1, 1, 0), (0, 1, 0)]
        );
    }

    #[test]
    fn test_shift_moves_minimum_to_zero() {
        let coords = vec![(-2, 3, 0), (1, -4, 2), (0, 0, -1)];
        let shifted = shift_into_positive_space(coords.clone());

        assert_eq!(shifted.iter().map(|c| c.0).min(), Some(0));
        assert_eq!(shifted.iter().map(|c| c.1).min(), Some(0));
        assert_eq!(shifted.iter().map(|c| c.2).min(), Some(0));

        // pairwise offsets survive the translation
        for i in 0..coords.len() {
            for j in 0..coords.len() {
                let before = (
                    coords[i].0 - coords[j].0,
                    coords[i].1 - coords[j].1,
                    coords[i].2 - coords[j].2,
                );
                let after = (
                    shifted[i].0 - shifted[j].0,
                    shifted[i].1 - shifted[j].1,
                    shifted[i].2 - shifted[j].2,
                );
                assert_eq!(before, after);
            }
        }
    }

    #[test]
    fn test_shift_empty_is_noop() {
        assert!(shift_into_positive_space(Vec::new()).is_empty());
    }

    #[test]
    fn test_connectivity() {
        assert!(is_connected(&FxHashSet::default()));
        assert!(is_connected(&set(&[(5, 5, 5)])));
        assert!(is_connected(&set(&[(0, 0, 0), (0, 0, 1)])));
        assert!(!is_connected(&set(&[(0, 0, 0), (1, 1, 0)])));
        assert!(!is_connected(&set(&[(0, 0, 0), (0, 0, 2)])));
        assert!(is_connected(&set(&[
            (0, 0, 0),
            (1, 0, 0),
            (1, 1, 0),
            (1, 1, 1)
        ])));
    }

    #[test]
    fn test_connectivity_detects_pocket() {
        // a 3x1x1 bar with the middle cell removed splits in two
        assert!(!is_connected(&set(&[(0, 0, 0), (2, 0, 0)])));
        // two chains joined through one shared neighbour
        assert!(is_connected(&set(&[
            (0, 0, 0),
            (0, 1, 0),
            (0, 2, 0),
            (1, 2, 0),
            (2, 2, 0),
            (2, 1, 0),
            (2, 0, 0)
        ])));
    }
}
