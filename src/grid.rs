//! Target cube cells and text rendering of folds.
//!
//! The cube has `width` cells per axis. Cells are addressed either by
//! coordinate or by a flat x-major index.

use rustc_hash::FxHashSet;

use crate::geometry::{positions_visited, shift_into_positive_space, Coord};
use crate::trajectory::Trajectory;

/// Converts (x, y, z) coordinates to a linear cell index.
///
/// Index order is x-major: `idx = x * width * width + y * width + z`.
#[inline(always)]
pub const fn coord_to_idx(width: usize, coord: Coord) -> usize {
    (coord.0 as usize) * width * width + (coord.1 as usize) * width + (coord.2 as usize)
}

/// Converts a linear cell index to (x, y, z) coordinates.
#[inline(always)]
pub const fn idx_to_coord(width: usize, cell_index: usize) -> Coord {
    (
        (cell_index / (width * width)) as i32,
        ((cell_index / width) % width) as i32,
        (cell_index % width) as i32,
    )
}

/// All cells of a `width`^3 cube.
pub fn goal_cells(width: usize) -> FxHashSet<Coord> {
    (0..width * width * width)
        .map(|cell_index| idx_to_coord(width, cell_index))
        .collect()
}

/// Returns true if every coordinate of `coord` lies in `[0, width)`.
#[inline]
pub fn in_bounds(width: usize, (x, y, z): Coord) -> bool {
    let range = 0..width as i32;
    range.contains(&x) && range.contains(&y) && range.contains(&z)
}

/// Formats a fold as a human-readable string.
///
/// Displays `width` z-slices side by side. Each cell shows the 1-based step at
/// which the snake enters it; unvisited cells show as '.'. Rows run from
/// y = width - 1 at the top down to y = 0.
pub fn format_solution(width: usize, trajectory: &Trajectory) -> String {
    let positions = shift_into_positive_space(positions_visited(trajectory.directions()));

    let mut visit_order = vec![None; width * width * width];
    for (step, &position) in positions.iter().enumerate() {
        if in_bounds(width, position) {
            visit_order[coord_to_idx(width, position)] = Some(step + 1);
        }
    }

    let cell_width = (width * width * width).to_string().len();
    let slice_width = width * cell_width + width.saturating_sub(1);

    // header: z=0, z=1, ..., z=width-1
    let mut output = String::new();
    for z in 0..width {
        if z > 0 {
            output.push_str("  ");
        }
        let label = format!("z={z}");
        if z + 1 < width {
            output.push_str(&format!("{label:<slice_width$}"));
        } else {
            output.push_str(&label);
        }
    }
    output.push('\n');

    for y in (0..width).rev() {
        for z in 0..width {
            if z > 0 {
                output.push_str("  ");
            }
            let row: Vec<String> = (0..width)
                .map(|x| {
                    let cell = coord_to_idx(width, (x as i32, y as i32, z as i32));
                    match visit_order[cell] {
                        Some(step) => format!("{step:>cell_width$}"),
                        None => format!("{:>cell_width$}", '.'),
                    }
                })
                .collect();
            output.push_str(&row.join(" "));
        }
        output.push('\n');
    }

    output
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_coordinate_conversion_roundtrip() {
        for width in 1..=4 {
            for idx in 0..width * width * width {
                let coord = idx_to_coord(width, idx);
                assert!(in_bounds(width, coord), "{coord:?} escaped width {width}");
                assert_eq!(coord_to_idx(width, coord), idx);
            }
        }
    }

    #[test]
    fn test_goal_cells_cover_cube() {
        let cells = goal_cells(3);
        assert_eq!(cells.len(), 27);
        assert!(cells.contains(&(0, 0, 0)));
        assert!(cells.contains(&(2, 2, 2)));
        assert!(!cells.contains(&(3, 0, 0)));
        assert!(!cells.contains(&(0, -1, 0)));
    }

    #[test]
    fn test_format_two_cube_fold() {
        let trajectory: Trajectory = "ENWUSEN".parse().unwrap();
        assert_eq!(
            format_solution(2, &trajectory),
            "z=0  z=1\n4 3  5 8\n1 2  6 7\n"
        );
    }

    #[test]
    fn test_format_partial_fold_marks_empty_cells() {
        let trajectory: Trajectory = "E".parse().unwrap();
        assert_eq!(
            format_solution(2, &trajectory),
            "z=0  z=1\n. .  . .\n1 2  . .\n"
        );
    }
}
