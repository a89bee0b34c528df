//! 3D visualization of a folded snake using kiss3d.

use std::collections::HashMap;

use kiss3d::prelude::*;

use snakecube::geometry::{positions_visited, shift_into_positive_space, Coord};
use snakecube::{SnakePuzzle, Trajectory};

/// Returns the display color for a segment.
///
/// Colors cycle so neighbouring segments are always distinguishable.
fn segment_color(segment: usize) -> Color {
    match segment % 6 {
        0 => Color::new(1.0, 0.2, 0.2, 1.0), // red
        1 => Color::new(0.2, 1.0, 0.2, 1.0), // green
        2 => Color::new(0.2, 0.2, 1.0, 1.0), // blue
        3 => Color::new(1.0, 1.0, 0.2, 1.0), // yellow
        4 => Color::new(1.0, 0.2, 1.0, 1.0), // magenta
        _ => Color::new(0.2, 1.0, 1.0, 1.0), // cyan
    }
}

/// Represents a rendered cube in the 3D scene.
struct RenderedCube {
    node: SceneNode3d,
    /// The cube's position when not exploded.
    base_position: Vec3,
    /// Which straight segment of the snake this cube belongs to.
    segment: usize,
}

/// Builds the 3D scene for the first `visible` cells of a fold.
///
/// Cells map x->X, y->Y, z->Z in world units, centered on the origin.
///
/// Returns the rendered cubes and the centroid of each segment, in world
/// coordinates, for the explosion animation.
fn build_scene(
    scene: &mut SceneNode3d,
    puzzle: &SnakePuzzle,
    cells: &[Coord],
    visible: usize,
) -> (Vec<RenderedCube>, HashMap<usize, Vec3>) {
    /// Size of each rendered cube (slightly smaller than 1.0 for visible gaps).
    const CUBE_SIZE: f32 = 0.9;
    const CELL_SPACING: f32 = 1.0;

    let center_offset = -(puzzle.width() as f32 - 1.0) / 2.0;
    let world = |&(x, y, z): &Coord| {
        Vec3::new(
            x as f32 * CELL_SPACING + center_offset,
            y as f32 * CELL_SPACING + center_offset,
            z as f32 * CELL_SPACING + center_offset,
        )
    };

    let mut segment_sums: HashMap<usize, (Vec3, f32)> = HashMap::new();
    for (cell_index, cell) in cells.iter().enumerate() {
        let entry = segment_sums
            .entry(puzzle.segment_of_cell(cell_index))
            .or_insert((Vec3::ZERO, 0.0));
        entry.0 += world(cell);
        entry.1 += 1.0;
    }
    let segment_centroids = segment_sums
        .into_iter()
        .map(|(segment, (sum, count))| (segment, sum / count))
        .collect();

    let rendered_cubes = cells
        .iter()
        .enumerate()
        .take(visible)
        .map(|(cell_index, cell)| {
            let segment = puzzle.segment_of_cell(cell_index);
            let base_position = world(cell);
            let node = scene
                .add_cube(CUBE_SIZE, CUBE_SIZE, CUBE_SIZE)
                .set_color(segment_color(segment))
                .set_position(base_position);
            RenderedCube {
                node,
                base_position,
                segment,
            }
        })
        .collect();

    (rendered_cubes, segment_centroids)
}

/// Displays a solved fold in an interactive 3D viewer.
pub fn display(puzzle: &SnakePuzzle, trajectory: &Trajectory) {
    pollster::block_on(display_async(puzzle, trajectory));
}

async fn display_async(puzzle: &SnakePuzzle, trajectory: &Trajectory) {
    let cells = shift_into_positive_space(positions_visited(trajectory.directions()));
    let num_cells = cells.len();
    let mut visible = num_cells;

    let title = |visible: usize| {
        format!(
            "Cube {visible}/{num_cells} - [Left/Right] fold, [Up/Down] explode, [R] reset"
        )
    };
    let mut window = Window::new(&title(visible)).await;

    let mut camera = OrbitCamera3d::default();
    camera.set_dist(2.5 * puzzle.width() as f32 + 2.0);

    let mut scene = SceneNode3d::empty();
    scene
        .add_light(Light::point(100.0))
        .set_position(Vec3::new(5.0, 5.0, 5.0));

    let (mut rendered_cubes, segment_centroids) =
        build_scene(&mut scene, puzzle, &cells, visible);

    // how far segments move away from the center (0.0 = compact)
    let mut explosion_amount: f32 = 0.0;
    const EXPLOSION_SPEED: f32 = 0.05;
    let mut needs_rebuild = false;

    loop {
        for event in window.events().iter() {
            if let kiss3d::event::WindowEvent::Key(key, action, _) = event.value {
                use kiss3d::event::{Action, Key};
                if action == Action::Press {
                    match key {
                        Key::Up => explosion_amount += EXPLOSION_SPEED,
                        Key::Down => {
                            explosion_amount = (explosion_amount - EXPLOSION_SPEED).max(0.0)
                        }
                        Key::R => {
                            explosion_amount = 0.0;
                            visible = num_cells;
                            needs_rebuild = true;
                        }
                        Key::Right => {
                            visible = (visible + 1).min(num_cells);
                            needs_rebuild = true;
                        }
                        Key::Left => {
                            visible = visible.saturating_sub(1).max(1);
                            needs_rebuild = true;
                        }
                        _ => {}
                    }
                }
            }
        }

        if needs_rebuild {
            for mut cube in rendered_cubes.drain(..) {
                cube.node.remove();
            }
            let (new_cubes, _) = build_scene(&mut scene, puzzle, &cells, visible);
            rendered_cubes = new_cubes;
            window.set_title(&title(visible));
            needs_rebuild = false;
        }

        for cube in &mut rendered_cubes {
            let direction = segment_centroids
                .get(&cube.segment)
                .map_or(Vec3::ZERO, |centroid| centroid.normalize_or_zero());
            cube.node
                .set_position(cube.base_position + direction * explosion_amount * 2.0);
        }

        if !window.render_3d(&mut scene, &mut camera).await {
            break;
        }
    }
}
