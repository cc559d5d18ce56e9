//! Interactive 3D board view using kiss3d.
//!
//! Renders the grid as a base plate with the blocks as shallow cuboids and
//! the exit as a highlighted wall segment. Key presses map one-to-one onto
//! board commands; all legality decisions stay in the core, which simply
//! rejects what does not apply.

use kiss3d::prelude::*;

use gridlock::layout::{EXIT_Y, GRID};
use gridlock::{BlockView, PuzzleState, CELL};

/// World units per board cell.
const WORLD_SCALE: f32 = 1.0 / CELL as f32;

/// Gap between rendered blocks (world units) so edges stay visible.
const BLOCK_GAP: f32 = 0.08;

/// Thickness of rendered blocks.
const BLOCK_DEPTH: f32 = 0.45;

/// Maps a board position to world coordinates, centering the grid.
fn to_world(x: f32, y: f32) -> (f32, f32) {
    let center_x = GRID.x as f32 + GRID.width as f32 / 2.0;
    let center_y = GRID.y as f32 + GRID.height as f32 / 2.0;
    ((x - center_x) * WORLD_SCALE, (y - center_y) * WORLD_SCALE)
}

/// Display color for a block; the selected block is always orange.
fn block_color(view: &BlockView) -> Color {
    if view.is_selected {
        Color::new(1.0, 0.5, 0.0, 1.0)
    } else {
        Color::new(view.color.r, view.color.g, view.color.b, 1.0)
    }
}

/// Builds the cuboids for the current block positions.
///
/// Returns the nodes so they can be removed and rebuilt after each state
/// change; eight cuboids make a rebuild cheaper than tracking diffs.
fn build_blocks(scene: &mut SceneNode3d, state: &PuzzleState) -> Vec<SceneNode3d> {
    state
        .blocks()
        .map(|view| {
            let (world_x, world_y) = to_world(
                view.x as f32 + view.width as f32 / 2.0,
                view.y as f32 + view.height as f32 / 2.0,
            );
            scene
                .add_cube(
                    view.width as f32 * WORLD_SCALE - BLOCK_GAP,
                    view.height as f32 * WORLD_SCALE - BLOCK_GAP,
                    BLOCK_DEPTH,
                )
                .set_color(block_color(&view))
                .set_position(Vec3::new(world_x, world_y, 0.0))
        })
        .collect()
}

/// Adds the static scenery: the base plate and the exit wall marker.
fn build_scenery(scene: &mut SceneNode3d) {
    let plate = GRID.width as f32 * WORLD_SCALE + 0.2;
    scene
        .add_cube(plate, plate, 0.1)
        .set_color(Color::new(0.15, 0.15, 0.18, 1.0))
        .set_position(Vec3::new(0.0, 0.0, -0.35));

    // exit: the right wall segment of the winning cell's far column
    let (exit_x, exit_y) = to_world(
        (GRID.x + GRID.width) as f32,
        EXIT_Y as f32 + CELL as f32 / 2.0,
    );
    scene
        .add_cube(0.06, CELL as f32 * WORLD_SCALE, BLOCK_DEPTH)
        .set_color(Color::new(0.0, 1.0, 0.0, 1.0))
        .set_position(Vec3::new(exit_x, exit_y, 0.0));
}

/// Window title combining the status line, win state and key help.
fn title_for(state: &PuzzleState) -> String {
    let win = if state.is_won() { "You win! - " } else { "" };
    format!(
        "Gridlock - {win}{} - [W/A/S/D] move, [N] next, [R] reset",
        state.status_line()
    )
}

/// Runs the interactive viewer until the window closes.
pub fn play() {
    pollster::block_on(play_async());
}

async fn play_async() {
    let mut state = PuzzleState::new();

    let mut window = Window::new(&title_for(&state)).await;
    let mut camera = OrbitCamera3d::default();
    camera.set_dist(9.0);

    let mut scene = SceneNode3d::empty();
    scene
        .add_light(Light::point(100.0))
        .set_position(Vec3::new(3.0, 3.0, 6.0));
    build_scenery(&mut scene);

    let mut block_nodes = build_blocks(&mut scene, &state);
    let mut needs_rebuild = false;

    loop {
        for event in window.events().iter() {
            if let kiss3d::event::WindowEvent::Key(key, action, _) = event.value {
                use kiss3d::event::{Action, Key};
                if action == Action::Press {
                    let changed = match key {
                        Key::W => state.try_move(0, CELL),
                        Key::S => state.try_move(0, -CELL),
                        Key::A => state.try_move(-CELL, 0),
                        Key::D => state.try_move(CELL, 0),
                        Key::N => {
                            state.select_next();
                            true
                        }
                        Key::R => {
                            state.reset();
                            true
                        }
                        _ => false,
                    };
                    if changed {
                        needs_rebuild = true;
                    }
                }
            }
        }

        if needs_rebuild {
            for mut node in block_nodes.drain(..) {
                node.remove();
            }
            block_nodes = build_blocks(&mut scene, &state);
            window.set_title(&title_for(&state));
            needs_rebuild = false;
        }

        if !window.render_3d(&mut scene, &mut camera).await {
            break;
        }
    }
}
