//! Board constants and the fixed initial layout.
//!
//! The board is the classic single configuration: a 6x6 grid of 100-unit
//! cells offset by a 100-unit margin, holding eight blocks. Block 7 is the
//! target piece; it wins by reaching the exit position on the right wall.

use crate::geometry::Rect;

/// Grid width in cells.
pub const NUM_X: i32 = 6;

/// Grid height in cells.
pub const NUM_Y: i32 = 6;

/// Cell edge length in board units.
pub const CELL: i32 = 100;

/// Offset from the coordinate origin to the grid corner.
pub const MARGIN: i32 = 100;

/// Number of blocks on the board.
pub const BLOCK_COUNT: usize = 8;

/// Index of the target block.
pub const TARGET_BLOCK: usize = 7;

/// The rectangle every block must stay inside.
pub const GRID: Rect = Rect::new(MARGIN, MARGIN, NUM_X * CELL, NUM_Y * CELL);

/// Exit position: the target block wins by sitting exactly here.
pub const EXIT_X: i32 = MARGIN + 4 * CELL;

/// See [`EXIT_X`]; the exit row is level with the target block's start row.
pub const EXIT_Y: i32 = MARGIN + 3 * CELL;

/// Display color of a block. Presentation metadata only; the rules never
/// read it.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
}

impl Color {
    /// Creates a color from RGB components in `0.0..=1.0`.
    pub const fn new(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b }
    }
}

/// One entry of the initial layout.
///
/// The position is relative to the grid corner; [`rect`](Self::rect) adds the
/// margin.
#[derive(Clone, Copy, Debug)]
pub struct BlockSpec {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
    pub color: Color,
}

impl BlockSpec {
    const fn new(x: i32, y: i32, width: i32, height: i32, color: Color) -> Self {
        Self {
            x,
            y,
            width,
            height,
            color,
        }
    }

    /// The block's absolute rectangle on the board.
    pub const fn rect(&self) -> Rect {
        Rect::new(MARGIN + self.x, MARGIN + self.y, self.width, self.height)
    }
}

/// Compile-time check that a layout is in bounds and collision-free.
///
/// The rules rely on the table being well-formed and never re-validate it at
/// runtime, so a malformed table must fail the build instead.
const fn validated(layout: [BlockSpec; BLOCK_COUNT]) -> [BlockSpec; BLOCK_COUNT] {
    let mut i = 0;
    while i < BLOCK_COUNT {
        assert!(
            layout[i].rect().within(&GRID),
            "layout block outside the grid"
        );
        let mut j = i + 1;
        while j < BLOCK_COUNT {
            assert!(
                !layout[i].rect().overlaps(&layout[j].rect()),
                "layout blocks overlap"
            );
            j += 1;
        }
        i += 1;
    }
    layout
}

/// The fixed initial layout, indexed 0..7.
///
/// Every block spans whole cells, so all reachable positions stay on the
/// cell lattice and the exit check is an exact equality.
pub const INITIAL_LAYOUT: [BlockSpec; BLOCK_COUNT] = validated([
    // tall pair in the upper-left corner
    BlockSpec::new(0, 400, CELL, 2 * CELL, Color::new(0.0, 0.0, 1.0)),
    BlockSpec::new(100, 400, CELL, 2 * CELL, Color::new(0.0, 1.0, 1.0)),
    // full-height columns walling off the exit row
    BlockSpec::new(300, 300, CELL, 3 * CELL, Color::new(1.0, 1.0, 0.0)),
    BlockSpec::new(400, 300, CELL, 3 * CELL, Color::new(0.0, 1.0, 1.0)),
    BlockSpec::new(500, 300, CELL, 3 * CELL, Color::new(1.0, 0.0, 1.0)),
    // crossbar the columns rest on
    BlockSpec::new(300, 200, 3 * CELL, CELL, Color::new(0.5, 0.3, 1.0)),
    // runner near the bottom wall
    BlockSpec::new(0, 100, 2 * CELL, CELL, Color::new(1.0, 0.0, 0.0)),
    // the target block, level with the exit
    BlockSpec::new(0, 300, 2 * CELL, CELL, Color::new(0.0, 1.0, 0.0)),
]);
