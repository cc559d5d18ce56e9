//! Puzzle state and move legality.
//!
//! The board is a fixed arena of eight blocks addressed by index; exactly one
//! block is selected at a time. All mutation goes through [`PuzzleState::reset`],
//! [`PuzzleState::select_next`] and [`PuzzleState::try_move`], and every
//! reachable state keeps the blocks inside the grid and pairwise
//! non-overlapping. A rejected move leaves the state untouched.

use std::fmt;

use crate::geometry::Rect;
use crate::layout::{
    BlockSpec, Color, BLOCK_COUNT, CELL, EXIT_X, EXIT_Y, GRID, INITIAL_LAYOUT, MARGIN, NUM_X,
    NUM_Y, TARGET_BLOCK,
};

/// Movement axis of a block, derived from its shape.
///
/// A block wider than one cell slides along x, anything else along y. The
/// axis is computed from the stored width rather than kept as a separate
/// flag, so the two can never disagree.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Orientation {
    /// Slides along the x axis only.
    Horizontal,
    /// Slides along the y axis only.
    Vertical,
}

impl fmt::Display for Orientation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Orientation::Horizontal => "horizontal",
            Orientation::Vertical => "vertical",
        })
    }
}

/// A single puzzle piece.
#[derive(Clone, Copy, Debug)]
pub struct Block {
    rect: Rect,
    color: Color,
}

impl Block {
    const fn from_spec(spec: &BlockSpec) -> Self {
        Self {
            rect: spec.rect(),
            color: spec.color,
        }
    }

    /// The block's rectangle in board coordinates.
    pub fn rect(&self) -> Rect {
        self.rect
    }

    /// The block's display color.
    pub fn color(&self) -> Color {
        self.color
    }

    /// Movement axis, derived from the stored width.
    pub fn orientation(&self) -> Orientation {
        if self.rect.width > CELL {
            Orientation::Horizontal
        } else {
            Orientation::Vertical
        }
    }
}

/// Read-only snapshot of one block, as consumed by renderers.
#[derive(Clone, Copy, Debug)]
pub struct BlockView {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
    pub orientation: Orientation,
    pub color: Color,
    pub is_selected: bool,
}

/// The puzzle state machine: eight blocks and a selection cursor.
///
/// A plain owned value with no hidden statics; callers create as many
/// independent boards as they need and drive each one synchronously.
pub struct PuzzleState {
    blocks: [Block; BLOCK_COUNT],
    selected: usize,
}

impl PuzzleState {
    /// Creates a board populated with the fixed initial layout, block 0
    /// selected.
    pub fn new() -> Self {
        Self {
            blocks: initial_blocks(),
            selected: 0,
        }
    }

    /// Restores the fixed initial layout and selects block 0.
    pub fn reset(&mut self) {
        self.blocks = initial_blocks();
        self.selected = 0;
    }

    /// Advances the selection to the next block, wrapping past the last.
    pub fn select_next(&mut self) {
        self.selected = (self.selected + 1) % BLOCK_COUNT;
    }

    /// Index of the currently selected block. Always in `0..BLOCK_COUNT`.
    pub fn selected_index(&self) -> usize {
        self.selected
    }

    /// Attempts to slide the selected block by `(dx, dy)`.
    ///
    /// A request off the block's movement axis, a destination leaving the
    /// grid, and a destination overlapping any other block are all rejected.
    /// Touching edges are not overlap, so a block may land flush against a
    /// neighbor. Rejection never mutates any position.
    ///
    /// Returns whether the move was applied.
    pub fn try_move(&mut self, dx: i32, dy: i32) -> bool {
        let block = &self.blocks[self.selected];

        let on_axis = match block.orientation() {
            Orientation::Horizontal => dy == 0,
            Orientation::Vertical => dx == 0,
        };
        if !on_axis {
            return false;
        }

        let candidate = block.rect().translated(dx, dy);
        if !candidate.within(&GRID) {
            return false;
        }
        for (index, other) in self.blocks.iter().enumerate() {
            if index != self.selected && candidate.overlaps(&other.rect()) {
                return false;
            }
        }

        self.blocks[self.selected].rect = candidate;
        true
    }

    /// Whether the target block sits exactly on the exit position.
    ///
    /// Purely positional: moving the target block off the exit makes this
    /// false again, and a won board keeps accepting moves.
    pub fn is_won(&self) -> bool {
        let target = self.blocks[TARGET_BLOCK].rect();
        target.x == EXIT_X && target.y == EXIT_Y
    }

    /// Read-only snapshot of the block at `index`.
    ///
    /// Indices `0..BLOCK_COUNT` are the caller's contract; anything else
    /// panics.
    pub fn block_at(&self, index: usize) -> BlockView {
        let block = &self.blocks[index];
        BlockView {
            x: block.rect.x,
            y: block.rect.y,
            width: block.rect.width,
            height: block.rect.height,
            orientation: block.orientation(),
            color: block.color,
            is_selected: index == self.selected,
        }
    }

    /// Snapshots of all blocks in index order.
    pub fn blocks(&self) -> impl Iterator<Item = BlockView> + '_ {
        (0..BLOCK_COUNT).map(|index| self.block_at(index))
    }

    /// Formats the board as text, one character per cell.
    ///
    /// Cells show the owning block's index or `.` when empty; rows print top
    /// to bottom and the exit row is marked with `>` at its right wall.
    pub fn format_board(&self) -> String {
        let mut output = String::new();
        for row in (0..NUM_Y).rev() {
            for col in 0..NUM_X {
                let cell = Rect::new(MARGIN + col * CELL, MARGIN + row * CELL, CELL, CELL);
                let owner = self
                    .blocks
                    .iter()
                    .position(|block| block.rect().overlaps(&cell));
                output.push(match owner {
                    Some(index) => char::from(b'0' + index as u8),
                    None => '.',
                });
            }
            if MARGIN + row * CELL == EXIT_Y {
                output.push('>');
            }
            output.push('\n');
        }
        output
    }

    /// One-line summary of the selected block for status displays.
    pub fn status_line(&self) -> String {
        let view = self.block_at(self.selected);
        format!(
            "block {} at ({}, {}) size {}x{} {}",
            self.selected, view.x, view.y, view.width, view.height, view.orientation
        )
    }
}

impl Default for PuzzleState {
    fn default() -> Self {
        Self::new()
    }
}

fn initial_blocks() -> [Block; BLOCK_COUNT] {
    std::array::from_fn(|index| Block::from_spec(&INITIAL_LAYOUT[index]))
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Cycles the selection forward until `index` is selected.
    fn select(state: &mut PuzzleState, index: usize) {
        while state.selected_index() != index {
            state.select_next();
        }
    }

    /// Positions of all blocks, for state-unchanged comparisons.
    fn positions(state: &PuzzleState) -> Vec<Rect> {
        state.blocks().map(|b| Rect::new(b.x, b.y, b.width, b.height)).collect()
    }

    /// Drives the shortest known solve of the fixed board: clear the
    /// crossbar out of the columns' way, drop the three columns below the
    /// exit row, then slide the target block across.
    fn play_winning_sequence(state: &mut PuzzleState) {
        select(state, 5);
        for _ in 0..3 {
            assert!(state.try_move(-CELL, 0), "crossbar must slide left");
        }
        for column in [2, 3, 4] {
            select(state, column);
            for _ in 0..3 {
                assert!(state.try_move(0, -CELL), "column {column} must slide down");
            }
        }
        select(state, TARGET_BLOCK);
        for _ in 0..3 {
            assert!(state.try_move(CELL, 0), "target block must slide right");
            assert!(!state.is_won(), "the win must not fire before the exit");
        }
        assert!(state.try_move(CELL, 0), "final move onto the exit must apply");
    }

    fn assert_invariants(state: &PuzzleState) {
        let rects = positions(state);
        for (index, rect) in rects.iter().enumerate() {
            assert!(
                rect.within(&GRID),
                "Block {index} left the grid: {rect:?}"
            );
        }
        for i in 0..rects.len() {
            for j in (i + 1)..rects.len() {
                assert!(
                    !rects[i].overlaps(&rects[j]),
                    "Blocks {i} and {j} overlap: {:?} vs {:?}",
                    rects[i],
                    rects[j]
                );
            }
        }
    }

    #[test]
    fn test_initial_layout_holds_the_board_invariants() {
        assert_invariants(&PuzzleState::new());
    }

    #[test]
    fn test_initial_selection_is_block_zero() {
        let state = PuzzleState::new();
        assert_eq!(state.selected_index(), 0);
        assert!(state.block_at(0).is_selected);
        assert!(!state.block_at(1).is_selected);
    }

    #[test]
    fn test_selection_cycles_through_every_block_once() {
        let mut state = PuzzleState::new();
        let mut visited = Vec::new();
        for _ in 0..BLOCK_COUNT {
            state.select_next();
            visited.push(state.selected_index());
        }
        assert_eq!(
            visited,
            vec![1, 2, 3, 4, 5, 6, 7, 0],
            "Cycling must visit each index exactly once and wrap"
        );
    }

    #[test]
    fn test_selection_does_not_move_blocks() {
        let mut state = PuzzleState::new();
        let before = positions(&state);
        for _ in 0..BLOCK_COUNT {
            state.select_next();
        }
        assert_eq!(before, positions(&state));
    }

    #[test]
    fn test_off_axis_move_is_rejected() {
        let mut state = PuzzleState::new();

        // block 0 is vertical; x displacements must bounce
        let before = positions(&state);
        assert!(!state.try_move(CELL, 0));
        assert_eq!(before, positions(&state));

        // the target block is horizontal; y displacements must bounce
        select(&mut state, TARGET_BLOCK);
        assert!(!state.try_move(0, CELL));
        assert!(!state.try_move(CELL, CELL), "diagonal moves are off-axis too");
        assert_eq!(before, positions(&state));
    }

    #[test]
    fn test_out_of_bounds_move_is_rejected() {
        let mut state = PuzzleState::new();
        select(&mut state, TARGET_BLOCK);

        // the target block starts on the left wall
        assert!(!state.try_move(-CELL, 0));
        assert!(!state.try_move(-1000, 0));
        assert_eq!(state.block_at(TARGET_BLOCK).x, 100);
    }

    #[test]
    fn test_collision_is_rejected_but_flush_contact_is_not() {
        let mut state = PuzzleState::new();
        select(&mut state, TARGET_BLOCK);

        // one step right lands the target flush against column 2
        assert!(state.try_move(CELL, 0));
        assert_eq!(state.block_at(TARGET_BLOCK).x, 200);

        // a second step would overlap the column
        let before = positions(&state);
        assert!(!state.try_move(CELL, 0));
        assert_eq!(before, positions(&state), "Rejected move must not mutate");

        // flush contact does not pin the block; it slides back freely
        assert!(state.try_move(-CELL, 0));
        assert_eq!(state.block_at(TARGET_BLOCK).x, 100);
    }

    #[test]
    fn test_zero_displacement_is_a_legal_no_op() {
        let mut state = PuzzleState::new();
        let before = positions(&state);
        assert!(state.try_move(0, 0));
        assert_eq!(before, positions(&state));
    }

    #[test]
    fn test_horizontal_blocks_never_change_row() {
        let mut state = PuzzleState::new();
        select(&mut state, TARGET_BLOCK);
        let start_y = state.block_at(TARGET_BLOCK).y;
        for (dx, dy) in [(CELL, 0), (0, CELL), (CELL, 0), (0, -CELL), (-CELL, 0)] {
            state.try_move(dx, dy);
        }
        assert_eq!(state.block_at(TARGET_BLOCK).y, start_y);
    }

    #[test]
    fn test_vertical_blocks_never_change_column() {
        let mut state = PuzzleState::new();
        select(&mut state, 2);
        let start_x = state.block_at(2).x;
        for (dx, dy) in [(0, -CELL), (CELL, 0), (0, -CELL), (-CELL, 0), (0, CELL)] {
            state.try_move(dx, dy);
        }
        assert_eq!(state.block_at(2).x, start_x);
    }

    #[test]
    fn test_winning_sequence_reaches_the_exit() {
        let mut state = PuzzleState::new();
        assert!(!state.is_won(), "A fresh board is not won");
        play_winning_sequence(&mut state);
        assert!(state.is_won());
        assert_eq!(state.block_at(TARGET_BLOCK).x, EXIT_X);
        assert_eq!(state.block_at(TARGET_BLOCK).y, EXIT_Y);
        assert_invariants(&state);
    }

    #[test]
    fn test_win_is_positional_not_sticky() {
        let mut state = PuzzleState::new();
        play_winning_sequence(&mut state);
        assert!(state.is_won());

        // the board stays interactive after a win
        assert!(state.try_move(-CELL, 0));
        assert!(!state.is_won(), "Leaving the exit must clear the win");
        assert!(state.try_move(CELL, 0));
        assert!(state.is_won());
    }

    #[test]
    fn test_invariants_hold_under_a_burst_of_moves() {
        let mut state = PuzzleState::new();
        // sweep every block through every direction a few times; rejections
        // are fine, violations are not
        for round in 0..4 {
            for _ in 0..BLOCK_COUNT {
                state.select_next();
                let (dx, dy) = [(CELL, 0), (-CELL, 0), (0, CELL), (0, -CELL)][round];
                state.try_move(dx, dy);
                assert_invariants(&state);
            }
        }
    }

    #[test]
    fn test_reset_restores_the_initial_layout() {
        let mut state = PuzzleState::new();
        let initial = positions(&state);
        play_winning_sequence(&mut state);
        assert_ne!(initial, positions(&state));

        state.reset();
        assert_eq!(initial, positions(&state));
        assert_eq!(state.selected_index(), 0);
        assert!(!state.is_won());
    }

    #[test]
    fn test_reset_is_idempotent() {
        let mut state = PuzzleState::new();
        state.reset();
        let once = positions(&state);
        state.reset();
        assert_eq!(once, positions(&state));
        assert_eq!(state.selected_index(), 0);
    }

    #[test]
    fn test_orientation_is_derived_from_width() {
        let state = PuzzleState::new();
        assert_eq!(state.block_at(0).orientation, Orientation::Vertical);
        assert_eq!(state.block_at(5).orientation, Orientation::Horizontal);
        assert_eq!(
            state.block_at(TARGET_BLOCK).orientation,
            Orientation::Horizontal
        );
    }

    #[test]
    fn test_format_board_shows_the_initial_layout() {
        let state = PuzzleState::new();
        let expected = "\
01.234
01.234
77.234>
...555
66....
......
";
        assert_eq!(state.format_board(), expected);
    }

    #[test]
    fn test_status_line_reports_the_selection() {
        let mut state = PuzzleState::new();
        assert_eq!(state.status_line(), "block 0 at (100, 500) size 100x200 vertical");
        select(&mut state, TARGET_BLOCK);
        assert_eq!(
            state.status_line(),
            "block 7 at (100, 400) size 200x100 horizontal"
        );
    }
}
