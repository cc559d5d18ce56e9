//! Sliding-block puzzle core.
//!
//! Implements the rules of an "Unblock Me" style puzzle: eight rectangular
//! blocks on a 6x6 grid, each sliding along a single axis, with the target
//! block trying to reach the exit on the right wall. The crate exposes the
//! rules only; drawing and input mapping live in the binary and talk to the
//! board through discrete commands and read-only snapshots.

pub mod board;
pub mod geometry;
pub mod layout;

pub use board::{Block, BlockView, Orientation, PuzzleState};
pub use layout::{BLOCK_COUNT, CELL, MARGIN, NUM_X, NUM_Y, TARGET_BLOCK};
