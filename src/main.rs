//! Sliding-block puzzle ("Unblock Me" style).
//!
//! Eight rectangular blocks sit on a 6x6 grid, each confined to a single
//! axis of movement. The green target block must reach the exit on the
//! right wall; the other blocks are in the way. Ships an interactive 3D
//! viewer and a headless text view of the board.

mod visualization;

use clap::{Parser, Subcommand};

use gridlock::PuzzleState;

/// A sliding-block puzzle with an interactive 3D board.
#[derive(Parser)]
#[command(name = "gridlock")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Play the puzzle in an interactive window.
    Play,
    /// Print the board as text and exit.
    Show,
}

fn main() {
    let cli = Cli::parse();

    match cli.command {
        Some(Command::Show) => run_show(),
        Some(Command::Play) | None => {
            println!("Controls: W/A/S/D move, N next block, R reset");
            visualization::play();
        }
    }
}

/// Prints the initial board and the selection status.
fn run_show() {
    let state = PuzzleState::new();
    print!("{}", state.format_board());
    println!("{}", state.status_line());
}
