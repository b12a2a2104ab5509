//! Command-line interface for rewind.

use clap::{Args, Parser, Subcommand};

/// Rewind - tic-tac-toe with move history and time travel
#[derive(Parser, Debug)]
#[command(name = "rewind")]
#[command(about = "Tic-tac-toe with move history and time travel", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play interactively, one command per line on stdin
    Play {
        #[command(flatten)]
        display: DisplayArgs,
    },

    /// Apply a list of moves and print the resulting view
    Replay {
        /// Cells to play in order (1-9, row-major), comma separated
        #[arg(short, long, required = true, value_delimiter = ',', value_parser = clap::value_parser!(u8).range(1..=9))]
        moves: Vec<u8>,

        /// History index to show after replaying (0 is the empty board)
        #[arg(short, long)]
        jump: Option<usize>,

        #[command(flatten)]
        display: DisplayArgs,
    },

    /// Print JSON schemas for intents and session views
    Schema,
}

/// How the session is printed.
#[derive(Args, Debug, Clone, Copy, Default)]
pub struct DisplayArgs {
    /// List moves newest first
    #[arg(long)]
    pub reversed: bool,

    /// Print each view as a JSON line instead of text
    #[arg(long)]
    pub json: bool,
}
