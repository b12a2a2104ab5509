//! Rewind - terminal front end for rewind_tictactoe.
//!
//! Plays a session on stdin, replays a scripted game, or prints the JSON
//! schemas a graphical view would code against.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod cli;
mod repl;

use anyhow::{Context, Result};
use clap::Parser;
use cli::{Cli, Command, DisplayArgs};
use rewind_tictactoe::{Intent, Session, SessionView};
use tracing::{info, instrument};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    init_tracing();

    match cli.command {
        Command::Play { display } => run_play(display),
        Command::Replay {
            moves,
            jump,
            display,
        } => run_replay(&moves, jump, display),
        Command::Schema => print_schemas(),
    }
}

/// Logs go to stderr so they never interleave with rendered boards.
fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();
}

fn initial_session(args: DisplayArgs) -> Session {
    let session = Session::new();
    if args.reversed {
        session.toggle_display_order()
    } else {
        session
    }
}

/// Run the interactive loop on stdin/stdout
#[instrument(skip(args), fields(reversed = args.reversed, json = args.json))]
fn run_play(args: DisplayArgs) -> Result<()> {
    info!("Starting interactive session");

    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    let session = repl::run(stdin.lock(), stdout.lock(), initial_session(args), args.json)?;

    info!(
        snapshots = session.history().len(),
        outcome = %session.outcome(),
        "Session ended"
    );
    Ok(())
}

/// Replay 1-based cells, optionally jump, and print the view once
#[instrument(skip(args), fields(reversed = args.reversed, json = args.json))]
fn run_replay(moves: &[u8], jump: Option<usize>, args: DisplayArgs) -> Result<()> {
    let cells: Vec<usize> = moves.iter().map(|&m| usize::from(m) - 1).collect();

    let mut session = cells
        .iter()
        .try_fold(initial_session(args), |session, &cell| {
            session
                .try_place_mark(cell)
                .with_context(|| format!("Cannot play cell {}", cell + 1))
        })?;

    if let Some(index) = jump {
        session = session
            .try_jump_to(index)
            .context("Cannot jump through history")?;
    }

    info!(cursor = session.cursor(), outcome = %session.outcome(), "Replay finished");
    repl::render(&mut std::io::stdout().lock(), &session, args.json)
}

/// Print JSON schemas for the view boundary
fn print_schemas() -> Result<()> {
    let schemas = serde_json::json!({
        "intent": schemars::schema_for!(Intent),
        "session_view": schemars::schema_for!(SessionView),
    });
    println!("{}", serde_json::to_string_pretty(&schemas)?);
    Ok(())
}
