//! Line-oriented play loop.
//!
//! Stands in for a graphical view: reads one command per line, turns it into
//! an [`Intent`], and prints the resulting [`rewind_tictactoe::SessionView`].

use anyhow::{Context, Result};
use derive_more::{Display, Error};
use rewind_tictactoe::{Intent, Position, Session};
use std::io::{BufRead, Write};
use tracing::{debug, instrument, warn};

const HELP: &str = "\
Commands:
  <cell>         place the next mark (1-9, or a name like 'center')
  place <cell>   same as above
  jump <n>       show move #n from the list (0 is the empty board)
  reverse        flip the move list order
  show           print the board again
  help           this text
  quit           leave";

/// A parsed input line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReplCommand {
    /// Forward to the session.
    Intent(Intent),
    /// Print the current view.
    Show,
    /// Print usage.
    Help,
    /// Stop reading input.
    Quit,
}

/// Input that could not be understood.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
pub enum CommandError {
    /// First word is not a command or a cell.
    #[display("Unknown command '{input}'")]
    Unknown {
        /// The offending line.
        input: String,
    },
    /// Cell argument is not 1-9 or a position name.
    #[display("Expected a cell 1-9 or a name like 'center', got '{input}'")]
    BadCell {
        /// The offending argument.
        input: String,
    },
    /// Jump argument is not a number.
    #[display("Expected a move number, got '{input}'")]
    BadIndex {
        /// The offending argument.
        input: String,
    },
}

/// Parses one input line. Blank lines yield `None`.
#[instrument(level = "debug")]
pub fn parse_command(line: &str) -> Result<Option<ReplCommand>, CommandError> {
    let line = line.trim();
    let mut words = line.split_whitespace();
    let Some(head) = words.next() else {
        return Ok(None);
    };
    let rest = words.collect::<Vec<_>>().join(" ");

    let command = match head.to_ascii_lowercase().as_str() {
        "quit" | "exit" | "q" => ReplCommand::Quit,
        "help" | "?" => ReplCommand::Help,
        "show" => ReplCommand::Show,
        "reverse" | "r" => ReplCommand::Intent(Intent::ToggleDisplayOrder),
        "jump" | "j" => ReplCommand::Intent(Intent::JumpTo {
            index: parse_index(&rest)?,
        }),
        "place" | "p" => ReplCommand::Intent(Intent::PlaceMark {
            cell: parse_cell(&rest)?,
        }),
        _ => {
            let cell = parse_cell(line).map_err(|_| CommandError::Unknown {
                input: line.to_string(),
            })?;
            ReplCommand::Intent(Intent::PlaceMark { cell })
        }
    };
    Ok(Some(command))
}

/// Parses a 1-based cell number or a position name into a 0-based index.
pub fn parse_cell(input: &str) -> Result<usize, CommandError> {
    let input = input.trim();
    let bad = || CommandError::BadCell {
        input: input.to_string(),
    };
    match input.parse::<usize>() {
        Ok(n @ 1..=9) => Ok(n - 1),
        Ok(_) => Err(bad()),
        Err(_) => Position::from_label(input)
            .map(Position::to_index)
            .ok_or_else(bad),
    }
}

fn parse_index(input: &str) -> Result<usize, CommandError> {
    input.trim().parse().map_err(|_| CommandError::BadIndex {
        input: input.trim().to_string(),
    })
}

/// Applies an intent through the checked reducers so the user learns why a
/// request was ignored.
fn step(session: Session, intent: Intent) -> (Session, Option<String>) {
    let rejected = match intent {
        Intent::PlaceMark { cell } => session.try_place_mark(cell).map_err(|e| e.to_string()),
        Intent::JumpTo { index } => session.try_jump_to(index).map_err(|e| e.to_string()),
        Intent::ToggleDisplayOrder => return (session.apply(intent), None),
    };
    match rejected {
        Ok(next) => (next, None),
        Err(reason) => (session, Some(reason)),
    }
}

/// Prints the session view as text or as one JSON line.
pub fn render<W: Write>(out: &mut W, session: &Session, json: bool) -> Result<()> {
    let view = session.view();
    if json {
        writeln!(out, "{}", serde_json::to_string(&view)?)?;
    } else {
        writeln!(out, "{}", view.render_text())?;
    }
    out.flush()?;
    Ok(())
}

/// Runs the play loop until `quit` or end of input, returning the final session.
#[instrument(skip_all, fields(json = json))]
pub fn run<R: BufRead, W: Write>(input: R, mut out: W, session: Session, json: bool) -> Result<Session> {
    let mut session = session;
    render(&mut out, &session, json)?;

    for line in input.lines() {
        let line = line.context("Failed to read input")?;
        match parse_command(&line) {
            Ok(None) => {}
            Ok(Some(ReplCommand::Quit)) => break,
            Ok(Some(ReplCommand::Help)) => writeln!(out, "{}", HELP)?,
            Ok(Some(ReplCommand::Show)) => render(&mut out, &session, json)?,
            Ok(Some(ReplCommand::Intent(intent))) => {
                let (next, rejected) = step(session, intent);
                session = next;
                if let Some(reason) = rejected {
                    debug!(?intent, %reason, "Intent ignored");
                    writeln!(out, "Ignored: {}", reason)?;
                } else {
                    render(&mut out, &session, json)?;
                }
            }
            Err(error) => {
                warn!(%error, "Unrecognized input");
                writeln!(out, "{} (type 'help')", error)?;
            }
        }
    }

    Ok(session)
}
