//! Read-only projection of a session for rendering.
//!
//! The view layer never inspects [`Session`] internals. It renders a
//! [`SessionView`]: a status line, nine cells with win highlighting, and the
//! move list in the order the user picked.

use crate::outcome::Outcome;
use crate::position::Position;
use crate::session::Session;
use crate::snapshot::Snapshot;
use crate::types::Player;
use schemars::JsonSchema;
use serde::Serialize;
use tracing::instrument;

/// One board cell as rendered.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, JsonSchema)]
pub struct CellView {
    /// Cell index, row-major.
    pub index: usize,
    /// Mark in the cell, if any.
    pub mark: Option<Player>,
    /// True when the cell lies on the winning line.
    pub winning: bool,
}

/// One entry of the move list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, JsonSchema)]
pub struct MoveEntry {
    /// History index this entry jumps to.
    pub index: usize,
    /// Button text.
    pub description: String,
    /// True for the snapshot at the cursor.
    pub selected: bool,
}

/// Everything a view needs after an intent has been applied.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, JsonSchema)]
pub struct SessionView {
    /// "Next player: X", "Winner: O" or "Draw".
    pub status: String,
    /// Outcome at the cursor.
    pub outcome: Outcome,
    /// Who moves next; `None` once the game at the cursor is finished.
    pub next_player: Option<Player>,
    /// Board at the cursor.
    pub cells: Vec<CellView>,
    /// Move list in display order.
    pub moves: Vec<MoveEntry>,
    /// Index of the snapshot being viewed.
    pub cursor: usize,
    /// Whether `moves` is newest first.
    pub display_order_reversed: bool,
}

impl SessionView {
    /// Projects a session.
    #[instrument(level = "trace", skip(session))]
    pub fn from_session(session: &Session) -> Self {
        let outcome = session.outcome();
        let next_player = (!outcome.is_finished()).then(|| session.next_player());
        let line = outcome.winning_line();
        let board = session.current().board();

        let cells = Position::ALL
            .into_iter()
            .map(|pos| CellView {
                index: pos.to_index(),
                mark: board.get(pos).player(),
                winning: line.is_some_and(|l| l.contains(pos)),
            })
            .collect();

        let mut moves: Vec<MoveEntry> = session
            .history()
            .iter()
            .enumerate()
            .map(|(index, snapshot)| MoveEntry {
                index,
                description: describe_move(index, snapshot),
                selected: index == session.cursor(),
            })
            .collect();
        if session.display_order_reversed() {
            moves.reverse();
        }

        Self {
            status: status_line(&outcome, session.next_player()),
            outcome,
            next_player,
            cells,
            moves,
            cursor: session.cursor(),
            display_order_reversed: session.display_order_reversed(),
        }
    }

    /// Plain-text rendering: board, status, then the move list.
    ///
    /// Winning cells are bracketed, empty cells show their 1-based number and
    /// the selected move is marked with `>`.
    pub fn render_text(&self) -> String {
        let rows: Vec<String> = self
            .cells
            .chunks(3)
            .map(|row| {
                row.iter()
                    .map(|cell| {
                        let symbol = match cell.mark {
                            Some(player) => player.to_string(),
                            None => (cell.index + 1).to_string(),
                        };
                        if cell.winning {
                            format!("[{}]", symbol)
                        } else {
                            format!(" {} ", symbol)
                        }
                    })
                    .collect::<Vec<_>>()
                    .join("|")
            })
            .collect();

        let mut out = rows.join("\n---+---+---\n");
        out.push_str("\n\n");
        out.push_str(&self.status);
        out.push('\n');
        for entry in &self.moves {
            let marker = if entry.selected { '>' } else { ' ' };
            out.push_str(&format!("{} {:>2}. {}\n", marker, entry.index, entry.description));
        }
        out
    }
}

/// Status line for an outcome.
pub fn status_line(outcome: &Outcome, next: Player) -> String {
    match outcome {
        Outcome::Undecided => format!("Next player: {}", next),
        Outcome::Win { player, .. } => format!("Winner: {}", player),
        Outcome::Draw => "Draw".to_string(),
    }
}

/// Move-list text for the snapshot at `index`.
pub fn describe_move(index: usize, snapshot: &Snapshot) -> String {
    match (snapshot.last_player(), snapshot.last_row_col()) {
        (Some(player), Some((row, col))) => format!(
            "Go to move #{}. Last move: ({}, {}) by {}",
            index, row, col, player
        ),
        _ => "Go to game start".to_string(),
    }
}
