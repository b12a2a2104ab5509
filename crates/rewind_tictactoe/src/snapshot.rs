//! Immutable board snapshots.

use crate::action::Move;
use crate::outcome::Outcome;
use crate::rules;
use crate::types::{Board, Player, Square};
use derive_getters::Getters;
use schemars::JsonSchema;
use serde::Serialize;

/// The board at one point in the game, plus the move that produced it.
///
/// The outcome is computed once when the snapshot is built and never
/// changes afterwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, JsonSchema, Getters)]
pub struct Snapshot {
    /// Board after the move.
    pub(crate) board: Board,
    /// Move that produced this snapshot; `None` for the opening snapshot.
    pub(crate) last_move: Option<Move>,
    /// Outcome of `board`.
    pub(crate) outcome: Outcome,
}

impl Snapshot {
    /// The empty board every game starts from.
    pub fn initial() -> Self {
        let board = Board::new();
        Self {
            board,
            last_move: None,
            outcome: rules::evaluate(&board),
        }
    }

    /// Builds the snapshot that follows this one after `mv`.
    ///
    /// Callers check legality first; this only records the placement.
    pub(crate) fn after(&self, mv: Move) -> Self {
        let board = self.board.with(mv.position, Square::Occupied(mv.player));
        Self {
            board,
            last_move: Some(mv),
            outcome: rules::evaluate(&board),
        }
    }

    /// Player who made the last move, if any.
    pub fn last_player(&self) -> Option<Player> {
        self.last_move.map(|mv| mv.player)
    }

    /// Zero-based (row, column) of the last move, if any.
    pub fn last_row_col(&self) -> Option<(usize, usize)> {
        self.last_move.map(|mv| mv.row_col())
    }
}
