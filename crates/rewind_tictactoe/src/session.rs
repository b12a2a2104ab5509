//! Rewindable game session.
//!
//! A [`Session`] is a plain value. Every intent consumes or borrows the
//! current value and yields the next one; nothing is mutated behind the
//! caller's back. The outcome is read from the snapshot at the cursor, so it
//! can never drift from the board being shown.

use crate::action::{JumpError, Move, MoveError};
use crate::contracts::{CellInBounds, Contract, JumpContract, PlacementContract};
use crate::history::History;
use crate::intent::Intent;
use crate::outcome::{Line, Outcome};
use crate::snapshot::Snapshot;
use crate::types::Player;
use crate::view::SessionView;
use serde::Serialize;
use tracing::{debug, info, instrument};

/// Game history, the snapshot being viewed, and the move-list ordering flag.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Session {
    pub(crate) history: History,
    pub(crate) cursor: usize,
    pub(crate) display_order_reversed: bool,
}

impl Session {
    /// Starts a session on the empty board.
    #[instrument]
    pub fn new() -> Self {
        debug!("Creating new session");
        Self {
            history: History::new(),
            cursor: 0,
            display_order_reversed: false,
        }
    }

    /// Replays cells (0-8) from a new session, stopping at the first
    /// rejected placement.
    #[instrument]
    pub fn from_cells(cells: &[usize]) -> Result<Self, MoveError> {
        cells
            .iter()
            .try_fold(Self::new(), |session, &cell| session.try_place_mark(cell))
    }

    /// Every stored snapshot.
    pub fn history(&self) -> &History {
        &self.history
    }

    /// Index of the snapshot being viewed.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Whether the move list is shown newest first.
    pub fn display_order_reversed(&self) -> bool {
        self.display_order_reversed
    }

    /// Snapshot at the cursor.
    pub fn current(&self) -> &Snapshot {
        &self.history.snapshots()[self.cursor]
    }

    /// Outcome of the snapshot at the cursor.
    pub fn outcome(&self) -> Outcome {
        *self.current().outcome()
    }

    /// Winning line at the cursor, for highlighting.
    pub fn winning_line(&self) -> Option<Line> {
        self.outcome().winning_line()
    }

    /// Mark the next placement would use, derived from cursor parity.
    pub fn next_player(&self) -> Player {
        Player::for_ply(self.cursor)
    }

    /// Places the next mark at `cell` (0-8), branching history at the cursor.
    ///
    /// # Errors
    ///
    /// - [`MoveError::GameOver`] if the snapshot at the cursor is finished
    /// - [`MoveError::OutOfBounds`] if `cell` is not 0-8
    /// - [`MoveError::SquareOccupied`] if the square already holds a mark
    /// - [`MoveError::InvariantViolation`] if a postcondition fails (debug builds)
    #[instrument(skip(self), fields(cursor = self.cursor))]
    pub fn try_place_mark(&self, cell: usize) -> Result<Session, MoveError> {
        PlacementContract::pre(self, &cell)?;
        let position = CellInBounds::check(cell)?;

        let mv = Move::new(self.next_player(), position);
        let snapshot = self.current().after(mv);
        let next = Session {
            history: self.history.clone().branch(self.cursor, snapshot),
            cursor: self.cursor + 1,
            display_order_reversed: self.display_order_reversed,
        };

        #[cfg(debug_assertions)]
        PlacementContract::post(self, &next)?;

        info!(%mv, outcome = %next.outcome(), "Mark placed");
        Ok(next)
    }

    /// Places the next mark at `cell`, or returns the session unchanged if
    /// the placement is not allowed.
    pub fn place_mark(self, cell: usize) -> Self {
        match self.try_place_mark(cell) {
            Ok(next) => next,
            Err(error) => {
                debug!(cell, %error, "Ignoring placement");
                self
            }
        }
    }

    /// Moves the cursor to a stored snapshot without touching history.
    ///
    /// # Errors
    ///
    /// [`JumpError::OutOfRange`] if `index` is not a stored snapshot.
    #[instrument(skip(self), fields(cursor = self.cursor))]
    pub fn try_jump_to(&self, index: usize) -> Result<Session, JumpError> {
        JumpContract::pre(self, &index)?;

        let next = Session {
            cursor: index,
            ..self.clone()
        };

        #[cfg(debug_assertions)]
        JumpContract::post(self, &next)?;

        debug!(index, next_player = %next.next_player(), "Cursor moved");
        Ok(next)
    }

    /// Moves the cursor to `index`, or returns the session unchanged if the
    /// index is out of range.
    pub fn jump_to(self, index: usize) -> Self {
        match self.try_jump_to(index) {
            Ok(next) => next,
            Err(error) => {
                debug!(index, %error, "Ignoring jump");
                self
            }
        }
    }

    /// Flips the move-list ordering. Game state is untouched.
    #[instrument(skip(self))]
    pub fn toggle_display_order(self) -> Self {
        Self {
            display_order_reversed: !self.display_order_reversed,
            ..self
        }
    }

    /// Applies an intent from the view layer.
    #[instrument(skip(self))]
    pub fn apply(self, intent: Intent) -> Self {
        match intent {
            Intent::PlaceMark { cell } => self.place_mark(cell),
            Intent::JumpTo { index } => self.jump_to(index),
            Intent::ToggleDisplayOrder => self.toggle_display_order(),
        }
    }

    /// Read-only projection for rendering.
    pub fn view(&self) -> SessionView {
        SessionView::from_session(self)
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}
