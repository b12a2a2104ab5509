//! Contract-based validation for session intents.
//!
//! Contracts define correctness through preconditions and postconditions.
//! Preconditions are always checked; postconditions run in debug builds.

use crate::action::{JumpError, MoveError};
use crate::invariants::{self, CursorInBoundsInvariant, HistoryInvariants, Invariant, InvariantSet};
use crate::position::Position;
use crate::session::Session;
use tracing::{instrument, warn};

// ─────────────────────────────────────────────────────────────
//  Contract Trait
// ─────────────────────────────────────────────────────────────

/// A contract defines preconditions and postconditions for state transitions.
///
/// - Precondition: {P(state, action)} - must hold before applying action
/// - Postcondition: {Q(before, after)} - must hold after applying action
pub trait Contract<S, A> {
    /// Error reported when a condition fails.
    type Error;

    /// Checks preconditions before applying the action.
    fn pre(state: &S, action: &A) -> Result<(), Self::Error>;

    /// Checks postconditions after applying the action.
    fn post(before: &S, after: &S) -> Result<(), Self::Error>;
}

// ─────────────────────────────────────────────────────────────
//  Placement Preconditions
// ─────────────────────────────────────────────────────────────

/// Precondition: The snapshot at the cursor is still undecided.
pub struct GameNotOver;

impl GameNotOver {
    /// Fails with [`MoveError::GameOver`] once a win or draw is on the board.
    pub fn check(session: &Session) -> Result<(), MoveError> {
        if session.outcome().is_finished() {
            Err(MoveError::GameOver)
        } else {
            Ok(())
        }
    }
}

/// Precondition: The cell index names a square on the board.
pub struct CellInBounds;

impl CellInBounds {
    /// Resolves the index to a [`Position`].
    pub fn check(cell: usize) -> Result<Position, MoveError> {
        Position::from_index(cell).ok_or(MoveError::OutOfBounds(cell))
    }
}

/// Precondition: The square at the cursor snapshot is empty.
pub struct CellIsEmpty;

impl CellIsEmpty {
    /// Fails with [`MoveError::SquareOccupied`] if a mark is already there.
    pub fn check(session: &Session, pos: Position) -> Result<(), MoveError> {
        if session.current().board().is_empty(pos) {
            Ok(())
        } else {
            Err(MoveError::SquareOccupied(pos))
        }
    }
}

/// Composite precondition: the game is live, the cell exists and is empty.
pub struct LegalPlacement;

impl LegalPlacement {
    /// Validates all preconditions and returns the target position.
    #[instrument(level = "trace", skip(session))]
    pub fn check(session: &Session, cell: usize) -> Result<Position, MoveError> {
        GameNotOver::check(session)?;
        let pos = CellInBounds::check(cell)?;
        CellIsEmpty::check(session, pos)?;
        Ok(pos)
    }
}

// ─────────────────────────────────────────────────────────────
//  Placement Contract (Pre + Post)
// ─────────────────────────────────────────────────────────────

/// Contract for placing a mark.
///
/// Preconditions:
/// - Game at the cursor is undecided
/// - Cell index is 0-8
/// - Square is empty
///
/// Postconditions:
/// - History keeps every invariant in [`HistoryInvariants`]
/// - Snapshots after the old cursor were replaced by exactly one new one
/// - Cursor points at the new last snapshot
pub struct PlacementContract;

impl Contract<Session, usize> for PlacementContract {
    type Error = MoveError;

    fn pre(session: &Session, cell: &usize) -> Result<(), MoveError> {
        LegalPlacement::check(session, *cell).map(|_| ())
    }

    fn post(before: &Session, after: &Session) -> Result<(), MoveError> {
        let mut problems = Vec::new();
        if let Err(violations) = HistoryInvariants::check_all(after.history()) {
            problems.push(invariants::describe(&violations));
        }
        if !CursorInBoundsInvariant::holds(after) {
            problems.push(CursorInBoundsInvariant::description().to_string());
        }
        if after.history().len() != before.cursor() + 2 || after.cursor() != before.cursor() + 1 {
            problems.push("Placement must branch from the cursor".to_string());
        }
        let kept = ..=before.cursor();
        if before.history().snapshots().get(kept) != after.history().snapshots().get(kept) {
            problems.push("Placement must keep snapshots up to the cursor".to_string());
        }

        if problems.is_empty() {
            Ok(())
        } else {
            let message = problems.join("; ");
            warn!(%message, "Placement postcondition failed");
            Err(MoveError::InvariantViolation(format!(
                "Postcondition failed: {}",
                message
            )))
        }
    }
}

// ─────────────────────────────────────────────────────────────
//  Jump Contract (Pre + Post)
// ─────────────────────────────────────────────────────────────

/// Contract for moving the cursor.
///
/// Preconditions:
/// - Index names a stored snapshot
///
/// Postconditions:
/// - History is unchanged
/// - Cursor points at a stored snapshot
pub struct JumpContract;

impl Contract<Session, usize> for JumpContract {
    type Error = JumpError;

    fn pre(session: &Session, index: &usize) -> Result<(), JumpError> {
        let len = session.history().len();
        if *index < len {
            Ok(())
        } else {
            Err(JumpError::OutOfRange { index: *index, len })
        }
    }

    fn post(before: &Session, after: &Session) -> Result<(), JumpError> {
        if before.history() != after.history() {
            warn!("Jump modified history");
            return Err(JumpError::InvariantViolation(
                "Jump must not modify history".to_string(),
            ));
        }
        if !CursorInBoundsInvariant::holds(after) {
            warn!(cursor = after.cursor(), "Jump left cursor out of bounds");
            return Err(JumpError::InvariantViolation(
                CursorInBoundsInvariant::description().to_string(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_precondition_empty_square() {
        let session = Session::new();
        assert!(PlacementContract::pre(&session, &4).is_ok());
    }

    #[test]
    fn test_precondition_occupied_square() {
        let session = Session::from_cells(&[4]).expect("legal move");
        assert_eq!(
            PlacementContract::pre(&session, &4),
            Err(MoveError::SquareOccupied(Position::Center))
        );
    }

    #[test]
    fn test_precondition_out_of_bounds() {
        let session = Session::new();
        assert_eq!(
            PlacementContract::pre(&session, &9),
            Err(MoveError::OutOfBounds(9))
        );
    }

    #[test]
    fn test_precondition_game_over_checked_first() {
        let session = Session::from_cells(&[0, 3, 1, 4, 2]).expect("legal moves");
        // Occupied and out-of-range cells still report the finished game.
        assert_eq!(PlacementContract::pre(&session, &0), Err(MoveError::GameOver));
        assert_eq!(PlacementContract::pre(&session, &42), Err(MoveError::GameOver));
    }

    #[test]
    fn test_postcondition_holds_after_move() {
        let before = Session::new();
        let after = before.try_place_mark(4).expect("legal move");
        assert!(PlacementContract::post(&before, &after).is_ok());
    }

    #[test]
    fn test_postcondition_detects_corruption() {
        let before = Session::new();
        let mut after = before.try_place_mark(4).expect("legal move");
        after.history.snapshots[1]
            .board
            .set(Position::TopLeft, crate::types::Square::Occupied(crate::types::Player::O));

        assert!(matches!(
            PlacementContract::post(&before, &after),
            Err(MoveError::InvariantViolation(_))
        ));
    }

    #[test]
    fn test_postcondition_detects_missing_branch() {
        let before = Session::from_cells(&[0, 1, 2]).expect("legal moves").jump_to(1);
        // Pretend the placement appended instead of truncating.
        let after = Session::from_cells(&[0, 1, 2, 3]).expect("legal moves");
        assert!(PlacementContract::post(&before, &after).is_err());
    }

    #[test]
    fn test_jump_precondition() {
        let session = Session::from_cells(&[0, 1]).expect("legal moves");
        assert!(JumpContract::pre(&session, &2).is_ok());
        assert_eq!(
            JumpContract::pre(&session, &3),
            Err(JumpError::OutOfRange { index: 3, len: 3 })
        );
    }

    #[test]
    fn test_jump_postcondition_rejects_history_change() {
        let before = Session::from_cells(&[0]).expect("legal move");
        let after = Session::from_cells(&[1]).expect("legal move");
        assert!(JumpContract::post(&before, &after).is_err());
    }
}
