//! Monotonic board invariant: each snapshot fills exactly one empty square.

use super::Invariant;
use crate::history::History;
use crate::types::Square;

/// Invariant: consecutive snapshots differ by exactly one newly filled square.
///
/// The filled square must have been empty before and must match the move
/// recorded on the later snapshot. Marks are never removed or overwritten.
pub struct MonotonicBoardInvariant;

impl Invariant<History> for MonotonicBoardInvariant {
    fn holds(history: &History) -> bool {
        history.snapshots().windows(2).all(|pair| {
            let (before, after) = (&pair[0], &pair[1]);
            match after.last_move {
                Some(mv) => {
                    before.board.is_empty(mv.position)
                        && after.board
                            == before.board.with(mv.position, Square::Occupied(mv.player))
                }
                None => false,
            }
        })
    }

    fn description() -> &'static str {
        "Each snapshot fills exactly one previously empty square"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::action::Move;
    use crate::position::Position;
    use crate::session::Session;
    use crate::types::Player;

    #[test]
    fn test_played_history_holds() {
        let session = Session::from_cells(&[0, 1, 2, 3]).expect("legal moves");
        assert!(MonotonicBoardInvariant::holds(session.history()));
    }

    #[test]
    fn test_overwrite_violates() {
        let session = Session::from_cells(&[4, 0]).expect("legal moves");
        let mut history = session.history().clone();
        // O "plays" on X's square.
        let board = history.snapshots[1]
            .board
            .with(Position::Center, Square::Occupied(Player::O));
        let last = &mut history.snapshots[2];
        last.last_move = Some(Move::new(Player::O, Position::Center));
        last.board = board;
        assert!(!MonotonicBoardInvariant::holds(&history));
    }

    #[test]
    fn test_missing_move_violates() {
        let session = Session::from_cells(&[4]).expect("legal move");
        let mut history = session.history().clone();
        history.snapshots[1].last_move = None;
        assert!(!MonotonicBoardInvariant::holds(&history));
    }
}
