//! Root invariant: history starts from the empty board.

use super::Invariant;
use crate::history::History;
use crate::types::Board;

/// Invariant: index 0 is the empty board with no move recorded.
pub struct RootIsEmptyInvariant;

impl Invariant<History> for RootIsEmptyInvariant {
    fn holds(history: &History) -> bool {
        match history.snapshots().first() {
            Some(root) => root.board == Board::new() && root.last_move.is_none(),
            None => false,
        }
    }

    fn description() -> &'static str {
        "History starts from the empty board"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::position::Position;
    use crate::types::{Player, Square};

    #[test]
    fn test_new_history_holds() {
        assert!(RootIsEmptyInvariant::holds(&History::new()));
    }

    #[test]
    fn test_empty_vec_violates() {
        let history = History { snapshots: Vec::new() };
        assert!(!RootIsEmptyInvariant::holds(&history));
    }

    #[test]
    fn test_marked_root_violates() {
        let mut history = History::new();
        history.snapshots[0]
            .board
            .set(Position::Center, Square::Occupied(Player::X));
        assert!(!RootIsEmptyInvariant::holds(&history));
    }
}
