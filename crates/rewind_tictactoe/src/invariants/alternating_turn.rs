//! Alternating turn invariant: players alternate X, O, X, O, ...

use super::Invariant;
use crate::history::History;
use crate::types::Player;

/// Invariant: the move recorded on snapshot `i` belongs to ply `i - 1`.
///
/// First move is always X, then strict alternation.
pub struct AlternatingTurnInvariant;

impl Invariant<History> for AlternatingTurnInvariant {
    fn holds(history: &History) -> bool {
        history
            .snapshots()
            .iter()
            .enumerate()
            .skip(1)
            .all(|(index, snapshot)| snapshot.last_player() == Some(Player::for_ply(index - 1)))
    }

    fn description() -> &'static str {
        "Players alternate turns (X, O, X, O, ...)"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::action::Move;
    use crate::session::Session;

    #[test]
    fn test_empty_history_holds() {
        assert!(AlternatingTurnInvariant::holds(&History::new()));
    }

    #[test]
    fn test_alternating_sequence_holds() {
        let session = Session::from_cells(&[0, 4, 2, 6, 8]).expect("legal moves");
        assert!(AlternatingTurnInvariant::holds(session.history()));
    }

    #[test]
    fn test_same_player_twice_violates() {
        let session = Session::from_cells(&[0, 4]).expect("legal moves");
        let mut history = session.history().clone();
        let second = &mut history.snapshots[2];
        second.last_move = second.last_move.map(|mv| Move::new(Player::X, mv.position));
        assert!(!AlternatingTurnInvariant::holds(&history));
    }
}
