//! Settled outcome invariant: memoized outcomes match their boards.

use super::Invariant;
use crate::history::History;
use crate::rules;

/// Invariant: every snapshot's stored outcome equals a fresh evaluation of
/// its board, and only the last snapshot may be finished.
pub struct SettledOutcomeInvariant;

impl Invariant<History> for SettledOutcomeInvariant {
    fn holds(history: &History) -> bool {
        let snapshots = history.snapshots();
        let last = snapshots.len().saturating_sub(1);
        snapshots.iter().enumerate().all(|(index, snapshot)| {
            snapshot.outcome == rules::evaluate(&snapshot.board)
                && (index == last || !snapshot.outcome.is_finished())
        })
    }

    fn description() -> &'static str {
        "Stored outcomes match their boards and no move follows a finished game"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::outcome::Outcome;
    use crate::session::Session;

    #[test]
    fn test_finished_game_holds() {
        let session = Session::from_cells(&[0, 3, 1, 4, 2]).expect("legal moves");
        assert!(session.outcome().is_finished());
        assert!(SettledOutcomeInvariant::holds(session.history()));
    }

    #[test]
    fn test_stale_outcome_violates() {
        let session = Session::from_cells(&[0, 3, 1, 4]).expect("legal moves");
        let mut history = session.history().clone();
        history.snapshots[4].outcome = Outcome::Draw;
        assert!(!SettledOutcomeInvariant::holds(&history));
    }
}
