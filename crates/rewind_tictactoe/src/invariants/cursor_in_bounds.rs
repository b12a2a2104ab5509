//! Cursor invariant: the cursor always names a stored snapshot.

use super::Invariant;
use crate::session::Session;

/// Invariant: `0 <= cursor < history.len()`.
pub struct CursorInBoundsInvariant;

impl Invariant<Session> for CursorInBoundsInvariant {
    fn holds(session: &Session) -> bool {
        session.cursor() < session.history().len()
    }

    fn description() -> &'static str {
        "Cursor points at a stored snapshot"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_session_holds() {
        assert!(CursorInBoundsInvariant::holds(&Session::new()));
    }

    #[test]
    fn test_rewound_session_holds() {
        let session = Session::from_cells(&[0, 1, 2]).expect("legal moves").jump_to(1);
        assert!(CursorInBoundsInvariant::holds(&session));
    }
}
