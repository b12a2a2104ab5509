//! Game rules for tic-tac-toe.
//!
//! Pure functions over a [`Board`]. Nothing here knows about history or
//! turns; the session layer calls [`evaluate`] after every placement.

pub mod draw;
pub mod win;

pub use draw::is_full;
pub use win::{LINES, winning_line};

use crate::outcome::Outcome;
use crate::types::Board;
use tracing::instrument;

/// Evaluates a board into an [`Outcome`].
///
/// Total over every board, including ones no legal game can reach.
#[instrument(level = "trace", skip(board))]
pub fn evaluate(board: &Board) -> Outcome {
    if let Some((player, line)) = winning_line(board) {
        return Outcome::Win { player, line };
    }
    if is_full(board) {
        return Outcome::Draw;
    }
    Outcome::Undecided
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::position::Position;
    use crate::types::{Player, Square};

    #[test]
    fn test_empty_board_undecided() {
        assert_eq!(evaluate(&Board::new()), Outcome::Undecided);
    }

    #[test]
    fn test_every_line_wins_alone() {
        for player in [Player::X, Player::O] {
            for line in LINES {
                let mut board = Board::new();
                for pos in line.positions() {
                    board.set(pos, Square::Occupied(player));
                }
                assert_eq!(evaluate(&board), Outcome::Win { player, line });
            }
        }
    }

    #[test]
    fn test_full_board_without_line_is_draw() {
        let marks = [
            Player::X, Player::O, Player::X,
            Player::O, Player::X, Player::X,
            Player::O, Player::X, Player::O,
        ];
        let mut board = Board::new();
        for (pos, player) in Position::ALL.into_iter().zip(marks) {
            board.set(pos, Square::Occupied(player));
        }
        assert_eq!(evaluate(&board), Outcome::Draw);
    }

    #[test]
    fn test_full_board_with_line_is_win() {
        let marks = [
            Player::X, Player::O, Player::X,
            Player::X, Player::X, Player::O,
            Player::O, Player::O, Player::X,
        ];
        let mut board = Board::new();
        for (pos, player) in Position::ALL.into_iter().zip(marks) {
            board.set(pos, Square::Occupied(player));
        }
        assert_eq!(
            evaluate(&board).winning_line().map(|l| l.indices()),
            Some([0, 4, 8])
        );
        assert_eq!(evaluate(&board).winner(), Some(Player::X));
    }
}
