//! Draw detection logic for tic-tac-toe.

use crate::types::Board;

/// Checks if the board is full (all squares occupied).
pub fn is_full(board: &Board) -> bool {
    board.empty_count() == 0
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::position::Position;
    use crate::types::{Player, Square};

    fn board_from(marks: &str) -> Board {
        let mut board = Board::new();
        for (pos, c) in Position::ALL.into_iter().zip(marks.chars()) {
            match c {
                'X' => board.set(pos, Square::Occupied(Player::X)),
                'O' => board.set(pos, Square::Occupied(Player::O)),
                _ => {}
            }
        }
        board
    }

    #[test]
    fn test_empty_board_not_full() {
        assert!(!is_full(&Board::new()));
    }

    #[test]
    fn test_partial_board_not_full() {
        let board = board_from("....X....");
        assert!(!is_full(&board));
    }

    #[test]
    fn test_one_gap_not_full() {
        let board = board_from("XOXOXXOX.");
        assert_eq!(board.empty_count(), 1);
        assert!(!is_full(&board));
    }

    #[test]
    fn test_full_board() {
        // X O X / O X X / O X O
        let board = board_from("XOXOXXOXO");
        assert!(is_full(&board));
    }
}
