//! Tests for board evaluation.

use rewind_tictactoe::rules::LINES;
use rewind_tictactoe::{Board, Outcome, Player, Position, Square, evaluate};

fn board_from(marks: &str) -> Board {
    let mut squares = [Square::Empty; 9];
    for (square, c) in squares.iter_mut().zip(marks.chars()) {
        *square = match c {
            'X' => Square::Occupied(Player::X),
            'O' => Square::Occupied(Player::O),
            _ => Square::Empty,
        };
    }
    Board::from_squares(squares)
}

#[test]
fn test_empty_board_is_undecided() {
    assert_eq!(evaluate(&Board::new()), Outcome::Undecided);
}

#[test]
fn test_each_line_wins_on_otherwise_empty_board() {
    let expected = [
        [0, 1, 2],
        [3, 4, 5],
        [6, 7, 8],
        [0, 3, 6],
        [1, 4, 7],
        [2, 5, 8],
        [0, 4, 8],
        [2, 4, 6],
    ];
    for (line, indices) in LINES.iter().zip(expected) {
        assert_eq!(line.indices(), indices);
        for player in [Player::X, Player::O] {
            let mut board = Board::new();
            for pos in line.positions() {
                board.set(pos, Square::Occupied(player));
            }
            match evaluate(&board) {
                Outcome::Win { player: winner, line: won } => {
                    assert_eq!(winner, player);
                    assert_eq!(won.indices(), indices);
                }
                other => panic!("Expected win on {:?}, got {:?}", indices, other),
            }
        }
    }
}

#[test]
fn test_full_board_without_line_is_draw() {
    assert_eq!(evaluate(&board_from("XOXXOOOXX")), Outcome::Draw);
}

#[test]
fn test_partial_board_without_line_is_undecided() {
    assert_eq!(evaluate(&board_from("XO..X.O..")), Outcome::Undecided);
}

#[test]
fn test_corrupted_board_reports_first_line_in_order() {
    // Both players hold a line; rows are checked before columns.
    let outcome = evaluate(&board_from("XXXOOO..."));
    assert_eq!(outcome.winner(), Some(Player::X));
    assert_eq!(outcome.winning_line().map(|l| l.indices()), Some([0, 1, 2]));

    let outcome = evaluate(&board_from("O.XO.XO.X"));
    assert_eq!(outcome.winning_line().map(|l| l.indices()), Some([0, 3, 6]));
}

#[test]
fn test_line_contains() {
    let diagonal = LINES[6];
    assert!(diagonal.contains(Position::Center));
    assert!(!diagonal.contains(Position::TopRight));
}
