use crate::game::{Board, Cell, Piece, WINDOW_LEN};

/// Four consecutive cells along one line of the board.
pub type Window = [Cell; WINDOW_LEN];

const FOUR_SCORE: i64 = 100;
const THREE_SCORE: i64 = 5;
const TWO_SCORE: i64 = 2;
const OPPONENT_THREE_PENALTY: i64 = -4;
const CENTER_WEIGHT: i64 = 3;

/// Score one window from `piece`'s point of view.
///
/// The own-piece bonus and the opponent penalty are evaluated independently
/// and summed; with four cells at most one of them can fire. Windows mixing
/// both sides score 0.
pub fn evaluate_window(window: &Window, piece: Piece) -> i64 {
    let own_cell = piece.to_cell();
    let opp_cell = piece.other().to_cell();

    let own = window.iter().filter(|&&c| c == own_cell).count();
    let opp = window.iter().filter(|&&c| c == opp_cell).count();
    let empty = window.iter().filter(|&&c| c == Cell::Empty).count();

    let mut score = 0;
    if own == WINDOW_LEN {
        score += FOUR_SCORE;
    } else if own == 3 && empty == 1 {
        score += THREE_SCORE;
    } else if own == 2 && empty == 2 {
        score += TWO_SCORE;
    }

    if opp == 3 && empty == 1 {
        score += OPPONENT_THREE_PENALTY;
    }

    score
}

/// Heuristic value of the whole board for `piece`: a center-column bonus plus
/// the sum of every window's score.
pub fn score_position(board: &Board, piece: Piece) -> i64 {
    let own_cell = piece.to_cell();
    let mut score = 0;

    if board.cols() > 0 {
        let center = board.cols() / 2;
        let center_count = (0..board.rows())
            .filter(|&row| board.get(row, center) == own_cell)
            .count() as i64;
        score += center_count * CENTER_WEIGHT;
    }

    score
        + board
            .windows()
            .map(|window| evaluate_window(&window, piece))
            .sum::<i64>()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::{COLS, ROWS};

    const P: Cell = Cell::Ai;
    const O: Cell = Cell::Player;
    const E: Cell = Cell::Empty;

    #[test]
    fn window_four_in_a_row() {
        assert_eq!(evaluate_window(&[P, P, P, P], Piece::Ai), 100);
    }

    #[test]
    fn window_three_and_gap() {
        assert_eq!(evaluate_window(&[P, P, P, E], Piece::Ai), 5);
        assert_eq!(evaluate_window(&[P, E, P, P], Piece::Ai), 5);
    }

    #[test]
    fn window_two_and_two_gaps() {
        assert_eq!(evaluate_window(&[P, P, E, E], Piece::Ai), 2);
        assert_eq!(evaluate_window(&[E, P, E, P], Piece::Ai), 2);
    }

    #[test]
    fn window_opponent_three() {
        assert_eq!(evaluate_window(&[O, O, O, E], Piece::Ai), -4);
    }

    #[test]
    fn window_mixed_scores_zero() {
        assert_eq!(evaluate_window(&[P, O, E, E], Piece::Ai), 0);
        assert_eq!(evaluate_window(&[P, P, P, O], Piece::Ai), 0);
        assert_eq!(evaluate_window(&[E, E, E, E], Piece::Ai), 0);
        assert_eq!(evaluate_window(&[P, E, E, E], Piece::Ai), 0);
    }

    #[test]
    fn window_perspective_flips() {
        let window = [O, O, O, E];
        assert_eq!(evaluate_window(&window, Piece::Player), 5);
        assert_eq!(evaluate_window(&window, Piece::Ai), -4);
    }

    #[test]
    fn empty_board_scores_zero() {
        let board = Board::new();
        assert_eq!(score_position(&board, Piece::Ai), 0);
        assert_eq!(score_position(&board, Piece::Player), 0);
    }

    #[test]
    fn center_piece_bonus() {
        let mut board = Board::new();
        board.drop_piece(ROWS - 1, COLS / 2, Piece::Ai);
        assert_eq!(score_position(&board, Piece::Ai), 3);
        assert_eq!(score_position(&board, Piece::Player), 0);
    }

    #[test]
    fn center_preference() {
        let mut center = Board::new();
        center.drop_piece(ROWS - 1, 3, Piece::Ai);
        let mut edge = Board::new();
        edge.drop_piece(ROWS - 1, 0, Piece::Ai);
        assert!(score_position(&center, Piece::Ai) > score_position(&edge, Piece::Ai));
    }

    #[test]
    fn bottom_row_pair() {
        let mut board = Board::new();
        board.drop_piece(5, 0, Piece::Ai);
        board.drop_piece(5, 1, Piece::Ai);
        // Only the window over cols 0..4 holds both pieces
        assert_eq!(score_position(&board, Piece::Ai), 2);
    }

    #[test]
    fn three_in_a_row_threat() {
        let mut board = Board::new();
        for col in 0..3 {
            board.drop_piece(5, col, Piece::Ai);
        }
        assert!(score_position(&board, Piece::Ai) >= 5);
        assert!(score_position(&board, Piece::Player) <= -4);
    }

    #[test]
    fn score_is_idempotent() {
        let mut board = Board::new();
        board.drop_piece(5, 3, Piece::Ai);
        board.drop_piece(5, 4, Piece::Player);
        board.drop_piece(4, 3, Piece::Ai);
        let first = score_position(&board, Piece::Ai);
        for _ in 0..3 {
            assert_eq!(score_position(&board, Piece::Ai), first);
        }
    }
}
