use std::io::Cursor;

use minimax_connect_four::ai::{minimax, score_position, Searcher, AI_WIN_SCORE};
use minimax_connect_four::game::{Board, Cell, Game, GameStatus, Piece, COLS, ROWS};
use minimax_connect_four::ui::text;

fn play(board: &mut Board, col: usize, piece: Piece) {
    let row = board.next_open_row(col).expect("column has room");
    board.drop_piece(row, col, piece);
}

fn count_pieces(board: &Board) -> usize {
    (0..board.rows())
        .flat_map(|r| (0..board.cols()).map(move |c| (r, c)))
        .filter(|&(r, c)| board.get(r, c) != Cell::Empty)
        .count()
}

#[test]
fn ai_completes_open_three_on_bottom_row() {
    let mut board = Board::new();
    for col in 0..3 {
        board.drop_piece(ROWS - 1, col, Piece::Ai);
    }
    let before = board.clone();
    let column = Searcher::new(4).get_ai_move(&mut board);
    assert_eq!(column, Some(3));
    assert_eq!(board, before, "search must leave the board untouched");
}

#[test]
fn immediate_win_gets_terminal_score_at_every_depth() {
    let mut board = Board::new();
    for _ in 0..3 {
        play(&mut board, 6, Piece::Ai);
    }
    play(&mut board, 0, Piece::Player);
    play(&mut board, 1, Piece::Player);
    for depth in 1..=3 {
        let result = minimax(&mut board, depth, true);
        assert_eq!(result.column, Some(6));
        assert_eq!(result.score, AI_WIN_SCORE);
    }
}

#[test]
fn read_only_queries_are_stable() {
    let mut board = Board::new();
    for (col, piece) in [(3, Piece::Player), (3, Piece::Ai), (2, Piece::Player), (4, Piece::Ai)] {
        play(&mut board, col, piece);
    }
    let terminal = board.is_terminal();
    let ai_win = board.winning_move(Piece::Ai);
    let score = score_position(&board, Piece::Ai);
    for _ in 0..5 {
        assert_eq!(board.is_terminal(), terminal);
        assert_eq!(board.winning_move(Piece::Ai), ai_win);
        assert_eq!(score_position(&board, Piece::Ai), score);
    }
}

#[test]
fn leftmost_player_never_beats_depth_four() {
    let mut game = Game::new(ROWS, COLS, Piece::Player, 4);
    while !game.is_over() {
        match game.status() {
            GameStatus::PlayerTurn => {
                let col = game.board().valid_moves().next().expect("board not full");
                game.play_player_move(col).unwrap();
            }
            GameStatus::AiTurn => {
                game.play_ai_move().unwrap();
            }
            _ => unreachable!(),
        }
        assert_eq!(count_pieces(game.board()), game.move_count());
    }
    assert_ne!(game.status(), GameStatus::PlayerWon);
}

#[test]
fn plain_mode_plays_to_completion() {
    let script: String = "3\n2\n4\n1\n5\n0\n6\n".repeat(30);
    let mut input = Cursor::new(format!("oops\n{script}"));
    let mut output = Vec::new();
    let mut game = Game::new(ROWS, COLS, Piece::Player, 2);

    let status = text::run(&mut game, &mut input, &mut output).unwrap();

    assert!(status.is_terminal());
    assert_eq!(status, game.status());
    let transcript = String::from_utf8(output).unwrap();
    assert!(transcript.contains("Invalid input. Please enter a number."));
    let verdict = transcript.lines().last().unwrap();
    assert!(["Player wins!", "AI wins!", "It's a draw!"].contains(&verdict));
}

#[test]
fn plain_mode_with_ai_first() {
    let (first, difficulty) = text::prompt_setup(
        None,
        None,
        &mut Cursor::new("ai\neasy\n"),
        &mut Vec::new(),
    )
    .unwrap();
    let mut game = Game::new(ROWS, COLS, first.into(), difficulty.depth());
    assert_eq!(game.status(), GameStatus::AiTurn);

    let mut input = Cursor::new("0\n");
    let mut output = Vec::new();
    // Input runs out before the game ends
    let err = text::run(&mut game, &mut input, &mut output).unwrap_err();
    assert_eq!(err.kind(), std::io::ErrorKind::UnexpectedEof);
    // AI, player, AI, then the prompt finds no input
    assert_eq!(game.move_count(), 3);
    assert_eq!(game.status(), GameStatus::PlayerTurn);
}
