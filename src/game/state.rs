use crate::ai::Searcher;
use crate::config::AppConfig;
use crate::error::MoveError;

use super::{Board, Piece};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    PlayerTurn,
    AiTurn,
    PlayerWon,
    AiWon,
    Draw,
}

impl GameStatus {
    fn turn(piece: Piece) -> Self {
        match piece {
            Piece::Player => GameStatus::PlayerTurn,
            Piece::Ai => GameStatus::AiTurn,
        }
    }

    fn won(piece: Piece) -> Self {
        match piece {
            Piece::Player => GameStatus::PlayerWon,
            Piece::Ai => GameStatus::AiWon,
        }
    }

    pub fn is_terminal(self) -> bool {
        matches!(
            self,
            GameStatus::PlayerWon | GameStatus::AiWon | GameStatus::Draw
        )
    }
}

/// Turn alternation between the human and the minimax AI.
#[derive(Debug, Clone)]
pub struct Game {
    board: Board,
    status: GameStatus,
    first: Piece,
    searcher: Searcher,
    last_move: Option<(usize, usize)>,
    move_count: usize,
}

impl Game {
    /// A board with no cells (zero rows or columns) starts out as a draw.
    pub fn new(rows: usize, cols: usize, first: Piece, depth: u32) -> Self {
        let board = Board::with_size(rows, cols);
        Game {
            status: opening_status(&board, first),
            board,
            first,
            searcher: Searcher::new(depth),
            last_move: None,
            move_count: 0,
        }
    }

    pub fn from_config(config: &AppConfig) -> Self {
        Self::new(
            config.game.rows,
            config.game.cols,
            config.game.first.into(),
            config.search.effective_depth(),
        )
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn is_over(&self) -> bool {
        self.status.is_terminal()
    }

    pub fn depth(&self) -> u32 {
        self.searcher.depth()
    }

    /// Position (row, col) of the most recent drop
    pub fn last_move(&self) -> Option<(usize, usize)> {
        self.last_move
    }

    pub fn move_count(&self) -> usize {
        self.move_count
    }

    /// Start over with an empty board, same first mover and depth
    pub fn restart(&mut self) {
        self.board = Board::with_size(self.board.rows(), self.board.cols());
        self.status = opening_status(&self.board, self.first);
        self.last_move = None;
        self.move_count = 0;
    }

    /// Drop the player's piece in `col`. Illegal columns leave the game untouched
    /// so the caller can ask again.
    pub fn play_player_move(&mut self, col: usize) -> Result<GameStatus, MoveError> {
        match self.status {
            GameStatus::PlayerTurn => {}
            GameStatus::AiTurn => return Err(MoveError::OutOfTurn),
            _ => return Err(MoveError::GameOver),
        }
        if col >= self.board.cols() {
            return Err(MoveError::InvalidColumn(col));
        }
        if !self.board.is_valid_move(col) {
            return Err(MoveError::ColumnFull(col));
        }
        self.apply(col, Piece::Player)
    }

    /// Let the searcher pick a column for the AI and play it. Returns the column.
    pub fn play_ai_move(&mut self) -> Result<usize, MoveError> {
        match self.status {
            GameStatus::AiTurn => {}
            GameStatus::PlayerTurn => return Err(MoveError::OutOfTurn),
            _ => return Err(MoveError::GameOver),
        }
        let col = self
            .searcher
            .get_ai_move(&mut self.board)
            .ok_or(MoveError::NoLegalMove)?;
        self.apply(col, Piece::Ai)?;
        Ok(col)
    }

    fn apply(&mut self, col: usize, piece: Piece) -> Result<GameStatus, MoveError> {
        let row = self
            .board
            .next_open_row(col)
            .ok_or(MoveError::ColumnFull(col))?;
        self.board.drop_piece(row, col, piece);
        self.last_move = Some((row, col));
        self.move_count += 1;
        log::info!("{} drops in column {col} (row {row})", piece.name());

        self.status = if self.board.winning_move(piece) {
            GameStatus::won(piece)
        } else if self.board.is_full() {
            GameStatus::Draw
        } else {
            GameStatus::turn(piece.other())
        };
        if self.status.is_terminal() {
            log::info!("game over after {} moves: {:?}", self.move_count, self.status);
        }
        Ok(self.status)
    }
}

fn opening_status(board: &Board, first: Piece) -> GameStatus {
    if board.is_terminal() {
        GameStatus::Draw
    } else {
        GameStatus::turn(first)
    }
}
