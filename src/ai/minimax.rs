use std::time::Instant;

use crate::game::{Board, Piece};

use super::evaluation::score_position;

/// Score of a terminal board the AI has won.
pub const AI_WIN_SCORE: i64 = 100_000_000_000_000;
/// Score of a terminal board the player has won.
pub const PLAYER_WIN_SCORE: i64 = -10_000_000_000_000;
pub const DRAW_SCORE: i64 = 0;

/// Outcome of a search: the chosen column and its minimax value.
///
/// `column` is `None` at leaves and when no column is playable. In the latter
/// case `score` is left at the sentinel the search started from (`i64::MIN`
/// when maximizing, `i64::MAX` when minimizing).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchResult {
    pub column: Option<usize>,
    pub score: i64,
}

impl SearchResult {
    fn leaf(score: i64) -> Self {
        SearchResult {
            column: None,
            score,
        }
    }
}

/// Fixed-depth exhaustive minimax. The AI maximizes, the player minimizes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Searcher {
    depth: u32,
}

impl Searcher {
    pub fn new(depth: u32) -> Self {
        Searcher { depth }
    }

    pub fn depth(&self) -> u32 {
        self.depth
    }

    /// Best column for the AI on `board`. `None` when the board is terminal or
    /// no column is playable. The board is left exactly as it was found.
    ///
    /// A depth of 0 is searched one ply deep here, since a bare leaf carries
    /// no column.
    pub fn get_ai_move(&self, board: &mut Board) -> Option<usize> {
        let depth = self.depth.max(1);
        let start = Instant::now();
        let mut nodes = 0u64;
        let result = search(board, depth, true, &mut nodes);
        log::debug!(
            "minimax depth {}: column {:?} score {} ({} nodes, {:?})",
            depth,
            result.column,
            result.score,
            nodes,
            start.elapsed()
        );
        result.column
    }
}

/// Minimax value of `board` searched `depth` plies deep.
///
/// Each branch drops a piece, recurses, and restores the cell before the next
/// sibling is tried. Ties keep the lowest column.
pub fn minimax(board: &mut Board, depth: u32, maximizing: bool) -> SearchResult {
    let mut nodes = 0;
    search(board, depth, maximizing, &mut nodes)
}

fn search(board: &mut Board, depth: u32, maximizing: bool, nodes: &mut u64) -> SearchResult {
    *nodes += 1;

    if board.is_terminal() {
        return SearchResult::leaf(terminal_score(board));
    }
    if depth == 0 {
        return SearchResult::leaf(score_position(board, Piece::Ai));
    }

    let (piece, mut best) = if maximizing {
        (Piece::Ai, SearchResult::leaf(i64::MIN))
    } else {
        (Piece::Player, SearchResult::leaf(i64::MAX))
    };

    for col in 0..board.cols() {
        if !board.is_valid_move(col) {
            continue;
        }
        let Some(row) = board.next_open_row(col) else {
            continue;
        };

        let score = board
            .with_piece(row, col, piece, |b| search(b, depth - 1, !maximizing, &mut *nodes))
            .score;

        let improves = if maximizing {
            score > best.score
        } else {
            score < best.score
        };
        if improves {
            best = SearchResult {
                column: Some(col),
                score,
            };
        }
    }

    best
}

fn terminal_score(board: &Board) -> i64 {
    if board.winning_move(Piece::Ai) {
        AI_WIN_SCORE
    } else if board.winning_move(Piece::Player) {
        PLAYER_WIN_SCORE
    } else {
        DRAW_SCORE
    }
}
