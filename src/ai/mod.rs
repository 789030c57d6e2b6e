//! The AI side: heuristic evaluation and fixed-depth minimax search.

pub mod evaluation;
pub mod minimax;

pub use evaluation::{evaluate_window, score_position, Window};
pub use minimax::{minimax, SearchResult, Searcher, AI_WIN_SCORE, PLAYER_WIN_SCORE};
