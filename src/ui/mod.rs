//! Terminal front ends: a ratatui game view, and a plain line-based mode
//! that reads columns from any `BufRead`.

mod app;
mod game_view;
pub mod text;

pub use app::App;
