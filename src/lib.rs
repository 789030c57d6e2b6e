//! # Minimax Connect Four
//!
//! Connect Four against an AI that plays exhaustive fixed-depth minimax over a
//! window-counting heuristic. Play happens in a ratatui terminal UI or a plain
//! line-based prompt.
//!
//! ## Modules
//!
//! - [`game`] — Board, gravity and win detection, the turn state machine
//! - [`ai`] — Heuristic evaluation and the minimax searcher
//! - [`ui`] — Terminal UI and the plain text mode
//! - [`config`] — TOML configuration loading and validation
//! - [`error`] — Structured error types

pub mod ai;
pub mod config;
pub mod error;
pub mod game;
pub mod ui;
