use std::path::Path;

use crate::error::ConfigError;
use crate::game::{Piece, COLS, ROWS};

/// Deepest search a config file may ask for. Node count grows as `cols^depth`.
pub const MAX_DEPTH: u32 = 10;

/// Named search depths offered to the player.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    pub fn depth(self) -> u32 {
        match self {
            Difficulty::Easy => 2,
            Difficulty::Medium => 4,
            Difficulty::Hard => 6,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Difficulty::Easy => "Easy",
            Difficulty::Medium => "Medium",
            Difficulty::Hard => "Hard",
        }
    }
}

/// Who drops the first piece.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum FirstMover {
    Player,
    Ai,
}

impl From<FirstMover> for Piece {
    fn from(first: FirstMover) -> Piece {
        match first {
            FirstMover::Player => Piece::Player,
            FirstMover::Ai => Piece::Ai,
        }
    }
}

#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub rows: usize,
    pub cols: usize,
    pub first: FirstMover,
}

impl Default for GameConfig {
    fn default() -> Self {
        GameConfig {
            rows: ROWS,
            cols: COLS,
            first: FirstMover::Player,
        }
    }
}

#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    pub difficulty: Difficulty,
    /// Explicit depth; takes precedence over `difficulty` when set.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub depth: Option<u32>,
}

impl Default for SearchConfig {
    fn default() -> Self {
        SearchConfig {
            difficulty: Difficulty::Hard,
            depth: None,
        }
    }
}

impl SearchConfig {
    pub fn effective_depth(&self) -> u32 {
        self.depth.unwrap_or_else(|| self.difficulty.depth())
    }
}

/// Top-level application configuration, loadable from TOML.
#[derive(Debug, Clone, Default, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub game: GameConfig,
    pub search: SearchConfig,
}

impl AppConfig {
    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::FileRead {
            path: path.to_path_buf(),
            source: e,
        })?;
        let config: AppConfig = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file, falling back to defaults if the file
    /// does not exist.
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            Self::load(path)
        } else {
            log::warn!("config file '{}' not found, using defaults", path.display());
            Ok(Self::default())
        }
    }

    /// Validate configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.game.rows == 0 {
            return Err(ConfigError::Validation("game.rows must be > 0".into()));
        }
        if self.game.cols == 0 {
            return Err(ConfigError::Validation("game.cols must be > 0".into()));
        }
        if let Some(depth) = self.search.depth {
            if depth == 0 {
                return Err(ConfigError::Validation(
                    "search.depth must be >= 1".into(),
                ));
            }
            if depth > MAX_DEPTH {
                return Err(ConfigError::Validation(format!(
                    "search.depth must be <= {MAX_DEPTH}"
                )));
            }
        }
        Ok(())
    }

    /// Generate a TOML string with all default values (useful for creating
    /// example config files).
    pub fn default_toml() -> String {
        toml::to_string_pretty(&AppConfig::default()).expect("default config serializes")
    }
}
