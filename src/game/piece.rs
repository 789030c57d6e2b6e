use super::board::Cell;

/// The two sides. The human is `Player`, the minimax side is `Ai`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Piece {
    Player,
    Ai,
}

impl Piece {
    /// Get the opposing side
    pub fn other(self) -> Piece {
        match self {
            Piece::Player => Piece::Ai,
            Piece::Ai => Piece::Player,
        }
    }

    /// Convert piece to cell type
    pub fn to_cell(self) -> Cell {
        match self {
            Piece::Player => Cell::Player,
            Piece::Ai => Cell::Ai,
        }
    }

    /// Get side name for display
    pub fn name(self) -> &'static str {
        match self {
            Piece::Player => "Player",
            Piece::Ai => "AI",
        }
    }
}
