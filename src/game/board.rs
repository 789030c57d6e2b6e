use super::piece::Piece;

pub const ROWS: usize = 6;
pub const COLS: usize = 7;

/// Length of a winning line, and of every scoring window.
pub const WINDOW_LEN: usize = 4;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Cell {
    Empty,
    Player,
    Ai,
}

/// A `rows × cols` grid. Row 0 is the top, row `rows - 1` is the bottom.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Board {
    rows: usize,
    cols: usize,
    cells: Vec<Cell>,
}

impl Board {
    /// Create a new empty 6×7 board
    pub fn new() -> Self {
        Self::with_size(ROWS, COLS)
    }

    /// Create an empty board with the given dimensions
    pub fn with_size(rows: usize, cols: usize) -> Self {
        Board {
            rows,
            cols,
            cells: vec![Cell::Empty; rows * cols],
        }
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Get the cell at a specific position
    pub fn get(&self, row: usize, col: usize) -> Cell {
        self.cells[row * self.cols + col]
    }

    /// True iff `col` is on the board and its top cell is empty
    pub fn is_valid_move(&self, col: usize) -> bool {
        col < self.cols && self.rows > 0 && self.get(0, col) == Cell::Empty
    }

    /// Columns that can still take a piece, in increasing order
    pub fn valid_moves(&self) -> impl Iterator<Item = usize> + '_ {
        (0..self.cols).filter(move |&col| self.is_valid_move(col))
    }

    /// Lowest empty row in `col`, scanning from the bottom up.
    /// `None` when the column is full or off the board.
    pub fn next_open_row(&self, col: usize) -> Option<usize> {
        if col >= self.cols {
            return None;
        }
        (0..self.rows)
            .rev()
            .find(|&row| self.get(row, col) == Cell::Empty)
    }

    /// Set the cell at (row, col). The position must come from `next_open_row`.
    pub fn drop_piece(&mut self, row: usize, col: usize, piece: Piece) {
        self.set(row, col, piece.to_cell());
    }

    fn set(&mut self, row: usize, col: usize, cell: Cell) {
        let idx = row * self.cols + col;
        self.cells[idx] = cell;
    }

    /// Place `piece` at (row, col), run `f` on the board, then put the previous
    /// cell back. Sibling search branches never see each other's pieces.
    pub fn with_piece<R>(
        &mut self,
        row: usize,
        col: usize,
        piece: Piece,
        f: impl FnOnce(&mut Board) -> R,
    ) -> R {
        let previous = self.get(row, col);
        self.drop_piece(row, col, piece);
        let result = f(self);
        self.set(row, col, previous);
        result
    }

    /// Check if any cell holds four in a row for `piece`
    pub fn winning_move(&self, piece: Piece) -> bool {
        let target = piece.to_cell();
        self.windows()
            .any(|window| window.iter().all(|&cell| cell == target))
    }

    /// Check if the board is completely full
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|&cell| cell != Cell::Empty)
    }

    /// A win for either side, or a full board
    pub fn is_terminal(&self) -> bool {
        self.winning_move(Piece::Player) || self.winning_move(Piece::Ai) || self.is_full()
    }

    /// Every 4-cell window on the board: horizontal, vertical, down-right
    /// diagonal, then up-right diagonal.
    pub fn windows(&self) -> impl Iterator<Item = [Cell; WINDOW_LEN]> + '_ {
        let rows = self.rows;
        let cols = self.cols;
        let span = WINDOW_LEN - 1;

        let horizontal = (0..rows).flat_map(move |r| {
            (0..cols.saturating_sub(span)).map(move |c| self.line(r, c, 0, 1))
        });
        let vertical = (0..cols).flat_map(move |c| {
            (0..rows.saturating_sub(span)).map(move |r| self.line(r, c, 1, 0))
        });
        let down_right = (0..rows.saturating_sub(span)).flat_map(move |r| {
            (0..cols.saturating_sub(span)).map(move |c| self.line(r, c, 1, 1))
        });
        let up_right = (span.min(rows)..rows).flat_map(move |r| {
            (0..cols.saturating_sub(span)).map(move |c| self.line(r, c, -1, 1))
        });

        horizontal.chain(vertical).chain(down_right).chain(up_right)
    }

    fn line(&self, row: usize, col: usize, d_row: isize, d_col: isize) -> [Cell; WINDOW_LEN] {
        std::array::from_fn(|i| {
            let r = row as isize + d_row * i as isize;
            let c = col as isize + d_col * i as isize;
            self.get(r as usize, c as usize)
        })
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}
