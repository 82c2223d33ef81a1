//! Board grid storage.
//!
//! A `Board` is a plain `Copy` value: cells live inline in a fixed-size
//! array sized for `MAX_BOARD_SIZE`, and only the top-left `size x size`
//! square is used. Copying a board is a memcpy, which is what makes
//! speculative move evaluation cheap and alias-free.
//!
//! Lookups by (row, col) never wrap. Wraparound exists only through
//! `Board::torus`, which push resolution uses to step across an edge.

use serde::{Deserialize, Serialize};

use super::config::MAX_BOARD_SIZE;
use super::player::Player;

const MAX_CELLS: usize = MAX_BOARD_SIZE * MAX_BOARD_SIZE;

/// Contents of one board cell.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Cell {
    #[default]
    Empty,
    Piece(Player),
}

impl Cell {
    /// Owner of the piece in this cell, if any.
    #[must_use]
    pub const fn owner(self) -> Option<Player> {
        match self {
            Cell::Empty => None,
            Cell::Piece(player) => Some(player),
        }
    }

    #[must_use]
    pub const fn is_empty(self) -> bool {
        matches!(self, Cell::Empty)
    }

    #[must_use]
    pub fn is_owned_by(self, player: Player) -> bool {
        self == Cell::Piece(player)
    }

    fn symbol(self) -> char {
        match self {
            Cell::Empty => '.',
            Cell::Piece(player) => player.symbol(),
        }
    }
}

impl From<Player> for Cell {
    fn from(player: Player) -> Self {
        Cell::Piece(player)
    }
}

/// Square grid of cells.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Board {
    size: usize,
    cells: [Cell; MAX_CELLS],
}

impl Board {
    /// Create an empty board with the given edge length.
    ///
    /// # Panics
    ///
    /// If `size` is zero or exceeds `MAX_BOARD_SIZE`. `GameConfig::validate`
    /// rejects such sizes before a board is ever built.
    #[must_use]
    pub fn new(size: usize) -> Self {
        assert!(
            (1..=MAX_BOARD_SIZE).contains(&size),
            "board size must be in 1..={MAX_BOARD_SIZE}"
        );
        Self {
            size,
            cells: [Cell::Empty; MAX_CELLS],
        }
    }

    /// Parse a board from text rows (`.` empty, `X` player A, `O` player B).
    ///
    /// Returns `None` if the rows are not square or contain other glyphs.
    ///
    /// ```
    /// use push_battle::core::{Board, Cell, Player};
    ///
    /// let board = Board::from_rows(&[
    ///     "X....",
    ///     ".....",
    ///     "..O..",
    ///     ".....",
    ///     ".....",
    /// ]).unwrap();
    /// assert_eq!(board.get(0, 0), Cell::Piece(Player::A));
    /// assert_eq!(board.get(2, 2), Cell::Piece(Player::B));
    /// ```
    #[must_use]
    pub fn from_rows(rows: &[&str]) -> Option<Self> {
        let size = rows.len();
        if size == 0 || size > MAX_BOARD_SIZE {
            return None;
        }
        let mut board = Self::new(size);
        for (row, line) in rows.iter().enumerate() {
            if line.chars().count() != size {
                return None;
            }
            for (col, glyph) in line.chars().enumerate() {
                let cell = match glyph {
                    '.' => Cell::Empty,
                    'X' => Cell::Piece(Player::A),
                    'O' => Cell::Piece(Player::B),
                    _ => return None,
                };
                board.set(row, col, cell);
            }
        }
        Some(board)
    }

    /// Board edge length.
    #[must_use]
    pub fn size(&self) -> usize {
        self.size
    }

    /// Whether a signed coordinate pair lies on the board.
    #[must_use]
    pub fn in_bounds(&self, row: i64, col: i64) -> bool {
        let n = self.size as i64;
        (0..n).contains(&row) && (0..n).contains(&col)
    }

    /// Cell contents. Coordinates must be in `0..size`.
    #[must_use]
    pub fn get(&self, row: usize, col: usize) -> Cell {
        debug_assert!(row < self.size && col < self.size);
        self.cells[row * self.size + col]
    }

    /// Overwrite a cell. Coordinates must be in `0..size`.
    pub fn set(&mut self, row: usize, col: usize, cell: Cell) {
        debug_assert!(row < self.size && col < self.size);
        self.cells[row * self.size + col] = cell;
    }

    /// Wrap a signed coordinate pair onto the torus.
    #[must_use]
    pub fn torus(&self, row: i64, col: i64) -> (usize, usize) {
        let n = self.size as i64;
        (row.rem_euclid(n) as usize, col.rem_euclid(n) as usize)
    }

    /// Iterate over every cell as (row, col, cell), row-major.
    pub fn cells(&self) -> impl Iterator<Item = (usize, usize, Cell)> + '_ {
        let size = self.size;
        self.cells[..size * size]
            .iter()
            .enumerate()
            .map(move |(i, &cell)| (i / size, i % size, cell))
    }

    /// Coordinates of every empty cell, row-major.
    pub fn empty_cells(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.cells()
            .filter(|(_, _, cell)| cell.is_empty())
            .map(|(r, c, _)| (r, c))
    }

    /// Coordinates of every piece owned by `player`, row-major.
    pub fn pieces(&self, player: Player) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.cells()
            .filter(move |(_, _, cell)| cell.is_owned_by(player))
            .map(|(r, c, _)| (r, c))
    }

    /// Number of cells holding exactly `cell`.
    #[must_use]
    pub fn count(&self, cell: Cell) -> usize {
        self.cells().filter(|(_, _, c)| *c == cell).count()
    }

    /// The same position with the two colours swapped.
    #[must_use]
    pub fn relabeled(&self) -> Self {
        let mut board = *self;
        for cell in &mut board.cells[..self.size * self.size] {
            if let Cell::Piece(player) = *cell {
                *cell = Cell::Piece(player.opponent());
            }
        }
        board
    }
}

impl std::fmt::Debug for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Board {{ size: {}, cells:\n{self}}}", self.size)
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for row in 0..self.size {
            let line: String = (0..self.size).map(|col| self.get(row, col).symbol()).collect();
            writeln!(f, "{line}")?;
        }
        Ok(())
    }
}
