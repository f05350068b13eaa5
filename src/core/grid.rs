//! The N×N tile grid.
//!
//! ## Orientation
//!
//! Cells are addressed by `(row, col)`, both 0-based. Row 0 is the
//! **bottom** row: moving `Down` pushes tiles toward row 0 and moving `Up`
//! pushes them toward row `N - 1`. Columns run left to right.
//!
//! ## Values
//!
//! Every cell is either `0` (empty) or a power of two `>= 2`. Constructors
//! that take external data validate this and also cap tiles at
//! [`MAX_TILE`]; the engine itself only ever writes merge results and
//! spawned tiles, which preserve it.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Smallest board edge the engine supports.
pub const MIN_SIZE: usize = 2;

/// Largest tile accepted from external data (2^32).
///
/// Merges only double tiles, so a board seeded within this bound stays far
/// below `u64` overflow.
pub const MAX_TILE: u64 = 1 << 32;

/// A cell coordinate. Row 0 is the bottom row.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Position {
    pub row: usize,
    pub col: usize,
}

impl Position {
    #[must_use]
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// Rejected grid input.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum GridError {
    #[error("grid size {0} is below the minimum of 2")]
    TooSmall(usize),
    #[error("expected {expected} cells for a square grid, got {actual}")]
    NotSquare { expected: usize, actual: usize },
    #[error("cell {position} holds {value}, which is neither 0 nor a power of two in 2..=2^32")]
    InvalidTile { position: Position, value: u64 },
}

/// Square board of tile values, stored row-major with row 0 at the bottom.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawGrid")]
pub struct Grid {
    size: usize,
    cells: Vec<u64>,
}

/// Unvalidated wire form; deserializing a `Grid` goes through [`Grid::from_cells`].
#[derive(Deserialize)]
struct RawGrid {
    size: usize,
    cells: Vec<u64>,
}

impl TryFrom<RawGrid> for Grid {
    type Error = GridError;

    fn try_from(raw: RawGrid) -> Result<Self, Self::Error> {
        Grid::from_cells(raw.size, raw.cells)
    }
}

impl Grid {
    /// Create an empty `size × size` grid.
    ///
    /// # Panics
    ///
    /// Panics if `size` is below [`MIN_SIZE`].
    #[must_use]
    pub fn new(size: usize) -> Self {
        assert!(size >= MIN_SIZE, "Grid size must be at least {MIN_SIZE}");
        Self {
            size,
            cells: vec![0; size * size],
        }
    }

    /// Build a grid from rows given in index order (`rows[0]` is the bottom row).
    pub fn from_rows(rows: Vec<Vec<u64>>) -> Result<Self, GridError> {
        let size = rows.len();
        let ragged = rows.iter().any(|r| r.len() != size);
        let cells: Vec<u64> = rows.into_iter().flatten().collect();
        if ragged {
            return Err(GridError::NotSquare {
                expected: size * size,
                actual: cells.len(),
            });
        }
        Self::from_cells(size, cells)
    }

    /// Build a grid from row-major cells.
    pub fn from_cells(size: usize, cells: Vec<u64>) -> Result<Self, GridError> {
        if size < MIN_SIZE {
            return Err(GridError::TooSmall(size));
        }
        if cells.len() != size * size {
            return Err(GridError::NotSquare {
                expected: size * size,
                actual: cells.len(),
            });
        }
        if let Some(index) = cells.iter().position(|&v| !is_valid_tile(v)) {
            return Err(GridError::InvalidTile {
                position: Position::new(index / size, index % size),
                value: cells[index],
            });
        }
        Ok(Self { size, cells })
    }

    /// Edge length N.
    #[must_use]
    pub fn size(&self) -> usize {
        self.size
    }

    #[must_use]
    pub fn get(&self, pos: Position) -> u64 {
        self.cells[self.index(pos)]
    }

    pub fn set(&mut self, pos: Position, value: u64) {
        let index = self.index(pos);
        self.cells[index] = value;
    }

    /// Row-major view of every cell.
    #[must_use]
    pub fn cells(&self) -> &[u64] {
        &self.cells
    }

    /// Iterate rows bottom to top.
    pub fn rows(&self) -> impl Iterator<Item = &[u64]> {
        self.cells.chunks(self.size)
    }

    /// Rows as owned vectors, bottom row first.
    #[must_use]
    pub fn to_rows(&self) -> Vec<Vec<u64>> {
        self.rows().map(<[u64]>::to_vec).collect()
    }

    /// Every cell position in row-major order.
    pub fn positions(&self) -> impl Iterator<Item = Position> {
        let size = self.size;
        (0..size * size).map(move |i| Position::new(i / size, i % size))
    }

    /// Positions of all empty cells in row-major order.
    #[must_use]
    pub fn empty_positions(&self) -> Vec<Position> {
        self.positions().filter(|&p| self.get(p) == 0).collect()
    }

    #[must_use]
    pub fn count_empty(&self) -> usize {
        self.cells.iter().filter(|&&v| v == 0).count()
    }

    #[must_use]
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|&v| v != 0)
    }

    #[must_use]
    pub fn contains(&self, value: u64) -> bool {
        self.cells.contains(&value)
    }

    /// Largest tile on the board, 0 when empty.
    #[must_use]
    pub fn max_tile(&self) -> u64 {
        self.cells.iter().copied().max().unwrap_or(0)
    }

    /// Sum of all tile values.
    #[must_use]
    pub fn tile_sum(&self) -> u64 {
        self.cells.iter().sum()
    }

    fn index(&self, pos: Position) -> usize {
        debug_assert!(pos.row < self.size && pos.col < self.size, "{pos} out of bounds");
        pos.row * self.size + pos.col
    }
}

/// 0, or a power of two from 2 up to [`MAX_TILE`].
#[must_use]
pub fn is_valid_tile(value: u64) -> bool {
    value == 0 || ((2..=MAX_TILE).contains(&value) && value.is_power_of_two())
}

impl std::fmt::Display for Grid {
    /// Renders the top row first, so the text reads the way the board looks.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let width = self.max_tile().max(1).to_string().len();
        let rows: Vec<&[u64]> = self.rows().collect();
        for (i, row) in rows.iter().rev().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            for (j, value) in row.iter().enumerate() {
                if j > 0 {
                    write!(f, " ")?;
                }
                if *value == 0 {
                    write!(f, "{:>width$}", ".")?;
                } else {
                    write!(f, "{value:>width$}")?;
                }
            }
        }
        Ok(())
    }
}
