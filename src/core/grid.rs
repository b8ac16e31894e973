//! Grid module - manages the block grid
//!
//! The grid is a `size x size` square where each cell can be empty or filled
//! with a colored block. Uses a flat vector for cache locality.
//! Coordinates: (row, col) where row 0 is the bottom row and col 0 is the
//! leftmost column. Gravity compaction pulls blocks toward row 0 and col 0.

use crate::core::rng::GridRng;
use crate::types::{Cell, Color, Coord, GridError, MAX_GAME_SIZE};

/// The block grid - `size x size` cells using flat row-major storage
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    size: u8,
    /// Flat vector of cells, row-major order (row * size + col)
    cells: Vec<Cell>,
}

impl Grid {
    /// Create a new empty grid
    ///
    /// Fails with `InvalidSize` when `size` is zero or above [`MAX_GAME_SIZE`].
    pub fn new(size: u8) -> Result<Self, GridError> {
        if size == 0 || size > MAX_GAME_SIZE {
            return Err(GridError::InvalidSize);
        }
        Ok(Self {
            size,
            cells: vec![None; size as usize * size as usize],
        })
    }

    /// Create a fully populated grid with uniformly random colors.
    ///
    /// Deterministic for a given RNG state, which makes rounds replayable.
    pub fn populate(size: u8, palette: &[Color], rng: &mut GridRng) -> Result<Self, GridError> {
        let mut grid = Self::new(size)?;
        grid.refill(palette, rng)?;
        Ok(grid)
    }

    /// Refill every cell with a block of a random palette color
    pub fn refill(&mut self, palette: &[Color], rng: &mut GridRng) -> Result<(), GridError> {
        if palette.is_empty() {
            return Err(GridError::InvalidPalette);
        }
        for cell in &mut self.cells {
            *cell = Some(palette[rng.next_range(palette.len() as u32) as usize]);
        }
        Ok(())
    }

    /// Calculate flat index from a coordinate
    #[inline(always)]
    pub(crate) fn index(&self, at: Coord) -> Option<usize> {
        if at.row >= self.size || at.col >= self.size {
            return None;
        }
        Some(at.row as usize * self.size as usize + at.col as usize)
    }

    /// Edge length of the grid
    pub fn size(&self) -> u8 {
        self.size
    }

    /// Check whether a coordinate lies inside the grid
    pub fn contains(&self, at: Coord) -> bool {
        at.row < self.size && at.col < self.size
    }

    /// Get cell at a coordinate
    pub fn get(&self, at: Coord) -> Result<Cell, GridError> {
        self.index(at)
            .map(|idx| self.cells[idx])
            .ok_or(GridError::OutOfBounds)
    }

    /// Set cell at a coordinate
    pub fn set(&mut self, at: Coord, cell: Cell) -> Result<(), GridError> {
        match self.index(at) {
            Some(idx) => {
                self.cells[idx] = cell;
                Ok(())
            }
            None => Err(GridError::OutOfBounds),
        }
    }

    /// Check if position is occupied (within bounds and filled)
    pub fn is_occupied(&self, at: Coord) -> bool {
        matches!(self.get(at), Ok(Some(_)))
    }

    /// True iff every cell is empty (the round is over)
    pub fn is_empty(&self) -> bool {
        self.cells.iter().all(|cell| cell.is_none())
    }

    /// Number of blocks still on the grid
    pub fn blocks_remaining(&self) -> u32 {
        self.cells.iter().filter(|cell| cell.is_some()).count() as u32
    }

    /// True iff the column holds no block
    pub fn is_column_empty(&self, col: u8) -> bool {
        if col >= self.size {
            return true;
        }
        (0..self.size).all(|row| {
            let idx = row as usize * self.size as usize + col as usize;
            self.cells[idx].is_none()
        })
    }

    /// True iff some column has a block above an empty cell,
    /// i.e. vertical compaction would move something
    pub fn has_gaps(&self) -> bool {
        for col in 0..self.size {
            let mut found_gap = false;
            for row in 0..self.size {
                let idx = row as usize * self.size as usize + col as usize;
                if self.cells[idx].is_none() {
                    found_gap = true;
                } else if found_gap {
                    return true;
                }
            }
        }
        false
    }

    /// True iff an empty column lies to the left of an occupied one,
    /// i.e. horizontal compaction would move something
    pub fn columns_need_shifting(&self) -> bool {
        let mut found_empty_column = false;
        for col in 0..self.size {
            if self.is_column_empty(col) {
                found_empty_column = true;
            } else if found_empty_column {
                return true;
            }
        }
        false
    }

    /// Get a reference to the internal cells vector
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    pub(crate) fn cells_mut(&mut self) -> &mut [Cell] {
        &mut self.cells
    }

    /// Build a grid from bottom-to-top rows (for tests and display code)
    ///
    /// `rows[0]` is the bottom row. All rows must have length `rows.len()`.
    pub fn from_rows(rows: Vec<Vec<Cell>>) -> Result<Self, GridError> {
        let size = rows.len();
        if size == 0 || size > MAX_GAME_SIZE as usize || rows.iter().any(|r| r.len() != size) {
            return Err(GridError::InvalidSize);
        }

        let mut grid = Self::new(size as u8)?;
        for (row, cells) in rows.into_iter().enumerate() {
            for (col, cell) in cells.into_iter().enumerate() {
                grid.cells[row * size + col] = cell;
            }
        }
        Ok(grid)
    }

    /// Convert to bottom-to-top rows (for tests and display code)
    pub fn to_rows(&self) -> Vec<Vec<Cell>> {
        let size = self.size as usize;
        (0..size)
            .map(|row| self.cells[row * size..(row + 1) * size].to_vec())
            .collect()
    }
}
