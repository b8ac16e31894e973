//! Core types shared across the crate
//! This module contains pure data types with no external dependencies

use std::fmt;

use arrayvec::ArrayVec;

/// Default grid edge length (the classic game is 5x5)
pub const GAME_SIZE: u8 = 5;

/// Largest grid edge length accepted by the engine.
///
/// 16 * 16 = 256 cells, so group search can use a fixed-size visited bitmask
/// over the flat index space.
pub const MAX_GAME_SIZE: u8 = 16;

/// Block colors
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    Magenta,
    Green,
    Blue,
}

impl Color {
    /// The full default palette
    pub const ALL: [Color; 3] = [Color::Magenta, Color::Green, Color::Blue];

    /// Parse color from string (case-insensitive)
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "magenta" => Some(Color::Magenta),
            "green" => Some(Color::Green),
            "blue" => Some(Color::Blue),
            _ => None,
        }
    }

    /// Convert to lowercase string
    pub fn as_str(&self) -> &'static str {
        match self {
            Color::Magenta => "magenta",
            Color::Green => "green",
            Color::Blue => "blue",
        }
    }
}

/// Cell on the grid (None = empty, Some = filled with a block of that color)
pub type Cell = Option<Color>;

/// Grid coordinate, 0-based. Row 0 is the bottom row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Coord {
    pub row: u8,
    pub col: u8,
}

/// Shorthand constructor for a coordinate
pub fn coord(row: u8, col: u8) -> Coord {
    Coord { row, col }
}

impl Coord {
    /// 4-directional neighbors clipped to a `size x size` grid
    pub fn neighbors(&self, size: u8) -> ArrayVec<Coord, 4> {
        let mut out = ArrayVec::new();
        if self.row < size.saturating_sub(1) {
            out.push(coord(self.row + 1, self.col));
        }
        if self.row > 0 {
            out.push(coord(self.row - 1, self.col));
        }
        if self.col > 0 {
            out.push(coord(self.row, self.col - 1));
        }
        if self.col < size.saturating_sub(1) {
            out.push(coord(self.row, self.col + 1));
        }
        out
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// One block relocation reported by gravity compaction.
///
/// A block moved by both the vertical and the horizontal phase reports a
/// single move from its original position to its final position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BlockMove {
    pub from: Coord,
    pub to: Coord,
}

/// Errors reported by grid operations
///
/// All of these are local, non-fatal conditions: the engine reports them to
/// the caller and never logs, retries, or panics.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GridError {
    /// A coordinate fell outside `[0, size)` on either axis
    OutOfBounds,
    /// Group search started on an unoccupied cell
    EmptyCellSelected,
    /// Populate was given an empty color palette
    InvalidPalette,
    /// Grid size was zero or above [`MAX_GAME_SIZE`]
    InvalidSize,
    /// A selection arrived while the round was mid-transition
    PhaseBlocked,
}

impl GridError {
    pub fn message(self) -> &'static str {
        match self {
            GridError::OutOfBounds => "coordinate is outside the grid",
            GridError::EmptyCellSelected => "selected cell holds no block",
            GridError::InvalidPalette => "color palette is empty",
            GridError::InvalidSize => "grid size must be between 1 and MAX_GAME_SIZE",
            GridError::PhaseBlocked => "round is not accepting selections right now",
        }
    }
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

impl std::error::Error for GridError {}
