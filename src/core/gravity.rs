//! Gravity compaction
//!
//! After a group is removed the grid settles in two phases: blocks slide down
//! within their column (relative order preserved, empties accumulate at the
//! top), then fully-empty columns collapse by packing the surviving columns
//! leftward. Packing runs over all columns at once, so the result holds no
//! empty column to the left of an occupied one no matter how many columns
//! were cleared in a single move.

use crate::core::grid::Grid;
use crate::types::{coord, BlockMove, Color, Coord};

impl Grid {
    /// Settle the grid and report every block that changed position.
    ///
    /// Returns one move per relocated block, old coordinate to new coordinate,
    /// ordered column-major (left to right, bottom to top). Blocks that stay
    /// put produce no entry. The engine does no animation; the move list is
    /// for a presentation layer to drive one.
    pub fn apply_gravity(&mut self) -> Vec<BlockMove> {
        let size = self.size() as usize;

        // Surviving blocks per column, bottom to top, with their origins.
        // Dropping empty columns here is the whole horizontal phase.
        let mut columns: Vec<Vec<(Coord, Color)>> = Vec::with_capacity(size);
        for col in 0..size {
            let mut survivors = Vec::new();
            for row in 0..size {
                if let Some(color) = self.cells()[row * size + col] {
                    survivors.push((coord(row as u8, col as u8), color));
                }
            }
            if !survivors.is_empty() {
                columns.push(survivors);
            }
        }

        let mut moves = Vec::new();
        for cell in self.cells_mut() {
            *cell = None;
        }
        for (new_col, column) in columns.iter().enumerate() {
            for (new_row, &(origin, color)) in column.iter().enumerate() {
                let dest = coord(new_row as u8, new_col as u8);
                self.cells_mut()[new_row * size + new_col] = Some(color);
                if origin != dest {
                    moves.push(BlockMove { from: origin, to: dest });
                }
            }
        }

        moves
    }
}
