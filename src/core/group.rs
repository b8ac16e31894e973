//! Group search - connected same-color regions
//!
//! Selecting a block targets the maximal 4-connected group of blocks sharing
//! its color. The search is an iterative depth-first traversal with an
//! explicit stack and a fixed-size visited bitmask over the flat index space,
//! so no recursion depth concerns arise for any grid size.

use crate::core::grid::Grid;
use crate::types::{Coord, GridError, MAX_GAME_SIZE};

const MASK_WORDS: usize = (MAX_GAME_SIZE as usize * MAX_GAME_SIZE as usize) / 64;

/// Visited set over flat cell indices
struct CellMask {
    words: [u64; MASK_WORDS],
}

impl CellMask {
    fn new() -> Self {
        Self {
            words: [0; MASK_WORDS],
        }
    }

    fn insert(&mut self, idx: usize) {
        self.words[idx / 64] |= 1 << (idx % 64);
    }

    fn contains(&self, idx: usize) -> bool {
        self.words[idx / 64] & (1 << (idx % 64)) != 0
    }
}

impl Grid {
    /// Find the maximal connected group of same-color blocks containing `start`.
    ///
    /// Adjacency is 4-directional (no diagonals). The start cell is always part
    /// of the result, even when it has no same-colored neighbor. The returned
    /// coordinates are sorted, so equal groups compare equal.
    ///
    /// Fails with `OutOfBounds` for a coordinate outside the grid and with
    /// `EmptyCellSelected` when the start cell holds no block.
    pub fn find_group(&self, start: Coord) -> Result<Vec<Coord>, GridError> {
        let color = self.get(start)?.ok_or(GridError::EmptyCellSelected)?;

        let mut visited = CellMask::new();
        let mut stack = vec![start];
        let mut group = Vec::new();
        // index() is Some for every coordinate reached below: start was bounds
        // checked by get(), and neighbors() clips to the grid.
        if let Some(idx) = self.index(start) {
            visited.insert(idx);
        }

        while let Some(at) = stack.pop() {
            group.push(at);

            for neighbor in at.neighbors(self.size()) {
                let Some(idx) = self.index(neighbor) else {
                    continue;
                };
                if visited.contains(idx) {
                    continue;
                }
                if self.cells()[idx] == Some(color) {
                    visited.insert(idx);
                    stack.push(neighbor);
                }
            }
        }

        group.sort_unstable();
        Ok(group)
    }

    /// Clear every listed cell.
    ///
    /// Cells outside the group are untouched. Already-empty cells and
    /// out-of-bounds coordinates remove nothing, so repeating the call with
    /// the same group is a no-op.
    pub fn remove_group(&mut self, group: &[Coord]) {
        for &at in group {
            if let Some(idx) = self.index(at) {
                self.cells_mut()[idx] = None;
            }
        }
    }
}
