//! Game module - sequences the pure grid operations into rounds
//!
//! The engine's grid operations are pure transition functions; this module
//! holds the caller-level state machine that strings them together:
//!
//! `Playing -> (selection hits a group) -> Removing -> Compacting -> Playing`,
//! with a side transition `Playing -> (grid fully empty) -> Repopulating ->
//! Playing` starting the next round.
//!
//! Timing and animation stay outside: a presentation layer calls [`Game::select`]
//! when the player taps a block, animates [`Game::last_moves`] after the
//! `Settled` step, and calls [`Game::advance`] whenever its current animation
//! finishes.

use crate::core::grid::Grid;
use crate::core::rng::GridRng;
use crate::types::{BlockMove, Color, Coord, GridError};

/// Round phase
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Waiting for a selection
    Playing,
    /// A group was just removed; gravity has not run yet
    Removing,
    /// Gravity ran; the move list is waiting to be consumed
    Compacting,
    /// The grid emptied out; the next round starts on the next advance
    Repopulating,
}

/// What a single [`Game::advance`] call did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    /// Nothing to do, still waiting for a selection
    Idle,
    /// Gravity was applied; the moves are available via [`Game::last_moves`]
    Settled,
    /// Compaction finished and the grid still holds blocks
    Ready,
    /// Compaction finished on an empty grid; the round is over
    RoundOver,
    /// A fresh grid was populated for the next round
    Repopulated,
}

/// Complete round state
#[derive(Debug, Clone)]
pub struct Game {
    grid: Grid,
    rng: GridRng,
    palette: Vec<Color>,
    phase: Phase,
    /// Group removed by the most recent selection
    last_group: Vec<Coord>,
    /// Moves produced by the most recent gravity pass
    last_moves: Vec<BlockMove>,
    /// Monotonic round counter (increments on repopulation)
    round: u32,
}

impl Game {
    /// Create a game on a freshly populated grid with the default palette
    pub fn new(size: u8, seed: u32) -> Result<Self, GridError> {
        Self::with_palette(size, &Color::ALL, seed)
    }

    /// Create a game with an explicit palette
    pub fn with_palette(size: u8, palette: &[Color], seed: u32) -> Result<Self, GridError> {
        let mut rng = GridRng::new(seed);
        let grid = Grid::populate(size, palette, &mut rng)?;
        Ok(Self {
            grid,
            rng,
            palette: palette.to_vec(),
            phase: Phase::Playing,
            last_group: Vec::new(),
            last_moves: Vec::new(),
            round: 0,
        })
    }

    /// Select the block at `at`, removing its connected group.
    ///
    /// Valid only in [`Phase::Playing`]; other phases report `PhaseBlocked`.
    /// Empty cells and out-of-bounds coordinates report the corresponding
    /// error and leave the grid unchanged. On success the phase moves to
    /// `Removing` and the removed group is returned.
    pub fn select(&mut self, at: Coord) -> Result<&[Coord], GridError> {
        if self.phase != Phase::Playing {
            return Err(GridError::PhaseBlocked);
        }

        let group = self.grid.find_group(at)?;
        self.grid.remove_group(&group);
        self.last_group = group;
        self.phase = Phase::Removing;
        Ok(&self.last_group)
    }

    /// Drive one transition of the round state machine.
    ///
    /// Callers animating removals and falls invoke this once per finished
    /// animation; headless callers can loop until [`Step::Idle`].
    pub fn advance(&mut self) -> Step {
        match self.phase {
            Phase::Playing => Step::Idle,
            Phase::Removing => {
                self.last_moves = self.grid.apply_gravity();
                self.phase = Phase::Compacting;
                Step::Settled
            }
            Phase::Compacting => {
                if self.grid.is_empty() {
                    self.phase = Phase::Repopulating;
                    Step::RoundOver
                } else {
                    self.phase = Phase::Playing;
                    Step::Ready
                }
            }
            Phase::Repopulating => {
                // Palette was validated non-empty at construction.
                debug_assert!(!self.palette.is_empty());
                let _ = self.grid.refill(&self.palette, &mut self.rng);
                self.round += 1;
                self.phase = Phase::Playing;
                Step::Repopulated
            }
        }
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Group removed by the most recent successful selection
    pub fn last_group(&self) -> &[Coord] {
        &self.last_group
    }

    /// Moves produced by the most recent gravity pass
    pub fn last_moves(&self) -> &[BlockMove] {
        &self.last_moves
    }

    pub fn blocks_remaining(&self) -> u32 {
        self.grid.blocks_remaining()
    }

    /// Rounds completed so far
    pub fn round(&self) -> u32 {
        self.round
    }

    #[cfg(test)]
    pub(crate) fn grid_mut(&mut self) -> &mut Grid {
        &mut self.grid
    }
}
