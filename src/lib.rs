//! BlockBreaker core engine - deterministic, testable, and presentation-free
//!
//! A pure engine for a match-style block elimination puzzle: a square grid of
//! colored blocks where selecting a block removes the maximal 4-connected
//! same-color group containing it, survivors fall down within their columns,
//! empty columns collapse leftward, and an emptied grid repopulates for the
//! next round.
//!
//! The crate has no rendering, input, or timing code. Its only boundary is
//! the in-memory API: a presentation layer translates taps into [`Coord`]s,
//! animates the moves reported by gravity, and drives the round state machine
//! at its own pace.
//!
//! # Module Structure
//!
//! - [`core::grid`]: flat-storage grid with bounds checking and population
//! - [`core::group`]: connected same-color group search and removal
//! - [`core::gravity`]: two-phase compaction with per-block move reporting
//! - [`core::game`]: caller-level round state machine
//! - [`core::rng`]: seeded LCG for reproducible boards
//!
//! # Example
//!
//! ```
//! use blockbreaker_core::core::{Game, Step};
//! use blockbreaker_core::types::coord;
//!
//! // Create a 5x5 game from a seed
//! let mut game = Game::new(5, 12345)?;
//!
//! // Tap the bottom-left block and settle the grid
//! let group = game.select(coord(0, 0))?;
//! assert!(!group.is_empty());
//!
//! assert_eq!(game.advance(), Step::Settled);
//! for mv in game.last_moves() {
//!     // feed an animation here
//!     let _ = (mv.from, mv.to);
//! }
//! game.advance();
//! # Ok::<(), blockbreaker_core::types::GridError>(())
//! ```

pub mod core;
pub mod types;

pub use crate::core::{Game, Grid, GridRng, Phase, Step};
pub use crate::types::{coord, BlockMove, Cell, Color, Coord, GridError, GAME_SIZE, MAX_GAME_SIZE};
