//! Core module - pure grid logic with no external dependencies
//!
//! This module contains the grid data structure, the group/gravity algorithms
//! over it, and the round state machine. It has zero dependencies on UI,
//! networking, or I/O.

pub mod game;
pub mod gravity;
pub mod grid;
pub mod group;
pub mod rng;

// Re-export commonly used types
pub use game::{Game, Phase, Step};
pub use grid::Grid;
pub use rng::GridRng;
