//! Core engine for the classic 15-puzzle.
//!
//! A [`Board`] owns a 4x4 grid of numbered tiles plus one blank and exposes
//! population (explicit layout or seeded shuffle), tile queries, the sliding
//! move engine, solvability analysis, and solved-state detection. The crate
//! performs no I/O; interactive front ends drive it through this API.

mod board;
mod rng;

pub use board::{Board, Direction, LayoutError, MoveError, ParseDirectionError, Position};

/// Side length of the puzzle grid.
pub const SIZE: usize = 4;

/// Number of cells in the grid.
pub const AREA: usize = SIZE * SIZE;

/// Tile identifier of the blank cell.
pub const EMPTY: u8 = AREA as u8;
