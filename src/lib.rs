//! Finite-board Conway's Game of Life engine (B3/S23) with staged
//! generation updates.

pub mod error;
pub mod pattern;
pub mod universe;

pub use error::{PatternError, UniverseError};
pub use pattern::{SeedPattern, render_board};
pub use universe::{Cell, CellChange, Direction, Universe};
