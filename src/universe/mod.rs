//! Finite universe internals and public API.
//!
//! Storage is split into two parallel flat vectors on the `Universe`:
//! - `cells`: committed state plus the staged next state, one slot per cell,
//!   with one reserved permanently-dead slot at the end standing in for every
//!   out-of-bounds neighbor
//! - `neighbors`: pre-resolved `[usize; 8]` links per cell, fixed at
//!   construction so the tick loop never bounds-checks

mod cell;
mod engine;
mod neighbor;

pub use cell::Cell;
pub use engine::{CellChange, Universe};
pub use neighbor::Direction;
