//! Error types for finite-life.

use thiserror::Error;

/// Errors raised when the universe's update contract is violated.
///
/// All of these are fail-fast programmer errors, not transient conditions:
/// the stage/commit protocol only works if every cell is staged and committed
/// exactly once per generation, so a violation propagates immediately instead
/// of being patched over.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum UniverseError {
    /// The board must be at least 1x1.
    #[error("universe needs at least a 1x1 board, got {width}x{height}")]
    ZeroDimension { width: usize, height: usize },

    /// A cell was staged a second time before its pending state committed.
    #[error("cell ({x}, {y}) already has a staged next state")]
    StagingConflict { x: usize, y: usize },

    /// A cell was committed with no staged state pending.
    #[error("cell ({x}, {y}) has no staged state to commit")]
    DoubleCommit { x: usize, y: usize },

    /// A seed coordinate fell outside the board.
    #[error("({x}, {y}) is outside the {width}x{height} board")]
    OutOfBounds {
        x: usize,
        y: usize,
        width: usize,
        height: usize,
    },

    /// `set_cell` was called after the simulation already started.
    #[error("cells can only be seeded before the first tick (now at generation {generation})")]
    SeedAfterTick { generation: u64 },
}

/// Errors from parsing a seed-pattern file.
#[derive(Debug, Error)]
pub enum PatternError {
    /// No `live_cell: "<char>"` line was found.
    #[error("pattern has no live_cell marker")]
    MissingLiveMarker,

    /// No `dead_cell: "<char>"` line was found.
    #[error("pattern has no dead_cell marker")]
    MissingDeadMarker,

    /// A board row contained a character that is neither marker.
    #[error("board row {row} contains {glyph:?}, which is neither the live nor the dead marker")]
    UnknownGlyph { row: usize, glyph: char },

    /// Board rows must all have the same width.
    #[error("board row {row} is {got} cells wide, expected {expected}")]
    RaggedRow {
        row: usize,
        expected: usize,
        got: usize,
    },

    /// The board block held no cells at all.
    #[error("pattern has no board rows")]
    EmptyBoard,

    /// The board block must be wrapped in lines containing only `"`.
    #[error("board block is not wrapped in '\"' lines")]
    UnterminatedBoard,

    /// The pattern file could not be read.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}
