//! The Moore neighborhood: 8 fixed relative offsets around a cell.

/// The 8 cardinal and intercardinal directions for neighbor addressing.
///
/// The y axis grows downward, matching row-major board order.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[repr(u8)]
pub enum Direction {
    North = 0,
    NorthEast = 1,
    East = 2,
    SouthEast = 3,
    South = 4,
    SouthWest = 5,
    West = 6,
    NorthWest = 7,
}

impl Direction {
    pub const ALL: [Direction; 8] = [
        Direction::North,
        Direction::NorthEast,
        Direction::East,
        Direction::SouthEast,
        Direction::South,
        Direction::SouthWest,
        Direction::West,
        Direction::NorthWest,
    ];

    /// The coordinate offset for this direction.
    #[inline]
    pub const fn offset(self) -> (i32, i32) {
        match self {
            Direction::North => (0, -1),
            Direction::NorthEast => (1, -1),
            Direction::East => (1, 0),
            Direction::SouthEast => (1, 1),
            Direction::South => (0, 1),
            Direction::SouthWest => (-1, 1),
            Direction::West => (-1, 0),
            Direction::NorthWest => (-1, -1),
        }
    }

    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }
}

/// Pre-resolved neighbor links for one cell, indexed by `Direction`.
///
/// Each entry is an index into the universe's flat cell storage; offsets that
/// fall off the board all point at the boundary sentinel slot, so the count
/// loop stays branch-free.
pub(crate) type Neighbors = [usize; 8];
