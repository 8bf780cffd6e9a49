//! Compass directions and the per-direction corridor shape templates
//!
//! Dead-end retraction and stair placement both test the local shape of a
//! corridor against small tables of relative offsets. Keeping those tables as
//! data lets the carving code stay direction-agnostic.

use std::fmt;

/// Relative `(row, col)` offset from the cell under test
pub type Offset = (isize, isize);

/// Compass direction on the grid
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Direction {
    /// Decreasing row
    North,
    /// Increasing row
    South,
    /// Decreasing column
    West,
    /// Increasing column
    East,
}

/// Shape test: which cells must be a lone corridor and which must be closed
#[derive(Debug, Clone, Copy)]
pub struct TunnelCheck {
    /// Offsets whose cell must carry exactly the corridor attribute
    pub corridor: &'static [Offset],
    /// Offsets whose cell must be out of bounds or hold no open space
    pub walled: &'static [Offset],
}

/// Dead-end template: a tunnel check plus what to clear and where to continue
#[derive(Debug, Clone, Copy)]
pub struct CloseEnd {
    /// Shape the dead end must match
    pub check: TunnelCheck,
    /// Offsets blanked when the shape matches
    pub close: &'static [Offset],
    /// Offset retraction continues from
    pub recurse: Offset,
}

/// Stair template: a straight three-cell run with closed flanks
#[derive(Debug, Clone, Copy)]
pub struct StairEndCheck {
    /// Shape the corridor end must match
    pub check: TunnelCheck,
    /// Corridor cell the staircase leads onto
    pub next: Offset,
}

const CLOSE_NORTH: CloseEnd = CloseEnd {
    check: TunnelCheck {
        corridor: &[(0, 0)],
        walled: &[(0, -1), (1, -1), (1, 0), (1, 1), (0, 1)],
    },
    close: &[(0, 0)],
    recurse: (-1, 0),
};

const CLOSE_SOUTH: CloseEnd = CloseEnd {
    check: TunnelCheck {
        corridor: &[(0, 0)],
        walled: &[(0, -1), (-1, -1), (-1, 0), (-1, 1), (0, 1)],
    },
    close: &[(0, 0)],
    recurse: (1, 0),
};

const CLOSE_WEST: CloseEnd = CloseEnd {
    check: TunnelCheck {
        corridor: &[(0, 0)],
        walled: &[(-1, 0), (-1, 1), (0, 1), (1, 1), (1, 0)],
    },
    close: &[(0, 0)],
    recurse: (0, -1),
};

const CLOSE_EAST: CloseEnd = CloseEnd {
    check: TunnelCheck {
        corridor: &[(0, 0)],
        walled: &[(-1, 0), (-1, -1), (0, -1), (1, -1), (1, 0)],
    },
    close: &[(0, 0)],
    recurse: (0, 1),
};

const STAIR_NORTH: StairEndCheck = StairEndCheck {
    check: TunnelCheck {
        corridor: &[(0, 0), (1, 0), (2, 0)],
        walled: &[(1, -1), (0, -1), (-1, -1), (-1, 0), (-1, 1), (0, 1), (1, 1)],
    },
    next: (1, 0),
};

const STAIR_SOUTH: StairEndCheck = StairEndCheck {
    check: TunnelCheck {
        corridor: &[(0, 0), (-1, 0), (-2, 0)],
        walled: &[(-1, -1), (0, -1), (1, -1), (1, 0), (1, 1), (0, 1), (-1, 1)],
    },
    next: (-1, 0),
};

const STAIR_WEST: StairEndCheck = StairEndCheck {
    check: TunnelCheck {
        corridor: &[(0, 0), (0, 1), (0, 2)],
        walled: &[(-1, 1), (-1, 0), (-1, -1), (0, -1), (1, -1), (1, 0), (1, 1)],
    },
    next: (0, 1),
};

const STAIR_EAST: StairEndCheck = StairEndCheck {
    check: TunnelCheck {
        corridor: &[(0, 0), (0, -1), (0, -2)],
        walled: &[(-1, -1), (-1, 0), (-1, 1), (0, 1), (1, 1), (1, 0), (1, -1)],
    },
    next: (0, -1),
};

impl Direction {
    /// All directions in table order
    pub const ALL: [Self; 4] = [Self::North, Self::South, Self::West, Self::East];

    /// Unit `(row, col)` step
    pub const fn delta(self) -> Offset {
        match self {
            Self::North => (-1, 0),
            Self::South => (1, 0),
            Self::West => (0, -1),
            Self::East => (0, 1),
        }
    }

    /// The direction facing back
    pub const fn opposite(self) -> Self {
        match self {
            Self::North => Self::South,
            Self::South => Self::North,
            Self::West => Self::East,
            Self::East => Self::West,
        }
    }

    /// Lowercase name, also the order walls are settled in
    pub const fn name(self) -> &'static str {
        match self {
            Self::North => "north",
            Self::South => "south",
            Self::West => "west",
            Self::East => "east",
        }
    }

    /// Dead-end template for a corridor that opens towards this direction
    pub const fn close_end(self) -> &'static CloseEnd {
        match self {
            Self::North => &CLOSE_NORTH,
            Self::South => &CLOSE_SOUTH,
            Self::West => &CLOSE_WEST,
            Self::East => &CLOSE_EAST,
        }
    }

    /// Stair template for a corridor end facing this direction
    pub const fn stair_end(self) -> &'static StairEndCheck {
        match self {
            Self::North => &STAIR_NORTH,
            Self::South => &STAIR_SOUTH,
            Self::West => &STAIR_WEST,
            Self::East => &STAIR_EAST,
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Apply a signed offset to an unsigned coordinate pair
///
/// Returns `None` when the result would be negative; the upper bound is left
/// to the grid lookup.
pub const fn offset_position(row: usize, col: usize, offset: Offset) -> Option<(usize, usize)> {
    match (row.checked_add_signed(offset.0), col.checked_add_signed(offset.1)) {
        (Some(r), Some(c)) => Some((r, c)),
        _ => None,
    }
}
