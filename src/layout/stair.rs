use std::fmt;

/// Which way a staircase leads
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum StairKey {
    /// Leads to the level above
    Up,
    /// Leads to the level below
    Down,
}

impl StairKey {
    /// Label character written onto the stair cell
    pub const fn label(self) -> char {
        match self {
            Self::Up => 'u',
            Self::Down => 'd',
        }
    }
}

impl fmt::Display for StairKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Up => "up",
            Self::Down => "down",
        })
    }
}

/// A staircase at a corridor end
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Stair {
    /// Grid row of the stair cell
    pub row: usize,
    /// Grid column of the stair cell
    pub col: usize,
    /// Row of the corridor cell the stair opens onto
    pub next_row: usize,
    /// Column of the corridor cell the stair opens onto
    pub next_col: usize,
    /// Direction of travel
    pub key: StairKey,
}
