//! The finished, read-only dungeon handed to renderers

use crate::algorithm::random::DungeonRng;
use crate::layout::door::Door;
use crate::layout::room::Room;
use crate::layout::stair::Stair;
use crate::spatial::grid::{Cell, CellGrid};

/// Immutable result of one generation run
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Dungeon {
    seed: u64,
    rng: DungeonRng,
    cells: CellGrid,
    rooms: Vec<Room>,
    doors: Vec<Door>,
    stairs: Vec<Stair>,
}

impl Dungeon {
    pub(crate) fn new(
        rng: DungeonRng,
        cells: CellGrid,
        rooms: Vec<Room>,
        doors: Vec<Door>,
        stairs: Vec<Stair>,
    ) -> Self {
        Self {
            seed: rng.seed(),
            rng,
            cells,
            rooms,
            doors,
            stairs,
        }
    }

    /// Seed the dungeon was generated from
    pub const fn seed(&self) -> u64 {
        self.seed
    }

    /// Random stream as it stood when generation finished
    pub const fn rng(&self) -> &DungeonRng {
        &self.rng
    }

    /// Largest row index (always even)
    pub const fn n_rows(&self) -> usize {
        self.cells.n_rows()
    }

    /// Largest column index (always even)
    pub const fn n_cols(&self) -> usize {
        self.cells.n_cols()
    }

    /// Full cell grid
    pub const fn cells(&self) -> &CellGrid {
        &self.cells
    }

    /// Single cell lookup
    pub fn cell(&self, row: usize, col: usize) -> Option<&Cell> {
        self.cells.get(row, col)
    }

    /// Rooms in id order
    pub fn rooms(&self) -> &[Room] {
        &self.rooms
    }

    /// Look up a room by its 1-based id
    pub fn room(&self, id: usize) -> Option<&Room> {
        id.checked_sub(1).and_then(|index| self.rooms.get(index))
    }

    /// Every surviving door, each listed once
    pub fn doors(&self) -> &[Door] {
        &self.doors
    }

    /// Staircases in placement order
    pub fn stairs(&self) -> &[Stair] {
        &self.stairs
    }
}
