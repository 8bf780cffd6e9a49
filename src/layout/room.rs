use std::collections::BTreeMap;

use crate::layout::door::Door;
use crate::spatial::direction::Direction;

/// A placed room in the finished dungeon
///
/// Bounds are inclusive grid coordinates of the interior. Height, width and
/// area are in feet (ten per grid cell).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Room {
    /// 1-based id in placement order
    pub id: usize,
    /// Top interior row
    pub north: usize,
    /// Bottom interior row
    pub south: usize,
    /// Left interior column
    pub west: usize,
    /// Right interior column
    pub east: usize,
    /// Height in feet
    pub height: usize,
    /// Width in feet
    pub width: usize,
    /// Area in square feet
    pub area: usize,
    /// Doors on each wall; walls without doors are absent
    pub doors: BTreeMap<Direction, Vec<Door>>,
}

impl Room {
    /// Anchor row (same as `north`)
    pub const fn row(&self) -> usize {
        self.north
    }

    /// Anchor column (same as `west`)
    pub const fn col(&self) -> usize {
        self.west
    }

    /// Test whether a grid cell lies inside the room
    pub const fn contains(&self, row: usize, col: usize) -> bool {
        row >= self.north && row <= self.south && col >= self.west && col <= self.east
    }

    /// Iterate every door with the wall it sits on
    pub fn all_doors(&self) -> impl Iterator<Item = (Direction, &Door)> {
        self.doors
            .iter()
            .flat_map(|(&direction, doors)| doors.iter().map(move |door| (direction, door)))
    }

    /// Total number of doors on all walls
    pub fn door_count(&self) -> usize {
        self.doors.values().map(Vec::len).sum()
    }
}
