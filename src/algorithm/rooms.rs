//! Room placement on the odd lattice, packed or scattered

use clap::ValueEnum;
use log::{debug, trace};
use std::collections::BTreeMap;
use std::fmt;

use crate::algorithm::random::DungeonRng;
use crate::io::configuration::{FEET_PER_CELL, MAX_ROOMS};
use crate::layout::door::Door;
use crate::layout::room::Room;
use crate::spatial::attributes::{CellAttribute, CellAttributes};
use crate::spatial::direction::Direction;
use crate::spatial::grid::{CellGrid, lattice_to_grid};

/// Strategy for choosing room anchors
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default, ValueEnum)]
pub enum RoomLayout {
    /// Try a room at every lattice node
    #[default]
    Packed,
    /// Try a fixed budget of fully random rooms
    Scattered,
}

impl fmt::Display for RoomLayout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Packed => "packed",
            Self::Scattered => "scattered",
        })
    }
}

/// Partially specified room; missing fields are drawn at random
///
/// All values are in lattice units.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RoomPrototype {
    /// Anchor lattice row
    pub i: Option<usize>,
    /// Anchor lattice column
    pub j: Option<usize>,
    /// Height in lattice nodes
    pub height: Option<usize>,
    /// Width in lattice nodes
    pub width: Option<usize>,
}

impl RoomPrototype {
    /// Prototype anchored at a lattice node with random size
    pub const fn anchored(i: usize, j: usize) -> Self {
        Self {
            i: Some(i),
            j: Some(j),
            height: None,
            width: None,
        }
    }
}

/// Mutable room record used during generation
///
/// Doors are stored as indices into the door placer's door list so a door
/// shared by two rooms is one record referenced from both.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RoomDraft {
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
    /// Door indices per wall
    pub doors: BTreeMap<Direction, Vec<usize>>,
}

impl RoomDraft {
    /// Interior height in lattice nodes
    pub const fn lattice_height(&self) -> usize {
        (self.south - self.north) / 2 + 1
    }

    /// Interior width in lattice nodes
    pub const fn lattice_width(&self) -> usize {
        (self.east - self.west) / 2 + 1
    }

    /// Freeze into the public room record, resolving door indices
    pub fn to_room(&self, doors: &[Door]) -> Room {
        let height = (self.south - self.north + 1) * FEET_PER_CELL;
        let width = (self.east - self.west + 1) * FEET_PER_CELL;

        let doors = self
            .doors
            .iter()
            .map(|(&direction, indices)| {
                let resolved = indices
                    .iter()
                    .filter_map(|&index| doors.get(index).copied())
                    .collect();
                (direction, resolved)
            })
            .collect();

        Room {
            id: self.id,
            north: self.north,
            south: self.south,
            west: self.west,
            east: self.east,
            height,
            width,
            area: height * width,
            doors,
        }
    }
}

/// Places non-overlapping rectangular rooms and owns the room list
#[derive(Clone, Debug)]
pub struct RoomPlacer {
    room_max: usize,
    layout: RoomLayout,
    room_base: f64,
    room_radix: f64,
    rooms: Vec<RoomDraft>,
}

impl RoomPlacer {
    /// Create a placer for rooms between `room_min` and `room_max` lattice nodes
    pub fn new(room_min: usize, room_max: usize, layout: RoomLayout) -> Self {
        Self {
            room_max,
            layout,
            room_base: room_min as f64 + 0.5,
            room_radix: (room_max as f64 - room_min as f64) / 2.0 + 1.0,
            rooms: Vec::new(),
        }
    }

    /// Rooms placed so far
    pub fn rooms(&self) -> &[RoomDraft] {
        &self.rooms
    }

    /// Mutable access for door bookkeeping
    pub fn rooms_mut(&mut self) -> &mut [RoomDraft] {
        &mut self.rooms
    }

    /// Place rooms using the configured layout
    pub fn place_rooms(&mut self, grid: &mut CellGrid, rng: &mut DungeonRng) {
        match self.layout {
            RoomLayout::Packed => self.pack_rooms(grid, rng),
            RoomLayout::Scattered => self.scatter_rooms(grid, rng),
        }
        debug!("placed {} rooms ({} layout)", self.rooms.len(), self.layout);
    }

    /// Attempt a room at every lattice node not already inside a room
    ///
    /// Nodes on the first lattice row or column are skipped half the time,
    /// which keeps the border from filling up solid.
    fn pack_rooms(&mut self, grid: &mut CellGrid, rng: &mut DungeonRng) {
        for i in 0..grid.lattice_rows() {
            let r = lattice_to_grid(i);
            for j in 0..grid.lattice_cols() {
                let c = lattice_to_grid(j);

                if grid.has(r, c, CellAttribute::Room) {
                    continue;
                }
                if (i == 0 || j == 0) && rng.below(2) == 0 {
                    continue;
                }

                self.place_room(grid, rng, RoomPrototype::anchored(i, j));
            }
        }
    }

    fn scatter_rooms(&mut self, grid: &mut CellGrid, rng: &mut DungeonRng) {
        for _ in 0..self.alloc_rooms(grid) {
            self.place_room(grid, rng, RoomPrototype::default());
        }
    }

    /// Number of scattered placement attempts for this grid
    pub fn alloc_rooms(&self, grid: &CellGrid) -> usize {
        let dungeon_area = grid.n_rows() * grid.n_cols();
        let room_area = self.room_max * self.room_max;
        dungeon_area.checked_div(room_area).unwrap_or(0)
    }

    /// Draw a side length, capped by the space left after an anchor
    fn random_extent(&self, rng: &mut DungeonRng, anchor: Option<usize>, lattice: usize) -> f64 {
        let span = anchor.map_or(self.room_radix, |anchor| {
            (lattice as f64 - self.room_base - anchor as f64)
                .max(0.0)
                .min(self.room_radix)
        });
        rng.unit().mul_add(span, self.room_base).floor()
    }

    /// Resolve a prototype into `(i, j, height, width)` in lattice units
    ///
    /// Values may come out negative or oversized; placement rejects those.
    fn select_room(
        &self,
        grid: &CellGrid,
        rng: &mut DungeonRng,
        proto: RoomPrototype,
    ) -> (i64, i64, i64, i64) {
        let n_i = grid.lattice_rows();
        let n_j = grid.lattice_cols();

        let height = proto
            .height
            .map_or_else(|| self.random_extent(rng, proto.i, n_i), |h| h as f64);
        let width = proto
            .width
            .map_or_else(|| self.random_extent(rng, proto.j, n_j), |w| w as f64);
        let i = proto
            .i
            .map_or_else(|| (rng.unit() * (n_i as f64 - height)).floor(), |i| i as f64);
        let j = proto
            .j
            .map_or_else(|| (rng.unit() * (n_j as f64 - width)).floor(), |j| j as f64);

        (i as i64, j as i64, height as i64, width as i64)
    }

    /// Try to place one room; returns the new room id on success
    ///
    /// A rejected attempt leaves the grid untouched.
    pub fn place_room(
        &mut self,
        grid: &mut CellGrid,
        rng: &mut DungeonRng,
        proto: RoomPrototype,
    ) -> Option<usize> {
        if self.rooms.len() >= MAX_ROOMS {
            return None;
        }

        let (i, j, height, width) = self.select_room(grid, rng, proto);
        if i < 0 || j < 0 || height < 1 || width < 1 {
            trace!("room prototype ({i}, {j}) {height}x{width} off the lattice");
            return None;
        }

        let max_row = grid.lattice_rows() as i64 * 2 - 1;
        let max_col = grid.lattice_cols() as i64 * 2 - 1;
        let r2 = (i + height) * 2 - 1;
        let c2 = (j + width) * 2 - 1;
        if r2 > max_row || c2 > max_col {
            trace!("room at ({i}, {j}) {height}x{width} runs off the grid");
            return None;
        }

        let (r1, c1) = (lattice_to_grid(i as usize), lattice_to_grid(j as usize));
        let (r2, c2) = (r2 as usize, c2 as usize);
        if !Self::sound_room(grid, r1, c1, r2, c2) {
            trace!("room at ({r1}, {c1})-({r2}, {c2}) collides");
            return None;
        }

        let id = self.rooms.len() + 1;
        Self::carve_room(grid, id, r1, c1, r2, c2);
        self.rooms.push(RoomDraft {
            id,
            north: r1,
            south: r2,
            west: c1,
            east: c2,
            doors: BTreeMap::new(),
        });
        Some(id)
    }

    /// Check that a rectangle avoids blocked cells and every existing room
    fn sound_room(grid: &CellGrid, r1: usize, c1: usize, r2: usize, c2: usize) -> bool {
        for r in r1..=r2 {
            for c in c1..=c2 {
                let Some(cell) = grid.get(r, c) else {
                    return false;
                };
                if cell.attributes.contains(CellAttribute::Blocked) {
                    return false;
                }
                if cell.attributes.contains(CellAttribute::Room) && cell.room_id != 0 {
                    return false;
                }
            }
        }
        true
    }

    /// Tag the interior and ring it with perimeter
    fn carve_room(grid: &mut CellGrid, id: usize, r1: usize, c1: usize, r2: usize, c2: usize) {
        for r in r1..=r2 {
            for c in c1..=c2 {
                if let Some(cell) = grid.get_mut(r, c) {
                    cell.attributes.insert(CellAttribute::Room);
                    cell.room_id = id;
                    if cell.attributes.contains(CellAttribute::Entrance) {
                        cell.attributes.remove_all(CellAttributes::entrance_space());
                    }
                    cell.attributes.remove(CellAttribute::Perimeter);
                }
            }
        }

        let keep = CellAttributes::room_or_entrance();
        let mut ring = |r: usize, c: usize| {
            if let Some(cell) = grid.get_mut(r, c) {
                if !cell.attributes.contains_any(keep) {
                    cell.attributes.insert(CellAttribute::Perimeter);
                }
            }
        };

        for r in r1 - 1..=r2 + 1 {
            ring(r, c1 - 1);
            ring(r, c2 + 1);
        }
        for c in c1 - 1..=c2 + 1 {
            ring(r1 - 1, c);
            ring(r2 + 1, c);
        }
    }

    /// Write each room's id across the middle of its interior
    pub fn label_rooms(&self, grid: &mut CellGrid) {
        for room in &self.rooms {
            let label = room.id.to_string();
            let label_r = (room.north + room.south) / 2;
            let label_c = (room.west + room.east + 2).saturating_sub(label.len()) / 2;

            for (offset, ch) in label.chars().enumerate() {
                if let Some(cell) = grid.get_mut(label_r, label_c + offset) {
                    cell.set_label(ch);
                }
            }
        }
    }
}
