//! Door sills, door opening and the post-carving door cleanup

use bitvec::prelude::*;
use log::{debug, trace};
use std::collections::HashSet;

use crate::algorithm::random::DungeonRng;
use crate::algorithm::rooms::RoomDraft;
use crate::io::configuration::{
    DOOR_ARCH_BELOW, DOOR_DRAW_UNITS, DOOR_LOCK_BELOW, DOOR_OPEN_BELOW, DOOR_SECRET_BELOW,
    DOOR_TRAP_BELOW,
};
use crate::layout::door::{Door, DoorType};
use crate::spatial::attributes::{CellAttribute, CellAttributes};
use crate::spatial::direction::{Direction, offset_position};
use crate::spatial::grid::{Cell, CellGrid};

/// Candidate doorway on a room wall
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Sill {
    /// Interior row the doorway starts from
    pub sill_row: usize,
    /// Interior column the doorway starts from
    pub sill_col: usize,
    /// Wall the sill faces
    pub direction: Direction,
    /// Perimeter row the door would occupy
    pub door_row: usize,
    /// Perimeter column the door would occupy
    pub door_col: usize,
    /// Room on the far side, if any
    pub out_id: Option<usize>,
}

/// Opens doors in room walls and owns every door record
///
/// Rooms refer to doors by index into [`DoorPlacer::all_doors`], so a door
/// mirrored onto a neighbouring room stays one record.
#[derive(Clone, Debug, Default)]
pub struct DoorPlacer {
    opened: Vec<Door>,
    fixed: Vec<usize>,
}

impl DoorPlacer {
    /// Empty placer
    pub fn new() -> Self {
        Self::default()
    }

    /// Every door opened so far, including ones later dropped
    pub fn all_doors(&self) -> &[Door] {
        &self.opened
    }

    /// Surviving doors in the order [`Self::fix_doors`] listed them
    pub fn doors(&self) -> Vec<Door> {
        self.fixed
            .iter()
            .filter_map(|&index| self.opened.get(index).copied())
            .collect()
    }

    /// Weighted door type draw over 110 units
    pub fn door_type(rng: &mut DungeonRng) -> DoorType {
        match rng.below(DOOR_DRAW_UNITS) {
            i if i < DOOR_ARCH_BELOW => DoorType::Arch,
            i if i < DOOR_OPEN_BELOW => DoorType::Open,
            i if i < DOOR_LOCK_BELOW => DoorType::Lock,
            i if i < DOOR_TRAP_BELOW => DoorType::Trap,
            i if i < DOOR_SECRET_BELOW => DoorType::Secret,
            _ => DoorType::Portc,
        }
    }

    /// Candidate doorways of a room, shuffled
    ///
    /// Walls within two cells of the grid edge are skipped; sills step two
    /// cells along each remaining wall so they stay on the lattice.
    pub fn door_sills(grid: &CellGrid, rng: &mut DungeonRng, room: &RoomDraft) -> Vec<Sill> {
        let mut sills = Vec::new();

        if room.north >= 3 {
            for c in (room.west..=room.east).step_by(2) {
                sills.extend(Self::check_sill(grid, room, room.north, c, Direction::North));
            }
        }
        if room.south + 3 <= grid.n_rows() {
            for c in (room.west..=room.east).step_by(2) {
                sills.extend(Self::check_sill(grid, room, room.south, c, Direction::South));
            }
        }
        if room.west >= 3 {
            for r in (room.north..=room.south).step_by(2) {
                sills.extend(Self::check_sill(grid, room, r, room.west, Direction::West));
            }
        }
        if room.east + 3 <= grid.n_cols() {
            for r in (room.north..=room.south).step_by(2) {
                sills.extend(Self::check_sill(grid, room, r, room.east, Direction::East));
            }
        }

        rng.shuffle(&mut sills);
        sills
    }

    fn check_sill(
        grid: &CellGrid,
        room: &RoomDraft,
        sill_row: usize,
        sill_col: usize,
        direction: Direction,
    ) -> Option<Sill> {
        let delta = direction.delta();
        let (door_row, door_col) = offset_position(sill_row, sill_col, delta)?;
        let door_cell = grid.attributes(door_row, door_col)?;
        if !door_cell.contains(CellAttribute::Perimeter)
            || door_cell.contains_any(CellAttributes::block_door())
        {
            return None;
        }

        let (out_row, out_col) = offset_position(door_row, door_col, delta)?;
        let out_cell = grid.get(out_row, out_col)?;
        if out_cell.attributes.contains(CellAttribute::Blocked) {
            return None;
        }

        let out_id = (out_cell.attributes.contains(CellAttribute::Room) && out_cell.room_id != room.id)
            .then_some(out_cell.room_id);

        Some(Sill {
            sill_row,
            sill_col,
            direction,
            door_row,
            door_col,
            out_id,
        })
    }

    /// Number of doors a room tries to open: `floor(L + rand * L)` with `L = sqrt(w * h)`
    pub fn alloc_opens(rng: &mut DungeonRng, room: &RoomDraft) -> usize {
        let linear = ((room.lattice_width() * room.lattice_height()) as f64).sqrt();
        rng.unit().mul_add(linear, linear).floor() as usize
    }

    /// Open doors in every room
    ///
    /// Two rooms are joined directly at most once per pass; the pair record
    /// lives only for the duration of this call.
    pub fn open_rooms(&mut self, grid: &mut CellGrid, rng: &mut DungeonRng, rooms: &mut [RoomDraft]) {
        let mut connects: HashSet<(usize, usize)> = HashSet::new();
        for room in rooms.iter_mut() {
            self.open_room(grid, rng, room, &mut connects);
        }
        debug!("opened {} doors across {} rooms", self.opened.len(), rooms.len());
    }

    fn open_room(
        &mut self,
        grid: &mut CellGrid,
        rng: &mut DungeonRng,
        room: &mut RoomDraft,
        connects: &mut HashSet<(usize, usize)>,
    ) {
        let mut sills = Self::door_sills(grid, rng, room);
        if sills.is_empty() {
            return;
        }

        let mut remaining = Self::alloc_opens(rng, room);
        while remaining > 0 {
            let Some(sill) = sills.pop() else {
                break;
            };

            let taken = grid
                .attributes(sill.door_row, sill.door_col)
                .is_some_and(|attributes| attributes.contains_any(CellAttributes::door_space()));
            if taken {
                remaining -= 1;
                continue;
            }

            if let Some(out_id) = sill.out_id {
                let pair = (room.id.min(out_id), room.id.max(out_id));
                if !connects.insert(pair) {
                    trace!("rooms {} and {} already joined", pair.0, pair.1);
                    continue;
                }
            }

            let (dr, dc) = sill.direction.delta();
            for step in 0..3_isize {
                if let Some((r, c)) = offset_position(sill.sill_row, sill.sill_col, (dr * step, dc * step)) {
                    if let Some(cell) = grid.get_mut(r, c) {
                        cell.attributes.remove(CellAttribute::Perimeter);
                        cell.attributes.insert(CellAttribute::Entrance);
                    }
                }
            }

            let door_type = Self::door_type(rng);
            let index = self.opened.len();
            self.opened.push(Door {
                row: sill.door_row,
                col: sill.door_col,
                out_id: sill.out_id,
                door_type,
            });
            room.doors.entry(sill.direction).or_default().push(index);
            remaining -= 1;
        }
    }

    /// Drop doors that ended up detached and build the global door list
    ///
    /// A door survives only if its cell is open space after carving; its cell
    /// then takes the door type's attribute. Door cells stay plain corridor
    /// until here so dead-end retraction can clear them. Each surviving
    /// room-to-room door is also attached to the far room under the opposite
    /// wall, and every surviving door is listed exactly once. Walls are
    /// visited in name order (east, north, south, west).
    pub fn fix_doors(&mut self, grid: &mut CellGrid, rooms: &mut [RoomDraft]) {
        let stride = grid.n_cols() + 1;
        let mut fixed = bitvec![0; (grid.n_rows() + 1) * stride];

        for index in 0..rooms.len() {
            let mut directions: Vec<Direction> = rooms
                .get(index)
                .map(|room| room.doors.keys().copied().collect())
                .unwrap_or_default();
            directions.sort_by_key(|direction| direction.name());

            for direction in directions {
                let candidates = rooms
                    .get_mut(index)
                    .and_then(|room| room.doors.remove(&direction))
                    .unwrap_or_default();

                let mut shiny = Vec::with_capacity(candidates.len());
                for door_index in candidates {
                    let Some(door) = self.opened.get(door_index).copied() else {
                        continue;
                    };
                    if !grid.get(door.row, door.col).is_some_and(Cell::is_open) {
                        continue;
                    }

                    let bit = door.row * stride + door.col;
                    if fixed.get(bit).is_some_and(|set| *set) {
                        shiny.push(door_index);
                        continue;
                    }

                    if let Some(far) = door
                        .out_id
                        .and_then(|out_id| out_id.checked_sub(1))
                        .and_then(|far| rooms.get_mut(far))
                    {
                        far.doors
                            .entry(direction.opposite())
                            .or_default()
                            .push(door_index);
                    }
                    grid.insert(door.row, door.col, door.door_type.cell_attribute());
                    shiny.push(door_index);
                    self.fixed.push(door_index);
                    fixed.set(bit, true);
                }

                if !shiny.is_empty() {
                    if let Some(room) = rooms.get_mut(index) {
                        room.doors.insert(direction, shiny);
                    }
                }
            }
        }

        debug!(
            "kept {} of {} opened doors",
            self.fixed.len(),
            self.opened.len()
        );
    }
}
