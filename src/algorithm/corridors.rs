//! Maze carving between rooms and dead-end retraction

use clap::ValueEnum;
use log::{debug, trace};
use std::fmt;

use crate::algorithm::random::DungeonRng;
use crate::spatial::attributes::{CellAttribute, CellAttributes};
use crate::spatial::direction::{Direction, offset_position};
use crate::spatial::grid::{CellGrid, lattice_to_grid};

/// Named straightness presets
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default, ValueEnum)]
pub enum CorridorLayout {
    /// Never prefer the previous heading
    Labyrinth,
    /// Keep heading half the time
    #[default]
    Bent,
    /// Always try the previous heading first
    Straight,
}

impl CorridorLayout {
    /// Percent chance of continuing straight
    pub const fn straightness(self) -> u8 {
        match self {
            Self::Labyrinth => 0,
            Self::Bent => 50,
            Self::Straight => 100,
        }
    }
}

impl fmt::Display for CorridorLayout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Labyrinth => "labyrinth",
            Self::Bent => "bent",
            Self::Straight => "straight",
        })
    }
}

/// One suspended node of the carving walk
#[derive(Debug)]
struct TunnelFrame {
    i: usize,
    j: usize,
    directions: [Direction; 4],
    next: usize,
}

/// Randomized backtracking carver over the odd lattice
#[derive(Clone, Copy, Debug)]
pub struct CorridorCarver {
    straightness: u8,
}

impl CorridorCarver {
    /// Carver that repeats its previous heading with `straightness` percent chance
    pub const fn new(straightness: u8) -> Self {
        Self { straightness }
    }

    /// Carve from every interior lattice node not yet reached
    pub fn corridors(&self, grid: &mut CellGrid, rng: &mut DungeonRng) {
        for i in 1..grid.lattice_rows() {
            for j in 1..grid.lattice_cols() {
                if !grid.has(lattice_to_grid(i), lattice_to_grid(j), CellAttribute::Corridor) {
                    self.tunnel(grid, rng, i, j);
                }
            }
        }
        debug!(
            "carved corridors, {} open cells",
            grid.count_with_any(CellAttributes::open_space())
        );
    }

    /// Depth-first walk from lattice node `(i, j)`
    ///
    /// Each node draws its direction order on entry; the walk resumes a
    /// parent's remaining directions after a child is exhausted.
    fn tunnel(&self, grid: &mut CellGrid, rng: &mut DungeonRng, i: usize, j: usize) {
        let mut stack = vec![TunnelFrame {
            i,
            j,
            directions: self.tunnel_dirs(rng, None),
            next: 0,
        }];

        while let Some(frame) = stack.last_mut() {
            let Some(&direction) = frame.directions.get(frame.next) else {
                stack.pop();
                continue;
            };
            frame.next += 1;

            if let Some((next_i, next_j)) = Self::open_tunnel(grid, frame.i, frame.j, direction) {
                stack.push(TunnelFrame {
                    i: next_i,
                    j: next_j,
                    directions: self.tunnel_dirs(rng, Some(direction)),
                    next: 0,
                });
            }
        }
    }

    /// Shuffled direction order, optionally leading with the previous heading
    pub fn tunnel_dirs(&self, rng: &mut DungeonRng, last: Option<Direction>) -> [Direction; 4] {
        let mut directions = Direction::ALL;
        rng.shuffle(&mut directions);

        if let Some(last) = last {
            if rng.percent(self.straightness) {
                let position = directions.iter().position(|&d| d == last);
                if let Some(head) = position.and_then(|p| directions.get_mut(..=p)) {
                    head.rotate_right(1);
                }
            }
        }
        directions
    }

    /// Carve one step from lattice node `(i, j)`; returns the node reached
    fn open_tunnel(
        grid: &mut CellGrid,
        i: usize,
        j: usize,
        direction: Direction,
    ) -> Option<(usize, usize)> {
        let (next_i, next_j) = offset_position(i, j, direction.delta())?;
        let (this_r, this_c) = (lattice_to_grid(i), lattice_to_grid(j));
        let (next_r, next_c) = (lattice_to_grid(next_i), lattice_to_grid(next_j));
        if next_r > grid.n_rows() || next_c > grid.n_cols() {
            return None;
        }

        let (mid_r, mid_c) = ((this_r + next_r) / 2, (this_c + next_c) / 2);
        if !Self::clear_span(grid, mid_r, mid_c, next_r, next_c) {
            return None;
        }

        Self::delve_tunnel(grid, this_r, this_c, next_r, next_c);
        Some((next_i, next_j))
    }

    fn clear_span(grid: &CellGrid, r1: usize, c1: usize, r2: usize, c2: usize) -> bool {
        let block = CellAttributes::block_corridor();
        for r in r1.min(r2)..=r1.max(r2) {
            for c in c1.min(c2)..=c1.max(c2) {
                match grid.attributes(r, c) {
                    Some(attributes) if !attributes.contains_any(block) => {}
                    _ => return false,
                }
            }
        }
        true
    }

    fn delve_tunnel(grid: &mut CellGrid, r1: usize, c1: usize, r2: usize, c2: usize) {
        for r in r1.min(r2)..=r1.max(r2) {
            for c in c1.min(c2)..=c1.max(c2) {
                if let Some(cell) = grid.get_mut(r, c) {
                    cell.attributes.remove(CellAttribute::Entrance);
                    cell.attributes.insert(CellAttribute::Corridor);
                }
            }
        }
    }

    /// Retract dead ends from `percent` of open lattice nodes
    ///
    /// Zero leaves the grid alone; 100 or more retracts from every node
    /// without drawing. Staircase cells are never a starting point. Returns
    /// the number of cells cleared.
    pub fn collapse_tunnels(grid: &mut CellGrid, rng: &mut DungeonRng, percent: u8) -> usize {
        if percent == 0 {
            return 0;
        }
        let remove_all = percent >= 100;
        let open_space = CellAttributes::open_space();
        let stairs = CellAttributes::stairs();

        let mut removed = 0;
        for (r, c) in grid.lattice_nodes() {
            let Some(attributes) = grid.attributes(r, c) else {
                continue;
            };
            if !attributes.contains_any(open_space) || attributes.contains_any(stairs) {
                continue;
            }
            if remove_all || rng.unit() * 100.0 < f64::from(percent) {
                removed += Self::collapse(grid, r, c);
            }
        }

        debug!("retracted {removed} dead-end cells");
        removed
    }

    /// Shorten the dead end at `(row, col)` one cell at a time
    ///
    /// Stops at the first cell that no longer matches a close-end template,
    /// such as a junction, a room or an empty cell.
    pub fn collapse(grid: &mut CellGrid, row: usize, col: usize) -> usize {
        let mut cursor = Some((row, col));
        let mut removed = 0;

        while let Some((r, c)) = cursor.take() {
            if !grid.get(r, c).is_some_and(|cell| cell.is_open()) {
                break;
            }

            let Some(end) = Direction::ALL
                .iter()
                .map(|direction| direction.close_end())
                .find(|end| grid.check_tunnel(r, c, &end.check))
            else {
                break;
            };

            for &offset in end.close {
                if let Some((cr, cc)) = offset_position(r, c, offset) {
                    grid.reset(cr, cc);
                    removed += 1;
                }
            }
            trace!("closed dead end at ({r}, {c})");
            cursor = offset_position(r, c, end.recurse);
        }
        removed
    }
}
