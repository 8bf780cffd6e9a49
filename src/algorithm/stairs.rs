//! Staircase placement at straight corridor ends

use log::debug;

use crate::algorithm::random::DungeonRng;
use crate::io::error::{GenerationError, Result};
use crate::layout::stair::{Stair, StairKey};
use crate::spatial::attributes::{CellAttribute, CellAttributes};
use crate::spatial::direction::{Direction, offset_position};
use crate::spatial::grid::CellGrid;

/// Stair candidate whose direction may not be decided yet
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct StairDraft {
    /// Grid row of the stair cell
    pub row: usize,
    /// Grid column of the stair cell
    pub col: usize,
    /// Corridor row the stair leads onto
    pub next_row: usize,
    /// Corridor column the stair leads onto
    pub next_col: usize,
    /// Direction, once assigned
    pub key: Option<StairKey>,
}

impl StairDraft {
    /// Freeze into a finished stair
    ///
    /// # Errors
    ///
    /// Returns [`GenerationError::UnassignedStairKey`] if the draft never
    /// received a key.
    pub const fn to_stair(&self) -> Result<Stair> {
        match self.key {
            Some(key) => Ok(Stair {
                row: self.row,
                col: self.col,
                next_row: self.next_row,
                next_col: self.next_col,
                key,
            }),
            None => Err(GenerationError::UnassignedStairKey {
                row: self.row,
                col: self.col,
            }),
        }
    }
}

/// Picks corridor dead ends for up and down staircases
#[derive(Clone, Debug, Default)]
pub struct StairPlacer {
    stairs: Vec<StairDraft>,
}

impl StairPlacer {
    /// Placer with no stairs yet
    pub fn new() -> Self {
        Self::default()
    }

    /// Stairs placed so far
    pub fn stairs(&self) -> &[StairDraft] {
        &self.stairs
    }

    /// Lattice nodes that end a straight, fully walled corridor run
    pub fn stair_ends(grid: &CellGrid) -> Vec<StairDraft> {
        let lone_corridor = CellAttributes::from(CellAttribute::Corridor);
        let mut ends = Vec::new();

        for (r, c) in grid.lattice_nodes() {
            if grid.attributes(r, c) != Some(lone_corridor) {
                continue;
            }

            let end = Direction::ALL
                .iter()
                .map(|direction| direction.stair_end())
                .find(|end| grid.check_tunnel(r, c, &end.check));
            if let Some((next_row, next_col)) = end.and_then(|end| offset_position(r, c, end.next)) {
                ends.push(StairDraft {
                    row: r,
                    col: c,
                    next_row,
                    next_col,
                    key: None,
                });
            }
        }
        ends
    }

    /// Place up to `count` staircases
    ///
    /// The first is always down and the second always up; the rest are a coin
    /// flip. Placement stops early when candidates run out.
    pub fn place_stairs(&mut self, grid: &mut CellGrid, rng: &mut DungeonRng, count: usize) {
        if count == 0 {
            return;
        }

        let mut candidates = Self::stair_ends(grid);
        debug!("{} stair candidates for {count} stairs", candidates.len());

        for placed in 0..count {
            if candidates.is_empty() {
                break;
            }
            let mut stair = candidates.remove(rng.below(candidates.len()));

            let key = match placed {
                0 => StairKey::Down,
                1 => StairKey::Up,
                _ if rng.below(2) == 0 => StairKey::Down,
                _ => StairKey::Up,
            };
            let attribute = match key {
                StairKey::Down => CellAttribute::StairDown,
                StairKey::Up => CellAttribute::StairUp,
            };

            if let Some(cell) = grid.get_mut(stair.row, stair.col) {
                cell.attributes.insert(attribute);
                cell.set_label(key.label());
            }
            stair.key = Some(key);
            self.stairs.push(stair);
        }
    }

    /// Finished stairs in placement order
    ///
    /// # Errors
    ///
    /// Returns [`GenerationError::UnassignedStairKey`] if any placed stair is
    /// missing its key.
    pub fn build_stairs(&self) -> Result<Vec<Stair>> {
        self.stairs.iter().map(StairDraft::to_stair).collect()
    }
}
