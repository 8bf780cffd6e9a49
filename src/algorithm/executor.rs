use log::{debug, info};

use crate::algorithm::corridors::{CorridorCarver, CorridorLayout};
use crate::algorithm::doors::DoorPlacer;
use crate::algorithm::random::DungeonRng;
use crate::algorithm::rooms::{RoomLayout, RoomPlacer};
use crate::algorithm::stairs::StairPlacer;
use crate::io::configuration::{
    DEFAULT_COLS, DEFAULT_DEAD_END_REMOVAL, DEFAULT_ROOM_MAX, DEFAULT_ROOM_MIN, DEFAULT_ROWS,
    DEFAULT_SEED, DEFAULT_STAIRS, DEFAULT_STRAIGHTNESS, MAX_GRID_DIMENSION, MIN_GRID_DIMENSION,
};
use crate::io::error::{Result, invalid_parameter};
use crate::layout::dungeon::Dungeon;
use crate::spatial::grid::CellGrid;
use crate::spatial::mask::{Silhouette, apply_silhouette};

/// Generation parameters for one dungeon
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DungeonConfig {
    /// Requested rows; rounded down to even
    pub rows: usize,
    /// Requested columns; rounded down to even
    pub cols: usize,
    /// Optional outline mask
    pub silhouette: Option<Silhouette>,
    /// Smallest room side in lattice nodes
    pub room_min: usize,
    /// Largest room side in lattice nodes
    pub room_max: usize,
    /// Room anchoring strategy
    pub room_layout: RoomLayout,
    /// Percent chance a corridor keeps its heading (0-100)
    pub straightness: u8,
    /// Percent of dead ends to retract (0-100)
    pub dead_end_removal: u8,
    /// Number of staircases
    pub stairs: usize,
    /// Random seed
    pub seed: u64,
}

impl Default for DungeonConfig {
    fn default() -> Self {
        Self {
            rows: DEFAULT_ROWS,
            cols: DEFAULT_COLS,
            silhouette: None,
            room_min: DEFAULT_ROOM_MIN,
            room_max: DEFAULT_ROOM_MAX,
            room_layout: RoomLayout::Packed,
            straightness: DEFAULT_STRAIGHTNESS,
            dead_end_removal: DEFAULT_DEAD_END_REMOVAL,
            stairs: DEFAULT_STAIRS,
            seed: DEFAULT_SEED,
        }
    }
}

impl DungeonConfig {
    /// Replace the straightness with a named preset
    #[must_use]
    pub const fn with_corridor_layout(mut self, layout: CorridorLayout) -> Self {
        self.straightness = layout.straightness();
        self
    }

    /// Check parameters before generation
    ///
    /// [`generate`] does not call this; callers collecting untrusted input
    /// should.
    ///
    /// # Errors
    ///
    /// Returns [`crate::io::error::GenerationError::InvalidParameter`] if a
    /// dimension is outside the supported range, the room sizes are empty or
    /// inverted, or a percentage exceeds 100.
    pub fn validate(&self) -> Result<()> {
        let dimension_range = MIN_GRID_DIMENSION..=MAX_GRID_DIMENSION;
        if !dimension_range.contains(&self.rows) {
            return Err(invalid_parameter(
                "rows",
                &self.rows,
                &format!("must be between {MIN_GRID_DIMENSION} and {MAX_GRID_DIMENSION}"),
            ));
        }
        if !dimension_range.contains(&self.cols) {
            return Err(invalid_parameter(
                "cols",
                &self.cols,
                &format!("must be between {MIN_GRID_DIMENSION} and {MAX_GRID_DIMENSION}"),
            ));
        }
        if self.room_min == 0 {
            return Err(invalid_parameter(
                "room_min",
                &self.room_min,
                &"must be at least 1",
            ));
        }
        if self.room_min > self.room_max {
            return Err(invalid_parameter(
                "room_max",
                &self.room_max,
                &format!("must not be smaller than room_min ({})", self.room_min),
            ));
        }
        if self.straightness > 100 {
            return Err(invalid_parameter(
                "straightness",
                &self.straightness,
                &"must be a percentage (0-100)",
            ));
        }
        if self.dead_end_removal > 100 {
            return Err(invalid_parameter(
                "dead_end_removal",
                &self.dead_end_removal,
                &"must be a percentage (0-100)",
            ));
        }
        Ok(())
    }
}

/// Owns every piece of mutable state for one generation run
///
/// Stages must run in order; [`DungeonBuilder::run`] does that. The stages
/// are public so benchmarks and tests can stop part way.
#[derive(Debug)]
pub struct DungeonBuilder {
    config: DungeonConfig,
    rng: DungeonRng,
    grid: CellGrid,
    rooms: RoomPlacer,
    doors: DoorPlacer,
    carver: CorridorCarver,
    stairs: StairPlacer,
}

impl DungeonBuilder {
    /// Allocate the grid and apply the silhouette
    pub fn new(config: DungeonConfig) -> Self {
        let mut grid = CellGrid::for_requested(config.rows, config.cols);
        apply_silhouette(&mut grid, config.silhouette);

        Self {
            rng: DungeonRng::new(config.seed),
            grid,
            rooms: RoomPlacer::new(config.room_min, config.room_max, config.room_layout),
            doors: DoorPlacer::new(),
            carver: CorridorCarver::new(config.straightness),
            stairs: StairPlacer::new(),
            config,
        }
    }

    /// Grid in its current state
    pub const fn grid(&self) -> &CellGrid {
        &self.grid
    }

    /// Room placer in its current state
    pub const fn rooms(&self) -> &RoomPlacer {
        &self.rooms
    }

    /// Place rooms
    pub fn place_rooms(&mut self) {
        self.rooms.place_rooms(&mut self.grid, &mut self.rng);
    }

    /// Cut doors into every room
    pub fn open_rooms(&mut self) {
        self.doors
            .open_rooms(&mut self.grid, &mut self.rng, self.rooms.rooms_mut());
    }

    /// Write room ids into the grid
    pub fn label_rooms(&mut self) {
        self.rooms.label_rooms(&mut self.grid);
    }

    /// Carve the maze
    pub fn carve_corridors(&mut self) {
        self.carver.corridors(&mut self.grid, &mut self.rng);
    }

    /// Put staircases on corridor ends
    pub fn place_stairs(&mut self) {
        self.stairs
            .place_stairs(&mut self.grid, &mut self.rng, self.config.stairs);
    }

    /// Retract dead ends, settle doors and drop blocked scratch cells
    pub fn clean(&mut self) {
        if self.config.dead_end_removal > 0 {
            CorridorCarver::collapse_tunnels(
                &mut self.grid,
                &mut self.rng,
                self.config.dead_end_removal,
            );
        }
        self.doors.fix_doors(&mut self.grid, self.rooms.rooms_mut());
        self.grid.reset_blocked();
    }

    /// Run every stage in order
    pub fn run(&mut self) {
        self.place_rooms();
        self.open_rooms();
        self.label_rooms();
        self.carve_corridors();
        self.place_stairs();
        self.clean();
        debug!("pipeline finished after {} draws", self.rng.draws());
    }

    /// Freeze the current state into a [`Dungeon`]
    ///
    /// # Errors
    ///
    /// Returns [`crate::io::error::GenerationError::UnassignedStairKey`] if a
    /// placed stair has no direction.
    pub fn build(self) -> Result<Dungeon> {
        let doors = self.doors.all_doors();
        let rooms = self
            .rooms
            .rooms()
            .iter()
            .map(|room| room.to_room(doors))
            .collect();
        let stairs = self.stairs.build_stairs()?;

        Ok(Dungeon::new(
            self.rng,
            self.grid,
            rooms,
            self.doors.doors(),
            stairs,
        ))
    }
}

/// Generate a complete dungeon
///
/// Parameters are used as given; see [`DungeonConfig::validate`].
///
/// # Errors
///
/// Returns [`crate::io::error::GenerationError::UnassignedStairKey`] if stair
/// placement leaves a stair without a direction.
pub fn generate(config: &DungeonConfig) -> Result<Dungeon> {
    let mut builder = DungeonBuilder::new(*config);
    builder.run();
    let dungeon = builder.build()?;

    info!(
        "seed {}: {}x{} grid, {} rooms, {} doors, {} stairs",
        dungeon.seed(),
        dungeon.n_rows(),
        dungeon.n_cols(),
        dungeon.rooms().len(),
        dungeon.doors().len(),
        dungeon.stairs().len()
    );
    Ok(dungeon)
}
