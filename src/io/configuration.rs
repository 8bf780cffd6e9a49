//! Generation constants and runtime configuration defaults

// Default values for configurable parameters
/// Requested grid rows
pub const DEFAULT_ROWS: usize = 49;
/// Requested grid columns
pub const DEFAULT_COLS: usize = 49;
/// Smallest room side, in lattice nodes
pub const DEFAULT_ROOM_MIN: usize = 5;
/// Largest room side, in lattice nodes
pub const DEFAULT_ROOM_MAX: usize = 12;
/// Chance (percent) that a corridor keeps going straight
pub const DEFAULT_STRAIGHTNESS: u8 = 50;
/// Percentage of dead ends retracted during cleanup
pub const DEFAULT_DEAD_END_REMOVAL: u8 = 50;
/// Number of staircases to place
pub const DEFAULT_STAIRS: usize = 2;
/// Fixed seed for reproducible generation
pub const DEFAULT_SEED: u64 = 42;

// Safety limits
/// Smallest accepted requested dimension
pub const MIN_GRID_DIMENSION: usize = 3;
/// Largest accepted requested dimension
pub const MAX_GRID_DIMENSION: usize = 10_000;
/// Room placement stops silently once this many rooms exist
pub const MAX_ROOMS: usize = 999;

// Door type draw: cumulative thresholds over DOOR_DRAW_UNITS
/// Total units in one door-type draw
pub const DOOR_DRAW_UNITS: usize = 110;
/// Draws below this are archways
pub const DOOR_ARCH_BELOW: usize = 15;
/// Draws below this are unlocked doors
pub const DOOR_OPEN_BELOW: usize = 60;
/// Draws below this are locked doors
pub const DOOR_LOCK_BELOW: usize = 75;
/// Draws below this are trapped doors
pub const DOOR_TRAP_BELOW: usize = 90;
/// Draws below this are secret doors; the rest are portcullises
pub const DOOR_SECRET_BELOW: usize = 100;

/// Feet represented by one grid cell
pub const FEET_PER_CELL: usize = 10;

// Progress bar display settings
/// Threshold for switching to batch progress mode
pub const MAX_INDIVIDUAL_PROGRESS_BARS: usize = 5;

// Output settings
/// Prefix of text dump filenames
pub const OUTPUT_PREFIX: &str = "dungeon_";
/// Extension of text dump filenames
pub const OUTPUT_EXTENSION: &str = "txt";
