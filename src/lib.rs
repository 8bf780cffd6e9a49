//! Seeded, reproducible dungeon generation
//!
//! Rooms are packed or scattered on an odd-coordinate lattice, doors are cut
//! through their walls, a backtracking maze fills the space between them,
//! staircases go on straight corridor ends and a share of dead ends is
//! retracted. The same configuration and seed always produce the same
//! [`Dungeon`].

#![forbid(unsafe_code)]

/// Generation pipeline: rooms, doors, corridors, stairs and the shared random stream
pub mod algorithm;
/// Input/output operations and error handling
pub mod io;
/// Immutable result types handed to renderers
pub mod layout;
/// Cell grid, attributes, direction templates and silhouettes
pub mod spatial;

pub use algorithm::executor::{DungeonConfig, generate};
pub use io::error::{GenerationError, Result};
pub use layout::dungeon::Dungeon;
