/// Door types, flags and door records
pub mod door;
/// Immutable dungeon result
pub mod dungeon;
/// Room records
pub mod room;
/// Staircase records
pub mod stair;

pub use door::{Door, DoorFlags, DoorType};
pub use dungeon::Dungeon;
pub use room::Room;
pub use stair::{Stair, StairKey};
