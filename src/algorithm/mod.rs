/// Corridor carving and dead-end retraction
pub mod corridors;
/// Door sills, door opening and door cleanup
pub mod doors;
/// Generation pipeline and configuration
pub mod executor;
/// Seeded random stream shared by all builders
pub mod random;
/// Room placement and labelling
pub mod rooms;
/// Staircase placement
pub mod stairs;

pub use corridors::{CorridorCarver, CorridorLayout};
pub use executor::{DungeonBuilder, DungeonConfig, generate};
pub use random::DungeonRng;
pub use rooms::RoomLayout;
