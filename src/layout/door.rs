use std::fmt;

use crate::spatial::attributes::CellAttribute;

/// Kind of doorway cut into a room wall
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum DoorType {
    /// Open archway
    Arch,
    /// Unlocked door
    Open,
    /// Locked door
    Lock,
    /// Trapped door
    Trap,
    /// Secret door
    Secret,
    /// Portcullis
    Portc,
}

/// Rendering and semantic flags attached to each door type
///
/// These are data, not behaviour; renderers read them to decide what to draw.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[allow(clippy::struct_excessive_bools)]
pub struct DoorFlags {
    /// Drawn with a wall stub across the opening
    pub wall: bool,
    /// Drawn with an arch
    pub arch: bool,
    /// Has a swinging door leaf
    pub door: bool,
    /// Door is locked
    pub lock: bool,
    /// Door is trapped
    pub trap: bool,
    /// Door is hidden
    pub secret: bool,
    /// Opening is a portcullis
    pub portc: bool,
}

const NO_FLAGS: DoorFlags = DoorFlags {
    wall: false,
    arch: true,
    door: false,
    lock: false,
    trap: false,
    secret: false,
    portc: false,
};

impl DoorType {
    /// All door types in draw order
    pub const ALL: [Self; 6] = [
        Self::Arch,
        Self::Open,
        Self::Lock,
        Self::Trap,
        Self::Secret,
        Self::Portc,
    ];

    /// Flag set for this door type
    pub const fn flags(self) -> DoorFlags {
        match self {
            Self::Arch => NO_FLAGS,
            Self::Open => DoorFlags {
                door: true,
                ..NO_FLAGS
            },
            Self::Lock => DoorFlags {
                door: true,
                lock: true,
                ..NO_FLAGS
            },
            Self::Trap => DoorFlags {
                door: true,
                trap: true,
                ..NO_FLAGS
            },
            Self::Secret => DoorFlags {
                wall: true,
                secret: true,
                ..NO_FLAGS
            },
            Self::Portc => DoorFlags {
                portc: true,
                ..NO_FLAGS
            },
        }
    }

    /// Short machine key
    pub const fn key(self) -> &'static str {
        match self {
            Self::Arch => "arch",
            Self::Open => "open",
            Self::Lock => "lock",
            Self::Trap => "trap",
            Self::Secret => "secret",
            Self::Portc => "portc",
        }
    }

    /// Human-readable name
    pub const fn name(self) -> &'static str {
        match self {
            Self::Arch => "Archway",
            Self::Open => "Unlocked Door",
            Self::Lock => "Locked Door",
            Self::Trap => "Trapped Door",
            Self::Secret => "Secret Door",
            Self::Portc => "Portcullis",
        }
    }

    /// Cell attribute stamped onto the door cell
    pub const fn cell_attribute(self) -> CellAttribute {
        match self {
            Self::Arch => CellAttribute::Arch,
            Self::Open => CellAttribute::Door,
            Self::Lock => CellAttribute::Locked,
            Self::Trap => CellAttribute::Trapped,
            Self::Secret => CellAttribute::Secret,
            Self::Portc => CellAttribute::Portc,
        }
    }
}

impl fmt::Display for DoorType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A doorway in the finished dungeon
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Door {
    /// Grid row of the door cell
    pub row: usize,
    /// Grid column of the door cell
    pub col: usize,
    /// Room on the far side when the door joins two rooms
    pub out_id: Option<usize>,
    /// Door kind
    pub door_type: DoorType,
}
