use bitvec::prelude::*;
use std::fmt;
use std::hash::{Hash, Hasher};

/// Number of distinct cell attribute tags
pub const ATTRIBUTE_COUNT: usize = 14;

type AttributeBits = BitArray<[u16; 1], Lsb0>;

/// Single tag from the closed cell attribute vocabulary
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(u8)]
pub enum CellAttribute {
    /// Outside the dungeon silhouette; scratch state cleared at the end of generation
    Blocked,
    /// Room interior
    Room,
    /// Carved corridor
    Corridor,
    /// Wall ring around a room
    Perimeter,
    /// Opened doorway span between a room and the outside
    Entrance,
    /// Archway door cell
    Arch,
    /// Unlocked door cell
    Door,
    /// Locked door cell
    Locked,
    /// Trapped door cell
    Trapped,
    /// Secret door cell
    Secret,
    /// Portcullis door cell
    Portc,
    /// Downward staircase
    StairDown,
    /// Upward staircase
    StairUp,
    /// Cell carries a label character
    Label,
}

impl CellAttribute {
    /// Every attribute in bit order
    pub const ALL: [Self; ATTRIBUTE_COUNT] = [
        Self::Blocked,
        Self::Room,
        Self::Corridor,
        Self::Perimeter,
        Self::Entrance,
        Self::Arch,
        Self::Door,
        Self::Locked,
        Self::Trapped,
        Self::Secret,
        Self::Portc,
        Self::StairDown,
        Self::StairUp,
        Self::Label,
    ];

    /// Bit position of this attribute
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Look up an attribute by its bit position
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }
}

/// Fixed-size set of cell attributes
///
/// Backed by a single-word bit array so membership tests in the placement and
/// carving loops never allocate. Equality is exact set equality, which is what
/// the "lone corridor cell" checks rely on.
#[derive(Clone, Copy)]
pub struct CellAttributes {
    bits: AttributeBits,
}

impl CellAttributes {
    /// The empty set
    pub fn empty() -> Self {
        Self::from_word(0)
    }

    /// Walkable space: rooms and corridors
    pub fn open_space() -> Self {
        Self::of(&[CellAttribute::Room, CellAttribute::Corridor])
    }

    /// Attributes that mark a cell as holding a door
    pub fn door_space() -> Self {
        Self::of(&[
            CellAttribute::Arch,
            CellAttribute::Door,
            CellAttribute::Locked,
            CellAttribute::Trapped,
            CellAttribute::Secret,
            CellAttribute::Portc,
        ])
    }

    /// Entrance bookkeeping cleared when a room is laid over an old doorway
    pub fn entrance_space() -> Self {
        let mut set = Self::door_space();
        set.insert(CellAttribute::Entrance);
        set.insert(CellAttribute::Label);
        set
    }

    /// Either staircase
    pub fn stairs() -> Self {
        Self::of(&[CellAttribute::StairDown, CellAttribute::StairUp])
    }

    /// Cells a corridor may not be carved through
    pub fn block_corridor() -> Self {
        Self::of(&[
            CellAttribute::Blocked,
            CellAttribute::Perimeter,
            CellAttribute::Corridor,
        ])
    }

    /// Cells that cannot take a new door
    pub fn block_door() -> Self {
        let mut set = Self::door_space();
        set.insert(CellAttribute::Blocked);
        set
    }

    /// Room interior or an opened entrance
    pub fn room_or_entrance() -> Self {
        Self::of(&[CellAttribute::Room, CellAttribute::Entrance])
    }

    fn from_word(word: u16) -> Self {
        Self {
            bits: BitArray::new([word]),
        }
    }

    fn word(self) -> u16 {
        let [word] = self.bits.into_inner();
        word
    }

    /// Build a set from a list of attributes
    pub fn of(attributes: &[CellAttribute]) -> Self {
        let mut set = Self::empty();
        for &attribute in attributes {
            set.insert(attribute);
        }
        set
    }

    /// Add an attribute
    pub fn insert(&mut self, attribute: CellAttribute) {
        self.bits.set(attribute.index(), true);
    }

    /// Remove an attribute
    pub fn remove(&mut self, attribute: CellAttribute) {
        self.bits.set(attribute.index(), false);
    }

    /// Remove every attribute present in `other`
    pub fn remove_all(&mut self, other: Self) {
        *self = Self::from_word(self.word() & !other.word());
    }

    /// Test membership
    pub fn contains(self, attribute: CellAttribute) -> bool {
        self.bits
            .get(attribute.index())
            .is_some_and(|bit| *bit)
    }

    /// Test whether the two sets share at least one attribute
    pub fn contains_any(self, other: Self) -> bool {
        self.word() & other.word() != 0
    }

    /// Test if no attributes are present
    pub fn is_empty(self) -> bool {
        self.bits.not_any()
    }

    /// Count attributes in the set
    pub fn len(self) -> usize {
        self.bits.count_ones()
    }

    /// Iterate the attributes in bit order
    pub fn iter(self) -> impl Iterator<Item = CellAttribute> {
        CellAttribute::ALL
            .into_iter()
            .filter(move |&attribute| self.contains(attribute))
    }
}

impl Default for CellAttributes {
    fn default() -> Self {
        Self::empty()
    }
}

impl PartialEq for CellAttributes {
    fn eq(&self, other: &Self) -> bool {
        self.word() == other.word()
    }
}

impl Eq for CellAttributes {}

impl Hash for CellAttributes {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.word().hash(state);
    }
}

impl From<CellAttribute> for CellAttributes {
    fn from(attribute: CellAttribute) -> Self {
        Self::of(&[attribute])
    }
}

impl fmt::Debug for CellAttributes {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}
