//! Position-derived door identity.
//!
//! Host door handles are not comparable across polls, so a door's identity
//! is its fixed grid cell.  The same physical door always yields the same
//! `DoorId`; two handles at the same cell are the same door.

use std::fmt;

use crate::GridPos;

/// Stable identifier for a physical door, keyed by its grid cell.
///
/// `Copy + Ord + Hash` so it can be used as a map key and sorted without
/// ceremony.  Renders as `x:y:z`.
#[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DoorId(pub GridPos);

impl DoorId {
    #[inline]
    pub const fn new(x: i32, y: i32, z: i32) -> Self {
        DoorId(GridPos::new(x, y, z))
    }

    #[inline]
    pub fn position(self) -> GridPos {
        self.0
    }

    /// Rectangular distance between the two doors' cells.
    #[inline]
    pub fn distance(self, other: DoorId) -> u32 {
        self.0.rectangular_distance(other.0)
    }
}

impl From<GridPos> for DoorId {
    #[inline]
    fn from(pos: GridPos) -> Self {
        DoorId(pos)
    }
}

impl fmt::Display for DoorId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}:{}", self.0.x, self.0.y, self.0.z)
    }
}
