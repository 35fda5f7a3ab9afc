//! Block-grid coordinates and the distance metric used for pairing.
//!
//! Positions are exact integers (block cells on the host's grid), so they
//! can double as map keys without any floating-point drift between ticks.

use std::fmt;

/// A fixed cell position on the host grid.
#[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GridPos {
    pub x: i32,
    pub y: i32,
    pub z: i32,
}

impl GridPos {
    pub const ORIGIN: GridPos = GridPos { x: 0, y: 0, z: 0 };

    #[inline]
    pub const fn new(x: i32, y: i32, z: i32) -> Self {
        Self { x, y, z }
    }

    /// Rectangular (Manhattan) distance: `|dx| + |dy| + |dz|`.
    ///
    /// Computed in `u32` and saturating, so positions at opposite ends of the
    /// `i32` range never overflow.
    #[inline]
    pub fn rectangular_distance(self, other: GridPos) -> u32 {
        self.x
            .abs_diff(other.x)
            .saturating_add(self.y.abs_diff(other.y))
            .saturating_add(self.z.abs_diff(other.z))
    }
}

impl From<(i32, i32, i32)> for GridPos {
    fn from((x, y, z): (i32, i32, i32)) -> Self {
        Self { x, y, z }
    }
}

impl fmt::Display for GridPos {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {})", self.x, self.y, self.z)
    }
}
