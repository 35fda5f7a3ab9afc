//! Greedy nearest-neighbour pairing.
//!
//! ```text
//! pool = doors (in order)
//! while pool not empty:
//!   d = pool.pop_front()
//!   c = first element of pool with strictly minimal distance to d
//!   if c: emit Pair(d, c); remove c
//!   else: d is the odd one out this tick
//! ```
//!
//! O(n²) and order dependent: an earlier door claims its nearest neighbour
//! before later doors get a say, and equal distances go to whichever
//! candidate came first.

use std::collections::VecDeque;
use std::fmt;

use al_core::DoorId;

/// Two doors interlocked for one tick.
///
/// `outside` is the door that claimed its neighbour during matching; the
/// names carry no physical meaning beyond that.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Pair {
    pub outside: DoorId,
    pub inside:  DoorId,
}

impl fmt::Display for Pair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} <-> {}", self.outside, self.inside)
    }
}

/// Result of one matching pass.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Matching {
    pub pairs:    Vec<Pair>,
    /// The door left over when the input count is odd.
    pub unpaired: Option<DoorId>,
}

/// Pair every door with its nearest not-yet-paired neighbour.
pub fn match_pairs(doors: &[DoorId]) -> Matching {
    let mut pool: VecDeque<DoorId> = doors.iter().copied().collect();
    let mut matching = Matching {
        pairs:    Vec::with_capacity(doors.len() / 2),
        unpaired: None,
    };

    while let Some(door) = pool.pop_front() {
        let mut nearest: Option<(usize, u32)> = None;
        for (i, &candidate) in pool.iter().enumerate() {
            let dist = door.distance(candidate);
            if nearest.is_none_or(|(_, best)| dist < best) {
                nearest = Some((i, dist));
            }
        }

        match nearest.and_then(|(i, _)| pool.remove(i)) {
            Some(inside) => matching.pairs.push(Pair { outside: door, inside }),
            None => matching.unpaired = Some(door),
        }
    }

    matching
}
