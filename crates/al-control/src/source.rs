//! The discovery collaborator.

use al_door::DoorHandle;

/// Supplies, once per tick, the doors currently carrying `tag`.
///
/// Selection (name matching, grid membership, …) is entirely the host's
/// business.  The returned order matters: it is the order the matcher walks,
/// so hosts should enumerate doors in a stable order to get stable pairs.
pub trait DoorSource {
    type Handle: DoorHandle;

    fn discover(&mut self, tag: &str) -> Vec<Self::Handle>;
}

/// Any `FnMut(&str) -> Vec<H>` is a source.
impl<H, F> DoorSource for F
where
    H: DoorHandle,
    F: FnMut(&str) -> Vec<H>,
{
    type Handle = H;

    fn discover(&mut self, tag: &str) -> Vec<H> {
        self(tag)
    }
}
