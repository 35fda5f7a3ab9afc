//! `DoorRegistry<H>` — the set of known doors, keyed by position.

use tracing::{debug, trace};

use al_core::DoorId;
use al_door::{Door, DoorHandle, DoorSnapshot};

#[cfg(not(feature = "fx-hash"))]
type DoorMap<V> = std::collections::HashMap<DoorId, V>;
#[cfg(not(feature = "fx-hash"))]
type DoorSet = std::collections::HashSet<DoorId>;

#[cfg(feature = "fx-hash")]
type DoorMap<V> = rustc_hash::FxHashMap<DoorId, V>;
#[cfg(feature = "fx-hash")]
type DoorSet = rustc_hash::FxHashSet<DoorId>;

/// Identity-stable set of doors across ticks.
///
/// A door keeps its [`Door`] state machine for as long as the host keeps
/// reporting a handle at the same cell.  Doors missing from a refresh are
/// dropped along with their state.
pub struct DoorRegistry<H: DoorHandle> {
    doors:           DoorMap<Door<H>>,
    /// Ids from the last refresh, in discovery order.
    order:           Vec<DoorId>,
    cooldown_window: u32,
}

impl<H: DoorHandle> DoorRegistry<H> {
    /// An empty registry whose doors use `cooldown_window`-tick cooldowns.
    pub fn new(cooldown_window: u32) -> Self {
        Self {
            doors: DoorMap::default(),
            order: Vec::new(),
            cooldown_window,
        }
    }

    /// Reconcile with this tick's discovered handles.
    ///
    /// - Unseen cells get a new [`Door`] (which settles against its sensor).
    /// - Known cells keep their existing `Door` and its original handle; the
    ///   freshly discovered handle is dropped.
    /// - Known cells absent from `discovered` are evicted.
    /// - A cell reported twice in one refresh counts once, at its first
    ///   position.
    ///
    /// Returns all known ids in discovery order.
    pub fn refresh<I>(&mut self, discovered: I) -> &[DoorId]
    where
        I: IntoIterator<Item = H>,
    {
        let mut seen = DoorSet::default();
        let mut order = Vec::with_capacity(self.order.len());

        for handle in discovered {
            let id = DoorId(handle.position());
            if !seen.insert(id) {
                trace!(door = %id, "duplicate handle in discovery, ignored");
                continue;
            }
            if !self.doors.contains_key(&id) {
                debug!(door = %id, "door discovered");
                self.doors.insert(id, Door::new(handle, self.cooldown_window));
            }
            order.push(id);
        }

        self.doors.retain(|id, _| {
            let keep = seen.contains(id);
            if !keep {
                debug!(door = %id, "door no longer present, evicted");
            }
            keep
        });

        self.order = order;
        &self.order
    }

    // ── Lookup ────────────────────────────────────────────────────────────

    /// Known ids in the order of the last refresh.
    #[inline]
    pub fn ids(&self) -> &[DoorId] {
        &self.order
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.doors.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.doors.is_empty()
    }

    #[inline]
    pub fn contains(&self, id: DoorId) -> bool {
        self.doors.contains_key(&id)
    }

    #[inline]
    pub fn get(&self, id: DoorId) -> Option<&Door<H>> {
        self.doors.get(&id)
    }

    /// Disjoint mutable access to two different doors.
    ///
    /// Returns `None` if either id is unknown or both ids are the same.
    pub fn get_pair_mut(&mut self, a: DoorId, b: DoorId) -> Option<(&mut Door<H>, &mut Door<H>)> {
        if a == b {
            return None;
        }
        match self.doors.get_disjoint_mut([&a, &b]) {
            [Some(da), Some(db)] => Some((da, db)),
            _ => None,
        }
    }

    /// Doors in discovery order.
    pub fn iter(&self) -> impl Iterator<Item = &Door<H>> {
        self.order.iter().filter_map(|id| self.doors.get(id))
    }

    // ── Per-tick ──────────────────────────────────────────────────────────

    /// Run every door's state machine once, in discovery order.
    pub fn update_all(&mut self) {
        for id in &self.order {
            if let Some(door) = self.doors.get_mut(id) {
                door.update();
            }
        }
    }

    /// Copy out every door's state, in discovery order.
    pub fn snapshots(&self) -> Vec<DoorSnapshot> {
        self.iter().map(Door::snapshot).collect()
    }
}
