//! Per-tick summary returned by every invocation.

use al_core::{DoorId, Tick};
use al_door::{Action, Actuation};
use al_pairing::Pair;

/// What happened during one tick.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TickReport {
    pub tick:       Tick,
    /// Tag in effect for this tick.
    pub tag:        String,
    /// Doors known after the refresh.
    pub doors:      usize,
    pub pairs:      Vec<Pair>,
    pub unpaired:   Option<DoorId>,
    /// Commands issued during the interlock pass, in issue order.
    pub actuations: Vec<Actuation>,
    /// `true` if a tag switch discarded all door state before this tick.
    pub reset:      bool,
}

impl TickReport {
    pub fn opens(&self) -> usize {
        self.count(Action::Open)
    }

    pub fn closes(&self) -> usize {
        self.count(Action::Close)
    }

    fn count(&self, action: Action) -> usize {
        self.actuations.iter().filter(|a| a.action == action).count()
    }
}
