//! `Airlocks<H>` — all interlock state for one active tag.

use tracing::trace;

use al_core::Tick;
use al_door::DoorHandle;
use al_pairing::{DoorRegistry, match_pairs};

use crate::{TickReport, check_pair};

/// The door registry for one tag plus the per-tick pipeline over it.
///
/// Switching tags means building a new `Airlocks`; nothing carries over.
pub struct Airlocks<H: DoorHandle> {
    tag:      String,
    registry: DoorRegistry<H>,
}

impl<H: DoorHandle> Airlocks<H> {
    pub fn new(tag: impl Into<String>, cooldown_window: u32) -> Self {
        Self {
            tag:      tag.into(),
            registry: DoorRegistry::new(cooldown_window),
        }
    }

    #[inline]
    pub fn tag(&self) -> &str {
        &self.tag
    }

    #[inline]
    pub fn registry(&self) -> &DoorRegistry<H> {
        &self.registry
    }

    /// Run one tick against this tick's discovered handles: refresh, match,
    /// interlock every pair, then advance every door's state machine.
    pub fn run<I>(&mut self, tick: Tick, discovered: I) -> TickReport
    where
        I: IntoIterator<Item = H>,
    {
        // ── Refresh + match ───────────────────────────────────────────────
        //
        // Pairs are rebuilt from scratch every tick.
        let matching = match_pairs(self.registry.refresh(discovered));
        if let Some(odd) = matching.unpaired {
            trace!(door = %odd, "odd door out, no interlock this tick");
        }

        // ── Interlock pass ────────────────────────────────────────────────
        //
        // Reads the flags left by last tick's update together with live
        // sensor state, so this must run before update_all.
        let mut actuations = Vec::new();
        for pair in &matching.pairs {
            if let Some((outside, inside)) = self.registry.get_pair_mut(pair.outside, pair.inside) {
                check_pair(outside, inside, &mut actuations);
            }
        }

        // ── State-machine pass ────────────────────────────────────────────
        self.registry.update_all();

        TickReport {
            tick,
            tag:        self.tag.clone(),
            doors:      self.registry.len(),
            pairs:      matching.pairs,
            unpaired:   matching.unpaired,
            actuations,
            reset:      false,
        }
    }
}
