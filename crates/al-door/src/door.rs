//! `Door<H>` — one door's timed state machine.
//!
//! # Per-tick update
//!
//! ```text
//! ① request   — closed→open edge with cooldown at 0 ⇒ request_to_open = true
//! ② edges     — opened:  opening=true,  closing=false, cooldown=window
//!               closed:  closing=true,  opening=false, cooldown=window
//!               neither, cooldown at 0: clear opening and closing
//!               neither, cooldown running: leave flags alone
//! ③ remember  — previous_open = is_open
//! ④ count     — cooldown -= 1 (floored at 0)
//! ```
//!
//! `open()` and `close()` also reset the cooldown, so a door the interlock
//! itself opens reaches ① with a full window and never reads as a request.

use tracing::debug;

use al_core::DoorId;

use crate::{Actuation, DoorHandle};

/// Timed state machine wrapped around a host [`DoorHandle`].
///
/// Created by the registry the first time a door is discovered and kept
/// across ticks for as long as the host keeps reporting it.
#[derive(Debug)]
pub struct Door<H: DoorHandle> {
    handle:          H,
    id:              DoorId,
    cooldown_window: u32,

    previous_open:   bool,
    request_to_open: bool,
    is_opening:      bool,
    is_closing:      bool,
    cooldown_ticks:  u32,
}

impl<H: DoorHandle> Door<H> {
    /// Wrap `handle` and settle the flags against its current sensor state.
    ///
    /// The initial pass runs the edge/remember/count steps only: a door that
    /// is already open when discovered comes up `is_opening`, not as an
    /// operator request.  It becomes a request only if it later cycles
    /// through closed.
    pub fn new(handle: H, cooldown_window: u32) -> Self {
        let id = DoorId(handle.position());
        let currently_open = handle.is_open();
        let mut door = Self {
            handle,
            id,
            cooldown_window,
            previous_open:   false,
            request_to_open: false,
            is_opening:      false,
            is_closing:      false,
            cooldown_ticks:  0,
        };
        door.track_edges(currently_open);
        door
    }

    // ── Accessors ─────────────────────────────────────────────────────────

    #[inline]
    pub fn id(&self) -> DoorId {
        self.id
    }

    /// Live sensor read through the handle.
    #[inline]
    pub fn is_open(&self) -> bool {
        self.handle.is_open()
    }

    #[inline]
    pub fn previous_open(&self) -> bool {
        self.previous_open
    }

    #[inline]
    pub fn request_to_open(&self) -> bool {
        self.request_to_open
    }

    #[inline]
    pub fn is_opening(&self) -> bool {
        self.is_opening
    }

    #[inline]
    pub fn is_closing(&self) -> bool {
        self.is_closing
    }

    #[inline]
    pub fn cooldown_ticks(&self) -> u32 {
        self.cooldown_ticks
    }

    #[inline]
    pub fn cooldown_window(&self) -> u32 {
        self.cooldown_window
    }

    // ── Commands ──────────────────────────────────────────────────────────

    /// Command the door open, consume any pending request, restart the
    /// cooldown.
    pub fn open(&mut self) -> Actuation {
        self.handle.open();
        self.request_to_open = false;
        self.cooldown_ticks = self.cooldown_window;
        debug!(door = %self.id, "open");
        Actuation::open(self.id)
    }

    /// Command the door closed and restart the cooldown.  A pending request
    /// is left as is.
    pub fn close(&mut self) -> Actuation {
        self.handle.close();
        self.cooldown_ticks = self.cooldown_window;
        debug!(door = %self.id, "close");
        Actuation::close(self.id)
    }

    // ── Per-tick update ───────────────────────────────────────────────────

    /// Run one tick of the state machine against the live sensor.
    ///
    /// Call exactly once per tick, after the interlock pass.
    pub fn update(&mut self) {
        let currently_open = self.handle.is_open();
        self.update_with(currently_open);
    }

    /// Run one tick of the state machine against an explicit sensor reading.
    pub fn update_with(&mut self, currently_open: bool) {
        if !self.previous_open && currently_open && self.cooldown_ticks == 0 {
            self.request_to_open = true;
            debug!(door = %self.id, "opened outside cooldown, treating as request");
        }
        self.track_edges(currently_open);
    }

    fn track_edges(&mut self, currently_open: bool) {
        if !self.previous_open && currently_open {
            self.is_opening = true;
            self.is_closing = false;
            self.cooldown_ticks = self.cooldown_window;
        } else if self.previous_open && !currently_open {
            self.is_closing = true;
            self.is_opening = false;
            self.cooldown_ticks = self.cooldown_window;
        } else if self.cooldown_ticks == 0 {
            self.is_opening = false;
            self.is_closing = false;
        }

        self.previous_open = currently_open;
        self.cooldown_ticks = self.cooldown_ticks.saturating_sub(1);
    }

    /// Copy out the current flags for observers.
    pub fn snapshot(&self) -> DoorSnapshot {
        DoorSnapshot {
            id:              self.id,
            is_open:         self.is_open(),
            previous_open:   self.previous_open,
            request_to_open: self.request_to_open,
            is_opening:      self.is_opening,
            is_closing:      self.is_closing,
            cooldown_ticks:  self.cooldown_ticks,
        }
    }
}

/// Plain-data copy of a door's state at one instant.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DoorSnapshot {
    pub id:              DoorId,
    pub is_open:         bool,
    pub previous_open:   bool,
    pub request_to_open: bool,
    pub is_opening:      bool,
    pub is_closing:      bool,
    pub cooldown_ticks:  u32,
}
