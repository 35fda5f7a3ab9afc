//! Plain data row types written by output backends.

use al_core::DoorId;
use al_door::Action;

/// One door's state at a snapshot tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DoorSnapshotRow {
    pub tick:            u64,
    pub door:            DoorId,
    pub is_open:         bool,
    pub is_opening:      bool,
    pub is_closing:      bool,
    pub request_to_open: bool,
    pub cooldown_ticks:  u32,
}

/// One command issued by the interlock.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ActuationRow {
    pub tick:   u64,
    pub door:   DoorId,
    pub action: Action,
}

/// Summary of one tick.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TickSummaryRow {
    pub tick:     u64,
    pub tag:      String,
    pub doors:    u64,
    pub pairs:    u64,
    /// Door left without a partner this tick, if any.
    pub unpaired: Option<DoorId>,
    pub opens:    u64,
    pub closes:   u64,
    pub reset:    bool,
}
