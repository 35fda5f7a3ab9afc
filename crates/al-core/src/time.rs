//! Tick model and interlock configuration.
//!
//! # Design
//!
//! Time is a monotonically increasing `Tick` counter, advanced once per host
//! invocation.  Nothing here reads a wall clock: cooldowns measure elapsed
//! invocations, so skipped or late ticks simply stretch the window.

use std::fmt;

use crate::{AlError, AlResult};

/// Tag substring the host matches against door names when none is given.
pub const DEFAULT_TAG: &str = "[airlock]";

/// Ticks a door's opening/closing flags stay asserted after a transition or
/// a command, and during which a sensed open is not treated as a request.
pub const DEFAULT_COOLDOWN_TICKS: u32 = 100;

// ── Tick ─────────────────────────────────────────────────────────────────────

/// An absolute invocation counter.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Tick(pub u64);

impl Tick {
    pub const ZERO: Tick = Tick(0);

    /// Return the tick `n` steps after `self`, saturating at `u64::MAX`.
    #[inline]
    pub fn offset(self, n: u64) -> Tick {
        Tick(self.0.saturating_add(n))
    }

    /// Ticks elapsed from `earlier` to `self`.
    ///
    /// # Panics
    /// Panics in debug mode if `earlier > self`.
    #[inline]
    pub fn since(self, earlier: Tick) -> u64 {
        self.0 - earlier.0
    }

    /// Advance in place by one tick.  The counter sticks at `u64::MAX`.
    #[inline]
    pub fn advance(&mut self) {
        self.0 = self.0.saturating_add(1);
    }
}

impl std::ops::Add<u64> for Tick {
    type Output = Tick;
    #[inline]
    fn add(self, rhs: u64) -> Tick {
        self.offset(rhs)
    }
}

impl std::ops::Sub for Tick {
    type Output = u64;
    #[inline]
    fn sub(self, rhs: Tick) -> u64 {
        self.0 - rhs.0
    }
}

impl fmt::Display for Tick {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "T{}", self.0)
    }
}

// ── AirlockConfig ─────────────────────────────────────────────────────────────

/// Interlock configuration.
///
/// Typically built with `Default` or loaded from a JSON/TOML file by the
/// application crate (with the `serde` feature) and passed to the program
/// builder.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct AirlockConfig {
    /// Tag used until the host passes a different non-empty argument.
    pub default_tag: String,

    /// Length of the per-door cooldown window, in ticks.  Default: 100.
    pub cooldown_ticks: u32,

    /// Emit a door snapshot to observers every N ticks.  0 disables
    /// snapshots; 1 = every tick.
    pub snapshot_interval_ticks: u64,
}

impl AirlockConfig {
    /// Reject configurations the interlock cannot run with.
    pub fn validate(&self) -> AlResult<()> {
        if self.default_tag.is_empty() {
            return Err(AlError::Config("default_tag must not be empty".into()));
        }
        if self.cooldown_ticks == 0 {
            return Err(AlError::Config("cooldown_ticks must be at least 1".into()));
        }
        Ok(())
    }

    /// Whether observers should receive a snapshot on `tick`.
    #[inline]
    pub fn is_snapshot_tick(&self, tick: Tick) -> bool {
        self.snapshot_interval_ticks > 0 && tick.0.is_multiple_of(self.snapshot_interval_ticks)
    }
}

impl Default for AirlockConfig {
    fn default() -> Self {
        Self {
            default_tag:             DEFAULT_TAG.to_string(),
            cooldown_ticks:          DEFAULT_COOLDOWN_TICKS,
            snapshot_interval_ticks: 1,
        }
    }
}
