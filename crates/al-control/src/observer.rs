//! Observer trait for tracing and data collection.

use al_core::Tick;
use al_door::{Actuation, DoorSnapshot};

use crate::TickReport;

/// Callbacks invoked by [`AirlockProgram::invoke`][crate::AirlockProgram::invoke]
/// at key points of a tick.
///
/// All methods have default no-op implementations so implementors only need
/// to override what they care about.
///
/// # Example: command counter
///
/// ```rust,ignore
/// struct Counter { closes: usize }
///
/// impl AirlockObserver for Counter {
///     fn on_actuation(&mut self, _tick: Tick, act: &Actuation) {
///         if act.action == Action::Close {
///             self.closes += 1;
///         }
///     }
/// }
/// ```
pub trait AirlockObserver {
    /// Called at the very start of each tick, before any processing.
    fn on_tick_start(&mut self, _tick: Tick) {}

    /// Called when a new tag replaces the active one, before discovery.
    fn on_tag_switch(&mut self, _old: &str, _new: &str) {}

    /// Called once per command issued by the interlock, in issue order.
    fn on_actuation(&mut self, _tick: Tick, _actuation: &Actuation) {}

    /// Called after the state-machine pass on snapshot ticks (every
    /// `snapshot_interval_ticks`), with every known door in discovery order.
    fn on_snapshot(&mut self, _tick: Tick, _doors: &[DoorSnapshot]) {}

    /// Called at the end of each tick.
    fn on_tick_end(&mut self, _report: &TickReport) {}
}

/// An [`AirlockObserver`] that does nothing.
pub struct NoopObserver;

impl AirlockObserver for NoopObserver {}
