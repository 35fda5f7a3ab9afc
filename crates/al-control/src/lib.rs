//! `al-control` — the interlock and the per-tick loop around it.
//!
//! # Tick order
//!
//! ```text
//! AirlockProgram::invoke(argument):
//!   ⓪ Tag      — non-empty argument ≠ active tag ⇒ fresh Airlocks (all door
//!                state discarded) under the new tag.
//!   ① Refresh  — DoorSource::discover(tag) → DoorRegistry::refresh.
//!   ② Match    — match_pairs over the registry's discovery order.
//!   ③ Check    — check_pair for every pair, outside rule then inside rule,
//!                against last tick's flags and this tick's live sensors.
//!   ④ Update   — every door's state machine advances one tick.
//! ```
//!
//! Everything runs to completion on the caller's thread; the host decides
//! when the next tick happens.
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use al_control::{NoopObserver, ProgramBuilder};
//!
//! let mut program = ProgramBuilder::new(host_source).build()?;
//! loop {
//!     host.wait_for_tick();
//!     program.invoke(host.argument(), &mut NoopObserver);
//! }
//! ```

pub mod airlocks;
pub mod builder;
pub mod error;
pub mod interlock;
pub mod observer;
pub mod program;
pub mod report;
pub mod source;


pub use airlocks::Airlocks;
pub use builder::ProgramBuilder;
pub use error::{ControlError, ControlResult};
pub use interlock::check_pair;
pub use observer::{AirlockObserver, NoopObserver};
pub use program::AirlockProgram;
pub use report::TickReport;
pub use source::DoorSource;
