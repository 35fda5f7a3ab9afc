//! `al-door` — the per-door half of the airlock interlock.
//!
//! # Crate layout
//!
//! | Module       | Contents                                                     |
//! |--------------|--------------------------------------------------------------|
//! | [`handle`]   | `DoorHandle`, what the host must expose for one door         |
//! | [`action`]   | `Action`, `Actuation`: commands issued to a door             |
//! | [`door`]     | `Door<H>` timed state machine, `DoorSnapshot`                |
//! | [`sim`]      | `SimDoor`, in-memory handle for tests and simulated hosts    |
//!
//! # Design notes
//!
//! A `Door` never owns the truth about whether it is open: the host's sensor
//! does.  The state machine only remembers what it saw last tick and how long
//! ago something happened, and from that derives the "someone opened me by
//! hand" signal (`request_to_open`) that drives the interlock.

pub mod action;
pub mod door;
pub mod handle;
pub mod sim;


pub use action::{Action, Actuation};
pub use door::{Door, DoorSnapshot};
pub use handle::DoorHandle;
pub use sim::SimDoor;
