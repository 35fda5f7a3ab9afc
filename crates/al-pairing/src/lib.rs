//! `al-pairing` — who is known, and who is paired with whom.
//!
//! # Crate layout
//!
//! | Module         | Contents                                                   |
//! |----------------|------------------------------------------------------------|
//! | [`registry`]   | `DoorRegistry<H>`: identity-stable door set across ticks   |
//! | [`matcher`]    | `Pair`, `Matching`, `match_pairs`: greedy nearest pairing  |
//!
//! # Design notes
//!
//! The registry is the only thing that persists between ticks.  Pairs do not:
//! they are recomputed from scratch every tick from the registry's discovery
//! order, so the same door may be paired with a different neighbour once the
//! door population changes.

pub mod matcher;
pub mod registry;


pub use matcher::{Matching, Pair, match_pairs};
pub use registry::DoorRegistry;
