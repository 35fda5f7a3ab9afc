//! `al-core` — foundational types for the airlock interlock framework.
//!
//! This crate is a dependency of every other `al-*` crate.  It has no `al-*`
//! dependencies and minimal external ones (only `rand` and `thiserror`, plus
//! optional `serde`).
//!
//! # What lives here
//!
//! | Module          | Contents                                              |
//! |-----------------|-------------------------------------------------------|
//! | [`geo`]         | `GridPos`, rectangular distance                       |
//! | [`ids`]         | `DoorId` (position-derived door identity)             |
//! | [`time`]        | `Tick`, `AirlockConfig`                               |
//! | [`rng`]         | `SimRng` for simulated hosts                          |
//! | [`error`]       | `AlError`, `AlResult`                                 |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types.        |

pub mod error;
pub mod geo;
pub mod ids;
pub mod rng;
pub mod time;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use error::{AlError, AlResult};
pub use geo::GridPos;
pub use ids::DoorId;
pub use rng::SimRng;
pub use time::{AirlockConfig, DEFAULT_COOLDOWN_TICKS, DEFAULT_TAG, Tick};
