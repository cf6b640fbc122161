//! `bg-core` — foundational types for the beacon grid simulator.
//!
//! This crate is a dependency of every other `bg-*` crate.  It intentionally
//! has no `bg-*` dependencies and minimal external ones (only `rand` and
//! `thiserror`, plus optional `serde`).
//!
//! # What lives here
//!
//! | Module          | Contents                                              |
//! |-----------------|-------------------------------------------------------|
//! | [`geo`]         | `Position`, `Direction`, Manhattan/Euclidean metrics  |
//! | [`time`]        | `Tick`                                                |
//! | [`config`]      | `GridConfig`, `MAX_GRID_SIZE`                         |
//! | [`rng`]         | `SimRng`                                              |
//! | [`error`]       | `BgError`, `BgResult`                                 |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types.        |

pub mod config;
pub mod error;
pub mod geo;
pub mod rng;
pub mod time;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use config::{GridConfig, MAX_GRID_SIZE};
pub use error::{BgError, BgResult};
pub use geo::{Direction, Position};
pub use rng::SimRng;
pub use time::Tick;
