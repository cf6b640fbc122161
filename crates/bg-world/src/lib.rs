//! `bg-world` — the static parts of the grid and the thing the agent seeks.
//!
//! # Crate layout
//!
//! | Module        | Contents                                                   |
//! |---------------|------------------------------------------------------------|
//! | [`obstacles`] | `ObstacleSet` — bounded rejection-sampled placement, lookup |
//! | [`target`]    | `Target` — uniform spawn and one-shot relocation           |
//!
//! Errors are reported as [`bg_core::BgError`]; this crate adds no error type
//! of its own.
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                       |
//! |---------|--------------------------------------------------------------|
//! | `serde` | Derives `Serialize`/`Deserialize` on `Target`.               |

pub mod obstacles;
pub mod target;


pub use obstacles::{ObstacleSet, PLACEMENT_ATTEMPTS_PER_CELL};
pub use target::Target;
