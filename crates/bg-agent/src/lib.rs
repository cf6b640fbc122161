//! `bg-agent` — the mobile agent ("robot") and its movement memory.
//!
//! # Crate layout
//!
//! | Module        | Contents                                                    |
//! |---------------|-------------------------------------------------------------|
//! | [`history`]   | `BoundedHistory<T>` (FIFO-evicting deque), `VisitLog`       |
//! | [`intent`]    | `MoveIntent` — what the agent decided to do this tick       |
//! | [`robot`]     | `Robot` — plan/apply split of the greedy move decision      |
//!
//! # Design notes
//!
//! Move selection is split in two, mirroring the controller's tick loop:
//!
//! 1. **Plan** (`&self`): inspect the four neighbours and return a
//!    [`MoveIntent`].  No mutation, no randomness.
//! 2. **Apply** (`&mut self`): commit the intent to position, path and visit
//!    history.
//!
//! Observers see the intent between the two steps, and tests can assert on a
//! decision without committing it.
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Derives `Serialize`/`Deserialize` on `MoveIntent`.         |

pub mod history;
pub mod intent;
pub mod robot;


pub use history::{BoundedHistory, VisitLog};
pub use intent::MoveIntent;
pub use robot::{MAX_VISITS_PER_CELL, Robot};
