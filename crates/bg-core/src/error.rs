//! Framework error type.
//!
//! Sub-crates may define their own error enums and wrap `BgError` as one
//! variant via `#[from]`; `bg-sim` does exactly that.

use thiserror::Error;

use crate::Position;

/// The base error type shared by all `bg-*` crates.
#[derive(Debug, Error)]
pub enum BgError {
    #[error("configuration error: {0}")]
    Config(String),

    #[error("gave up placing {what} after {attempts} attempts")]
    PlacementExhausted {
        what:     &'static str,
        attempts: usize,
    },

    #[error("position {pos} is outside the {grid_size}x{grid_size} grid")]
    OutOfBounds {
        pos:       Position,
        grid_size: u32,
    },

    #[error("cell {0} is already occupied by an obstacle")]
    Occupied(Position),
}

/// Shorthand result type for all `bg-*` crates.
pub type BgResult<T> = Result<T, BgError>;
