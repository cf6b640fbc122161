//! `bg-render` — text presentation for the beacon grid simulator.
//!
//! | Item                   | Role                                               |
//! |------------------------|----------------------------------------------------|
//! | [`GridView`]           | Character matrix derived from a `Frame`            |
//! | [`TranscriptObserver`] | `SimObserver` that writes the run to any `Write`   |
//!
//! Legend: `.` empty, `*` path, `#` obstacle, `R` robot, `L` light,
//! `B` light on the final frame.
//!
//! # Usage
//!
//! ```rust,ignore
//! use bg_render::TranscriptObserver;
//!
//! let mut obs = TranscriptObserver::new(std::io::stdout().lock(), config.max_movements);
//! sim.run(&mut obs);
//! obs.take_error().map(|e| eprintln!("output error: {e}"));
//! ```

pub mod error;
pub mod grid;
pub mod transcript;

#[cfg(test)]
mod tests;

pub use error::{RenderError, RenderResult};
pub use grid::{Cell, GridView};
pub use transcript::{TITLE, TranscriptObserver};
