//! `TranscriptObserver<W>` — renders a run as human-readable text.

use std::io::Write;

use bg_core::Position;
use bg_sim::{Frame, Outcome, RunSummary, SimObserver};

use crate::{GridView, RenderError, RenderResult};

/// First line of every transcript.
pub const TITLE: &str = "Light Sensor Robot Simulation with Shortest Path and One Reposition";
const RULE:      &str = "=================================================================";

/// A [`SimObserver`] that writes a plain-text transcript to any
/// [`Write`] sink (stdout, a file, a `Vec<u8>` in tests).
///
/// Errors from the sink are stored internally because `SimObserver` methods
/// have no return value.  After `sim.run()` returns, check for errors with
/// [`take_error`][Self::take_error].  Once a write has failed, later output
/// is skipped.
pub struct TranscriptObserver<W: Write> {
    out:           W,
    max_movements: u64,
    quiet:         bool,
    last_error:    Option<RenderError>,
}

impl<W: Write> TranscriptObserver<W> {
    /// Create an observer writing to `out`.  `max_movements` is quoted in the
    /// failure message.
    pub fn new(out: W, max_movements: u64) -> Self {
        Self {
            out,
            max_movements,
            quiet:      false,
            last_error: None,
        }
    }

    /// Suppress the per-tick blocks; arrival notices and the final state are
    /// still written.
    pub fn quiet(mut self, quiet: bool) -> Self {
        self.quiet = quiet;
        self
    }

    /// Take the stored write error (if any) after `sim.run()` returns.
    ///
    /// Returns `None` if all writes succeeded.
    pub fn take_error(&mut self) -> Option<RenderError> {
        self.last_error.take()
    }

    /// Unwrap the inner sink (e.g. to inspect a buffer after the sim).
    pub fn into_inner(self) -> W {
        self.out
    }

    fn emit<F>(&mut self, write: F)
    where
        F: FnOnce(&mut W) -> std::io::Result<()>,
    {
        if self.last_error.is_some() {
            return;
        }
        let result: RenderResult<()> = write(&mut self.out).map_err(RenderError::from);
        if let Err(e) = result {
            self.last_error = Some(e);
        }
    }
}

impl<W: Write> SimObserver for TranscriptObserver<W> {
    fn on_start(&mut self, frame: &Frame<'_>) {
        self.emit(|out| {
            writeln!(out, "{TITLE}")?;
            writeln!(out, "{RULE}")?;
            writeln!(out, "Obstacles:")?;
            for pos in frame.obstacles.iter() {
                writeln!(out, "Obstacle Position: {pos}")?;
            }
            writeln!(out)
        });
    }

    fn on_tick(&mut self, frame: &Frame<'_>) {
        if self.quiet {
            return;
        }
        let grid = GridView::from_frame(frame);
        self.emit(|out| {
            writeln!(out, "Movement {}:", frame.tick.0 + 1)?;
            writeln!(out, "Robot Position: {}", frame.robot)?;
            writeln!(out, "Light Position: {}", frame.target)?;
            writeln!(out, "Distance to light: {:.2}", frame.robot.euclidean(frame.target))?;
            writeln!(out)?;
            writeln!(out, "Grid State:")?;
            write!(out, "{grid}")?;
            writeln!(out)
        });
    }

    fn on_target_found(&mut self, _frame: &Frame<'_>) {
        self.emit(|out| writeln!(out, "Light Found!"));
    }

    fn on_relocated(&mut self, _from: Position, to: Position) {
        self.emit(|out| writeln!(out, "Light repositioned! New light position: {to}"));
    }

    fn on_finish(&mut self, frame: &Frame<'_>, summary: &RunSummary) {
        let grid = GridView::from_frame(frame);
        let max_movements = self.max_movements;
        self.emit(|out| {
            writeln!(out, "Final Simulation State:")?;
            write!(out, "{grid}")?;
            writeln!(out)?;
            match summary.outcome {
                Outcome::Captured => writeln!(
                    out,
                    "Robot reached the light after {} movements.",
                    summary.movements
                ),
                Outcome::BudgetExhausted => writeln!(
                    out,
                    "Robot failed to reach the light within {max_movements} movements."
                ),
            }
        });
    }
}
