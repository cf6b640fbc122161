//! Simulation observer trait for rendering and progress reporting.

use bg_agent::MoveIntent;
use bg_core::{Position, Tick};

use crate::{Frame, RunSummary};

/// Callbacks invoked by [`Sim::step`][crate::Sim::step] and
/// [`Sim::run`][crate::Sim::run] at key points in the tick loop.
///
/// All methods have default no-op implementations so implementors only need
/// to override what they care about.  Observers are one-way: nothing they do
/// can influence the simulation.
///
/// # Example — arrival counter
///
/// ```rust,ignore
/// struct Arrivals(u32);
///
/// impl SimObserver for Arrivals {
///     fn on_target_found(&mut self, _frame: &Frame<'_>) {
///         self.0 += 1;
///     }
/// }
/// ```
pub trait SimObserver {
    /// Called once, before the first tick.
    fn on_start(&mut self, _frame: &Frame<'_>) {}

    /// Called at the start of every tick with the state about to be checked
    /// for arrival.
    fn on_tick(&mut self, _frame: &Frame<'_>) {}

    /// Called when the robot is found on the target's cell.
    fn on_target_found(&mut self, _frame: &Frame<'_>) {}

    /// Called after the one-shot relocation.
    fn on_relocated(&mut self, _from: Position, _to: Position) {}

    /// Called after each applied move.  `tick` counts the move just made.
    fn on_move(&mut self, _tick: Tick, _intent: &MoveIntent) {}

    /// Called once when the run reaches its terminal phase.  `frame.terminal`
    /// is `true`.
    fn on_finish(&mut self, _frame: &Frame<'_>, _summary: &RunSummary) {}
}

/// A [`SimObserver`] that does nothing.  Use when you need to call `run` but
/// don't want callbacks.
pub struct NoopObserver;

impl SimObserver for NoopObserver {}
