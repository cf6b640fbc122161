//! Read-only per-tick snapshot handed to observers.

use bg_agent::BoundedHistory;
use bg_core::{Position, Tick};
use bg_world::ObstacleSet;

/// Everything a renderer needs to draw one tick, borrowed from the
/// simulation.  Observers must not keep it beyond the callback.
#[derive(Clone, Copy, Debug)]
pub struct Frame<'a> {
    pub grid_size: u32,
    pub obstacles: &'a ObstacleSet,
    pub robot:     Position,
    /// The robot's current walk, oldest → newest.
    pub path:      &'a BoundedHistory<Position>,
    pub target:    Position,
    /// Moves applied so far.
    pub tick:      Tick,
    /// `true` only for the final frame of a run.
    pub terminal:  bool,
}

impl Frame<'_> {
    /// `true` if the robot is on the target's cell.
    #[inline]
    pub fn robot_on_target(&self) -> bool {
        self.robot == self.target
    }
}
