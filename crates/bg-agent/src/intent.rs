//! Move intents — what the agent decided to do on one tick.

use bg_core::{Direction, Position};

/// The outcome of [`Robot::plan_move`][crate::Robot::plan_move].
///
/// Produced read-only and consumed by [`Robot::apply`][crate::Robot::apply].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum MoveIntent {
    /// Step into the valid neighbour closest (Manhattan) to the target.
    ///
    /// `distance` is the Manhattan distance from `to` to the target.
    Advance {
        to:        Position,
        direction: Direction,
        distance:  u32,
    },

    /// No valid neighbour: drop the newest path entry and return to `to`,
    /// the entry before it.  Not recorded as a visit.
    Backtrack { to: Position },

    /// No valid neighbour and nothing left to backtrack to.  The agent stays
    /// put; the tick still costs one unit of movement budget.
    Stuck,
}

impl MoveIntent {
    /// Cell the agent occupies after this intent is applied, or `None` if it
    /// does not move.
    #[inline]
    pub fn destination(&self) -> Option<Position> {
        match *self {
            MoveIntent::Advance { to, .. } | MoveIntent::Backtrack { to } => Some(to),
            MoveIntent::Stuck => None,
        }
    }
}
