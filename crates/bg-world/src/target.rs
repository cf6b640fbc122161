//! The target ("light") the agent is seeking.

use tracing::debug;

use bg_core::{Position, SimRng};

/// A cell that can jump to a new random location once per run.
///
/// `Target` records whether it has relocated but does not refuse a second
/// relocation; the simulation controller's phase machine is what guarantees
/// `relocate` is called at most once.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Target {
    position:      Position,
    has_relocated: bool,
}

impl Target {
    /// Place a target on a uniformly random cell.
    pub fn spawn(grid_size: u32, rng: &mut SimRng) -> Self {
        Self::at(rng.cell(grid_size))
    }

    /// Place a target on a known cell.
    pub fn at(position: Position) -> Self {
        Self {
            position,
            has_relocated: false,
        }
    }

    #[inline]
    pub fn position(&self) -> Position {
        self.position
    }

    #[inline]
    pub fn has_relocated(&self) -> bool {
        self.has_relocated
    }

    /// Jump to a uniformly random cell and mark the one-shot as consumed.
    ///
    /// The new cell is unconstrained: it may equal the old one, the agent's
    /// cell, or (as in the reference behaviour) even an obstacle.  Returns
    /// the new position.
    pub fn relocate(&mut self, grid_size: u32, rng: &mut SimRng) -> Position {
        let from = self.position;
        self.position = rng.cell(grid_size);
        self.has_relocated = true;
        debug!(%from, to = %self.position, "target relocated");
        self.position
    }
}
