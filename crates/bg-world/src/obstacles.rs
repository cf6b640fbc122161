//! Static obstacle layout.
//!
//! # Data layout
//!
//! Obstacles are kept twice: a `Vec<Position>` in placement order (what the
//! transcript lists and what replays compare) and an `FxHashSet` for the O(1)
//! membership test on the move-validation hot path.  Both are built once and
//! never mutated afterwards.

use rustc_hash::FxHashSet;
use tracing::debug;

use bg_core::{BgError, BgResult, Position, SimRng};

/// Rejection-sampling budget, in draws per grid cell.
///
/// With at least one free cell on an `n`-cell grid the chance of missing it
/// in `64 · n` uniform draws is below `e⁻⁶⁴`; hitting the cap therefore means
/// the request was impossible, not unlucky.
pub const PLACEMENT_ATTEMPTS_PER_CELL: usize = 64;

/// An immutable set of pairwise-distinct, in-bounds obstacle cells.
#[derive(Clone, Debug, Default)]
pub struct ObstacleSet {
    cells: Vec<Position>,
    index: FxHashSet<Position>,
}

impl ObstacleSet {
    /// A grid with no obstacles.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Place `count` distinct obstacles uniformly at random.
    ///
    /// Each draw that lands on an already-placed obstacle is rejected and
    /// redrawn.  Fails fast with [`BgError::Config`] if `count` would leave no
    /// free cell, and with [`BgError::PlacementExhausted`] if the draw budget
    /// runs out.
    pub fn place(count: usize, grid_size: u32, rng: &mut SimRng) -> BgResult<Self> {
        let cell_count = grid_size as usize * grid_size as usize;
        if count >= cell_count {
            return Err(BgError::Config(format!(
                "{count} obstacles leave no free cell on a {grid_size}x{grid_size} grid"
            )));
        }

        let max_attempts = cell_count * PLACEMENT_ATTEMPTS_PER_CELL;
        let mut set = Self {
            cells: Vec::with_capacity(count),
            index: FxHashSet::default(),
        };
        let mut attempts = 0usize;
        let mut rejected = 0usize;

        while set.cells.len() < count {
            if attempts == max_attempts {
                return Err(BgError::PlacementExhausted { what: "obstacles", attempts });
            }
            attempts += 1;

            let pos = rng.cell(grid_size);
            if set.index.insert(pos) {
                set.cells.push(pos);
            } else {
                rejected += 1;
            }
        }

        debug!(count, attempts, rejected, "placed obstacles");
        Ok(set)
    }

    /// Build from an explicit layout (replays, tests).
    ///
    /// Every cell must be in bounds and no cell may appear twice.
    pub fn from_cells(cells: Vec<Position>, grid_size: u32) -> BgResult<Self> {
        let mut index = FxHashSet::default();
        for &pos in &cells {
            if !pos.in_bounds(grid_size) {
                return Err(BgError::OutOfBounds { pos, grid_size });
            }
            if !index.insert(pos) {
                return Err(BgError::Occupied(pos));
            }
        }
        Ok(Self { cells, index })
    }

    /// Membership test used by the agent's move validator.
    #[inline]
    pub fn contains(&self, pos: Position) -> bool {
        self.index.contains(&pos)
    }

    /// Draw a uniformly random cell that is not an obstacle.
    ///
    /// Used for the initial agent and target cells.  `what` names the entity
    /// in the error if the draw budget runs out.
    pub fn sample_free(
        &self,
        grid_size: u32,
        rng:       &mut SimRng,
        what:      &'static str,
    ) -> BgResult<Position> {
        let max_attempts = grid_size as usize * grid_size as usize * PLACEMENT_ATTEMPTS_PER_CELL;
        for attempt in 1..=max_attempts {
            let pos = rng.cell(grid_size);
            if !self.contains(pos) {
                debug!(what, %pos, attempt, "placed on free cell");
                return Ok(pos);
            }
        }
        Err(BgError::PlacementExhausted { what, attempts: max_attempts })
    }

    /// Obstacles in placement order.
    #[inline]
    pub fn as_slice(&self) -> &[Position] {
        &self.cells
    }

    #[inline]
    pub fn iter(&self) -> impl Iterator<Item = Position> + '_ {
        self.cells.iter().copied()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }
}
