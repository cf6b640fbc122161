//! Top-level simulation configuration.

use crate::{BgError, BgResult};

/// Largest supported grid edge.  Keeps `grid_size²` and every coordinate
/// comfortably inside `i32`.
pub const MAX_GRID_SIZE: u32 = 4_096;

/// Parameters of one simulation run.
///
/// Typically built from `Default`, optionally overlaid with a JSON file by
/// the application crate, then passed to the simulation builder.  Call
/// [`validate`](Self::validate) before use; the builder does so itself.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct GridConfig {
    /// Edge length of the square grid.  Default: 10.
    pub grid_size: u32,

    /// Movement budget.  The run ends in failure once this many moves have
    /// been applied without a second arrival.  Default: 60.
    pub max_movements: u64,

    /// Number of distinct obstacle cells.  Default: 10.
    pub num_obstacles: usize,

    /// Capacity of the backtracking path; oldest entries are evicted first.
    /// Default: 100.
    pub max_path_length: usize,

    /// Capacity of the visit history used for the revisit cap.  Default: 200.
    pub max_visited_length: usize,

    /// Master RNG seed.  `None` lets the application pick one (and it should
    /// log it so the run can be replayed).
    pub seed: Option<u64>,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            grid_size:          10,
            max_movements:      60,
            num_obstacles:      10,
            max_path_length:    100,
            max_visited_length: 200,
            seed:               None,
        }
    }
}

impl GridConfig {
    /// Total number of cells on the grid.
    #[inline]
    pub fn cell_count(&self) -> usize {
        self.grid_size as usize * self.grid_size as usize
    }

    /// Check every parameter that would otherwise make the run hang or
    /// misbehave.
    ///
    /// Obstacles must leave at least one free cell, because the agent and
    /// the target are re-rolled until they land off-obstacle.
    pub fn validate(&self) -> BgResult<()> {
        if self.grid_size == 0 {
            return Err(BgError::Config("grid_size must be at least 1".into()));
        }
        if self.grid_size > MAX_GRID_SIZE {
            return Err(BgError::Config(format!(
                "grid_size {} exceeds the maximum of {MAX_GRID_SIZE}",
                self.grid_size
            )));
        }
        if self.num_obstacles >= self.cell_count() {
            return Err(BgError::Config(format!(
                "num_obstacles {} leaves no free cell on a {}x{} grid",
                self.num_obstacles, self.grid_size, self.grid_size
            )));
        }
        if self.max_path_length == 0 {
            return Err(BgError::Config("max_path_length must be at least 1".into()));
        }
        if self.max_visited_length == 0 {
            return Err(BgError::Config("max_visited_length must be at least 1".into()));
        }
        Ok(())
    }
}
