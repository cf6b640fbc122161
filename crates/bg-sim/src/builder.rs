//! Fluent builder for constructing a [`Sim`].

use tracing::info;

use bg_agent::Robot;
use bg_core::{BgError, GridConfig, Position, SimRng};
use bg_world::{ObstacleSet, Target};

use crate::{Sim, SimError, SimResult};

/// Seed used when neither the config nor the builder supplies one.
pub const DEFAULT_SEED: u64 = 0xFACA_DEAF_0123_4567;

/// Fluent builder for [`Sim`].
///
/// # Required inputs
///
/// - [`GridConfig`] — grid size, budget, obstacle count, history capacities.
///
/// # Optional inputs (have defaults)
///
/// | Method               | Default                                         |
/// |----------------------|-------------------------------------------------|
/// | `.seed(s)`           | `config.seed`, else [`DEFAULT_SEED`]            |
/// | `.obstacles(v)`      | `config.num_obstacles` random distinct cells    |
/// | `.robot_at(p)`       | Random cell not on an obstacle                  |
/// | `.target_at(p)`      | Random cell not on an obstacle                  |
///
/// Random pieces are drawn in the order obstacles → robot → target, so a
/// seed always reproduces the same layout.  The robot and target may start
/// on the same cell; the first tick then counts as the first arrival.
///
/// # Example
///
/// ```rust,ignore
/// let mut sim = SimBuilder::new(GridConfig::default())
///     .seed(42)
///     .build()?;
/// let summary = sim.run(&mut NoopObserver);
/// ```
pub struct SimBuilder {
    config:    GridConfig,
    seed:      Option<u64>,
    obstacles: Option<Vec<Position>>,
    robot:     Option<Position>,
    target:    Option<Position>,
}

impl SimBuilder {
    pub fn new(config: GridConfig) -> Self {
        Self {
            config,
            seed:      None,
            obstacles: None,
            robot:     None,
            target:    None,
        }
    }

    /// Override the RNG seed.
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Use an explicit obstacle layout instead of random placement.
    ///
    /// `config.num_obstacles` is ignored when this is set.
    pub fn obstacles(mut self, cells: Vec<Position>) -> Self {
        self.obstacles = Some(cells);
        self
    }

    /// Start the robot on `pos`.
    pub fn robot_at(mut self, pos: Position) -> Self {
        self.robot = Some(pos);
        self
    }

    /// Start the target on `pos`.
    pub fn target_at(mut self, pos: Position) -> Self {
        self.target = Some(pos);
        self
    }

    /// Validate inputs, place everything, and return a ready-to-run [`Sim`].
    pub fn build(self) -> SimResult<Sim> {
        let config = self.config;
        config.validate()?;

        let grid_size = config.grid_size;
        let seed = self.seed.or(config.seed).unwrap_or(DEFAULT_SEED);
        let mut rng = SimRng::new(seed);

        // ── Obstacles ─────────────────────────────────────────────────────
        let obstacles = match self.obstacles {
            Some(cells) => ObstacleSet::from_cells(cells, grid_size)
                .map_err(|source| SimError::Placement { what: "obstacle", source })?,
            None => ObstacleSet::place(config.num_obstacles, grid_size, &mut rng)?,
        };

        // ── Robot, then target ────────────────────────────────────────────
        let robot_start = resolve_start("robot", self.robot, &obstacles, grid_size, &mut rng)?;
        let target_start = resolve_start("target", self.target, &obstacles, grid_size, &mut rng)?;

        info!(
            seed,
            grid_size,
            obstacles = obstacles.len(),
            robot = %robot_start,
            target = %target_start,
            "simulation built"
        );

        let robot = Robot::new(robot_start, config.max_path_length, config.max_visited_length);
        Ok(Sim::new(config, rng, obstacles, robot, Target::at(target_start)))
    }
}

/// Validate an explicit start cell, or draw a free one.
fn resolve_start(
    what:      &'static str,
    explicit:  Option<Position>,
    obstacles: &ObstacleSet,
    grid_size: u32,
    rng:       &mut SimRng,
) -> SimResult<Position> {
    match explicit {
        Some(pos) if !pos.in_bounds(grid_size) => Err(SimError::Placement {
            what,
            source: BgError::OutOfBounds { pos, grid_size },
        }),
        Some(pos) if obstacles.contains(pos) => Err(SimError::Placement {
            what,
            source: BgError::Occupied(pos),
        }),
        Some(pos) => Ok(pos),
        None => Ok(obstacles.sample_free(grid_size, rng, what)?),
    }
}
