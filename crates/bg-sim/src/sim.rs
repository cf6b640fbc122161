//! The `Sim` struct and its tick loop.

use tracing::{debug, info, warn};

use bg_agent::{MoveIntent, Robot};
use bg_core::{GridConfig, SimRng, Tick};
use bg_world::{ObstacleSet, Target};

use crate::{Frame, Outcome, Phase, RunSummary, SimObserver};

/// The simulation controller.
///
/// `Sim` owns every piece of state (agent, target, obstacles, RNG) and drives
/// the tick loop:
///
/// 1. **Render**: hand the observer a [`Frame`] of the current state.
/// 2. **Arrival**: if the robot is on the target:
///    - in [`Phase::Running`], relocate the target and enter
///      [`Phase::TargetFoundFirst`].  This tick consumes no movement budget.
///    - in [`Phase::TargetFoundFirst`], finish with [`Outcome::Captured`].
/// 3. **Move**: otherwise plan and apply one robot move and advance the
///    tick counter.  When the counter reaches `max_movements` the run
///    finishes.
///
/// Create via [`SimBuilder`][crate::SimBuilder].
#[derive(Debug)]
pub struct Sim {
    /// Run parameters.  Already validated by the builder.
    pub config: GridConfig,

    /// Moves applied so far.
    pub tick: Tick,

    pub robot: Robot,

    pub target: Target,

    /// Immutable after construction.
    pub obstacles: ObstacleSet,

    rng:         SimRng,
    phase:       Phase,
    relocations: u32,
    started:     bool,
}

impl Sim {
    pub(crate) fn new(
        config:    GridConfig,
        rng:       SimRng,
        obstacles: ObstacleSet,
        robot:     Robot,
        target:    Target,
    ) -> Self {
        Self {
            config,
            tick: Tick::ZERO,
            robot,
            target,
            obstacles,
            rng,
            phase: Phase::Running,
            relocations: 0,
            started: false,
        }
    }

    // ── Public API ────────────────────────────────────────────────────────

    /// Run until the terminal phase and return the summary.
    ///
    /// Calls observer hooks throughout.  Use
    /// [`NoopObserver`][crate::NoopObserver] if you don't need callbacks.
    pub fn run<O: SimObserver>(&mut self, observer: &mut O) -> RunSummary {
        while !self.phase.is_done() {
            self.step(observer);
        }
        self.summary()
    }

    /// Advance exactly one tick of the state machine and return the new
    /// phase.
    ///
    /// A tick either relocates the target (free), ends the run, or applies
    /// one move.  Calling `step` on a finished simulation is a no-op.
    pub fn step<O: SimObserver>(&mut self, observer: &mut O) -> Phase {
        if self.phase.is_done() {
            return self.phase;
        }
        if !self.started {
            self.started = true;
            observer.on_start(&self.frame());
        }
        if self.tick.exhausts(self.config.max_movements) {
            self.finish(observer);
            return self.phase;
        }

        observer.on_tick(&self.frame());

        if self.robot.position() == self.target.position() {
            observer.on_target_found(&self.frame());
            match self.phase {
                Phase::Running => self.relocate_target(observer),
                Phase::TargetFoundFirst => self.finish(observer),
                Phase::Done(_) => {}
            }
            return self.phase;
        }

        let intent = self.robot.step(
            self.target.position(),
            &self.obstacles,
            self.config.grid_size,
        );
        self.tick = self.tick.next();
        log_move(self.tick, &intent);
        observer.on_move(self.tick, &intent);

        if self.tick.exhausts(self.config.max_movements) {
            self.finish(observer);
        }
        self.phase
    }

    /// Borrow the current state as a renderer snapshot.
    pub fn frame(&self) -> Frame<'_> {
        Frame {
            grid_size: self.config.grid_size,
            obstacles: &self.obstacles,
            robot:     self.robot.position(),
            path:      self.robot.path(),
            target:    self.target.position(),
            tick:      self.tick,
            terminal:  self.phase.is_done(),
        }
    }

    #[inline]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Seed that reproduces this run.
    #[inline]
    pub fn seed(&self) -> u64 {
        self.rng.seed()
    }

    /// Summary of the run so far.
    ///
    /// Before the terminal phase the outcome reflects what the run would
    /// report if it stopped now.
    pub fn summary(&self) -> RunSummary {
        RunSummary {
            outcome:      self.phase.outcome().unwrap_or_else(|| self.current_outcome()),
            movements:    self.tick.0,
            relocations:  self.relocations,
            final_robot:  self.robot.position(),
            final_target: self.target.position(),
            seed:         self.rng.seed(),
        }
    }

    // ── Transitions ───────────────────────────────────────────────────────

    fn relocate_target<O: SimObserver>(&mut self, observer: &mut O) {
        let from = self.target.position();
        let to = self.target.relocate(self.config.grid_size, &mut self.rng);
        self.relocations += 1;
        self.phase = Phase::TargetFoundFirst;
        info!(tick = self.tick.0, %from, %to, "target found; relocated");
        observer.on_relocated(from, to);
    }

    fn finish<O: SimObserver>(&mut self, observer: &mut O) {
        let outcome = self.current_outcome();
        self.phase = Phase::Done(outcome);
        let summary = self.summary();
        info!(
            %outcome,
            movements = summary.movements,
            relocations = summary.relocations,
            robot = %summary.final_robot,
            target = %summary.final_target,
            "simulation finished"
        );
        observer.on_finish(&self.frame(), &summary);
    }

    fn current_outcome(&self) -> Outcome {
        if self.robot.position() == self.target.position() {
            Outcome::Captured
        } else {
            Outcome::BudgetExhausted
        }
    }
}

fn log_move(tick: Tick, intent: &MoveIntent) {
    match *intent {
        MoveIntent::Advance { to, direction, distance } => {
            debug!(tick = tick.0, %to, %direction, distance, "advance");
        }
        MoveIntent::Backtrack { to } => {
            debug!(tick = tick.0, %to, "backtrack");
        }
        MoveIntent::Stuck => {
            warn!(tick = tick.0, "robot boxed in with nothing to backtrack to");
        }
    }
}
