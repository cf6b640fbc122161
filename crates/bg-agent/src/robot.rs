//! The agent and its greedy, revisit-limited move decision.

use bg_core::{Direction, Position};
use bg_world::ObstacleSet;

use crate::{BoundedHistory, MoveIntent, VisitLog};

/// A cell may be entered while it has been visited fewer than this many
/// times: one retreat through a cell is allowed, a third pass is not.
pub const MAX_VISITS_PER_CELL: u32 = 2;

/// The mobile agent.
///
/// Invariants:
/// - `path` is never empty and its newest entry is always `position`.
/// - Every cell the agent advances into is recorded in `visits`; backtracking
///   is not.
#[derive(Clone, Debug)]
pub struct Robot {
    position: Position,
    path:     BoundedHistory<Position>,
    visits:   VisitLog,
}

impl Robot {
    /// Create an agent at `start` with the given history capacities.
    ///
    /// The start cell seeds both the path and the visit history.
    pub fn new(start: Position, max_path_length: usize, max_visited_length: usize) -> Self {
        let mut path = BoundedHistory::new(max_path_length);
        path.push(start);
        let mut visits = VisitLog::new(max_visited_length);
        visits.record(start);
        Self {
            position: start,
            path,
            visits,
        }
    }

    // ── Queries ───────────────────────────────────────────────────────────

    #[inline]
    pub fn position(&self) -> Position {
        self.position
    }

    /// The current walk, oldest → newest.  Used as the backtracking stack.
    #[inline]
    pub fn path(&self) -> &BoundedHistory<Position> {
        &self.path
    }

    #[inline]
    pub fn path_len(&self) -> usize {
        self.path.len()
    }

    #[inline]
    pub fn visits(&self) -> &VisitLog {
        &self.visits
    }

    #[inline]
    pub fn visit_count(&self, pos: Position) -> u32 {
        self.visits.count(pos)
    }

    /// Straight-line distance to `target`, for reporting only.
    #[inline]
    pub fn distance_to(&self, target: Position) -> f64 {
        self.position.euclidean(target)
    }

    /// `true` if `pos` is in bounds, not an obstacle, and under the revisit
    /// cap.
    pub fn can_enter(&self, pos: Position, obstacles: &ObstacleSet, grid_size: u32) -> bool {
        pos.in_bounds(grid_size)
            && !obstacles.contains(pos)
            && self.visits.count(pos) < MAX_VISITS_PER_CELL
    }

    // ── Decision ──────────────────────────────────────────────────────────

    /// Decide this tick's move without committing it.
    ///
    /// Picks the valid neighbour with the smallest Manhattan distance to
    /// `target`; ties go to the earliest neighbour in [`Direction::ALL`]
    /// order.  With no valid neighbour the agent backtracks, or is stuck if
    /// the path holds a single entry.
    pub fn plan_move(&self, target: Position, obstacles: &ObstacleSet, grid_size: u32) -> MoveIntent {
        let mut best: Option<(Position, Direction, u32)> = None;

        for dir in Direction::ALL {
            let candidate = self.position.step(dir);
            if !self.can_enter(candidate, obstacles, grid_size) {
                continue;
            }
            let distance = candidate.manhattan(target);
            // Strict `<` keeps the first-enumerated candidate on ties.
            if best.is_none_or(|(_, _, d)| distance < d) {
                best = Some((candidate, dir, distance));
            }
        }

        match best {
            Some((to, direction, distance)) => MoveIntent::Advance { to, direction, distance },
            None => self.backtrack_target().map_or(MoveIntent::Stuck, |to| MoveIntent::Backtrack { to }),
        }
    }

    /// Commit `intent` to position, path and visit history.
    pub fn apply(&mut self, intent: MoveIntent) {
        match intent {
            MoveIntent::Advance { to, .. } => {
                self.position = to;
                self.path.push(to);
                self.visits.record(to);
            }
            MoveIntent::Backtrack { to } => {
                if self.path.len() > 1 {
                    self.path.pop_back();
                }
                if let Some(&tail) = self.path.last() {
                    debug_assert_eq!(tail, to, "backtrack intent is stale");
                    self.position = tail;
                }
            }
            MoveIntent::Stuck => {}
        }
    }

    /// Plan and apply in one call.  Returns the applied intent.
    pub fn step(&mut self, target: Position, obstacles: &ObstacleSet, grid_size: u32) -> MoveIntent {
        let intent = self.plan_move(target, obstacles, grid_size);
        self.apply(intent);
        intent
    }

    /// The cell a backtrack would return to, if the path allows one.
    fn backtrack_target(&self) -> Option<Position> {
        match self.path.len() {
            0 | 1 => None,
            len => self.path.get(len - 2).copied(),
        }
    }
}
