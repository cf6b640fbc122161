//! Controller phases and the end-of-run summary.

use std::fmt;

use bg_core::Position;

/// How a finished run ended.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Outcome {
    /// The agent shares a cell with the target.
    Captured,
    /// The movement budget ran out with the agent elsewhere.
    BudgetExhausted,
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::Captured        => f.write_str("captured"),
            Outcome::BudgetExhausted => f.write_str("budget exhausted"),
        }
    }
}

/// The controller's state machine.
///
/// ```text
///   Running ──(first arrival: relocate, free tick)──▶ TargetFoundFirst
///      │                                                   │
///      │ budget spent                    second arrival /  │ budget spent
///      ▼                                                   ▼
///   Done(outcome) ◀─────────────────────────────────────────
/// ```
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Phase {
    /// Pursuing the target at its original cell.
    Running,
    /// The target has relocated once; the next arrival ends the run.
    TargetFoundFirst,
    /// Terminal.
    Done(Outcome),
}

impl Phase {
    #[inline]
    pub fn is_done(self) -> bool {
        matches!(self, Phase::Done(_))
    }

    #[inline]
    pub fn outcome(self) -> Option<Outcome> {
        match self {
            Phase::Done(o) => Some(o),
            _ => None,
        }
    }
}

/// What a finished run reports back to its caller.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RunSummary {
    pub outcome:      Outcome,
    /// Moves applied (budget units consumed).
    pub movements:    u64,
    /// 0 or 1.
    pub relocations:  u32,
    pub final_robot:  Position,
    pub final_target: Position,
    /// Seed that reproduces this run.
    pub seed:         u64,
}
