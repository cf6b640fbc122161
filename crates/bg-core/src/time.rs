//! Simulation time model.
//!
//! Time is a monotonically increasing `Tick` counter that advances once per
//! applied move.  The free relocation step after the first arrival does not
//! advance it, so `Tick` doubles as the number of movement-budget units
//! consumed so far.

use std::fmt;

/// Number of moves applied since the start of the run.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Tick(pub u64);

impl Tick {
    pub const ZERO: Tick = Tick(0);

    /// The tick after `self`.
    #[inline]
    pub fn next(self) -> Tick {
        Tick(self.0 + 1)
    }

    /// `true` once `self` has used up a budget of `max_movements` moves.
    #[inline]
    pub fn exhausts(self, max_movements: u64) -> bool {
        self.0 >= max_movements
    }
}

impl std::ops::Add<u64> for Tick {
    type Output = Tick;
    #[inline]
    fn add(self, rhs: u64) -> Tick {
        Tick(self.0 + rhs)
    }
}

impl std::ops::Sub for Tick {
    type Output = u64;
    #[inline]
    fn sub(self, rhs: Tick) -> u64 {
        self.0 - rhs.0
    }
}

impl fmt::Display for Tick {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "T{}", self.0)
    }
}
