//! `bg-sim` — tick loop controller for the beacon grid simulator.
//!
//! # Tick loop
//!
//! ```text
//! while phase != Done:
//!   ① Render   — observer.on_tick(frame)
//!   ② Arrival  — robot on target?
//!                  Running          → relocate target, TargetFoundFirst
//!                                     (no budget consumed)
//!                  TargetFoundFirst → Done(Captured)
//!   ③ Move     — robot.plan_move + apply, tick += 1
//!                  tick == max_movements → Done(outcome)
//! ```
//!
//! Single-threaded and synchronous.  Randomness is drawn only while building
//! the layout and during the one relocation, so a seed fully determines the
//! run.
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use bg_core::GridConfig;
//! use bg_sim::{NoopObserver, SimBuilder};
//!
//! let mut sim = SimBuilder::new(GridConfig::default()).seed(42).build()?;
//! let summary = sim.run(&mut NoopObserver);
//! println!("{}", summary.outcome);
//! ```

pub mod builder;
pub mod error;
pub mod frame;
pub mod observer;
pub mod phase;
pub mod sim;


pub use builder::{DEFAULT_SEED, SimBuilder};
pub use error::{SimError, SimResult};
pub use frame::Frame;
pub use observer::{NoopObserver, SimObserver};
pub use phase::{Outcome, Phase, RunSummary};
pub use sim::Sim;
