//! Simulation driver, trace loading and trace output.
//!
//! Loads an input trace, replays it against the TLB model, and records the
//! per-request outcome to an optional trace sink.

pub mod loader;
pub mod simulator;
pub mod trace;

pub use simulator::{Simulator, run_simulation};
