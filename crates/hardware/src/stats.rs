//! Simulation result collection and reporting.
//!
//! This module holds the aggregate counters a run produces. It provides:
//! 1. **Counters:** Cycles consumed, TLB hits and misses.
//! 2. **Cost:** The primitive gate count of the modeled TLB.
//! 3. **Completion:** Distinguishes a drained trace from one cut off by the cycle budget.
//! 4. **Reporting:** The console summary and a JSON form for tooling.

use serde::Serialize;

/// Cycle count reported when the cycle budget ran out before the trace drained.
pub const INCOMPLETE_CYCLES: usize = usize::MAX;

/// Aggregate counters for one simulation run.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
pub struct SimulationResult {
    /// Total cycles consumed, or [`INCOMPLETE_CYCLES`] if the trace did not drain.
    pub cycles: usize,
    /// Number of TLB hits.
    pub hits: usize,
    /// Number of TLB misses.
    pub misses: usize,
    /// Estimated primitive gates of the modeled TLB.
    pub primitive_gate_count: usize,
}

impl SimulationResult {
    /// Returns true if every request was processed within the cycle budget.
    pub const fn is_complete(&self) -> bool {
        self.cycles != INCOMPLETE_CYCLES
    }

    /// Number of requests actually processed.
    pub const fn accesses(&self) -> usize {
        self.hits + self.misses
    }

    /// Hit rate in percent, or 0 when nothing was processed.
    pub fn hit_rate(&self) -> f64 {
        let total = self.accesses();
        if total == 0 {
            0.0
        } else {
            (self.hits as f64 / total as f64) * 100.0
        }
    }

    /// Renders the four summary lines printed at the end of a run.
    pub fn summary(&self) -> String {
        format!(
            "Cycles: {}\nHits: {}\nMisses: {}\nPrimitive Gate Count: {}\n",
            self.cycles, self.hits, self.misses, self.primitive_gate_count
        )
    }

    /// Prints the summary to stdout.
    pub fn print(&self) {
        print!("{}", self.summary());
    }
}
