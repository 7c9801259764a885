//! Trace-driven TLB simulator library.
//!
//! This crate replays a trace of memory accesses against a direct-mapped
//! Translation Lookaside Buffer and reports aggregate counters:
//! 1. **Model:** Direct-mapped TLB lookup and install over 32-bit addresses.
//! 2. **Driver:** Cycle accounting against a fixed budget, hit/miss
//!    classification and completion detection.
//! 3. **Cost:** A deterministic primitive gate estimate for the TLB circuit.
//! 4. **I/O:** Trace-file loading, JSON configuration and hit/miss trace output.
//!
//! ```
//! use tlbsim_core::{MemoryRequest, SimulationConfig, run_simulation};
//!
//! let config = SimulationConfig {
//!     cycles: 100,
//!     block_size: 16,
//!     v2b_block_offset: 1,
//!     tlb_size: 4,
//!     tlb_latency: 2,
//!     memory_latency: 20,
//!     trace_file: None,
//! };
//! let requests = [MemoryRequest::read(0x1000), MemoryRequest::read(0x1000)];
//! let result = run_simulation(&config, &requests)?;
//! assert_eq!((result.cycles, result.hits, result.misses), (24, 1, 1));
//! # Ok::<(), tlbsim_core::SimError>(())
//! ```

/// Common types (addresses, requests, errors).
pub mod common;
/// Simulator configuration (defaults, validation, TLB geometry).
pub mod config;
/// Primitive gate cost estimate.
pub mod cost;
/// TLB model and miss-path translation.
pub mod mmu;
/// Trace loading, trace output and the simulation driver.
pub mod sim;
/// Simulation result counters and reporting.
pub mod stats;

pub use crate::common::{MemoryRequest, SimError};
/// Run configuration; use struct syntax, `SimulationConfig::default()` or load from JSON.
pub use crate::config::SimulationConfig;
/// Drives a request trace against the TLB.
pub use crate::sim::{Simulator, run_simulation};
pub use crate::stats::SimulationResult;
