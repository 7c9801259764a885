//! Primitive gate count estimate for the modeled TLB circuit.
//!
//! A coarse hardware-cost proxy: fixed control logic, four gates per stored
//! bit, and one 32-bit adder per entry for page + offset reassembly.

use crate::config::SimulationConfig;

/// Gates for basic control circuitry, independent of TLB size.
pub const BASE_GATES: usize = 1000;

/// Stored bits per entry: 32-bit tag, 32-bit physical page, valid bit.
pub const BITS_PER_ENTRY: usize = 32 * 2 + 1;

/// Gates per stored bit.
pub const GATES_PER_STORAGE_BIT: usize = 4;

/// Gates for the per-entry 32-bit adder.
pub const DATAPATH_GATES_PER_ENTRY: usize = 150;

/// Gates added by each TLB entry (storage plus datapath).
pub const GATES_PER_ENTRY: usize = BITS_PER_ENTRY * GATES_PER_STORAGE_BIT + DATAPATH_GATES_PER_ENTRY;

/// Estimates the primitive gate count of a TLB with `entries` slots.
pub const fn gates_for_entries(entries: usize) -> usize {
    let storage = entries * BITS_PER_ENTRY * GATES_PER_STORAGE_BIT;
    let datapath = entries * DATAPATH_GATES_PER_ENTRY;
    BASE_GATES + storage + datapath
}

/// Estimates the primitive gate count for a configuration.
///
/// Only the TLB size contributes. Block size, offset and latencies are part
/// of the signature but do not currently change the estimate.
pub const fn primitive_gate_count(config: &SimulationConfig) -> usize {
    gates_for_entries(config.tlb_size as usize)
}
