//! Gate count estimate tests.

use pretty_assertions::assert_eq;
use proptest::prelude::*;
use tlbsim_core::SimulationConfig;
use tlbsim_core::cost::{GATES_PER_ENTRY, gates_for_entries, primitive_gate_count};

use crate::common::harness::scenario_config;

#[test]
fn four_entry_tlb() {
    assert_eq!(primitive_gate_count(&scenario_config()), 2640);
}

#[test]
fn per_entry_cost() {
    assert_eq!(GATES_PER_ENTRY, 410);
    assert_eq!(gates_for_entries(0), 1000);
    assert_eq!(gates_for_entries(32), 1000 + 32 * 410);
}

#[test]
fn only_tlb_size_contributes() {
    let base = scenario_config();
    let other = SimulationConfig {
        cycles: 1,
        block_size: 4096,
        v2b_block_offset: 77,
        tlb_latency: 9,
        memory_latency: 300,
        ..base.clone()
    };
    assert_eq!(primitive_gate_count(&base), primitive_gate_count(&other));
}

proptest! {
    #[test]
    fn doubling_adds_n_entries(log2 in 0u32..16) {
        let n = 1usize << log2;
        prop_assert_eq!(gates_for_entries(2 * n) - gates_for_entries(n), n * 410);
    }
}
