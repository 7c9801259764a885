//! # Configuration Tests
//!
//! Tests for configuration defaults, JSON deserialization, validation and
//! TLB geometry derivation.

use std::io::Write;
use std::path::PathBuf;

use pretty_assertions::assert_eq;
use rstest::rstest;
use tempfile::NamedTempFile;
use tlbsim_core::SimError;
use tlbsim_core::common::ConfigError;
use tlbsim_core::config::{SimulationConfig, TlbGeometry};

use crate::common::harness::scenario_config;

#[test]
fn test_config_default() {
    let config = SimulationConfig::default();
    assert_eq!(config.cycles, 1_000_000);
    assert_eq!(config.block_size, 4096);
    assert_eq!(config.v2b_block_offset, 0);
    assert_eq!(config.tlb_size, 32);
    assert_eq!(config.tlb_latency, 1);
    assert_eq!(config.memory_latency, 100);
    assert_eq!(config.trace_file, None);
    assert!(config.validate().is_ok());
}

#[test]
fn test_unset_fails_on_first_parameter() {
    assert_eq!(
        SimulationConfig::unset().validate(),
        Err(ConfigError::ZeroParameter("cycles"))
    );
}

#[test]
fn test_json_empty_object_uses_defaults() {
    let config = SimulationConfig::from_json_str("{}").unwrap();
    assert_eq!(config, SimulationConfig::default());
}

#[test]
fn test_json_partial_override() {
    let json = r#"{
        "cycles": 500,
        "tlb_size": 8,
        "trace_file": "out.log"
    }"#;
    let config = SimulationConfig::from_json_str(json).unwrap();

    assert_eq!(config.cycles, 500);
    assert_eq!(config.tlb_size, 8);
    assert_eq!(config.block_size, 4096);
    assert_eq!(config.trace_file, Some(PathBuf::from("out.log")));
}

#[test]
fn test_json_malformed() {
    assert!(SimulationConfig::from_json_str("{ cycles: }").is_err());
    assert!(SimulationConfig::from_json_str(r#"{"cycles": -1}"#).is_err());
}

#[test]
fn test_json_file_roundtrip() {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(br#"{"block_size": 16, "memory_latency": 20}"#)
        .unwrap();
    file.flush().unwrap();

    let config = SimulationConfig::from_json_file(file.path()).unwrap();
    assert_eq!(config.block_size, 16);
    assert_eq!(config.memory_latency, 20);
}

#[test]
fn test_json_file_missing() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nope.json");

    match SimulationConfig::from_json_file(&path).unwrap_err() {
        SimError::ConfigFile { path: p, .. } => assert_eq!(p, path),
        other => panic!("expected config file error, got {other:?}"),
    }
}

#[test]
fn test_json_file_bad_contents() {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(b"not json").unwrap();
    file.flush().unwrap();

    let err = SimulationConfig::from_json_file(file.path()).unwrap_err();
    assert!(matches!(err, SimError::ConfigFile { .. }));
}

#[rstest]
#[case::cycles(SimulationConfig { cycles: 0, ..scenario_config() }, ConfigError::ZeroParameter("cycles"))]
#[case::block_zero(SimulationConfig { block_size: 0, ..scenario_config() }, ConfigError::ZeroParameter("blocksize"))]
#[case::tlb_zero(SimulationConfig { tlb_size: 0, ..scenario_config() }, ConfigError::ZeroParameter("tlb-size"))]
#[case::tlb_latency(SimulationConfig { tlb_latency: 0, ..scenario_config() }, ConfigError::ZeroParameter("tlb-latency"))]
#[case::memory_latency(SimulationConfig { memory_latency: 0, ..scenario_config() }, ConfigError::ZeroParameter("memory-latency"))]
#[case::block_not_pow2(SimulationConfig { block_size: 24, ..scenario_config() }, ConfigError::BlockSizeNotPowerOfTwo(24))]
#[case::tlb_not_pow2(SimulationConfig { tlb_size: 5, ..scenario_config() }, ConfigError::TlbSizeNotPowerOfTwo(5))]
fn test_validate_rejects(#[case] config: SimulationConfig, #[case] expected: ConfigError) {
    assert_eq!(config.validate(), Err(expected));
}

#[test]
fn test_zero_v2b_offset_is_valid() {
    let config = SimulationConfig {
        v2b_block_offset: 0,
        ..scenario_config()
    };
    assert!(config.validate().is_ok());
}

#[test]
fn test_scenario_geometry() {
    let geometry = scenario_config().validate().unwrap();
    assert_eq!(
        geometry,
        TlbGeometry {
            entries: 4,
            block_size: 16,
            offset_bits: 4,
            index_bits: 2,
            tag_bits: 26,
        }
    );
}

#[test]
fn test_geometry_error_display() {
    let err = TlbGeometry::new(1 << 20, 1 << 20).unwrap_err();
    assert_eq!(
        err,
        ConfigError::AddressTooNarrow {
            offset_bits: 20,
            index_bits: 20,
        }
    );
    assert!(!err.to_string().is_empty());
}
