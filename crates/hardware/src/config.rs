//! Configuration for the TLB simulator.
//!
//! This module defines the single immutable parameter set of a simulation run.
//! It provides:
//! 1. **Defaults:** Baseline values used when a JSON config omits a field.
//! 2. **Structure:** [`SimulationConfig`], deserializable from JSON.
//! 3. **Validation:** The checks every run performs before touching a request,
//!    and the [`TlbGeometry`] they produce.
//!
//! Configuration is supplied via JSON (`SimulationConfig::from_json_file`), built
//! by the command-line front end, or constructed directly with struct syntax.

use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::common::{ConfigError, SimError};

/// Default configuration constants for the simulator.
///
/// These values apply only when a JSON configuration omits a field.
mod defaults {
    /// Cycle budget for a run.
    pub const CYCLES: u64 = 1_000_000;

    /// Block (page) size in bytes (4 KiB).
    pub const BLOCK_SIZE: u32 = 4096;

    /// Virtual-to-physical block offset used by the miss-path translation.
    pub const V2B_BLOCK_OFFSET: u32 = 0;

    /// Translation Lookaside Buffer entry count.
    pub const TLB_SIZE: u32 = 32;

    /// TLB lookup latency in cycles.
    pub const TLB_LATENCY: u32 = 1;

    /// Memory access latency in cycles, paid on every TLB miss.
    pub const MEMORY_LATENCY: u32 = 100;
}

/// Parameters of one simulation run.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct SimulationConfig {
    /// Cycle budget: the number of clock ticks the run may advance through.
    #[serde(default = "SimulationConfig::default_cycles")]
    pub cycles: u64,

    /// Block size in bytes; must be a power of two.
    #[serde(default = "SimulationConfig::default_block_size")]
    pub block_size: u32,

    /// Number of blocks a virtual address is shifted by on translation.
    #[serde(default = "SimulationConfig::default_v2b_block_offset")]
    pub v2b_block_offset: u32,

    /// TLB entry count; must be a power of two.
    #[serde(default = "SimulationConfig::default_tlb_size")]
    pub tlb_size: u32,

    /// Cycles charged for every TLB lookup.
    #[serde(default = "SimulationConfig::default_tlb_latency")]
    pub tlb_latency: u32,

    /// Additional cycles charged on every TLB miss.
    #[serde(default = "SimulationConfig::default_memory_latency")]
    pub memory_latency: u32,

    /// Optional path of the hit/miss trace output.
    #[serde(default)]
    pub trace_file: Option<PathBuf>,
}

impl SimulationConfig {
    fn default_cycles() -> u64 {
        defaults::CYCLES
    }

    fn default_block_size() -> u32 {
        defaults::BLOCK_SIZE
    }

    fn default_v2b_block_offset() -> u32 {
        defaults::V2B_BLOCK_OFFSET
    }

    fn default_tlb_size() -> u32 {
        defaults::TLB_SIZE
    }

    fn default_tlb_latency() -> u32 {
        defaults::TLB_LATENCY
    }

    fn default_memory_latency() -> u32 {
        defaults::MEMORY_LATENCY
    }

    /// Returns a configuration with every parameter unset (zero).
    ///
    /// Used by front ends that require each parameter to be supplied
    /// explicitly; anything left unset fails [`validate`](Self::validate).
    pub const fn unset() -> Self {
        Self {
            cycles: 0,
            block_size: 0,
            v2b_block_offset: 0,
            tlb_size: 0,
            tlb_latency: 0,
            memory_latency: 0,
            trace_file: None,
        }
    }

    /// Parses a configuration from a JSON document.
    ///
    /// Missing fields take their defaults. The result is not validated.
    ///
    /// # Errors
    ///
    /// Returns the `serde_json` error if the document is malformed.
    pub fn from_json_str(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Reads and parses a JSON configuration file.
    ///
    /// # Errors
    ///
    /// Returns [`SimError::ConfigFile`] if the file cannot be read or decoded.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, SimError> {
        let path = path.as_ref();
        let wrap = |source: Box<dyn std::error::Error + Send + Sync>| SimError::ConfigFile {
            path: path.to_path_buf(),
            source,
        };
        let text = fs::read_to_string(path).map_err(|e| wrap(Box::new(e)))?;
        Self::from_json_str(&text).map_err(|e| wrap(Box::new(e)))
    }

    /// Checks every parameter and derives the TLB geometry.
    ///
    /// # Errors
    ///
    /// - [`ConfigError::ZeroParameter`] if the cycle budget, block size, TLB
    ///   size, TLB latency or memory latency is zero.
    /// - [`ConfigError::BlockSizeNotPowerOfTwo`] /
    ///   [`ConfigError::TlbSizeNotPowerOfTwo`] for non power-of-two sizes.
    /// - [`ConfigError::AddressTooNarrow`] if the offset and index fields do
    ///   not fit in a 32-bit address.
    pub fn validate(&self) -> Result<TlbGeometry, ConfigError> {
        let required: [(&'static str, u64); 5] = [
            ("cycles", self.cycles),
            ("blocksize", u64::from(self.block_size)),
            ("tlb-size", u64::from(self.tlb_size)),
            ("tlb-latency", u64::from(self.tlb_latency)),
            ("memory-latency", u64::from(self.memory_latency)),
        ];
        if let Some(&(name, _)) = required.iter().find(|(_, v)| *v == 0) {
            return Err(ConfigError::ZeroParameter(name));
        }
        TlbGeometry::new(self.tlb_size, self.block_size)
    }
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            cycles: defaults::CYCLES,
            block_size: defaults::BLOCK_SIZE,
            v2b_block_offset: defaults::V2B_BLOCK_OFFSET,
            tlb_size: defaults::TLB_SIZE,
            tlb_latency: defaults::TLB_LATENCY,
            memory_latency: defaults::MEMORY_LATENCY,
            trace_file: None,
        }
    }
}

/// How a 32-bit virtual address splits into tag, index and offset fields.
///
/// ```text
///  31                                             0
/// +----------------+-----------------+-------------+
/// |  tag_bits      |  index_bits     | offset_bits |
/// +----------------+-----------------+-------------+
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TlbGeometry {
    /// Number of TLB entries.
    pub entries: u32,
    /// Block size in bytes.
    pub block_size: u32,
    /// `log2(block_size)`.
    pub offset_bits: u32,
    /// `log2(entries)`.
    pub index_bits: u32,
    /// `32 - index_bits - offset_bits`.
    pub tag_bits: u32,
}

impl TlbGeometry {
    /// Derives the field widths for a TLB of `entries` slots over
    /// `block_size`-byte blocks.
    ///
    /// # Errors
    ///
    /// Rejects sizes that are not powers of two (zero included) and
    /// geometries whose offset and index fields exceed 32 bits.
    pub fn new(entries: u32, block_size: u32) -> Result<Self, ConfigError> {
        if !block_size.is_power_of_two() {
            return Err(ConfigError::BlockSizeNotPowerOfTwo(block_size));
        }
        if !entries.is_power_of_two() {
            return Err(ConfigError::TlbSizeNotPowerOfTwo(entries));
        }
        let offset_bits = block_size.trailing_zeros();
        let index_bits = entries.trailing_zeros();
        if offset_bits + index_bits > u32::BITS {
            return Err(ConfigError::AddressTooNarrow {
                offset_bits,
                index_bits,
            });
        }
        Ok(Self {
            entries,
            block_size,
            offset_bits,
            index_bits,
            tag_bits: u32::BITS - offset_bits - index_bits,
        })
    }
}
