//! Error definitions.
//!
//! Every fatal condition of a simulation run is reported through these types.
//! It provides:
//! 1. **Configuration errors:** Parameters that make the TLB geometry meaningless.
//! 2. **Parse errors:** Trace-file lines that cannot be turned into a request.
//! 3. **Run errors:** The umbrella [`SimError`], which also covers I/O on the
//!    input trace, the config file and the trace sink.
//!
//! Running out of cycle budget is not an error; it is reported through
//! [`SimulationResult::is_complete`](crate::stats::SimulationResult::is_complete).

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// A configuration that cannot be simulated.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// A required parameter is zero (or was never supplied).
    #[error("parameter `{0}` must be set and greater than zero")]
    ZeroParameter(&'static str),

    /// The block size is not a power of two.
    #[error("block size must be a power of two, got {0}")]
    BlockSizeNotPowerOfTwo(u32),

    /// The TLB entry count is not a power of two.
    #[error("TLB size must be a power of two, got {0}")]
    TlbSizeNotPowerOfTwo(u32),

    /// Offset and index bits together do not fit in a 32-bit address.
    #[error("offset bits ({offset_bits}) + index bits ({index_bits}) exceed 32")]
    AddressTooNarrow {
        /// log2 of the block size.
        offset_bits: u32,
        /// log2 of the TLB entry count.
        index_bits: u32,
    },
}

/// Reason a trace line was rejected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseErrorKind {
    /// Fewer than the two required whitespace-separated tokens.
    #[error("expected `<R|W> <hex address> [<hex data>]`, found {0} token(s)")]
    TooFewTokens(usize),

    /// The address token is not a 32-bit hex number.
    #[error("invalid hex address `{0}`")]
    BadAddress(String),
}

/// A malformed line in an input trace.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid format in input trace at line {line}: {kind}")]
pub struct ParseError {
    /// 1-based line number.
    pub line: usize,
    /// What was wrong with it.
    pub kind: ParseErrorKind,
}

/// Any fatal error that aborts a simulation run.
#[derive(Debug, Error)]
pub enum SimError {
    /// The configuration was rejected before any request was processed.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// The input trace contained a malformed line.
    #[error(transparent)]
    Parse(#[from] ParseError),

    /// The input trace could not be read.
    #[error("error opening input trace {}: {source}", path.display())]
    Input {
        /// Path of the trace file.
        path: PathBuf,
        /// Underlying I/O failure.
        #[source]
        source: io::Error,
    },

    /// A JSON configuration file could not be read or decoded.
    #[error("error loading config {}: {source}", path.display())]
    ConfigFile {
        /// Path of the config file.
        path: PathBuf,
        /// Underlying read or decode failure.
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    /// The trace output file could not be opened for writing.
    #[error("error opening trace file {}: {source}", path.display())]
    TraceOpen {
        /// Path of the trace output.
        path: PathBuf,
        /// Underlying I/O failure.
        #[source]
        source: io::Error,
    },

    /// Writing a trace record failed mid-run.
    #[error("error writing trace record: {0}")]
    TraceWrite(#[source] io::Error),
}
