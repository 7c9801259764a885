//! Common types used throughout the TLB simulator.
//!
//! This module provides the building blocks shared by every component:
//! 1. **Address Types:** Strong types for virtual and physical addresses.
//! 2. **Requests:** The memory request record a trace line decodes into.
//! 3. **Error Handling:** Configuration, parse and run error types.

/// Address type definitions (physical and virtual addresses).
pub mod addr;

/// Error types for configuration, parsing and simulation runs.
pub mod error;

/// Memory request records.
pub mod request;

pub use addr::{PhysAddr, VirtAddr};
pub use error::{ConfigError, ParseError, ParseErrorKind, SimError};
pub use request::{AccessType, MemoryRequest};
