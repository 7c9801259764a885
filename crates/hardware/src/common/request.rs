//! Memory Request Records.
//!
//! A trace is an ordered list of [`MemoryRequest`]s. The TLB is indexed by
//! address only, so the access type and data word ride along unchanged and
//! never influence hit/miss classification.

use super::addr::VirtAddr;

/// Type of memory access operation.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum AccessType {
    /// Data read access (`R`, or any type letter other than `W`).
    #[default]
    Read,

    /// Data write access (`W`).
    Write,
}

/// One line of an input trace.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct MemoryRequest {
    /// Virtual address being accessed.
    pub addr: VirtAddr,
    /// Data word carried by the request (0 when the trace omits it).
    pub data: u32,
    /// Read or write.
    pub access: AccessType,
}

impl MemoryRequest {
    /// Creates a read request for `addr`.
    pub const fn read(addr: u32) -> Self {
        Self {
            addr: VirtAddr(addr),
            data: 0,
            access: AccessType::Read,
        }
    }

    /// Creates a write request storing `data` at `addr`.
    pub const fn write(addr: u32, data: u32) -> Self {
        Self {
            addr: VirtAddr(addr),
            data,
            access: AccessType::Write,
        }
    }

    /// Returns true for write requests.
    #[inline]
    pub const fn is_write(&self) -> bool {
        matches!(self.access, AccessType::Write)
    }
}
