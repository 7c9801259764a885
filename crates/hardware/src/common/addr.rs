//! Physical and Virtual Address types.
//!
//! This module defines strong types for the two 32-bit address spaces the TLB
//! sits between, so a virtual address can never be installed where a physical
//! page is expected. It provides the following:
//! 1. **Type Safety:** Distinguishes between virtual and physical addresses at compile time.
//! 2. **Field Extraction:** Splits an address into block offset, TLB index and tag.
//! 3. **Formatting:** Renders addresses as bare lowercase hex, the trace-file format.

use std::fmt;

/// A virtual address issued by a trace request.
///
/// Virtual addresses are looked up in the TLB; on a miss they are translated
/// with the fixed block-offset formula and installed.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct VirtAddr(pub u32);

/// A physical address produced by a TLB hit or a miss-path translation.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PhysAddr(pub u32);

impl VirtAddr {
    /// Creates a new virtual address from a raw 32-bit value.
    #[inline(always)]
    pub const fn new(addr: u32) -> Self {
        Self(addr)
    }

    /// Returns the raw 32-bit address value.
    #[inline(always)]
    pub const fn val(self) -> u32 {
        self.0
    }

    /// Extracts the byte offset within a block of `1 << offset_bits` bytes.
    #[inline(always)]
    pub const fn block_offset(self, offset_bits: u32) -> u32 {
        self.0 & low_mask(offset_bits)
    }

    /// Shifts the address right, yielding zero once every bit has been shifted out.
    #[inline(always)]
    pub const fn shifted(self, bits: u32) -> u32 {
        match self.0.checked_shr(bits) {
            Some(v) => v,
            None => 0,
        }
    }
}

impl PhysAddr {
    /// Creates a new physical address from a raw 32-bit value.
    #[inline(always)]
    pub const fn new(addr: u32) -> Self {
        Self(addr)
    }

    /// Returns the raw 32-bit address value.
    #[inline(always)]
    pub const fn val(self) -> u32 {
        self.0
    }

    /// Clears the low `offset_bits` bits, leaving the physical page base.
    #[inline(always)]
    pub const fn page_base(self, offset_bits: u32) -> Self {
        Self(self.0 & !low_mask(offset_bits))
    }
}

/// Mask of the low `bits` bits; saturates to all ones at 32.
#[inline(always)]
pub const fn low_mask(bits: u32) -> u32 {
    if bits >= u32::BITS {
        u32::MAX
    } else {
        (1u32 << bits) - 1
    }
}

impl fmt::Display for VirtAddr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:x}", self.0)
    }
}

impl fmt::Display for PhysAddr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:x}", self.0)
    }
}

impl fmt::LowerHex for VirtAddr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::LowerHex::fmt(&self.0, f)
    }
}

impl fmt::LowerHex for PhysAddr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::LowerHex::fmt(&self.0, f)
    }
}

impl From<u32> for VirtAddr {
    fn from(addr: u32) -> Self {
        Self(addr)
    }
}

impl From<u32> for PhysAddr {
    fn from(addr: u32) -> Self {
        Self(addr)
    }
}
