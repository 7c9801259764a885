//! Memory Management Unit (MMU).
//!
//! Holds the direct-mapped [`Tlb`](tlb::Tlb) and the fixed-formula translation
//! that stands in for a page-table walk on a TLB miss.

/// Translation Lookaside Buffer (TLB) for caching virtual-to-physical address translations.
pub mod tlb;

use crate::common::{PhysAddr, VirtAddr};

/// Translates a virtual address by shifting it `v2b_block_offset` blocks up.
///
/// `paddr = vaddr + v2b_block_offset * block_size`, with 32-bit wrapping
/// arithmetic throughout.
#[inline]
pub const fn translate(vaddr: VirtAddr, v2b_block_offset: u32, block_size: u32) -> PhysAddr {
    PhysAddr(
        vaddr
            .val()
            .wrapping_add(v2b_block_offset.wrapping_mul(block_size)),
    )
}
