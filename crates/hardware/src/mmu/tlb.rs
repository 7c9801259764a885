//! Translation Lookaside Buffer (TLB).
//!
//! A direct-mapped cache of block translations. Each virtual address selects
//! exactly one slot by its index bits; the slot holds the tag of whichever
//! block last missed there and the physical page it translated to.
//!
//! Replacement is an unconditional overwrite of that slot. There is no flush:
//! an entry only becomes invalid again when the TLB is rebuilt.

use crate::common::{ConfigError, PhysAddr, VirtAddr};
use crate::config::TlbGeometry;

/// A single entry in the TLB.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TlbEntry {
    /// Upper address bits identifying the cached block.
    pub tag: u32,
    /// Physical page base (low offset bits cleared).
    pub physical_page: u32,
    /// Entry validity flag.
    pub valid: bool,
}

/// Direct-mapped Translation Lookaside Buffer.
#[derive(Clone, Debug)]
pub struct Tlb {
    entries: Vec<TlbEntry>,
    geometry: TlbGeometry,
    /// Mask used for indexing (entries - 1).
    index_mask: u32,
}

impl Tlb {
    /// Creates an empty TLB of `entries` slots over `block_size`-byte blocks.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] if either size is not a power of two or the
    /// combined offset and index fields do not fit in 32 bits.
    pub fn new(entries: u32, block_size: u32) -> Result<Self, ConfigError> {
        TlbGeometry::new(entries, block_size).map(Self::with_geometry)
    }

    /// Creates an empty TLB from an already validated geometry.
    pub fn with_geometry(geometry: TlbGeometry) -> Self {
        Self {
            entries: vec![TlbEntry::default(); geometry.entries as usize],
            geometry,
            index_mask: geometry.entries - 1,
        }
    }

    /// Returns the address field layout of this TLB.
    pub const fn geometry(&self) -> &TlbGeometry {
        &self.geometry
    }

    /// Number of slots.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// A TLB always has at least one slot.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns the slot `vaddr` maps to.
    #[inline(always)]
    pub const fn index_of(&self, vaddr: VirtAddr) -> usize {
        (vaddr.shifted(self.geometry.offset_bits) & self.index_mask) as usize
    }

    /// Returns the tag stored for `vaddr`.
    #[inline(always)]
    pub const fn tag_of(&self, vaddr: VirtAddr) -> u32 {
        vaddr.shifted(self.geometry.offset_bits + self.geometry.index_bits)
    }

    /// Returns the entry currently held in `index`, if the index is in range.
    pub fn entry(&self, index: usize) -> Option<&TlbEntry> {
        self.entries.get(index)
    }

    /// Looks up a virtual address.
    ///
    /// # Returns
    ///
    /// `Some(paddr)` on a hit, where `paddr` is the stored physical page plus
    /// the block offset of `vaddr`. `None` on a miss (slot invalid or tag
    /// mismatch).
    #[inline]
    pub fn lookup(&self, vaddr: VirtAddr) -> Option<PhysAddr> {
        let entry = &self.entries[self.index_of(vaddr)];

        if entry.valid && entry.tag == self.tag_of(vaddr) {
            let offset = vaddr.block_offset(self.geometry.offset_bits);
            return Some(PhysAddr(entry.physical_page.wrapping_add(offset)));
        }
        None
    }

    /// Installs the translation `vaddr -> paddr`, overwriting whatever
    /// occupied the slot.
    pub fn install(&mut self, vaddr: VirtAddr, paddr: PhysAddr) {
        let idx = self.index_of(vaddr);

        self.entries[idx] = TlbEntry {
            tag: self.tag_of(vaddr),
            physical_page: paddr.page_base(self.geometry.offset_bits).val(),
            valid: true,
        };
    }

    /// Number of valid entries.
    pub fn occupancy(&self) -> usize {
        self.entries.iter().filter(|e| e.valid).count()
    }
}
