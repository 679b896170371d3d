//! Physical and Virtual Address types.
//!
//! This module defines strong types for physical and virtual addresses to prevent
//! accidental mixing of address spaces. It provides the following:
//! 1. **Type Safety:** Distinguishes between virtual and physical address spaces at compile time.
//! 2. **Address Manipulation:** Helper methods for page numbers, page offsets and raw values.
//! 3. **MMU Integration:** The input and output types of every translation.

use super::constants::{MAX_RAM_ADDRESS, PAGE_MASK, PAGE_OFFSET_MASK, PAGE_SHIFT};

/// A virtual (effective) address computed by an instruction.
///
/// Virtual addresses must be translated to physical addresses by the
/// instruction or data MMU before accessing memory.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct VirtAddr(pub u32);

/// A physical address on the system bus.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
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

    /// Returns the virtual page number (address bits 13-31).
    #[inline(always)]
    pub const fn page_number(self) -> u32 {
        self.0 >> PAGE_SHIFT
    }

    /// Returns the page-aligned part of the address.
    #[inline(always)]
    pub const fn page_base(self) -> u32 {
        self.0 & PAGE_MASK
    }

    /// Extracts the byte offset within the 8 KiB page.
    #[inline(always)]
    pub const fn page_offset(self) -> u32 {
        self.0 & PAGE_OFFSET_MASK
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

    /// Returns `true` when the address is backed by RAM rather than a device.
    #[inline(always)]
    pub const fn is_ram(self) -> bool {
        self.0 <= MAX_RAM_ADDRESS
    }
}
