//! Memory Access Types.
//!
//! This module defines the classification of memory accesses used throughout the simulator.
//! These types are used for the following:
//! 1. **Permission Validation:** Selecting the TLB permission bits checked by the MMU.
//! 2. **Fault Generation:** Choosing between the instruction-side and data-side exceptions.
//! 3. **Fast-Path Control:** Only fetches and reads refresh the one-entry translation memo.

/// Type of memory access operation.
///
/// Used to distinguish between instruction fetches, data loads, and data stores
/// for proper memory management and permission enforcement.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AccessType {
    /// Instruction fetch access.
    ///
    /// Checked against the execute-enable bits of the instruction MMU.
    Fetch,

    /// Data read access.
    ///
    /// Checked against the read-enable bits of the data MMU.
    Read,

    /// Data write access.
    ///
    /// Checked against the write-enable bits of the data MMU.
    Write,
}

impl AccessType {
    /// Returns `true` for store accesses.
    #[inline(always)]
    pub const fn is_write(self) -> bool {
        matches!(self, Self::Write)
    }
}
