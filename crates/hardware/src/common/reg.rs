//! General-purpose register numbers.
//!
//! Register operands are carried as a bounds-checked `Reg` rather than a bare
//! integer, so an out-of-range register number can only be produced through
//! [`Reg::new`], which rejects it.

use std::fmt;

/// Number of general-purpose registers.
pub const NUM_REGS: usize = 32;

/// A general-purpose register number in `0..=31`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Reg(u8);

impl Reg {
    /// Register 0. Writable like every other register.
    pub const R0: Self = Self(0);

    /// Link register written by `l.jal` and `l.jalr`.
    pub const LINK: Self = Self(9);

    /// Creates a register number, returning `None` if `n` is not in `0..=31`.
    #[inline]
    pub const fn new(n: u8) -> Option<Self> {
        if (n as usize) < NUM_REGS {
            Some(Self(n))
        } else {
            None
        }
    }

    /// Builds a register number from a 5-bit instruction field; higher bits are discarded.
    #[inline(always)]
    pub const fn from_field(bits: u32) -> Self {
        Self((bits & 0x1F) as u8)
    }

    /// Returns the register number as an array index.
    #[inline(always)]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// Returns the register number as its 5-bit encoding.
    #[inline(always)]
    pub const fn bits(self) -> u32 {
        self.0 as u32
    }

    /// Iterates over all 32 register numbers in order.
    pub fn all() -> impl Iterator<Item = Self> {
        (0..NUM_REGS as u8).map(Self)
    }
}

impl fmt::Display for Reg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "r{}", self.0)
    }
}
