//! OpenRISC General-Purpose Register File.
//!
//! This module implements the General-Purpose Register (GPR) file. It performs the following:
//! 1. **Storage:** Maintains 32 integer registers (`r0`-`r31`).
//! 2. **Indexing:** Accepts only the bounds-checked [`Reg`] newtype, so no access can miss.
//! 3. **Debugging:** Provides utilities for dumping the complete register state.
//!
//! `r0` is not hardwired: software conventionally keeps it zero, but the
//! register file stores whatever is written to it.

use std::fmt::Write;

use crate::common::Reg;
use crate::common::reg::NUM_REGS;

/// General-Purpose Register file.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Gpr {
    regs: [u32; NUM_REGS],
}

impl Gpr {
    /// Creates a new general-purpose register file with all registers initialized to zero.
    pub const fn new() -> Self {
        Self {
            regs: [0; NUM_REGS],
        }
    }

    /// Reads a general-purpose register value.
    #[inline(always)]
    pub const fn read(&self, reg: Reg) -> u32 {
        self.regs[reg.index()]
    }

    /// Writes a value to a general-purpose register.
    #[inline(always)]
    pub fn write(&mut self, reg: Reg, val: u32) {
        self.regs[reg.index()] = val;
    }

    /// Zeroes every register.
    pub fn clear(&mut self) {
        self.regs = [0; NUM_REGS];
    }

    /// Renders all registers, four per line, as hexadecimal.
    ///
    /// # Returns
    ///
    /// A multi-line string such as `r0 =0x00000000 r1 =0x00000010 ...`.
    pub fn dump(&self) -> String {
        let mut out = String::new();
        for (row, chunk) in self.regs.chunks(4).enumerate() {
            for (col, val) in chunk.iter().enumerate() {
                let idx = row * 4 + col;
                let _ = write!(out, "r{idx:<2}={val:#010x} ");
            }
            out.push('\n');
        }
        out
    }
}
