//! Data Memory Access.
//!
//! This module routes load and store instructions through the data MMU at the current
//! privilege level. It performs the following:
//! 1. **Width Selection:** Byte, half-word and word accesses per `LoadOp`/`StoreOp`.
//! 2. **Extension:** Zero or sign extension of narrow loads to 32 bits.
//! 3. **Truncation:** Narrow stores write the low bits of the source register.

use super::Cpu;
use crate::common::{ExceptionKind, VirtAddr};
use crate::isa::instruction::{LoadOp, StoreOp};

impl Cpu {
    /// Performs a load at effective address `ea`.
    ///
    /// # Returns
    ///
    /// The extended 32-bit value, or the alignment/translation/bus exception.
    pub fn load(&mut self, op: LoadOp, ea: u32) -> Result<u32, ExceptionKind> {
        let vaddr = VirtAddr::new(ea);
        let privilege = self.privilege();
        let bus = &mut self.bus;
        Ok(match op {
            LoadOp::Lwz => self.dmmu.load32(bus, vaddr, privilege)?,
            LoadOp::Lbz => self.dmmu.load8(bus, vaddr, privilege)? as u32,
            LoadOp::Lbs => self.dmmu.load8(bus, vaddr, privilege)? as i8 as i32 as u32,
            LoadOp::Lhz => self.dmmu.load16(bus, vaddr, privilege)? as u32,
            LoadOp::Lhs => self.dmmu.load16(bus, vaddr, privilege)? as i16 as i32 as u32,
        })
    }

    /// Performs a store of `val` at effective address `ea`.
    pub fn store(&mut self, op: StoreOp, ea: u32, val: u32) -> Result<(), ExceptionKind> {
        let vaddr = VirtAddr::new(ea);
        let privilege = self.privilege();
        let bus = &mut self.bus;
        match op {
            StoreOp::Sw => self.dmmu.store32(bus, vaddr, privilege, val),
            StoreOp::Sb => self.dmmu.store8(bus, vaddr, privilege, val as u8),
            StoreOp::Sh => self.dmmu.store16(bus, vaddr, privilege, val as u16),
        }
    }
}
