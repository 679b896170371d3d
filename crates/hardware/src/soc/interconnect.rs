//! System interconnect (bus) for memory and MMIO access.
//!
//! This module implements the bus that routes physical address accesses to devices. It provides:
//! 1. **Access routing:** A fixed address map resolving each physical address to RAM, the
//!    UART, or no device (reported as a bus error).
//! 2. **Interrupt aggregation:** One status word with a bit per asserted PIC line.
//! 3. **Image loading:** Copying raw binaries into RAM.

use crate::common::constants::{MAX_RAM_ADDRESS, UART_BASE, UART_END, UART_IRQ_LINE};
use crate::common::{ExceptionKind, PhysAddr, SimError};
use crate::soc::devices::Uart;
use crate::soc::memory::Ram;
use crate::soc::traits::Device;

/// Devices reachable through the bus.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Target {
    /// Physical RAM.
    Ram,
    /// The serial console.
    Uart,
}

/// System bus connecting the MMUs to RAM and the peripherals.
#[derive(Debug, Default)]
pub struct Bus {
    ram: Ram,
    uart: Uart,
}

impl Bus {
    /// Creates a bus with zeroed RAM and a UART in reset state.
    pub fn new() -> Self {
        Self::default()
    }

    /// Resolves a physical address to its device and device-relative offset.
    ///
    /// # Returns
    ///
    /// `None` when no device claims the address.
    #[inline]
    pub const fn route(paddr: PhysAddr) -> Option<(Target, u32)> {
        let addr = paddr.val();
        if addr <= MAX_RAM_ADDRESS {
            Some((Target::Ram, addr))
        } else if addr >= UART_BASE && addr <= UART_END {
            Some((Target::Uart, addr - UART_BASE))
        } else {
            None
        }
    }

    #[inline]
    fn device(&mut self, paddr: PhysAddr) -> Result<(&mut dyn Device, u32), ExceptionKind> {
        match Self::route(paddr) {
            Some((Target::Ram, offset)) => Ok((&mut self.ram, offset)),
            Some((Target::Uart, offset)) => Ok((&mut self.uart, offset)),
            None => Err(ExceptionKind::BusError),
        }
    }

    /// Loads a byte from the device claiming `paddr`.
    pub fn load8(&mut self, paddr: PhysAddr) -> Result<u8, ExceptionKind> {
        let (dev, offset) = self.device(paddr)?;
        dev.load8(offset)
    }

    /// Loads a big-endian half-word from the device claiming `paddr`.
    pub fn load16(&mut self, paddr: PhysAddr) -> Result<u16, ExceptionKind> {
        let (dev, offset) = self.device(paddr)?;
        dev.load16(offset)
    }

    /// Loads a big-endian word from the device claiming `paddr`.
    pub fn load32(&mut self, paddr: PhysAddr) -> Result<u32, ExceptionKind> {
        let (dev, offset) = self.device(paddr)?;
        dev.load32(offset)
    }

    /// Stores a byte to the device claiming `paddr`.
    pub fn store8(&mut self, paddr: PhysAddr, val: u8) -> Result<(), ExceptionKind> {
        let (dev, offset) = self.device(paddr)?;
        dev.store8(offset, val)
    }

    /// Stores a big-endian half-word to the device claiming `paddr`.
    pub fn store16(&mut self, paddr: PhysAddr, val: u16) -> Result<(), ExceptionKind> {
        let (dev, offset) = self.device(paddr)?;
        dev.store16(offset, val)
    }

    /// Stores a big-endian word to the device claiming `paddr`.
    pub fn store32(&mut self, paddr: PhysAddr, val: u32) -> Result<(), ExceptionKind> {
        let (dev, offset) = self.device(paddr)?;
        dev.store32(offset, val)
    }

    /// Returns the aggregated interrupt status word, one bit per asserted PIC line.
    pub fn interrupts(&self) -> u32 {
        if self.uart.interrupt_asserted() {
            1 << UART_IRQ_LINE
        } else {
            0
        }
    }

    /// Writes a binary image into RAM at the given physical address.
    ///
    /// # Arguments
    ///
    /// * `data` - Image bytes in big-endian word order.
    /// * `addr` - Physical base address.
    pub fn load_binary_at(&mut self, data: &[u8], addr: u32) -> Result<(), SimError> {
        self.ram.load_image(data, addr)
    }

    /// Returns the RAM device.
    pub const fn ram(&self) -> &Ram {
        &self.ram
    }

    /// Returns the RAM device mutably.
    pub const fn ram_mut(&mut self) -> &mut Ram {
        &mut self.ram
    }

    /// Returns the UART.
    pub const fn uart(&self) -> &Uart {
        &self.uart
    }

    /// Returns the UART mutably.
    pub const fn uart_mut(&mut self) -> &mut Uart {
        &mut self.uart
    }
}
