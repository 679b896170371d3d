//! Memory-Mapped IO Devices.
//!
//! This module contains the peripheral models attached to the bus. The system
//! has a single peripheral, the serial console.

/// UART 16550-compatible serial port.
pub mod uart;

pub use uart::Uart;

pub use crate::soc::traits::Device;
