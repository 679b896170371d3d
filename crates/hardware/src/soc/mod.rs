//! System-on-Chip (SoC) Components.
//!
//! This module organizes the components on the physical side of the MMUs:
//! the bus, RAM, the serial peripheral, and the device access contract.

/// Memory-mapped I/O device implementations.
pub mod devices;

/// System bus interconnect and routing.
pub mod interconnect;

/// Physical RAM.
pub mod memory;

/// Device trait definitions for MMIO access.
pub mod traits;

pub use interconnect::Bus;
pub use memory::Ram;
