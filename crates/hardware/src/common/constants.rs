//! Global System Constants.
//!
//! This module defines system-wide constants used across the simulator. It includes:
//! 1. **Memory Constants:** Page geometry and the physical memory map.
//! 2. **Instruction Constants:** Instruction width and the simulator halt encoding.
//! 3. **Interrupt Constants:** Programmable interrupt controller line assignments.

/// Number of bits to shift to convert between bytes and pages (8 KiB pages).
pub const PAGE_SHIFT: u32 = 13;

/// Page size in bytes.
pub const PAGE_SIZE: u32 = 1 << PAGE_SHIFT;

/// Mask for extracting the page offset from an address.
pub const PAGE_OFFSET_MASK: u32 = PAGE_SIZE - 1;

/// Mask for extracting the page-aligned part of an address.
pub const PAGE_MASK: u32 = !PAGE_OFFSET_MASK;

/// Size of physical RAM in bytes (32 MiB).
pub const RAM_SIZE: usize = 0x0200_0000;

/// Highest physical address backed by RAM.
pub const MAX_RAM_ADDRESS: u32 = 0x01FF_FFFF;

/// Base physical address of the serial peripheral window.
pub const UART_BASE: u32 = 0x9000_0000;

/// Last physical address claimed by the serial peripheral (inclusive).
pub const UART_END: u32 = 0x9000_0100;

/// PIC line driven by the serial peripheral.
pub const UART_IRQ_LINE: u32 = 2;

/// Size of every instruction in bytes.
pub const INSTRUCTION_SIZE: u32 = 4;

/// Immediate of the `l.nop` encoding that halts the simulator when executed in supervisor mode.
pub const HALT_NOP_IMMEDIATE: u16 = 1;

/// Sentinel page tag meaning "no page cached"; never page aligned, so it never matches.
pub const NO_CACHED_PAGE: u32 = 1;
