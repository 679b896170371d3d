//! Device trait for memory-mapped I/O.
//!
//! This module defines the `Device` trait implemented by every bus-attached component:
//! byte, half-word and word load/store at device-relative offsets. Address decoding
//! lives in the bus (`Bus::route`), so devices only ever see offsets.
//!
//! Accesses return `Err(ExceptionKind)` instead of panicking when a device cannot
//! service them (for example a word access to a byte-wide register), so the CPU
//! can raise the architectural exception.

use crate::common::ExceptionKind;

/// Trait for memory-mapped I/O devices attached to the system bus.
///
/// Multi-byte values are big-endian on the bus. Loads take `&mut self` because
/// reading a device register may have side effects (popping a FIFO, clearing an
/// interrupt condition).
pub trait Device {
    /// Loads one byte at the given device-relative offset.
    fn load8(&mut self, offset: u32) -> Result<u8, ExceptionKind>;
    /// Loads a big-endian half-word at the given offset.
    fn load16(&mut self, offset: u32) -> Result<u16, ExceptionKind>;
    /// Loads a big-endian word at the given offset.
    fn load32(&mut self, offset: u32) -> Result<u32, ExceptionKind>;
    /// Stores one byte at the given offset.
    fn store8(&mut self, offset: u32, val: u8) -> Result<(), ExceptionKind>;
    /// Stores a big-endian half-word at the given offset.
    fn store16(&mut self, offset: u32, val: u16) -> Result<(), ExceptionKind>;
    /// Stores a big-endian word at the given offset.
    fn store32(&mut self, offset: u32, val: u32) -> Result<(), ExceptionKind>;
}
