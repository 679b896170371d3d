//! OpenRISC 1000 system simulator library.
//!
//! This crate implements an instruction-set simulator for the 32-bit ORBIS32 subset with the following:
//! 1. **Core:** Fetch/decode/execute loop, delay slots, exceptions, tick timer and PIC.
//! 2. **Memory:** Instruction and data MMUs with software-managed TLBs and fast translation memos.
//! 3. **ISA:** Decoding, encoding, disassembly and a program-image assembler.
//! 4. **SoC:** Bus, RAM and a 16550-style UART.
//! 5. **Simulation:** Loader, configuration, and statistics collection.

/// Common types and constants (addresses, registers, exceptions, access types).
pub mod common;
/// Simulator configuration (defaults and JSON parsing).
pub mod config;
/// CPU core (architectural state, execution units, execution loop).
pub mod core;
/// Instruction set (opcodes, decode, encode, disassembly, assembler).
pub mod isa;
/// Binary loader and the top-level simulator.
pub mod sim;
/// System-on-chip (bus, devices, memory, traits).
pub mod soc;
/// Simulation statistics collection and reporting.
pub mod stats;

/// Root configuration type; use `Config::default()` or parse JSON with `Config::from_json`.
pub use crate::config::Config;
/// Main CPU type; holds registers, MMUs, bus and stats.
pub use crate::core::{Cpu, RunOutcome};
/// Top-level simulator; construct with `Simulator::new`.
pub use crate::sim::Simulator;
