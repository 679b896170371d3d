//! Instruction Set Architecture (ISA) Definitions.
//!
//! Contains the ORBIS32 encoding, the decoded instruction form and the tooling built on it.
//!
//! # Modules
//!
//! * `opcodes`: Primary opcodes and family selectors.
//! * `instruction`: Field extraction and the decoded `Instruction` enum.
//! * `decode` / `encode`: Conversion between words and `Instruction`.
//! * `disasm`: Mnemonic rendering for tracing.
//! * `assembler`: Program image builder used by tests and boot stubs.

/// Program image builder.
pub mod assembler;

/// Instruction decoding logic.
pub mod decode;

/// Instruction disassembler for debug tracing and diagnostics.
pub mod disasm;

/// Canonical instruction encoding.
pub mod encode;

/// Instruction encoding structures and bit extraction utilities.
pub mod instruction;

/// Opcode and selector constants.
pub mod opcodes;

pub use decode::decode;
pub use disasm::disassemble;
pub use instruction::Instruction;
