//! Execution units and functional components.
//!
//! This module contains the integer ALU used by the executor and the memory
//! management unit instantiated once per side (instruction and data).

/// Arithmetic Logic Unit for integer operations.
pub mod alu;

/// Memory Management Unit with a software-managed TLB.
pub mod mmu;
