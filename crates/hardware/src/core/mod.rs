//! Core processor implementation.
//!
//! This module contains the CPU implementation: architectural state, the
//! execution units it drives, and the fetch/decode/execute loop that ties them
//! together.

/// Architecture-specific components (register file, privilege modes, SR and SPR maps).
pub mod arch;

/// CPU core implementation and execution loop.
pub mod cpu;

/// Execution units (ALU, MMU).
pub mod units;

pub use self::cpu::{Cpu, RunOutcome};
