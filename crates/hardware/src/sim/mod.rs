//! Simulation utilities and program loading.
//!
//! Provides the binary loader and the `Simulator`, the embedding surface that
//! front-ends (CLI, Python) drive.

/// Raw image loading from disk.
pub mod loader;

/// Top-level simulator owning the CPU.
pub mod simulator;

pub use self::simulator::Simulator;
