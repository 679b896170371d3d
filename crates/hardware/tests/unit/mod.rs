//! Unit tests for the simulator components.

/// Tests for the shared types: exception kinds, host errors and register numbers.
pub mod common;

/// Tests for the configuration layer.
pub mod config;

/// Tests for the processor core: ALU, MMU, architectural state and the executor.
pub mod core;



/// Tests for the bus, RAM and UART.
pub mod soc;

/// Tests for statistics collection.
pub mod stats;
