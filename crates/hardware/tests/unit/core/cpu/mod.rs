

/// Per-instruction semantics: immediates, loads, stores and ALU operations.
pub mod instructions;

/// Small complete programs.
pub mod programs;



/// Tick timer and external interrupt delivery.
pub mod timer_interrupts;
