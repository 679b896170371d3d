/// Exception kind vectors and host error messages.
pub mod error;

/// Register number bounds.
pub mod reg;
