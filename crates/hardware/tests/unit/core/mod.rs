

/// Executor tests driven by assembled programs.
pub mod cpu;
