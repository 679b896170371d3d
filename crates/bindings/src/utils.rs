//! Utility functions exposed to Python.
//!
//! Provides version, disassembly and log setup helpers for the `orsim` module.

use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;
use tracing_subscriber::EnvFilter;

/// Returns the simulator version string (e.g., for scripting or diagnostics).
///
/// # Returns
///
/// The crate version, such as `"0.3.0"`.
#[pyfunction]
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

/// Disassemble a 32-bit ORBIS32 instruction word into a mnemonic string.
///
/// # Arguments
///
/// * `word` - Raw big-endian instruction word as an integer.
///
/// # Returns
///
/// A string such as `"l.addi r1,r0,16"`, or `".word 0x........"` for words outside
/// the supported subset.
#[pyfunction]
pub fn disassemble(word: u32) -> String {
    orsim_core::isa::disassemble(word)
}

/// Installs a stderr log subscriber for the simulator's `tracing` events.
///
/// # Arguments
///
/// * `filter` - An `EnvFilter` directive such as `"orsim_core=debug"`. Defaults to
///   `RUST_LOG`, then `warn`.
///
/// # Returns
///
/// `True` if the subscriber was installed, `False` if one was already active.
#[pyfunction]
#[pyo3(signature = (filter=None))]
pub fn init_logging(filter: Option<&str>) -> PyResult<bool> {
    let filter = match filter {
        Some(directive) => EnvFilter::try_new(directive)
            .map_err(|e| PyValueError::new_err(format!("Invalid log filter: {e}")))?,
        None => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
    };
    Ok(tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
        .is_ok())
}
