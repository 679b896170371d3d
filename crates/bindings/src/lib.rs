//! Python bindings for the OpenRISC simulator.
//!
//! This crate exposes the simulator to Python via PyO3. It provides:
//! 1. **Simulator:** `PySimulator` for loading images, running slices and driving the console.
//! 2. **Statistics:** `PyStats` for performance metrics and selective section printing.
//! 3. **Utilities:** Version string, disassembly and log setup.
//! 4. **Conversion:** Python dict to `Config` and `SimError` to Python exceptions.

use pyo3::prelude::*;

/// Python dict to Rust `Config` conversion.
pub mod conversion;
/// Simulator binding (`PySimulator`).
pub mod simulator;
/// Statistics binding (`PyStats`).
pub mod stats;
/// Utility functions (version, disassembly, logging).
pub mod utils;

/// Registers all simulator classes and functions onto the given Python module.
///
/// Called from the `#[pymodule]` entry point to expose `Simulator`, `Stats`,
/// `version`, `disassemble` and `init_logging`.
///
/// # Arguments
///
/// * `m` - The Python module to register types and functions on.
///
/// # Returns
///
/// `Ok(())` on success, or a `PyErr` if registration fails.
pub fn register_simulator_module(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<simulator::PySimulator>()?;
    m.add_class::<stats::PyStats>()?;

    m.add_function(wrap_pyfunction!(utils::version, m)?)?;
    m.add_function(wrap_pyfunction!(utils::disassemble, m)?)?;
    m.add_function(wrap_pyfunction!(utils::init_logging, m)?)?;

    Ok(())
}

#[pymodule]
fn _core(m: &Bound<'_, PyModule>) -> PyResult<()> {
    register_simulator_module(m)?;
    Ok(())
}
