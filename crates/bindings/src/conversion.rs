//! Python↔Rust conversion helpers.
//!
//! Converts Python dicts into the core `Config` type via JSON serialization, so the
//! same schema is used from both Python and the CLI's `--config` file. Also maps host
//! errors and register indices onto Python exceptions.

use orsim_core::Config;
use orsim_core::common::{Reg, SimError};
use pyo3::exceptions::{PyIOError, PyIndexError, PyValueError};
use pyo3::prelude::*;

/// Converts an optional Python dict to a simulator `Config`.
///
/// The dict is serialized to JSON and then parsed with `Config::from_json`. Keys must
/// match the Rust config structure (`general`, `system`); missing keys take defaults.
///
/// # Arguments
///
/// * `py` - Python interpreter handle.
/// * `dict` - A Python dict, or `None` for the default configuration.
///
/// # Returns
///
/// The parsed `Config`, or a `ValueError` if the dict does not match the schema.
pub fn py_dict_to_config(py: Python<'_>, dict: Option<&Bound<'_, PyAny>>) -> PyResult<Config> {
    let Some(dict) = dict else {
        return Ok(Config::default());
    };
    let json = py.import("json")?;
    let json_str: String = json.getattr("dumps")?.call1((dict,))?.extract()?;
    Config::from_json(&json_str).map_err(sim_error_to_py)
}

/// Maps a host-level simulator error onto the closest Python exception.
///
/// File errors become `OSError`; image and configuration errors become `ValueError`.
pub fn sim_error_to_py(err: SimError) -> PyErr {
    match err {
        SimError::Io { .. } => PyIOError::new_err(err.to_string()),
        _ => PyValueError::new_err(err.to_string()),
    }
}

/// Validates a Python register index.
///
/// # Returns
///
/// The register, or an `IndexError` outside `0..=31`.
pub fn reg_from_index(index: u8) -> PyResult<Reg> {
    Reg::new(index).ok_or_else(|| PyIndexError::new_err(format!("no register r{index}")))
}
