//! Simulator Python binding.
//!
//! Exposes the simulator to Python: create from a config dict, load an image, run bounded
//! slices, exchange console bytes with the UART and inspect architectural state. Long
//! runs check Python signals between slices so Ctrl-C stays responsive.

use orsim_core::Simulator;
use pyo3::prelude::*;
use pyo3::types::PyBytes;

use crate::conversion::{py_dict_to_config, reg_from_index, sim_error_to_py};
use crate::stats::PyStats;

/// Python-exposed simulator: wraps `orsim_core::Simulator`.
#[pyclass(name = "Simulator", module = "orsim._core", unsendable)]
#[derive(Debug)]
pub struct PySimulator {
    /// The wrapped simulator.
    pub inner: Simulator,
}

#[pymethods]
impl PySimulator {
    /// Creates a simulator in reset state.
    ///
    /// # Arguments
    ///
    /// * `config` - Optional dict with `general` and `system` sections.
    ///
    /// # Errors
    ///
    /// Returns a `ValueError` if the config dict does not match the schema.
    #[new]
    #[pyo3(signature = (config=None))]
    fn new(py: Python<'_>, config: Option<&Bound<'_, PyAny>>) -> PyResult<Self> {
        let config = py_dict_to_config(py, config)?;
        Ok(Self {
            inner: Simulator::new(config),
        })
    }

    /// Resets the CPU and copies `image` to physical address 0.
    ///
    /// # Arguments
    ///
    /// * `image` - Raw big-endian image; the length must be a multiple of 4.
    /// * `start_pc` - Entry PC. Defaults to the configured `system.boot_pc`.
    ///
    /// # Returns
    ///
    /// The number of bytes loaded.
    #[pyo3(signature = (image, start_pc=None))]
    fn load_image(&mut self, image: &[u8], start_pc: Option<u32>) -> PyResult<usize> {
        let pc = start_pc.unwrap_or(self.inner.config().system.boot_pc);
        self.inner.load_image(image, pc).map_err(sim_error_to_py)
    }

    /// Reads an image file and loads it as `load_image` does.
    #[pyo3(signature = (path, start_pc=None))]
    fn load_image_file(&mut self, path: &str, start_pc: Option<u32>) -> PyResult<usize> {
        let pc = start_pc.unwrap_or(self.inner.config().system.boot_pc);
        self.inner
            .load_image_file(path, pc)
            .map_err(sim_error_to_py)
    }

    /// Runs one bounded slice.
    ///
    /// # Arguments
    ///
    /// * `cycles` - Cycle budget. Defaults to the configured `system.cycles_per_slice`.
    ///
    /// # Returns
    ///
    /// `True` while the guest should keep running, `False` once it halted.
    #[pyo3(signature = (cycles=None))]
    fn run(&mut self, cycles: Option<u64>) -> bool {
        let outcome = match cycles {
            Some(cycles) => self.inner.run(cycles),
            None => self.inner.run_slice(),
        };
        !outcome.is_halted()
    }

    /// Runs slices until the guest halts or `max_cycles` cycles elapse.
    ///
    /// Checks for Python signals (e.g., Ctrl-C) between slices.
    ///
    /// # Returns
    ///
    /// `True` if the guest halted.
    fn run_until_halt(&mut self, py: Python<'_>, max_cycles: u64) -> PyResult<bool> {
        let start = self.inner.stats().cycles;
        let slice = self.inner.config().system.cycles_per_slice.max(1);
        loop {
            let elapsed = self.inner.stats().cycles - start;
            if elapsed >= max_cycles {
                return Ok(false);
            }
            if self.inner.run(slice.min(max_cycles - elapsed)).is_halted() {
                return Ok(true);
            }
            py.check_signals()?;
        }
    }

    /// Queues a byte on the UART receive FIFO.
    fn keypress(&mut self, byte: u8) {
        self.inner.keypress(byte);
    }

    /// Returns `True` while the guest has written bytes not yet read.
    fn can_read(&self) -> bool {
        self.inner.can_read()
    }

    /// Pops one byte of guest output, or `None`.
    fn read(&mut self) -> Option<u8> {
        self.inner.read()
    }

    /// Takes all pending guest output as `bytes`.
    fn read_output<'py>(&mut self, py: Python<'py>) -> Bound<'py, PyBytes> {
        PyBytes::new(py, &self.inner.drain_output())
    }

    /// Resets the CPU. RAM and pending console bytes are kept.
    fn reset(&mut self) {
        self.inner.reset();
    }

    /// Reads general-purpose register `index` (0–31).
    fn reg(&self, index: u8) -> PyResult<u32> {
        Ok(self.inner.reg(reg_from_index(index)?))
    }

    /// Writes general-purpose register `index` (0–31).
    fn set_reg(&mut self, index: u8, value: u32) -> PyResult<()> {
        self.inner.set_reg(reg_from_index(index)?, value);
        Ok(())
    }

    /// The program counter.
    #[getter]
    const fn pc(&self) -> u32 {
        self.inner.pc()
    }

    #[setter]
    const fn set_pc(&mut self, pc: u32) {
        self.inner.set_pc(pc);
    }

    /// The compare flag set by `l.sf*`.
    #[getter]
    const fn flag(&self) -> bool {
        self.inner.flag()
    }

    /// Reads a special-purpose register by its 16-bit address.
    fn spr(&self, addr: u32) -> u32 {
        self.inner.spr(addr)
    }

    /// Returns a snapshot of the statistics collected so far.
    fn stats(&self) -> PyStats {
        PyStats::from(self.inner.stats().clone())
    }

    fn __repr__(&self) -> String {
        format!(
            "Simulator(pc={:#010x}, cycles={})",
            self.inner.pc(),
            self.inner.stats().cycles
        )
    }
}
