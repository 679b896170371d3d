//! Statistics Python binding.
//!
//! Exposes simulation statistics to Python: getters for cycles, instructions, exceptions
//! and translation fast-path counters; `print` / `print_sections` for human-readable
//! output; `to_dict` for JSON-serializable export.

use orsim_core::common::ExceptionKind;
use orsim_core::stats::SimStats;
use pyo3::prelude::*;
use pyo3::types::PyDict;

/// Python-exposed statistics: a snapshot of `SimStats` taken when `Simulator.stats()` ran.
#[pyclass(name = "Stats", module = "orsim._core")]
#[derive(Clone, Debug)]
pub struct PyStats {
    /// The wrapped snapshot.
    pub inner: SimStats,
}

#[pymethods]
impl PyStats {
    /// Print all stats (full dump).
    fn print(&self) {
        self.inner.print();
    }

    /// Print only the given sections. Options: "summary", "exceptions", "memory".
    /// Pass an empty list for full dump.
    fn print_sections(&self, sections: Vec<String>) {
        self.inner.print_sections(&sections);
    }

    #[getter]
    const fn cycles(&self) -> u64 {
        self.inner.cycles
    }
    #[getter]
    const fn instructions(&self) -> u64 {
        self.inner.instructions
    }
    #[getter]
    const fn exceptions(&self) -> u64 {
        self.inner.exceptions
    }
    #[getter]
    const fn halts(&self) -> u64 {
        self.inner.halts
    }
    #[getter]
    const fn fetch_fast(&self) -> u64 {
        self.inner.fetch_fast
    }
    #[getter]
    const fn fetch_slow(&self) -> u64 {
        self.inner.fetch_slow
    }
    #[getter]
    const fn dmmu_fast_hits(&self) -> u64 {
        self.inner.dmmu_fast_hits
    }
    #[getter]
    const fn dmmu_fast_misses(&self) -> u64 {
        self.inner.dmmu_fast_misses
    }

    /// Export all stats as a Python dict (JSON-serializable).
    ///
    /// Per-kind exception counts are nested under `"exceptions_by_kind"`, keyed by
    /// exception name; kinds that never fired are omitted.
    fn to_dict<'py>(&self, py: Python<'py>) -> PyResult<Bound<'py, PyDict>> {
        let d = PyDict::new(py);
        let s = &self.inner;
        d.set_item("cycles", s.cycles)?;
        d.set_item("instructions", s.instructions)?;
        d.set_item("exceptions", s.exceptions)?;
        d.set_item("halts", s.halts)?;
        d.set_item("fetch_fast", s.fetch_fast)?;
        d.set_item("fetch_slow", s.fetch_slow)?;
        d.set_item("dmmu_fast_hits", s.dmmu_fast_hits)?;
        d.set_item("dmmu_fast_misses", s.dmmu_fast_misses)?;
        d.set_item("ips", s.ips())?;

        let by_kind = PyDict::new(py);
        for kind in ExceptionKind::ALL {
            let count = s.exceptions_of(kind);
            if count > 0 {
                by_kind.set_item(kind.name(), count)?;
            }
        }
        d.set_item("exceptions_by_kind", by_kind)?;

        Ok(d)
    }

    fn __repr__(&self) -> String {
        format!(
            "Stats(cycles={}, instructions={}, exceptions={})",
            self.inner.cycles, self.inner.instructions, self.inner.exceptions
        )
    }
}

impl From<SimStats> for PyStats {
    fn from(inner: SimStats) -> Self {
        Self { inner }
    }
}
