//! Simulation statistics collection and reporting.
//!
//! This module tracks performance metrics for the simulator. It provides:
//! 1. **Throughput:** Total cycles, executed instructions and derived host speed.
//! 2. **Exceptions:** Dispatch counts in total and per exception kind, plus halts.
//! 3. **Translation:** Instruction fetch-memo hits versus slow fetches, and data MMU
//!    fast-path hits versus misses.

use std::time::Instant;

use crate::common::ExceptionKind;

/// Simulation statistics structure tracking all performance metrics.
#[derive(Clone, Debug)]
pub struct SimStats {
    start_time: Instant,
    /// Total simulated cycles (timer ticks).
    pub cycles: u64,
    /// Number of instructions executed (including those that raised an exception).
    pub instructions: u64,

    /// Number of exceptions dispatched.
    pub exceptions: u64,
    /// Exceptions dispatched, indexed by `ExceptionKind::code() - 1`.
    pub exceptions_by_kind: [u64; ExceptionKind::ALL.len()],
    /// Number of times the halt pseudo-instruction stopped execution.
    pub halts: u64,

    /// Fetches served by the same-page fetch memo.
    pub fetch_fast: u64,
    /// Fetches that went through the instruction MMU.
    pub fetch_slow: u64,
    /// Data word loads served by the data MMU fast path.
    pub dmmu_fast_hits: u64,
    /// Data word loads that needed full translation.
    pub dmmu_fast_misses: u64,
}

impl Default for SimStats {
    fn default() -> Self {
        Self {
            start_time: Instant::now(),
            cycles: 0,
            instructions: 0,
            exceptions: 0,
            exceptions_by_kind: [0; ExceptionKind::ALL.len()],
            halts: 0,
            fetch_fast: 0,
            fetch_slow: 0,
            dmmu_fast_hits: 0,
            dmmu_fast_misses: 0,
        }
    }
}

/// Section names for selective stats output.
///
/// Valid section identifiers: `"summary"`, `"exceptions"`, `"memory"`.
/// Pass an empty slice to `print_sections` to print all sections.
pub const STATS_SECTIONS: &[&str] = &["summary", "exceptions", "memory"];

impl SimStats {
    /// Counts one dispatched exception.
    pub const fn record_exception(&mut self, kind: ExceptionKind) {
        self.exceptions += 1;
        self.exceptions_by_kind[kind.code() as usize - 1] += 1;
    }

    /// Returns how many exceptions of `kind` were dispatched.
    pub const fn exceptions_of(&self, kind: ExceptionKind) -> u64 {
        self.exceptions_by_kind[kind.code() as usize - 1]
    }

    /// Simulated instructions per host second since these statistics were created.
    pub fn ips(&self) -> f64 {
        let seconds = self.start_time.elapsed().as_secs_f64();
        if seconds > 0.0 {
            self.instructions as f64 / seconds
        } else {
            0.0
        }
    }

    /// Prints only the requested statistics sections to stdout.
    ///
    /// # Arguments
    ///
    /// * `sections` - Slice of section names to print, or empty for all.
    pub fn print_sections(&self, sections: &[String]) {
        let want = |s: &str| sections.is_empty() || sections.iter().any(|x| x == s);
        let seconds = self.start_time.elapsed().as_secs_f64();

        println!("\n==========================================================");
        println!("OPENRISC SIMULATION STATISTICS");
        println!("==========================================================");
        if want("summary") {
            println!("host_seconds             {seconds:.4} s");
            println!("sim_cycles               {}", self.cycles);
            println!("sim_insts                {}", self.instructions);
            println!("sim_mips                 {:.2}", self.ips() / 1_000_000.0);
            println!("sim_halts                {}", self.halts);
            println!("----------------------------------------------------------");
        }
        if want("exceptions") {
            println!("EXCEPTIONS");
            println!("  total                  {}", self.exceptions);
            for kind in ExceptionKind::ALL {
                let count = self.exceptions_of(kind);
                if count > 0 {
                    println!("  {:<22} {count}", kind.name());
                }
            }
            println!("----------------------------------------------------------");
        }
        if want("memory") {
            let fetches = (self.fetch_fast + self.fetch_slow).max(1);
            let loads = (self.dmmu_fast_hits + self.dmmu_fast_misses).max(1);
            println!("TRANSLATION");
            println!(
                "  fetch.fast             {} ({:.2}%)",
                self.fetch_fast,
                self.fetch_fast as f64 * 100.0 / fetches as f64
            );
            println!("  fetch.slow             {}", self.fetch_slow);
            println!(
                "  dmmu.fast_hits         {} ({:.2}%)",
                self.dmmu_fast_hits,
                self.dmmu_fast_hits as f64 * 100.0 / loads as f64
            );
            println!("  dmmu.fast_misses       {}", self.dmmu_fast_misses);
        }
        println!("==========================================================");
    }

    /// Prints all statistics sections to stdout.
    ///
    /// Equivalent to `print_sections(&[])`.
    pub fn print(&self) {
        self.print_sections(&[]);
    }
}
