//! Simulator: the system orchestrator.
//!
//! `Simulator` owns one `Cpu` (which owns the bus, RAM and UART) and the configuration.
//! It is the single surface the CLI, the Python module and the tests drive:
//! 1. **Boot:** Reset, set the start PC and copy an image into RAM at physical address 0.
//! 2. **Execution:** Bounded `run` calls and fixed-size `run_slice` calls.
//! 3. **Console:** Keypress injection and transmitted-byte draining on the UART.
//! 4. **Inspection:** Registers, PC, flag, special registers and statistics.

use std::path::Path;

use tracing::info;

use crate::common::{Reg, SimError};
use crate::config::Config;
use crate::core::{Cpu, RunOutcome};
use crate::sim::loader::load_binary;
use crate::stats::SimStats;

/// Top-level simulator.
#[derive(Debug)]
pub struct Simulator {
    /// CPU architectural state (registers, MMUs, bus, stats).
    pub cpu: Cpu,
    config: Config,
}

impl Default for Simulator {
    fn default() -> Self {
        Self::new(Config::default())
    }
}

impl Simulator {
    /// Creates a simulator in reset state.
    pub fn new(config: Config) -> Self {
        Self {
            cpu: Cpu::new(&config),
            config,
        }
    }

    /// Returns the configuration this simulator was built with.
    pub const fn config(&self) -> &Config {
        &self.config
    }

    /// Resets the CPU, sets PC and copies `image` to physical address 0.
    ///
    /// # Arguments
    ///
    /// * `image` - Raw image bytes; the length must be a multiple of 4.
    /// * `start_pc` - PC to start execution at.
    ///
    /// # Returns
    ///
    /// The number of bytes loaded, or the rejection reason.
    pub fn load_image(&mut self, image: &[u8], start_pc: u32) -> Result<usize, SimError> {
        self.cpu.reset();
        self.cpu.set_pc(start_pc);
        self.cpu.bus.load_binary_at(image, 0)?;
        Ok(image.len())
    }

    /// Reads an image file and loads it as [`Simulator::load_image`] does.
    pub fn load_image_file(
        &mut self,
        path: impl AsRef<Path>,
        start_pc: u32,
    ) -> Result<usize, SimError> {
        let path = path.as_ref();
        let image = load_binary(path)?;
        let len = self.load_image(&image, start_pc)?;
        info!(bytes = len, path = %path.display(), "loaded image");
        Ok(len)
    }

    /// Runs up to `cycles` cycles. See [`Cpu::run`].
    pub fn run(&mut self, cycles: u64) -> RunOutcome {
        self.cpu.run(cycles)
    }

    /// Runs one slice of `config.system.cycles_per_slice` cycles (at least one).
    pub fn run_slice(&mut self) -> RunOutcome {
        self.cpu.run(self.config.system.cycles_per_slice.max(1))
    }

    /// Runs until the guest halts or `max_cycles` simulated cycles have elapsed.
    ///
    /// # Returns
    ///
    /// `true` when the guest halted.
    pub fn run_until_halt(&mut self, max_cycles: u64) -> bool {
        let start = self.cpu.stats.cycles;
        while self.cpu.stats.cycles - start < max_cycles {
            let budget = self
                .config
                .system
                .cycles_per_slice
                .clamp(1, max_cycles - (self.cpu.stats.cycles - start));
            if self.cpu.run(budget).is_halted() {
                return true;
            }
        }
        false
    }

    /// Queues a byte on the UART receive FIFO.
    pub fn keypress(&mut self, byte: u8) {
        self.cpu.bus.uart_mut().keypress(byte);
    }

    /// Returns `true` when the guest has written bytes not yet read.
    pub fn can_read(&self) -> bool {
        self.cpu.bus.uart().can_read()
    }

    /// Pops one byte of guest output.
    pub fn read(&mut self) -> Option<u8> {
        self.cpu.bus.uart_mut().read()
    }

    /// Takes all pending guest output.
    pub fn drain_output(&mut self) -> Vec<u8> {
        self.cpu.bus.uart_mut().drain_output()
    }

    /// Resets the CPU. RAM and the UART keep their contents.
    pub fn reset(&mut self) {
        self.cpu.reset();
    }

    /// Reads a general-purpose register.
    pub const fn reg(&self, reg: Reg) -> u32 {
        self.cpu.reg(reg)
    }

    /// Writes a general-purpose register.
    pub fn set_reg(&mut self, reg: Reg, val: u32) {
        self.cpu.set_reg(reg, val);
    }

    /// Returns the program counter.
    pub const fn pc(&self) -> u32 {
        self.cpu.pc()
    }

    /// Sets the program counter.
    pub const fn set_pc(&mut self, pc: u32) {
        self.cpu.set_pc(pc);
    }

    /// Returns the compare flag.
    pub const fn flag(&self) -> bool {
        self.cpu.flag()
    }

    /// Reads a special-purpose register.
    pub fn spr(&self, addr: u32) -> u32 {
        self.cpu.spr(addr)
    }

    /// Returns the statistics collected so far.
    pub const fn stats(&self) -> &SimStats {
        &self.cpu.stats
    }
}
