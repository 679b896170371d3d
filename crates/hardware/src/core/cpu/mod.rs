//! CPU Core Definition and Initialization.
//!
//! This module defines the central `Cpu` structure, which holds the entire processor
//! state. It coordinates the following:
//! 1. **State Management:** General registers, program counter, supervision register and the
//!    single exception context.
//! 2. **Timers and Interrupts:** Tick timer registers and the programmable interrupt controller.
//! 3. **Memory Hierarchy:** The instruction and data MMUs and the same-page fetch memo.
//! 4. **System Integration:** Owns the system bus with RAM and the UART.

/// Fetch/decode/execute loop and instruction semantics.
pub mod execution;

/// Data memory access through the data MMU.
pub mod memory;

/// Special-purpose register access.
pub mod spr;

/// Exception dispatch, return from exception and the delay-slot protocol.
pub mod trap;

use tracing::warn;

use crate::common::Reg;
use crate::common::constants::NO_CACHED_PAGE;
use crate::config::Config;
use crate::core::arch::gpr::Gpr;
use crate::core::arch::mode::PrivilegeMode;
use crate::core::arch::sr;
use crate::core::units::mmu::{Mmu, MmuSide};
use crate::soc::interconnect::Bus;
use crate::stats::SimStats;

pub use self::execution::RunOutcome;

/// Main CPU structure containing all processor state and components.
#[derive(Debug)]
pub struct Cpu {
    /// General-purpose registers.
    regs: Gpr,
    /// Program counter.
    pc: u32,
    /// Supervision register. Written only through `set_sr`.
    sr: u32,
    /// Exception PC register.
    epcr0: u32,
    /// Exception effective address register.
    eear0: u32,
    /// Exception SR register.
    esr0: u32,

    /// PIC mask register.
    picmr: u32,
    /// PIC status register (last interrupt word seen on the bus).
    picsr: u32,
    /// Set on a change of PICSR to a nonzero value, cleared when the interrupt is taken.
    interrupt_pending: bool,
    /// Tick timer mode register.
    ttmr: u32,
    /// Tick timer count register.
    ttcr: u32,

    /// The next instruction executes in a delay slot.
    in_delay_slot: bool,
    /// Branch target taken after the delay slot.
    delayed_next_pc: u32,

    /// Virtual page base of the fetch memo, or `NO_CACHED_PAGE`.
    fetch_page: u32,
    /// Physical page base paired with `fetch_page`.
    fetch_ppage: u32,

    /// Instruction-side MMU.
    pub immu: Mmu,
    /// Data-side MMU.
    pub dmmu: Mmu,
    /// System bus and devices.
    pub bus: Bus,
    /// Performance counters.
    pub stats: SimStats,

    /// Emit a trace event per executed instruction.
    trace: bool,
    /// Log exception dispatch at info level.
    trace_exceptions: bool,
}

impl Cpu {
    /// Creates a CPU in its reset state with a fresh bus.
    ///
    /// # Arguments
    ///
    /// * `config` - Simulator configuration; only the tracing switches are read here.
    pub fn new(config: &Config) -> Self {
        let mut cpu = Self {
            regs: Gpr::new(),
            pc: 0,
            sr: 0,
            epcr0: 0,
            eear0: 0,
            esr0: 0,
            picmr: 0,
            picsr: 0,
            interrupt_pending: false,
            ttmr: 0,
            ttcr: 0,
            in_delay_slot: false,
            delayed_next_pc: 0,
            fetch_page: NO_CACHED_PAGE,
            fetch_ppage: 0,
            immu: Mmu::new(MmuSide::Instruction),
            dmmu: Mmu::new(MmuSide::Data),
            bus: Bus::new(),
            stats: SimStats::default(),
            trace: config.general.trace_instructions,
            trace_exceptions: config.general.trace_exceptions,
        };
        cpu.reset();
        cpu
    }

    /// Resets the architectural state.
    ///
    /// Zeroes every register, sets PC to 0 and SR to `FO|SM`, and clears the exception
    /// context, the PIC, the tick timer, the delay-slot state, the fetch memo and both TLBs.
    /// RAM and device state are kept.
    pub fn reset(&mut self) {
        self.regs.clear();
        self.pc = 0;
        self.epcr0 = 0;
        self.eear0 = 0;
        self.esr0 = 0;
        self.picmr = 0;
        self.picsr = 0;
        self.interrupt_pending = false;
        self.ttmr = 0;
        self.ttcr = 0;
        self.in_delay_slot = false;
        self.delayed_next_pc = 0;
        self.immu.reset();
        self.dmmu.reset();
        self.set_sr(sr::RESET_VALUE);
    }

    /// Reads a general-purpose register.
    #[inline(always)]
    pub const fn reg(&self, reg: Reg) -> u32 {
        self.regs.read(reg)
    }

    /// Writes a general-purpose register. No side effects.
    #[inline(always)]
    pub fn set_reg(&mut self, reg: Reg, val: u32) {
        self.regs.write(reg, val);
    }

    /// Returns the register file.
    pub const fn regs(&self) -> &Gpr {
        &self.regs
    }

    /// Returns the program counter.
    pub const fn pc(&self) -> u32 {
        self.pc
    }

    /// Sets the program counter. Any pending delay-slot transfer is kept.
    pub const fn set_pc(&mut self, pc: u32) {
        self.pc = pc;
    }

    /// Returns the compare flag (SR.F).
    pub const fn flag(&self) -> bool {
        self.sr & sr::F != 0
    }

    /// Returns the supervision register.
    pub const fn sr(&self) -> u32 {
        self.sr
    }

    /// Returns the current privilege mode.
    #[inline(always)]
    pub const fn privilege(&self) -> PrivilegeMode {
        PrivilegeMode::from_sr(self.sr)
    }

    /// Returns `true` while the next instruction sits in a branch delay slot.
    pub const fn in_delay_slot(&self) -> bool {
        self.in_delay_slot
    }

    /// Writes the supervision register with its side effects.
    ///
    /// IME and DME are propagated to the MMUs, and every fast translation memo
    /// (both MMUs and the fetch memo) is dropped.
    pub fn set_sr(&mut self, val: u32) {
        if val & sr::UNSUPPORTED_MODES != 0 {
            warn!(sr = format_args!("{val:#x}"), "unsupported mode bits set in SR");
        }
        self.sr = val;
        self.immu.set_enabled(val & sr::IME != 0);
        self.dmmu.set_enabled(val & sr::DME != 0);
        self.fetch_page = NO_CACHED_PAGE;
    }

    /// Sets or clears the compare flag without other SR side effects.
    #[inline(always)]
    const fn set_flag(&mut self, flag: bool) {
        if flag {
            self.sr |= sr::F;
        } else {
            self.sr &= !sr::F;
        }
    }

    /// Drops the fetch memo.
    #[inline(always)]
    const fn invalidate_fetch_page(&mut self) {
        self.fetch_page = NO_CACHED_PAGE;
    }
}
