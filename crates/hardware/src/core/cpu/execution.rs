//! Main Execution Loop.
//!
//! This module implements the fetch/decode/execute cycle of the CPU. It performs the following:
//! 1. **Interrupt Handling:** Samples the bus interrupt word once per `run` call and takes an
//!    external interrupt on a change to an unmasked, enabled line.
//! 2. **Timing Management:** Advances the tick timer once per cycle and raises its exception.
//! 3. **Fetch:** Reads the next word through the same-page fetch memo or the instruction MMU.
//! 4. **Execution:** Applies the semantics of every supported instruction.
//! 5. **Observability:** Optional per-instruction tracing.

use tracing::trace;

use super::Cpu;
use crate::common::constants::{HALT_NOP_IMMEDIATE, PAGE_MASK, PAGE_OFFSET_MASK};
use crate::common::{AccessType, ExceptionKind, Reg, VirtAddr};
use crate::core::arch::spr::{
    TTMR_IE, TTMR_IP, TTMR_MODE_CONTINUOUS, TTMR_MODE_SHIFT, TTMR_PERIOD_MASK,
};
use crate::core::arch::sr;
use crate::core::units::alu::Alu;
use crate::isa::decode::decode;
use crate::isa::instruction::Instruction;
use crate::soc::traits::Device;

/// Result of a [`Cpu::run`] call.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RunOutcome {
    /// The whole cycle budget was consumed.
    Completed,
    /// An exception was dispatched; PC now points at its vector. Keep running.
    Exception(ExceptionKind),
    /// The halt pseudo-instruction executed (`l.nop 1` in supervisor mode, or `l.trap`).
    Halted,
}

impl RunOutcome {
    /// Returns `true` when the guest requested a halt.
    pub const fn is_halted(self) -> bool {
        matches!(self, Self::Halted)
    }
}

/// A fault raised while executing one instruction, dispatched by the run loop.
#[derive(Clone, Copy, Debug)]
struct Fault {
    kind: ExceptionKind,
    ea: u32,
}

impl Fault {
    const fn new(kind: ExceptionKind, ea: u32) -> Self {
        Self { kind, ea }
    }
}

/// What the run loop does after an instruction.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Flow {
    Continue,
    Halt,
}

impl Cpu {
    /// Runs up to `cycles` cycles.
    ///
    /// Each cycle advances the tick timer and executes one instruction. The call returns
    /// early after any exception dispatch or a halt; early return is normal and callers
    /// simply call `run` again.
    ///
    /// # Arguments
    ///
    /// * `cycles` - Cycle budget. Unused cycles are discarded on early return.
    ///
    /// # Returns
    ///
    /// How the call ended; see [`RunOutcome`].
    pub fn run(&mut self, cycles: u64) -> RunOutcome {
        let outcome = self.run_cycles(cycles);
        self.stats.dmmu_fast_hits = self.dmmu.fast_hits();
        self.stats.dmmu_fast_misses = self.dmmu.fast_misses();
        if outcome.is_halted() {
            self.stats.halts += 1;
        }
        outcome
    }

    fn run_cycles(&mut self, cycles: u64) -> RunOutcome {
        if let Some(kind) = self.check_interrupts() {
            return RunOutcome::Exception(kind);
        }

        for _ in 0..cycles {
            self.stats.cycles += 1;
            if let Some(kind) = self.tick_timer() {
                return RunOutcome::Exception(kind);
            }

            let pc = self.pc;
            let word = match self.fetch() {
                Ok(word) => word,
                Err(kind) => {
                    self.raise_exception(kind, pc);
                    return RunOutcome::Exception(kind);
                }
            };

            let inst = decode(word);
            if self.trace || cfg!(feature = "always-trace") {
                trace!("{pc:#010x}: {word:#010x}  {inst}");
            }
            self.stats.instructions += 1;

            match self.execute(inst) {
                Ok(Flow::Continue) => {}
                Ok(Flow::Halt) => return RunOutcome::Halted,
                Err(fault) => {
                    self.raise_exception(fault.kind, fault.ea);
                    return RunOutcome::Exception(fault.kind);
                }
            }
        }
        RunOutcome::Completed
    }

    /// Samples the bus interrupt lines and takes an external interrupt if one is due.
    ///
    /// A change of the line state latches PICSR and marks an interrupt pending when any
    /// line is asserted; a line held high does not re-trigger.
    fn check_interrupts(&mut self) -> Option<ExceptionKind> {
        let lines = self.bus.interrupts();
        if lines != self.picsr {
            self.picsr = lines;
            self.interrupt_pending = lines != 0;
        }
        if self.sr & sr::IEE != 0 && self.interrupt_pending && self.picsr & self.picmr != 0 {
            self.interrupt_pending = false;
            let pc = self.pc;
            self.raise_exception(ExceptionKind::ExternalInterrupt, pc);
            return Some(ExceptionKind::ExternalInterrupt);
        }
        None
    }

    /// Advances TTCR and raises the tick timer exception on a period match.
    ///
    /// Only continuous mode is modeled.
    fn tick_timer(&mut self) -> Option<ExceptionKind> {
        self.ttcr = self.ttcr.wrapping_add(1);
        if self.ttmr >> TTMR_MODE_SHIFT == TTMR_MODE_CONTINUOUS
            && self.ttcr & TTMR_PERIOD_MASK == self.ttmr & TTMR_PERIOD_MASK
            && self.ttmr & TTMR_IE != 0
        {
            self.ttmr |= TTMR_IP;
            if self.sr & sr::TEE != 0 {
                let pc = self.pc;
                self.raise_exception(ExceptionKind::TickTimer, pc);
                return Some(ExceptionKind::TickTimer);
            }
        }
        None
    }

    /// Fetches the instruction word at PC.
    ///
    /// A PC on the memoized page reads RAM directly; otherwise the instruction MMU
    /// translates it and a RAM result refreshes the memo.
    fn fetch(&mut self) -> Result<u32, ExceptionKind> {
        let pc = self.pc;
        if pc & 3 != 0 {
            return Err(ExceptionKind::Alignment);
        }
        if pc & PAGE_MASK == self.fetch_page {
            self.stats.fetch_fast += 1;
            return self
                .bus
                .ram_mut()
                .load32(self.fetch_ppage | (pc & PAGE_OFFSET_MASK));
        }

        self.stats.fetch_slow += 1;
        let privilege = self.privilege();
        let (paddr, is_ram) =
            self.immu
                .map_address(VirtAddr::new(pc), privilege, AccessType::Fetch)?;
        if is_ram {
            self.fetch_page = pc & PAGE_MASK;
            self.fetch_ppage = paddr.val() & PAGE_MASK;
            self.bus.ram_mut().load32(paddr.val())
        } else {
            self.bus.load32(paddr)
        }
    }

    /// Jump target `offset` words from the current instruction.
    #[inline(always)]
    const fn relative_target(&self, offset: i32) -> u32 {
        self.pc.wrapping_add((offset as u32) << 2)
    }

    /// Writes the link register (`r9`) with the address after the delay slot.
    #[inline(always)]
    fn link(&mut self) {
        let ret = self.pc.wrapping_add(8);
        self.set_reg(Reg::LINK, ret);
    }

    /// Executes one decoded instruction.
    fn execute(&mut self, inst: Instruction) -> Result<Flow, Fault> {
        match inst {
            Instruction::J { offset } => self.jump(self.relative_target(offset)),
            Instruction::Jal { offset } => {
                let target = self.relative_target(offset);
                self.link();
                self.jump(target);
            }
            Instruction::Bnf { offset } => {
                if self.flag() {
                    self.advance();
                } else {
                    self.jump(self.relative_target(offset));
                }
            }
            Instruction::Bf { offset } => {
                if self.flag() {
                    self.jump(self.relative_target(offset));
                } else {
                    self.advance();
                }
            }
            Instruction::Nop { k } => {
                if k == HALT_NOP_IMMEDIATE && self.privilege().is_supervisor() {
                    return Ok(Flow::Halt);
                }
                self.advance();
            }
            Instruction::Movhi { d, k } => {
                self.set_reg(d, (k as u32) << 16);
                self.advance();
            }
            Instruction::Sys { .. } => {
                self.pc = self.pc.wrapping_add(4);
                return Err(Fault::new(ExceptionKind::SystemCall, 0));
            }
            Instruction::Trap { .. } => {
                self.advance();
                return Ok(Flow::Halt);
            }
            Instruction::Rfe => self.return_from_exception(),
            Instruction::Jr { b } => self.jump(self.reg(b)),
            Instruction::Jalr { b } => {
                let target = self.reg(b);
                self.link();
                self.jump(target);
            }
            Instruction::Load { op, d, a, i } => {
                let ea = self.reg(a).wrapping_add(i as i32 as u32);
                let val = self.load(op, ea).map_err(|kind| Fault::new(kind, ea))?;
                self.set_reg(d, val);
                self.advance();
            }
            Instruction::Addi { d, a, i } => {
                self.set_reg(d, self.reg(a).wrapping_add(i as i32 as u32));
                self.advance();
            }
            Instruction::Andi { d, a, k } => {
                self.set_reg(d, self.reg(a) & k as u32);
                self.advance();
            }
            Instruction::Ori { d, a, k } => {
                self.set_reg(d, self.reg(a) | k as u32);
                self.advance();
            }
            Instruction::Xori { d, a, i } => {
                self.set_reg(d, self.reg(a) ^ i as i32 as u32);
                self.advance();
            }
            Instruction::Mfspr { d, a, k } => {
                let val = self.spr(self.reg(a) | k as u32);
                self.set_reg(d, val);
                self.advance();
            }
            Instruction::Mtspr { a, b, k } => {
                self.set_spr(self.reg(a) | k as u32, self.reg(b));
                if self.ttmr & TTMR_IP != 0 && self.sr & sr::TEE != 0 {
                    return Err(Fault::new(ExceptionKind::TickTimer, 0));
                }
                self.advance();
            }
            Instruction::ShiftImm { op, d, a, l } => {
                self.set_reg(d, Alu::execute(op.alu_op(), self.reg(a), l as u32));
                self.advance();
            }
            Instruction::SetFlagImm { cond, a, i } => {
                self.set_flag(Alu::compare(cond, self.reg(a), i as i32 as u32));
                self.advance();
            }
            Instruction::Store { op, a, b, i } => {
                let ea = self.reg(a).wrapping_add(i as i32 as u32);
                self.store(op, ea, self.reg(b))
                    .map_err(|kind| Fault::new(kind, ea))?;
                self.advance();
            }
            Instruction::Alu { op, d, a, b } => {
                self.set_reg(d, Alu::execute(op, self.reg(a), self.reg(b)));
                self.advance();
            }
            Instruction::SetFlag { cond, a, b } => {
                self.set_flag(Alu::compare(cond, self.reg(a), self.reg(b)));
                self.advance();
            }
            Instruction::Illegal(_) => {
                return Err(Fault::new(ExceptionKind::IllegalInstruction, self.pc));
            }
        }
        Ok(Flow::Continue)
    }
}
