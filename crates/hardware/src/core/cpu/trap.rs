//! Exception Handling Logic.
//!
//! This module implements exception dispatch and the delay-slot protocol. It performs
//! the following:
//! 1. **Exception Dispatch:** Saves SR, PC and the effective address into the single
//!    exception context, enters supervisor mode and jumps to the fixed vector.
//! 2. **Return Handling:** Implements `l.rfe`.
//! 3. **Delay Slots:** `jump` defers a control transfer by one instruction; `advance`
//!    completes it.

use tracing::{debug, info};

use super::Cpu;
use crate::common::ExceptionKind;
use crate::common::constants::INSTRUCTION_SIZE;
use crate::core::arch::sr;

impl Cpu {
    /// Dispatches an architectural exception.
    ///
    /// The order is fixed: ESR0 takes SR (with DSX set, PC stepped back to the branch and the
    /// delay-slot flag cleared if the faulting instruction sat in a delay slot), SR is forced
    /// to `FO|SM` with its side effects, EPCR0 takes PC, PC takes the vector and EEAR0 takes
    /// `ea` when the kind carries an address.
    ///
    /// # Arguments
    ///
    /// * `kind` - The exception to dispatch.
    /// * `ea` - The faulting effective address (ignored for kinds that do not set EEAR).
    pub fn raise_exception(&mut self, kind: ExceptionKind, ea: u32) {
        let mut saved_sr = self.sr;
        if self.in_delay_slot {
            saved_sr |= sr::DSX;
            self.pc = self.pc.wrapping_sub(INSTRUCTION_SIZE);
            self.in_delay_slot = false;
        }
        self.esr0 = saved_sr;
        self.set_sr(sr::RESET_VALUE);
        self.epcr0 = self.pc;
        self.pc = kind.vector();
        if kind.sets_eear() {
            self.eear0 = ea;
        }

        let epcr = self.epcr0;
        if self.trace_exceptions {
            info!(%kind, epcr = format_args!("{epcr:#010x}"), ea = format_args!("{ea:#010x}"), "exception");
        } else {
            debug!(%kind, epcr = format_args!("{epcr:#010x}"), ea = format_args!("{ea:#010x}"), "exception");
        }
        self.stats.record_exception(kind);
    }

    /// Returns from an exception (`l.rfe`): PC from EPCR0, SR from ESR0.
    pub fn return_from_exception(&mut self) {
        self.pc = self.epcr0;
        self.set_sr(self.esr0);
        self.in_delay_slot = false;
    }

    /// Moves to the next instruction, completing a pending delayed transfer.
    #[inline(always)]
    pub(crate) const fn advance(&mut self) {
        self.pc = if self.in_delay_slot {
            self.delayed_next_pc
        } else {
            self.pc.wrapping_add(INSTRUCTION_SIZE)
        };
        self.in_delay_slot = false;
    }

    /// Schedules a transfer to `target` after the delay slot.
    #[inline(always)]
    pub(crate) const fn jump(&mut self, target: u32) {
        self.delayed_next_pc = target;
        self.pc = self.pc.wrapping_add(INSTRUCTION_SIZE);
        self.in_delay_slot = true;
    }
}
