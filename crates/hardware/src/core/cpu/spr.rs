//! Special-Purpose Register Access.
//!
//! This module implements `l.mfspr`/`l.mtspr` addressing. An SPR address selects a group
//! and an index within it:
//! 1. **System group:** identification registers (read-only), SR and the exception context.
//! 2. **MMU groups:** forwarded to the data and instruction MMU register banks.
//! 3. **PIC and tick timer groups:** interrupt mask/status and timer mode/count.
//!
//! Addresses outside the modeled set are logged and tolerated: reads return 0 and
//! writes are dropped.

use tracing::warn;

use super::Cpu;
use crate::core::arch::spr::{
    self, AVR, AVR_VALUE, CPUCFGR, CPUCFGR_VALUE, DCCFGR, DMMUCFGR, EEAR0, EPCR0, ESR0,
    GROUP_DMMU, GROUP_ICACHE, GROUP_IMMU, GROUP_PIC, GROUP_SYS, GROUP_TICK, ICBIR, ICCFGR,
    IMMUCFGR, MMUCFGR_VALUE, PICMR, PICSR, SR, TTCR, TTMR, TTMR_MODE_ONE_SHOT,
    TTMR_MODE_RESTART, TTMR_MODE_SHIFT, UPR, UPR_VALUE, VR, VR_VALUE, VR2,
};

impl Cpu {
    /// Reads a special-purpose register.
    ///
    /// # Arguments
    ///
    /// * `addr` - 16-bit SPR address (`group << 11 | index`).
    ///
    /// # Returns
    ///
    /// The register value, or 0 for unmodeled registers.
    pub fn spr(&self, addr: u32) -> u32 {
        match spr::split(addr) {
            (GROUP_SYS, VR) => VR_VALUE,
            (GROUP_SYS, UPR) => UPR_VALUE,
            (GROUP_SYS, CPUCFGR) => CPUCFGR_VALUE,
            (GROUP_SYS, DMMUCFGR | IMMUCFGR) => MMUCFGR_VALUE,
            (GROUP_SYS, DCCFGR | ICCFGR | VR2) => 0,
            (GROUP_SYS, AVR) => AVR_VALUE,
            (GROUP_SYS, SR) => self.sr,
            (GROUP_SYS, EPCR0) => self.epcr0,
            (GROUP_SYS, EEAR0) => self.eear0,
            (GROUP_SYS, ESR0) => self.esr0,
            (GROUP_DMMU, index) => self.dmmu.reg(index),
            (GROUP_IMMU, index) => self.immu.reg(index),
            (GROUP_PIC, PICMR) => self.picmr,
            (GROUP_PIC, PICSR) => self.picsr,
            (GROUP_TICK, TTMR) => self.ttmr,
            (GROUP_TICK, TTCR) => self.ttcr,
            (group, index) => {
                warn!(group, index, "read of unknown SPR");
                0
            }
        }
    }

    /// Writes a special-purpose register with its side effects.
    ///
    /// SR writes update the MMU enables and drop the translation memos; MMU register writes
    /// drop the fetch memo. Identification registers are read-only.
    pub fn set_spr(&mut self, addr: u32, val: u32) {
        match spr::split(addr) {
            (GROUP_SYS, SR) => self.set_sr(val),
            (GROUP_SYS, EPCR0) => self.epcr0 = val,
            (GROUP_SYS, EEAR0) => self.eear0 = val,
            (GROUP_SYS, ESR0) => self.esr0 = val,
            (
                GROUP_SYS,
                index @ (VR | UPR | CPUCFGR | DMMUCFGR | IMMUCFGR | DCCFGR | ICCFGR | VR2 | AVR),
            ) => warn!(index, val, "write to read-only SPR ignored"),
            (GROUP_DMMU, index) => {
                self.dmmu.set_reg(index, val);
                self.invalidate_fetch_page();
            }
            (GROUP_IMMU, index) => {
                self.immu.set_reg(index, val);
                self.invalidate_fetch_page();
            }
            (GROUP_ICACHE, ICBIR) => {}
            (GROUP_PIC, PICMR) => self.picmr = val,
            (GROUP_PIC, PICSR) => self.picsr = val,
            (GROUP_TICK, TTMR) => {
                let mode = val >> TTMR_MODE_SHIFT;
                if mode == TTMR_MODE_RESTART || mode == TTMR_MODE_ONE_SHOT {
                    warn!(mode, "unsupported tick timer mode");
                }
                self.ttmr = val;
            }
            (GROUP_TICK, TTCR) => self.ttcr = val,
            (group, index) => warn!(group, index, val, "write to unknown SPR ignored"),
        }
    }
}
