//! Translation Lookaside Buffer (TLB).
//!
//! A software-managed, direct-mapped, one-way TLB. Each set is a pair of special-purpose
//! registers: a match register holding the virtual page tag and a valid bit, and a
//! translate register holding the physical page and the permission bits. Software fills
//! the sets through `l.mtspr`; the hardware only looks them up.

use crate::common::constants::{PAGE_MASK, PAGE_SHIFT};

/// Number of match/translate register pairs per MMU.
pub const TLB_SETS: usize = 128;

/// Number of sets indexed by translation (reported by MMUCFGR).
pub const USED_SETS: u32 = 64;

/// First match register index in the MMU register bank.
pub const MATCH_BASE: u32 = 512;

/// First translate register index in the MMU register bank.
pub const TRANSLATE_BASE: u32 = 640;

/// Match register: entry valid.
pub const MATCH_VALID: u32 = 0x1;

/// Data translate register: user read enable.
pub const DTLB_URE: u32 = 0x40;
/// Data translate register: user write enable.
pub const DTLB_UWE: u32 = 0x80;
/// Data translate register: supervisor read enable.
pub const DTLB_SRE: u32 = 0x100;
/// Data translate register: supervisor write enable.
pub const DTLB_SWE: u32 = 0x200;

/// Instruction translate register: supervisor execute enable.
pub const ITLB_SXE: u32 = 0x40;
/// Instruction translate register: user execute enable.
pub const ITLB_UXE: u32 = 0x80;

/// TLB register storage.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Tlb {
    match_regs: [u32; TLB_SETS],
    translate_regs: [u32; TLB_SETS],
}

impl Default for Tlb {
    fn default() -> Self {
        Self::new()
    }
}

impl Tlb {
    /// Creates a TLB with every register zeroed (all entries invalid).
    pub const fn new() -> Self {
        Self {
            match_regs: [0; TLB_SETS],
            translate_regs: [0; TLB_SETS],
        }
    }

    /// Looks up the translate register for a virtual address.
    ///
    /// # Arguments
    ///
    /// * `vaddr` - The virtual address being translated.
    ///
    /// # Returns
    ///
    /// `Some(translate)` when the indexed set is valid and its tag equals the page number,
    /// otherwise `None`.
    #[inline(always)]
    pub fn lookup(&self, vaddr: u32) -> Option<u32> {
        let page = vaddr >> PAGE_SHIFT;
        let set = (page % USED_SETS) as usize;
        let tag = self.match_regs[set];
        if tag & MATCH_VALID == 0 || tag >> PAGE_SHIFT != page {
            return None;
        }
        Some(self.translate_regs[set])
    }

    /// Reads a match or translate register by bank index.
    ///
    /// # Returns
    ///
    /// `None` when `index` is outside both register ranges.
    pub fn reg(&self, index: u32) -> Option<u32> {
        match Self::slot(index)? {
            (Bank::Match, set) => Some(self.match_regs[set]),
            (Bank::Translate, set) => Some(self.translate_regs[set]),
        }
    }

    /// Writes a match or translate register by bank index.
    ///
    /// # Returns
    ///
    /// `false` when `index` is outside both register ranges (nothing is written).
    pub fn set_reg(&mut self, index: u32, val: u32) -> bool {
        match Self::slot(index) {
            Some((Bank::Match, set)) => self.match_regs[set] = val,
            Some((Bank::Translate, set)) => self.translate_regs[set] = val,
            None => return false,
        }
        true
    }

    /// Invalidates every entry by zeroing the match registers.
    pub fn clear(&mut self) {
        self.match_regs = [0; TLB_SETS];
    }

    fn slot(index: u32) -> Option<(Bank, usize)> {
        let sets = TLB_SETS as u32;
        if (MATCH_BASE..MATCH_BASE + sets).contains(&index) {
            Some((Bank::Match, (index - MATCH_BASE) as usize))
        } else if (TRANSLATE_BASE..TRANSLATE_BASE + sets).contains(&index) {
            Some((Bank::Translate, (index - TRANSLATE_BASE) as usize))
        } else {
            None
        }
    }
}

/// Physical page base held by a translate register.
#[inline(always)]
pub const fn physical_page(translate: u32) -> u32 {
    translate & PAGE_MASK
}

#[derive(Clone, Copy)]
enum Bank {
    Match,
    Translate,
}
