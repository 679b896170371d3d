//! Memory Management Unit (MMU).
//!
//! This module implements the Memory Management Unit, responsible for
//! virtual-to-physical address translation. Two instances exist per CPU, one on the
//! instruction side and one on the data side. Each provides:
//! 1. **Translation:** A software-managed TLB lookup with per-page, per-privilege permissions.
//! 2. **Fast Path:** A one-entry (virtual page, physical page) memo consulted by word loads.
//! 3. **Access:** Aligned byte, half-word and word loads/stores, directly to RAM or via the bus.

/// Translation Lookaside Buffer register storage.
pub mod tlb;

use tracing::warn;

use crate::common::constants::{NO_CACHED_PAGE, PAGE_MASK, PAGE_OFFSET_MASK};
use crate::common::{AccessType, ExceptionKind, PhysAddr, VirtAddr};
use crate::core::arch::mode::PrivilegeMode;
use crate::soc::interconnect::Bus;
use crate::soc::traits::Device;

use self::tlb::{DTLB_SRE, DTLB_SWE, DTLB_URE, DTLB_UWE, ITLB_SXE, ITLB_UXE, Tlb};

/// Which side of the core an MMU serves.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MmuSide {
    /// Instruction MMU: checks execute permissions, raises ITLB miss / instruction page fault.
    Instruction,
    /// Data MMU: checks read/write permissions, raises DTLB miss / data page fault.
    Data,
}

impl MmuSide {
    const fn tlb_miss(self) -> ExceptionKind {
        match self {
            Self::Instruction => ExceptionKind::ITlbMiss,
            Self::Data => ExceptionKind::DTlbMiss,
        }
    }

    const fn page_fault(self) -> ExceptionKind {
        match self {
            Self::Instruction => ExceptionKind::InstructionPageFault,
            Self::Data => ExceptionKind::DataPageFault,
        }
    }

    /// Permission bits that grant `access` at `privilege` on this side.
    ///
    /// Either execute-enable bit grants a fetch in both modes; only the data side
    /// splits permissions by privilege.
    const fn required_bits(self, privilege: PrivilegeMode, access: AccessType) -> u32 {
        match (self, privilege, access.is_write()) {
            (Self::Instruction, _, _) => ITLB_SXE | ITLB_UXE,
            (Self::Data, PrivilegeMode::Supervisor, false) => DTLB_SRE | DTLB_URE,
            (Self::Data, PrivilegeMode::Supervisor, true) => DTLB_SWE | DTLB_UWE,
            (Self::Data, PrivilegeMode::User, false) => DTLB_URE,
            (Self::Data, PrivilegeMode::User, true) => DTLB_UWE,
        }
    }
}

/// Memory Management Unit for one side of the core.
#[derive(Clone, Debug)]
pub struct Mmu {
    side: MmuSide,
    enabled: bool,
    /// Raw control word (register index 0); stored, not interpreted.
    control: u32,
    tlb: Tlb,
    /// Virtual page base of the fast memo, or `NO_CACHED_PAGE`.
    fast_vpage: u32,
    /// Physical page base paired with `fast_vpage`.
    fast_ppage: u32,
    fast_hits: u64,
    fast_misses: u64,
}

impl Mmu {
    /// Creates a disabled MMU with an empty TLB.
    pub const fn new(side: MmuSide) -> Self {
        Self {
            side,
            enabled: false,
            control: 0,
            tlb: Tlb::new(),
            fast_vpage: NO_CACHED_PAGE,
            fast_ppage: 0,
            fast_hits: 0,
            fast_misses: 0,
        }
    }

    /// Returns the side this MMU serves.
    pub const fn side(&self) -> MmuSide {
        self.side
    }

    /// Returns `true` when translation is enabled.
    pub const fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Enables or disables translation. Always invalidates the fast memo.
    pub const fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
        self.invalidate();
    }

    /// Drops the fast memo.
    #[inline(always)]
    pub const fn invalidate(&mut self) {
        self.fast_vpage = NO_CACHED_PAGE;
    }

    /// Invalidates every TLB entry and the fast memo.
    ///
    /// Translate registers, the control word and the enable flag are left alone; the CPU
    /// re-derives the enable flag from SR on reset.
    pub fn reset(&mut self) {
        self.tlb.clear();
        self.invalidate();
    }

    /// Number of word loads served by the fast memo.
    pub const fn fast_hits(&self) -> u64 {
        self.fast_hits
    }

    /// Number of word loads that fell back to full translation.
    pub const fn fast_misses(&self) -> u64 {
        self.fast_misses
    }

    /// Reads an MMU register by bank index.
    ///
    /// Index 0 is the control word, 512..=639 the match registers and 640..=767 the
    /// translate registers. Other indices log a warning and read as zero.
    pub fn reg(&self, index: u32) -> u32 {
        if index == 0 {
            return self.control;
        }
        self.tlb.reg(index).unwrap_or_else(|| {
            warn!(side = ?self.side, index, "read of unknown MMU register");
            0
        })
    }

    /// Writes an MMU register by bank index. Always invalidates the fast memo.
    pub fn set_reg(&mut self, index: u32, val: u32) {
        self.invalidate();
        if index == 0 {
            self.control = val;
        } else if !self.tlb.set_reg(index, val) {
            warn!(side = ?self.side, index, val, "write to unknown MMU register ignored");
        }
    }

    /// Translates a virtual address.
    ///
    /// # Arguments
    ///
    /// * `vaddr` - Virtual (effective) address.
    /// * `privilege` - Privilege mode the access is made in.
    /// * `access` - Fetch, read or write; selects the permission bits checked.
    ///
    /// # Returns
    ///
    /// `(paddr, is_ram)` on success, or the side-specific TLB miss / page fault.
    pub fn map_address(
        &mut self,
        vaddr: VirtAddr,
        privilege: PrivilegeMode,
        access: AccessType,
    ) -> Result<(PhysAddr, bool), ExceptionKind> {
        let paddr = if self.enabled {
            let translate = self
                .tlb
                .lookup(vaddr.val())
                .ok_or_else(|| self.side.tlb_miss())?;
            if translate & self.side.required_bits(privilege, access) == 0 {
                return Err(self.side.page_fault());
            }
            PhysAddr::new(tlb::physical_page(translate) | vaddr.page_offset())
        } else {
            PhysAddr::new(vaddr.val())
        };

        let is_ram = paddr.is_ram();
        if !is_ram {
            self.invalidate();
        } else if !access.is_write() {
            self.fast_vpage = vaddr.page_base();
            self.fast_ppage = paddr.val() & PAGE_MASK;
        }
        Ok((paddr, is_ram))
    }

    fn read_access(&self) -> AccessType {
        match self.side {
            MmuSide::Instruction => AccessType::Fetch,
            MmuSide::Data => AccessType::Read,
        }
    }

    /// Loads one byte.
    pub fn load8(
        &mut self,
        bus: &mut Bus,
        vaddr: VirtAddr,
        privilege: PrivilegeMode,
    ) -> Result<u8, ExceptionKind> {
        let (paddr, is_ram) = self.map_address(vaddr, privilege, self.read_access())?;
        if is_ram {
            bus.ram_mut().load8(paddr.val())
        } else {
            bus.load8(paddr)
        }
    }

    /// Loads a big-endian half-word. Odd addresses raise `Alignment` before translation.
    pub fn load16(
        &mut self,
        bus: &mut Bus,
        vaddr: VirtAddr,
        privilege: PrivilegeMode,
    ) -> Result<u16, ExceptionKind> {
        if vaddr.val() & 1 != 0 {
            return Err(ExceptionKind::Alignment);
        }
        let (paddr, is_ram) = self.map_address(vaddr, privilege, self.read_access())?;
        if is_ram {
            bus.ram_mut().load16(paddr.val())
        } else {
            bus.load16(paddr)
        }
    }

    /// Loads a big-endian word.
    ///
    /// Addresses that are not a multiple of 4 raise `Alignment` before translation. A
    /// load from the memoized page skips the TLB.
    pub fn load32(
        &mut self,
        bus: &mut Bus,
        vaddr: VirtAddr,
        privilege: PrivilegeMode,
    ) -> Result<u32, ExceptionKind> {
        if vaddr.val() & 3 != 0 {
            return Err(ExceptionKind::Alignment);
        }
        if vaddr.page_base() == self.fast_vpage {
            self.fast_hits += 1;
            return bus
                .ram_mut()
                .load32(self.fast_ppage | (vaddr.val() & PAGE_OFFSET_MASK));
        }
        self.fast_misses += 1;
        let (paddr, is_ram) = self.map_address(vaddr, privilege, self.read_access())?;
        if is_ram {
            bus.ram_mut().load32(paddr.val())
        } else {
            bus.load32(paddr)
        }
    }

    /// Stores one byte.
    pub fn store8(
        &mut self,
        bus: &mut Bus,
        vaddr: VirtAddr,
        privilege: PrivilegeMode,
        val: u8,
    ) -> Result<(), ExceptionKind> {
        let (paddr, is_ram) = self.map_address(vaddr, privilege, AccessType::Write)?;
        if is_ram {
            bus.ram_mut().store8(paddr.val(), val)
        } else {
            bus.store8(paddr, val)
        }
    }

    /// Stores a big-endian half-word. Odd addresses raise `Alignment` before translation.
    pub fn store16(
        &mut self,
        bus: &mut Bus,
        vaddr: VirtAddr,
        privilege: PrivilegeMode,
        val: u16,
    ) -> Result<(), ExceptionKind> {
        if vaddr.val() & 1 != 0 {
            return Err(ExceptionKind::Alignment);
        }
        let (paddr, is_ram) = self.map_address(vaddr, privilege, AccessType::Write)?;
        if is_ram {
            bus.ram_mut().store16(paddr.val(), val)
        } else {
            bus.store16(paddr, val)
        }
    }

    /// Stores a big-endian word. Addresses not a multiple of 4 raise `Alignment`.
    pub fn store32(
        &mut self,
        bus: &mut Bus,
        vaddr: VirtAddr,
        privilege: PrivilegeMode,
        val: u32,
    ) -> Result<(), ExceptionKind> {
        if vaddr.val() & 3 != 0 {
            return Err(ExceptionKind::Alignment);
        }
        let (paddr, is_ram) = self.map_address(vaddr, privilege, AccessType::Write)?;
        if is_ram {
            bus.ram_mut().store32(paddr.val(), val)
        } else {
            bus.store32(paddr, val)
        }
    }
}
