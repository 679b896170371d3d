//! Special-Purpose Register (SPR) address map.
//!
//! This module defines the SPR address space used by `l.mfspr` and `l.mtspr`. It provides:
//! 1. **Address Decomposition:** A 16-bit SPR address is a 5-bit group and an 11-bit index.
//! 2. **Group Numbers:** System, data MMU, instruction MMU, cache, PIC and tick timer groups.
//! 3. **Register Indices:** System group registers, PIC and tick timer registers.
//! 4. **Identification Values:** Read-only values reported by the system group.

/// Shift of the group field in an SPR address.
pub const GROUP_SHIFT: u32 = 11;
/// Mask of the group field after shifting.
pub const GROUP_MASK: u32 = 0x1F;
/// Mask of the register index within a group.
pub const INDEX_MASK: u32 = 0x7FF;

/// System control and status group.
pub const GROUP_SYS: u32 = 0;
/// Data MMU group.
pub const GROUP_DMMU: u32 = 1;
/// Instruction MMU group.
pub const GROUP_IMMU: u32 = 2;
/// Instruction cache group.
pub const GROUP_ICACHE: u32 = 4;
/// Programmable interrupt controller group.
pub const GROUP_PIC: u32 = 9;
/// Tick timer group.
pub const GROUP_TICK: u32 = 10;

/// Version register.
pub const VR: u32 = 0;
/// Unit present register.
pub const UPR: u32 = 1;
/// CPU configuration register.
pub const CPUCFGR: u32 = 2;
/// Data MMU configuration register.
pub const DMMUCFGR: u32 = 3;
/// Instruction MMU configuration register.
pub const IMMUCFGR: u32 = 4;
/// Data cache configuration register.
pub const DCCFGR: u32 = 5;
/// Instruction cache configuration register.
pub const ICCFGR: u32 = 6;
/// Version register 2.
pub const VR2: u32 = 9;
/// Architecture version register.
pub const AVR: u32 = 10;
/// Supervision register.
pub const SR: u32 = 17;
/// Exception PC register (context 0).
pub const EPCR0: u32 = 32;
/// Exception effective address register (context 0).
pub const EEAR0: u32 = 48;
/// Exception SR register (context 0).
pub const ESR0: u32 = 64;

/// Instruction cache block invalidate register.
pub const ICBIR: u32 = 2;

/// PIC mask register.
pub const PICMR: u32 = 0;
/// PIC status register.
pub const PICSR: u32 = 2;

/// Tick timer mode register.
pub const TTMR: u32 = 0;
/// Tick timer count register.
pub const TTCR: u32 = 1;

/// Reported version: version 0x10, revision 0x40.
pub const VR_VALUE: u32 = 0x1000_0040;
/// Units present: UP, DMP, IMP, PICP, TTP.
pub const UPR_VALUE: u32 = 0x619;
/// CPU configuration: OB32S and AVRP.
pub const CPUCFGR_VALUE: u32 = 0x820;
/// MMU configuration shared by both MMUs: one way, 64 sets.
pub const MMUCFGR_VALUE: u32 = 0x18;
/// Architecture version 1.0.0.
pub const AVR_VALUE: u32 = 0x0100_0000;

/// TTMR period field.
pub const TTMR_PERIOD_MASK: u32 = 0x0FFF_FFFF;
/// TTMR interrupt pending bit.
pub const TTMR_IP: u32 = 1 << 28;
/// TTMR interrupt enable bit.
pub const TTMR_IE: u32 = 1 << 29;
/// Shift of the TTMR mode field.
pub const TTMR_MODE_SHIFT: u32 = 30;
/// TTMR mode: timer disabled.
pub const TTMR_MODE_DISABLED: u32 = 0;
/// TTMR mode: restart on match (not supported).
pub const TTMR_MODE_RESTART: u32 = 1;
/// TTMR mode: stop on match (not supported).
pub const TTMR_MODE_ONE_SHOT: u32 = 2;
/// TTMR mode: continuous.
pub const TTMR_MODE_CONTINUOUS: u32 = 3;

/// Splits an SPR address into `(group, index)`.
///
/// # Examples
///
/// ```
/// use orsim_core::core::arch::spr;
///
/// assert_eq!(spr::split(0x0011), (spr::GROUP_SYS, spr::SR));
/// assert_eq!(spr::split(0x5000), (spr::GROUP_TICK, spr::TTMR));
/// ```
#[inline(always)]
pub const fn split(addr: u32) -> (u32, u32) {
    ((addr >> GROUP_SHIFT) & GROUP_MASK, addr & INDEX_MASK)
}

/// Builds an SPR address from a group and an index.
#[inline(always)]
pub const fn address(group: u32, index: u32) -> u32 {
    ((group & GROUP_MASK) << GROUP_SHIFT) | (index & INDEX_MASK)
}
