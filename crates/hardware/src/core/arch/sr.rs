//! Supervision Register (SR) bit definitions.
//!
//! The supervision register controls privilege, exception enables, MMU enables and holds
//! the compare flag. Bits marked unsupported are stored and read back but have no effect.

/// Supervisor mode.
pub const SM: u32 = 1 << 0;
/// Tick timer exception enable.
pub const TEE: u32 = 1 << 1;
/// Interrupt exception enable.
pub const IEE: u32 = 1 << 2;
/// Data cache enable (unsupported).
pub const DCE: u32 = 1 << 3;
/// Instruction cache enable (unsupported).
pub const ICE: u32 = 1 << 4;
/// Data MMU enable.
pub const DME: u32 = 1 << 5;
/// Instruction MMU enable.
pub const IME: u32 = 1 << 6;
/// Little-endian enable (unsupported).
pub const LEE: u32 = 1 << 7;
/// CID enable (unsupported).
pub const CE: u32 = 1 << 8;
/// Compare flag.
pub const F: u32 = 1 << 9;
/// Carry flag.
pub const CY: u32 = 1 << 10;
/// Overflow flag.
pub const OV: u32 = 1 << 11;
/// Overflow exception enable (unsupported).
pub const OVE: u32 = 1 << 12;
/// Delay slot exception.
pub const DSX: u32 = 1 << 13;
/// Exception prefix high (unsupported).
pub const EPH: u32 = 1 << 14;
/// Fixed one.
pub const FO: u32 = 1 << 15;
/// Supervisor user-mode register access (unsupported).
pub const SUMRA: u32 = 1 << 16;

/// Value forced into SR on reset and on exception entry.
pub const RESET_VALUE: u32 = FO | SM;

/// Mode bits whose behavior is not modeled; setting any of them logs a warning.
pub const UNSUPPORTED_MODES: u32 = LEE | CE | EPH | SUMRA;
