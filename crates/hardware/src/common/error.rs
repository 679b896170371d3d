//! Exception kinds and host-level errors.
//!
//! This module defines the two error domains of the simulator. It provides:
//! 1. **Exception Kinds:** The architectural exceptions a guest can observe, each with a fixed
//!    vector address and a flag telling whether the effective address is latched into EEAR.
//! 2. **Simulator Errors:** Host-level failures (unreadable images, images that do not fit in
//!    RAM, malformed configuration) reported to the embedding caller.
//!
//! Guest-visible faults never become host errors: translation and memory paths return
//! `Result<T, ExceptionKind>` and the executor dispatches them architecturally.

use std::fmt;
use std::io;
use std::path::PathBuf;

/// Architectural exception kinds.
///
/// The discriminant is the exception's vector number; the handler lives at
/// `discriminant * 0x100`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum ExceptionKind {
    /// Reset.
    Reset = 0x1,
    /// Access to a physical address that no device claims, or an unsupported access width.
    BusError = 0x2,
    /// Data access denied by the data TLB permission bits.
    DataPageFault = 0x3,
    /// Instruction fetch denied by the instruction TLB permission bits.
    InstructionPageFault = 0x4,
    /// Tick timer period elapsed with timer exceptions enabled.
    TickTimer = 0x5,
    /// Misaligned half-word or word access, or a misaligned fetch.
    Alignment = 0x6,
    /// Undefined or unsupported instruction encoding.
    IllegalInstruction = 0x7,
    /// Unmasked interrupt from the programmable interrupt controller.
    ExternalInterrupt = 0x8,
    /// No valid data TLB entry for the effective address.
    DTlbMiss = 0x9,
    /// No valid instruction TLB entry for the fetch address.
    ITlbMiss = 0xA,
    /// Range exception (never raised; overflow detection is unsupported).
    Range = 0xB,
    /// `l.sys` system call.
    SystemCall = 0xC,
    /// Floating-point exception (never raised; floating point is unsupported).
    FloatingPoint = 0xD,
    /// Trap exception.
    Trap = 0xE,
}

impl ExceptionKind {
    /// Every exception kind, in vector order.
    pub const ALL: [Self; 14] = [
        Self::Reset,
        Self::BusError,
        Self::DataPageFault,
        Self::InstructionPageFault,
        Self::TickTimer,
        Self::Alignment,
        Self::IllegalInstruction,
        Self::ExternalInterrupt,
        Self::DTlbMiss,
        Self::ITlbMiss,
        Self::Range,
        Self::SystemCall,
        Self::FloatingPoint,
        Self::Trap,
    ];

    /// Returns the vector number (1-14).
    #[inline]
    pub const fn code(self) -> u8 {
        self as u8
    }

    /// Returns the physical address of the exception handler.
    #[inline]
    pub const fn vector(self) -> u32 {
        (self as u32) << 8
    }

    /// Returns `true` when dispatching this kind writes the effective address into EEAR0.
    #[inline]
    pub const fn sets_eear(self) -> bool {
        matches!(
            self,
            Self::BusError
                | Self::DataPageFault
                | Self::InstructionPageFault
                | Self::Alignment
                | Self::IllegalInstruction
                | Self::DTlbMiss
                | Self::ITlbMiss
        )
    }

    /// Returns the human-readable name of the exception kind.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Reset => "Reset",
            Self::BusError => "BusError",
            Self::DataPageFault => "DataPageFault",
            Self::InstructionPageFault => "InstructionPageFault",
            Self::TickTimer => "TickTimer",
            Self::Alignment => "Alignment",
            Self::IllegalInstruction => "IllegalInstruction",
            Self::ExternalInterrupt => "ExternalInterrupt",
            Self::DTlbMiss => "DTlbMiss",
            Self::ITlbMiss => "ITlbMiss",
            Self::Range => "Range",
            Self::SystemCall => "SystemCall",
            Self::FloatingPoint => "FloatingPoint",
            Self::Trap => "Trap",
        }
    }
}

impl fmt::Display for ExceptionKind {
    /// Formats the exception kind with its vector address.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}({:#x})", self.name(), self.vector())
    }
}

impl std::error::Error for ExceptionKind {}

/// Host-level simulator errors.
///
/// These end an operation early and are reported to the embedding caller; they
/// never reach the guest.
#[derive(Debug, thiserror::Error)]
pub enum SimError {
    /// The image would extend past the end of RAM.
    #[error("image of {len} bytes at offset {offset:#x} does not fit in {capacity} bytes of RAM")]
    ImageTooLarge {
        /// Physical load offset.
        offset: u32,
        /// Image length in bytes.
        len: usize,
        /// RAM capacity in bytes.
        capacity: usize,
    },

    /// The image length is not a whole number of 32-bit words.
    #[error("image length {len} is not a multiple of 4 bytes")]
    UnalignedImageLength {
        /// Image length in bytes.
        len: usize,
    },

    /// The image file could not be read.
    #[error("could not read image '{}': {source}", path.display())]
    Io {
        /// Path of the image file.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: io::Error,
    },

    /// The configuration document is malformed.
    #[error("invalid configuration: {0}")]
    Config(#[from] serde_json::Error),
}
