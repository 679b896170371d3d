//! OpenRISC Privilege Modes.
//!
//! This module defines the two privilege levels of the architecture. It implements the following:
//! 1. **Mode Classification:** User and Supervisor modes.
//! 2. **Derivation:** The current mode is the SM bit of the supervision register.
//! 3. **Observability:** Human-readable naming and display formatting for privilege states.

use std::fmt;

use crate::core::arch::sr;

/// OpenRISC privilege mode levels.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub enum PrivilegeMode {
    /// User mode (SR.SM clear).
    User = 0,

    /// Supervisor mode (SR.SM set).
    ///
    /// Entered on reset and on every exception.
    Supervisor = 1,
}

impl PrivilegeMode {
    /// Derives the privilege mode from a supervision register value.
    #[inline(always)]
    pub const fn from_sr(sr_val: u32) -> Self {
        if sr_val & sr::SM != 0 {
            Self::Supervisor
        } else {
            Self::User
        }
    }

    /// Returns `true` for supervisor mode.
    #[inline(always)]
    pub const fn is_supervisor(self) -> bool {
        matches!(self, Self::Supervisor)
    }

    /// Returns the human-readable name of the privilege mode.
    pub const fn name(self) -> &'static str {
        match self {
            Self::User => "User",
            Self::Supervisor => "Supervisor",
        }
    }
}

impl fmt::Display for PrivilegeMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
