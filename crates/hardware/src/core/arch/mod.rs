//! OpenRISC architecture-specific components.
//!
//! This module contains the implementation of the core architectural elements.
//! It includes the following modules:
//! 1. **GPRs:** General-Purpose Register file implementation.
//! 2. **Modes:** Privilege mode definitions derived from the supervision register.
//! 3. **SPRs:** Special-purpose register group/index map and identification values.
//! 4. **SR:** Supervision register bit definitions.

/// General-Purpose Register file implementation.
pub mod gpr;

/// Privilege mode definitions.
pub mod mode;

/// Special-purpose register address map.
pub mod spr;

/// Supervision register bit definitions.
pub mod sr;
