//! Common utilities and types used throughout the OpenRISC simulator.
//!
//! This module provides the building blocks shared by every component. It includes:
//! 1. **Address Types:** Strong types for virtual and physical addresses.
//! 2. **Constants:** Memory map, page geometry and instruction constants.
//! 3. **Memory Access:** Classification of memory operations (Fetch/Read/Write).
//! 4. **Error Handling:** Architectural exception kinds and host-level simulator errors.
//! 5. **Register Numbers:** A bounds-checked general-purpose register index.

/// Address type definitions (physical and virtual addresses).
pub mod addr;

/// Common constants used throughout the simulator.
pub mod constants;

/// Memory access type definitions.
pub mod data;

/// Exception kinds and host error types.
pub mod error;

/// General-purpose register numbers.
pub mod reg;

pub use addr::{PhysAddr, VirtAddr};
pub use constants::{PAGE_OFFSET_MASK, PAGE_SHIFT};
pub use data::AccessType;
pub use error::{ExceptionKind, SimError};
pub use reg::Reg;
