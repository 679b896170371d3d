//! Arithmetic Logic Unit (ALU).
//!
//! This module implements the 32-bit integer ALU used by the executor for the
//! register-register family, the immediate forms and the set-flag comparisons.
//!
//! Operations are organized into submodules by category:
//! - [`arithmetic`]: Add, Sub, Mul, Div, Divu
//! - [`logic`]:      And, Or, Xor, Ff1, Fl1 and the set-flag comparisons
//! - [`shifts`]:     Sll, Srl, Sra
//!
//! Nothing here traps: arithmetic wraps and division by zero yields 0.

/// Integer arithmetic operations (add, subtract, multiply, divide).
pub mod arithmetic;

/// Bitwise logical, bit-scan and comparison operations.
pub mod logic;

/// Shift operations (sll, srl, sra).
pub mod shifts;

use crate::isa::instruction::{AluOp, SetFlagCond};

/// Arithmetic Logic Unit (ALU) for integer operations.
#[derive(Debug)]
pub struct Alu;

impl Alu {
    /// Executes an integer ALU operation.
    ///
    /// # Arguments
    ///
    /// * `op` - The ALU operation to perform
    /// * `a`  - First operand
    /// * `b`  - Second operand (shift amount for shifts, ignored by `Ff1`/`Fl1`)
    ///
    /// # Returns
    ///
    /// The 32-bit result.
    ///
    /// # Examples
    ///
    /// ```
    /// use orsim_core::core::units::alu::Alu;
    /// use orsim_core::isa::instruction::AluOp;
    ///
    /// assert_eq!(Alu::execute(AluOp::Add, 0x7fff_ffff, 1), 0x8000_0000);
    /// assert_eq!(Alu::execute(AluOp::Divu, 7, 0), 0);
    /// assert_eq!(Alu::execute(AluOp::Fl1, 0x0001_1000, 0), 17);
    /// ```
    #[inline]
    pub fn execute(op: AluOp, a: u32, b: u32) -> u32 {
        match op {
            AluOp::Add | AluOp::Sub | AluOp::Mul | AluOp::Div | AluOp::Divu => {
                arithmetic::execute(op, a, b)
            }
            AluOp::And | AluOp::Or | AluOp::Xor | AluOp::Ff1 | AluOp::Fl1 => {
                logic::execute(op, a, b)
            }
            AluOp::Sll | AluOp::Srl | AluOp::Sra => shifts::execute(op, a, b),
        }
    }

    /// Evaluates a set-flag comparison.
    #[inline]
    pub fn compare(cond: SetFlagCond, a: u32, b: u32) -> bool {
        logic::compare(cond, a, b)
    }
}
