//! ALU shift operations.
//!
//! The shift amount is taken modulo 32 (`b & 0x1f`) for both the register
//! and the immediate forms.

use crate::isa::instruction::AluOp;

/// Mask applied to the shift amount.
const SHAMT_MASK: u32 = 0x1F;

/// Executes a shift operation.
///
/// # Returns
///
/// The shifted 32-bit value. Returns `0` for non-shift opcodes.
pub fn execute(op: AluOp, a: u32, b: u32) -> u32 {
    let shamt = b & SHAMT_MASK;
    match op {
        AluOp::Sll => a << shamt,
        AluOp::Srl => a >> shamt,
        AluOp::Sra => ((a as i32) >> shamt) as u32,
        _ => 0,
    }
}
