//! ALU arithmetic operations.
//!
//! Signed and unsigned operands share one 32-bit representation, so add, subtract
//! and multiply are plain wrapping operations. Overflow is never reported (the
//! overflow-exception enable bit is not supported).

use crate::isa::instruction::AluOp;

/// Executes an integer arithmetic operation.
///
/// # Arguments
///
/// * `op` - The ALU operation to perform (must be an arithmetic variant).
/// * `a`  - First operand.
/// * `b`  - Second operand.
///
/// # Returns
///
/// The wrapped 32-bit result. Returns `0` for non-arithmetic opcodes.
pub fn execute(op: AluOp, a: u32, b: u32) -> u32 {
    match op {
        AluOp::Add => a.wrapping_add(b),
        AluOp::Sub => a.wrapping_sub(b),
        AluOp::Mul => (a as i32).wrapping_mul(b as i32) as u32,
        AluOp::Div => {
            if b == 0 {
                0
            } else {
                // i32::MIN / -1 wraps to i32::MIN.
                (a as i32).wrapping_div(b as i32) as u32
            }
        }
        AluOp::Divu => a.checked_div(b).unwrap_or(0),
        _ => 0,
    }
}
