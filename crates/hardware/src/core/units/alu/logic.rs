//! ALU logical, bit-scan and comparison operations.
//!
//! Implements bitwise AND, OR and XOR, the find-first/find-last-one scans,
//! and the ten set-flag comparisons shared by `l.sfXX` and `l.sfXXi`.

use crate::isa::instruction::{AluOp, SetFlagCond};

/// Executes a logical or bit-scan operation.
///
/// # Returns
///
/// The 32-bit result. Returns `0` for non-logic opcodes.
pub fn execute(op: AluOp, a: u32, b: u32) -> u32 {
    match op {
        AluOp::And => a & b,
        AluOp::Or => a | b,
        AluOp::Xor => a ^ b,
        AluOp::Ff1 => ff1(a),
        AluOp::Fl1 => fl1(a),
        _ => 0,
    }
}

/// 1-based index of the lowest set bit; 0 when no bit is set.
#[inline]
pub const fn ff1(a: u32) -> u32 {
    if a == 0 { 0 } else { a.trailing_zeros() + 1 }
}

/// 1-based index of the highest set bit; 0 when no bit is set.
#[inline]
pub const fn fl1(a: u32) -> u32 {
    u32::BITS - a.leading_zeros()
}

/// Evaluates a set-flag comparison of `a` against `b`.
///
/// Unsigned conditions compare the raw words; signed conditions reinterpret both
/// as two's-complement. Immediate forms pass the sign-extended immediate as `b`.
pub const fn compare(cond: SetFlagCond, a: u32, b: u32) -> bool {
    let (sa, sb) = (a as i32, b as i32);
    match cond {
        SetFlagCond::Eq => a == b,
        SetFlagCond::Ne => a != b,
        SetFlagCond::Gtu => a > b,
        SetFlagCond::Geu => a >= b,
        SetFlagCond::Ltu => a < b,
        SetFlagCond::Leu => a <= b,
        SetFlagCond::Gts => sa > sb,
        SetFlagCond::Ges => sa >= sb,
        SetFlagCond::Lts => sa < sb,
        SetFlagCond::Les => sa <= sb,
    }
}
