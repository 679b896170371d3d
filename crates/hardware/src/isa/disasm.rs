//! Instruction Disassembler for ORBIS32.
//!
//! Converts a 32-bit instruction encoding into a human-readable mnemonic
//! string for instruction tracing, logging, and test diagnostics.
//!
//! # Usage
//!
//! ```
//! use orsim_core::isa::disasm::disassemble;
//! let text = disassemble(0x9C20_0010); // l.addi r1,r0,16
//! assert_eq!(text, "l.addi r1,r0,16");
//! ```

use std::fmt;

use crate::isa::decode::decode;
use crate::isa::instruction::Instruction;

/// Disassembles a single instruction word.
///
/// Words that do not decode are rendered as `.word 0x........`.
pub fn disassemble(word: u32) -> String {
    decode(word).to_string()
}

impl fmt::Display for Instruction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Self::J { offset } => write!(f, "l.j {offset}"),
            Self::Jal { offset } => write!(f, "l.jal {offset}"),
            Self::Bnf { offset } => write!(f, "l.bnf {offset}"),
            Self::Bf { offset } => write!(f, "l.bf {offset}"),
            Self::Nop { k } => write!(f, "l.nop {k:#x}"),
            Self::Movhi { d, k } => write!(f, "l.movhi {d},{k:#x}"),
            Self::Sys { k } => write!(f, "l.sys {k:#x}"),
            Self::Trap { k } => write!(f, "l.trap {k:#x}"),
            Self::Rfe => f.write_str("l.rfe"),
            Self::Jr { b } => write!(f, "l.jr {b}"),
            Self::Jalr { b } => write!(f, "l.jalr {b}"),
            Self::Load { op, d, a, i } => write!(f, "{} {d},{i}({a})", op.mnemonic()),
            Self::Addi { d, a, i } => write!(f, "l.addi {d},{a},{i}"),
            Self::Andi { d, a, k } => write!(f, "l.andi {d},{a},{k:#x}"),
            Self::Ori { d, a, k } => write!(f, "l.ori {d},{a},{k:#x}"),
            Self::Xori { d, a, i } => write!(f, "l.xori {d},{a},{i}"),
            Self::Mfspr { d, a, k } => write!(f, "l.mfspr {d},{a},{k:#x}"),
            Self::ShiftImm { op, d, a, l } => write!(f, "{} {d},{a},{l}", op.mnemonic()),
            Self::SetFlagImm { cond, a, i } => write!(f, "l.sf{}i {a},{i}", cond.suffix()),
            Self::Mtspr { a, b, k } => write!(f, "l.mtspr {a},{b},{k:#x}"),
            Self::Store { op, a, b, i } => write!(f, "{} {i}({a}),{b}", op.mnemonic()),
            Self::Alu { op, d, a, b } => {
                if op.is_unary() {
                    write!(f, "{} {d},{a}", op.mnemonic())
                } else {
                    write!(f, "{} {d},{a},{b}", op.mnemonic())
                }
            }
            Self::SetFlag { cond, a, b } => write!(f, "l.sf{} {a},{b}", cond.suffix()),
            Self::Illegal(word) => write!(f, ".word {word:#010x}"),
        }
    }
}
