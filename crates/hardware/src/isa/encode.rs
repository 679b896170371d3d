//! ORBIS32 Instruction Encoder.
//!
//! Produces the canonical 32-bit word for an [`Instruction`]. Fields the instruction does
//! not use are encoded as zero, so `decode(i.encode()) == i` for every supported
//! instruction and `decode(w).encode() == w` for every canonical word.

use crate::isa::instruction::Instruction;
use crate::isa::opcodes;

/// `l.nop` is encoded with bit 24 set (`0x15 << 24`), matching the reference toolchain.
const NOP_PREFIX: u32 = 0x15 << 24;

/// Mask of the 26-bit jump offset field.
const JUMP_OFFSET_MASK: u32 = 0x03FF_FFFF;

#[inline(always)]
const fn type_n(opcode: u32, offset: i32) -> u32 {
    (opcode << 26) | (offset as u32 & JUMP_OFFSET_MASK)
}

#[inline(always)]
const fn type_dak(opcode: u32, d: u32, a: u32, imm: u16) -> u32 {
    (opcode << 26) | (d << 21) | (a << 16) | imm as u32
}

#[inline(always)]
const fn type_split(opcode: u32, a: u32, b: u32, imm: u16) -> u32 {
    let imm = imm as u32;
    (opcode << 26) | (((imm & 0xF800) >> 11) << 21) | (a << 16) | (b << 11) | (imm & 0x7FF)
}

#[inline(always)]
const fn type_set_flag(opcode: u32, selector: u32, a: u32, low: u32) -> u32 {
    (((opcode << 5) | selector) << 21) | (a << 16) | low
}

impl Instruction {
    /// Encodes the instruction as a 32-bit word.
    ///
    /// `Illegal(w)` encodes to `w` unchanged.
    pub const fn encode(&self) -> u32 {
        match *self {
            Self::J { offset } => type_n(opcodes::OP_J, offset),
            Self::Jal { offset } => type_n(opcodes::OP_JAL, offset),
            Self::Bnf { offset } => type_n(opcodes::OP_BNF, offset),
            Self::Bf { offset } => type_n(opcodes::OP_BF, offset),
            Self::Nop { k } => NOP_PREFIX | k as u32,
            Self::Movhi { d, k } => type_dak(opcodes::OP_MOVHI, d.bits(), 0, k),
            Self::Sys { k } => (opcodes::SYS_SELECTOR << 16) | k as u32,
            Self::Trap { k } => (opcodes::TRAP_SELECTOR << 16) | k as u32,
            Self::Rfe => opcodes::OP_RFE << 26,
            Self::Jr { b } => (opcodes::OP_JR << 26) | (b.bits() << 11),
            Self::Jalr { b } => (opcodes::OP_JALR << 26) | (b.bits() << 11),
            Self::Load { op, d, a, i } => type_dak(op.opcode(), d.bits(), a.bits(), i as u16),
            Self::Addi { d, a, i } => type_dak(opcodes::OP_ADDI, d.bits(), a.bits(), i as u16),
            Self::Andi { d, a, k } => type_dak(opcodes::OP_ANDI, d.bits(), a.bits(), k),
            Self::Ori { d, a, k } => type_dak(opcodes::OP_ORI, d.bits(), a.bits(), k),
            Self::Xori { d, a, i } => type_dak(opcodes::OP_XORI, d.bits(), a.bits(), i as u16),
            Self::Mfspr { d, a, k } => type_dak(opcodes::OP_MFSPR, d.bits(), a.bits(), k),
            Self::ShiftImm { op, d, a, l } => {
                (opcodes::OP_SHIFT_IMM << 26)
                    | (d.bits() << 21)
                    | (a.bits() << 16)
                    | (op.kind() << 6)
                    | (l as u32 & 0x1F)
            }
            Self::SetFlagImm { cond, a, i } => type_set_flag(
                opcodes::OP_SET_FLAG_IMM,
                cond.selector(),
                a.bits(),
                i as u16 as u32,
            ),
            Self::Mtspr { a, b, k } => type_split(opcodes::OP_MTSPR, a.bits(), b.bits(), k),
            Self::Store { op, a, b, i } => type_split(op.opcode(), a.bits(), b.bits(), i as u16),
            Self::Alu { op, d, a, b } => {
                let function = op.function();
                (opcodes::OP_ALU << 26)
                    | (d.bits() << 21)
                    | (a.bits() << 16)
                    | (b.bits() << 11)
                    | (((function >> 4) & 0xF) << 6)
                    | (function & 0xF)
            }
            Self::SetFlag { cond, a, b } => {
                type_set_flag(opcodes::OP_SET_FLAG, cond.selector(), a.bits(), b.bits() << 11)
            }
            Self::Illegal(word) => word,
        }
    }
}
