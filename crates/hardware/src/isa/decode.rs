//! ORBIS32 Instruction Decoder.
//!
//! This module turns a raw 32-bit instruction word into an [`Instruction`]. The top six
//! bits select the primary opcode; family opcodes are resolved through their secondary
//! selector. Any word without a supported meaning (unknown opcode, unassigned selector)
//! decodes to [`Instruction::Illegal`], which the executor turns into an
//! illegal-instruction exception.

use crate::isa::instruction::{
    AluOp, Instruction, InstructionBits, LoadOp, SetFlagCond, ShiftOp, StoreOp,
};
use crate::isa::opcodes;

/// Decodes a 32-bit instruction word.
///
/// # Arguments
///
/// * `word` - The instruction word, already converted from big-endian memory order.
///
/// # Returns
///
/// The decoded instruction, or `Instruction::Illegal(word)`.
pub fn decode(word: u32) -> Instruction {
    match word.opcode() {
        opcodes::OP_J => Instruction::J {
            offset: word.jump_offset(),
        },
        opcodes::OP_JAL => Instruction::Jal {
            offset: word.jump_offset(),
        },
        opcodes::OP_BNF => Instruction::Bnf {
            offset: word.jump_offset(),
        },
        opcodes::OP_BF => Instruction::Bf {
            offset: word.jump_offset(),
        },
        opcodes::OP_NOP => Instruction::Nop { k: word.imm_k() },
        opcodes::OP_MOVHI => Instruction::Movhi {
            d: word.rd(),
            k: word.imm_k(),
        },
        opcodes::OP_SYSTEM => match word >> 16 {
            opcodes::SYS_SELECTOR => Instruction::Sys { k: word.imm_k() },
            opcodes::TRAP_SELECTOR => Instruction::Trap { k: word.imm_k() },
            _ => Instruction::Illegal(word),
        },
        opcodes::OP_RFE => Instruction::Rfe,
        opcodes::OP_JR => Instruction::Jr { b: word.rb() },
        opcodes::OP_JALR => Instruction::Jalr { b: word.rb() },
        opcodes::OP_LWZ => load(LoadOp::Lwz, word),
        opcodes::OP_LBZ => load(LoadOp::Lbz, word),
        opcodes::OP_LBS => load(LoadOp::Lbs, word),
        opcodes::OP_LHZ => load(LoadOp::Lhz, word),
        opcodes::OP_LHS => load(LoadOp::Lhs, word),
        opcodes::OP_ADDI => Instruction::Addi {
            d: word.rd(),
            a: word.ra(),
            i: word.imm_i(),
        },
        opcodes::OP_ANDI => Instruction::Andi {
            d: word.rd(),
            a: word.ra(),
            k: word.imm_k(),
        },
        opcodes::OP_ORI => Instruction::Ori {
            d: word.rd(),
            a: word.ra(),
            k: word.imm_k(),
        },
        opcodes::OP_XORI => Instruction::Xori {
            d: word.rd(),
            a: word.ra(),
            i: word.imm_i(),
        },
        opcodes::OP_MFSPR => Instruction::Mfspr {
            d: word.rd(),
            a: word.ra(),
            k: word.imm_k(),
        },
        opcodes::OP_SHIFT_IMM => match ShiftOp::from_kind(word.shift_kind()) {
            Some(op) => Instruction::ShiftImm {
                op,
                d: word.rd(),
                a: word.ra(),
                l: word.shift_amount(),
            },
            None => Instruction::Illegal(word),
        },
        opcodes::OP_SET_FLAG_IMM => match SetFlagCond::from_selector(word.selector()) {
            Some(cond) => Instruction::SetFlagImm {
                cond,
                a: word.ra(),
                i: word.imm_i(),
            },
            None => Instruction::Illegal(word),
        },
        opcodes::OP_MTSPR => Instruction::Mtspr {
            a: word.ra(),
            b: word.rb(),
            k: word.split_imm(),
        },
        opcodes::OP_SW => store(StoreOp::Sw, word),
        opcodes::OP_SB => store(StoreOp::Sb, word),
        opcodes::OP_SH => store(StoreOp::Sh, word),
        opcodes::OP_ALU => match AluOp::from_function(word.alu_function()) {
            Some(op) => Instruction::Alu {
                op,
                d: word.rd(),
                a: word.ra(),
                b: word.rb(),
            },
            None => Instruction::Illegal(word),
        },
        opcodes::OP_SET_FLAG => match SetFlagCond::from_selector(word.selector()) {
            Some(cond) => Instruction::SetFlag {
                cond,
                a: word.ra(),
                b: word.rb(),
            },
            None => Instruction::Illegal(word),
        },
        _ => Instruction::Illegal(word),
    }
}

#[inline(always)]
fn load(op: LoadOp, word: u32) -> Instruction {
    Instruction::Load {
        op,
        d: word.rd(),
        a: word.ra(),
        i: word.imm_i(),
    }
}

#[inline(always)]
fn store(op: StoreOp, word: u32) -> Instruction {
    Instruction::Store {
        op,
        a: word.ra(),
        b: word.rb(),
        i: word.split_imm() as i16,
    }
}
