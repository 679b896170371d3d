//! Program image builder.
//!
//! `Assembler` emits one instruction per method call and accumulates a flat program
//! image starting at physical address 0. It provides:
//! 1. **Instruction Emission:** One method per supported instruction, taking typed operands.
//! 2. **Layout:** `set_address` pads with `l.nop 0` up to a target address, `data` emits raw words.
//! 3. **Image Output:** `to_bytes` returns the big-endian byte image accepted by the loaders.
//!
//! ```
//! use orsim_core::common::Reg;
//! use orsim_core::isa::assembler::Assembler;
//!
//! let r5 = Reg::new(5).unwrap_or(Reg::R0);
//! let mut asm = Assembler::new();
//! asm.l_movhi(r5, 0).l_ori(r5, r5, 0xa00).l_trap(0);
//! assert_eq!(asm.to_bytes().len(), 12);
//! ```

use crate::common::Reg;
use crate::common::constants::INSTRUCTION_SIZE;
use crate::isa::instruction::{AluOp, Instruction, LoadOp, SetFlagCond, ShiftOp, StoreOp};

/// Builder for flat big-endian program images.
#[derive(Clone, Debug, Default)]
pub struct Assembler {
    words: Vec<u32>,
}

impl Assembler {
    /// Creates an empty image positioned at address 0.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the address the next instruction will be placed at.
    pub fn position(&self) -> u32 {
        self.words.len() as u32 * INSTRUCTION_SIZE
    }

    /// Returns the number of words emitted so far, padding included.
    pub fn instruction_count(&self) -> usize {
        self.words.len()
    }

    /// Returns the emitted words.
    pub fn words(&self) -> &[u32] {
        &self.words
    }

    /// Returns the image as big-endian bytes.
    pub fn to_bytes(&self) -> Vec<u8> {
        self.words.iter().flat_map(|w| w.to_be_bytes()).collect()
    }

    /// Pads with `l.nop 0` until the next instruction lands at `addr`.
    ///
    /// `addr` is rounded up to a word boundary. Addresses at or behind the current
    /// position leave the image unchanged.
    pub fn set_address(&mut self, addr: u32) -> &mut Self {
        let target = addr.div_ceil(INSTRUCTION_SIZE) as usize;
        if target > self.words.len() {
            self.words.resize(target, Instruction::Nop { k: 0 }.encode());
        }
        self
    }

    /// Emits a raw data word.
    pub fn data(&mut self, word: u32) -> &mut Self {
        self.words.push(word);
        self
    }

    /// Emits a decoded instruction.
    pub fn emit(&mut self, inst: Instruction) -> &mut Self {
        self.data(inst.encode())
    }

    /// `l.j N`: jump by `offset` words.
    pub fn l_j(&mut self, offset: i32) -> &mut Self {
        self.emit(Instruction::J { offset })
    }

    /// `l.jal N`.
    pub fn l_jal(&mut self, offset: i32) -> &mut Self {
        self.emit(Instruction::Jal { offset })
    }

    /// `l.bnf N`.
    pub fn l_bnf(&mut self, offset: i32) -> &mut Self {
        self.emit(Instruction::Bnf { offset })
    }

    /// `l.bf N`.
    pub fn l_bf(&mut self, offset: i32) -> &mut Self {
        self.emit(Instruction::Bf { offset })
    }

    /// `l.nop K`.
    pub fn l_nop(&mut self, k: u16) -> &mut Self {
        self.emit(Instruction::Nop { k })
    }

    /// `l.movhi rD,K`.
    pub fn l_movhi(&mut self, d: Reg, k: u16) -> &mut Self {
        self.emit(Instruction::Movhi { d, k })
    }

    /// `l.sys K`.
    pub fn l_sys(&mut self, k: u16) -> &mut Self {
        self.emit(Instruction::Sys { k })
    }

    /// `l.trap K`.
    pub fn l_trap(&mut self, k: u16) -> &mut Self {
        self.emit(Instruction::Trap { k })
    }

    /// `l.rfe`.
    pub fn l_rfe(&mut self) -> &mut Self {
        self.emit(Instruction::Rfe)
    }

    /// `l.jr rB`.
    pub fn l_jr(&mut self, b: Reg) -> &mut Self {
        self.emit(Instruction::Jr { b })
    }

    /// `l.jalr rB`.
    pub fn l_jalr(&mut self, b: Reg) -> &mut Self {
        self.emit(Instruction::Jalr { b })
    }

    /// Any load: `op rD,I(rA)`.
    pub fn load(&mut self, op: LoadOp, d: Reg, a: Reg, i: i16) -> &mut Self {
        self.emit(Instruction::Load { op, d, a, i })
    }

    /// `l.lwz rD,I(rA)`.
    pub fn l_lwz(&mut self, d: Reg, a: Reg, i: i16) -> &mut Self {
        self.load(LoadOp::Lwz, d, a, i)
    }

    /// `l.lbz rD,I(rA)`.
    pub fn l_lbz(&mut self, d: Reg, a: Reg, i: i16) -> &mut Self {
        self.load(LoadOp::Lbz, d, a, i)
    }

    /// `l.lbs rD,I(rA)`.
    pub fn l_lbs(&mut self, d: Reg, a: Reg, i: i16) -> &mut Self {
        self.load(LoadOp::Lbs, d, a, i)
    }

    /// `l.lhz rD,I(rA)`.
    pub fn l_lhz(&mut self, d: Reg, a: Reg, i: i16) -> &mut Self {
        self.load(LoadOp::Lhz, d, a, i)
    }

    /// `l.lhs rD,I(rA)`.
    pub fn l_lhs(&mut self, d: Reg, a: Reg, i: i16) -> &mut Self {
        self.load(LoadOp::Lhs, d, a, i)
    }

    /// `l.addi rD,rA,I`.
    pub fn l_addi(&mut self, d: Reg, a: Reg, i: i16) -> &mut Self {
        self.emit(Instruction::Addi { d, a, i })
    }

    /// `l.andi rD,rA,K`.
    pub fn l_andi(&mut self, d: Reg, a: Reg, k: u16) -> &mut Self {
        self.emit(Instruction::Andi { d, a, k })
    }

    /// `l.ori rD,rA,K`.
    pub fn l_ori(&mut self, d: Reg, a: Reg, k: u16) -> &mut Self {
        self.emit(Instruction::Ori { d, a, k })
    }

    /// `l.xori rD,rA,I`.
    pub fn l_xori(&mut self, d: Reg, a: Reg, i: i16) -> &mut Self {
        self.emit(Instruction::Xori { d, a, i })
    }

    /// `l.mfspr rD,rA,K`.
    pub fn l_mfspr(&mut self, d: Reg, a: Reg, k: u16) -> &mut Self {
        self.emit(Instruction::Mfspr { d, a, k })
    }

    /// `l.mtspr rA,rB,K`.
    pub fn l_mtspr(&mut self, a: Reg, b: Reg, k: u16) -> &mut Self {
        self.emit(Instruction::Mtspr { a, b, k })
    }

    /// Any shift by immediate: `op rD,rA,L`.
    pub fn shift_imm(&mut self, op: ShiftOp, d: Reg, a: Reg, l: u8) -> &mut Self {
        self.emit(Instruction::ShiftImm { op, d, a, l })
    }

    /// `l.slli rD,rA,L`.
    pub fn l_slli(&mut self, d: Reg, a: Reg, l: u8) -> &mut Self {
        self.shift_imm(ShiftOp::Sll, d, a, l)
    }

    /// `l.srli rD,rA,L`.
    pub fn l_srli(&mut self, d: Reg, a: Reg, l: u8) -> &mut Self {
        self.shift_imm(ShiftOp::Srl, d, a, l)
    }

    /// `l.srai rD,rA,L`.
    pub fn l_srai(&mut self, d: Reg, a: Reg, l: u8) -> &mut Self {
        self.shift_imm(ShiftOp::Sra, d, a, l)
    }

    /// Set flag against an immediate: `l.sfXXi rA,I`.
    pub fn l_sfi(&mut self, cond: SetFlagCond, a: Reg, i: i16) -> &mut Self {
        self.emit(Instruction::SetFlagImm { cond, a, i })
    }

    /// Set flag against a register: `l.sfXX rA,rB`.
    pub fn l_sf(&mut self, cond: SetFlagCond, a: Reg, b: Reg) -> &mut Self {
        self.emit(Instruction::SetFlag { cond, a, b })
    }

    /// Any store: `op I(rA),rB`.
    pub fn store(&mut self, op: StoreOp, a: Reg, b: Reg, i: i16) -> &mut Self {
        self.emit(Instruction::Store { op, a, b, i })
    }

    /// `l.sw I(rA),rB`.
    pub fn l_sw(&mut self, i: i16, a: Reg, b: Reg) -> &mut Self {
        self.store(StoreOp::Sw, a, b, i)
    }

    /// `l.sb I(rA),rB`.
    pub fn l_sb(&mut self, i: i16, a: Reg, b: Reg) -> &mut Self {
        self.store(StoreOp::Sb, a, b, i)
    }

    /// `l.sh I(rA),rB`.
    pub fn l_sh(&mut self, i: i16, a: Reg, b: Reg) -> &mut Self {
        self.store(StoreOp::Sh, a, b, i)
    }

    /// Any register-register ALU operation: `op rD,rA,rB`.
    pub fn alu(&mut self, op: AluOp, d: Reg, a: Reg, b: Reg) -> &mut Self {
        self.emit(Instruction::Alu { op, d, a, b })
    }

    /// `l.add rD,rA,rB`.
    pub fn l_add(&mut self, d: Reg, a: Reg, b: Reg) -> &mut Self {
        self.alu(AluOp::Add, d, a, b)
    }

    /// `l.sub rD,rA,rB`.
    pub fn l_sub(&mut self, d: Reg, a: Reg, b: Reg) -> &mut Self {
        self.alu(AluOp::Sub, d, a, b)
    }

    /// `l.and rD,rA,rB`.
    pub fn l_and(&mut self, d: Reg, a: Reg, b: Reg) -> &mut Self {
        self.alu(AluOp::And, d, a, b)
    }

    /// `l.or rD,rA,rB`.
    pub fn l_or(&mut self, d: Reg, a: Reg, b: Reg) -> &mut Self {
        self.alu(AluOp::Or, d, a, b)
    }

    /// `l.xor rD,rA,rB`.
    pub fn l_xor(&mut self, d: Reg, a: Reg, b: Reg) -> &mut Self {
        self.alu(AluOp::Xor, d, a, b)
    }

    /// `l.sll rD,rA,rB`.
    pub fn l_sll(&mut self, d: Reg, a: Reg, b: Reg) -> &mut Self {
        self.alu(AluOp::Sll, d, a, b)
    }

    /// `l.srl rD,rA,rB`.
    pub fn l_srl(&mut self, d: Reg, a: Reg, b: Reg) -> &mut Self {
        self.alu(AluOp::Srl, d, a, b)
    }

    /// `l.sra rD,rA,rB`.
    pub fn l_sra(&mut self, d: Reg, a: Reg, b: Reg) -> &mut Self {
        self.alu(AluOp::Sra, d, a, b)
    }

    /// `l.ff1 rD,rA`.
    pub fn l_ff1(&mut self, d: Reg, a: Reg) -> &mut Self {
        self.alu(AluOp::Ff1, d, a, Reg::R0)
    }

    /// `l.fl1 rD,rA`.
    pub fn l_fl1(&mut self, d: Reg, a: Reg) -> &mut Self {
        self.alu(AluOp::Fl1, d, a, Reg::R0)
    }

    /// `l.mul rD,rA,rB`.
    pub fn l_mul(&mut self, d: Reg, a: Reg, b: Reg) -> &mut Self {
        self.alu(AluOp::Mul, d, a, b)
    }

    /// `l.div rD,rA,rB`.
    pub fn l_div(&mut self, d: Reg, a: Reg, b: Reg) -> &mut Self {
        self.alu(AluOp::Div, d, a, b)
    }

    /// `l.divu rD,rA,rB`.
    pub fn l_divu(&mut self, d: Reg, a: Reg, b: Reg) -> &mut Self {
        self.alu(AluOp::Divu, d, a, b)
    }
}
