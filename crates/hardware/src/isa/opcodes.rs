//! ORBIS32 opcode and selector constants.
//!
//! The primary opcode occupies bits 26-31. Several opcodes are families whose
//! operation is chosen by a secondary selector:
//! 1. **System (0x08):** bits 16-31 select `l.sys` or `l.trap`.
//! 2. **Shift immediate (0x2e):** bits 6-7 select the shift kind.
//! 3. **Set flag (0x2f, 0x39):** bits 21-25 select the comparison.
//! 4. **ALU (0x38):** bits 0-3 and 6-9 combine into an 8-bit function code.

/// `l.j`: PC-relative jump.
pub const OP_J: u32 = 0x00;
/// `l.jal`: PC-relative jump and link.
pub const OP_JAL: u32 = 0x01;
/// `l.bnf`: branch if flag clear.
pub const OP_BNF: u32 = 0x03;
/// `l.bf`: branch if flag set.
pub const OP_BF: u32 = 0x04;
/// `l.nop`.
pub const OP_NOP: u32 = 0x05;
/// `l.movhi`.
pub const OP_MOVHI: u32 = 0x06;
/// `l.sys` / `l.trap` family.
pub const OP_SYSTEM: u32 = 0x08;
/// `l.rfe`.
pub const OP_RFE: u32 = 0x09;
/// `l.jr`.
pub const OP_JR: u32 = 0x11;
/// `l.jalr`.
pub const OP_JALR: u32 = 0x12;
/// `l.lwz`.
pub const OP_LWZ: u32 = 0x21;
/// `l.lbz`.
pub const OP_LBZ: u32 = 0x23;
/// `l.lbs`.
pub const OP_LBS: u32 = 0x24;
/// `l.lhz`.
pub const OP_LHZ: u32 = 0x25;
/// `l.lhs`.
pub const OP_LHS: u32 = 0x26;
/// `l.addi`.
pub const OP_ADDI: u32 = 0x27;
/// `l.andi`.
pub const OP_ANDI: u32 = 0x29;
/// `l.ori`.
pub const OP_ORI: u32 = 0x2A;
/// `l.xori`.
pub const OP_XORI: u32 = 0x2B;
/// `l.mfspr`.
pub const OP_MFSPR: u32 = 0x2D;
/// Shift-immediate family.
pub const OP_SHIFT_IMM: u32 = 0x2E;
/// Set-flag-immediate family.
pub const OP_SET_FLAG_IMM: u32 = 0x2F;
/// `l.mtspr`.
pub const OP_MTSPR: u32 = 0x30;
/// `l.sw`.
pub const OP_SW: u32 = 0x35;
/// `l.sb`.
pub const OP_SB: u32 = 0x36;
/// `l.sh`.
pub const OP_SH: u32 = 0x37;
/// Register-register ALU family.
pub const OP_ALU: u32 = 0x38;
/// Set-flag-register family.
pub const OP_SET_FLAG: u32 = 0x39;

/// Bits 16-31 of `l.sys`.
pub const SYS_SELECTOR: u32 = 0x2000;
/// Bits 16-31 of `l.trap`.
pub const TRAP_SELECTOR: u32 = 0x2100;

/// Shift-immediate kind selectors (bits 6-7).
pub mod shift {
    /// Logical left.
    pub const SLL: u32 = 0;
    /// Logical right.
    pub const SRL: u32 = 1;
    /// Arithmetic right.
    pub const SRA: u32 = 2;
}

/// Set-flag comparison selectors (bits 21-25), shared by both set-flag families.
pub mod set_flag {
    /// Equal.
    pub const EQ: u32 = 0x0;
    /// Not equal.
    pub const NE: u32 = 0x1;
    /// Greater than, unsigned.
    pub const GTU: u32 = 0x2;
    /// Greater or equal, unsigned.
    pub const GEU: u32 = 0x3;
    /// Less than, unsigned.
    pub const LTU: u32 = 0x4;
    /// Less or equal, unsigned.
    pub const LEU: u32 = 0x5;
    /// Greater than, signed.
    pub const GTS: u32 = 0xA;
    /// Greater or equal, signed.
    pub const GES: u32 = 0xB;
    /// Less than, signed.
    pub const LTS: u32 = 0xC;
    /// Less or equal, signed.
    pub const LES: u32 = 0xD;
}

/// ALU function codes (`(w & 0xf) | ((w & 0x3c0) >> 2)`).
pub mod alu {
    /// `l.add`.
    pub const ADD: u32 = 0x00;
    /// `l.sub`.
    pub const SUB: u32 = 0x02;
    /// `l.and`.
    pub const AND: u32 = 0x03;
    /// `l.or`.
    pub const OR: u32 = 0x04;
    /// `l.xor`.
    pub const XOR: u32 = 0x05;
    /// `l.sll`.
    pub const SLL: u32 = 0x08;
    /// `l.ff1`.
    pub const FF1: u32 = 0x0F;
    /// `l.srl`.
    pub const SRL: u32 = 0x18;
    /// `l.sra`.
    pub const SRA: u32 = 0x28;
    /// `l.fl1`.
    pub const FL1: u32 = 0x4F;
    /// `l.mul`.
    pub const MUL: u32 = 0xC6;
    /// `l.div`.
    pub const DIV: u32 = 0xC9;
    /// `l.divu`.
    pub const DIVU: u32 = 0xCA;
}
