//! Instruction encoding and decoding utilities.
//!
//! This module provides:
//! 1. **Field Extraction:** The `InstructionBits` trait, extracting every ORBIS32 operand field
//!    from a raw 32-bit instruction word.
//! 2. **Decoded Form:** The closed `Instruction` enumeration with typed operands.
//! 3. **Operation Tags:** `AluOp`, `ShiftOp`, `SetFlagCond`, `LoadOp` and `StoreOp`, each
//!    mapping to and from its secondary selector.

use crate::common::Reg;
use crate::isa::opcodes::{self, alu, set_flag, shift};

/// Trait for extracting instruction fields from encoded instructions.
///
/// Field names follow the architecture manual: `D` is the destination register,
/// `A` and `B` are sources, `K` an unsigned and `I` a signed 16-bit immediate,
/// `N` a 26-bit jump offset and `L` a shift amount.
pub trait InstructionBits {
    /// Extracts the primary opcode (bits 26-31).
    fn opcode(&self) -> u32;

    /// Extracts the destination register field (bits 21-25).
    fn rd(&self) -> Reg;

    /// Extracts the first source register field (bits 16-20).
    fn ra(&self) -> Reg;

    /// Extracts the second source register field (bits 11-15).
    fn rb(&self) -> Reg;

    /// Extracts bits 21-25 as a raw selector (set-flag comparisons reuse the `D` position).
    fn selector(&self) -> u32;

    /// Extracts the 16-bit unsigned immediate `K` (bits 0-15).
    fn imm_k(&self) -> u16;

    /// Extracts the 16-bit signed immediate `I` (bits 0-15).
    fn imm_i(&self) -> i16;

    /// Extracts the split immediate used by stores and `l.mtspr`.
    ///
    /// Bits 0-10 of the immediate come from bits 0-10 of the word, bits 11-15 from
    /// bits 21-25 (the `D` position, unused by these instructions).
    fn split_imm(&self) -> u16;

    /// Extracts the 26-bit jump offset `N` (bits 0-25) as a signed word count.
    fn jump_offset(&self) -> i32;

    /// Extracts the 5-bit shift amount `L` (bits 0-4).
    fn shift_amount(&self) -> u8;

    /// Extracts the shift kind `F` (bits 6-7).
    fn shift_kind(&self) -> u32;

    /// Extracts the 8-bit ALU function code (bits 0-3 and 6-9).
    fn alu_function(&self) -> u32;
}

impl InstructionBits for u32 {
    #[inline(always)]
    fn opcode(&self) -> u32 {
        self >> 26
    }

    #[inline(always)]
    fn rd(&self) -> Reg {
        Reg::from_field(self >> 21)
    }

    #[inline(always)]
    fn ra(&self) -> Reg {
        Reg::from_field(self >> 16)
    }

    #[inline(always)]
    fn rb(&self) -> Reg {
        Reg::from_field(self >> 11)
    }

    #[inline(always)]
    fn selector(&self) -> u32 {
        (self >> 21) & 0x1F
    }

    #[inline(always)]
    fn imm_k(&self) -> u16 {
        (self & 0xFFFF) as u16
    }

    #[inline(always)]
    fn imm_i(&self) -> i16 {
        (self & 0xFFFF) as u16 as i16
    }

    #[inline(always)]
    fn split_imm(&self) -> u16 {
        ((self & 0x7FF) | ((self >> 10) & 0xF800)) as u16
    }

    #[inline(always)]
    fn jump_offset(&self) -> i32 {
        ((self << 6) as i32) >> 6
    }

    #[inline(always)]
    fn shift_amount(&self) -> u8 {
        (self & 0x1F) as u8
    }

    #[inline(always)]
    fn shift_kind(&self) -> u32 {
        (self >> 6) & 0x3
    }

    #[inline(always)]
    fn alu_function(&self) -> u32 {
        (self & 0xF) | ((self & 0x3C0) >> 2)
    }
}

/// Register-register ALU operations (primary opcode 0x38).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum AluOp {
    /// Wrapping addition.
    Add,
    /// Wrapping subtraction.
    Sub,
    /// Bitwise AND.
    And,
    /// Bitwise OR.
    Or,
    /// Bitwise XOR.
    Xor,
    /// Logical shift left by `rB & 31`.
    Sll,
    /// Logical shift right by `rB & 31`.
    Srl,
    /// Arithmetic shift right by `rB & 31`.
    Sra,
    /// Find first (lowest) set bit, 1-based; 0 if none.
    Ff1,
    /// Find last (highest) set bit, 1-based; 0 if none.
    Fl1,
    /// Wrapping multiplication.
    Mul,
    /// Signed division; division by zero yields 0.
    Div,
    /// Unsigned division; division by zero yields 0.
    Divu,
}

impl AluOp {
    /// Every ALU operation.
    pub const ALL: [Self; 13] = [
        Self::Add,
        Self::Sub,
        Self::And,
        Self::Or,
        Self::Xor,
        Self::Sll,
        Self::Srl,
        Self::Sra,
        Self::Ff1,
        Self::Fl1,
        Self::Mul,
        Self::Div,
        Self::Divu,
    ];

    /// Returns the 8-bit function code.
    pub const fn function(self) -> u32 {
        match self {
            Self::Add => alu::ADD,
            Self::Sub => alu::SUB,
            Self::And => alu::AND,
            Self::Or => alu::OR,
            Self::Xor => alu::XOR,
            Self::Sll => alu::SLL,
            Self::Srl => alu::SRL,
            Self::Sra => alu::SRA,
            Self::Ff1 => alu::FF1,
            Self::Fl1 => alu::FL1,
            Self::Mul => alu::MUL,
            Self::Div => alu::DIV,
            Self::Divu => alu::DIVU,
        }
    }

    /// Maps a function code back to its operation.
    pub const fn from_function(code: u32) -> Option<Self> {
        Some(match code {
            alu::ADD => Self::Add,
            alu::SUB => Self::Sub,
            alu::AND => Self::And,
            alu::OR => Self::Or,
            alu::XOR => Self::Xor,
            alu::SLL => Self::Sll,
            alu::SRL => Self::Srl,
            alu::SRA => Self::Sra,
            alu::FF1 => Self::Ff1,
            alu::FL1 => Self::Fl1,
            alu::MUL => Self::Mul,
            alu::DIV => Self::Div,
            alu::DIVU => Self::Divu,
            _ => return None,
        })
    }

    /// Returns `true` for the single-source bit-scan operations.
    pub const fn is_unary(self) -> bool {
        matches!(self, Self::Ff1 | Self::Fl1)
    }

    /// Returns the assembler mnemonic.
    pub const fn mnemonic(self) -> &'static str {
        match self {
            Self::Add => "l.add",
            Self::Sub => "l.sub",
            Self::And => "l.and",
            Self::Or => "l.or",
            Self::Xor => "l.xor",
            Self::Sll => "l.sll",
            Self::Srl => "l.srl",
            Self::Sra => "l.sra",
            Self::Ff1 => "l.ff1",
            Self::Fl1 => "l.fl1",
            Self::Mul => "l.mul",
            Self::Div => "l.div",
            Self::Divu => "l.divu",
        }
    }
}

/// Shift-by-immediate kinds (primary opcode 0x2e).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ShiftOp {
    /// `l.slli`.
    Sll,
    /// `l.srli`.
    Srl,
    /// `l.srai`.
    Sra,
}

impl ShiftOp {
    /// Returns the 2-bit kind selector.
    pub const fn kind(self) -> u32 {
        match self {
            Self::Sll => shift::SLL,
            Self::Srl => shift::SRL,
            Self::Sra => shift::SRA,
        }
    }

    /// Maps a kind selector back to its operation; selector 3 is unassigned.
    pub const fn from_kind(kind: u32) -> Option<Self> {
        match kind {
            shift::SLL => Some(Self::Sll),
            shift::SRL => Some(Self::Srl),
            shift::SRA => Some(Self::Sra),
            _ => None,
        }
    }

    /// Returns the ALU operation performing the same shift.
    pub const fn alu_op(self) -> AluOp {
        match self {
            Self::Sll => AluOp::Sll,
            Self::Srl => AluOp::Srl,
            Self::Sra => AluOp::Sra,
        }
    }

    /// Returns the assembler mnemonic.
    pub const fn mnemonic(self) -> &'static str {
        match self {
            Self::Sll => "l.slli",
            Self::Srl => "l.srli",
            Self::Sra => "l.srai",
        }
    }
}

/// Set-flag comparisons, shared by the register and immediate families.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SetFlagCond {
    /// Equal.
    Eq,
    /// Not equal.
    Ne,
    /// Greater than, unsigned.
    Gtu,
    /// Greater or equal, unsigned.
    Geu,
    /// Less than, unsigned.
    Ltu,
    /// Less or equal, unsigned.
    Leu,
    /// Greater than, signed.
    Gts,
    /// Greater or equal, signed.
    Ges,
    /// Less than, signed.
    Lts,
    /// Less or equal, signed.
    Les,
}

impl SetFlagCond {
    /// Every comparison.
    pub const ALL: [Self; 10] = [
        Self::Eq,
        Self::Ne,
        Self::Gtu,
        Self::Geu,
        Self::Ltu,
        Self::Leu,
        Self::Gts,
        Self::Ges,
        Self::Lts,
        Self::Les,
    ];

    /// Returns the 5-bit comparison selector.
    pub const fn selector(self) -> u32 {
        match self {
            Self::Eq => set_flag::EQ,
            Self::Ne => set_flag::NE,
            Self::Gtu => set_flag::GTU,
            Self::Geu => set_flag::GEU,
            Self::Ltu => set_flag::LTU,
            Self::Leu => set_flag::LEU,
            Self::Gts => set_flag::GTS,
            Self::Ges => set_flag::GES,
            Self::Lts => set_flag::LTS,
            Self::Les => set_flag::LES,
        }
    }

    /// Maps a selector back to its comparison.
    pub const fn from_selector(sel: u32) -> Option<Self> {
        Some(match sel {
            set_flag::EQ => Self::Eq,
            set_flag::NE => Self::Ne,
            set_flag::GTU => Self::Gtu,
            set_flag::GEU => Self::Geu,
            set_flag::LTU => Self::Ltu,
            set_flag::LEU => Self::Leu,
            set_flag::GTS => Self::Gts,
            set_flag::GES => Self::Ges,
            set_flag::LTS => Self::Lts,
            set_flag::LES => Self::Les,
            _ => return None,
        })
    }

    /// Returns the mnemonic suffix (`eq`, `gtu`, ...).
    pub const fn suffix(self) -> &'static str {
        match self {
            Self::Eq => "eq",
            Self::Ne => "ne",
            Self::Gtu => "gtu",
            Self::Geu => "geu",
            Self::Ltu => "ltu",
            Self::Leu => "leu",
            Self::Gts => "gts",
            Self::Ges => "ges",
            Self::Lts => "lts",
            Self::Les => "les",
        }
    }
}

/// Load widths and extensions.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum LoadOp {
    /// Word, zero-extended.
    Lwz,
    /// Byte, zero-extended.
    Lbz,
    /// Byte, sign-extended.
    Lbs,
    /// Half-word, zero-extended.
    Lhz,
    /// Half-word, sign-extended.
    Lhs,
}

impl LoadOp {
    /// Every load.
    pub const ALL: [Self; 5] = [Self::Lwz, Self::Lbz, Self::Lbs, Self::Lhz, Self::Lhs];

    /// Returns the primary opcode.
    pub const fn opcode(self) -> u32 {
        match self {
            Self::Lwz => opcodes::OP_LWZ,
            Self::Lbz => opcodes::OP_LBZ,
            Self::Lbs => opcodes::OP_LBS,
            Self::Lhz => opcodes::OP_LHZ,
            Self::Lhs => opcodes::OP_LHS,
        }
    }

    /// Returns the assembler mnemonic.
    pub const fn mnemonic(self) -> &'static str {
        match self {
            Self::Lwz => "l.lwz",
            Self::Lbz => "l.lbz",
            Self::Lbs => "l.lbs",
            Self::Lhz => "l.lhz",
            Self::Lhs => "l.lhs",
        }
    }
}

/// Store widths.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum StoreOp {
    /// Word.
    Sw,
    /// Byte.
    Sb,
    /// Half-word.
    Sh,
}

impl StoreOp {
    /// Every store.
    pub const ALL: [Self; 3] = [Self::Sw, Self::Sb, Self::Sh];

    /// Returns the primary opcode.
    pub const fn opcode(self) -> u32 {
        match self {
            Self::Sw => opcodes::OP_SW,
            Self::Sb => opcodes::OP_SB,
            Self::Sh => opcodes::OP_SH,
        }
    }

    /// Returns the assembler mnemonic.
    pub const fn mnemonic(self) -> &'static str {
        match self {
            Self::Sw => "l.sw",
            Self::Sb => "l.sb",
            Self::Sh => "l.sh",
        }
    }
}

/// A decoded ORBIS32 instruction.
///
/// Jump offsets are signed word counts relative to the jump's own address.
/// Words that do not decode to a supported instruction are kept as `Illegal`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Instruction {
    /// `l.j N`.
    J {
        /// Word offset.
        offset: i32,
    },
    /// `l.jal N`.
    Jal {
        /// Word offset.
        offset: i32,
    },
    /// `l.bnf N`.
    Bnf {
        /// Word offset.
        offset: i32,
    },
    /// `l.bf N`.
    Bf {
        /// Word offset.
        offset: i32,
    },
    /// `l.nop K`.
    Nop {
        /// Immediate; `1` halts the simulator in supervisor mode.
        k: u16,
    },
    /// `l.movhi rD,K`.
    Movhi {
        /// Destination.
        d: Reg,
        /// Upper half-word.
        k: u16,
    },
    /// `l.sys K`.
    Sys {
        /// Immediate.
        k: u16,
    },
    /// `l.trap K`.
    Trap {
        /// Immediate.
        k: u16,
    },
    /// `l.rfe`.
    Rfe,
    /// `l.jr rB`.
    Jr {
        /// Target register.
        b: Reg,
    },
    /// `l.jalr rB`.
    Jalr {
        /// Target register.
        b: Reg,
    },
    /// `l.lwz`/`l.lbz`/`l.lbs`/`l.lhz`/`l.lhs rD,I(rA)`.
    Load {
        /// Width and extension.
        op: LoadOp,
        /// Destination.
        d: Reg,
        /// Base.
        a: Reg,
        /// Displacement.
        i: i16,
    },
    /// `l.addi rD,rA,I`.
    Addi {
        /// Destination.
        d: Reg,
        /// Source.
        a: Reg,
        /// Signed immediate.
        i: i16,
    },
    /// `l.andi rD,rA,K`.
    Andi {
        /// Destination.
        d: Reg,
        /// Source.
        a: Reg,
        /// Zero-extended immediate.
        k: u16,
    },
    /// `l.ori rD,rA,K`.
    Ori {
        /// Destination.
        d: Reg,
        /// Source.
        a: Reg,
        /// Zero-extended immediate.
        k: u16,
    },
    /// `l.xori rD,rA,I`.
    Xori {
        /// Destination.
        d: Reg,
        /// Source.
        a: Reg,
        /// Sign-extended immediate.
        i: i16,
    },
    /// `l.mfspr rD,rA,K`.
    Mfspr {
        /// Destination.
        d: Reg,
        /// Register OR-ed into the SPR address.
        a: Reg,
        /// SPR address bits.
        k: u16,
    },
    /// `l.slli`/`l.srli`/`l.srai rD,rA,L`.
    ShiftImm {
        /// Shift kind.
        op: ShiftOp,
        /// Destination.
        d: Reg,
        /// Source.
        a: Reg,
        /// Shift amount (0-31).
        l: u8,
    },
    /// `l.sfXXi rA,I`.
    SetFlagImm {
        /// Comparison.
        cond: SetFlagCond,
        /// Left operand.
        a: Reg,
        /// Right operand, sign-extended.
        i: i16,
    },
    /// `l.mtspr rA,rB,K`.
    Mtspr {
        /// Register OR-ed into the SPR address.
        a: Reg,
        /// Value to store.
        b: Reg,
        /// SPR address bits (split immediate).
        k: u16,
    },
    /// `l.sw`/`l.sb`/`l.sh I(rA),rB`.
    Store {
        /// Width.
        op: StoreOp,
        /// Base.
        a: Reg,
        /// Value to store.
        b: Reg,
        /// Displacement (split immediate).
        i: i16,
    },
    /// Register-register ALU operation `rD = rA op rB`.
    Alu {
        /// Operation.
        op: AluOp,
        /// Destination.
        d: Reg,
        /// Left operand.
        a: Reg,
        /// Right operand (ignored by `l.ff1`/`l.fl1`).
        b: Reg,
    },
    /// `l.sfXX rA,rB`.
    SetFlag {
        /// Comparison.
        cond: SetFlagCond,
        /// Left operand.
        a: Reg,
        /// Right operand.
        b: Reg,
    },
    /// A word that does not decode to a supported instruction.
    Illegal(u32),
}
