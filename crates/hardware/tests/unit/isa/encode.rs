//! Encoding Consistency Tests.

use orsim_core::isa::decode;
use orsim_core::isa::instruction::{AluOp, Instruction};
use proptest::prelude::*;

use crate::common::r;

proptest! {
    /// Re-encoding a decoded word decodes to the same instruction.
    #[test]
    fn decode_encode_decode_is_stable(word: u32) {
        let inst = decode(word);
        prop_assert_eq!(decode(inst.encode()), inst);
    }

    #[test]
    fn addi_round_trips(d in 0_u8..32, a in 0_u8..32, i: i16) {
        let inst = Instruction::Addi { d: r(d), a: r(a), i };
        prop_assert_eq!(decode(inst.encode()), inst);
    }

    #[test]
    fn jump_offset_round_trips(offset in -(1_i32 << 25)..(1_i32 << 25)) {
        let inst = Instruction::Jal { offset };
        prop_assert_eq!(decode(inst.encode()), inst);
    }
}

#[test]
fn every_alu_op_round_trips() {
    for op in AluOp::ALL {
        let inst = Instruction::Alu {
            op,
            d: r(31),
            a: r(1),
            b: r(17),
        };
        assert_eq!(decode(inst.encode()), inst, "{op:?}");
    }
}

#[test]
fn illegal_encodes_to_itself() {
    assert_eq!(Instruction::Illegal(0xfc12_3456).encode(), 0xfc12_3456);
}

#[test]
fn nop_encoding() {
    assert_eq!(Instruction::Nop { k: 0 }.encode(), 0x1500_0000);
}
