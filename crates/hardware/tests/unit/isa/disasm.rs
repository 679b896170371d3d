//! Disassembler Tests.

use orsim_core::isa::disassemble;
use rstest::rstest;

#[rstest]
#[case(0x9c20_0010, "l.addi r1,r0,16")]
#[case(0x9c21_fffc, "l.addi r1,r1,-4")]
#[case(0xa8a5_0a00, "l.ori r5,r5,0xa00")]
#[case(0xd7e1_17fc, "l.sw -4(r1),r2")]
#[case(0x8441_fffc, "l.lwz r2,-4(r1)")]
#[case(0x4400_4800, "l.jr r9")]
#[case(0x03ff_fffe, "l.j -2")]
#[case(0x2400_0000, "l.rfe")]
#[case(0xc005_0000, "l.mtspr r5,r0,0x0")]
#[case(0xbc41_ffff, "l.sfgtui r1,-1")]
#[case(0xfc00_0000, ".word 0xfc000000")]
fn renders(#[case] word: u32, #[case] text: &str) {
    assert_eq!(disassemble(word), text);
}

#[test]
fn unary_alu_omits_second_source() {
    // l.ff1 r2,r1
    let word = 0xe041_000f;
    assert_eq!(disassemble(word), "l.ff1 r2,r1");
}
