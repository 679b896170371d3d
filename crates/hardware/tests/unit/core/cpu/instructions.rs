//! Instruction Semantics Tests.
//!
//! Each test assembles a short program ending in `l.trap`, runs one bounded call and
//! inspects the register file.

use orsim_core::RunOutcome;
use orsim_core::common::Reg;
use orsim_core::isa::instruction::AluOp;
use pretty_assertions::assert_eq;
use rstest::rstest;

use crate::common::{DEFAULT_CYCLES, TestContext, r};

/// Word placed at 0x100 by `with_data`.
const DATA: u32 = 0x1234_5678;

fn run_program(ctx: &mut TestContext) {
    assert_eq!(ctx.run(DEFAULT_CYCLES), RunOutcome::Halted);
}

/// Places `word` at 0x100, behind the program.
fn with_data(ctx: &mut TestContext, word: u32) {
    ctx.asm.set_address(0x100).data(word);
}

#[test]
fn initial_state() {
    let ctx = TestContext::new();
    assert!(Reg::all().all(|reg| ctx.sim.reg(reg) == 0));
    assert_eq!(ctx.pc(), 0);
    assert_eq!(ctx.sim.spr(17) & 1, 1, "supervisor mode");
}

#[rstest]
#[case(0x1500_0000)]
#[case(0x1500_ffff)]
#[case(0x1500_ff00)]
#[case(0x1500_00ff)]
#[case(0x1500_12ef)]
fn nop_only_advances(#[case] word: u32) {
    let mut ctx = TestContext::new();
    ctx.asm.data(word).l_trap(0);
    run_program(&mut ctx);
    assert!(Reg::all().all(|reg| ctx.sim.reg(reg) == 0));
    assert_eq!(ctx.pc(), 8);
}

#[test]
fn nop_one_halts_in_supervisor_mode() {
    let mut ctx = TestContext::new();
    ctx.asm.l_addi(r(1), r(0), 1).l_nop(1).l_addi(r(2), r(0), 1);
    assert_eq!(ctx.run(DEFAULT_CYCLES), RunOutcome::Halted);
    assert_eq!(ctx.reg(1), 1);
    assert_eq!(ctx.reg(2), 0);
    assert_eq!(ctx.pc(), 4, "halt leaves PC on the nop");
}

#[test]
fn trap_halts_after_advancing() {
    let mut ctx = TestContext::new();
    ctx.asm.l_trap(0);
    assert_eq!(ctx.run(DEFAULT_CYCLES), RunOutcome::Halted);
    assert_eq!(ctx.pc(), 4);
    assert_eq!(ctx.sim.stats().halts, 1);
}

// ══════════════════════════════════════════════════════════
// Immediates
// ══════════════════════════════════════════════════════════

#[test]
fn ori() {
    let mut ctx = TestContext::new();
    ctx.asm
        .l_ori(r(2), r(0), 0xffff)
        .l_ori(r(3), r(0), 0x1234)
        .l_ori(r(4), r(3), 0x0001)
        .l_trap(0);
    run_program(&mut ctx);
    assert_eq!(ctx.reg(2), 0xffff, "immediate is zero-extended");
    assert_eq!(ctx.reg(3), 0x1234);
    assert_eq!(ctx.reg(4), 0x1235);
}

#[test]
fn andi() {
    let mut ctx = TestContext::new();
    ctx.asm
        .l_ori(r(1), r(0), 0xffff)
        .l_andi(r(2), r(1), 0)
        .l_andi(r(3), r(1), 0xffff)
        .l_andi(r(4), r(1), 0xabcd)
        .l_trap(0);
    run_program(&mut ctx);
    assert_eq!(ctx.reg(1), 0xffff);
    assert_eq!(ctx.reg(2), 0);
    assert_eq!(ctx.reg(3), 0xffff);
    assert_eq!(ctx.reg(4), 0xabcd);
}

#[test]
fn addi_sign_extends() {
    let mut ctx = TestContext::new();
    ctx.asm
        .l_ori(r(1), r(0), 0x1000)
        .l_addi(r(2), r(1), 0)
        .l_addi(r(3), r(1), 1)
        .l_addi(r(4), r(1), -1)
        .l_addi(r(5), r(1), -0x2000)
        .l_trap(0);
    run_program(&mut ctx);
    assert_eq!(ctx.reg(2), 0x1000);
    assert_eq!(ctx.reg(3), 0x1001);
    assert_eq!(ctx.reg(4), 0xfff);
    assert_eq!(ctx.reg(5), (-0x1000_i32) as u32);
}

#[test]
fn movhi() {
    let mut ctx = TestContext::new();
    ctx.asm
        .l_ori(r(1), r(0), 0xffff)
        .l_movhi(r(1), 0)
        .l_movhi(r(2), 0xffff)
        .l_movhi(r(3), 0xf0f0)
        .l_trap(0);
    run_program(&mut ctx);
    assert_eq!(ctx.reg(1), 0, "low half is cleared");
    assert_eq!(ctx.reg(2), 0xffff_0000);
    assert_eq!(ctx.reg(3), 0xf0f0_0000);
}

#[test]
fn xori() {
    let mut ctx = TestContext::new();
    ctx.asm
        .l_addi(r(1), r(0), 0x1234)
        .l_xori(r(2), r(1), 0x1235)
        .l_addi(r(3), r(0), -1)
        .l_xori(r(4), r(3), -1)
        .l_trap(0);
    run_program(&mut ctx);
    assert_eq!(ctx.reg(2), 1);
    assert_eq!(ctx.reg(4), 0, "immediate is sign-extended");
}

// ══════════════════════════════════════════════════════════
// Loads
// ══════════════════════════════════════════════════════════

#[test]
fn lwz() {
    let mut ctx = TestContext::new();
    ctx.asm.l_lwz(r(1), r(0), 0x100).l_trap(0);
    with_data(&mut ctx, DATA);
    run_program(&mut ctx);
    assert_eq!(ctx.reg(1), DATA);
}

#[test]
fn lbs_and_lbz_are_big_endian() {
    let mut ctx = TestContext::new();
    ctx.asm
        .l_lbs(r(1), r(0), 0x100)
        .l_lbs(r(2), r(0), 0x101)
        .l_lbs(r(3), r(0), 0x102)
        .l_lbs(r(4), r(0), 0x103)
        .l_lbz(r(5), r(0), 0x103)
        .l_trap(0);
    with_data(&mut ctx, 0x0011_22ff);
    run_program(&mut ctx);
    assert_eq!(ctx.reg(1), 0);
    assert_eq!(ctx.reg(2), 0x11);
    assert_eq!(ctx.reg(3), 0x22);
    assert_eq!(ctx.reg(4), 0xffff_ffff);
    assert_eq!(ctx.reg(5), 0xff);
}

#[test]
fn lhz() {
    let mut ctx = TestContext::new();
    ctx.asm
        .l_lhz(r(1), r(0), 0x100)
        .l_lhz(r(2), r(0), 0x102)
        .l_trap(0);
    with_data(&mut ctx, DATA);
    run_program(&mut ctx);
    assert_eq!(ctx.reg(1), 0x1234);
    assert_eq!(ctx.reg(2), 0x5678);
}

#[test]
fn lhs() {
    let mut ctx = TestContext::new();
    ctx.asm
        .l_lhs(r(1), r(0), 0x100)
        .l_lhs(r(2), r(0), 0x102)
        .l_trap(0);
    with_data(&mut ctx, 0x1234_fffe);
    run_program(&mut ctx);
    assert_eq!(ctx.reg(1), 0x1234);
    assert_eq!(ctx.reg(2), 0xffff_fffe);
}

// ══════════════════════════════════════════════════════════
// Stores
// ══════════════════════════════════════════════════════════

#[test]
fn sw_with_signed_offsets() {
    let mut ctx = TestContext::new();
    for i in -32_i16..32 {
        ctx.clear_program();
        ctx.asm
            .l_lwz(r(1), r(0), 0x100)
            .l_addi(r(2), r(1), i)
            .l_ori(r(3), r(0), 0x200)
            .l_sw(i * 4, r(3), r(2))
            .l_lwz(r(4), r(3), i * 4)
            .l_trap(0);
        with_data(&mut ctx, DATA);
        run_program(&mut ctx);
        assert_eq!(ctx.reg(4), DATA.wrapping_add(i as u32), "offset {i}");
    }
}

#[test]
fn sb() {
    let mut ctx = TestContext::new();
    for i in 0_i16..128 {
        ctx.clear_program();
        ctx.asm
            .l_ori(r(1), r(0), i as u16)
            .l_ori(r(3), r(0), 0x200)
            .l_sb(i, r(3), r(1))
            .l_lbs(r(4), r(3), i)
            .l_trap(0);
        run_program(&mut ctx);
        assert_eq!(ctx.reg(4), i as u32);
    }
}

#[rstest]
#[case(-0x7fff)]
#[case(-1)]
#[case(0)]
#[case(1)]
#[case(0x7fff)]
fn sh(#[case] value: i16) {
    let mut ctx = TestContext::new();
    ctx.asm
        .l_addi(r(1), r(0), value)
        .l_ori(r(3), r(0), 0x200)
        .l_sh(2, r(3), r(1))
        .l_lhs(r(4), r(3), 2)
        .l_trap(0);
    run_program(&mut ctx);
    assert_eq!(ctx.reg(4), i32::from(value) as u32);
    assert_eq!(ctx.ram_word(0x200), u32::from(value as u16));
}

// ══════════════════════════════════════════════════════════
// Shifts
// ══════════════════════════════════════════════════════════

#[test]
fn shift_immediates() {
    let mut ctx = TestContext::new();
    for i in 0_u8..32 {
        ctx.clear_program();
        ctx.li(r(1), DATA).li(r(5), 0xffff_ffff);
        ctx.asm
            .l_slli(r(2), r(1), i)
            .l_srli(r(3), r(1), i)
            .l_srai(r(4), r(5), i)
            .l_trap(0);
        run_program(&mut ctx);
        assert_eq!(ctx.reg(2), DATA << i, "slli {i}");
        assert_eq!(ctx.reg(3), DATA >> i, "srli {i}");
        assert_eq!(ctx.reg(4), 0xffff_ffff, "srai {i}");
    }
}

#[test]
fn shift_registers() {
    let mut ctx = TestContext::new();
    for i in 0_u16..32 {
        ctx.clear_program();
        ctx.li(r(1), 1).li(r(4), 0x8000_0000);
        ctx.asm
            .l_ori(r(2), r(0), i)
            .l_sll(r(3), r(1), r(2))
            .l_srl(r(5), r(4), r(2))
            .l_sra(r(6), r(4), r(2))
            .l_trap(0);
        run_program(&mut ctx);
        assert_eq!(ctx.reg(3), 1 << i, "sll {i}");
        assert_eq!(ctx.reg(5), 0x8000_0000 >> i, "srl {i}");
        assert_eq!(ctx.reg(6), ((i32::MIN) >> i) as u32, "sra {i}");
    }
}

// ══════════════════════════════════════════════════════════
// Register-register ALU
// ══════════════════════════════════════════════════════════

#[rstest]
#[case(AluOp::Add, 0, 0, 0)]
#[case(AluOp::Add, 1, 1, 2)]
#[case(AluOp::Add, 1, -1, 0)]
#[case(AluOp::Add, -1, 1, 0)]
#[case(AluOp::Add, -1, -1, -2)]
#[case(AluOp::Add, 0x7fff_ffff, 1, i32::MIN)]
#[case(AluOp::Sub, 0, 0, 0)]
#[case(AluOp::Sub, 1, 1, 0)]
#[case(AluOp::Sub, 1, -1, 2)]
#[case(AluOp::Sub, -1, 1, -2)]
#[case(AluOp::Sub, -1, -1, 0)]
#[case(AluOp::Or, 0xf0, 0x0f, 0xff)]
#[case(AluOp::Or, 7, 8, 0xf)]
#[case(AluOp::Or, 0x0f0f_0f0f, 0x00f0_f0f0, 0x0fff_ffff)]
#[case(AluOp::And, 0xf0, 0x0f, 0)]
#[case(AluOp::And, 0x1234, 0xf0f0, 0x1030)]
#[case(AluOp::Xor, 1, 1, 0)]
#[case(AluOp::Xor, 0, 1, 1)]
#[case(AluOp::Xor, 0x0fff_ffff, 0x0fff_ffff, 0)]
#[case(AluOp::Xor, 0x0f0f_0f0f, 0x00f0_f0f0, 0x0fff_ffff)]
#[case(AluOp::Mul, 2, 2, 4)]
#[case(AluOp::Mul, -2, 2, -4)]
#[case(AluOp::Div, 0, 0, 0)]
#[case(AluOp::Div, 1, 1, 1)]
#[case(AluOp::Div, 2, 2, 1)]
#[case(AluOp::Div, 4, 2, 2)]
#[case(AluOp::Div, -4, -2, 2)]
#[case(AluOp::Div, 2, 0, 0)]
#[case(AluOp::Divu, 4, 2, 2)]
#[case(AluOp::Divu, i32::MIN, 2, 0x4000_0000)]
fn alu_register_ops(#[case] op: AluOp, #[case] a: i32, #[case] b: i32, #[case] expected: i32) {
    let mut ctx = TestContext::new();
    ctx.li(r(1), a as u32).li(r(2), b as u32);
    ctx.asm.alu(op, r(3), r(1), r(2)).l_trap(0);
    run_program(&mut ctx);
    assert_eq!(ctx.reg(3), expected as u32, "{op:?} {a:#x} {b:#x}");
}

#[rstest]
#[case(0, 0, 0)]
#[case(1, 1, 1)]
#[case(2, 2, 2)]
#[case(4, 3, 3)]
#[case(0x7fff_ffff, 1, 31)]
#[case(0x4000_0000, 31, 31)]
#[case(0x0001_1000, 13, 17)]
fn ff1_fl1(#[case] a: u32, #[case] ff1: u32, #[case] fl1: u32) {
    let mut ctx = TestContext::new();
    ctx.li(r(1), a);
    ctx.asm.l_ff1(r(2), r(1)).l_fl1(r(3), r(1)).l_trap(0);
    run_program(&mut ctx);
    assert_eq!(ctx.reg(2), ff1);
    assert_eq!(ctx.reg(3), fl1);
}

#[test]
fn register_zero_is_writable() {
    let mut ctx = TestContext::new();
    ctx.asm.l_addi(r(0), r(0), 5).l_addi(r(1), r(0), 1).l_trap(0);
    run_program(&mut ctx);
    assert_eq!(ctx.reg(0), 5);
    assert_eq!(ctx.reg(1), 6);
}
