//! Whole-Program Tests.

use orsim_core::RunOutcome;
use orsim_core::common::Reg;
use pretty_assertions::assert_eq;

use crate::common::{DEFAULT_CYCLES, TestContext, r};

#[test]
fn manual_function_call() {
    let mut ctx = TestContext::new();
    for word in [
        0xd7e1_17fc, // l.sw -4(r1),r2
        0x9c41_0000, // l.addi r2,r1,0
        0x9c21_fffc, // l.addi r1,r1,-4
        0x9c60_002a, // l.addi r3,r0,42
        0xa963_0000, // l.ori r11,r3,0
        0xa822_0000, // l.ori r1,r2,0
        0x8441_fffc, // l.lwz r2,-4(r1)
        0x4400_4800, // l.jr r9
        0x1500_0000, // l.nop
    ] {
        ctx.asm.data(word);
    }
    ctx.asm.set_address(0x100).l_trap(0);

    ctx.load();
    ctx.sim.set_reg(r(1), 0xfe0);
    ctx.sim.set_reg(r(2), 0xff0);
    ctx.sim.set_reg(Reg::LINK, 0x100);
    assert_eq!(ctx.sim.run(DEFAULT_CYCLES), RunOutcome::Halted);

    assert_eq!(ctx.reg(11), 42);
    assert_eq!(ctx.reg(1), 0xfe0, "stack pointer restored");
    assert_eq!(ctx.reg(2), 0xff0, "frame pointer restored");
    assert_eq!(ctx.ram_word(0xfdc), 0xff0, "frame pointer was spilled");
    assert_eq!(ctx.pc(), 0x104);
}

#[test]
fn tlb_routine_words() {
    let mut ctx = TestContext::new();
    ctx.asm
        .data(0x18a0_0000) // l.movhi r5,0
        .data(0xa8a5_0a00) // l.ori r5,r5,0xa00
        .data(0xc005_0000) // l.mtspr r5,r0,0
        .l_trap(0);
    assert_eq!(ctx.run(DEFAULT_CYCLES), RunOutcome::Halted);
    assert_eq!(ctx.reg(5), 0xa00);
    assert_eq!(ctx.cpu().dmmu.reg(512), 0);
}

#[test]
fn assembled_program_matches_words() {
    let mut ctx = TestContext::new();
    ctx.asm
        .l_movhi(r(5), 0)
        .l_ori(r(5), r(5), 0xa00)
        .l_mtspr(r(5), r(0), 0);
    assert_eq!(ctx.asm.words(), &[0x18a0_0000, 0xa8a5_0a00, 0xc005_0000]);
}

#[test]
fn uart_hello() {
    let mut ctx = TestContext::new();
    ctx.asm.l_movhi(r(1), 0x9000);
    for byte in *b"hi\n" {
        ctx.asm
            .l_ori(r(2), r(0), u16::from(byte))
            .l_sb(0, r(1), r(2));
    }
    ctx.asm.l_nop(1);

    assert_eq!(ctx.run(DEFAULT_CYCLES), RunOutcome::Halted);
    assert!(ctx.sim.can_read());
    assert_eq!(ctx.sim.drain_output(), b"hi\n");
    assert!(!ctx.sim.can_read());
}
