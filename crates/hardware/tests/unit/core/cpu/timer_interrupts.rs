//! Tick Timer and External Interrupt Tests.

use orsim_core::RunOutcome;
use orsim_core::common::ExceptionKind;
use orsim_core::core::arch::spr::{self, TTMR_IE, TTMR_IP, TTMR_MODE_CONTINUOUS, TTMR_MODE_SHIFT};
use orsim_core::core::arch::sr;
use pretty_assertions::assert_eq;

use crate::common::{DEFAULT_CYCLES, TestContext, r};

const TTMR: u16 = (spr::GROUP_TICK << spr::GROUP_SHIFT) as u16;
const PICMR: u16 = (spr::GROUP_PIC << spr::GROUP_SHIFT) as u16;
const SR: u16 = spr::SR as u16;

/// Continuous mode, interrupts enabled, period `period`.
const fn ttmr_value(period: u32) -> u32 {
    (TTMR_MODE_CONTINUOUS << TTMR_MODE_SHIFT) | TTMR_IE | period
}

/// Emits `SR |= bits` through r30.
fn set_sr_bits(ctx: &mut TestContext, bits: u32) {
    ctx.asm
        .l_mfspr(r(30), r(0), SR)
        .l_ori(r(30), r(30), bits as u16)
        .l_mtspr(r(0), r(30), SR);
}

fn spin(ctx: &mut TestContext) {
    ctx.asm.l_j(0).l_nop(0);
}

// ══════════════════════════════════════════════════════════
// Tick timer
// ══════════════════════════════════════════════════════════

#[test]
fn period_match_raises_tick_timer() {
    let mut ctx = TestContext::new();
    ctx.li(r(1), ttmr_value(10));
    ctx.asm.l_mtspr(r(0), r(1), TTMR);
    set_sr_bits(&mut ctx, sr::TEE);
    spin(&mut ctx);
    ctx.asm.set_address(0x500).l_trap(0);

    assert_eq!(
        ctx.run(DEFAULT_CYCLES),
        RunOutcome::Exception(ExceptionKind::TickTimer)
    );
    assert_eq!(ctx.sim.stats().cycles, 10);
    assert_eq!(ctx.pc(), 0x500);
    assert_ne!(ctx.sim.spr(u32::from(TTMR)) & TTMR_IP, 0);

    ctx.resume_to_halt();
    assert_eq!(ctx.sim.stats().exceptions_of(ExceptionKind::TickTimer), 1);
}

#[test]
fn pending_timer_is_taken_when_tee_is_set() {
    let mut ctx = TestContext::new();
    ctx.li(r(1), ttmr_value(10));
    ctx.asm.l_mtspr(r(0), r(1), TTMR);
    for _ in 0..10 {
        ctx.asm.l_nop(0);
    }
    let enable_at = ctx.asm.position() + 8;
    set_sr_bits(&mut ctx, sr::TEE);
    ctx.asm.l_trap(0);
    ctx.asm.set_address(0x500).l_trap(0);

    ctx.run_to_halt();
    assert_eq!(ctx.sim.stats().exceptions_of(ExceptionKind::TickTimer), 1);
    assert_eq!(ctx.sim.spr(spr::EPCR0), enable_at);
    assert_eq!(ctx.pc(), 0x504);
}

#[test]
fn disabled_timer_only_counts() {
    let mut ctx = TestContext::new();
    spin(&mut ctx);
    assert_eq!(ctx.run(DEFAULT_CYCLES), RunOutcome::Completed);
    let ttcr = spr::address(spr::GROUP_TICK, spr::TTCR);
    assert_eq!(ctx.sim.spr(ttcr), DEFAULT_CYCLES as u32);
    assert_eq!(ctx.sim.stats().exceptions, 0);
}

// ══════════════════════════════════════════════════════════
// External interrupts
// ══════════════════════════════════════════════════════════

/// Enables the UART receive interrupt, unmasks its PIC line, sets `sr_bits` and spins.
fn uart_interrupt_program(ctx: &mut TestContext, sr_bits: u32, handler_reads_rbr: bool) {
    ctx.asm
        .l_movhi(r(1), 0x9000)
        .l_ori(r(2), r(0), 1)
        .l_sb(1, r(1), r(2))
        .l_ori(r(3), r(0), 1 << 2)
        .l_mtspr(r(0), r(3), PICMR);
    set_sr_bits(ctx, sr_bits);
    spin(ctx);

    ctx.asm.set_address(ExceptionKind::ExternalInterrupt.vector());
    if handler_reads_rbr {
        ctx.asm
            .l_lbz(r(5), r(1), 0)
            .l_mfspr(r(6), r(0), PICMR | spr::PICSR as u16)
            .l_trap(0);
    } else {
        ctx.asm.l_rfe();
    }
}

#[test]
fn keypress_raises_one_external_interrupt() {
    let mut ctx = TestContext::new();
    uart_interrupt_program(&mut ctx, sr::IEE, true);
    assert_eq!(ctx.run(DEFAULT_CYCLES), RunOutcome::Completed);

    ctx.sim.keypress(b'x');
    assert_eq!(
        ctx.sim.run(DEFAULT_CYCLES),
        RunOutcome::Exception(ExceptionKind::ExternalInterrupt)
    );
    assert_eq!(ctx.pc(), 0x800);

    ctx.resume_to_halt();
    assert_eq!(ctx.reg(5), u32::from(b'x'));
    assert_eq!(ctx.reg(6), 1 << 2, "PICSR latched the UART line");
    assert_eq!(
        ctx.sim.stats().exceptions_of(ExceptionKind::ExternalInterrupt),
        1
    );
}

#[test]
fn held_line_does_not_retrigger() {
    let mut ctx = TestContext::new();
    uart_interrupt_program(&mut ctx, sr::IEE, false);
    assert_eq!(ctx.run(DEFAULT_CYCLES), RunOutcome::Completed);

    ctx.sim.keypress(b'a');
    assert_eq!(
        ctx.sim.run(DEFAULT_CYCLES),
        RunOutcome::Exception(ExceptionKind::ExternalInterrupt)
    );
    for _ in 0..4 {
        assert_eq!(ctx.sim.run(DEFAULT_CYCLES), RunOutcome::Completed);
    }
    assert_eq!(
        ctx.sim.stats().exceptions_of(ExceptionKind::ExternalInterrupt),
        1
    );
}

#[test]
fn interrupts_need_iee() {
    let mut ctx = TestContext::new();
    uart_interrupt_program(&mut ctx, 0, true);
    assert_eq!(ctx.run(DEFAULT_CYCLES), RunOutcome::Completed);

    ctx.sim.keypress(b'x');
    for _ in 0..4 {
        assert_eq!(ctx.sim.run(DEFAULT_CYCLES), RunOutcome::Completed);
    }
    assert_eq!(ctx.sim.stats().exceptions, 0);
}
