//! Simulator Tests.

use std::io::Write;

use orsim_core::common::SimError;
use orsim_core::isa::assembler::Assembler;
use orsim_core::{Config, RunOutcome, Simulator};
use pretty_assertions::assert_eq;
use tempfile::NamedTempFile;

use crate::common::r;

/// `r1 += 1` forever.
fn spin_image() -> Vec<u8> {
    let mut asm = Assembler::new();
    asm.l_addi(r(1), r(1), 1).l_j(-1).l_nop(0);
    asm.to_bytes()
}

fn halt_image() -> Vec<u8> {
    let mut asm = Assembler::new();
    asm.l_addi(r(3), r(0), 7).l_nop(1);
    asm.to_bytes()
}

#[test]
fn load_image_sets_pc_and_reports_length() {
    let mut sim = Simulator::default();
    let len = sim.load_image(&spin_image(), 4).expect("fits");
    assert_eq!(len, 12);
    assert_eq!(sim.pc(), 4);
}

#[test]
fn load_image_rejects_unaligned_length() {
    let mut sim = Simulator::default();
    let err = sim.load_image(&[0; 5], 0).expect_err("unaligned");
    assert!(matches!(err, SimError::UnalignedImageLength { len: 5 }));
}

#[test]
fn load_image_resets_cpu() {
    let mut sim = Simulator::default();
    sim.set_reg(r(4), 9);
    sim.load_image(&halt_image(), 0).expect("fits");
    assert_eq!(sim.reg(r(4)), 0);
}

#[test]
fn load_image_file() {
    let mut file = NamedTempFile::new().expect("temp file");
    file.write_all(&halt_image()).expect("write");

    let mut sim = Simulator::default();
    assert_eq!(sim.load_image_file(file.path(), 0).expect("loads"), 8);
    assert!(sim.run_until_halt(100));
    assert_eq!(sim.reg(r(3)), 7);
}

#[test]
fn run_slice_uses_configured_length() {
    let config = Config::from_json(r#"{ "system": { "cycles_per_slice": 50 } }"#).expect("json");
    let mut sim = Simulator::new(config);
    sim.load_image(&spin_image(), 0).expect("fits");

    assert_eq!(sim.run_slice(), RunOutcome::Completed);
    assert_eq!(sim.stats().cycles, 50);
    assert_eq!(sim.config().system.cycles_per_slice, 50);
}

#[test]
fn run_until_halt_respects_budget() {
    let mut sim = Simulator::default();
    sim.load_image(&spin_image(), 0).expect("fits");
    assert!(!sim.run_until_halt(1_000));
    assert_eq!(sim.stats().cycles, 1_000);
}

#[test]
fn run_until_halt_with_zero_slice_still_progresses() {
    let config = Config::from_json(r#"{ "system": { "cycles_per_slice": 0 } }"#).expect("json");
    let mut sim = Simulator::new(config);
    sim.load_image(&halt_image(), 0).expect("fits");
    assert!(sim.run_until_halt(10));
    assert_eq!(sim.stats().halts, 1);
}

#[test]
fn run_slice_with_zero_length_runs_one_cycle() {
    let config = Config::from_json(r#"{ "system": { "cycles_per_slice": 0 } }"#).expect("json");
    let mut sim = Simulator::new(config);
    sim.load_image(&spin_image(), 0).expect("fits");

    assert_eq!(sim.run_slice(), RunOutcome::Completed);
    assert_eq!(sim.stats().cycles, 1);
    assert_eq!(sim.run_slice(), RunOutcome::Completed);
    assert_eq!(sim.stats().cycles, 2);
}

#[test]
fn console_round_trip() {
    let mut sim = Simulator::default();
    assert!(!sim.can_read());
    sim.keypress(b'k');
    assert_eq!(sim.read(), None, "input is not echoed");
    assert!(sim.drain_output().is_empty());
}

#[test]
fn reset_keeps_memory() {
    let mut sim = Simulator::default();
    sim.load_image(&halt_image(), 0).expect("fits");
    assert!(sim.run_until_halt(10));
    sim.reset();
    assert_eq!(sim.pc(), 0);
    assert_eq!(sim.reg(r(3)), 0);
    assert!(sim.run_until_halt(10), "program is still in RAM");
    assert_eq!(sim.reg(r(3)), 7);
}

#[test]
fn stats_track_instructions() {
    let mut sim = Simulator::default();
    sim.load_image(&halt_image(), 0).expect("fits");
    assert_eq!(sim.run(16), RunOutcome::Halted);
    assert_eq!(sim.stats().instructions, 2);
    assert_eq!(sim.stats().cycles, 2);
    assert_eq!(sim.stats().fetch_slow, 1);
    assert_eq!(sim.stats().fetch_fast, 1);
}
