//! Statistics Tests.

use orsim_core::common::ExceptionKind;
use orsim_core::stats::{STATS_SECTIONS, SimStats};

#[test]
fn starts_at_zero() {
    let stats = SimStats::default();
    assert_eq!(stats.cycles, 0);
    assert_eq!(stats.instructions, 0);
    assert_eq!(stats.exceptions, 0);
    assert!(ExceptionKind::ALL.iter().all(|&k| stats.exceptions_of(k) == 0));
}

#[test]
fn record_exception_counts_total_and_kind() {
    let mut stats = SimStats::default();
    stats.record_exception(ExceptionKind::DTlbMiss);
    stats.record_exception(ExceptionKind::DTlbMiss);
    stats.record_exception(ExceptionKind::Trap);

    assert_eq!(stats.exceptions, 3);
    assert_eq!(stats.exceptions_of(ExceptionKind::DTlbMiss), 2);
    assert_eq!(stats.exceptions_of(ExceptionKind::Trap), 1);
    assert_eq!(stats.exceptions_of(ExceptionKind::Reset), 0);
}

#[test]
fn sections_are_known() {
    assert_eq!(STATS_SECTIONS, &["summary", "exceptions", "memory"]);
}

#[test]
fn printing_does_not_panic() {
    let mut stats = SimStats::default();
    stats.record_exception(ExceptionKind::SystemCall);
    stats.print();
    stats.print_sections(&["memory".to_string()]);
}
