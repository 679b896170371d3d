//! Exception Kind and Error Tests.

use orsim_core::common::{ExceptionKind, SimError};
use pretty_assertions::assert_eq;

#[test]
fn vectors_are_code_times_0x100() {
    for kind in ExceptionKind::ALL {
        assert_eq!(kind.vector(), u32::from(kind.code()) * 0x100);
    }
    assert_eq!(ExceptionKind::DTlbMiss.vector(), 0x900);
    assert_eq!(ExceptionKind::SystemCall.vector(), 0xc00);
    assert_eq!(ExceptionKind::Trap.vector(), 0xe00);
}

#[test]
fn all_lists_every_kind_in_vector_order() {
    let codes: Vec<u8> = ExceptionKind::ALL.iter().map(|k| k.code()).collect();
    assert_eq!(codes, (1..=14).collect::<Vec<u8>>());
}

#[test]
fn only_address_faults_latch_eear() {
    let latching: Vec<ExceptionKind> = ExceptionKind::ALL
        .into_iter()
        .filter(|k| k.sets_eear())
        .collect();
    assert_eq!(
        latching,
        vec![
            ExceptionKind::BusError,
            ExceptionKind::DataPageFault,
            ExceptionKind::InstructionPageFault,
            ExceptionKind::Alignment,
            ExceptionKind::IllegalInstruction,
            ExceptionKind::DTlbMiss,
            ExceptionKind::ITlbMiss,
        ]
    );
}

#[test]
fn display_includes_vector() {
    assert_eq!(ExceptionKind::Alignment.to_string(), "Alignment(0x600)");
}

#[test]
fn sim_error_messages() {
    let err = SimError::UnalignedImageLength { len: 6 };
    assert_eq!(err.to_string(), "image length 6 is not a multiple of 4 bytes");

    let err = SimError::ImageTooLarge {
        offset: 0x10,
        len: 8,
        capacity: 16,
    };
    assert!(err.to_string().contains("does not fit in 16 bytes"));
}
