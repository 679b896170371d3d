//! RAM Tests.

use orsim_core::common::{ExceptionKind, SimError};
use orsim_core::soc::memory::Ram;
use orsim_core::soc::traits::Device;
use pretty_assertions::assert_eq;

fn create_test_ram() -> Ram {
    Ram::with_size(0x100)
}

#[test]
fn default_size_is_32_mib() {
    let ram = Ram::new();
    assert_eq!(ram.size(), 32 * 1024 * 1024);
}

#[test]
fn words_are_big_endian() {
    let mut ram = create_test_ram();
    ram.store32(0x10, 0x0011_22ff).expect("store");
    assert_eq!(ram.load8(0x10), Ok(0x00));
    assert_eq!(ram.load8(0x13), Ok(0xff));
    assert_eq!(ram.load16(0x10), Ok(0x0011));
    assert_eq!(ram.load16(0x12), Ok(0x22ff));
}

#[test]
fn narrow_stores_merge() {
    let mut ram = create_test_ram();
    ram.store32(0, 0xaaaa_aaaa).expect("store");
    ram.store8(1, 0x11).expect("store");
    ram.store16(2, 0x2233).expect("store");
    assert_eq!(ram.load32(0), Ok(0xaa11_2233));
}

#[test]
fn out_of_range_is_bus_error() {
    let mut ram = create_test_ram();
    assert_eq!(ram.load32(0xfe), Err(ExceptionKind::BusError));
    assert_eq!(ram.store8(0x100, 0), Err(ExceptionKind::BusError));
}

#[test]
fn load_image_places_bytes() {
    let mut ram = create_test_ram();
    ram.load_image(&[1, 2, 3, 4, 5, 6, 7, 8], 0x20).expect("fits");
    assert_eq!(ram.load32(0x20), Ok(0x0102_0304));
    assert_eq!(ram.load32(0x24), Ok(0x0506_0708));
}

#[test]
fn load_image_rejects_unaligned_length() {
    let mut ram = create_test_ram();
    let err = ram.load_image(&[1, 2, 3], 0).expect_err("unaligned");
    assert!(matches!(err, SimError::UnalignedImageLength { len: 3 }));
}

#[test]
fn load_image_rejects_overflow_and_keeps_memory() {
    let mut ram = create_test_ram();
    let err = ram.load_image(&[0xff; 8], 0xfc).expect_err("too large");
    assert!(matches!(
        err,
        SimError::ImageTooLarge {
            offset: 0xfc,
            len: 8,
            capacity: 0x100
        }
    ));
    assert_eq!(ram.load32(0xfc), Ok(0));
}
