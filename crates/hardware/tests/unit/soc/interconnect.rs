//! Bus Tests.

use orsim_core::common::{ExceptionKind, PhysAddr};
use orsim_core::soc::interconnect::{Bus, Target};
use pretty_assertions::assert_eq;
use rstest::rstest;

#[rstest]
#[case(0x0000_0000, Some((Target::Ram, 0)))]
#[case(0x01ff_fffc, Some((Target::Ram, 0x01ff_fffc)))]
#[case(0x0200_0000, None)]
#[case(0x9000_0000, Some((Target::Uart, 0)))]
#[case(0x9000_0005, Some((Target::Uart, 5)))]
#[case(0x9000_0100, Some((Target::Uart, 0x100)))]
#[case(0x9000_0101, None)]
#[case(0xffff_fffc, None)]
fn routing(#[case] addr: u32, #[case] expected: Option<(Target, u32)>) {
    assert_eq!(Bus::route(PhysAddr::new(addr)), expected);
}

#[test]
fn ram_through_bus() {
    let mut bus = Bus::new();
    bus.store32(PhysAddr::new(0x100), 0xcafe_babe).expect("ram");
    assert_eq!(bus.load16(PhysAddr::new(0x102)), Ok(0xbabe));
}

#[test]
fn unmapped_is_bus_error() {
    let mut bus = Bus::new();
    assert_eq!(
        bus.load8(PhysAddr::new(0x4000_0000)),
        Err(ExceptionKind::BusError)
    );
    assert_eq!(
        bus.store32(PhysAddr::new(0x0200_0000), 1),
        Err(ExceptionKind::BusError)
    );
}

#[test]
fn uart_line_drives_bit_two() {
    let mut bus = Bus::new();
    assert_eq!(bus.interrupts(), 0);
    bus.store8(PhysAddr::new(0x9000_0001), 0x01).expect("ier");
    bus.uart_mut().keypress(b'q');
    assert_eq!(bus.interrupts(), 1 << 2);
    assert_eq!(bus.load8(PhysAddr::new(0x9000_0000)), Ok(b'q'));
    assert_eq!(bus.interrupts(), 0);
}

#[test]
fn load_binary_at_writes_ram() {
    let mut bus = Bus::new();
    bus.load_binary_at(&[0xde, 0xad, 0xbe, 0xef], 0x40)
        .expect("fits");
    assert_eq!(bus.load32(PhysAddr::new(0x40)), Ok(0xdead_beef));
    assert_eq!(bus.ram().size(), 32 * 1024 * 1024);
}
