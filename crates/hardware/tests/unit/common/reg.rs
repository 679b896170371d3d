//! Register Number Tests.

use orsim_core::common::Reg;

#[test]
fn new_rejects_out_of_range() {
    assert!(Reg::new(31).is_some());
    assert!(Reg::new(32).is_none());
    assert!(Reg::new(255).is_none());
}

#[test]
fn from_field_masks_to_five_bits() {
    assert_eq!(Reg::from_field(0x3F).index(), 31);
    assert_eq!(Reg::from_field(0x20), Reg::R0);
}

#[test]
fn all_yields_32_in_order() {
    let regs: Vec<usize> = Reg::all().map(Reg::index).collect();
    assert_eq!(regs.len(), 32);
    assert_eq!(regs.first(), Some(&0));
    assert_eq!(regs.last(), Some(&31));
}

#[test]
fn display_and_link() {
    assert_eq!(Reg::LINK.to_string(), "r9");
    assert_eq!(Reg::R0.to_string(), "r0");
}
