//! Configuration Tests.
//!
//! Verifies defaults and JSON parsing of the simulator configuration.

use orsim_core::Config;
use orsim_core::common::SimError;
use pretty_assertions::assert_eq;

#[test]
fn defaults() {
    let config = Config::default();
    assert!(!config.general.trace_instructions);
    assert!(!config.general.trace_exceptions);
    assert_eq!(config.system.boot_pc, 0x100);
    assert_eq!(config.system.cycles_per_slice, 20_000);
}

#[test]
fn empty_object_is_default() {
    let config = Config::from_json("{}").expect("valid json");
    assert_eq!(config, Config::default());
}

#[test]
fn partial_sections_keep_other_defaults() {
    let config = Config::from_json(
        r#"{ "general": { "trace_exceptions": true }, "system": { "cycles_per_slice": 64 } }"#,
    )
    .expect("valid json");
    assert!(config.general.trace_exceptions);
    assert!(!config.general.trace_instructions);
    assert_eq!(config.system.cycles_per_slice, 64);
    assert_eq!(config.system.boot_pc, 0x100);
}

#[test]
fn malformed_json_is_config_error() {
    let err = Config::from_json("{ system: ").expect_err("malformed");
    assert!(matches!(err, SimError::Config(_)));
}

#[test]
fn wrong_field_type_is_config_error() {
    let err = Config::from_json(r#"{ "system": { "boot_pc": "zero" } }"#).expect_err("bad type");
    assert!(matches!(err, SimError::Config(_)));
}
