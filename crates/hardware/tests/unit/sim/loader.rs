//! Loader Tests.

use std::io::Write;

use orsim_core::common::SimError;
use orsim_core::sim::loader::load_binary;
use pretty_assertions::assert_eq;
use tempfile::NamedTempFile;

#[test]
fn reads_whole_file() {
    let mut file = NamedTempFile::new().expect("temp file");
    file.write_all(&[0x15, 0x00, 0x00, 0x01]).expect("write");
    let bytes = load_binary(file.path()).expect("readable");
    assert_eq!(bytes, vec![0x15, 0x00, 0x00, 0x01]);
}

#[test]
fn missing_file_reports_path() {
    let dir = tempfile::tempdir().expect("temp dir");
    let path = dir.path().join("vmlinux.bin");
    let err = load_binary(&path).expect_err("missing");
    match err {
        SimError::Io { path: reported, .. } => assert_eq!(reported, path),
        other => panic!("unexpected error {other}"),
    }
}
