//! Integration tests for table serialization.
//!
//! Full pipeline: generate a table, write it, and verify the on-disk
//! bytes match the wire format exactly, including idempotence across
//! two runs with identical configuration.

use std::fs;

use tbl_oxide::codepages;
use tbl_oxide::table::generate_table;
use tbl_oxide::{sink, Codec};

#[test]
fn test_full_pipeline_euc_kr() {
    let spec = codepages::find("EUC-KR").unwrap();
    let codec = Codec::for_label(spec.codec_label).unwrap();
    let entries = generate_table(codec, spec.ranges, codepages::CONTROL_OVERRIDES).unwrap();

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join(spec.file_name);
    let written = sink::write_table(&path, &entries).unwrap();
    assert_eq!(written, entries.len());

    let contents = fs::read_to_string(&path).unwrap();

    // Overrides first, then the ASCII block
    assert!(contents.starts_with("0D=.\n0A=.\n00=.\n20= \n21=!\n"));
    // Known hangul value from the double-byte sweep
    assert!(contents.contains("\nB0A1=가\n"));
    // One line per entry, newline-terminated
    assert_eq!(contents.lines().count(), entries.len());
    assert!(contents.ends_with('\n'));
}

#[test]
fn test_two_runs_produce_identical_bytes() {
    let spec = codepages::find("CP932").unwrap();
    let codec = Codec::for_label(spec.codec_label).unwrap();
    let dir = tempfile::tempdir().unwrap();

    let first_path = dir.path().join("first.tbl");
    let second_path = dir.path().join("second.tbl");

    let entries = generate_table(codec, spec.ranges, codepages::CONTROL_OVERRIDES).unwrap();
    sink::write_table(&first_path, &entries).unwrap();

    let entries = generate_table(codec, spec.ranges, codepages::CONTROL_OVERRIDES).unwrap();
    sink::write_table(&second_path, &entries).unwrap();

    assert_eq!(fs::read(&first_path).unwrap(), fs::read(&second_path).unwrap());
}
