//! Integration tests for the built-in codepage configurations.
//!
//! The range boundaries are standards data carried verbatim; these tests
//! pin the exact values so an accidental edit shows up as a failure.

use tbl_oxide::codepages;
use tbl_oxide::table::{ByteRange, ByteWidth};
use tbl_oxide::Codec;

#[test]
fn test_three_specs_in_generation_order() {
    let names: Vec<&str> = codepages::all().iter().map(|s| s.name).collect();
    assert_eq!(names, vec!["EUC-KR", "Shift_JIS-2004", "CP932"]);
}

#[test]
fn test_every_codec_label_resolves() {
    for spec in codepages::all() {
        assert!(
            Codec::for_label(spec.codec_label).is_ok(),
            "{}: label '{}'",
            spec.name,
            spec.codec_label
        );
    }
}

#[test]
fn test_output_file_names() {
    let files: Vec<&str> = codepages::all().iter().map(|s| s.file_name).collect();
    assert_eq!(files, vec!["euc_kr.tbl", "shift_jis_2004.tbl", "cp932.tbl"]);
}

#[test]
fn test_euc_kr_range_boundaries() {
    let spec = codepages::find("EUC-KR").unwrap();
    let expected = [
        ByteRange::new(0x20, 0x7F, ByteWidth::One),
        ByteRange::new(0xA1A0, 0xACF0, ByteWidth::Two),
        ByteRange::new(0xB0A0, 0xC8FF, ByteWidth::Two),
        ByteRange::new(0xCAA0, 0xFDFF, ByteWidth::Two),
    ];
    assert_eq!(spec.ranges, expected);
}

#[test]
fn test_shift_jis_2004_range_boundaries() {
    let spec = codepages::find("Shift_JIS-2004").unwrap();
    let expected = [
        ByteRange::new(0x20, 0x7F, ByteWidth::One),
        ByteRange::new(0x8140, 0x81FF, ByteWidth::Two),
        ByteRange::new(0x8340, 0x82F2, ByteWidth::Two),
        ByteRange::new(0x8340, 0x879F, ByteWidth::Two),
        ByteRange::new(0x8890, 0xEAA0, ByteWidth::Two),
        ByteRange::new(0xFA40, 0xFC40, ByteWidth::Two),
    ];
    assert_eq!(spec.ranges, expected);
}

#[test]
fn test_cp932_range_boundaries() {
    let spec = codepages::find("CP932").unwrap();
    let expected = [
        ByteRange::new(0x20, 0x7F, ByteWidth::One),
        ByteRange::new(0xA0, 0xF0, ByteWidth::One),
        ByteRange::new(0x8140, 0x81FF, ByteWidth::Two),
        ByteRange::new(0x8240, 0x82FF, ByteWidth::Two),
        ByteRange::new(0x8340, 0x839F, ByteWidth::Two),
        ByteRange::new(0x83A0, 0x879F, ByteWidth::Two),
        ByteRange::new(0x8890, 0xEAAF, ByteWidth::Two),
        ByteRange::new(0xE040, 0xEAAF, ByteWidth::Two),
        ByteRange::new(0xFA40, 0xFC40, ByteWidth::Two),
    ];
    assert_eq!(spec.ranges, expected);
}

#[test]
fn test_every_range_fits_its_width() {
    // generate_table validates widths before sweeping; a full generation
    // run over each built-in spec must pass that check.
    for spec in codepages::all() {
        let codec = Codec::for_label(spec.codec_label).unwrap();
        let result =
            tbl_oxide::table::generate_table(codec, spec.ranges, codepages::CONTROL_OVERRIDES);
        assert!(result.is_ok(), "{}", spec.name);
    }
}
