//! Shift_JIS-2004 (Japanese) table configuration.
//!
//! Region coverage follows the JIS X 0213 plane-1 layout. Decoding goes
//! through the WHATWG Shift_JIS codec; JIS X 0213 extension rows outside
//! that repertoire fail strict decode and drop out of the table, which
//! is the defined behavior for unassigned codes.

use super::CodepageSpec;
use crate::table::{ByteRange, ByteWidth};

const RANGES: [ByteRange; 6] = [
    // Printable ASCII
    ByteRange::new(0x20, 0x7F, ByteWidth::One),
    // Symbols
    ByteRange::new(0x8140, 0x81FF, ByteWidth::Two),
    // Hiragana block as published; start exceeds end, sweeps nothing
    ByteRange::new(0x8340, 0x82F2, ByteWidth::Two),
    // Katakana and extended symbols
    ByteRange::new(0x8340, 0x879F, ByteWidth::Two),
    // Kanji
    ByteRange::new(0x8890, 0xEAA0, ByteWidth::Two),
    // Supplementary kanji
    ByteRange::new(0xFA40, 0xFC40, ByteWidth::Two),
];

pub(super) const SPEC: CodepageSpec = CodepageSpec {
    name: "Shift_JIS-2004",
    codec_label: "shift_jis",
    file_name: "shift_jis_2004.tbl",
    ranges: &RANGES,
};
