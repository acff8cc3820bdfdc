//! CP932 (Japanese, Windows-31J) table configuration.
//!
//! The Windows variant of Shift_JIS. Unlike the JIS X 0213 coverage set,
//! this configuration also sweeps the single-byte half-width katakana
//! block, and its kanji regions overlap; the generator's first-write-wins
//! policy emits each code once.

use super::CodepageSpec;
use crate::table::{ByteRange, ByteWidth};

const RANGES: [ByteRange; 9] = [
    // Printable ASCII
    ByteRange::new(0x20, 0x7F, ByteWidth::One),
    // Half-width katakana block
    ByteRange::new(0xA0, 0xF0, ByteWidth::One),
    // Symbols
    ByteRange::new(0x8140, 0x81FF, ByteWidth::Two),
    // Alphanumerics and hiragana
    ByteRange::new(0x8240, 0x82FF, ByteWidth::Two),
    // Katakana
    ByteRange::new(0x8340, 0x839F, ByteWidth::Two),
    // Greek, Cyrillic, and extended symbols
    ByteRange::new(0x83A0, 0x879F, ByteWidth::Two),
    // Kanji
    ByteRange::new(0x8890, 0xEAAF, ByteWidth::Two),
    // Kanji, second region (overlaps the first; deduplicated on emit)
    ByteRange::new(0xE040, 0xEAAF, ByteWidth::Two),
    // Supplementary kanji
    ByteRange::new(0xFA40, 0xFC40, ByteWidth::Two),
];

pub(super) const SPEC: CodepageSpec = CodepageSpec {
    name: "CP932",
    codec_label: "windows-31j",
    file_name: "cp932.tbl",
    ranges: &RANGES,
};
