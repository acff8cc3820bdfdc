//! EUC-KR (Korean) table configuration.
//!
//! Covers the KS X 1001 code space as swept regions: the printable ASCII
//! plane plus the double-byte symbol, hangul, and hanja blocks. Decoding
//! goes through the WHATWG EUC-KR codec, the windows-949 superset of
//! KS X 1001.

use super::CodepageSpec;
use crate::table::{ByteRange, ByteWidth};

const RANGES: [ByteRange; 4] = [
    // Printable ASCII
    ByteRange::new(0x20, 0x7F, ByteWidth::One),
    // Symbols and special characters
    ByteRange::new(0xA1A0, 0xACF0, ByteWidth::Two),
    // Hangul syllables
    ByteRange::new(0xB0A0, 0xC8FF, ByteWidth::Two),
    // Hanja
    ByteRange::new(0xCAA0, 0xFDFF, ByteWidth::Two),
];

pub(super) const SPEC: CodepageSpec = CodepageSpec {
    name: "EUC-KR",
    codec_label: "euc-kr",
    file_name: "euc_kr.tbl",
    ranges: &RANGES,
};
