//! Per-encoding codepage configurations.
//!
//! This module provides the three built-in table configurations (EUC-KR
//! for Korean, a Shift_JIS-2004-style region set and CP932 for Japanese)
//! as static data tables consumed by one shared generator.
//!
//! # Implementation Notes
//!
//! The range boundaries are enumerated standards data, not derived
//! values: they encode the code-space region assignments of KS X 1001,
//! JIS X 0213, and Windows-31J respectively, and must not be adjusted.
//! A configuration is data only; there is no per-encoding code path.

mod cp932;
mod euc_kr;
mod shift_jis_2004;

use crate::table::{ByteRange, ControlOverride};

/// Control codes rendered as a literal placeholder in every table.
///
/// CR, LF, and NUL are structural rather than visible characters; they
/// always map to `.` irrespective of what the codec would decode.
pub const CONTROL_OVERRIDES: &[ControlOverride] = &[
    ControlOverride {
        code: 0x0D,
        glyph: '.',
    },
    ControlOverride {
        code: 0x0A,
        glyph: '.',
    },
    ControlOverride {
        code: 0x00,
        glyph: '.',
    },
];

/// A complete per-encoding table configuration.
#[derive(Debug, Clone, Copy)]
pub struct CodepageSpec {
    /// Table name, used for lookup and display.
    pub name: &'static str,
    /// WHATWG label resolving to the codec that decodes this table.
    pub codec_label: &'static str,
    /// Default output file name.
    pub file_name: &'static str,
    /// Ordered byte-code ranges swept for this table.
    pub ranges: &'static [ByteRange],
}

static SPECS: [CodepageSpec; 3] = [euc_kr::SPEC, shift_jis_2004::SPEC, cp932::SPEC];

/// All built-in codepage configurations, in generation order.
pub fn all() -> &'static [CodepageSpec] {
    &SPECS
}

/// Look up a built-in configuration by table name, case-insensitively.
pub fn find(name: &str) -> Option<&'static CodepageSpec> {
    SPECS.iter().find(|spec| spec.name.eq_ignore_ascii_case(name))
}
