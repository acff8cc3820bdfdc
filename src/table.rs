//! Codepage table generation.
//!
//! The core of the crate: sweep configured byte-code ranges, attempt a
//! strict decode for each code, and collect the `CODE=TEXT` entries that
//! make up one table. Codes the codec rejects are skipped silently:
//! rejection is how assigned code space is separated from unassigned
//! code space, and it is the common case across most of a swept block.
//!
//! Duplicate keys resolve first-write-wins: control overrides are emitted
//! before any range, so they always take priority, and overlapping ranges
//! emit each code exactly once.

use std::collections::HashSet;
use std::fmt;

use crate::codec::Codec;
use crate::error::{Error, Result};

/// Byte width of one encoded unit within a range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ByteWidth {
    /// Single-byte codes, rendered as 2 hex digits.
    One,
    /// Double-byte codes, rendered as 4 hex digits.
    Two,
}

impl ByteWidth {
    /// Number of bytes composing one encoded unit.
    pub const fn bytes(self) -> usize {
        match self {
            ByteWidth::One => 1,
            ByteWidth::Two => 2,
        }
    }

    /// Number of hex digits in the rendered code key.
    pub const fn hex_digits(self) -> usize {
        self.bytes() * 2
    }

    /// Largest code representable at this width.
    const fn max_code(self) -> u32 {
        match self {
            ByteWidth::One => 0xFF,
            ByteWidth::Two => 0xFFFF,
        }
    }
}

/// A contiguous block of numeric codes to probe against a codec.
///
/// Each code in `[start, end)` is serialized to `width` bytes big-endian
/// before the decode attempt. A range with `start >= end` is permitted
/// and sweeps nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ByteRange {
    /// First code in the block.
    pub start: u32,
    /// One past the last code in the block.
    pub end: u32,
    /// Serialization width for every code in the block.
    pub width: ByteWidth,
}

impl ByteRange {
    /// Create a range over `[start, end)` at the given width.
    pub const fn new(start: u32, end: u32, width: ByteWidth) -> Self {
        Self { start, end, width }
    }

    /// Verify that every code in the range fits the configured width.
    fn check_width(&self) -> Result<()> {
        if self.end > self.start && self.end - 1 > self.width.max_code() {
            return Err(Error::CodeOutOfRange {
                code: self.end - 1,
                width: self.width.bytes(),
            });
        }
        Ok(())
    }

    /// Lazily yield one entry per assigned code in `[start, end)`,
    /// in ascending code order.
    ///
    /// Each code is serialized big-endian at this range's width and
    /// offered to the codec; codes that fail strict decode (or decode to
    /// an empty string) are skipped without trace. The iteration is
    /// finite and re-executes the full sweep on every call.
    pub fn entries(self, codec: Codec) -> impl Iterator<Item = TableEntry> {
        (self.start..self.end).filter_map(move |code| {
            let buf = code.to_be_bytes();
            let bytes = &buf[buf.len() - self.width.bytes()..];
            let text = codec.decode_exact(bytes)?;
            if text.is_empty() {
                return None;
            }
            Some(TableEntry {
                code,
                width: self.width,
                text,
            })
        })
    }
}

/// A fixed substitution for a specific non-printable single-byte code.
///
/// Override codes are structural characters (CR, LF, NUL) that get a
/// literal placeholder glyph irrespective of what the codec would
/// decode them to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ControlOverride {
    /// The single-byte code being overridden.
    pub code: u8,
    /// The placeholder glyph emitted instead of the codec's output.
    pub glyph: char,
}

/// One resolved `CODE=TEXT` mapping line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableEntry {
    /// Numeric byte code.
    pub code: u32,
    /// Width the code key is rendered at.
    pub width: ByteWidth,
    /// Decoded Unicode text, normally exactly one character.
    pub text: String,
}

impl TableEntry {
    /// Render the uppercase, zero-padded hex key for this entry.
    pub fn key(&self) -> String {
        format!("{:0digits$X}", self.code, digits = self.width.hex_digits())
    }
}

impl fmt::Display for TableEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:0digits$X}={}",
            self.code,
            self.text,
            digits = self.width.hex_digits()
        )
    }
}

/// Produce one entry per control override, in the order given.
///
/// Override codes render at single-byte width and their glyphs are
/// emitted verbatim without a decode attempt. Always succeeds.
pub fn emit_controls(overrides: &[ControlOverride]) -> Vec<TableEntry> {
    overrides
        .iter()
        .map(|ov| TableEntry {
            code: u32::from(ov.code),
            width: ByteWidth::One,
            text: ov.glyph.to_string(),
        })
        .collect()
}

/// Generate the full table for one codec.
///
/// Control overrides come first, then each range in configured order,
/// ascending within a range. When a later range would emit a key already
/// present (an override, or an earlier overlapping range), the later
/// entry is suppressed: first write wins.
///
/// # Errors
///
/// Returns [`Error::CodeOutOfRange`] if any configured range holds a code
/// that cannot be serialized at its width. No sweeping happens in that
/// case.
pub fn generate_table(
    codec: Codec,
    ranges: &[ByteRange],
    overrides: &[ControlOverride],
) -> Result<Vec<TableEntry>> {
    for range in ranges {
        range.check_width()?;
    }

    let mut entries = emit_controls(overrides);
    let mut seen: HashSet<String> = entries.iter().map(TableEntry::key).collect();

    for range in ranges {
        let before = entries.len();
        for entry in range.entries(codec) {
            if seen.insert(entry.key()) {
                entries.push(entry);
            }
        }
        log::debug!(
            "range 0x{:X}..0x{:X}: {} entries",
            range.start,
            range.end,
            entries.len() - before
        );
    }

    log::info!("{}: {} entries total", codec.name(), entries.len());
    Ok(entries)
}
