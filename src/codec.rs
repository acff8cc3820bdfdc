//! Strict byte-to-Unicode decoding for legacy encodings.
//!
//! Wraps `encoding_rs` behind the narrow contract the generator needs:
//! resolve a codec from a WHATWG label, then decode candidate byte
//! sequences strictly. A decode attempt either yields the exact Unicode
//! text for a complete, assigned encoded unit or nothing at all:
//! malformed and unassigned sequences come back as `None`, never as
//! replacement characters and never as a panic.

use encoding_rs::Encoding;

use crate::error::{Error, Result};

/// A resolved legacy-encoding decoder.
#[derive(Debug, Clone, Copy)]
pub struct Codec {
    encoding: &'static Encoding,
}

impl Codec {
    /// Resolve a codec from a WHATWG encoding label.
    ///
    /// Labels are matched case-insensitively per the WHATWG Encoding
    /// Standard, so `"euc-kr"`, `"EUC-KR"`, and `"windows-949"` all name
    /// the same codec.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnknownEncoding`] if the label does not name any
    /// encoding known to the backend.
    pub fn for_label(label: &str) -> Result<Self> {
        Encoding::for_label(label.as_bytes())
            .map(|encoding| Self { encoding })
            .ok_or_else(|| Error::UnknownEncoding(label.to_string()))
    }

    /// The canonical name of the underlying encoding.
    pub fn name(&self) -> &'static str {
        self.encoding.name()
    }

    /// Decode a byte sequence strictly.
    ///
    /// Returns the decoded text only if the whole input forms complete,
    /// assigned encoded units under this codec. Invalid lead bytes, bad
    /// trail bytes, incomplete multi-byte sequences, and codes in
    /// reserved/unassigned regions all return `None`.
    pub fn decode_exact(&self, bytes: &[u8]) -> Option<String> {
        self.encoding
            .decode_without_bom_handling_and_without_replacement(bytes)
            .map(|cow| cow.into_owned())
    }
}
