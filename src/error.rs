//! Error types for the table generator.
//!
//! This module defines the fatal error kinds a generation run can hit.
//! A failed decode of one numeric code is deliberately *not* an error:
//! it is the filtering mechanism that separates assigned from unassigned
//! codes, and is modeled as `Option` at the codec boundary instead.

/// Result type alias for table generation operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur while generating codepage tables.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Encoding label not recognized by the codec backend
    #[error("Unknown encoding label: '{0}'")]
    UnknownEncoding(String),

    /// A configured range holds a code that cannot be serialized at its width
    #[error("Code 0x{code:X} does not fit in {width} byte(s)")]
    CodeOutOfRange {
        /// The offending numeric code
        code: u32,
        /// Configured byte width for the range
        width: usize,
    },

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
