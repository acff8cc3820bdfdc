//! # tbl_oxide
//!
//! Static codepage table generator for East-Asian legacy encodings.
//!
//! Generates the plain-text `.tbl` character tables hex editors use to
//! render legacy-encoded bytes: one `CODE=CHARACTER` line per assigned
//! byte code, with two-hex-digit keys for single-byte codes and
//! four-hex-digit keys for double-byte codes. Tables are static
//! artifacts produced once; no runtime transcoding happens here.
//!
//! Three built-in configurations cover EUC-KR (Korean), a
//! Shift_JIS-2004-style region set, and CP932 (both Japanese). Each is
//! an ordered list of byte-code ranges swept against a strict decoder:
//! codes the codec rejects are unassigned code space and simply drop out
//! of the table.
//!
//! ## Quick Start
//!
//! ```
//! use tbl_oxide::{codepages, table, Codec};
//!
//! # fn main() -> tbl_oxide::Result<()> {
//! let spec = codepages::find("EUC-KR").unwrap();
//! let codec = Codec::for_label(spec.codec_label)?;
//! let entries = table::generate_table(codec, spec.ranges, codepages::CONTROL_OVERRIDES)?;
//!
//! assert!(entries.iter().any(|e| e.to_string() == "B0A1=가"));
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]

// Error handling
pub mod error;

// Strict decode seam over encoding_rs
pub mod codec;

// Core generator
pub mod table;

// Per-encoding configuration data
pub mod codepages;

// Output writing
pub mod sink;

pub use codec::Codec;
pub use error::{Error, Result};
pub use table::{ByteRange, ByteWidth, ControlOverride, TableEntry};
