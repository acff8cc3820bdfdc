//! Table serialization.
//!
//! Writes a generated table to its destination: one `CODE=TEXT` line per
//! entry, UTF-8, newline-terminated, no header or trailer. The file
//! handle is scoped to the write call and released on every exit path.

use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::error::Result;
use crate::table::TableEntry;

/// Write all entries to `path`, creating parent directories as needed.
///
/// The destination is opened once, fully written, and flushed before
/// this function returns. Returns the number of entries written.
///
/// # Errors
///
/// Returns [`crate::Error::Io`] if the destination cannot be created or
/// written.
pub fn write_table(path: &Path, entries: &[TableEntry]) -> Result<usize> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }

    let file = File::create(path)?;
    let mut writer = BufWriter::new(file);
    for entry in entries {
        writeln!(writer, "{}", entry)?;
    }
    writer.flush()?;

    log::debug!("wrote {} entries to {}", entries.len(), path.display());
    Ok(entries.len())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::table::{ByteWidth, TableEntry};

    fn sample_entries() -> Vec<TableEntry> {
        vec![
            TableEntry {
                code: 0x0D,
                width: ByteWidth::One,
                text: ".".to_string(),
            },
            TableEntry {
                code: 0x41,
                width: ByteWidth::One,
                text: "A".to_string(),
            },
            TableEntry {
                code: 0xB0A1,
                width: ByteWidth::Two,
                text: "가".to_string(),
            },
        ]
    }

    #[test]
    fn test_write_table_exact_bytes() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("sample.tbl");

        let written = write_table(&path, &sample_entries()).unwrap();
        assert_eq!(written, 3);

        let contents = fs::read_to_string(&path).unwrap();
        assert_eq!(contents, "0D=.\n41=A\nB0A1=가\n");
    }

    #[test]
    fn test_write_table_creates_parent_dirs() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested/out/sample.tbl");

        write_table(&path, &sample_entries()).unwrap();
        assert!(path.exists());
    }

    #[test]
    fn test_write_table_empty() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("empty.tbl");

        let written = write_table(&path, &[]).unwrap();
        assert_eq!(written, 0);
        assert_eq!(fs::read(&path).unwrap(), b"");
    }
}
