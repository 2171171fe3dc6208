//! Plain-text writer.
//!
//! ```text
//! Heavy PII Records
//! ===========================
//! Name: Alex Lee
//! Email: alex.lee@example.com
//!
//! Name: Taylor Tan
//! Email: t.t@test.local
//!
//! ```
//!
//! Line-oriented and never parsed back, so nothing is escaped.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use dlp_core::RecordSet;

use crate::OutputResult;
use crate::writer::{Format, FormatWriter, WriteResult};

/// Longest separator line the writer emits.
pub const MAX_SEPARATOR: usize = 120;

#[derive(Debug, Clone)]
pub struct TextWriter {
    caption: String,
}

impl TextWriter {
    pub fn new(caption: impl Into<String>) -> Self {
        TextWriter { caption: caption.into() }
    }

    /// `min(120, chars(caption) + 10)` `=` characters.
    pub fn separator(&self) -> String {
        "=".repeat(MAX_SEPARATOR.min(self.caption.chars().count() + 10))
    }

    pub fn write_to(&self, records: &RecordSet, dest: &Path) -> OutputResult<()> {
        let mut out = BufWriter::new(File::create(dest)?);
        writeln!(out, "{}", self.caption)?;
        writeln!(out, "{}", self.separator())?;
        for record in records {
            for (field, value) in record.iter() {
                writeln!(out, "{field}: {value}")?;
            }
            writeln!(out)?;
        }
        out.flush()?;
        Ok(())
    }
}

impl FormatWriter for TextWriter {
    fn format(&self) -> Format {
        Format::Text
    }

    fn write(&self, records: &RecordSet, dest: &Path) -> WriteResult {
        WriteResult::from_output(dest, self.write_to(records, dest))
    }
}
