//! Delimited (CSV) writer.
//!
//! Header row first, then one row per record.  Quoting follows RFC 4180 via
//! the `csv` crate: a field is quoted only when it contains a comma, quote or
//! line break, and embedded quotes are doubled.

use std::path::Path;

use csv::Writer;
use dlp_core::RecordSet;

use crate::OutputResult;
use crate::writer::{Format, FormatWriter, WriteResult};

/// Writes a record set as UTF-8 CSV (no BOM).
#[derive(Debug, Default, Clone, Copy)]
pub struct CsvWriter;

impl CsvWriter {
    pub fn new() -> Self {
        CsvWriter
    }

    /// Write `records` to `dest`.
    ///
    /// An empty set still gets its header row; a set with no schema at all
    /// produces an empty file.
    pub fn write_to(&self, records: &RecordSet, dest: &Path) -> OutputResult<()> {
        let mut writer = Writer::from_path(dest)?;
        if !records.schema().is_empty() {
            writer.write_record(records.schema().iter())?;
        }
        for record in records {
            writer.write_record(record.values().iter().map(|v| v.to_string()))?;
        }
        writer.flush()?;
        Ok(())
    }
}

impl FormatWriter for CsvWriter {
    fn format(&self) -> Format {
        Format::Csv
    }

    fn write(&self, records: &RecordSet, dest: &Path) -> WriteResult {
        WriteResult::from_output(dest, self.write_to(records, dest))
    }
}
