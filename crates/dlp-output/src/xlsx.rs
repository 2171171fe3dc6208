//! Spreadsheet writer (engine behind feature `xlsx`).
//!
//! With the engine: one worksheet with a bold, frozen header row, an
//! autofilter over the header and data, and auto-fit column widths.
//! Without it, or on any error while writing, [`XlsxWriter::write_sheet`]
//! returns `false` and leaves no file behind.  A half-written workbook is
//! worse than a missing one, so errors are logged and swallowed here.

use std::path::Path;

use dlp_core::RecordSet;

use crate::writer::{Format, FormatWriter, WriteResult, discard_partial};
use crate::{Capability, OutputResult};

/// Longest worksheet name Excel accepts.
pub const MAX_SHEET_NAME: usize = 31;

#[derive(Debug, Clone)]
pub struct XlsxWriter {
    sheet_name: String,
    enabled:    bool,
}

impl XlsxWriter {
    /// `enabled` is the probe result for [`Capability::Spreadsheet`].
    pub fn new(sheet_name: impl Into<String>, enabled: bool) -> Self {
        XlsxWriter { sheet_name: sheet_name.into(), enabled }
    }

    /// Write `records` as a one-sheet workbook.
    ///
    /// Returns `true` if the workbook was produced, `false` if the engine is
    /// unavailable or writing failed.  Never panics or propagates.
    pub fn write_sheet(&self, records: &RecordSet, dest: &Path, sheet_name: &str) -> bool {
        if !self.enabled {
            tracing::debug!(path = %dest.display(), "spreadsheet capability disabled");
            return false;
        }
        match build_workbook(records, dest, &coerce_sheet_name(sheet_name)) {
            Ok(()) => true,
            Err(e) => {
                tracing::warn!(path = %dest.display(), error = %e, "spreadsheet not produced");
                discard_partial(dest);
                false
            }
        }
    }
}

impl FormatWriter for XlsxWriter {
    fn format(&self) -> Format {
        Format::Xlsx
    }

    fn write(&self, records: &RecordSet, dest: &Path) -> WriteResult {
        if self.write_sheet(records, dest, &self.sheet_name) {
            WriteResult::Written(dest.to_path_buf())
        } else {
            WriteResult::Skipped(Capability::Spreadsheet)
        }
    }
}

/// Apply Excel's sheet-name rules: no `[]:*?/\`, no leading or trailing
/// apostrophe, at most 31 characters, not empty.
pub fn coerce_sheet_name(name: &str) -> String {
    let cleaned: String = name
        .chars()
        .filter(|c| !matches!(c, '[' | ']' | ':' | '*' | '?' | '/' | '\\'))
        .take(MAX_SHEET_NAME)
        .collect();
    let cleaned = cleaned.trim_matches('\'').trim();
    if cleaned.is_empty() { "Sheet1".to_owned() } else { cleaned.to_owned() }
}

#[cfg(feature = "xlsx")]
fn build_workbook(records: &RecordSet, dest: &Path, sheet_name: &str) -> OutputResult<()> {
    use rust_xlsxwriter::{Format as CellFormat, Workbook};

    let mut workbook = Workbook::new();
    let sheet = workbook.add_worksheet();
    sheet.set_name(sheet_name)?;

    let bold = CellFormat::new().set_bold();
    for (col, field) in records.schema().iter().enumerate() {
        sheet.write_string_with_format(0, col as u16, field, &bold)?;
    }

    for (i, record) in records.iter().enumerate() {
        let row = i as u32 + 1;
        for (col, value) in record.values().iter().enumerate() {
            let col = col as u16;
            match value.as_f64() {
                Some(n) => sheet.write_number(row, col, n)?,
                None    => sheet.write_string(row, col, value.to_string())?,
            };
        }
    }

    let columns = records.schema().len();
    if columns > 0 {
        sheet.autofilter(0, 0, records.len() as u32, (columns - 1) as u16)?;
    }
    sheet.set_freeze_panes(1, 0)?;
    sheet.autofit();

    workbook.save(dest)?;
    Ok(())
}

#[cfg(not(feature = "xlsx"))]
fn build_workbook(_records: &RecordSet, _dest: &Path, _sheet_name: &str) -> OutputResult<()> {
    Err(crate::OutputError::Unavailable(Capability::Spreadsheet))
}
