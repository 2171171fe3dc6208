//! JSON writer: a pretty-printed array with one object per record.
//!
//! Object keys follow schema order.  Integers and decimals are emitted as
//! JSON numbers; a non-finite decimal becomes `null`.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use dlp_core::RecordSet;

use crate::OutputResult;
use crate::writer::{Format, FormatWriter, WriteResult};

#[derive(Debug, Default, Clone, Copy)]
pub struct JsonWriter;

impl JsonWriter {
    pub fn new() -> Self {
        JsonWriter
    }

    pub fn write_to(&self, records: &RecordSet, dest: &Path) -> OutputResult<()> {
        let mut out = BufWriter::new(File::create(dest)?);
        serde_json::to_writer_pretty(&mut out, records)?;
        out.write_all(b"\n")?;
        out.flush()?;
        Ok(())
    }
}

impl FormatWriter for JsonWriter {
    fn format(&self) -> Format {
        Format::Json
    }

    fn write(&self, records: &RecordSet, dest: &Path) -> WriteResult {
        WriteResult::from_output(dest, self.write_to(records, dest))
    }
}
