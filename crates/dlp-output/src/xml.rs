//! Markup-tree (XML) writer.
//!
//! ```xml
//! <?xml version="1.0" encoding="UTF-8"?>
//! <Records>
//!   <Record>
//!     <Name>A &amp; B</Name>
//!     <Email>ab@sample.net</Email>
//!   </Record>
//! </Records>
//! ```
//!
//! The root name is chosen by the caller; each record is a `<Record>` child
//! with one element per field, in schema order.

use std::borrow::Cow;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use dlp_core::RecordSet;

use crate::OutputResult;
use crate::escape::{element_name, escape_markup};
use crate::writer::{Format, FormatWriter, WriteResult};

/// Element name of each per-record child.
pub const RECORD_ELEMENT: &str = "Record";

#[derive(Debug, Clone)]
pub struct XmlWriter {
    root: String,
}

impl XmlWriter {
    /// `root` is coerced to a valid element name when written.
    pub fn new(root: impl Into<String>) -> Self {
        XmlWriter { root: root.into() }
    }

    pub fn write_to(&self, records: &RecordSet, dest: &Path) -> OutputResult<()> {
        let mut out = BufWriter::new(File::create(dest)?);
        let root = element_name(&self.root);
        let fields: Vec<Cow<'_, str>> = records.schema().iter().map(element_name).collect();

        writeln!(out, r#"<?xml version="1.0" encoding="UTF-8"?>"#)?;
        writeln!(out, "<{root}>")?;
        for record in records {
            writeln!(out, "  <{RECORD_ELEMENT}>")?;
            for (name, value) in fields.iter().zip(record.values()) {
                let text = value.to_string();
                writeln!(out, "    <{name}>{}</{name}>", escape_markup(&text))?;
            }
            writeln!(out, "  </{RECORD_ELEMENT}>")?;
        }
        writeln!(out, "</{root}>")?;
        out.flush()?;
        Ok(())
    }
}

impl FormatWriter for XmlWriter {
    fn format(&self) -> Format {
        Format::Xml
    }

    fn write(&self, records: &RecordSet, dest: &Path) -> WriteResult {
        WriteResult::from_output(dest, self.write_to(records, dest))
    }
}
