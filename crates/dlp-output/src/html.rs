//! Markup-tabular (HTML) writer.
//!
//! Produces a single self-contained page: the only styling is an inline
//! `<style>` block, and nothing is loaded from elsewhere.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use dlp_core::RecordSet;

use crate::OutputResult;
use crate::escape::escape_markup;
use crate::writer::{Format, FormatWriter, WriteResult};

const STYLE: &str = "\
body { font-family: system-ui, sans-serif; margin: 2rem; color: #222; }
h1 { font-size: 1.4rem; }
table { border-collapse: collapse; font-size: 0.9rem; }
th, td { border: 1px solid #bbb; padding: 0.3rem 0.6rem; text-align: left; vertical-align: top; }
th { background: #eee; }
tbody tr:nth-child(even) { background: #f8f8f8; }";

#[derive(Debug, Clone)]
pub struct HtmlWriter {
    title: String,
}

impl HtmlWriter {
    pub fn new(title: impl Into<String>) -> Self {
        HtmlWriter { title: title.into() }
    }

    pub fn write_to(&self, records: &RecordSet, dest: &Path) -> OutputResult<()> {
        let mut out = BufWriter::new(File::create(dest)?);
        let title = escape_markup(&self.title);

        writeln!(out, "<!DOCTYPE html>")?;
        writeln!(out, r#"<html lang="en">"#)?;
        writeln!(out, "<head>")?;
        writeln!(out, r#"<meta charset="utf-8">"#)?;
        writeln!(out, "<title>{title}</title>")?;
        writeln!(out, "<style>\n{STYLE}\n</style>")?;
        writeln!(out, "</head>")?;
        writeln!(out, "<body>")?;
        writeln!(out, "<h1>{title}</h1>")?;
        writeln!(out, "<table>")?;

        write!(out, "<thead><tr>")?;
        for field in records.schema().iter() {
            write!(out, "<th>{}</th>", escape_markup(field))?;
        }
        writeln!(out, "</tr></thead>")?;

        writeln!(out, "<tbody>")?;
        for record in records {
            write!(out, "<tr>")?;
            for value in record.values() {
                write!(out, "<td>{}</td>", escape_markup(&value.to_string()))?;
            }
            writeln!(out, "</tr>")?;
        }
        writeln!(out, "</tbody>")?;

        writeln!(out, "</table>")?;
        writeln!(out, "</body>")?;
        writeln!(out, "</html>")?;
        out.flush()?;
        Ok(())
    }
}

impl FormatWriter for HtmlWriter {
    fn format(&self) -> Format {
        Format::Html
    }

    fn write(&self, records: &RecordSet, dest: &Path) -> WriteResult {
        WriteResult::from_output(dest, self.write_to(records, dest))
    }
}
