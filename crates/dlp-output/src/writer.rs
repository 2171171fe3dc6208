//! The `FormatWriter` trait implemented by every output format.

use std::fmt;
use std::path::{Path, PathBuf};

use dlp_core::RecordSet;

use crate::{Capability, OutputError, OutputResult};

/// The closed set of output formats, in the order the driver runs them.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
pub enum Format {
    Csv,
    Json,
    Xml,
    Html,
    Text,
    Xlsx,
    Docx,
}

impl Format {
    /// File extension, without the dot.
    pub fn extension(self) -> &'static str {
        match self {
            Format::Csv  => "csv",
            Format::Json => "json",
            Format::Xml  => "xml",
            Format::Html => "html",
            Format::Text => "txt",
            Format::Xlsx => "xlsx",
            Format::Docx => "docx",
        }
    }

    /// The optional capability this format needs, if any.
    pub fn capability(self) -> Option<Capability> {
        match self {
            Format::Xlsx => Some(Capability::Spreadsheet),
            Format::Docx => Some(Capability::Document),
            _ => None,
        }
    }
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.extension())
    }
}

/// Outcome of one writer invocation.
#[derive(Debug)]
pub enum WriteResult {
    /// The artifact was written to this path.
    Written(PathBuf),
    /// An optional capability was missing (or failed); nothing was written.
    Skipped(Capability),
    /// A required writer could not produce its artifact.
    Failed(OutputError),
}

impl WriteResult {
    /// Map a required writer's result onto a `WriteResult`.
    pub fn from_output(dest: &Path, result: OutputResult<()>) -> Self {
        match result {
            Ok(()) => WriteResult::Written(dest.to_path_buf()),
            Err(e) => WriteResult::Failed(e),
        }
    }

    #[inline]
    pub fn is_written(&self) -> bool {
        matches!(self, WriteResult::Written(_))
    }

    #[inline]
    pub fn is_skipped(&self) -> bool {
        matches!(self, WriteResult::Skipped(_))
    }

    pub fn error(&self) -> Option<&OutputError> {
        match self {
            WriteResult::Failed(e) => Some(e),
            _ => None,
        }
    }
}

/// Trait implemented by every format writer.
///
/// Writers never mutate the record set and never create parent directories;
/// the caller owns the destination layout.
pub trait FormatWriter {
    fn format(&self) -> Format;

    /// Serialize `records` to `dest`.  Attempted exactly once; no retries.
    fn write(&self, records: &RecordSet, dest: &Path) -> WriteResult;
}

/// Remove whatever a failed optional writer left at `dest`.
///
/// Removal errors are ignored: the file may never have been created.
pub(crate) fn discard_partial(dest: &Path) {
    if std::fs::remove_file(dest).is_ok() {
        tracing::debug!(path = %dest.display(), "removed partial artifact");
    }
}
