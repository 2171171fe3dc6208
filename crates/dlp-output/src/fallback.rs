//! Placeholder files for formats whose capability was unavailable.
//!
//! One fixed file name per capability, written next to the tier's other
//! artifacts.  The content is deterministic: no timestamps, no host details.

use std::fs;
use std::path::{Path, PathBuf};

use crate::{Capability, OutputResult};

/// Writes and clears fallback placeholders.
#[derive(Debug, Default, Clone, Copy)]
pub struct FallbackReporter;

impl FallbackReporter {
    /// `README_XLSX.txt` / `README_DOCX.txt`.
    pub fn file_name(capability: Capability) -> &'static str {
        match capability {
            Capability::Spreadsheet => "README_XLSX.txt",
            Capability::Document    => "README_DOCX.txt",
        }
    }

    pub fn placeholder_path(dir: &Path, capability: Capability) -> PathBuf {
        dir.join(Self::file_name(capability))
    }

    /// Write the placeholder for `capability` into `dir`, replacing any
    /// earlier one.
    pub fn report(dir: &Path, capability: Capability) -> OutputResult<PathBuf> {
        let path = Self::placeholder_path(dir, capability);
        fs::write(&path, instructions(capability))?;
        tracing::info!(path = %path.display(), %capability, "wrote fallback placeholder");
        Ok(path)
    }

    /// Remove a stale placeholder after the real artifact was produced.
    ///
    /// Returns `true` if a placeholder was removed.
    pub fn clear(dir: &Path, capability: Capability) -> OutputResult<bool> {
        let path = Self::placeholder_path(dir, capability);
        match fs::remove_file(&path) {
            Ok(()) => Ok(true),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(false),
            Err(e) => Err(e.into()),
        }
    }
}

/// Human-readable enablement instructions for `capability`.
pub fn instructions(capability: Capability) -> String {
    match capability {
        Capability::Spreadsheet => format!(
            "XLSX output was not produced.\n\
             \n\
             The spreadsheet engine is not available in this build, or it was\n\
             disabled for this run (--no-xlsx / `xlsx = false`), or writing the\n\
             workbook failed (see the log for details).\n\
             \n\
             To enable it, rebuild with the `{}` feature, for example:\n\
             \n\
             \x20   cargo build --release -p dlp-fixtures --features {}\n\
             \n\
             and run again without --no-xlsx.  The same records are available\n\
             in the .csv, .json, .xml, .html and .txt files in this folder.\n",
            capability.feature(),
            capability.feature(),
        ),
        Capability::Document => format!(
            "DOCX output was not produced.\n\
             \n\
             The word-processing engine is not available in this build, it\n\
             failed to start, or it was disabled for this run (--no-docx /\n\
             `docx = false`), or saving the document failed (see the log).\n\
             \n\
             To enable it, rebuild with the `{}` feature, for example:\n\
             \n\
             \x20   cargo build --release -p dlp-fixtures --features {}\n\
             \n\
             and run again without --no-docx.  The same records are available\n\
             in the .csv, .json, .xml, .html and .txt files in this folder.\n",
            capability.feature(),
            capability.feature(),
        ),
    }
}
