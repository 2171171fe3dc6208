//! `TierDriver`: runs the full writer set over one tier's record set.

use std::path::{Path, PathBuf};

use dlp_core::RecordSet;

use crate::document::{DefaultEngine, DocumentEngine, DocumentWriter};
use crate::writer::{Format, FormatWriter, WriteResult};
use crate::{
    Capability, CapabilityProbe, CsvWriter, FallbackReporter, HtmlWriter, JsonWriter, OutputError,
    TextWriter, XlsxWriter, XmlWriter,
};

/// Caller-chosen names that end up inside the artifacts.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TierLabels {
    /// XML root element.
    pub root:    String,
    /// HTML and document title.
    pub title:   String,
    /// Plain-text caption line.
    pub caption: String,
    /// Worksheet name.
    pub sheet:   String,
}

impl TierLabels {
    /// Labels derived from a human-readable tier name such as `"Heavy PII"`.
    pub fn from_label(label: &str) -> Self {
        TierLabels {
            root:    "Records".to_owned(),
            title:   format!("{label} Records"),
            caption: format!("{label} Records"),
            sheet:   label.to_owned(),
        }
    }
}

/// Outcome of one format within a tier.
#[derive(Debug)]
pub struct FormatOutcome {
    pub format: Format,
    pub path:   PathBuf,
    pub result: WriteResult,
}

/// Everything that happened while writing one tier.
#[derive(Debug, Default)]
pub struct TierReport {
    pub outcomes:        Vec<FormatOutcome>,
    /// Fallback placeholders written for skipped optional formats.
    pub placeholders:    Vec<PathBuf>,
    /// Placeholders that could not be written (or stale ones not removed).
    pub fallback_errors: Vec<(Capability, OutputError)>,
}

impl TierReport {
    /// Formats whose writer failed, with the error.
    pub fn failures(&self) -> impl Iterator<Item = (Format, &OutputError)> {
        self.outcomes.iter().filter_map(|o| o.result.error().map(|e| (o.format, e)))
    }

    pub fn written(&self) -> impl Iterator<Item = &Path> {
        self.outcomes.iter().filter_map(|o| match &o.result {
            WriteResult::Written(p) => Some(p.as_path()),
            _ => None,
        })
    }

    pub fn outcome(&self, format: Format) -> Option<&FormatOutcome> {
        self.outcomes.iter().find(|o| o.format == format)
    }

    /// `true` if no required writer failed and every skipped optional
    /// writer got its placeholder.
    pub fn is_success(&self) -> bool {
        self.failures().next().is_none() && self.fallback_errors.is_empty()
    }
}

/// Runs a fixed list of writers over one record set.
///
/// Each writer is attempted exactly once and independently: a failed
/// required writer is recorded and the loop moves on.  A skipped optional
/// writer gets a placeholder from [`FallbackReporter`]; a successful one has
/// any stale placeholder removed, so a tier never holds both.
pub struct TierDriver {
    dir:     PathBuf,
    base:    String,
    writers: Vec<Box<dyn FormatWriter>>,
}

impl TierDriver {
    /// A driver with no writers, writing `{dir}/{base}.{ext}`.
    ///
    /// `dir` must already exist.
    pub fn new(dir: impl Into<PathBuf>, base: impl Into<String>) -> Self {
        TierDriver { dir: dir.into(), base: base.into(), writers: Vec::new() }
    }

    /// The full seven-format set using the engine compiled into this build.
    pub fn standard<P: CapabilityProbe>(
        dir:    impl Into<PathBuf>,
        base:   impl Into<String>,
        labels: &TierLabels,
        probe:  &P,
    ) -> Self {
        Self::standard_with_engine(dir, base, labels, probe, DefaultEngine::default())
    }

    /// The full seven-format set with an explicit document engine.
    ///
    /// Capabilities are probed here, once, for the whole tier.
    pub fn standard_with_engine<P, E>(
        dir:    impl Into<PathBuf>,
        base:   impl Into<String>,
        labels: &TierLabels,
        probe:  &P,
        engine: E,
    ) -> Self
    where
        P: CapabilityProbe,
        E: DocumentEngine + 'static,
    {
        let spreadsheet = probe.probe(Capability::Spreadsheet);
        let document = probe.probe(Capability::Document);
        tracing::debug!(
            spreadsheet = spreadsheet.available,
            document = document.available,
            "probed capabilities"
        );

        Self::new(dir, base)
            .with_writer(CsvWriter::new())
            .with_writer(JsonWriter::new())
            .with_writer(XmlWriter::new(&labels.root))
            .with_writer(HtmlWriter::new(&labels.title))
            .with_writer(TextWriter::new(&labels.caption))
            .with_writer(XlsxWriter::new(&labels.sheet, spreadsheet.available))
            .with_writer(DocumentWriter::new(engine, &labels.title, document.available))
    }

    /// Append a writer.  No two writers may share a format, since the format
    /// decides the destination path.
    pub fn with_writer(mut self, writer: impl FormatWriter + 'static) -> Self {
        debug_assert!(
            self.writers.iter().all(|w| w.format() != writer.format()),
            "duplicate writer for {}",
            writer.format(),
        );
        self.writers.push(Box::new(writer));
        self
    }

    /// `{dir}/{base}.{ext}`.
    pub fn destination(&self, format: Format) -> PathBuf {
        self.dir.join(format!("{}.{}", self.base, format.extension()))
    }

    /// Run every writer over `records`, in order.
    pub fn run(&self, records: &RecordSet) -> TierReport {
        let mut report = TierReport::default();

        for writer in &self.writers {
            let format = writer.format();
            let path = self.destination(format);
            let result = writer.write(records, &path);

            match &result {
                WriteResult::Written(p) => {
                    tracing::debug!(%format, path = %p.display(), rows = records.len(), "wrote artifact");
                    if let Some(capability) = format.capability() {
                        if let Err(e) = FallbackReporter::clear(&self.dir, capability) {
                            report.fallback_errors.push((capability, e));
                        }
                    }
                }
                WriteResult::Skipped(capability) => {
                    tracing::warn!(%format, %capability, "optional format skipped");
                    // An artifact left by an earlier run must not sit next to the placeholder.
                    match std::fs::remove_file(&path) {
                        Ok(()) => tracing::debug!(path = %path.display(), "removed stale artifact"),
                        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {}
                        Err(e) => report.fallback_errors.push((*capability, e.into())),
                    }
                    let placeholder = FallbackReporter::placeholder_path(&self.dir, *capability);
                    if !report.placeholders.contains(&placeholder) {
                        match FallbackReporter::report(&self.dir, *capability) {
                            Ok(p) => report.placeholders.push(p),
                            Err(e) => report.fallback_errors.push((*capability, e)),
                        }
                    }
                }
                WriteResult::Failed(e) => {
                    tracing::error!(%format, path = %path.display(), error = %e, "write failed");
                }
            }

            report.outcomes.push(FormatOutcome { format, path, result });
        }

        tracing::info!(
            dir = %self.dir.display(),
            base = %self.base,
            written = report.written().count(),
            placeholders = report.placeholders.len(),
            failed = report.failures().count(),
            "tier written"
        );
        report
    }
}
