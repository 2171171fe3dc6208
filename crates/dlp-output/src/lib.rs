//! `dlp-output`: multi-format record writers for dlp-fixtures.
//!
//! Seven formats share one [`FormatWriter`] contract.  Five are always
//! available; two depend on optional engines behind Cargo features:
//!
//! | Feature   | Format   | Writer              | Without the engine                |
//! |-----------|----------|---------------------|-----------------------------------|
//! | *(none)*  | CSV      | [`CsvWriter`]       |                                   |
//! | *(none)*  | JSON     | [`JsonWriter`]      |                                   |
//! | *(none)*  | XML      | [`XmlWriter`]       |                                   |
//! | *(none)*  | HTML     | [`HtmlWriter`]      |                                   |
//! | *(none)*  | TXT      | [`TextWriter`]      |                                   |
//! | `xlsx`    | XLSX     | [`XlsxWriter`]      | `README_XLSX.txt` placeholder     |
//! | `docx`    | DOCX     | [`DocumentWriter`]  | `README_DOCX.txt` placeholder     |
//!
//! [`TierDriver`] runs the whole set over one [`RecordSet`], probing the
//! optional capabilities once and writing placeholders through
//! [`FallbackReporter`] when an optional writer is skipped.
//!
//! # Usage
//!
//! ```rust,ignore
//! use dlp_output::{BuildProbe, TierDriver, TierLabels};
//!
//! let driver = TierDriver::standard(&dir, "heavy_pii", &TierLabels::from_label("Heavy PII"), &BuildProbe);
//! let report = driver.run(&records);
//! for (format, err) in report.failures() {
//!     eprintln!("{format}: {err}");
//! }
//! ```
//!
//! [`RecordSet`]: dlp_core::RecordSet

pub mod capability;
pub mod csv;
pub mod document;
pub mod driver;
pub mod error;
pub mod escape;
pub mod fallback;
pub mod html;
pub mod json;
pub mod text;
pub mod writer;
pub mod xlsx;
pub mod xml;

#[cfg(feature = "docx")]
pub mod docx;


pub use capability::{BuildProbe, Capability, CapabilityProbe, CapabilityStatus, OverrideProbe};
pub use csv::CsvWriter;
pub use document::{
    DefaultEngine, DocumentEngine, DocumentSession, DocumentWriter, EngineError, SessionGuard,
    UnavailableEngine,
};
pub use driver::{FormatOutcome, TierDriver, TierLabels, TierReport};
pub use error::{OutputError, OutputResult};
pub use fallback::FallbackReporter;
pub use html::HtmlWriter;
pub use json::JsonWriter;
pub use text::TextWriter;
pub use writer::{Format, FormatWriter, WriteResult};
pub use xlsx::XlsxWriter;
pub use xml::XmlWriter;

#[cfg(feature = "docx")]
pub use docx::DocxEngine;
