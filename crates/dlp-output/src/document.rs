//! Document writer over a word-processing automation engine.
//!
//! # Engine model
//!
//! The engine is reached through two traits:
//!
//! - [`DocumentEngine`] reports availability and starts sessions.  Starting
//!   is fallible; a failed start is treated exactly like a missing engine.
//! - [`DocumentSession`] is one live automation session holding one
//!   in-progress document.
//!
//! A session is always held in a [`SessionGuard`], whose `Drop` quits it.
//! That covers every exit path out of [`DocumentWriter::write_document`]:
//! success, `?` on an automation error, and unwinding.  Errors from `quit`
//! itself are logged and dropped so they never replace the outcome that
//! caused the exit.
//!
//! Sessions are never shared: every call starts its own and the guard ends it.

use std::ops::{Deref, DerefMut};
use std::path::Path;

use dlp_core::RecordSet;
use thiserror::Error;

use crate::writer::{Format, FormatWriter, WriteResult, discard_partial};
use crate::Capability;

/// Errors raised by a document engine or session.
#[derive(Debug, Error)]
pub enum EngineError {
    #[error("engine is not available")]
    Unavailable,

    #[error("engine failed to start: {0}")]
    Start(String),

    #[error("automation error: {0}")]
    Automation(String),

    #[error("save failed: {0}")]
    Save(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// One automation session with one open document.
pub trait DocumentSession {
    /// Append a top-level heading.
    fn heading(&mut self, text: &str) -> Result<(), EngineError>;

    /// Append a body paragraph.  An empty `text` appends a blank paragraph.
    fn paragraph(&mut self, text: &str) -> Result<(), EngineError>;

    /// Save the document to `path`.
    fn save_as(&mut self, path: &Path) -> Result<(), EngineError>;

    /// Close the document and end the session.  Must tolerate being called
    /// after a failed or partial write.
    fn quit(&mut self) -> Result<(), EngineError>;
}

/// A word-processing engine that can start sessions.
pub trait DocumentEngine {
    type Session: DocumentSession;

    /// Cheap, side-effect-free presence check.
    fn is_available(&self) -> bool;

    fn start(&self) -> Result<Self::Session, EngineError>;
}

// ── SessionGuard ──────────────────────────────────────────────────────────────

/// Owns a session and quits it when dropped.
pub struct SessionGuard<S: DocumentSession> {
    session: S,
}

impl<S: DocumentSession> SessionGuard<S> {
    pub fn new(session: S) -> Self {
        SessionGuard { session }
    }
}

impl<S: DocumentSession> Deref for SessionGuard<S> {
    type Target = S;

    fn deref(&self) -> &S {
        &self.session
    }
}

impl<S: DocumentSession> DerefMut for SessionGuard<S> {
    fn deref_mut(&mut self) -> &mut S {
        &mut self.session
    }
}

impl<S: DocumentSession> Drop for SessionGuard<S> {
    fn drop(&mut self) {
        if let Err(e) = self.session.quit() {
            tracing::warn!(error = %e, "document session did not quit cleanly");
        }
    }
}

// ── UnavailableEngine ─────────────────────────────────────────────────────────

/// Stand-in engine for builds without one.  Never available, never starts.
#[derive(Debug, Default, Clone, Copy)]
pub struct UnavailableEngine;

/// Session type of [`UnavailableEngine`]; cannot be constructed.
pub enum NoSession {}

impl DocumentSession for NoSession {
    fn heading(&mut self, _text: &str) -> Result<(), EngineError> {
        match *self {}
    }

    fn paragraph(&mut self, _text: &str) -> Result<(), EngineError> {
        match *self {}
    }

    fn save_as(&mut self, _path: &Path) -> Result<(), EngineError> {
        match *self {}
    }

    fn quit(&mut self) -> Result<(), EngineError> {
        match *self {}
    }
}

impl DocumentEngine for UnavailableEngine {
    type Session = NoSession;

    fn is_available(&self) -> bool {
        false
    }

    fn start(&self) -> Result<NoSession, EngineError> {
        Err(EngineError::Unavailable)
    }
}

/// The engine compiled into this build.
#[cfg(feature = "docx")]
pub type DefaultEngine = crate::docx::DocxEngine;

/// The engine compiled into this build.
#[cfg(not(feature = "docx"))]
pub type DefaultEngine = UnavailableEngine;

// ── DocumentWriter ────────────────────────────────────────────────────────────

/// Writes a record set as a word-processing document.
///
/// Layout: the title as a heading, then one `field: value` paragraph per
/// field, with a blank paragraph between records.
pub struct DocumentWriter<E: DocumentEngine> {
    engine:  E,
    title:   String,
    enabled: bool,
}

impl<E: DocumentEngine> DocumentWriter<E> {
    /// `enabled` is the probe result for [`Capability::Document`]; when
    /// `false` the engine is never started.
    pub fn new(engine: E, title: impl Into<String>, enabled: bool) -> Self {
        DocumentWriter { engine, title: title.into(), enabled }
    }

    /// Write `records` as a document titled `title`.
    ///
    /// Returns `false` if the engine is missing, fails to start, or fails at
    /// any later step; any partial file is removed.  Never propagates.
    pub fn write_document(&self, records: &RecordSet, dest: &Path, title: &str) -> bool {
        if !self.enabled || !self.engine.is_available() {
            tracing::debug!(path = %dest.display(), "document capability unavailable");
            return false;
        }
        match self.try_write(records, dest, title) {
            Ok(()) => true,
            Err(e) => {
                tracing::warn!(path = %dest.display(), error = %e, "document not produced");
                discard_partial(dest);
                false
            }
        }
    }

    fn try_write(&self, records: &RecordSet, dest: &Path, title: &str) -> Result<(), EngineError> {
        let mut session = SessionGuard::new(self.engine.start()?);
        session.heading(title)?;
        for (i, record) in records.iter().enumerate() {
            if i > 0 {
                session.paragraph("")?;
            }
            for (field, value) in record.iter() {
                session.paragraph(&format!("{field}: {value}"))?;
            }
        }
        session.save_as(dest)
    }
}

impl<E: DocumentEngine> FormatWriter for DocumentWriter<E> {
    fn format(&self) -> Format {
        Format::Docx
    }

    fn write(&self, records: &RecordSet, dest: &Path) -> WriteResult {
        if self.write_document(records, dest, &self.title) {
            WriteResult::Written(dest.to_path_buf())
        } else {
            WriteResult::Skipped(Capability::Document)
        }
    }
}
