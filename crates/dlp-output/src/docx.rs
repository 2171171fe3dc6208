//! `docx-rs` document engine (feature `docx`).
//!
//! The "automation session" here is an in-process document builder, so
//! starting cannot fail and quitting only releases the builder.  It still
//! goes through [`SessionGuard`](crate::document::SessionGuard) like any
//! other engine.

use std::fs::File;
use std::path::Path;

use docx_rs::{Docx, Paragraph, Run, Style, StyleType};

use crate::document::{DocumentEngine, DocumentSession, EngineError};

const HEADING_STYLE: &str = "Heading1";

/// Builds `.docx` files in-process.
#[derive(Debug, Default, Clone, Copy)]
pub struct DocxEngine;

impl DocumentEngine for DocxEngine {
    type Session = DocxSession;

    fn is_available(&self) -> bool {
        true
    }

    fn start(&self) -> Result<DocxSession, EngineError> {
        let heading = Style::new(HEADING_STYLE, StyleType::Paragraph)
            .name("Heading 1")
            .bold()
            .size(32);
        Ok(DocxSession { doc: Some(Docx::new().add_style(heading)) })
    }
}

/// One in-progress document.  `doc` is `None` once saved or quit.
pub struct DocxSession {
    doc: Option<Docx>,
}

impl DocxSession {
    fn append(&mut self, paragraph: Paragraph) -> Result<(), EngineError> {
        let doc = self.doc.take().ok_or_else(closed)?;
        self.doc = Some(doc.add_paragraph(paragraph));
        Ok(())
    }
}

fn closed() -> EngineError {
    EngineError::Automation("document is already closed".to_owned())
}

impl DocumentSession for DocxSession {
    fn heading(&mut self, text: &str) -> Result<(), EngineError> {
        self.append(Paragraph::new().add_run(Run::new().add_text(text)).style(HEADING_STYLE))
    }

    fn paragraph(&mut self, text: &str) -> Result<(), EngineError> {
        let paragraph = if text.is_empty() {
            Paragraph::new()
        } else {
            Paragraph::new().add_run(Run::new().add_text(text))
        };
        self.append(paragraph)
    }

    fn save_as(&mut self, path: &Path) -> Result<(), EngineError> {
        let doc = self.doc.take().ok_or_else(closed)?;
        let file = File::create(path)?;
        doc.build().pack(file).map_err(|e| EngineError::Save(e.to_string()))
    }

    fn quit(&mut self) -> Result<(), EngineError> {
        self.doc = None;
        Ok(())
    }
}
