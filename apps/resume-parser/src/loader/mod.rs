//! Document Loader — turns a PDF or DOCX path into plain text and a page count.
//!
//! PDF text comes from one pluggable `PdfBackend`; DOCX text is read straight out of
//! the OOXML package. Loading is blocking I/O and CPU work: async callers must run it
//! inside `tokio::task::spawn_blocking`.

pub mod docx;
pub mod pdf;

use std::path::Path;
use std::sync::Arc;

use tracing::info;

use crate::errors::{DocumentReadError, ParseError};
use crate::models::ExtractedText;

pub use pdf::{LopdfBackend, PdfBackend, PdfExtractBackend};

/// Page boundary marker in flattened PDF text (form feed).
pub const PAGE_SEPARATOR: char = '\x0c';

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentFormat {
    Pdf,
    Docx,
}

impl DocumentFormat {
    /// Resolves the format from the path extension, case-insensitively.
    pub fn from_path(path: &Path) -> Result<Self, ParseError> {
        let extension = path
            .extension()
            .and_then(|e| e.to_str())
            .unwrap_or_default()
            .to_lowercase();

        match extension.as_str() {
            "pdf" => Ok(DocumentFormat::Pdf),
            "docx" => Ok(DocumentFormat::Docx),
            _ => Err(ParseError::UnsupportedFormat(extension)),
        }
    }
}

/// Loads documents using a single PDF backend chosen at construction.
#[derive(Clone)]
pub struct DocumentLoader {
    pdf_backend: Arc<dyn PdfBackend>,
}

impl DocumentLoader {
    pub fn new(pdf_backend: Arc<dyn PdfBackend>) -> Self {
        Self { pdf_backend }
    }

    pub fn pdf_backend_name(&self) -> &'static str {
        self.pdf_backend.name()
    }

    /// Reads the file once and extracts its text.
    /// The extension is checked before the filesystem is touched.
    pub fn load(&self, path: &Path) -> Result<ExtractedText, ParseError> {
        let format = DocumentFormat::from_path(path)?;
        let bytes = std::fs::read(path).map_err(DocumentReadError::from)?;

        let extracted = match format {
            DocumentFormat::Pdf => {
                let text = self.pdf_backend.extract_text(&bytes)?;
                let page_count = count_pages(&text);
                ExtractedText { text, page_count }
            }
            DocumentFormat::Docx => ExtractedText {
                text: docx::extract_text(&bytes)?,
                // No layout engine, so pagination is not derivable.
                page_count: 1,
            },
        };

        info!(
            "Loaded {:?} document {}: {} pages, {} chars",
            format,
            path.display(),
            extracted.page_count,
            extracted.text.len()
        );

        Ok(extracted)
    }
}

impl Default for DocumentLoader {
    fn default() -> Self {
        Self::new(Arc::new(PdfExtractBackend))
    }
}

/// Number of pages implied by form-feed separators, never less than 1.
pub fn count_pages(text: &str) -> usize {
    (text.split(PAGE_SEPARATOR).count() - 1).max(1)
}
