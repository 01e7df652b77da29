//! Result Assembler — load, annotate once, run the field extractors.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::anyhow;
use tracing::info;

use crate::annotator::Annotator;
use crate::errors::ParseError;
use crate::extraction::extract_fields;
use crate::loader::DocumentLoader;
use crate::models::{ExtractedText, ExtractionResult};

/// One extraction per call; no state is kept between calls.
#[derive(Clone)]
pub struct ResumeParser {
    loader: DocumentLoader,
    annotator: Arc<dyn Annotator>,
}

impl ResumeParser {
    pub fn new(loader: DocumentLoader, annotator: Arc<dyn Annotator>) -> Self {
        Self { loader, annotator }
    }

    /// Extracts the record for one document.
    /// Loading or annotation failures abort the call; unmatched fields stay empty.
    pub async fn parse(&self, path: impl AsRef<Path>) -> Result<ExtractionResult, ParseError> {
        let path = path.as_ref().to_path_buf();
        info!("Parsing resume {}", path.display());

        let extracted = self.load(path).await?;
        self.parse_text(&extracted).await
    }

    /// Annotates already-extracted text and assembles the record.
    pub async fn parse_text(&self, extracted: &ExtractedText) -> Result<ExtractionResult, ParseError> {
        let doc = self.annotator.annotate(&extracted.text).await?;
        Ok(extract_fields(&extracted.text, &doc, extracted.page_count))
    }

    /// Document loading is blocking, so it runs on the blocking pool.
    async fn load(&self, path: PathBuf) -> Result<ExtractedText, ParseError> {
        let loader = self.loader.clone();
        tokio::task::spawn_blocking(move || loader.load(&path))
            .await
            .map_err(|e| ParseError::Internal(anyhow!("document loading task failed: {e}")))?
    }
}
