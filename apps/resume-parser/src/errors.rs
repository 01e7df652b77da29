use thiserror::Error;

use crate::llm_client::LlmError;

/// Top-level error for a single extraction call.
/// Every variant is fatal: no `ExtractionResult` is produced.
#[derive(Debug, Error)]
pub enum ParseError {
    #[error("Unsupported file format '{0}'. Please use PDF or DOCX files.")]
    UnsupportedFormat(String),

    #[error("Document read error: {0}")]
    DocumentRead(#[from] DocumentReadError),

    #[error("Annotation error: {0}")]
    Annotation(#[from] AnnotationError),

    #[error("Internal error: {0}")]
    Internal(#[from] anyhow::Error),
}

/// Failures raised while turning document bytes into plain text.
/// The underlying library error is carried as-is.
#[derive(Debug, Error)]
pub enum DocumentReadError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("PDF extraction failed: {0}")]
    Pdf(String),

    #[error("PDF parse error: {0}")]
    Lopdf(#[from] lopdf::Error),

    #[error("DOCX archive error: {0}")]
    Zip(#[from] zip::result::ZipError),

    #[error("DOCX XML error: {0}")]
    Xml(#[from] quick_xml::Error),

    #[error("DOCX is missing part '{0}'")]
    MissingPart(String),
}

/// Failures raised while annotating text. Always fatal for the extraction.
#[derive(Debug, Error)]
pub enum AnnotationError {
    #[error("LLM error: {0}")]
    Llm(#[from] LlmError),

    /// The model answered, but not with a usable annotation.
    #[error("Annotator backend error: {0}")]
    Backend(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unsupported_format_names_extension() {
        let err = ParseError::UnsupportedFormat("txt".to_string());
        assert!(err.to_string().contains("'txt'"));
    }

    #[test]
    fn test_document_read_wraps_io_error() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "no such file");
        let err: ParseError = DocumentReadError::from(io).into();
        assert!(matches!(err, ParseError::DocumentRead(DocumentReadError::Io(_))));
        assert!(err.to_string().contains("no such file"));
    }
}
