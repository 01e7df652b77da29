//! Resume field extraction.
//!
//! A document is loaded (PDF or DOCX), annotated once by an injected model and
//! scanned by six independent field extractors that produce an `ExtractionResult`.

pub mod annotator;
pub mod config;
pub mod errors;
pub mod extraction;
pub mod llm_client;
pub mod loader;
pub mod models;
pub mod parser;

pub use annotator::{AnnotatedDocument, Annotator, EntitySpan, Sentence, Token};
pub use errors::{AnnotationError, DocumentReadError, ParseError};
pub use loader::{DocumentFormat, DocumentLoader};
pub use models::{ExtractedText, ExtractionResult};
pub use parser::ResumeParser;
