//! Entity Annotator — pluggable, trait-based model that turns plain text into
//! tokens, sentences and named entities.
//!
//! Default: `LlmAnnotator` (hosted model for entities, local segmentation).
//! The parser holds an `Arc<dyn Annotator>`; tests substitute a fake.

pub mod llm;
pub mod prompts;
pub mod segment;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::errors::AnnotationError;

pub use llm::LlmAnnotator;

/// Entity label used for people's names.
pub const PERSON_LABEL: &str = "PERSON";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Token {
    pub text: String,
    pub lower: String,
}

impl Token {
    pub fn new(text: impl Into<String>) -> Self {
        let text = text.into();
        let lower = text.to_lowercase();
        Self { text, lower }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Sentence {
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntitySpan {
    pub label: String,
    pub text: String,
}

/// Annotation output for one text, in document order. Discarded after extraction.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AnnotatedDocument {
    pub tokens: Vec<Token>,
    pub sentences: Vec<Sentence>,
    pub entities: Vec<EntitySpan>,
}

/// The annotator trait. Implement this to swap model providers without touching
/// the field extractors or the parser.
#[async_trait]
pub trait Annotator: Send + Sync {
    async fn annotate(&self, text: &str) -> Result<AnnotatedDocument, AnnotationError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_token_lowercases() {
        let token = Token::new("PostgreSQL");
        assert_eq!(token.text, "PostgreSQL");
        assert_eq!(token.lower, "postgresql");
    }

    #[test]
    fn test_entity_span_deserializes() {
        let json = r#"{"label": "PERSON", "text": "Jane Doe"}"#;
        let entity: EntitySpan = serde_json::from_str(json).unwrap();
        assert_eq!(entity.label, PERSON_LABEL);
        assert_eq!(entity.text, "Jane Doe");
    }
}
