//! LlmAnnotator — named entities from the hosted model, sentences and tokens
//! from local segmentation of the same text.

use async_trait::async_trait;
use serde::Deserialize;
use tracing::debug;

use super::prompts::{NER_PROMPT_TEMPLATE, NER_SYSTEM};
use super::segment::{split_sentences, tokenize};
use super::{AnnotatedDocument, Annotator, EntitySpan};
use crate::errors::AnnotationError;
use crate::llm_client::prompts::{JSON_ONLY_SYSTEM, VERBATIM_INSTRUCTION};
use crate::llm_client::{LlmClient, LlmError};

#[derive(Debug, Deserialize)]
struct EntityResponse {
    #[serde(default)]
    entities: Vec<EntitySpan>,
}

pub struct LlmAnnotator {
    llm: LlmClient,
    system: String,
}

impl LlmAnnotator {
    pub fn new(llm: LlmClient) -> Self {
        Self {
            llm,
            system: format!("{NER_SYSTEM} {JSON_ONLY_SYSTEM} {VERBATIM_INSTRUCTION}"),
        }
    }
}

#[async_trait]
impl Annotator for LlmAnnotator {
    async fn annotate(&self, text: &str) -> Result<AnnotatedDocument, AnnotationError> {
        if text.trim().is_empty() {
            return Ok(AnnotatedDocument::default());
        }

        let prompt = NER_PROMPT_TEMPLATE.replace("{text}", text);
        let response: EntityResponse = self
            .llm
            .call_json(&prompt, &self.system)
            .await
            .map_err(annotation_error)?;

        Ok(build_document(text, response.entities))
    }
}

/// A reply that is not the entity schema is an annotator failure, not a transport one.
fn annotation_error(err: LlmError) -> AnnotationError {
    match err {
        LlmError::Parse(e) => AnnotationError::Backend(format!("malformed entity response: {e}")),
        other => AnnotationError::Llm(other),
    }
}

/// Combines model entities with local segmentation.
/// Entity text is replaced by the matching span of the source (case-insensitive);
/// entities with no such span are dropped.
fn build_document(text: &str, entities: Vec<EntitySpan>) -> AnnotatedDocument {
    let total = entities.len();

    let entities: Vec<EntitySpan> = entities
        .into_iter()
        .filter_map(|e| {
            let label = e.label.trim().to_uppercase();
            let needle = e.text.trim();
            if label.is_empty() || needle.is_empty() {
                return None;
            }
            let span = find_source_span(text, needle)?;
            Some(EntitySpan {
                label,
                text: span.to_string(),
            })
        })
        .collect();

    if entities.len() < total {
        debug!(
            "Dropped {} of {} entities not grounded in the source text",
            total - entities.len(),
            total
        );
    }

    AnnotatedDocument {
        tokens: tokenize(text),
        sentences: split_sentences(text),
        entities,
    }
}

/// First span of `text` equal to `needle`, exactly or ignoring case.
fn find_source_span<'a>(text: &'a str, needle: &str) -> Option<&'a str> {
    if let Some(start) = text.find(needle) {
        return Some(&text[start..start + needle.len()]);
    }

    let needle_lower = needle.to_lowercase();
    text.char_indices().find_map(|(start, _)| {
        let window = text.get(start..start + needle.len())?;
        (window.to_lowercase() == needle_lower).then_some(window)
    })
}
