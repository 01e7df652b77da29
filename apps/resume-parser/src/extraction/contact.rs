//! Name, email and phone extractors. First match wins; no scoring.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::annotator::{AnnotatedDocument, PERSON_LABEL};

static EMAIL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}").unwrap());

// Deliberately loose: also matches dates, IDs and other long digit runs.
static PHONE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[+(]?[1-9][0-9 .\-()]{8,}[0-9]").unwrap());

/// Text of the first `PERSON` entity, or an empty string.
pub fn extract_name(doc: &AnnotatedDocument) -> String {
    doc.entities
        .iter()
        .find(|e| e.label == PERSON_LABEL)
        .map(|e| e.text.clone())
        .unwrap_or_default()
}

pub fn extract_email(text: &str) -> String {
    EMAIL_RE
        .find(text)
        .map(|m| m.as_str().to_string())
        .unwrap_or_default()
}

pub fn extract_mobile_number(text: &str) -> String {
    PHONE_RE
        .find(text)
        .map(|m| m.as_str().to_string())
        .unwrap_or_default()
}
