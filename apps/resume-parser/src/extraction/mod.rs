// Field extractors: pure functions over the plain text and its annotation.
// Each one writes a single field and defaults to empty on no match.

pub mod contact;
pub mod keywords;

use tracing::debug;

use crate::annotator::AnnotatedDocument;
use crate::models::ExtractionResult;

pub use contact::{extract_email, extract_mobile_number, extract_name};
pub use keywords::{extract_education, extract_experience, extract_skills};

/// Runs all six extractors and assembles the record.
pub fn extract_fields(text: &str, doc: &AnnotatedDocument, page_count: usize) -> ExtractionResult {
    let result = ExtractionResult {
        name: extract_name(doc),
        email: extract_email(text),
        mobile_number: extract_mobile_number(text),
        skills: extract_skills(doc),
        education: extract_education(doc),
        experience: extract_experience(doc),
        no_of_pages: page_count,
    };

    debug!(
        "Extracted fields: name={}, email={}, mobile_number={}, skills={}, education={}, experience={}",
        !result.name.is_empty(),
        !result.email.is_empty(),
        !result.mobile_number.is_empty(),
        result.skills.len(),
        result.education.len(),
        result.experience.len()
    );

    result
}
