use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

/// Flattened plain text of one document plus its derived page count.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractedText {
    pub text: String,
    /// Always ≥ 1.
    pub page_count: usize,
}

/// The record produced by one extraction call.
///
/// String fields are empty when nothing matched; set fields are empty sets.
/// Sets are ordered so that two runs over the same document serialise identically.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtractionResult {
    pub name: String,
    pub email: String,
    pub mobile_number: String,
    pub skills: BTreeSet<String>,
    pub education: BTreeSet<String>,
    pub experience: BTreeSet<String>,
    pub no_of_pages: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extraction_result_serializes_with_record_field_names() {
        let result = ExtractionResult {
            name: "Jane Doe".to_string(),
            email: "jane.doe@example.com".to_string(),
            mobile_number: "+1 555 123 4567".to_string(),
            skills: ["Python".to_string(), "SQL".to_string()].into_iter().collect(),
            education: BTreeSet::new(),
            experience: BTreeSet::new(),
            no_of_pages: 2,
        };

        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(json["name"], "Jane Doe");
        assert_eq!(json["mobile_number"], "+1 555 123 4567");
        assert_eq!(json["skills"], serde_json::json!(["Python", "SQL"]));
        assert_eq!(json["education"], serde_json::json!([]));
        assert_eq!(json["no_of_pages"], 2);
    }

    #[test]
    fn test_default_is_empty_record() {
        let result = ExtractionResult::default();
        assert!(result.name.is_empty());
        assert!(result.email.is_empty());
        assert!(result.mobile_number.is_empty());
        assert!(result.skills.is_empty());
        assert_eq!(result.no_of_pages, 0);
    }
}
