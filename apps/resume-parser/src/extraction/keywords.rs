//! Keyword-list extractors: skills (token vocabulary), education and experience
//! (sentence keyword scans).

use std::collections::{BTreeSet, HashSet};

use once_cell::sync::Lazy;

use crate::annotator::AnnotatedDocument;

/// Closed skills vocabulary, compared against lowercase token text.
/// Multi-word entries can never equal a single token and so never match.
pub const SKILLS: &[&str] = &[
    "python",
    "java",
    "c++",
    "javascript",
    "html",
    "css",
    "sql",
    "react",
    "angular",
    "vue",
    "node",
    "django",
    "flask",
    "aws",
    "docker",
    "kubernetes",
    "git",
    "machine learning",
    "data science",
    "artificial intelligence",
    "ai",
    "ml",
    "database",
    "mongodb",
    "postgresql",
    "mysql",
];

pub const EDUCATION_KEYWORDS: &[&str] = &[
    "bachelor",
    "master",
    "phd",
    "b.tech",
    "m.tech",
    "degree",
    "university",
    "college",
    "school",
    "institute",
];

pub const EXPERIENCE_KEYWORDS: &[&str] = &[
    "experience",
    "work",
    "job",
    "company",
    "position",
    "role",
    "responsibility",
];

static SKILL_SET: Lazy<HashSet<&'static str>> = Lazy::new(|| SKILLS.iter().copied().collect());

/// Surface text of every token whose lowercase form is in the skills vocabulary.
pub fn extract_skills(doc: &AnnotatedDocument) -> BTreeSet<String> {
    doc.tokens
        .iter()
        .filter(|t| SKILL_SET.contains(t.lower.as_str()))
        .map(|t| t.text.clone())
        .collect()
}

pub fn extract_education(doc: &AnnotatedDocument) -> BTreeSet<String> {
    sentences_with_keywords(doc, EDUCATION_KEYWORDS)
}

pub fn extract_experience(doc: &AnnotatedDocument) -> BTreeSet<String> {
    sentences_with_keywords(doc, EXPERIENCE_KEYWORDS)
}

/// Trimmed text of every sentence containing at least one keyword as a
/// case-insensitive substring. A sentence is added once however many keywords hit.
fn sentences_with_keywords(doc: &AnnotatedDocument, keywords: &[&str]) -> BTreeSet<String> {
    doc.sentences
        .iter()
        .filter(|s| {
            let lower = s.text.to_lowercase();
            keywords.iter().any(|k| lower.contains(k))
        })
        .map(|s| s.text.trim().to_string())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::annotator::segment::{split_sentences, tokenize};

    fn annotate(text: &str) -> AnnotatedDocument {
        AnnotatedDocument {
            tokens: tokenize(text),
            sentences: split_sentences(text),
            entities: vec![],
        }
    }

    #[test]
    fn test_skills_match_vocabulary_case_insensitively() {
        let doc = annotate("Skills: Python, Docker, Kubernetes and C++. Also Rust.");
        let skills = extract_skills(&doc);
        let expected: BTreeSet<String> = ["C++", "Docker", "Kubernetes", "Python"]
            .iter()
            .map(|s| s.to_string())
            .collect();
        assert_eq!(skills, expected);
    }

    #[test]
    fn test_skills_deduplicate_repeated_tokens() {
        let doc = annotate("python python python SQL SQL");
        let skills = extract_skills(&doc);
        assert_eq!(skills.len(), 2);
        assert!(skills.contains("python"));
        assert!(skills.contains("SQL"));
    }

    #[test]
    fn test_multi_word_skills_never_match_single_tokens() {
        let doc = annotate("Machine Learning and Data Science");
        assert!(extract_skills(&doc).is_empty());
    }

    #[test]
    fn test_skills_ignore_substrings() {
        // "javascript" must not yield "java"; "gitlab" must not yield "git".
        let doc = annotate("JavaScript on GitLab");
        let skills = extract_skills(&doc);
        assert_eq!(skills.len(), 1);
        assert!(skills.contains("JavaScript"));
    }

    #[test]
    fn test_education_includes_degree_sentence() {
        let sentence = "I have a Bachelor of Science degree from State University.";
        let doc = annotate(&format!("Jane Doe\n\n{sentence} I enjoy hiking."));
        let education = extract_education(&doc);
        assert!(education.contains(sentence));
        assert_eq!(education.len(), 1);
    }

    #[test]
    fn test_education_deduplicates_repeated_sentences() {
        let doc = annotate("MIT University\n\nMIT University\n\nmit university");
        let education = extract_education(&doc);
        assert_eq!(education.len(), 2);
    }

    #[test]
    fn test_experience_keyword_scan() {
        let doc = annotate(
            "Senior role at Acme.\nWorked on payments.\nHobbies: chess.\nCompany: Globex",
        );
        let experience = extract_experience(&doc);
        let expected: BTreeSet<String> = [
            "Company: Globex",
            "Senior role at Acme.",
            "Worked on payments.",
        ]
        .iter()
        .map(|s| s.to_string())
        .collect();
        assert_eq!(experience, expected);
    }

    #[test]
    fn test_keyword_scans_empty_without_matches() {
        let doc = annotate("Hobbies: chess, hiking.");
        assert!(extract_education(&doc).is_empty());
        assert!(extract_experience(&doc).is_empty());
    }

    #[test]
    fn test_sentence_text_is_trimmed() {
        let doc = AnnotatedDocument {
            sentences: vec![crate::annotator::Sentence {
                text: "  PhD in Physics  ".to_string(),
            }],
            ..Default::default()
        };
        let education = extract_education(&doc);
        assert!(education.contains("PhD in Physics"));
    }
}
