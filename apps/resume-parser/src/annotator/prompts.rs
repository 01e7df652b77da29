// Entity annotation prompt templates.

pub const NER_SYSTEM: &str = "\
You are a named-entity recognizer for resumes and CVs. \
Label entities with OntoNotes labels: PERSON, ORG, GPE, LOC, DATE, NORP, FAC, PRODUCT, WORK_OF_ART.";

pub const NER_PROMPT_TEMPLATE: &str = r#"List every named entity in the following text, in the order they first appear.

INPUT TEXT:
{text}

OUTPUT SCHEMA (return exactly this structure):
{
  "entities": [
    {"label": "PERSON" | "ORG" | "GPE" | "LOC" | "DATE" | "NORP" | "FAC" | "PRODUCT" | "WORK_OF_ART", "text": "string"}
  ]
}

Return {"entities": []} if the text contains no entities."#;
