//! PDF text extraction — one trait, two interchangeable backends.
//!
//! Both backends return the whole document as one string with pages separated by
//! form feeds, so the loader derives the page count the same way for either.

use tracing::{debug, warn};

use super::PAGE_SEPARATOR;
use crate::errors::DocumentReadError;

/// A PDF text extraction library, swapped at startup via `PDF_BACKEND`.
pub trait PdfBackend: Send + Sync {
    /// Short identifier used in config and logs.
    fn name(&self) -> &'static str;

    /// Flattens the document to plain text with `PAGE_SEPARATOR` between pages.
    fn extract_text(&self, bytes: &[u8]) -> Result<String, DocumentReadError>;
}

/// Page-by-page extraction via `pdf-extract`.
/// Every page is followed by a separator, so the separator count equals the page count.
pub struct PdfExtractBackend;

impl PdfBackend for PdfExtractBackend {
    fn name(&self) -> &'static str {
        "pdf-extract"
    }

    fn extract_text(&self, bytes: &[u8]) -> Result<String, DocumentReadError> {
        let pages = pdf_extract::extract_text_from_mem_by_pages(bytes)
            .map_err(|e| DocumentReadError::Pdf(e.to_string()))?;
        debug!("pdf-extract: document has {} pages", pages.len());

        let mut text = String::new();
        for page_text in &pages {
            text.push_str(page_text);
            text.push(PAGE_SEPARATOR);
        }

        Ok(text)
    }
}

/// Page-by-page extraction via `lopdf`.
/// Every page is followed by a separator, so the separator count equals the page count.
pub struct LopdfBackend;

impl PdfBackend for LopdfBackend {
    fn name(&self) -> &'static str {
        "lopdf"
    }

    fn extract_text(&self, bytes: &[u8]) -> Result<String, DocumentReadError> {
        let document = lopdf::Document::load_mem(bytes)?;
        let pages = document.get_pages();
        debug!("lopdf: document has {} pages", pages.len());

        let mut text = String::new();
        for page_number in pages.keys() {
            match document.extract_text(&[*page_number]) {
                Ok(page_text) => text.push_str(&page_text),
                Err(e) => warn!("lopdf: failed to extract text from page {}: {}", page_number, e),
            }
            text.push(PAGE_SEPARATOR);
        }

        Ok(text)
    }
}

/// Resolves a backend by its config name.
pub fn backend_by_name(name: &str) -> Option<Box<dyn PdfBackend>> {
    match name.trim().to_lowercase().as_str() {
        "pdf-extract" | "pdf_extract" => Some(Box::new(PdfExtractBackend)),
        "lopdf" => Some(Box::new(LopdfBackend)),
        _ => None,
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use lopdf::content::{Content, Operation};
    use lopdf::{dictionary, Document, Object, Stream};

    use super::*;
    use crate::loader::count_pages;

    /// Builds a PDF with one Courier text line per page.
    pub(crate) fn pdf_bytes(pages: &[&str]) -> Vec<u8> {
        let mut doc = Document::with_version("1.5");
        let pages_id = doc.new_object_id();
        let font_id = doc.add_object(dictionary! {
            "Type" => "Font",
            "Subtype" => "Type1",
            "BaseFont" => "Courier",
        });
        let resources_id = doc.add_object(dictionary! {
            "Font" => dictionary! {
                "F1" => font_id,
            },
        });

        let mut kids = Vec::new();
        for line in pages {
            let content = Content {
                operations: vec![
                    Operation::new("BT", vec![]),
                    Operation::new("Tf", vec!["F1".into(), 12.into()]),
                    Operation::new("Td", vec![72.into(), 720.into()]),
                    Operation::new("Tj", vec![Object::string_literal(*line)]),
                    Operation::new("ET", vec![]),
                ],
            };
            let content_id = doc.add_object(Stream::new(dictionary! {}, content.encode().unwrap()));
            let page_id = doc.add_object(dictionary! {
                "Type" => "Page",
                "Parent" => pages_id,
                "Contents" => content_id,
                "Resources" => resources_id,
                "MediaBox" => vec![0.into(), 0.into(), 612.into(), 792.into()],
            });
            kids.push(page_id.into());
        }

        let count = kids.len() as i64;
        doc.objects.insert(
            pages_id,
            Object::Dictionary(dictionary! {
                "Type" => "Pages",
                "Kids" => kids,
                "Count" => count,
            }),
        );
        let catalog_id = doc.add_object(dictionary! {
            "Type" => "Catalog",
            "Pages" => pages_id,
        });
        doc.trailer.set("Root", catalog_id);

        let mut bytes = Vec::new();
        doc.save_to(&mut bytes).unwrap();
        bytes
    }

    #[test]
    fn test_lopdf_page_count_matches_pages() {
        let bytes = pdf_bytes(&["Jane Doe", "Experience", "Education"]);
        let text = LopdfBackend.extract_text(&bytes).unwrap();
        assert_eq!(count_pages(&text), 3);
    }

    #[test]
    fn test_lopdf_single_page() {
        let bytes = pdf_bytes(&["Jane Doe"]);
        let text = LopdfBackend.extract_text(&bytes).unwrap();
        assert_eq!(count_pages(&text), 1);
    }

    #[test]
    fn test_lopdf_rejects_garbage() {
        let err = LopdfBackend.extract_text(b"not a pdf").unwrap_err();
        assert!(matches!(err, DocumentReadError::Lopdf(_)));
    }

    #[test]
    fn test_pdf_extract_page_count_matches_pages() {
        let bytes = pdf_bytes(&["Jane Doe", "Experience", "Education"]);
        let text = PdfExtractBackend.extract_text(&bytes).unwrap();
        assert_eq!(count_pages(&text), 3);

        let pages: Vec<&str> = text.split(PAGE_SEPARATOR).map(str::trim).collect();
        assert_eq!(pages, vec!["Jane Doe", "Experience", "Education", ""]);
    }

    #[test]
    fn test_pdf_extract_single_page() {
        let bytes = pdf_bytes(&["Jane Doe"]);
        let text = PdfExtractBackend.extract_text(&bytes).unwrap();
        assert_eq!(count_pages(&text), 1);
        assert!(text.contains("Jane Doe"));
    }

    #[test]
    fn test_pdf_extract_rejects_garbage() {
        let err = PdfExtractBackend.extract_text(b"not a pdf").unwrap_err();
        assert!(matches!(err, DocumentReadError::Pdf(_)));
    }

    #[test]
    fn test_backend_by_name() {
        assert_eq!(backend_by_name("lopdf").unwrap().name(), "lopdf");
        assert_eq!(backend_by_name("PDF-Extract").unwrap().name(), "pdf-extract");
        assert!(backend_by_name("poppler").is_none());
    }
}
