//! DOCX text extraction — reads the OOXML parts straight out of the zip package.
//!
//! Text order: headers, main document, footers. Only run text (`w:t`) is visible;
//! tabs and breaks become whitespace and every paragraph ends with a blank line,
//! so paragraph boundaries survive sentence segmentation.

use std::io::{Cursor, Read, Seek};

use quick_xml::events::Event;
use quick_xml::Reader;
use zip::ZipArchive;

use crate::errors::DocumentReadError;

const DOCUMENT_PART: &str = "word/document.xml";
const HEADER_PREFIX: &str = "word/header";
const FOOTER_PREFIX: &str = "word/footer";
const PARAGRAPH_END: &str = "\n\n";

/// Extracts all visible text from DOCX bytes.
pub fn extract_text(bytes: &[u8]) -> Result<String, DocumentReadError> {
    let mut archive = ZipArchive::new(Cursor::new(bytes))?;

    let part_names: Vec<String> = archive.file_names().map(String::from).collect();
    if !part_names.iter().any(|n| n == DOCUMENT_PART) {
        return Err(DocumentReadError::MissingPart(DOCUMENT_PART.to_string()));
    }

    let headers = parts_with_prefix(&part_names, HEADER_PREFIX);
    let footers = parts_with_prefix(&part_names, FOOTER_PREFIX);

    let mut sections = Vec::with_capacity(headers.len() + footers.len() + 1);
    for name in &headers {
        sections.push(read_part(&mut archive, name)?);
    }
    sections.push(read_part(&mut archive, DOCUMENT_PART)?);
    for name in &footers {
        sections.push(read_part(&mut archive, name)?);
    }

    Ok(sections
        .into_iter()
        .filter(|s| !s.trim().is_empty())
        .collect::<Vec<_>>()
        .join("\n"))
}

/// Part names under `prefix`, ordered by their numeric suffix (`header2` before `header10`).
fn parts_with_prefix<'a>(part_names: &'a [String], prefix: &str) -> Vec<&'a str> {
    let mut parts: Vec<&str> = part_names
        .iter()
        .map(String::as_str)
        .filter(|n| n.starts_with(prefix) && n.ends_with(".xml"))
        .collect();
    parts.sort_unstable_by_key(|name| (part_number(name, prefix), *name));
    parts
}

fn part_number(name: &str, prefix: &str) -> Option<u32> {
    name.strip_prefix(prefix)?.strip_suffix(".xml")?.parse().ok()
}

fn read_part<R: Read + Seek>(
    archive: &mut ZipArchive<R>,
    name: &str,
) -> Result<String, DocumentReadError> {
    let mut xml = String::new();
    archive.by_name(name)?.read_to_string(&mut xml)?;
    xml_to_text(&xml)
}

/// Flattens one WordprocessingML part to plain text.
fn xml_to_text(xml: &str) -> Result<String, DocumentReadError> {
    let mut reader = Reader::from_str(xml);
    let mut text = String::new();
    let mut in_run_text = false;
    // `w:tab` inside `w:tabs` is a tab-stop definition, not a tab character.
    let mut in_tab_stops = false;

    loop {
        match reader.read_event()? {
            Event::Start(e) => match e.local_name().as_ref() {
                b"t" => in_run_text = true,
                b"tabs" => in_tab_stops = true,
                _ => {}
            },
            Event::End(e) => match e.local_name().as_ref() {
                b"t" => in_run_text = false,
                b"tabs" => in_tab_stops = false,
                b"p" => text.push_str(PARAGRAPH_END),
                _ => {}
            },
            Event::Empty(e) => match e.local_name().as_ref() {
                b"tab" if !in_tab_stops => text.push('\t'),
                b"br" | b"cr" => text.push('\n'),
                b"p" => text.push_str(PARAGRAPH_END),
                _ => {}
            },
            Event::Text(e) if in_run_text => {
                text.push_str(&e.decode().map_err(quick_xml::Error::from)?);
            }
            Event::GeneralRef(e) if in_run_text => {
                let name = e.decode().map_err(quick_xml::Error::from)?;
                if let Some(c) = resolve_reference(&name) {
                    text.push(c);
                }
            }
            Event::Eof => break,
            _ => {}
        }
    }

    Ok(text)
}

/// Resolves the five predefined XML entities and numeric character references.
fn resolve_reference(name: &str) -> Option<char> {
    if let Some(code) = name.strip_prefix('#') {
        let value = match code.strip_prefix(|c: char| c == 'x' || c == 'X') {
            Some(hex) => u32::from_str_radix(hex, 16).ok()?,
            None => code.parse().ok()?,
        };
        return char::from_u32(value);
    }

    match name {
        "amp" => Some('&'),
        "lt" => Some('<'),
        "gt" => Some('>'),
        "quot" => Some('"'),
        "apos" => Some('\''),
        _ => None,
    }
}
