//! ZIP archive reading and XML parsing utilities
//!
//! Only what is needed to read back generated packages: a part listing with
//! content types and a paragraph-level view of the main document part.

use crate::docx::content_types::ContentTypes;
use crate::docx::error::{DocxError, DocxResult};
use crate::docx::relationships::Relationships;
use crate::docx::{parts, relationship_types};
use quick_xml::events::{BytesStart, Event};
use quick_xml::Reader;
use std::io::{Read, Seek};
use zip::ZipArchive;

/// A wrapper around a ZIP archive for reading DOCX files
pub struct DocxReader<R: Read + Seek> {
    archive: ZipArchive<R>,
}

impl<R: Read + Seek> DocxReader<R> {
    /// Create a new DOCX reader from a source that implements Read + Seek
    pub fn new(reader: R) -> DocxResult<Self> {
        let archive = ZipArchive::new(reader)?;
        Ok(Self { archive })
    }

    /// Read a file from the archive as a string
    pub fn read_file_as_string(&mut self, path: &str) -> DocxResult<String> {
        let mut file = self.archive.by_name(path).map_err(|e| {
            if matches!(e, zip::result::ZipError::FileNotFound) {
                DocxError::MissingPart(path.to_string())
            } else {
                DocxError::from(e)
            }
        })?;

        let mut contents = String::new();
        file.read_to_string(&mut contents)?;
        Ok(contents)
    }

    /// Check if a file exists in the archive
    pub fn file_exists(&self, path: &str) -> bool {
        self.archive.file_names().any(|name| name == path)
    }

    /// Get a list of all files in the archive
    pub fn file_names(&self) -> Vec<&str> {
        self.archive.file_names().collect()
    }

    /// Path of the main document part, resolved through `_rels/.rels`
    pub fn main_document_path(&mut self) -> DocxResult<String> {
        if !self.file_exists(parts::ROOT_RELS) {
            return Ok(parts::DOCUMENT.to_string());
        }
        let rels = Relationships::parse(&self.read_file_as_string(parts::ROOT_RELS)?)?;
        Ok(rels
            .get_by_type(relationship_types::DOCUMENT)
            .map(|rel| rel.target.trim_start_matches('/').to_string())
            .unwrap_or_else(|| parts::DOCUMENT.to_string()))
    }

    /// Every part in archive order, with the content type the package declares for it
    pub fn parts(&mut self) -> DocxResult<Vec<PackagePart>> {
        let content_types = ContentTypes::parse(&self.read_file_as_string(parts::CONTENT_TYPES)?)?;
        let names: Vec<String> = self.file_names().into_iter().map(str::to_string).collect();

        let mut result = Vec::with_capacity(names.len());
        for name in names {
            let size = self.archive.by_name(&name)?.size();
            result.push(PackagePart {
                content_type: content_types.get_content_type(&name).cloned(),
                name,
                size,
            });
        }
        Ok(result)
    }

    /// Parse the main document part into paragraphs
    pub fn paragraphs(&mut self) -> DocxResult<Vec<ParsedParagraph>> {
        let path = self.main_document_path()?;
        if !self.file_exists(parts::CONTENT_TYPES) || !self.file_exists(&path) {
            return Err(DocxError::InvalidStructure(
                "package has no main document part".to_string(),
            ));
        }
        let xml = self.read_file_as_string(&path)?;
        parse_document_paragraphs(&xml)
    }
}

/// One entry of a package listing
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackagePart {
    pub name: String,
    /// `None` when `[Content_Types].xml` declares nothing for the part
    pub content_type: Option<String>,
    /// Uncompressed size in bytes
    pub size: u64,
}

/// A paragraph as read back from `word/document.xml`
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ParsedParagraph {
    /// Visible text; tabs and line breaks become `\t` and `\n`
    pub text: String,
    /// Value of `w:pStyle`, if any
    pub style_id: Option<String>,
    pub page_break_before: bool,
    pub centered: bool,
    /// True when at least one run with text is bold
    pub has_bold_run: bool,
}

/// Parse the paragraphs of a document.xml body
pub(crate) fn parse_document_paragraphs(xml: &str) -> DocxResult<Vec<ParsedParagraph>> {
    let mut reader = Reader::from_str(xml);
    reader.config_mut().trim_text(false);

    let mut paragraphs = Vec::new();
    let mut current: Option<ParsedParagraph> = None;
    let mut in_text = false;
    let mut run_bold = false;

    loop {
        match reader.read_event()? {
            Event::Start(ref e) => match e.local_name().as_ref() {
                b"p" => current = Some(ParsedParagraph::default()),
                b"r" => run_bold = false,
                b"t" => in_text = true,
                _ => handle_property(e, current.as_mut(), &mut run_bold),
            },
            Event::Empty(ref e) => match e.local_name().as_ref() {
                b"p" => paragraphs.push(ParsedParagraph::default()),
                b"tab" => push_text(current.as_mut(), "\t", false),
                b"br" => push_text(current.as_mut(), "\n", false),
                _ => handle_property(e, current.as_mut(), &mut run_bold),
            },
            Event::Text(ref t) if in_text => {
                let text = t.unescape()?;
                push_text(current.as_mut(), &text, run_bold);
            }
            Event::End(ref e) => match e.local_name().as_ref() {
                b"t" => in_text = false,
                b"p" => {
                    if let Some(para) = current.take() {
                        paragraphs.push(para);
                    }
                }
                _ => {}
            },
            Event::Eof => break,
            _ => {}
        }
    }

    Ok(paragraphs)
}

fn push_text(para: Option<&mut ParsedParagraph>, text: &str, bold: bool) {
    if let Some(para) = para {
        para.text.push_str(text);
        if bold && !text.is_empty() {
            para.has_bold_run = true;
        }
    }
}

fn handle_property(e: &BytesStart, para: Option<&mut ParsedParagraph>, run_bold: &mut bool) {
    let Some(para) = para else {
        return;
    };
    match e.local_name().as_ref() {
        b"pStyle" => para.style_id = XmlParser::get_w_attribute(e, "val"),
        b"pageBreakBefore" => {
            para.page_break_before = XmlParser::get_w_attribute(e, "val")
                .map(|v| XmlParser::parse_bool(&v))
                .unwrap_or(true);
        }
        b"jc" => para.centered = XmlParser::get_w_attribute(e, "val").as_deref() == Some("center"),
        b"b" => {
            *run_bold = XmlParser::get_w_attribute(e, "val")
                .map(|v| XmlParser::parse_bool(&v))
                .unwrap_or(true);
        }
        _ => {}
    }
}

/// XML reader utilities for parsing DOCX XML content
pub struct XmlParser;

impl XmlParser {
    /// Create a new XML reader from a string
    pub fn from_string(content: &str) -> Reader<&[u8]> {
        let mut reader = Reader::from_str(content);
        reader.config_mut().trim_text(true);
        reader
    }

    /// Get an attribute value from an event
    pub fn get_attribute(event: &BytesStart, name: &[u8]) -> Option<String> {
        event
            .attributes()
            .filter_map(|a| a.ok())
            .find(|a| a.key.as_ref() == name)
            .map(|a| String::from_utf8_lossy(&a.value).to_string())
    }

    /// Get a w: namespaced attribute (most common in DOCX)
    pub fn get_w_attribute(event: &BytesStart, name: &str) -> Option<String> {
        let key = format!("w:{}", name);
        Self::get_attribute(event, key.as_bytes())
            .or_else(|| Self::get_attribute(event, name.as_bytes()))
    }

    /// Parse a boolean value (0/1, true/false, on/off)
    pub fn parse_bool(value: &str) -> bool {
        matches!(value.to_lowercase().as_str(), "1" | "true" | "on" | "yes")
    }

    /// Check if an element name matches with optional namespace prefix
    pub fn matches_element(name: &[u8], expected: &str) -> bool {
        let name_str = std::str::from_utf8(name).unwrap_or("");
        name_str == expected || name_str.ends_with(&format!(":{}", expected))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_bool() {
        assert!(XmlParser::parse_bool("1"));
        assert!(XmlParser::parse_bool("true"));
        assert!(XmlParser::parse_bool("on"));
        assert!(!XmlParser::parse_bool("0"));
        assert!(!XmlParser::parse_bool("false"));
    }

    #[test]
    fn test_matches_element() {
        assert!(XmlParser::matches_element(b"p", "p"));
        assert!(XmlParser::matches_element(b"w:p", "p"));
        assert!(!XmlParser::matches_element(b"w:r", "p"));
    }

    fn package(entries: &[(&str, &str)]) -> Vec<u8> {
        use std::io::Write;
        let mut zip = zip::ZipWriter::new(std::io::Cursor::new(Vec::new()));
        for (name, content) in entries {
            zip.start_file(*name, zip::write::SimpleFileOptions::default())
                .unwrap();
            zip.write_all(content.as_bytes()).unwrap();
        }
        zip.finish().unwrap().into_inner()
    }

    const CONTENT_TYPES_XML: &str = r#"<Types xmlns="http://schemas.openxmlformats.org/package/2006/content-types"><Default Extension="xml" ContentType="application/xml"/><Override PartName="/word/main.xml" ContentType="application/vnd.openxmlformats-officedocument.wordprocessingml.document.main+xml"/></Types>"#;

    #[test]
    fn test_main_document_follows_root_rels() {
        let rels = format!(
            r#"<Relationships xmlns="http://schemas.openxmlformats.org/package/2006/relationships"><Relationship Id="rId1" Type="{}" Target="/word/main.xml"/></Relationships>"#,
            relationship_types::DOCUMENT
        );
        let bytes = package(&[
            (parts::CONTENT_TYPES, CONTENT_TYPES_XML),
            (parts::ROOT_RELS, rels.as_str()),
            ("word/main.xml", r#"<w:document><w:body><w:p><w:r><w:t>Moved</w:t></w:r></w:p></w:body></w:document>"#),
        ]);

        let mut reader = DocxReader::new(std::io::Cursor::new(bytes)).unwrap();
        assert_eq!(reader.main_document_path().unwrap(), "word/main.xml");
        let paragraphs = reader.paragraphs().unwrap();
        assert_eq!(paragraphs[0].text, "Moved");
    }

    #[test]
    fn test_parts_listing_uses_declared_content_types() {
        let bytes = package(&[
            (parts::CONTENT_TYPES, CONTENT_TYPES_XML),
            ("word/main.xml", "<w:document/>"),
            ("media/logo.png", "png"),
        ]);

        let mut reader = DocxReader::new(std::io::Cursor::new(bytes)).unwrap();
        let listing = reader.parts().unwrap();
        assert_eq!(listing.len(), 3);
        assert_eq!(listing[1].name, "word/main.xml");
        assert_eq!(
            listing[1].content_type.as_deref(),
            Some(crate::docx::content_type_values::DOCUMENT)
        );
        assert_eq!(listing[2].content_type, None);
        assert_eq!(listing[2].size, 3);
        // no root rels and no word/document.xml
        assert!(matches!(reader.paragraphs(), Err(DocxError::InvalidStructure(_))));
    }

    #[test]
    fn test_parse_document_paragraphs() {
        let xml = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<w:document xmlns:w="http://schemas.openxmlformats.org/wordprocessingml/2006/main"><w:body>
<w:p><w:pPr><w:jc w:val="center"/></w:pPr><w:r><w:t>OF</w:t></w:r></w:p>
<w:p><w:pPr><w:pageBreakBefore/></w:pPr><w:r><w:t></w:t></w:r></w:p>
<w:p><w:pPr><w:pStyle w:val="Heading2"/></w:pPr><w:r><w:t>Limitations</w:t></w:r></w:p>
<w:p><w:r><w:t xml:space="preserve">I, </w:t></w:r><w:r><w:rPr><w:b/></w:rPr><w:t>Jane &amp; Co</w:t></w:r><w:r><w:t>a</w:t><w:tab/><w:t>b</w:t><w:br/><w:t>c</w:t></w:r></w:p>
<w:p/>
</w:body></w:document>"#;

        let paragraphs = parse_document_paragraphs(xml).unwrap();
        assert_eq!(paragraphs.len(), 5);
        assert!(paragraphs[0].centered);
        assert_eq!(paragraphs[0].text, "OF");
        assert!(paragraphs[1].page_break_before);
        assert_eq!(paragraphs[2].style_id.as_deref(), Some("Heading2"));
        assert_eq!(paragraphs[3].text, "I, Jane & Coa\tb\nc");
        assert!(paragraphs[3].has_bold_run);
        assert!(!paragraphs[0].has_bold_run);
        assert_eq!(paragraphs[4], ParsedParagraph::default());
    }
}
