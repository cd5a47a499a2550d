//! DOCX Writer Infrastructure
//!
//! Creates ZIP archives with correct DOCX structure.

use crate::docx::content_types::{create_default_content_types, ContentTypes};
use crate::docx::core_properties::CoreProperties;
use crate::docx::document_writer::DocumentWriter;
use crate::docx::error::DocxResult;
use crate::docx::parts;
use crate::docx::relationships::{create_document_rels, create_root_rels, Relationships};
use crate::docx::styles_writer::StylesWriter;
use doc_model::{CharacterProperties, Document};
use std::io::{Seek, Write};
use zip::write::SimpleFileOptions;
use zip::ZipWriter;

/// Main DOCX writer
pub struct DocxWriter<W: Write + Seek> {
    zip: ZipWriter<W>,
    content_types: ContentTypes,
    root_rels: Relationships,
    doc_rels: Relationships,
}

impl<W: Write + Seek> DocxWriter<W> {
    /// Create a new DOCX writer
    pub fn new(writer: W) -> Self {
        Self {
            zip: ZipWriter::new(writer),
            content_types: create_default_content_types(),
            root_rels: create_root_rels(),
            doc_rels: create_document_rels(),
        }
    }

    /// Write a complete DOCX package and hand back the underlying writer
    pub fn write(
        mut self,
        document: &Document,
        defaults: &CharacterProperties,
        properties: &CoreProperties,
    ) -> DocxResult<W> {
        document.validate()?;

        let doc_xml = DocumentWriter::new().write(document)?;
        self.write_file(parts::DOCUMENT, &doc_xml)?;

        let styles_xml = StylesWriter::new(defaults.clone()).write(document)?;
        self.write_file(parts::STYLES, &styles_xml)?;

        self.write_file(parts::SETTINGS, &generate_settings_xml())?;
        self.write_file(parts::CORE, &properties.to_xml())?;

        let root_rels_xml = self.root_rels.to_xml();
        self.write_file(parts::ROOT_RELS, &root_rels_xml)?;

        let doc_rels_xml = self.doc_rels.to_xml();
        self.write_file(parts::DOCUMENT_RELS, &doc_rels_xml)?;

        // [Content_Types].xml last
        let content_types_xml = self.content_types.to_xml();
        self.write_file(parts::CONTENT_TYPES, &content_types_xml)?;

        Ok(self.zip.finish()?)
    }

    /// Write a file to the ZIP archive
    fn write_file(&mut self, path: &str, content: &str) -> DocxResult<()> {
        // Fixed entry timestamps keep the package bytes reproducible
        let options = SimpleFileOptions::default()
            .compression_method(zip::CompressionMethod::Deflated)
            .last_modified_time(zip::DateTime::default());

        self.zip.start_file(path, options)?;
        self.zip.write_all(content.as_bytes())?;

        Ok(())
    }
}

/// Generate a minimal settings.xml
pub fn generate_settings_xml() -> String {
    r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<w:settings xmlns:w="http://schemas.openxmlformats.org/wordprocessingml/2006/main">
    <w:defaultTabStop w:val="720"/>
    <w:compat>
        <w:compatSetting w:name="compatibilityMode" w:uri="http://schemas.microsoft.com/office/word" w:val="15"/>
    </w:compat>
</w:settings>"#
        .to_string()
}
