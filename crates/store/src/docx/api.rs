//! Public API for DOCX export and read-back
//!
//! This module provides the main entry points for working with DOCX files.

use crate::docx::core_properties::CoreProperties;
use crate::docx::error::DocxResult;
use crate::docx::reader::{DocxReader, PackagePart, ParsedParagraph};
use crate::docx::writer::DocxWriter;
use crate::export::ExportOptions;
use doc_model::Document;
use std::io::Cursor;

/// Export a Document to an in-memory byte vector
///
/// # Example
///
/// ```ignore
/// use store::{export_docx_bytes, ExportOptions};
/// use doc_model::Document;
///
/// let bytes = export_docx_bytes(&Document::new(), &ExportOptions::default())?;
/// std::fs::write("output.docx", bytes)?;
/// ```
pub fn export_docx_bytes(document: &Document, options: &ExportOptions) -> DocxResult<Vec<u8>> {
    let writer = DocxWriter::new(Cursor::new(Vec::new()));
    let cursor = writer.write(
        document,
        &options.default_run_properties(),
        &core_properties(document, options),
    )?;
    Ok(cursor.into_inner())
}

/// Read the paragraphs of a DOCX package held in memory
pub fn read_paragraphs(bytes: &[u8]) -> DocxResult<Vec<ParsedParagraph>> {
    DocxReader::new(Cursor::new(bytes))?.paragraphs()
}

/// List the parts of a DOCX package held in memory
pub fn read_parts(bytes: &[u8]) -> DocxResult<Vec<PackagePart>> {
    DocxReader::new(Cursor::new(bytes))?.parts()
}

fn core_properties(document: &Document, options: &ExportOptions) -> CoreProperties {
    CoreProperties::new(options.creator.clone(), options.created_at())
        .with_title(document.metadata.title.clone())
        .with_subject(document.metadata.subject.clone())
}
