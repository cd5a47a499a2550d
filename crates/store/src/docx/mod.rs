//! DOCX Export Module
//!
//! Serializes a [`doc_model::Document`] into a Microsoft Word DOCX package
//! (Office Open XML, ECMA-376) and reads generated packages back for
//! inspection.
//!
//! ## Structure
//!
//! A DOCX file is a ZIP archive containing XML files:
//! - `[Content_Types].xml` - Content type definitions
//! - `_rels/.rels` - Root relationships
//! - `docProps/core.xml` - Title, author and timestamps
//! - `word/document.xml` - Main document content
//! - `word/styles.xml` - Style definitions
//! - `word/settings.xml` - Compatibility settings
//! - `word/_rels/document.xml.rels` - Document relationships

mod api;
mod content_types;
mod core_properties;
mod document_writer;
mod error;
mod reader;
mod relationships;
mod styles_writer;
mod writer;

pub use api::{export_docx_bytes, read_paragraphs, read_parts};
pub use core_properties::CoreProperties;
pub use error::{DocxError, DocxResult};
pub use reader::{DocxReader, PackagePart, ParsedParagraph};
pub use writer::DocxWriter;

/// MIME type of a DOCX package
pub const DOCX_MIME_TYPE: &str =
    "application/vnd.openxmlformats-officedocument.wordprocessingml.document";

/// XML namespaces used in DOCX files
pub mod namespaces {
    /// Main WordprocessingML namespace
    pub const W: &str = "http://schemas.openxmlformats.org/wordprocessingml/2006/main";
    /// Relationships namespace
    pub const R: &str = "http://schemas.openxmlformats.org/officeDocument/2006/relationships";
    /// Package relationships namespace
    pub const PKG_REL: &str = "http://schemas.openxmlformats.org/package/2006/relationships";
    /// Content types namespace
    pub const CT: &str = "http://schemas.openxmlformats.org/package/2006/content-types";
    /// Core properties namespace
    pub const CP: &str = "http://schemas.openxmlformats.org/package/2006/metadata/core-properties";
    /// Dublin Core elements
    pub const DC: &str = "http://purl.org/dc/elements/1.1/";
    /// Dublin Core terms
    pub const DCTERMS: &str = "http://purl.org/dc/terms/";
    /// XML Schema instance
    pub const XSI: &str = "http://www.w3.org/2001/XMLSchema-instance";
}

/// Relationship types used in DOCX
pub mod relationship_types {
    pub const DOCUMENT: &str = "http://schemas.openxmlformats.org/officeDocument/2006/relationships/officeDocument";
    pub const CORE_PROPERTIES: &str = "http://schemas.openxmlformats.org/package/2006/relationships/metadata/core-properties";
    pub const STYLES: &str = "http://schemas.openxmlformats.org/officeDocument/2006/relationships/styles";
    pub const SETTINGS: &str = "http://schemas.openxmlformats.org/officeDocument/2006/relationships/settings";
}

/// Content types for DOCX parts
pub mod content_type_values {
    pub const DOCUMENT: &str = "application/vnd.openxmlformats-officedocument.wordprocessingml.document.main+xml";
    pub const STYLES: &str = "application/vnd.openxmlformats-officedocument.wordprocessingml.styles+xml";
    pub const SETTINGS: &str = "application/vnd.openxmlformats-officedocument.wordprocessingml.settings+xml";
    pub const CORE_PROPERTIES: &str = "application/vnd.openxmlformats-package.core-properties+xml";
    pub const RELATIONSHIPS: &str = "application/vnd.openxmlformats-package.relationships+xml";
    pub const XML: &str = "application/xml";
}

/// Part names inside the package
pub mod parts {
    pub const CONTENT_TYPES: &str = "[Content_Types].xml";
    pub const ROOT_RELS: &str = "_rels/.rels";
    pub const CORE: &str = "docProps/core.xml";
    pub const DOCUMENT: &str = "word/document.xml";
    pub const STYLES: &str = "word/styles.xml";
    pub const SETTINGS: &str = "word/settings.xml";
    pub const DOCUMENT_RELS: &str = "word/_rels/document.xml.rels";
}
