//! Store - DOCX export, artifact saving and settings
//!
//! This crate turns a document model into a DOCX package, hands the
//! resulting artifact to a save target, and persists generator settings.

mod error;
mod export;
mod file_io;
mod settings;
pub mod docx;

pub use error::*;
pub use export::*;
pub use file_io::*;
pub use settings::*;

// Re-export DOCX functionality
pub use docx::{
    export_docx_bytes, read_paragraphs, read_parts, DocxError,
    DocxResult, PackagePart, ParsedParagraph, DOCX_MIME_TYPE,
};
