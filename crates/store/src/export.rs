//! Export step: Document -> named binary artifact

use crate::docx::{export_docx_bytes, DocxResult, DOCX_MIME_TYPE};
use chrono::{DateTime, Utc};
use doc_model::{CharacterProperties, Document};
use serde::{Deserialize, Serialize};

/// Options applied when serializing a document
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExportOptions {
    /// Author written into the package properties
    pub creator: String,
    /// Creation timestamp; `None` means "now"
    pub created: Option<DateTime<Utc>>,
    /// Document default font family
    pub font_family: String,
    /// Document default font size in points
    pub font_size: f32,
}

impl Default for ExportOptions {
    fn default() -> Self {
        Self {
            creator: "Will-Me".to_string(),
            created: None,
            font_family: "Arial".to_string(),
            font_size: 12.0,
        }
    }
}

impl ExportOptions {
    pub fn with_created(mut self, created: DateTime<Utc>) -> Self {
        self.created = Some(created);
        self
    }

    pub(crate) fn created_at(&self) -> DateTime<Utc> {
        self.created.unwrap_or_else(Utc::now)
    }

    pub(crate) fn default_run_properties(&self) -> CharacterProperties {
        CharacterProperties {
            font_family: Some(self.font_family.clone()),
            font_size: Some(self.font_size),
            ..Default::default()
        }
    }
}

/// A named binary blob ready to be handed to a save target
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportArtifact {
    pub file_name: String,
    pub mime_type: &'static str,
    pub bytes: Vec<u8>,
}

impl ExportArtifact {
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }
}

/// Serialize a document into a DOCX artifact.
///
/// The document is consumed: each generate action builds a fresh one.
pub fn export_blob(
    document: Document,
    file_name: impl Into<String>,
    options: &ExportOptions,
) -> DocxResult<ExportArtifact> {
    let file_name = file_name.into();
    let bytes = export_docx_bytes(&document, options)?;
    tracing::debug!(
        "Exported {} ({} paragraphs, {} bytes)",
        file_name,
        document.paragraph_count(),
        bytes.len()
    );
    Ok(ExportArtifact {
        file_name,
        mime_type: DOCX_MIME_TYPE,
        bytes,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::docx::read_paragraphs;
    use chrono::TimeZone;
    use doc_model::{Paragraph, Run};

    #[test]
    fn test_export_blob() {
        let doc = Document::with_body(vec![Paragraph::with_runs(vec![Run::new("Hello")])]);
        let artifact = export_blob(doc, "Hello.docx", &ExportOptions::default()).unwrap();

        assert_eq!(artifact.file_name, "Hello.docx");
        assert_eq!(artifact.mime_type, DOCX_MIME_TYPE);
        assert!(!artifact.is_empty());
        assert_eq!(read_paragraphs(&artifact.bytes).unwrap()[0].text, "Hello");
    }

    #[test]
    fn test_fixed_timestamp_gives_identical_bytes() {
        let created = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
        let options = ExportOptions::default().with_created(created);
        let build = || Document::with_body(vec![Paragraph::with_runs(vec![Run::new("same")])]);

        let a = export_blob(build(), "a.docx", &options).unwrap();
        let b = export_blob(build(), "a.docx", &options).unwrap();
        assert_eq!(a.bytes, b.bytes);
    }

    #[test]
    fn test_default_run_properties() {
        let props = ExportOptions::default().default_run_properties();
        assert_eq!(props.font_family.as_deref(), Some("Arial"));
        assert_eq!(props.font_size, Some(12.0));
    }
}
