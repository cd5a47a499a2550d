//! Document root - ordered paragraphs plus the styles they reference

use crate::error::Result;
use crate::{Paragraph, StyleRegistry};
use serde::{Deserialize, Serialize};

/// Document-level metadata written into the package properties
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DocumentMetadata {
    pub title: Option<String>,
    pub subject: Option<String>,
}

/// A complete document ready to be serialized
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Document {
    pub metadata: DocumentMetadata,
    body: Vec<Paragraph>,
    styles: StyleRegistry,
}

impl Document {
    /// Create an empty document with the built-in styles
    pub fn new() -> Self {
        Self {
            metadata: DocumentMetadata::default(),
            body: Vec::new(),
            styles: StyleRegistry::builtin(),
        }
    }

    /// Create a document from a list of paragraphs
    pub fn with_body(body: Vec<Paragraph>) -> Self {
        Self {
            body,
            ..Self::new()
        }
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.metadata.title = Some(title.into());
        self
    }

    pub fn push(&mut self, paragraph: Paragraph) {
        self.body.push(paragraph);
    }

    pub fn paragraphs(&self) -> &[Paragraph] {
        &self.body
    }

    pub fn paragraph_count(&self) -> usize {
        self.body.len()
    }

    pub fn style_registry(&self) -> &StyleRegistry {
        &self.styles
    }

    /// Split the body into pages at every forced page break.
    ///
    /// Only explicit breaks are considered; natural pagination depends on the
    /// consuming word processor.
    pub fn pages(&self) -> Vec<&[Paragraph]> {
        let mut pages = Vec::new();
        let mut start = 0;
        for (index, para) in self.body.iter().enumerate() {
            if para.page_break_before() && index > start {
                pages.push(&self.body[start..index]);
                start = index;
            }
        }
        if start < self.body.len() {
            pages.push(&self.body[start..]);
        }
        pages
    }

    /// Plain text of the whole document, one line per paragraph
    pub fn plain_text(&self) -> String {
        self.body
            .iter()
            .map(Paragraph::text)
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// Check that every paragraph references a known paragraph style
    pub fn validate(&self) -> Result<()> {
        for para in &self.body {
            if let Some(style_id) = &para.paragraph_style_id {
                self.styles.require_paragraph_style(style_id)?;
            }
        }
        Ok(())
    }
}

impl Default for Document {
    fn default() -> Self {
        Self::new()
    }
}
