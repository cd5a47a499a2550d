//! Template descriptors and the metadata shared by every template

use crate::data::FormData;
use crate::error::TemplateError;
use crate::render::RenderContext;
use crate::validation::{Schema, ValidationReport};
use crate::{poa, will};
use doc_model::Document;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Kind of legal document a template produces
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DocumentType {
    Will,
    Poa,
}

impl DocumentType {
    /// All document types in the order they are offered
    pub fn all() -> &'static [DocumentType] {
        &[DocumentType::Will, DocumentType::Poa]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            DocumentType::Will => "will",
            DocumentType::Poa => "poa",
        }
    }

    /// Short label for the type picker
    pub fn label(&self) -> &'static str {
        match self {
            DocumentType::Will => "Will",
            DocumentType::Poa => "Power of Attorney",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            DocumentType::Will => "Create a Last Will & Testament",
            DocumentType::Poa => "Property / Personal Care",
        }
    }
}

impl fmt::Display for DocumentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DocumentType {
    type Err = TemplateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "will" => Ok(DocumentType::Will),
            "poa" => Ok(DocumentType::Poa),
            _ => Err(TemplateError::UnknownDocumentType(s.to_string())),
        }
    }
}

/// How a field is entered
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InputKind {
    /// Single-line text
    Text,
    /// Multi-line text
    TextArea,
}

/// One input field of a template form
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldDescriptor {
    pub name: &'static str,
    pub label: &'static str,
    pub input: InputKind,
    pub required: bool,
}

impl FieldDescriptor {
    pub const fn text(name: &'static str, label: &'static str) -> Self {
        Self {
            name,
            label,
            input: InputKind::Text,
            required: true,
        }
    }

    pub const fn text_area(name: &'static str, label: &'static str) -> Self {
        Self {
            name,
            label,
            input: InputKind::TextArea,
            required: true,
        }
    }

    pub const fn optional(mut self) -> Self {
        self.required = false;
        self
    }
}

/// Per-template behavior
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TemplateKind {
    /// Narrative will with a title page
    WillSample,
    /// Heading-structured property power of attorney
    PoaProperty,
}

/// A registered document template
#[derive(Debug, Clone)]
pub struct TemplateDescriptor {
    pub id: &'static str,
    pub document_type: DocumentType,
    pub name: &'static str,
    pub fields: Vec<FieldDescriptor>,
    pub schema: Schema,
    kind: TemplateKind,
}

impl TemplateDescriptor {
    pub(crate) fn new(
        id: &'static str,
        document_type: DocumentType,
        name: &'static str,
        kind: TemplateKind,
        fields: Vec<FieldDescriptor>,
        schema: Schema,
    ) -> Self {
        Self {
            id,
            document_type,
            name,
            fields,
            schema,
            kind,
        }
    }

    pub fn kind(&self) -> TemplateKind {
        self.kind
    }

    /// Look up a field by name
    pub fn field(&self, name: &str) -> Option<&FieldDescriptor> {
        self.fields.iter().find(|f| f.name == name)
    }

    /// Form data with every field present and empty
    pub fn empty_data(&self) -> FormData {
        FormData::for_fields(&self.fields)
    }

    pub fn validate(&self, data: &FormData) -> ValidationReport {
        self.schema.validate(data)
    }

    /// Build the document for this template.
    ///
    /// Total over data that passed validation; blank optional fields fall
    /// back to fixed literals.
    pub fn render(&self, data: &FormData) -> Document {
        let ctx = RenderContext::new(self, data);
        match self.kind {
            TemplateKind::WillSample => will::render(&ctx),
            TemplateKind::PoaProperty => poa::render(&ctx),
        }
    }

    /// Suggested name of the generated file
    pub fn file_name(&self, data: &FormData) -> String {
        let ctx = RenderContext::new(self, data);
        match self.kind {
            TemplateKind::WillSample => will::file_name(&ctx),
            TemplateKind::PoaProperty => poa::file_name(&ctx),
        }
    }

    /// Validate, then render and name the document
    pub fn render_checked(&self, data: &FormData) -> crate::Result<(Document, String)> {
        let report = self.validate(data);
        if !report.is_valid() {
            return Err(TemplateError::Invalid(report));
        }
        Ok((self.render(data), self.file_name(data)))
    }
}
