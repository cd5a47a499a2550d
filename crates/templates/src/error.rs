//! Error types for template operations

use crate::validation::ValidationReport;
use thiserror::Error;

/// Errors that can occur while preparing data for a template
#[derive(Debug, Error)]
pub enum TemplateError {
    /// Field data could not be parsed as JSON
    #[error("JSON parse error: {0}")]
    JsonParse(#[from] serde_json::Error),

    /// Field data was valid JSON but not an object of field values
    #[error("Invalid field data: {0}")]
    InvalidData(String),

    /// A document type name that is not registered
    #[error("Unknown document type: {0}")]
    UnknownDocumentType(String),

    /// A template id that is not registered (strict lookups only)
    #[error("Unknown template: {0}")]
    UnknownTemplate(String),

    /// Data did not satisfy the template's schema
    #[error("{} field(s) failed validation", .0.len())]
    Invalid(ValidationReport),
}

/// Result type for template operations
pub type Result<T> = std::result::Result<T, TemplateError>;
