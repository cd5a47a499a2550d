//! Wizard error types

use crate::wizard::WizardStep;
use templates::{DocumentType, ValidationReport};
use thiserror::Error;

/// Errors raised by wizard transitions and generation
#[derive(Debug, Error)]
pub enum WizardError {
    /// Operation not available in the current step
    #[error("Not available in step '{}'", .0.name())]
    WrongStep(WizardStep),

    /// Template does not belong to the active document type
    #[error("Template {template} is not a {expected} template")]
    TemplateTypeMismatch {
        template: String,
        expected: DocumentType,
    },

    /// Field name not declared by the active template
    #[error("Template {template} has no field {field}")]
    UnknownField { template: String, field: String },

    /// Submission blocked by field errors
    #[error("{} field(s) need attention", .0.len())]
    Invalid(ValidationReport),

    /// Serialization failure
    #[error("Export failed: {0}")]
    Export(#[from] store::DocxError),

    /// Save target failure
    #[error("Save failed: {0}")]
    Save(#[from] store::StoreError),
}

/// Result type for wizard operations
pub type WizardResult<T> = std::result::Result<T, WizardError>;
