//! Error types for document model operations

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum DocModelError {
    #[error("Unknown style: {0}")]
    UnknownStyle(String),

    #[error("Style {style} is a {actual} style, expected {expected}")]
    StyleTypeMismatch {
        style: String,
        expected: &'static str,
        actual: &'static str,
    },
}

pub type Result<T> = std::result::Result<T, DocModelError>;
