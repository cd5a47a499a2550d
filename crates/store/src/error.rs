//! Error types for storage operations

use thiserror::Error;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("DOCX error: {0}")]
    Docx(#[from] crate::docx::DocxError),

    #[error("Invalid file name: {0:?}")]
    InvalidFileName(String),

    #[error("File already exists: {0}")]
    AlreadyExists(String),

    #[error("Output directory not found: {0}")]
    DirectoryNotFound(String),

    #[error("Invalid setting {key}: {reason}")]
    InvalidSetting { key: String, reason: String },
}

pub type Result<T> = std::result::Result<T, StoreError>;
