//! Text run - a contiguous span of text with consistent formatting

use crate::CharacterProperties;
use serde::{Deserialize, Serialize};

/// A text run - contiguous text with consistent formatting
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Run {
    /// The text content of this run
    pub text: String,
    /// Direct formatting applied to this run
    #[serde(default)]
    pub direct_formatting: CharacterProperties,
}

impl Run {
    /// Create a new unformatted run
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            direct_formatting: CharacterProperties::default(),
        }
    }

    /// Create a new run with direct formatting
    pub fn with_direct_formatting(text: impl Into<String>, formatting: CharacterProperties) -> Self {
        Self {
            text: text.into(),
            direct_formatting: formatting,
        }
    }

    /// Apply direct formatting on top of the existing formatting
    pub fn apply_direct_formatting(&mut self, formatting: &CharacterProperties) {
        self.direct_formatting = self.direct_formatting.merge(formatting);
    }

    pub fn is_bold(&self) -> bool {
        self.direct_formatting.bold == Some(true)
    }

    /// Get the length of the text in this run (in UTF-8 bytes)
    pub fn len(&self) -> usize {
        self.text.len()
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }
}
