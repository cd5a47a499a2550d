//! Paragraph - a block of content containing runs

use crate::{Alignment, HeadingLevel, ParagraphProperties, Run, StyleId};
use serde::{Deserialize, Serialize};

/// A paragraph containing text runs
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Paragraph {
    runs: Vec<Run>,
    /// Paragraph style reference
    #[serde(default)]
    pub paragraph_style_id: Option<StyleId>,
    /// Direct formatting overrides
    #[serde(default)]
    pub direct_formatting: ParagraphProperties,
}

impl Paragraph {
    /// Create a new empty paragraph in the "Normal" style
    pub fn new() -> Self {
        Self {
            runs: Vec::new(),
            paragraph_style_id: Some(StyleId::new("Normal")),
            direct_formatting: ParagraphProperties::default(),
        }
    }

    /// Create a paragraph from a list of runs
    pub fn with_runs(runs: Vec<Run>) -> Self {
        Self {
            runs,
            ..Self::new()
        }
    }

    /// Create a paragraph with a paragraph style ID
    pub fn with_paragraph_style(style_id: impl Into<StyleId>) -> Self {
        Self {
            paragraph_style_id: Some(style_id.into()),
            ..Self::new()
        }
    }

    /// Create a heading paragraph holding a single plain run
    pub fn heading(level: HeadingLevel, text: impl Into<String>) -> Self {
        let mut para = Self::with_paragraph_style(level.style_id());
        para.add_run(Run::new(text));
        para
    }

    /// Apply direct formatting to this paragraph
    pub fn apply_direct_formatting(&mut self, formatting: &ParagraphProperties) {
        self.direct_formatting = self.direct_formatting.merge(formatting);
    }

    pub fn set_alignment(&mut self, alignment: Alignment) {
        self.direct_formatting.alignment = Some(alignment);
    }

    /// Force this paragraph to start a new page
    pub fn set_page_break_before(&mut self, value: bool) {
        self.direct_formatting.page_break_before = Some(value);
    }

    pub fn page_break_before(&self) -> bool {
        self.direct_formatting.page_break_before == Some(true)
    }

    pub fn alignment(&self) -> Alignment {
        self.direct_formatting.alignment.unwrap_or_default()
    }

    pub fn add_run(&mut self, run: Run) {
        self.runs.push(run);
    }

    pub fn runs(&self) -> &[Run] {
        &self.runs
    }

    /// Concatenated text of all runs
    pub fn text(&self) -> String {
        self.runs.iter().map(|r| r.text.as_str()).collect()
    }

    /// Check whether the paragraph contains no visible text
    pub fn is_blank(&self) -> bool {
        self.runs.iter().all(Run::is_empty)
    }

    pub fn is_heading(&self, level: HeadingLevel) -> bool {
        self.paragraph_style_id.as_ref() == Some(&level.style_id())
    }
}

impl Default for Paragraph {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paragraph_text_concatenates_runs() {
        let para = Paragraph::with_runs(vec![Run::new("I, "), Run::new("Jane"), Run::new(".")]);
        assert_eq!(para.text(), "I, Jane.");
        assert!(!para.is_blank());
        assert_eq!(para.paragraph_style_id, Some(StyleId::new("Normal")));
    }

    #[test]
    fn test_heading_paragraph() {
        let para = Paragraph::heading(HeadingLevel::Heading2, "Limitations");
        assert!(para.is_heading(HeadingLevel::Heading2));
        assert!(!para.is_heading(HeadingLevel::Heading1));
        assert_eq!(para.text(), "Limitations");
    }

    #[test]
    fn test_page_break_flag() {
        let mut para = Paragraph::with_runs(vec![Run::new("")]);
        assert!(!para.page_break_before());
        assert!(para.is_blank());
        para.set_page_break_before(true);
        assert!(para.page_break_before());
    }
}
