//! Style definitions: style ids, property bags and the built-in registry
//!
//! Generated documents only reference a handful of built-in paragraph styles
//! ("Normal" plus the heading levels), but the property bags are shared with
//! direct formatting on paragraphs and runs.

use crate::error::{DocModelError, Result};
use serde::{Deserialize, Serialize};

// =============================================================================
// Style Identifiers
// =============================================================================

/// Identifier of a style (e.g. "Normal", "Heading1")
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct StyleId(pub String);

impl StyleId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for StyleId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<String> for StyleId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl std::fmt::Display for StyleId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

// =============================================================================
// Style Types
// =============================================================================

/// The type of style
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum StyleType {
    /// Paragraph style - applied to entire paragraphs
    Paragraph,
    /// Character style - applied to text runs
    Character,
}

impl StyleType {
    pub fn as_str(&self) -> &'static str {
        match self {
            StyleType::Paragraph => "paragraph",
            StyleType::Character => "character",
        }
    }
}

/// Text alignment options
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Alignment {
    #[default]
    Left,
    Center,
    Right,
    Justify,
}

/// Heading levels available to structured templates
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum HeadingLevel {
    Heading1,
    Heading2,
    Heading3,
}

impl HeadingLevel {
    /// The built-in paragraph style backing this level
    pub fn style_id(&self) -> StyleId {
        match self {
            HeadingLevel::Heading1 => StyleId::new("Heading1"),
            HeadingLevel::Heading2 => StyleId::new("Heading2"),
            HeadingLevel::Heading3 => StyleId::new("Heading3"),
        }
    }

    /// Zero-based outline level written into the style
    pub fn outline_level(&self) -> u8 {
        match self {
            HeadingLevel::Heading1 => 0,
            HeadingLevel::Heading2 => 1,
            HeadingLevel::Heading3 => 2,
        }
    }

    fn display_name(&self) -> &'static str {
        match self {
            HeadingLevel::Heading1 => "heading 1",
            HeadingLevel::Heading2 => "heading 2",
            HeadingLevel::Heading3 => "heading 3",
        }
    }

    fn font_size(&self) -> f32 {
        match self {
            HeadingLevel::Heading1 => 16.0,
            HeadingLevel::Heading2 => 13.0,
            HeadingLevel::Heading3 => 12.0,
        }
    }

    pub fn all() -> [HeadingLevel; 3] {
        [HeadingLevel::Heading1, HeadingLevel::Heading2, HeadingLevel::Heading3]
    }
}

// =============================================================================
// Property Bags
// =============================================================================

/// Character-level formatting
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CharacterProperties {
    /// Font family name
    pub font_family: Option<String>,
    /// Font size in points
    pub font_size: Option<f32>,
    /// Bold formatting
    pub bold: Option<bool>,
    /// Italic formatting
    pub italic: Option<bool>,
    /// Underline formatting
    pub underline: Option<bool>,
    /// Text color (hex, with or without leading '#')
    pub color: Option<String>,
    /// All caps
    pub all_caps: Option<bool>,
}

impl CharacterProperties {
    /// Create new empty character properties
    pub fn new() -> Self {
        Self::default()
    }

    /// Merge another set of properties on top of this one
    /// Properties from `other` override properties from `self` when present
    pub fn merge(&self, other: &CharacterProperties) -> CharacterProperties {
        CharacterProperties {
            font_family: other.font_family.clone().or_else(|| self.font_family.clone()),
            font_size: other.font_size.or(self.font_size),
            bold: other.bold.or(self.bold),
            italic: other.italic.or(self.italic),
            underline: other.underline.or(self.underline),
            color: other.color.clone().or_else(|| self.color.clone()),
            all_caps: other.all_caps.or(self.all_caps),
        }
    }

    /// Check if all properties are None
    pub fn is_empty(&self) -> bool {
        self.font_family.is_none()
            && self.font_size.is_none()
            && self.bold.is_none()
            && self.italic.is_none()
            && self.underline.is_none()
            && self.color.is_none()
            && self.all_caps.is_none()
    }
}

/// Paragraph-level formatting
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ParagraphProperties {
    /// Text alignment
    pub alignment: Option<Alignment>,
    /// Space before paragraph in points
    pub space_before: Option<f32>,
    /// Space after paragraph in points
    pub space_after: Option<f32>,
    /// Keep with next paragraph
    pub keep_with_next: Option<bool>,
    /// Start this paragraph on a new page
    pub page_break_before: Option<bool>,
    /// Outline level (0 = top level heading)
    pub outline_level: Option<u8>,
}

impl ParagraphProperties {
    pub fn new() -> Self {
        Self::default()
    }

    /// Merge another set of properties on top of this one
    pub fn merge(&self, other: &ParagraphProperties) -> ParagraphProperties {
        ParagraphProperties {
            alignment: other.alignment.or(self.alignment),
            space_before: other.space_before.or(self.space_before),
            space_after: other.space_after.or(self.space_after),
            keep_with_next: other.keep_with_next.or(self.keep_with_next),
            page_break_before: other.page_break_before.or(self.page_break_before),
            outline_level: other.outline_level.or(self.outline_level),
        }
    }

    /// Check if all properties are None
    pub fn is_empty(&self) -> bool {
        self.alignment.is_none()
            && self.space_before.is_none()
            && self.space_after.is_none()
            && self.keep_with_next.is_none()
            && self.page_break_before.is_none()
            && self.outline_level.is_none()
    }
}

// =============================================================================
// Styles and Registry
// =============================================================================

/// A named style definition
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Style {
    pub id: StyleId,
    pub name: String,
    pub style_type: StyleType,
    pub based_on: Option<StyleId>,
    pub next_style: Option<StyleId>,
    /// Marks the default style of its type
    pub is_default: bool,
    /// UI priority (lower sorts first in style galleries)
    pub priority: u32,
    pub paragraph_props: ParagraphProperties,
    pub character_props: CharacterProperties,
}

impl Style {
    fn paragraph(id: &str, name: &str) -> Self {
        Self {
            id: StyleId::new(id),
            name: name.to_string(),
            style_type: StyleType::Paragraph,
            based_on: None,
            next_style: None,
            is_default: false,
            priority: 99,
            paragraph_props: ParagraphProperties::default(),
            character_props: CharacterProperties::default(),
        }
    }

    /// The built-in "Normal" paragraph style
    pub fn normal() -> Self {
        Self {
            is_default: true,
            priority: 0,
            ..Self::paragraph("Normal", "Normal")
        }
    }

    /// The built-in default character style Word expects in every package
    pub fn default_paragraph_font() -> Self {
        Self {
            id: StyleId::new("DefaultParagraphFont"),
            name: "Default Paragraph Font".to_string(),
            style_type: StyleType::Character,
            based_on: None,
            next_style: None,
            is_default: true,
            priority: 1,
            paragraph_props: ParagraphProperties::default(),
            character_props: CharacterProperties::default(),
        }
    }

    /// A built-in heading style
    pub fn heading(level: HeadingLevel) -> Self {
        let id = level.style_id();
        Self {
            based_on: Some(StyleId::new("Normal")),
            next_style: Some(StyleId::new("Normal")),
            priority: 9,
            paragraph_props: ParagraphProperties {
                space_before: Some(12.0),
                space_after: Some(6.0),
                keep_with_next: Some(true),
                outline_level: Some(level.outline_level()),
                ..Default::default()
            },
            character_props: CharacterProperties {
                font_size: Some(level.font_size()),
                bold: Some(true),
                ..Default::default()
            },
            ..Self::paragraph(id.as_str(), level.display_name())
        }
    }
}

/// Ordered collection of styles available to a document
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StyleRegistry {
    styles: Vec<Style>,
}

impl StyleRegistry {
    /// Registry holding "Normal", the default character style and the heading styles
    pub fn builtin() -> Self {
        let mut styles = vec![Style::normal(), Style::default_paragraph_font()];
        styles.extend(HeadingLevel::all().into_iter().map(Style::heading));
        Self { styles }
    }

    pub fn get(&self, id: &StyleId) -> Option<&Style> {
        self.styles.iter().find(|s| &s.id == id)
    }

    pub fn contains(&self, id: &StyleId) -> bool {
        self.get(id).is_some()
    }

    pub fn all_styles(&self) -> impl Iterator<Item = &Style> {
        self.styles.iter()
    }

    /// Look up a paragraph style, failing when it is missing or of the wrong type
    pub fn require_paragraph_style(&self, id: &StyleId) -> Result<&Style> {
        let style = self
            .get(id)
            .ok_or_else(|| DocModelError::UnknownStyle(id.to_string()))?;
        if style.style_type != StyleType::Paragraph {
            return Err(DocModelError::StyleTypeMismatch {
                style: id.to_string(),
                expected: StyleType::Paragraph.as_str(),
                actual: style.style_type.as_str(),
            });
        }
        Ok(style)
    }
}

impl Default for StyleRegistry {
    fn default() -> Self {
        Self::builtin()
    }
}
