//! Formatting helpers for narrative templates
//!
//! Every run uses the same fixed font; variable runs (text taken from the
//! form) are bold so they stand out when the document is reviewed.
//!
//! This is the public helper set for writing templates. [`label_value`] and
//! [`bullet`] cover list-style layouts that neither bundled template uses.

use doc_model::{Alignment, CharacterProperties, Paragraph, Run};

pub const FONT_FAMILY: &str = "Arial";
/// Body text size in points
pub const BODY_SIZE: f32 = 12.0;
/// Title page size in points
pub const TITLE_SIZE: f32 = 48.0;

fn base_properties(size: f32) -> CharacterProperties {
    CharacterProperties {
        font_family: Some(FONT_FAMILY.to_string()),
        font_size: Some(size),
        ..Default::default()
    }
}

/// Literal text run
pub fn text(s: impl Into<String>) -> Run {
    Run::with_direct_formatting(s, base_properties(BODY_SIZE))
}

/// Literal text run at a custom size
pub fn text_sized(s: impl Into<String>, size: f32) -> Run {
    Run::with_direct_formatting(s, base_properties(size))
}

/// Variable run (bold)
pub fn var(s: impl Into<String>) -> Run {
    Run::with_direct_formatting(
        s,
        CharacterProperties {
            bold: Some(true),
            ..base_properties(BODY_SIZE)
        },
    )
}

pub fn para(runs: Vec<Run>) -> Paragraph {
    Paragraph::with_runs(runs)
}

pub fn centered(runs: Vec<Run>) -> Paragraph {
    let mut paragraph = Paragraph::with_runs(runs);
    paragraph.set_alignment(Alignment::Center);
    paragraph
}

/// Empty spacer paragraph
pub fn blank() -> Paragraph {
    para(vec![text("")])
}

/// Title-only first page: three centered large lines
pub fn title_page(testator_name: &str) -> Vec<Paragraph> {
    vec![
        centered(vec![text_sized("LAST WILL AND TESTAMENT", TITLE_SIZE)]),
        centered(vec![text_sized("OF", TITLE_SIZE)]),
        centered(vec![text_sized(testator_name.to_uppercase(), TITLE_SIZE)]),
    ]
}

/// Empty paragraph that starts a new page
pub fn page_break() -> Paragraph {
    let mut paragraph = blank();
    paragraph.set_page_break_before(true);
    paragraph
}

/// `Label: value` with the value optionally bold
pub fn label_value(label: &str, value: &str, is_var: bool) -> Paragraph {
    let value = if is_var { var(value) } else { text(value) };
    para(vec![text(format!("{}: ", label)), value])
}

/// Single-run paragraph
pub fn bullet(s: &str, is_var: bool) -> Paragraph {
    para(vec![if is_var { var(s) } else { text(s) }])
}
