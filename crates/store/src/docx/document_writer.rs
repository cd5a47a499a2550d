//! Document.xml writer
//!
//! Converts a [`Document`] to DOCX document.xml format.

use crate::docx::error::DocxResult;
use crate::docx::namespaces;
use doc_model::{Alignment, CharacterProperties, Document, Paragraph, ParagraphProperties, Run};
use quick_xml::escape::escape;
use std::borrow::Cow;

/// A4 page size and one-inch margins, in twentieths of a point
const PAGE_WIDTH_TWIPS: u32 = 11906;
const PAGE_HEIGHT_TWIPS: u32 = 16838;
const PAGE_MARGIN_TWIPS: u32 = 1440;

/// Writer for document.xml
pub struct DocumentWriter;

impl DocumentWriter {
    pub fn new() -> Self {
        Self
    }

    /// Generate document.xml content
    pub fn write(&self, document: &Document) -> DocxResult<String> {
        let mut xml = String::new();

        xml.push_str(r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#);
        xml.push('\n');
        xml.push_str(&format!(
            r#"<w:document xmlns:w="{}" xmlns:r="{}">"#,
            namespaces::W,
            namespaces::R,
        ));
        xml.push_str("<w:body>");

        for para in document.paragraphs() {
            self.write_paragraph(&mut xml, para)?;
        }

        self.write_section_properties(&mut xml);
        xml.push_str("</w:body>");
        xml.push_str("</w:document>");

        Ok(xml)
    }

    /// Write a paragraph element
    fn write_paragraph(&self, xml: &mut String, para: &Paragraph) -> DocxResult<()> {
        xml.push_str("<w:p>");
        self.write_paragraph_properties(xml, para)?;
        for run in para.runs() {
            self.write_run(xml, run)?;
        }
        xml.push_str("</w:p>");
        Ok(())
    }

    /// Write paragraph properties
    fn write_paragraph_properties(&self, xml: &mut String, para: &Paragraph) -> DocxResult<()> {
        let props: &ParagraphProperties = &para.direct_formatting;
        let style_id = para.paragraph_style_id.as_ref();

        if style_id.is_none() && props.is_empty() {
            return Ok(());
        }

        xml.push_str("<w:pPr>");

        if let Some(style) = style_id {
            xml.push_str(&format!(r#"<w:pStyle w:val="{}"/>"#, escape(style.as_str())));
        }

        if props.keep_with_next == Some(true) {
            xml.push_str("<w:keepNext/>");
        }

        if props.page_break_before == Some(true) {
            xml.push_str("<w:pageBreakBefore/>");
        }

        if props.space_before.is_some() || props.space_after.is_some() {
            xml.push_str("<w:spacing");
            if let Some(before) = props.space_before {
                xml.push_str(&format!(r#" w:before="{}""#, (before * 20.0) as i32));
            }
            if let Some(after) = props.space_after {
                xml.push_str(&format!(r#" w:after="{}""#, (after * 20.0) as i32));
            }
            xml.push_str("/>");
        }

        if let Some(alignment) = props.alignment {
            xml.push_str(&format!(r#"<w:jc w:val="{}"/>"#, alignment_value(alignment)));
        }

        if let Some(level) = props.outline_level {
            xml.push_str(&format!(r#"<w:outlineLvl w:val="{}"/>"#, level));
        }

        xml.push_str("</w:pPr>");
        Ok(())
    }

    /// Write a run element
    fn write_run(&self, xml: &mut String, run: &Run) -> DocxResult<()> {
        xml.push_str("<w:r>");
        write_run_properties(xml, &run.direct_formatting);

        let text = sanitize_text(&run.text);
        if text.is_empty() {
            // Keep empty runs so blank spacer lines carry the run formatting
            xml.push_str("<w:t></w:t>");
        }

        let lines: Vec<&str> = text.split('\n').collect();
        for (line_index, line) in lines.iter().enumerate() {
            let segments: Vec<&str> = line.split('\t').collect();
            for (i, segment) in segments.iter().enumerate() {
                if !segment.is_empty() {
                    if segment.starts_with(' ') || segment.ends_with(' ') {
                        xml.push_str(r#"<w:t xml:space="preserve">"#);
                    } else {
                        xml.push_str("<w:t>");
                    }
                    xml.push_str(&escape(*segment));
                    xml.push_str("</w:t>");
                }
                if i + 1 < segments.len() {
                    xml.push_str("<w:tab/>");
                }
            }
            if line_index + 1 < lines.len() {
                xml.push_str("<w:br/>");
            }
        }

        xml.push_str("</w:r>");
        Ok(())
    }

    fn write_section_properties(&self, xml: &mut String) {
        xml.push_str("<w:sectPr>");
        xml.push_str(&format!(
            r#"<w:pgSz w:w="{}" w:h="{}"/>"#,
            PAGE_WIDTH_TWIPS, PAGE_HEIGHT_TWIPS
        ));
        xml.push_str(&format!(
            r#"<w:pgMar w:top="{m}" w:right="{m}" w:bottom="{m}" w:left="{m}" w:header="708" w:footer="708" w:gutter="0"/>"#,
            m = PAGE_MARGIN_TWIPS
        ));
        xml.push_str("</w:sectPr>");
    }
}

impl Default for DocumentWriter {
    fn default() -> Self {
        Self::new()
    }
}

/// Write run properties (shared with the styles writer)
pub(crate) fn write_run_properties(xml: &mut String, props: &CharacterProperties) {
    if props.is_empty() {
        return;
    }

    xml.push_str("<w:rPr>");

    if let Some(ref font) = props.font_family {
        let font = escape(font.as_str());
        xml.push_str(&format!(
            r#"<w:rFonts w:ascii="{f}" w:hAnsi="{f}" w:cs="{f}"/>"#,
            f = font
        ));
    }

    if let Some(bold) = props.bold {
        if bold {
            xml.push_str("<w:b/><w:bCs/>");
        } else {
            xml.push_str(r#"<w:b w:val="0"/>"#);
        }
    }

    if let Some(italic) = props.italic {
        if italic {
            xml.push_str("<w:i/><w:iCs/>");
        } else {
            xml.push_str(r#"<w:i w:val="0"/>"#);
        }
    }

    if props.all_caps == Some(true) {
        xml.push_str("<w:caps/>");
    }

    if let Some(ref color) = props.color {
        xml.push_str(&format!(
            r#"<w:color w:val="{}"/>"#,
            escape(color.trim_start_matches('#'))
        ));
    }

    // Font size in half-points
    if let Some(size) = props.font_size {
        let half_pts = (size * 2.0).round() as i32;
        xml.push_str(&format!(r#"<w:sz w:val="{}"/>"#, half_pts));
        xml.push_str(&format!(r#"<w:szCs w:val="{}"/>"#, half_pts));
    }

    if let Some(underline) = props.underline {
        let val = if underline { "single" } else { "none" };
        xml.push_str(&format!(r#"<w:u w:val="{}"/>"#, val));
    }

    xml.push_str("</w:rPr>");
}

pub(crate) fn alignment_value(alignment: Alignment) -> &'static str {
    match alignment {
        Alignment::Left => "left",
        Alignment::Center => "center",
        Alignment::Right => "right",
        Alignment::Justify => "both",
    }
}

/// Drop characters XML 1.0 cannot carry and normalize line endings.
///
/// Tabs and newlines survive; they are written as `w:tab` and `w:br`.
pub(crate) fn sanitize_text(text: &str) -> Cow<'_, str> {
    let is_allowed = |c: char| {
        matches!(c, '\t' | '\n') || (c >= ' ' && c != '\u{FFFE}' && c != '\u{FFFF}')
    };
    if text.chars().all(is_allowed) {
        return Cow::Borrowed(text);
    }
    Cow::Owned(text.replace("\r\n", "\n").chars().filter(|&c| is_allowed(c)).collect())
}
