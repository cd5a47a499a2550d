//! Styles.xml writer
//!
//! Generates styles.xml from the document's style registry.

use crate::docx::document_writer::{alignment_value, write_run_properties};
use crate::docx::error::DocxResult;
use crate::docx::namespaces;
use doc_model::{CharacterProperties, Document, ParagraphProperties, Style, StyleType};
use quick_xml::escape::escape;

/// Writer for styles.xml
pub struct StylesWriter {
    /// Document-wide default run properties (font, size)
    defaults: CharacterProperties,
}

impl StylesWriter {
    /// Create a styles writer with the given document defaults
    pub fn new(defaults: CharacterProperties) -> Self {
        Self { defaults }
    }

    /// Generate styles.xml content
    pub fn write(&self, document: &Document) -> DocxResult<String> {
        let mut xml = String::new();

        xml.push_str(r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#);
        xml.push('\n');
        xml.push_str(&format!(
            r#"<w:styles xmlns:w="{}" xmlns:r="{}">"#,
            namespaces::W,
            namespaces::R,
        ));

        self.write_doc_defaults(&mut xml);

        for style in document.style_registry().all_styles() {
            self.write_style(&mut xml, style);
        }

        xml.push_str("</w:styles>");
        Ok(xml)
    }

    /// Write document defaults
    fn write_doc_defaults(&self, xml: &mut String) {
        xml.push_str("<w:docDefaults>");

        xml.push_str("<w:rPrDefault>");
        write_run_properties(xml, &self.defaults);
        xml.push_str("</w:rPrDefault>");

        xml.push_str("<w:pPrDefault>");
        xml.push_str("<w:pPr>");
        xml.push_str(r#"<w:spacing w:after="0" w:line="240" w:lineRule="auto"/>"#);
        xml.push_str("</w:pPr>");
        xml.push_str("</w:pPrDefault>");

        xml.push_str("</w:docDefaults>");
    }

    /// Write a single style definition
    fn write_style(&self, xml: &mut String, style: &Style) {
        xml.push_str(&format!(
            r#"<w:style w:type="{}" w:styleId="{}""#,
            style.style_type.as_str(),
            escape(style.id.as_str())
        ));
        if style.is_default {
            xml.push_str(r#" w:default="1""#);
        }
        xml.push('>');

        xml.push_str(&format!(r#"<w:name w:val="{}"/>"#, escape(style.name.as_str())));

        if let Some(ref based_on) = style.based_on {
            xml.push_str(&format!(r#"<w:basedOn w:val="{}"/>"#, escape(based_on.as_str())));
        }

        if let Some(ref next) = style.next_style {
            xml.push_str(&format!(r#"<w:next w:val="{}"/>"#, escape(next.as_str())));
        }

        xml.push_str(&format!(r#"<w:uiPriority w:val="{}"/>"#, style.priority));
        xml.push_str("<w:qFormat/>");

        if style.style_type == StyleType::Paragraph && !style.paragraph_props.is_empty() {
            write_style_paragraph_properties(xml, &style.paragraph_props);
        }

        write_run_properties(xml, &style.character_props);

        xml.push_str("</w:style>");
    }
}

fn write_style_paragraph_properties(xml: &mut String, props: &ParagraphProperties) {
    xml.push_str("<w:pPr>");

    if props.keep_with_next == Some(true) {
        xml.push_str("<w:keepNext/>");
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
}

#[cfg(test)]
mod tests {
    use super::*;

    fn arial() -> CharacterProperties {
        CharacterProperties {
            font_family: Some("Arial".into()),
            font_size: Some(12.0),
            ..Default::default()
        }
    }

    #[test]
    fn test_styles_writer_basic() {
        let xml = StylesWriter::new(arial()).write(&Document::new()).unwrap();

        assert!(xml.contains("<w:styles"));
        assert!(xml.contains("<w:docDefaults>"));
        assert!(xml.contains(r#"w:ascii="Arial""#));
        assert!(xml.contains(r#"<w:sz w:val="24"/>"#));
    }

    #[test]
    fn test_builtin_styles_written() {
        let xml = StylesWriter::new(arial()).write(&Document::new()).unwrap();

        assert!(xml.contains(r#"<w:style w:type="paragraph" w:styleId="Normal" w:default="1">"#));
        assert!(xml.contains(r#"w:styleId="Heading1""#));
        assert!(xml.contains(r#"<w:name w:val="heading 2"/>"#));
        assert!(xml.contains(r#"<w:outlineLvl w:val="1"/>"#));
        assert!(xml.contains(r#"<w:basedOn w:val="Normal"/>"#));
        assert!(xml.contains(
            r#"<w:style w:type="character" w:styleId="DefaultParagraphFont" w:default="1">"#
        ));
    }
}
