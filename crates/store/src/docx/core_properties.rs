//! docProps/core.xml generation

use crate::docx::namespaces;
use chrono::{DateTime, SecondsFormat, Utc};
use quick_xml::escape::escape;

/// Package-level properties shown by word processors under File > Info
#[derive(Debug, Clone, PartialEq)]
pub struct CoreProperties {
    pub title: Option<String>,
    pub subject: Option<String>,
    pub creator: String,
    pub created: DateTime<Utc>,
}

impl CoreProperties {
    pub fn new(creator: impl Into<String>, created: DateTime<Utc>) -> Self {
        Self {
            title: None,
            subject: None,
            creator: creator.into(),
            created,
        }
    }

    pub fn with_title(mut self, title: Option<String>) -> Self {
        self.title = title;
        self
    }

    pub fn with_subject(mut self, subject: Option<String>) -> Self {
        self.subject = subject;
        self
    }

    /// Generate XML content for docProps/core.xml
    pub fn to_xml(&self) -> String {
        let timestamp = self.created.to_rfc3339_opts(SecondsFormat::Secs, true);
        let mut xml = String::new();
        xml.push_str(r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#);
        xml.push('\n');
        xml.push_str(&format!(
            r#"<cp:coreProperties xmlns:cp="{}" xmlns:dc="{}" xmlns:dcterms="{}" xmlns:xsi="{}">"#,
            namespaces::CP,
            namespaces::DC,
            namespaces::DCTERMS,
            namespaces::XSI,
        ));

        if let Some(ref title) = self.title {
            xml.push_str(&format!("<dc:title>{}</dc:title>", escape(title.as_str())));
        }
        if let Some(ref subject) = self.subject {
            xml.push_str(&format!("<dc:subject>{}</dc:subject>", escape(subject.as_str())));
        }
        xml.push_str(&format!("<dc:creator>{}</dc:creator>", escape(self.creator.as_str())));
        xml.push_str(&format!(
            "<cp:lastModifiedBy>{}</cp:lastModifiedBy>",
            escape(self.creator.as_str())
        ));
        xml.push_str(&format!(
            r#"<dcterms:created xsi:type="dcterms:W3CDTF">{}</dcterms:created>"#,
            timestamp
        ));
        xml.push_str(&format!(
            r#"<dcterms:modified xsi:type="dcterms:W3CDTF">{}</dcterms:modified>"#,
            timestamp
        ));
        xml.push_str("</cp:coreProperties>");
        xml
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_core_properties_xml() {
        let created = Utc.with_ymd_and_hms(2024, 1, 1, 9, 30, 0).unwrap();
        let xml = CoreProperties::new("Will-Me", created)
            .with_title(Some("Last Will & Testament".into()))
            .to_xml();

        assert!(xml.contains("<dc:title>Last Will &amp; Testament</dc:title>"));
        assert!(xml.contains("<dc:creator>Will-Me</dc:creator>"));
        assert!(xml.contains(">2024-01-01T09:30:00Z</dcterms:created>"));
        assert!(!xml.contains("<dc:subject>"));
    }
}
