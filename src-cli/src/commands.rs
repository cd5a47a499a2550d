//! Non-interactive commands

use crate::state::AppState;
use anyhow::Context;
use serde::Serialize;
use std::path::Path;
use store::{
    export_blob, trigger_download_async, GeneratorSettings, PackagePart, ParsedParagraph,
    SavedArtifact, SettingsManager,
};
use templates::{DocumentType, FormData, InputKind, TemplateDescriptor, TemplateError, ValidationReport};

// =============================================================================
// DTOs
// =============================================================================

/// Template summary DTO for listing
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TemplateSummaryDto {
    pub id: String,
    pub document_type: DocumentType,
    pub name: String,
    pub field_count: usize,
}

impl From<&TemplateDescriptor> for TemplateSummaryDto {
    fn from(template: &TemplateDescriptor) -> Self {
        Self {
            id: template.id.to_string(),
            document_type: template.document_type,
            name: template.name.to_string(),
            field_count: template.fields.len(),
        }
    }
}

/// Field DTO for the `fields` command
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldDto {
    pub name: String,
    pub label: String,
    pub multiline: bool,
    pub required: bool,
}

// =============================================================================
// Commands
// =============================================================================

/// Templates in registration order, optionally filtered by type
pub fn list_templates(state: &AppState, filter: Option<DocumentType>) -> Vec<TemplateSummaryDto> {
    state
        .registry
        .list_templates()
        .iter()
        .filter(|t| filter.map_or(true, |f| t.document_type == f))
        .map(TemplateSummaryDto::from)
        .collect()
}

pub fn render_template_table(templates: &[TemplateSummaryDto]) -> String {
    let mut out = String::new();
    for template in templates {
        out.push_str(&format!(
            "{:<14} {:<5} {} ({} fields)\n",
            template.id,
            template.document_type.as_str(),
            template.name,
            template.field_count
        ));
    }
    out
}

/// Strict template lookup for commands that take an id
fn require_template<'a>(state: &'a AppState, id: &str) -> Result<&'a TemplateDescriptor, TemplateError> {
    state
        .registry
        .get(id)
        .ok_or_else(|| TemplateError::UnknownTemplate(id.to_string()))
}

pub fn describe_fields(state: &AppState, id: &str) -> anyhow::Result<Vec<FieldDto>> {
    let template = require_template(state, id)?;
    Ok(template
        .fields
        .iter()
        .map(|f| FieldDto {
            name: f.name.to_string(),
            label: f.label.trim_end_matches([' ', ':']).to_string(),
            multiline: f.input == InputKind::TextArea,
            required: f.required,
        })
        .collect())
}

pub fn render_field_table(fields: &[FieldDto]) -> String {
    let mut out = String::new();
    for field in fields {
        out.push_str(&format!(
            "{:<18} {:<9} {:<9} {}\n",
            field.name,
            if field.multiline { "multiline" } else { "text" },
            if field.required { "required" } else { "optional" },
            field.label
        ));
    }
    out
}

/// One line per failing field, using the field label
pub fn format_report(template: &TemplateDescriptor, report: &ValidationReport) -> String {
    report
        .errors()
        .iter()
        .map(|e| {
            let label = template
                .field(&e.field)
                .map(|f| f.label.trim_end_matches([' ', ':']))
                .unwrap_or(e.field.as_str());
            format!("  {} ({}): {}", label, e.field, e.message())
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Validate a JSON data file, render, export and save
pub async fn generate(state: &AppState, id: &str, data_path: &Path) -> anyhow::Result<SavedArtifact> {
    let template = require_template(state, id)?;

    let json = tokio::fs::read_to_string(data_path)
        .await
        .with_context(|| format!("Failed to read {}", data_path.display()))?;
    let data = FormData::from_json_str(template, &json)
        .with_context(|| format!("Failed to parse {}", data_path.display()))?;

    let (document, file_name) = match template.render_checked(&data) {
        Ok(rendered) => rendered,
        Err(TemplateError::Invalid(report)) => {
            anyhow::bail!(
                "{} field(s) failed validation:\n{}",
                report.len(),
                format_report(template, &report)
            );
        }
        Err(e) => return Err(e.into()),
    };

    let artifact = export_blob(document, file_name, &state.settings.export_options())
        .context("Failed to build document")?;
    let saved = trigger_download_async(artifact, &state.target())
        .await
        .context("Failed to save document")?;
    Ok(saved)
}

/// Paragraph listing of a generated document
pub async fn inspect(path: &Path) -> anyhow::Result<String> {
    let bytes = tokio::fs::read(path)
        .await
        .with_context(|| format!("Failed to read {}", path.display()))?;
    let paragraphs = store::read_paragraphs(&bytes)
        .with_context(|| format!("{} is not a readable .docx", path.display()))?;
    Ok(render_paragraphs(&paragraphs))
}

/// Part listing of a generated document
pub async fn inspect_parts(path: &Path) -> anyhow::Result<String> {
    let bytes = tokio::fs::read(path)
        .await
        .with_context(|| format!("Failed to read {}", path.display()))?;
    let parts = store::read_parts(&bytes)
        .with_context(|| format!("{} is not a readable .docx", path.display()))?;
    Ok(render_parts(&parts))
}

pub fn render_parts(parts: &[PackagePart]) -> String {
    let mut out = String::new();
    for part in parts {
        out.push_str(&format!(
            "{:<30} {:>8}  {}\n",
            part.name,
            part.size,
            part.content_type.as_deref().unwrap_or("-")
        ));
    }
    out
}

// =============================================================================
// Settings
// =============================================================================

pub async fn show_settings(path: &Path) -> anyhow::Result<GeneratorSettings> {
    let mut manager = SettingsManager::with_path(path.to_path_buf());
    Ok(manager.load().await?.clone())
}

/// Change one setting and write the file
pub async fn set_setting(path: &Path, key: &str, value: &str) -> anyhow::Result<GeneratorSettings> {
    let mut manager = SettingsManager::with_path(path.to_path_buf());
    let mut settings = manager.load().await?.clone();
    settings.set(key, value)?;
    manager
        .update(settings)
        .await
        .with_context(|| format!("Failed to write {}", path.display()))?;
    Ok(manager.get().clone())
}

pub async fn reset_settings(path: &Path) -> anyhow::Result<GeneratorSettings> {
    let mut manager = SettingsManager::with_path(path.to_path_buf());
    let settings = manager
        .reset()
        .await
        .with_context(|| format!("Failed to write {}", path.display()))?;
    Ok(settings.clone())
}

pub fn render_paragraphs(paragraphs: &[ParsedParagraph]) -> String {
    let mut out = String::new();
    for paragraph in paragraphs {
        if paragraph.page_break_before {
            out.push_str("---- page break ----\n");
        }
        let prefix = match paragraph.style_id.as_deref() {
            Some("Heading1") => "# ",
            Some("Heading2") => "## ",
            Some("Heading3") => "### ",
            _ if paragraph.centered => "    ",
            _ => "",
        };
        out.push_str(prefix);
        out.push_str(&paragraph.text);
        out.push('\n');
    }
    out
}
