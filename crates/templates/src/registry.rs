//! Template registry

use crate::template::{DocumentType, TemplateDescriptor};
use crate::{poa, will};

/// Ordered, read-only collection of templates.
///
/// Always holds at least one template; the first registered template is
/// the fallback for unknown ids.
#[derive(Debug, Clone)]
pub struct Registry {
    templates: Vec<TemplateDescriptor>,
}

impl Registry {
    /// Registry with the bundled templates
    pub fn builtin() -> Self {
        Self {
            templates: vec![will::descriptor(), poa::descriptor()],
        }
    }

    /// All templates in registration order
    pub fn list_templates(&self) -> &[TemplateDescriptor] {
        &self.templates
    }

    fn first(&self) -> &TemplateDescriptor {
        &self.templates[0]
    }

    /// Strict lookup
    pub fn get(&self, id: &str) -> Option<&TemplateDescriptor> {
        self.templates.iter().find(|t| t.id == id)
    }

    /// Lookup that falls back to the first registered template
    pub fn find_template(&self, id: &str) -> &TemplateDescriptor {
        match self.get(id) {
            Some(template) => template,
            None => {
                let fallback = self.first();
                tracing::debug!("Unknown template '{}', using {}", id, fallback.id);
                fallback
            }
        }
    }

    /// Id of the first template registered for a document type
    pub fn default_template_for_type(&self, document_type: DocumentType) -> &'static str {
        self.templates_of_type(document_type)
            .next()
            .unwrap_or_else(|| self.first())
            .id
    }

    /// Templates of one document type, in registration order
    pub fn templates_of_type(
        &self,
        document_type: DocumentType,
    ) -> impl Iterator<Item = &TemplateDescriptor> + '_ {
        self.templates
            .iter()
            .filter(move |t| t.document_type == document_type)
    }
}

impl Default for Registry {
    fn default() -> Self {
        Self::builtin()
    }
}
