//! Document wizard
//!
//! Two steps: pick a document type, then pick a template of that type and
//! fill its form. Generating renders the document, exports it and hands the
//! file to a save target, leaving the wizard where it was so the user can
//! correct a value and generate again.

use crate::error::{WizardError, WizardResult};
use crate::form::{FieldView, FormController};
use serde::{Deserialize, Serialize};
use store::{export_blob, trigger_download, ExportArtifact, ExportOptions, SaveTarget, SavedArtifact};
use templates::{DocumentType, Registry, TemplateDescriptor};

/// Steps in the document wizard
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum WizardStep {
    /// Step 1: Select the document type
    SelectType,
    /// Step 2: Select a template and fill in its fields
    SelectTemplateAndFill,
}

impl WizardStep {
    /// Get the next step
    pub fn next(&self) -> Option<WizardStep> {
        match self {
            WizardStep::SelectType => Some(WizardStep::SelectTemplateAndFill),
            WizardStep::SelectTemplateAndFill => None,
        }
    }

    /// Get the previous step
    pub fn previous(&self) -> Option<WizardStep> {
        match self {
            WizardStep::SelectType => None,
            WizardStep::SelectTemplateAndFill => Some(WizardStep::SelectType),
        }
    }

    /// Get the step number (1-based)
    pub fn number(&self) -> usize {
        match self {
            WizardStep::SelectType => 1,
            WizardStep::SelectTemplateAndFill => 2,
        }
    }

    /// Get the total number of steps
    pub fn total_steps() -> usize {
        2
    }

    /// Get the step name
    pub fn name(&self) -> &'static str {
        match self {
            WizardStep::SelectType => "Select Document Type",
            WizardStep::SelectTemplateAndFill => "Fill Template",
        }
    }

    /// Get a description of the step
    pub fn description(&self) -> &'static str {
        match self {
            WizardStep::SelectType => "Choose the kind of document you want to create",
            WizardStep::SelectTemplateAndFill => "Pick a template and fill in its fields",
        }
    }
}

/// Wizard state over a template registry
pub struct Wizard<'r> {
    registry: &'r Registry,
    current_step: WizardStep,
    selected_type: Option<DocumentType>,
    form: FormController<'r>,
    export_options: ExportOptions,
}

impl<'r> Wizard<'r> {
    /// Create a wizard at the type selection step
    pub fn new(registry: &'r Registry) -> Self {
        let initial = &registry.list_templates()[0];
        Self {
            registry,
            current_step: WizardStep::SelectType,
            selected_type: None,
            form: FormController::new(initial),
            export_options: ExportOptions::default(),
        }
    }

    pub fn with_export_options(mut self, options: ExportOptions) -> Self {
        self.export_options = options;
        self
    }

    /// Get the current step
    pub fn current_step(&self) -> WizardStep {
        self.current_step
    }

    pub fn selected_type(&self) -> Option<DocumentType> {
        self.selected_type
    }

    /// Active template
    pub fn template(&self) -> &'r TemplateDescriptor {
        self.form.template()
    }

    pub fn form(&self) -> &FormController<'r> {
        &self.form
    }

    /// Choose a document type and move to the form step.
    ///
    /// Seeds the type's default template and clears all field values.
    pub fn choose_type(&mut self, document_type: DocumentType) {
        let registry = self.registry;
        let id = registry.default_template_for_type(document_type);
        self.selected_type = Some(document_type);
        self.form.reset_for(registry.find_template(id));
        self.current_step = WizardStep::SelectTemplateAndFill;
        tracing::debug!("Chose {} with template {}", document_type, id);
    }

    /// Go back to type selection. Field values are kept until the next reset.
    pub fn back(&mut self) -> bool {
        match self.current_step.previous() {
            Some(prev) => {
                self.current_step = prev;
                true
            }
            None => false,
        }
    }

    /// Templates offered for the active type
    pub fn visible_templates(&self) -> Vec<&'r TemplateDescriptor> {
        let registry: &'r Registry = self.registry;
        match self.selected_type {
            Some(document_type) => registry.templates_of_type(document_type).collect(),
            None => registry.list_templates().iter().collect(),
        }
    }

    /// Switch the active template; a different template starts with empty fields.
    ///
    /// Unknown ids fall back to the active type's default template. A known
    /// template of another type is rejected.
    pub fn select_template(&mut self, id: &str) -> WizardResult<()> {
        self.require_step(WizardStep::SelectTemplateAndFill)?;

        let registry = self.registry;
        let template = match (registry.get(id), self.selected_type) {
            (Some(template), Some(expected)) if template.document_type != expected => {
                return Err(WizardError::TemplateTypeMismatch {
                    template: template.id.to_string(),
                    expected,
                });
            }
            (Some(template), _) => template,
            (None, Some(active)) => {
                let fallback = registry.find_template(registry.default_template_for_type(active));
                tracing::debug!("Unknown template '{}', staying on {}", id, fallback.id);
                fallback
            }
            (None, None) => registry.find_template(id),
        };

        if template.id != self.template().id {
            self.form.reset_for(template);
            tracing::debug!("Switched to template {}", template.id);
        }
        Ok(())
    }

    /// Set one field of the active form
    pub fn set_field(&mut self, name: &str, value: impl Into<String>) -> WizardResult<()> {
        self.require_step(WizardStep::SelectTemplateAndFill)?;
        self.form.set_value(name, value)
    }

    pub fn field_views(&self) -> Vec<FieldView> {
        self.form.field_views()
    }

    /// Whether the form may be submitted
    pub fn can_submit(&self) -> bool {
        self.current_step == WizardStep::SelectTemplateAndFill && self.form.is_valid()
    }

    /// Validate, render and serialize the active form
    pub fn export(&mut self) -> WizardResult<ExportArtifact> {
        self.require_step(WizardStep::SelectTemplateAndFill)?;

        let template = self.template();
        if !self.form.is_valid() {
            self.form.reveal_all_errors();
            let report = self.form.report().clone();
            tracing::info!(
                "Generate blocked for {}: {} field(s) invalid",
                template.id,
                report.len()
            );
            return Err(WizardError::Invalid(report));
        }

        let data = self.form.data();
        let document = template.render(data);
        let file_name = template.file_name(data);
        Ok(export_blob(document, file_name, &self.export_options)?)
    }

    /// Export the active form and hand the file to a save target
    pub fn generate<T: SaveTarget + ?Sized>(&mut self, target: &mut T) -> WizardResult<SavedArtifact> {
        let artifact = self.export()?;
        Ok(trigger_download(artifact, target)?)
    }

    fn require_step(&self, step: WizardStep) -> WizardResult<()> {
        if self.current_step == step {
            Ok(())
        } else {
            Err(WizardError::WrongStep(self.current_step))
        }
    }
}
