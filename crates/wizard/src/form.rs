//! Form controller - field values, validity and per-field views

use crate::error::{WizardError, WizardResult};
use serde::Serialize;
use std::collections::BTreeSet;
use templates::{FormData, InputKind, TemplateDescriptor, ValidationReport};

/// What a front-end needs to draw one input
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldView {
    pub name: &'static str,
    pub label: &'static str,
    pub input: InputKind,
    pub required: bool,
    pub value: String,
    /// Inline error, shown once the field was edited or a submit was attempted
    pub error: Option<String>,
}

impl FieldView {
    pub fn is_multiline(&self) -> bool {
        self.input == InputKind::TextArea
    }
}

/// Owns the data of one in-progress submission
#[derive(Debug, Clone)]
pub struct FormController<'r> {
    template: &'r TemplateDescriptor,
    data: FormData,
    report: ValidationReport,
    touched: BTreeSet<&'static str>,
    show_all_errors: bool,
}

impl<'r> FormController<'r> {
    pub fn new(template: &'r TemplateDescriptor) -> Self {
        let data = template.empty_data();
        let report = template.validate(&data);
        Self {
            template,
            data,
            report,
            touched: BTreeSet::new(),
            show_all_errors: false,
        }
    }

    pub fn template(&self) -> &'r TemplateDescriptor {
        self.template
    }

    /// Replace all data with empty values for a template's field set
    pub fn reset_for(&mut self, template: &'r TemplateDescriptor) {
        *self = Self::new(template);
    }

    /// Set one field and re-run validation
    pub fn set_value(&mut self, name: &str, value: impl Into<String>) -> WizardResult<()> {
        let template = self.template;
        let field = template
            .field(name)
            .ok_or_else(|| WizardError::UnknownField {
                template: template.id.to_string(),
                field: name.to_string(),
            })?;

        self.data.set(field.name, value);
        self.touched.insert(field.name);
        self.report = template.validate(&self.data);
        Ok(())
    }

    pub fn value(&self, name: &str) -> &str {
        self.data.value(name)
    }

    pub fn data(&self) -> &FormData {
        &self.data
    }

    pub fn report(&self) -> &ValidationReport {
        &self.report
    }

    pub fn is_valid(&self) -> bool {
        self.report.is_valid()
    }

    /// Show errors for every field, edited or not
    pub fn reveal_all_errors(&mut self) {
        self.show_all_errors = true;
    }

    pub fn field_views(&self) -> Vec<FieldView> {
        self.template
            .fields
            .iter()
            .map(|field| {
                let visible = self.show_all_errors || self.touched.contains(field.name);
                FieldView {
                    name: field.name,
                    label: field.label,
                    input: field.input,
                    required: field.required,
                    value: self.data.value(field.name).to_string(),
                    error: self
                        .report
                        .error_for(field.name)
                        .filter(|_| visible)
                        .map(|e| e.to_string()),
                }
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use templates::Registry;

    #[test]
    fn test_new_form_is_empty_and_invalid() {
        let registry = Registry::builtin();
        let form = FormController::new(registry.find_template("poa-property"));

        assert!(!form.is_valid());
        assert_eq!(form.data().len(), 6);
        assert!(form.field_views().iter().all(|v| v.value.is_empty() && v.error.is_none()));
    }

    #[test]
    fn test_set_value_revalidates() {
        let registry = Registry::builtin();
        let mut form = FormController::new(registry.find_template("will-sample"));

        form.set_value("trustee1Email", "not-an-email").unwrap();
        let view = form
            .field_views()
            .into_iter()
            .find(|v| v.name == "trustee1Email")
            .unwrap();
        assert_eq!(view.error.as_deref(), Some("Invalid email"));

        form.set_value("trustee1Email", "a@b.co").unwrap();
        assert_eq!(form.report().error_for("trustee1Email"), None);
        assert_eq!(form.value("trustee1Email"), "a@b.co");
    }

    #[test]
    fn test_errors_hidden_until_touched_or_revealed() {
        let registry = Registry::builtin();
        let mut form = FormController::new(registry.find_template("poa-property"));

        form.set_value("date", "").unwrap();
        let views = form.field_views();
        assert_eq!(views.iter().filter(|v| v.error.is_some()).count(), 1);

        form.reveal_all_errors();
        let views = form.field_views();
        assert_eq!(views.iter().filter(|v| v.error.is_some()).count(), 5);
        let limitations = views.iter().find(|v| v.name == "limitations").unwrap();
        assert!(limitations.error.is_none());
        assert!(limitations.is_multiline());
    }

    #[test]
    fn test_unknown_field_rejected() {
        let registry = Registry::builtin();
        let mut form = FormController::new(registry.find_template("poa-property"));

        let result = form.set_value("testatorName", "Jane");
        assert!(matches!(result, Err(WizardError::UnknownField { .. })));
        assert!(!form.data().contains("testatorName"));
    }

    #[test]
    fn test_reset_for_replaces_data() {
        let registry = Registry::builtin();
        let mut form = FormController::new(registry.find_template("will-sample"));
        form.set_value("testatorName", "Jane Doe").unwrap();
        form.reveal_all_errors();

        form.reset_for(registry.find_template("poa-property"));
        assert_eq!(form.template().id, "poa-property");
        assert!(!form.data().contains("testatorName"));
        assert!(form.field_views().iter().all(|v| v.error.is_none()));
    }
}
