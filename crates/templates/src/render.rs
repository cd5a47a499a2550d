//! Read access to form data while rendering

use crate::data::FormData;
use crate::template::TemplateDescriptor;

/// Field lookups for one render call
pub struct RenderContext<'a> {
    template: &'a TemplateDescriptor,
    data: &'a FormData,
}

impl<'a> RenderContext<'a> {
    pub fn new(template: &'a TemplateDescriptor, data: &'a FormData) -> Self {
        Self { template, data }
    }

    pub fn template(&self) -> &'a TemplateDescriptor {
        self.template
    }

    /// Value of a declared field, empty when absent
    pub fn value(&self, name: &str) -> &'a str {
        debug_assert!(
            self.template.field(name).is_some(),
            "template {} does not declare field {}",
            self.template.id,
            name
        );
        self.data.value(name)
    }

    /// Value of a declared field, or `fallback` when it is empty
    pub fn value_or(&self, name: &str, fallback: &'a str) -> &'a str {
        match self.value(name) {
            "" => fallback,
            value => value,
        }
    }
}

/// Driving value for a file name: whitespace runs become `_`, blank becomes `Client`
pub fn file_name_part(value: &str) -> String {
    if value.trim().is_empty() {
        return "Client".to_string();
    }

    let mut out = String::with_capacity(value.len());
    let mut in_whitespace = false;
    for c in value.chars() {
        if c.is_whitespace() {
            if !in_whitespace {
                out.push('_');
            }
            in_whitespace = true;
        } else {
            out.push(c);
            in_whitespace = false;
        }
    }
    out
}
