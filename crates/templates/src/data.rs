//! Form data - field values of one in-progress submission

use crate::error::{Result, TemplateError};
use crate::template::{FieldDescriptor, TemplateDescriptor};
use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;
use std::collections::BTreeMap;

/// Mapping of field name to entered value
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FormData {
    values: BTreeMap<String, String>,
}

impl FormData {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every listed field present with an empty value
    pub fn for_fields(fields: &[FieldDescriptor]) -> Self {
        Self {
            values: fields
                .iter()
                .map(|f| (f.name.to_string(), String::new()))
                .collect(),
        }
    }

    /// Build form data for a template from a JSON object of field values.
    ///
    /// Keys the template does not declare are dropped with a warning.
    /// Numbers and booleans are taken as their text; `null` is empty.
    pub fn from_json_str(template: &TemplateDescriptor, json: &str) -> Result<Self> {
        let value: JsonValue = serde_json::from_str(json)?;
        Self::from_json_value(template, &value)
    }

    pub fn from_json_value(template: &TemplateDescriptor, value: &JsonValue) -> Result<Self> {
        let object = value.as_object().ok_or_else(|| {
            TemplateError::InvalidData("expected a JSON object of field values".to_string())
        })?;

        let mut data = template.empty_data();
        for (key, value) in object {
            if template.field(key).is_none() {
                tracing::warn!("Ignoring unknown field '{}' for template {}", key, template.id);
                continue;
            }
            let text = match value {
                JsonValue::String(s) => s.clone(),
                JsonValue::Null => String::new(),
                JsonValue::Number(n) => n.to_string(),
                JsonValue::Bool(b) => b.to_string(),
                JsonValue::Array(_) | JsonValue::Object(_) => {
                    return Err(TemplateError::InvalidData(format!(
                        "field '{}' must be a string",
                        key
                    )));
                }
            };
            data.set(key.clone(), text);
        }
        Ok(data)
    }

    /// Raw value, `None` when the key is absent
    pub fn get(&self, name: &str) -> Option<&str> {
        self.values.get(name).map(String::as_str)
    }

    /// Value of a field, empty when absent
    pub fn value(&self, name: &str) -> &str {
        self.get(name).unwrap_or("")
    }

    pub fn set(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.values.insert(name.into(), value.into());
    }

    pub fn contains(&self, name: &str) -> bool {
        self.values.contains_key(name)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.values.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for FormData {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            values: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}
