//! Field validation schemas

use crate::data::FormData;
use regex_lite::Regex;
use serde::Serialize;
use std::fmt;
use std::sync::LazyLock;

static EMAIL_PATTERN: LazyLock<Option<Regex>> = LazyLock::new(|| {
    Regex::new(
        r"^[A-Za-z0-9_'+-]+(\.[A-Za-z0-9_'+-]+)*@([A-Za-z0-9][A-Za-z0-9-]*\.)+[A-Za-z]{2,}$",
    )
    .ok()
});

/// Check whether a value looks like an email address
pub fn is_email(value: &str) -> bool {
    EMAIL_PATTERN
        .as_ref()
        .is_some_and(|re| re.is_match(value))
}

/// Rule applied to a single field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldRule {
    /// Non-empty string
    Required,
    /// Present and shaped like an email address
    Email,
    /// Any string, may be empty or absent
    Optional,
}

impl FieldRule {
    /// Check a value; `None` means the key is absent
    pub fn check(&self, value: Option<&str>) -> Option<ValidationError> {
        match (self, value) {
            (FieldRule::Optional, _) => None,
            (FieldRule::Required, Some(v)) if !v.is_empty() => None,
            (FieldRule::Required, _) | (FieldRule::Email, None) => Some(ValidationError::Required),
            (FieldRule::Email, Some(v)) if is_email(v) => None,
            (FieldRule::Email, Some(_)) => Some(ValidationError::InvalidEmail),
        }
    }

    /// Whether the rule rejects an empty value
    pub fn rejects_empty(&self) -> bool {
        !matches!(self, FieldRule::Optional)
    }
}

/// Why a field failed validation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ValidationError {
    Required,
    InvalidEmail,
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationError::Required => f.write_str("Required"),
            ValidationError::InvalidEmail => f.write_str("Invalid email"),
        }
    }
}

/// A failing field and the first rule it broke
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldError {
    pub field: String,
    pub error: ValidationError,
}

impl FieldError {
    pub fn message(&self) -> String {
        self.error.to_string()
    }
}

/// Outcome of validating form data against a schema
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ValidationReport {
    errors: Vec<FieldError>,
}

impl ValidationReport {
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn errors(&self) -> &[FieldError] {
        &self.errors
    }

    /// Error for one field, if it failed
    pub fn error_for(&self, field: &str) -> Option<ValidationError> {
        self.errors
            .iter()
            .find(|e| e.field == field)
            .map(|e| e.error)
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }
}

/// Ordered field rules of one template
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Schema {
    rules: Vec<(&'static str, FieldRule)>,
}

impl Schema {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn rule(mut self, field: &'static str, rule: FieldRule) -> Self {
        self.rules.push((field, rule));
        self
    }

    pub fn required(self, field: &'static str) -> Self {
        self.rule(field, FieldRule::Required)
    }

    pub fn email(self, field: &'static str) -> Self {
        self.rule(field, FieldRule::Email)
    }

    pub fn optional(self, field: &'static str) -> Self {
        self.rule(field, FieldRule::Optional)
    }

    pub fn rule_for(&self, field: &str) -> Option<FieldRule> {
        self.rules
            .iter()
            .find(|(name, _)| *name == field)
            .map(|(_, rule)| *rule)
    }

    pub fn field_names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.rules.iter().map(|(name, _)| *name)
    }

    /// Validate every field; at most one error per field
    pub fn validate(&self, data: &FormData) -> ValidationReport {
        let errors = self
            .rules
            .iter()
            .filter_map(|(field, rule)| {
                rule.check(data.get(field)).map(|error| FieldError {
                    field: field.to_string(),
                    error,
                })
            })
            .collect();
        ValidationReport { errors }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn schema() -> Schema {
        Schema::new()
            .required("name")
            .email("email")
            .optional("notes")
    }

    #[test]
    fn test_email_pattern_compiles() {
        assert!(EMAIL_PATTERN.is_some());
    }

    #[test]
    fn test_is_email() {
        assert!(is_email("a@b.co"));
        assert!(is_email("jane.doe+wills@example.org"));
        assert!(!is_email("not-an-email"));
        assert!(!is_email(""));
        assert!(!is_email("a@b"));
        assert!(!is_email(".a@b.com"));
        assert!(!is_email("a..b@c.com"));
        assert!(!is_email("a b@c.com"));
    }

    #[test]
    fn test_required_rule() {
        assert_eq!(FieldRule::Required.check(Some("")), Some(ValidationError::Required));
        assert_eq!(FieldRule::Required.check(None), Some(ValidationError::Required));
        assert_eq!(FieldRule::Required.check(Some(" ")), None);
    }

    #[test]
    fn test_email_rule() {
        assert_eq!(
            FieldRule::Email.check(Some("not-an-email")),
            Some(ValidationError::InvalidEmail)
        );
        assert_eq!(FieldRule::Email.check(Some("")), Some(ValidationError::InvalidEmail));
        assert_eq!(FieldRule::Email.check(None), Some(ValidationError::Required));
        assert_eq!(FieldRule::Email.check(Some("x@y.com")), None);
    }

    #[test]
    fn test_optional_accepts_anything() {
        assert_eq!(FieldRule::Optional.check(None), None);
        assert_eq!(FieldRule::Optional.check(Some("")), None);
        assert!(!FieldRule::Optional.rejects_empty());
    }

    #[test]
    fn test_schema_reports_each_field_once() {
        let data: FormData = [("name", ""), ("email", "nope")].into_iter().collect();
        let report = schema().validate(&data);

        assert!(!report.is_valid());
        assert_eq!(report.len(), 2);
        assert_eq!(report.error_for("name"), Some(ValidationError::Required));
        assert_eq!(report.error_for("email"), Some(ValidationError::InvalidEmail));
        assert_eq!(report.error_for("notes"), None);
        assert_eq!(report.errors()[1].message(), "Invalid email");
    }

    #[test]
    fn test_schema_valid() {
        let data: FormData = [("name", "Jane"), ("email", "j@x.com")].into_iter().collect();
        assert!(schema().validate(&data).is_valid());
    }

    #[test]
    fn test_schema_lookup() {
        let schema = schema();
        assert_eq!(schema.rule_for("email"), Some(FieldRule::Email));
        assert_eq!(schema.rule_for("other"), None);
        assert_eq!(schema.field_names().collect::<Vec<_>>(), vec!["name", "email", "notes"]);
    }
}
