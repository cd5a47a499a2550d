//! Document Templates
//!
//! This crate holds the bundled legal-document templates. Each template
//! bundles a field list, a validation schema, a render function producing a
//! [`doc_model::Document`], and a file-naming function.
//!
//! # Example
//!
//! ```rust
//! use templates::Registry;
//!
//! let registry = Registry::builtin();
//! let poa = registry.find_template("poa-property");
//!
//! let mut data = poa.empty_data();
//! data.set("grantorFirstName", "Ann");
//! data.set("grantorLastName", "Smith");
//! data.set("date", "1 May 2025");
//! data.set("attorneyName", "Tom Jones");
//! data.set("powersGranted", "All property");
//!
//! assert!(poa.validate(&data).is_valid());
//! assert_eq!(poa.file_name(&data), "POA_Property_Smith.docx");
//! let doc = poa.render(&data);
//! assert_eq!(doc.paragraphs()[1].text(), "Grantor: Ann Smith");
//! ```

mod data;
mod error;
mod registry;
mod render;
mod template;
pub mod formatting;
pub mod poa;
pub mod validation;
pub mod will;

pub use data::FormData;
pub use error::{Result, TemplateError};
pub use registry::Registry;
pub use render::{file_name_part, RenderContext};
pub use template::{
    DocumentType, FieldDescriptor, InputKind, TemplateDescriptor, TemplateKind,
};
pub use validation::{FieldError, FieldRule, Schema, ValidationError, ValidationReport};

#[cfg(test)]
pub(crate) mod fixtures {
    use crate::FormData;

    pub(crate) fn jane_doe() -> FormData {
        [
            ("testatorName", "Jane Doe"),
            ("spouseName", "John Doe"),
            ("Childrendob", "2010-01-01, 2012-05-05"),
            ("trustee1Name", "Alice Smith"),
            ("trustee1Address", "1 Main St"),
            ("trustee1Email", "a@b.co"),
            ("trustee1Phone", "555"),
            ("trustee2Name", "Bob Smith"),
            ("trustee2Address", "2 Main St"),
            ("childrenNames", "Sam, Alex"),
            ("guardian1Name", "Carol White"),
            ("guardian1Address", "3 Main St"),
            ("guardian1Email", "c@d.co"),
            ("guardian1Phone", "556"),
            ("guardian2Name", "Dan White"),
            ("day", "5th"),
            ("monthYear", "March, 2025"),
            ("witness1Name", "Eve Black"),
            ("witness2Name", "Frank Green"),
        ]
        .into_iter()
        .collect()
    }

    pub(crate) fn smith_poa() -> FormData {
        [
            ("grantorFirstName", "Ann"),
            ("grantorLastName", "Smith"),
            ("date", "1 May 2025"),
            ("attorneyName", "Tom Jones"),
            ("powersGranted", "Manage all bank accounts"),
            ("limitations", "No sale of the family home"),
        ]
        .into_iter()
        .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn valid_data(template_id: &'static str) -> impl Strategy<Value = FormData> {
        let registry = Registry::builtin();
        let template = registry.find_template(template_id);

        let fields: Vec<BoxedStrategy<(String, String)>> = template
            .fields
            .iter()
            .map(|field| {
                let value = match template.schema.rule_for(field.name) {
                    Some(FieldRule::Email) => "[a-z]{1,8}(\\.[a-z]{1,8})?@[a-z]{1,8}\\.[a-z]{2,4}".boxed(),
                    Some(FieldRule::Required) => any::<String>()
                        .prop_filter("required fields are non-empty", |s| !s.is_empty())
                        .boxed(),
                    Some(FieldRule::Optional) | None => any::<String>().boxed(),
                };
                let name = field.name.to_string();
                value.prop_map(move |v| (name.clone(), v)).boxed()
            })
            .collect();

        fields.prop_map(|pairs| pairs.into_iter().collect::<FormData>())
    }

    fn assert_renders(template_id: &str, data: &FormData) -> std::result::Result<(), TestCaseError> {
        let registry = Registry::builtin();
        let template = registry.find_template(template_id);

        prop_assert!(template.validate(data).is_valid());
        let doc = template.render(data);
        prop_assert!(doc.paragraph_count() > 0);
        prop_assert!(doc.validate().is_ok());

        let name = template.file_name(data);
        prop_assert!(!name.chars().any(char::is_whitespace));
        prop_assert!(name.ends_with(".docx"));
        Ok(())
    }

    proptest! {
        #[test]
        fn will_renders_for_any_valid_data(data in valid_data("will-sample")) {
            assert_renders("will-sample", &data)?;
        }

        #[test]
        fn poa_renders_for_any_valid_data(data in valid_data("poa-property")) {
            assert_renders("poa-property", &data)?;
        }

        #[test]
        fn file_name_part_never_has_whitespace(value in any::<String>()) {
            let part = file_name_part(&value);
            prop_assert!(!part.is_empty());
            prop_assert!(!part.chars().any(char::is_whitespace));
            if value.trim().is_empty() {
                prop_assert_eq!(part, "Client");
            }
        }
    }

    #[test]
    fn test_every_field_reaches_the_document() {
        let registry = Registry::builtin();
        for template in registry.list_templates() {
            let mut data = template.empty_data();
            for field in &template.fields {
                data.set(field.name, format!("<<{}>>", field.name));
            }

            let text = template.render(&data).plain_text();
            for field in &template.fields {
                let sentinel = format!("<<{}>>", field.name);
                assert!(text.contains(&sentinel), "{} missing {}", template.id, field.name);
            }
        }
    }

    #[test]
    fn test_render_does_not_mutate_data() {
        let registry = Registry::builtin();
        let will = registry.find_template("will-sample");
        let data = fixtures::jane_doe();
        let before = data.clone();

        let _ = will.render(&data);
        let _ = will.file_name(&data);
        assert_eq!(data, before);
    }

    #[test]
    fn test_render_checked() {
        let registry = Registry::builtin();
        let poa = registry.find_template("poa-property");

        let (doc, name) = poa.render_checked(&fixtures::smith_poa()).unwrap();
        assert_eq!(name, "POA_Property_Smith.docx");
        assert_eq!(doc.metadata.title.as_deref(), Some("Power of Attorney \u{2013} Property"));

        let err = poa.render_checked(&poa.empty_data()).unwrap_err();
        match err {
            TemplateError::Invalid(report) => assert_eq!(report.len(), 5),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_jane_doe_will_scenario() {
        let registry = Registry::builtin();
        let will = registry.find_template("will-sample");
        let data = fixtures::jane_doe();

        assert!(will.validate(&data).is_valid());
        assert!(will.file_name(&data).contains("Jane_Doe"));
        let doc = will.render(&data);
        let first_page = doc.pages()[0];
        assert!(first_page.iter().any(|p| p.text() == "JANE DOE"));
    }

    #[test]
    fn test_will_without_children_keys() {
        let registry = Registry::builtin();
        let will = registry.find_template("will-sample");
        let data: FormData = [
            ("testatorName", "Jane Doe"),
            ("spouseName", "John Doe"),
            ("trustee1Name", "A"),
            ("trustee1Address", "B"),
            ("trustee1Email", "a@b.com"),
            ("trustee1Phone", "1"),
            ("trustee2Name", "C"),
            ("trustee2Address", "D"),
            ("guardian1Name", "E"),
            ("guardian1Address", "F"),
            ("guardian1Email", "e@f.com"),
            ("guardian1Phone", "2"),
            ("guardian2Name", "G"),
            ("day", "1"),
            ("monthYear", "January 2024"),
            ("witness1Name", "W1"),
            ("witness2Name", "W2"),
        ]
        .into_iter()
        .collect();
        assert_eq!(data.len(), 17);
        assert!(!data.contains("Childrendob"));
        assert!(!data.contains("childrenNames"));

        assert!(will.validate(&data).is_valid());
        let (doc, name) = will.render_checked(&data).unwrap();
        assert!(name.contains("Jane_Doe"));
        assert!(doc.pages()[0].iter().any(|p| p.text() == "JANE DOE"));
        assert!(doc.plain_text().contains("[children name]"));
    }

    #[test]
    fn test_poa_without_limitations_key() {
        let registry = Registry::builtin();
        let poa = registry.find_template("poa-property");
        let data: FormData = [
            ("grantorFirstName", "Ann"),
            ("grantorLastName", "Smith"),
            ("date", "1 May 2025"),
            ("attorneyName", "Tom Jones"),
            ("powersGranted", "Manage all bank accounts"),
        ]
        .into_iter()
        .collect();
        assert!(!data.contains("limitations"));

        let (doc, _) = poa.render_checked(&data).unwrap();
        let paragraphs = doc.paragraphs();
        let heading = paragraphs
            .iter()
            .position(|p| p.text() == "Limitations")
            .unwrap();
        assert_eq!(paragraphs[heading + 1].text(), "None");
    }

    #[test]
    fn test_invalid_email_blocks() {
        let registry = Registry::builtin();
        let will = registry.find_template("will-sample");
        let mut data = fixtures::jane_doe();
        data.set("trustee1Email", "not-an-email");

        let report = will.validate(&data);
        assert!(!report.is_valid());
        assert_eq!(report.error_for("trustee1Email"), Some(ValidationError::InvalidEmail));
    }

    #[test]
    fn test_empty_required_blocks() {
        let registry = Registry::builtin();
        let will = registry.find_template("will-sample");
        let mut data = fixtures::jane_doe();
        data.set("spouseName", "");

        let report = will.validate(&data);
        assert!(!report.is_valid());
        assert_eq!(report.errors()[0].message(), "Required");
    }
}
