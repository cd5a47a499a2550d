//! Power of Attorney for Property template

use crate::render::{file_name_part, RenderContext};
use crate::template::{DocumentType, FieldDescriptor, TemplateDescriptor, TemplateKind};
use crate::validation::Schema;
use doc_model::{Document, HeadingLevel, Paragraph, Run};

pub const ID: &str = "poa-property";

const TITLE: &str = "POWER OF ATTORNEY \u{2013} PROPERTY";

pub(crate) fn descriptor() -> TemplateDescriptor {
    let fields = vec![
        FieldDescriptor::text("grantorFirstName", "Grantor First Name"),
        FieldDescriptor::text("grantorLastName", "Grantor Last Name"),
        FieldDescriptor::text("date", "Date"),
        FieldDescriptor::text("attorneyName", "Attorney Name"),
        FieldDescriptor::text_area("powersGranted", "Powers Granted"),
        FieldDescriptor::text_area("limitations", "Limitations").optional(),
    ];

    let schema = Schema::new()
        .required("grantorFirstName")
        .required("grantorLastName")
        .required("date")
        .required("attorneyName")
        .required("powersGranted")
        .optional("limitations");

    TemplateDescriptor::new(
        ID,
        DocumentType::Poa,
        "Power of Attorney \u{2013} Property",
        TemplateKind::PoaProperty,
        fields,
        schema,
    )
}

pub(crate) fn file_name(ctx: &RenderContext<'_>) -> String {
    format!("POA_Property_{}.docx", file_name_part(ctx.value("grantorLastName")))
}

fn plain(text: impl Into<String>) -> Paragraph {
    Paragraph::with_runs(vec![Run::new(text)])
}

pub(crate) fn render(ctx: &RenderContext<'_>) -> Document {
    let body = vec![
        Paragraph::heading(HeadingLevel::Heading1, TITLE),
        plain(format!(
            "Grantor: {} {}",
            ctx.value("grantorFirstName"),
            ctx.value("grantorLastName")
        )),
        plain(format!("Date: {}", ctx.value("date"))),
        Paragraph::heading(HeadingLevel::Heading2, "Appointment"),
        plain(format!(
            "I appoint {} as my attorney for property.",
            ctx.value("attorneyName")
        )),
        Paragraph::heading(HeadingLevel::Heading2, "Powers Granted"),
        plain(ctx.value("powersGranted")),
        Paragraph::heading(HeadingLevel::Heading2, "Limitations"),
        plain(ctx.value_or("limitations", "None")),
        Paragraph::heading(HeadingLevel::Heading2, "Signature"),
        plain("______________________________  Grantor"),
    ];

    Document::with_body(body).with_title("Power of Attorney \u{2013} Property")
}
