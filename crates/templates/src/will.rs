//! Last Will and Testament template

use crate::formatting::{blank, page_break, para, text, title_page, var};
use crate::render::{file_name_part, RenderContext};
use crate::template::{DocumentType, FieldDescriptor, TemplateDescriptor, TemplateKind};
use crate::validation::Schema;
use doc_model::{Document, Paragraph};

pub const ID: &str = "will-sample";

const SIGNATURE_LINE: &str = "_________________________";
const WITNESS_LINES: [&str; 3] = [
    "Name: ___________________________",
    "Address: ___________________________",
    "Signature: ___________________________",
];

pub(crate) fn descriptor() -> TemplateDescriptor {
    let fields = vec![
        FieldDescriptor::text("testatorName", "Testator Name : "),
        FieldDescriptor::text("spouseName", "spouse name : "),
        FieldDescriptor::text_area("Childrendob", "Children DOB (comma-separated)").optional(),
        FieldDescriptor::text("trustee1Name", "Trustee1 Name : "),
        FieldDescriptor::text("trustee1Address", "Trustee1 address : "),
        FieldDescriptor::text("trustee1Email", "trustee1 email : "),
        FieldDescriptor::text("trustee1Phone", "trustee1 phone no : "),
        FieldDescriptor::text("trustee2Name", "Trustee2 Name : "),
        FieldDescriptor::text("trustee2Address", "trustee2 address : "),
        FieldDescriptor::text("childrenNames", "children name (comma-separated)").optional(),
        FieldDescriptor::text("guardian1Name", "Guardian1 Name : "),
        FieldDescriptor::text("guardian1Address", "Guardian1 address : "),
        FieldDescriptor::text("guardian1Email", "Guardian1 email : "),
        FieldDescriptor::text("guardian1Phone", "guardian1 phone : "),
        FieldDescriptor::text("guardian2Name", "Guardian2 Name : "),
        FieldDescriptor::text("day", "[Day]"),
        FieldDescriptor::text("monthYear", "[Month, Year]"),
        FieldDescriptor::text("witness1Name", "[Witness1 Name]"),
        FieldDescriptor::text("witness2Name", "[Witness2 Name]"),
    ];

    let schema = Schema::new()
        .required("testatorName")
        .required("spouseName")
        .optional("Childrendob")
        .required("trustee1Name")
        .required("trustee1Address")
        .email("trustee1Email")
        .required("trustee1Phone")
        .required("trustee2Name")
        .required("trustee2Address")
        .optional("childrenNames")
        .required("guardian1Name")
        .required("guardian1Address")
        .email("guardian1Email")
        .required("guardian1Phone")
        .required("guardian2Name")
        .required("day")
        .required("monthYear")
        .required("witness1Name")
        .required("witness2Name");

    TemplateDescriptor::new(
        ID,
        DocumentType::Will,
        "Last Will and Testament (User Template)",
        TemplateKind::WillSample,
        fields,
        schema,
    )
}

pub(crate) fn file_name(ctx: &RenderContext<'_>) -> String {
    format!("Will_{}.docx", file_name_part(ctx.value("testatorName")))
}

pub(crate) fn render(ctx: &RenderContext<'_>) -> Document {
    let testator = ctx.value("testatorName");
    let spouse = ctx.value("spouseName");
    let trustee1 = ctx.value("trustee1Name");

    let mut body: Vec<Paragraph> = title_page(testator);
    body.push(page_break());

    body.extend([
        para(vec![
            text("I, "),
            var(testator),
            text(", being of sound mind and disposing memory, do hereby make, publish, and declare this to be my Last Will and Testament, hereby revoking all former wills and codicils made by me."),
        ]),
        blank(),
        para(vec![text("Marital Status")]),
        para(vec![text("I am married to "), var(spouse), text(".")]),
        blank(),
        para(vec![text("Children")]),
        para(vec![text("I have the following living children.")]),
        para(vec![var(ctx.value_or("childrenNames", "None."))]),
        para(vec![
            text("born, "),
            var(ctx.value("Childrendob")),
            text(", respectively"),
        ]),
        para(vec![text("Unless otherwise specified in the will, the term \"children\" is legally interpreted to mean: The testator\u{2019}s biological children and legally adopted children, whether born before or after the execution of the will, but born during the testator\u{2019}s lifetime.")]),
        blank(),
        para(vec![text("Estate Trustees")]),
        para(vec![
            text("I appoint "),
            var(trustee1),
            text(", of "),
            var(ctx.value("trustee1Address")),
            text(", with email: "),
            var(ctx.value("trustee1Email")),
            text(" and current contact no "),
            var(ctx.value("trustee1Phone")),
            text(" to be the Estate Trustee of this my Will."),
        ]),
        para(vec![
            text("If "),
            var(trustee1),
            text(", should predecease me or be unable or unwilling to act, I appoint "),
            var(ctx.value("trustee2Name")),
            text(", of "),
            var(ctx.value("trustee2Address")),
            text(", as alternate Estate Trustee. I give, devise, and bequeath all of the rest, residue, and remainder of my property of every nature and kind, and wherever situate, including any property over which I may have a power of appointment, to be divided as follows:"),
        ]),
        blank(),
        para(vec![text("Distribution")]),
        para(vec![
            text("To my spouse, "),
            var(spouse),
            text(", if he/she survives me by 30 days, absolutely."),
        ]),
        para(vec![
            text("If my spouse does not survive me by 30 days, then to my children, "),
            var(ctx.value_or("childrenNames", "[children name]")),
            text(", in equal shares per stirpes. If any of my children predecease me leaving issue (children of their own) surviving, such issue shall take their deceased parent's share equally."),
        ]),
        para(vec![
            text("If I die leaving minor children, I appoint "),
            var(ctx.value("guardian1Name")),
            text(", of "),
            var(ctx.value("guardian1Address")),
            text(", email: "),
            var(ctx.value("guardian1Email")),
            text(" and phone no: "),
            var(ctx.value("guardian1Phone")),
            text(" to be the guardian of their person and property. If they are unable or unwilling to act, I appoint "),
            var(ctx.value("guardian2Name")),
            text("."),
        ]),
        para(vec![text("My Estate Trustee shall have all powers and authority conferred upon them by the Trustee Act (Ontario), including (but not limited to) the power to: Sell, lease, invest, and distribute estate assets; Retain assets in their existing form; Hire professionals and pay reasonable fees; Make distributions in cash or in kind; Postpone the sale or conversion of any estate asset.")]),
        para(vec![text("I give the residue of my estate to be divided and distributed according to the instructions in clause 5.")]),
        para(vec![text("I direct my Estate Trustee to pay all my legally enforceable debts, my funeral and testamentary expenses, and all taxes payable as a result of my death, as soon as practicable after my death.")]),
        blank(),
        para(vec![
            text("This is my Last Will and Testament, made on this "),
            var(ctx.value("day")),
            text(" day of "),
            var(ctx.value("monthYear")),
            text("."),
        ]),
        blank(),
        para(vec![text("IN WITNESS WHEREOF, I have signed this Will on the date written above.")]),
        blank(),
        para(vec![text(SIGNATURE_LINE)]),
        para(vec![var(format!("{} (Testator)", testator))]),
        blank(),
        para(vec![text("Signed by the above-named Testator in our presence and signed by us in the presence of the Testator and each other, all being present at the same time.")]),
    ]);

    for witness in ["witness1Name", "witness2Name"] {
        body.push(blank());
        body.push(para(vec![var(ctx.value(witness))]));
        body.extend(WITNESS_LINES.iter().map(|line| para(vec![text(*line)])));
    }

    Document::with_body(body).with_title("Last Will and Testament")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::jane_doe;
    use doc_model::Alignment;

    #[test]
    fn test_scenario_renders_title_page_and_body() {
        let template = descriptor();
        let data = jane_doe();
        assert!(template.validate(&data).is_valid());

        let doc = template.render(&data);
        let pages = doc.pages();
        assert_eq!(pages.len(), 2);

        let first: Vec<String> = pages[0].iter().map(Paragraph::text).collect();
        assert_eq!(first, vec!["LAST WILL AND TESTAMENT", "OF", "JANE DOE"]);
        assert!(pages[0].iter().all(|p| p.alignment() == Alignment::Center));

        assert!(pages[1][0].page_break_before());
        assert!(pages[1][1].text().starts_with("I, Jane Doe, being of sound mind"));
        assert_eq!(template.file_name(&data), "Will_Jane_Doe.docx");
    }

    #[test]
    fn test_variable_runs_are_bold() {
        let doc = descriptor().render(&jane_doe());
        let opening = &doc.paragraphs()[4];
        assert_eq!(opening.runs()[1].text, "Jane Doe");
        assert!(opening.runs()[1].is_bold());
        assert!(!opening.runs()[0].is_bold());
    }

    #[test]
    fn test_blank_children_fallbacks() {
        let template = descriptor();
        let mut data = jane_doe();
        data.set("childrenNames", "");
        data.set("Childrendob", "");
        assert!(template.validate(&data).is_valid());

        let text = template.render(&data).plain_text();
        assert!(text.contains("\nNone.\n"));
        assert!(text.contains("\nborn, , respectively\n"));
        assert!(text.contains("then to my children, [children name], in equal shares"));
    }

    #[test]
    fn test_signature_block() {
        let doc = descriptor().render(&jane_doe());
        let lines: Vec<String> = doc.paragraphs().iter().map(Paragraph::text).collect();

        let testator = lines.iter().position(|l| l == "Jane Doe (Testator)").unwrap();
        assert_eq!(lines[testator - 1], SIGNATURE_LINE);

        let witness2 = lines.iter().position(|l| l == "Frank Green").unwrap();
        assert_eq!(&lines[witness2 + 1..], &WITNESS_LINES.map(String::from)[..]);
        assert_eq!(lines[witness2 - 1], "");
    }

    #[test]
    fn test_file_name_blank_testator() {
        let template = descriptor();
        let mut data = jane_doe();
        data.set("testatorName", "  ");
        assert_eq!(template.file_name(&data), "Will_Client.docx");
    }
}
