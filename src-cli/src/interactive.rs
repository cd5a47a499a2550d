//! Line-oriented front-end for the document wizard

use std::io::{self, BufRead, Write};
use store::{SaveTarget, SavedArtifact};
use templates::DocumentType;
use wizard::{FieldView, Wizard, WizardError, WizardStep};

/// How a wizard session ended
#[derive(Debug)]
pub enum Outcome {
    Generated(SavedArtifact),
    Quit,
}

struct Console<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Console<R, W> {
    /// Prompt and read one trimmed line; `None` on end of input
    fn ask(&mut self, prompt: &str) -> io::Result<Option<String>> {
        write!(self.output, "{}", prompt)?;
        self.output.flush()?;
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }

    /// Read lines until an empty one; `None` on end of input before any line
    fn ask_multiline(&mut self, prompt: &str) -> io::Result<Option<String>> {
        writeln!(self.output, "{} (end with an empty line)", prompt)?;
        let mut lines: Vec<String> = Vec::new();
        loop {
            let mut line = String::new();
            if self.input.read_line(&mut line)? == 0 {
                if lines.is_empty() {
                    return Ok(None);
                }
                break;
            }
            let line = line.trim_end_matches(['\r', '\n']);
            if line.is_empty() {
                break;
            }
            lines.push(line.to_string());
        }
        Ok(Some(lines.join("\n")))
    }

    fn say(&mut self, text: &str) -> io::Result<()> {
        writeln!(self.output, "{}", text)
    }
}

fn header(step: WizardStep) -> String {
    format!(
        "\nStep {} of {}: {}\n{}",
        step.number(),
        WizardStep::total_steps(),
        step.name(),
        step.description()
    )
}

fn parse_type(answer: &str) -> Option<DocumentType> {
    match answer.parse::<usize>() {
        Ok(n) if n >= 1 => DocumentType::all().get(n - 1).copied(),
        Ok(_) => None,
        Err(_) => answer.parse().ok(),
    }
}

/// Answer that clears a field which already has a value
const CLEAR: &str = "-";

fn field_prompt(view: &FieldView) -> String {
    let label = view.label.trim_end_matches([' ', ':']);
    let mut prompt = label.to_string();
    if !view.required {
        prompt.push_str(" (optional)");
    }
    let mut lines = view.value.lines();
    if let Some(first) = lines.next() {
        let more = if lines.next().is_some() { " ..." } else { "" };
        prompt.push_str(&format!(" [{}{}]", first, more));
    }
    if view.is_multiline() {
        prompt
    } else {
        format!("{}: ", prompt)
    }
}

/// Run an interactive session until a document is generated or the user quits.
///
/// End of input counts as quitting.
pub fn run_wizard<R, W, T>(
    wizard: &mut Wizard<'_>,
    input: R,
    output: W,
    target: &mut T,
) -> anyhow::Result<Outcome>
where
    R: BufRead,
    W: Write,
    T: SaveTarget + ?Sized,
{
    let mut console = Console { input, output };

    loop {
        match wizard.current_step() {
            WizardStep::SelectType => {
                console.say(&header(WizardStep::SelectType))?;
                for (index, document_type) in DocumentType::all().iter().enumerate() {
                    console.say(&format!(
                        "  {}. {} - {}",
                        index + 1,
                        document_type.label(),
                        document_type.description()
                    ))?;
                }
                let Some(answer) = console.ask("Document type (number or name, q to quit): ")? else {
                    return Ok(Outcome::Quit);
                };
                if answer.eq_ignore_ascii_case("q") {
                    return Ok(Outcome::Quit);
                }
                match parse_type(&answer) {
                    Some(document_type) => wizard.choose_type(document_type),
                    None => console.say(&format!("Unknown document type: {}", answer))?,
                }
            }
            WizardStep::SelectTemplateAndFill => {
                console.say(&header(WizardStep::SelectTemplateAndFill))?;
                console.say(&format!(
                    "An empty answer keeps the value in [brackets]; {} clears it.",
                    CLEAR
                ))?;
                if !choose_template(wizard, &mut console)? {
                    return Ok(Outcome::Quit);
                }
                if !fill_fields(wizard, &mut console, false)? {
                    return Ok(Outcome::Quit);
                }
                match review(wizard, &mut console, target)? {
                    Some(outcome) => return Ok(outcome),
                    None => continue,
                }
            }
        }
    }
}

/// Offer the templates of the chosen type; keeps the current one on an empty answer
fn choose_template<R: BufRead, W: Write>(
    wizard: &mut Wizard<'_>,
    console: &mut Console<R, W>,
) -> anyhow::Result<bool> {
    let templates = wizard.visible_templates();
    if templates.len() <= 1 {
        console.say(&format!("Template: {}", wizard.template().name))?;
        return Ok(true);
    }

    loop {
        for (index, template) in templates.iter().enumerate() {
            console.say(&format!("  {}. {} ({})", index + 1, template.name, template.id))?;
        }
        let Some(answer) = console.ask("Template [1]: ")? else {
            return Ok(false);
        };
        if answer.is_empty() {
            return Ok(true);
        }
        let chosen = answer
            .parse::<usize>()
            .ok()
            .and_then(|n| n.checked_sub(1))
            .and_then(|i| templates.get(i))
            .map(|t| t.id)
            .unwrap_or(answer.as_str());
        match wizard.select_template(chosen) {
            Ok(()) => return Ok(true),
            Err(e) => console.say(&e.to_string())?,
        }
    }
}

/// Prompt for fields; with `only_invalid` just the ones showing an error.
///
/// An empty answer keeps the current value, including the empty first line
/// of a multi-line field; the clear marker empties the field.
fn fill_fields<R: BufRead, W: Write>(
    wizard: &mut Wizard<'_>,
    console: &mut Console<R, W>,
    only_invalid: bool,
) -> anyhow::Result<bool> {
    for view in wizard.field_views() {
        if only_invalid && view.error.is_none() {
            continue;
        }
        let answer = if view.is_multiline() {
            console.ask_multiline(&field_prompt(&view))?
        } else {
            console.ask(&field_prompt(&view))?
        };
        let Some(answer) = answer else {
            return Ok(false);
        };
        if answer.is_empty() && !view.value.is_empty() {
            continue;
        }
        let value = if answer == CLEAR { String::new() } else { answer };
        wizard.set_field(view.name, value)?;
        if let Some(error) = wizard
            .field_views()
            .into_iter()
            .find(|v| v.name == view.name)
            .and_then(|v| v.error)
        {
            console.say(&format!("  ! {}", error))?;
        }
    }
    Ok(true)
}

/// Show the menu after filling; `None` means go around the step loop again
fn review<R: BufRead, W: Write, T: SaveTarget + ?Sized>(
    wizard: &mut Wizard<'_>,
    console: &mut Console<R, W>,
    target: &mut T,
) -> anyhow::Result<Option<Outcome>> {
    loop {
        let Some(answer) = console.ask("[g]enerate, [e]dit, [b]ack, [q]uit: ")? else {
            return Ok(Some(Outcome::Quit));
        };
        match answer.to_ascii_lowercase().as_str() {
            "g" | "generate" => match wizard.generate(target) {
                Ok(saved) => {
                    console.say(&format!("Saved {}", saved.file_name))?;
                    return Ok(Some(Outcome::Generated(saved)));
                }
                Err(WizardError::Invalid(report)) => {
                    console.say(&format!("{} field(s) need attention:", report.len()))?;
                    for error in report.errors() {
                        console.say(&format!("  {}: {}", error.field, error.message()))?;
                    }
                    if !fill_fields(wizard, console, true)? {
                        return Ok(Some(Outcome::Quit));
                    }
                }
                Err(e) => return Err(e.into()),
            },
            "e" | "edit" => {
                if !fill_fields(wizard, console, false)? {
                    return Ok(Some(Outcome::Quit));
                }
            }
            "b" | "back" => {
                wizard.back();
                return Ok(None);
            }
            "q" | "quit" => return Ok(Some(Outcome::Quit)),
            other => console.say(&format!("Unknown choice: {}", other))?,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;
    use store::{read_paragraphs, MemoryTarget};
    use templates::Registry;

    fn run(script: &str) -> (Outcome, MemoryTarget, String) {
        let registry = Registry::builtin();
        let mut wizard = Wizard::new(&registry);
        let mut target = MemoryTarget::new();
        let mut output = Vec::new();
        let outcome = run_wizard(&mut wizard, Cursor::new(script.to_string()), &mut output, &mut target)
            .unwrap();
        (outcome, target, String::from_utf8(output).unwrap())
    }

    const POA_ANSWERS: &str = "Ann\nSmith\n1 May 2025\nTom Jones\nAll accounts\nand property\n\n\n";

    #[test]
    fn test_generates_poa() {
        let script = format!("2\n{}g\n", POA_ANSWERS);
        let (outcome, target, output) = run(&script);

        assert!(matches!(outcome, Outcome::Generated(ref saved) if saved.file_name == "POA_Property_Smith.docx"));
        assert_eq!(target.artifacts().len(), 1);
        assert!(output.contains("Step 2 of 2"));
        assert!(output.contains("Limitations (optional)"));
    }

    #[test]
    fn test_invalid_submit_reprompts_failing_fields() {
        // attorneyName left blank, then supplied after the failed generate
        let script = "poa\nAnn\nSmith\n1 May 2025\n\nAll accounts\n\n\ng\nTom Jones\ng\n";
        let (outcome, target, output) = run(script);

        assert!(output.contains("1 field(s) need attention"));
        assert!(output.contains("attorneyName: Required"));
        assert!(matches!(outcome, Outcome::Generated(_)));
        assert_eq!(target.artifacts().len(), 1);
    }

    #[test]
    fn test_end_of_input_quits() {
        let (outcome, target, _) = run("1\nJane Doe\n");
        assert!(matches!(outcome, Outcome::Quit));
        assert!(target.artifacts().is_empty());
    }

    #[test]
    fn test_back_returns_to_type_selection() {
        let script = format!("2\n{}b\nq\n", POA_ANSWERS);
        let (outcome, target, output) = run(&script);
        assert!(matches!(outcome, Outcome::Quit));
        assert!(target.artifacts().is_empty());
        assert_eq!(output.matches("Step 1 of 2").count(), 2);
    }

    fn texts_of_last(target: &MemoryTarget) -> Vec<String> {
        let artifact = target.last().unwrap();
        read_paragraphs(&artifact.bytes)
            .unwrap()
            .into_iter()
            .map(|p| p.text)
            .collect()
    }

    #[test]
    fn test_edit_pass_keeps_every_value() {
        // edit pass: Enter on four single-line fields and both multi-line fields
        let script = format!("2\n{}e\n\n\n\n\n\n\ng\n", POA_ANSWERS);
        let (outcome, target, output) = run(&script);

        assert!(!output.contains("need attention"));
        assert!(output.contains("Powers Granted [All accounts ...]"));
        assert!(matches!(outcome, Outcome::Generated(ref saved) if saved.file_name == "POA_Property_Smith.docx"));

        let texts = texts_of_last(&target);
        let powers = texts.iter().position(|t| t == "Powers Granted").unwrap();
        assert!(texts[powers + 1].starts_with("All accounts"));
        assert!(texts[powers + 1].contains("and property"));
    }

    #[test]
    fn test_clear_marker_empties_optional_field() {
        let script = "2\nAnn\nSmith\n1 May 2025\nTom Jones\nAll accounts\n\nNo gifts\n\n\
                      e\n\n\n\n\n\n-\n\ng\n";
        let (outcome, target, output) = run(script);

        assert!(output.contains("Limitations (optional) [No gifts]"));
        assert!(matches!(outcome, Outcome::Generated(_)));

        let texts = texts_of_last(&target);
        let limitations = texts.iter().position(|t| t == "Limitations").unwrap();
        assert_eq!(texts[limitations + 1], "None");
    }

    #[test]
    fn test_clear_marker_on_single_line_field() {
        // clearing a required field blocks generate and re-prompts it
        let script = format!("2\n{}e\n\n-\n\n\n\n\ng\nJones\ng\n", POA_ANSWERS);
        let (outcome, _, output) = run(&script);

        assert!(output.contains("grantorLastName: Required"));
        assert!(matches!(outcome, Outcome::Generated(ref saved) if saved.file_name == "POA_Property_Jones.docx"));
    }

    #[test]
    fn test_unknown_type_reprompts() {
        let (outcome, _, output) = run("deed\nq\n");
        assert!(matches!(outcome, Outcome::Quit));
        assert!(output.contains("Unknown document type: deed"));
    }

    #[test]
    fn test_parse_type() {
        assert_eq!(parse_type("1"), Some(DocumentType::Will));
        assert_eq!(parse_type("POA"), Some(DocumentType::Poa));
        assert_eq!(parse_type("0"), None);
        assert_eq!(parse_type("3"), None);
    }
}
