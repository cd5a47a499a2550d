//! Will-Me - generate wills and powers of attorney as .docx files
//!
//! Run `will-me wizard` for the guided flow, or `will-me generate` with a
//! JSON file of field values for scripted use.

mod commands;
mod interactive;
mod state;

use anyhow::Context;
use clap::{Parser, Subcommand};
use state::AppState;
use std::io::{self, Write};
use std::path::PathBuf;
use templates::DocumentType;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use wizard::Wizard;

#[derive(Parser)]
#[command(name = "will-me", version, about = "Generate legal documents from templates")]
struct Cli {
    /// Settings file (JSON), defaults to ./will-me.json
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List available templates
    Templates {
        /// Only templates of this type (will, poa)
        #[arg(long = "type")]
        document_type: Option<DocumentType>,
        #[arg(long)]
        json: bool,
    },
    /// Show the fields a template asks for
    Fields {
        template: String,
        #[arg(long)]
        json: bool,
    },
    /// Generate a document from a JSON file of field values
    Generate {
        template: String,
        #[arg(long)]
        data: PathBuf,
        /// Output directory, overrides the settings file
        #[arg(long)]
        out: Option<PathBuf>,
    },
    /// Fill a template step by step
    Wizard {
        #[arg(long)]
        out: Option<PathBuf>,
    },
    /// Print the paragraphs of a .docx file
    Inspect {
        file: PathBuf,
        /// List the package parts and their content types instead
        #[arg(long)]
        parts: bool,
    },
    /// Show or change the settings file
    Settings {
        #[command(subcommand)]
        action: SettingsAction,
    },
}

#[derive(Subcommand)]
enum SettingsAction {
    /// Print the effective settings
    Show,
    /// Change one setting, e.g. `set output.directory ./wills`
    Set { key: String, value: String },
    /// Write the default settings
    Reset,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Logs go to stderr so command output stays pipeable
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .with(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();
    let config = cli
        .config
        .unwrap_or_else(|| PathBuf::from(store::DEFAULT_SETTINGS_FILE));
    let state = AppState::load(Some(&config))
        .await
        .context("Failed to load settings")?;

    let mut stdout = io::stdout().lock();
    match cli.command {
        Commands::Templates { document_type, json } => {
            let templates = commands::list_templates(&state, document_type);
            if json {
                writeln!(stdout, "{}", serde_json::to_string_pretty(&templates)?)?;
            } else {
                write!(stdout, "{}", commands::render_template_table(&templates))?;
            }
        }
        Commands::Fields { template, json } => {
            let fields = commands::describe_fields(&state, &template)?;
            if json {
                writeln!(stdout, "{}", serde_json::to_string_pretty(&fields)?)?;
            } else {
                write!(stdout, "{}", commands::render_field_table(&fields))?;
            }
        }
        Commands::Generate { template, data, out } => {
            let state = state.with_output_dir(out);
            let saved = commands::generate(&state, &template, &data).await?;
            let location = saved
                .location
                .as_ref()
                .map(|p| p.display().to_string())
                .unwrap_or_else(|| saved.file_name.clone());
            writeln!(stdout, "Saved {} ({} bytes)", location, saved.size)?;
        }
        Commands::Wizard { out } => {
            let state = state.with_output_dir(out);
            let mut target = state.target();
            let mut wizard =
                Wizard::new(&state.registry).with_export_options(state.settings.export_options());
            let outcome = interactive::run_wizard(&mut wizard, io::stdin().lock(), &mut stdout, &mut target)?;
            match outcome {
                interactive::Outcome::Generated(saved) => {
                    tracing::debug!("Wizard wrote {:?}", saved.location);
                }
                interactive::Outcome::Quit => tracing::debug!("Wizard closed without generating"),
            }
        }
        Commands::Inspect { file, parts } => {
            let listing = if parts {
                commands::inspect_parts(&file).await?
            } else {
                commands::inspect(&file).await?
            };
            write!(stdout, "{}", listing)?;
        }
        Commands::Settings { action } => {
            let settings = match action {
                SettingsAction::Show => commands::show_settings(&config).await?,
                SettingsAction::Set { key, value } => {
                    commands::set_setting(&config, &key, &value).await?
                }
                SettingsAction::Reset => commands::reset_settings(&config).await?,
            };
            writeln!(stdout, "# {}", config.display())?;
            writeln!(stdout, "{}", serde_json::to_string_pretty(&settings)?)?;
        }
    }

    Ok(())
}
