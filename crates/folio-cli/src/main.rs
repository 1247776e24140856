//! folio CLI: split-view portfolio viewer for the terminal

use clap::{Parser, Subcommand, ValueEnum};
use folio_core::{clamp_ratio, sample_document, ContentTree, SettingsDocument, Variant};
use folio_tui::headless;
use std::path::PathBuf;
use std::process::ExitCode;

/// Split-view portfolio viewer with a live settings document
#[derive(Parser)]
#[command(name = "folio")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Load a portfolio document from a JSON file instead of the built-in
    /// sample
    #[arg(long, global = true)]
    file: Option<PathBuf>,

    /// Initial persona variant
    #[arg(long, global = true, value_enum)]
    variant: Option<VariantArg>,

    /// Initial split ratio in percent (clamped to 10-90)
    #[arg(long, global = true)]
    ratio: Option<f64>,

    /// Start with the light content palette
    #[arg(long, global = true)]
    light: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Open the TUI (default when no command specified)
    Tui,

    /// Print the resolved portfolio document
    Show {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Render a single frame to stdout without a terminal
    Render {
        /// Frame width in cells
        #[arg(long, default_value_t = headless::DEFAULT_WIDTH)]
        width: u16,

        /// Frame height in cells
        #[arg(long, default_value_t = headless::DEFAULT_HEIGHT)]
        height: u16,
    },
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum VariantArg {
    Teacher,
    Developer,
    Combined,
}

impl From<VariantArg> for Variant {
    fn from(arg: VariantArg) -> Self {
        match arg {
            VariantArg::Teacher => Variant::Teacher,
            VariantArg::Developer => Variant::Developer,
            VariantArg::Combined => Variant::Combined,
        }
    }
}

impl Cli {
    fn settings(&self) -> SettingsDocument {
        let defaults = SettingsDocument::default();
        SettingsDocument {
            split_ratio: self.ratio.map_or(defaults.split_ratio, clamp_ratio),
            dark_mode: !self.light,
            editor_theme: defaults.editor_theme,
            variant: self.variant.map_or(defaults.variant, Into::into),
        }
    }

    fn document(&self) -> Result<ContentTree, folio_core::DocumentError> {
        match &self.file {
            Some(path) => ContentTree::load(path),
            None => Ok(sample_document()),
        }
    }
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    let document = match cli.document() {
        Ok(document) => document,
        Err(e) => {
            eprintln!("error: {e}");
            return ExitCode::FAILURE;
        }
    };
    let settings = cli.settings();

    let result = match cli.command {
        None | Some(Commands::Tui) => folio_tui::run_tui(document, settings).await,
        Some(Commands::Show { json }) => show(&document, json),
        Some(Commands::Render { width, height }) => render(document, settings, width, height),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}

/// Print the document as text or JSON.
fn show(document: &ContentTree, json: bool) -> Result<(), Box<dyn std::error::Error>> {
    if json {
        println!("{}", document.to_json_pretty()?);
        return Ok(());
    }

    println!("{}", document.profile.name);
    println!("{}", document.profile.headline);
    if let Some(location) = &document.profile.location {
        println!("{location}");
    }

    println!("\nskills:");
    for skill in &document.skills {
        println!("  {} ({})", skill.name, skill.level.label());
    }

    println!("\nwork:");
    for entry in &document.work {
        println!(
            "  {} @ {} ({})",
            entry.title,
            entry.organization,
            entry.period.label()
        );
    }

    println!("\neducation:");
    for entry in &document.education {
        println!(
            "  {}, {} ({})",
            entry.degree,
            entry.institution,
            entry.period.label()
        );
    }

    println!("\nprojects:");
    for project in &document.projects {
        println!("  {}", project.name);
    }

    println!("\ncontact: {}", document.contact.email);
    Ok(())
}

/// Render one frame headlessly and print it.
fn render(
    document: ContentTree,
    settings: SettingsDocument,
    width: u16,
    height: u16,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut app = folio_tui::App::new(document, settings);
    let frame = headless::render_to_string(&mut app, width, height)?;
    println!("{frame}");
    Ok(())
}
