//! `pd-export`: build a page from a template and export it as static HTML.
//!
//! ```text
//! pd-export --name "Alpha Landing" --accent "#34d399" --out site/
//! pd-export --template seed.json --add box --add button --stdout
//! ```
//!
//! Set `RUST_LOG=debug` to trace scene mutations.

use clap::Parser;
use pd_core::model::{ElementKind, TemplateSeed};
use pd_editor::config::EditorConfig;
use pd_editor::export::DirectoryDelivery;
use pd_editor::input::InputEvent;
use pd_editor::session::EditorSession;
use std::error::Error;
use std::fs;
use std::io::Write;
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Debug, Parser)]
#[command(name = "pd-export", version, about = "Export a Page Draft template as standalone HTML")]
struct Args {
    /// Template payload `{name, description, accentColor}` as a JSON file.
    #[arg(long, conflicts_with_all = ["name", "description", "accent"])]
    template: Option<PathBuf>,

    /// Headline of the seeded page.
    #[arg(long)]
    name: Option<String>,

    /// Description paragraph of the seeded page.
    #[arg(long)]
    description: Option<String>,

    /// Accent color, e.g. `#60a5fa`.
    #[arg(long)]
    accent: Option<String>,

    /// Editor config as a JSON file.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Append an element as if clicked in the palette
    /// (heading, text, button, box). Repeatable.
    #[arg(long = "add", value_parser = parse_kind)]
    add: Vec<ElementKind>,

    /// Directory to write the page into.
    #[arg(long, default_value = ".")]
    out: PathBuf,

    /// Print the page instead of writing a file.
    #[arg(long)]
    stdout: bool,
}

fn parse_kind(tag: &str) -> Result<ElementKind, String> {
    ElementKind::from_tag(tag).ok_or_else(|| format!("unknown element type `{tag}`"))
}

fn main() -> ExitCode {
    env_logger::init();
    let args = Args::parse();
    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("{e}");
            eprintln!("pd-export: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run(args: &Args) -> Result<(), Box<dyn Error>> {
    let config = match &args.config {
        Some(path) => EditorConfig::from_json(&fs::read_to_string(path)?)?,
        None => EditorConfig::default(),
    };
    let mut session = EditorSession::new(config);

    match &args.template {
        Some(path) => {
            session.open_template_json(&fs::read_to_string(path)?)?;
        }
        None => {
            session.open_template(&TemplateSeed {
                name: args.name.clone().unwrap_or_default(),
                description: args.description.clone().unwrap_or_default(),
                accent_color: args.accent.clone(),
            });
        }
    }

    for kind in &args.add {
        session.handle_input(&InputEvent::PaletteClick { kind: *kind }, None);
    }

    if args.stdout {
        let artifact = session.export_artifact()?;
        std::io::stdout().write_all(&artifact.bytes)?;
        return Ok(());
    }

    let mut delivery = DirectoryDelivery::new(&args.out);
    if let Some(path) = session.deliver_file(&mut delivery)? {
        println!("{}", path.display());
    }
    Ok(())
}
