//! JSON Schema export CLI
//!
//! Projects a resolved-module document into a JSON Schema, written to stdout
//! or a file.

use std::fs;
use std::path::PathBuf;

use clap::Parser;
use tracing_subscriber::EnvFilter;
use yang_jsonschema::{load_module, project, EmitOptions};

#[derive(Parser)]
#[command(name = "yang-schema-export")]
#[command(about = "Project a resolved YANG module document into a JSON Schema")]
struct Cli {
    /// Resolved module document (JSON)
    module: PathBuf,

    /// Write the schema here instead of stdout
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Slash-delimited path of an alternate projection root (e.g. /system/ntp)
    #[arg(short, long)]
    path: Option<String>,

    /// Override the emitted title
    #[arg(short, long)]
    title: Option<String>,

    /// Verbose projection diagnostics
    #[arg(long)]
    debug: bool,
}

fn main() {
    let cli = Cli::parse();

    let filter = if cli.debug {
        EnvFilter::new("debug")
    } else {
        EnvFilter::from_default_env()
    };
    tracing_subscriber::fmt().with_env_filter(filter).init();

    if let Err(e) = run(cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let root = load_module(&cli.module)?;

    let options = EmitOptions {
        title: cli.title,
        path: cli.path,
    };
    let schema = project(&root, &options)?;
    let rendered = serde_json::to_string_pretty(&schema)?;

    match cli.output {
        Some(path) => fs::write(&path, rendered)?,
        None => println!("{}", rendered),
    }
    Ok(())
}
