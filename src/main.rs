use std::path::PathBuf;

use anyhow::Result;
use blobgen::{discover_settings, load_settings, GoDoc, Module, Settings};
use clap::Parser;

#[derive(Parser, Debug)]
#[command(name = "blobgen")]
#[command(about = "Generate a typed Bloblang plugin model from Go package documentation", long_about = None)]
#[command(version)]
struct Cli {
    /// Go module or package path to introspect (e.g. "math" or "strings")
    module: String,

    /// Prefix for generated plugin names
    #[arg(long)]
    prefix: Option<String>,

    /// Output file (defaults to stdout)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Require native return types as well as native argument types
    #[arg(long)]
    check_returns: bool,

    /// Settings file (defaults to discovering blobgen.toml upward from the
    /// working directory)
    #[arg(long)]
    settings: Option<PathBuf>,
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let settings: Settings = match &cli.settings {
        Some(path) => load_settings(path),
        None => discover_settings(&std::env::current_dir()?).0,
    };

    let mut policy = settings.filter_policy();
    if cli.check_returns {
        policy.check_returns = true;
    }

    let prefix = cli
        .prefix
        .as_deref()
        .or_else(|| settings.prefix())
        .unwrap_or_default();

    let module = Module::load(&GoDoc, &cli.module, prefix, policy)?;

    let json = serde_json::to_string_pretty(&module)?;
    match &cli.output {
        Some(path) => std::fs::write(path, json)?,
        None => println!("{json}"),
    }

    Ok(())
}
