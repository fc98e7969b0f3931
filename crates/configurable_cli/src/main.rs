//! Command-line front end for configurable type definitions.
//!
//! # Responsibility
//! - Load a definitions file into a type registry.
//! - Construct one named type from a JSON spec and print its fields.
//!
//! # Invariants
//! - Output is pretty JSON on stdout; errors are one line on stderr, exit 1.

use clap::Parser;
use configurable_core::{
    core_version, default_log_level, init_logging, load_definitions, ConfigurationSpec,
    TypeRegistry,
};
use log::info;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

#[derive(Debug, Parser)]
#[command(name = "configurable")]
#[command(about = "Construct an instance from configurable type definitions")]
#[command(version = core_version())]
struct Cli {
    /// JSON file with `{"types": [...]}` definitions
    #[arg(short, long)]
    definitions: PathBuf,
    /// Registered type name to construct
    #[arg(short = 't', long = "type")]
    type_name: String,
    /// JSON object file used as the configuration spec
    #[arg(short, long)]
    spec: Option<PathBuf>,
    /// Absolute directory for rotating log files; logging is off when unset
    #[arg(long)]
    log_dir: Option<String>,
    /// Log level (trace|debug|info|warn|error)
    #[arg(long)]
    log_level: Option<String>,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    match run(&cli) {
        Ok(output) => {
            println!("{output}");
            ExitCode::SUCCESS
        }
        Err(message) => {
            eprintln!("error: {message}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<String, String> {
    if let Some(log_dir) = cli.log_dir.as_deref() {
        let level = cli.log_level.as_deref().unwrap_or(default_log_level());
        init_logging(level, log_dir)?;
    }

    let definitions = load_definitions(&cli.definitions).map_err(|err| err.to_string())?;
    let mut registry = TypeRegistry::new();
    registry
        .register_all(definitions)
        .map_err(|err| err.to_string())?;

    let spec = match cli.spec.as_deref() {
        Some(path) => Some(read_spec(path)?),
        None => None,
    };
    let instance = registry
        .construct(&cli.type_name, spec.as_ref())
        .map_err(|err| err.to_string())?;
    info!(
        "event=cli_construct module=cli status=ok type={} instance={}",
        cli.type_name,
        instance.id()
    );

    serde_json::to_string_pretty(&instance.to_json()).map_err(|err| err.to_string())
}

fn read_spec(path: &Path) -> Result<ConfigurationSpec, String> {
    let raw = std::fs::read_to_string(path)
        .map_err(|err| format!("failed to read spec `{}`: {err}", path.display()))?;
    serde_json::from_str(&raw)
        .map_err(|err| format!("spec `{}` must be a JSON object: {err}", path.display()))
}
