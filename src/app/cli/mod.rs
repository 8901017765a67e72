//! CLI Adapter.

mod inspect;
mod setup;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::domain::{AppError, MANIFEST_FILE};

#[derive(Parser)]
#[command(name = "stowage")]
#[command(version)]
#[command(
    about = "Provision secret and config stores declared in a service manifest",
    long_about = None
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Create declared stores and link them to a service version
    #[clap(visible_alias = "s")]
    Setup {
        /// Manifest declaring the stores
        #[arg(short, long, default_value = MANIFEST_FILE)]
        manifest: PathBuf,
        /// Service the stores are linked to
        #[arg(long)]
        service_id: String,
        /// Service version the stores are linked to
        #[arg(long)]
        service_version: u32,
        /// Use manifest values without prompting
        #[arg(long)]
        accept_defaults: bool,
        /// Never prompt; fail when a value is missing
        #[arg(long)]
        non_interactive: bool,
    },
    /// List declared stores and entries without contacting the API
    #[clap(visible_alias = "ls")]
    Inspect {
        /// Manifest declaring the stores
        #[arg(short, long, default_value = MANIFEST_FILE)]
        manifest: PathBuf,
        /// Emit JSON instead of text
        #[arg(long)]
        json: bool,
    },
}

/// Entry point for the CLI.
pub fn run() {
    let cli = Cli::parse();

    let result: Result<(), AppError> = match cli.command {
        Commands::Setup {
            manifest,
            service_id,
            service_version,
            accept_defaults,
            non_interactive,
        } => setup::run_setup(
            manifest,
            service_id,
            service_version,
            accept_defaults,
            non_interactive,
        ),
        Commands::Inspect { manifest, json } => inspect::run_inspect(manifest, json),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        if let Some(remediation) = e.remediation() {
            eprintln!("{}", remediation);
        }
        std::process::exit(1);
    }
}
