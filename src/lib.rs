//! stowage: provision the secret and config stores a service manifest declares.

pub mod adapters;
pub mod app;
pub mod domain;
pub mod ports;

#[cfg(test)]
pub(crate) mod testing;

use std::path::{Path, PathBuf};

use adapters::{DialoguerPrompt, HttpResourceClient, TerminalProgress, load_manifest};
use app::commands::{inspect, provision};

pub use app::ServiceTarget;
pub use app::commands::inspect::{DeclaredEntry, DeclaredStore, InspectReport, KindSummary};
pub use app::orchestrator::ProvisionReport;
pub use domain::{AppError, ResourceKind, SetupMode};

/// Options for [`setup`].
#[derive(Debug, Clone)]
pub struct SetupOptions {
    /// Path to the manifest file.
    pub manifest: PathBuf,
    /// Service that created stores are linked to.
    pub target: ServiceTarget,
    /// Prompting behaviour.
    pub mode: SetupMode,
}

/// Provision every store declared in the manifest and link it to the service.
///
/// Uses the terminal for prompts and progress and the HTTP resource API
/// configured under `[api]`, authenticated with `STOWAGE_API_TOKEN`.
pub fn setup(options: SetupOptions) -> Result<ProvisionReport, AppError> {
    if options.target.service_id.trim().is_empty() {
        return Err(AppError::InvalidConfig("service id must not be empty".to_string()));
    }

    let manifest = load_manifest(&options.manifest)?;
    if !manifest.setup.declares_any() {
        return Ok(provision::nothing_declared());
    }

    let client = HttpResourceClient::from_env(&manifest.api)?;
    let prompt = DialoguerPrompt::new();
    let progress = TerminalProgress::new();

    provision::execute(&manifest, &client, &prompt, &progress, &options.target, options.mode)
}

/// Report which kinds the manifest declares, and the stores and entries under each.
pub fn inspect(manifest_path: &Path) -> Result<InspectReport, AppError> {
    let manifest = load_manifest(manifest_path)?;
    Ok(inspect::execute(&manifest))
}
