//! `stowage setup`: provision every store declared in the manifest.

use log::info;

use crate::app::orchestrator::{Orchestrator, ProvisionReport};
use crate::app::provisioners::{ConfigStores, SecretStores};
use crate::app::{AppContext, ServiceTarget};
use crate::domain::{AppError, Manifest, ResourceKind, SetupMode};
use crate::ports::{ProgressSink, PromptReader, ResourceClient};

/// Order in which resource kinds are provisioned.
pub const KIND_ORDER: [ResourceKind; 2] = [ResourceKind::ConfigStore, ResourceKind::SecretStore];

/// Run the provisioning pipeline against `client`.
pub fn execute(
    manifest: &Manifest,
    client: &dyn ResourceClient,
    prompt: &dyn PromptReader,
    progress: &dyn ProgressSink,
    target: &ServiceTarget,
    mode: SetupMode,
) -> Result<ProvisionReport, AppError> {
    info!(
        "provisioning resources for service {} version {}",
        target.service_id, target.service_version
    );
    let ctx = AppContext::new(client, prompt, target, mode).with_progress(progress);

    let mut orchestrator = Orchestrator::new();
    for kind in KIND_ORDER {
        let setup = manifest.setup.for_kind(kind);
        orchestrator = match kind {
            ResourceKind::ConfigStore => orchestrator.register(ConfigStores::new(ctx, setup)),
            ResourceKind::SecretStore => orchestrator.register(SecretStores::new(ctx, setup)),
        };
    }

    orchestrator.run()
}

/// Report for a manifest with nothing under `[setup]`.
pub fn nothing_declared() -> ProvisionReport {
    ProvisionReport { provisioned: Vec::new(), skipped: KIND_ORDER.to_vec() }
}
