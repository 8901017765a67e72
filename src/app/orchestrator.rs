//! Drives provisioners through predefined → configure → create.

use log::info;

use crate::app::provisioners::Provisioner;
use crate::domain::{AppError, ProvisionPhase, ResourceKind};

/// Outcome of a successful orchestration run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProvisionReport {
    /// Kinds that were configured and created, in run order.
    pub provisioned: Vec<ResourceKind>,
    /// Kinds with nothing declared in the manifest.
    pub skipped: Vec<ResourceKind>,
}

/// Ordered set of provisioners, one per resource kind.
pub struct Orchestrator<'a> {
    provisioners: Vec<Box<dyn Provisioner + 'a>>,
}

impl<'a> Orchestrator<'a> {
    pub fn new() -> Self {
        Self { provisioners: Vec::new() }
    }

    /// Register a provisioner. Provisioners run in registration order.
    pub fn register(mut self, provisioner: impl Provisioner + 'a) -> Self {
        self.provisioners.push(Box::new(provisioner));
        self
    }

    /// True when any registered provisioner has work to do.
    pub fn has_work(&self) -> bool {
        self.provisioners.iter().any(|p| p.predefined())
    }

    /// Run every predefined provisioner, stopping at the first failure.
    ///
    /// Resources created before a failure are left in place.
    pub fn run(&mut self) -> Result<ProvisionReport, AppError> {
        let mut report = ProvisionReport::default();

        for provisioner in self.provisioners.iter_mut() {
            let kind = provisioner.kind();
            if !provisioner.predefined() {
                report.skipped.push(kind);
                continue;
            }

            info!("configuring {} resources", kind);
            provisioner.configure().map_err(|source| AppError::Provisioning {
                kind,
                phase: ProvisionPhase::Configure,
                source: Box::new(source),
            })?;

            info!("creating {} resources", kind);
            provisioner.create().map_err(|source| AppError::Provisioning {
                kind,
                phase: ProvisionPhase::Create,
                source: Box::new(source),
            })?;

            report.provisioned.push(kind);
        }

        Ok(report)
    }
}

impl Default for Orchestrator<'_> {
    fn default() -> Self {
        Self::new()
    }
}
