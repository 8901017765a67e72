use std::fmt;

/// Kind of auxiliary resource a provisioner manages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResourceKind {
    ConfigStore,
    SecretStore,
}

impl ResourceKind {
    /// Human-readable label used in prompts, progress steps and errors.
    pub fn label(&self) -> &'static str {
        match self {
            ResourceKind::ConfigStore => "config store",
            ResourceKind::SecretStore => "secret store",
        }
    }

    /// Manifest table name under `[setup]`.
    pub fn manifest_key(&self) -> &'static str {
        match self {
            ResourceKind::ConfigStore => "config_stores",
            ResourceKind::SecretStore => "secret_stores",
        }
    }
}

impl fmt::Display for ResourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Lifecycle phase in which a provisioner failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProvisionPhase {
    Configure,
    Create,
}

impl fmt::Display for ProvisionPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProvisionPhase::Configure => f.write_str("configure"),
            ProvisionPhase::Create => f.write_str("create"),
        }
    }
}
