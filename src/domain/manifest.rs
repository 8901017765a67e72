//! Service manifest model and parser (`stowage.toml`).

use serde::Deserialize;

use crate::domain::{ApiConfig, AppError, OrderedMap, ResourceKind};

/// Default manifest filename looked up in the working directory.
pub const MANIFEST_FILE: &str = "stowage.toml";

/// Parsed manifest.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Manifest {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub setup: SetupSection,
}

/// The `[setup]` block: resources to provision, per kind.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SetupSection {
    #[serde(default)]
    pub config_stores: ResourceSetupSpec,
    #[serde(default)]
    pub secret_stores: ResourceSetupSpec,
}

impl SetupSection {
    /// True when at least one store of any kind is declared.
    pub fn declares_any(&self) -> bool {
        !self.config_stores.is_empty() || !self.secret_stores.is_empty()
    }

    pub fn for_kind(&self, kind: ResourceKind) -> &ResourceSetupSpec {
        match kind {
            ResourceKind::ConfigStore => &self.config_stores,
            ResourceKind::SecretStore => &self.secret_stores,
        }
    }
}

/// Declared resources of one kind, keyed by resource name.
pub type ResourceSetupSpec = OrderedMap<StoreSetup>;

/// One declared store.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct StoreSetup {
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub items: OrderedMap<ItemSetup>,
}

/// One declared store entry.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ItemSetup {
    #[serde(default)]
    pub description: Option<String>,
    /// Literal value used when prompting is disabled.
    #[serde(default)]
    pub value: Option<String>,
}

/// Parse and validate manifest content.
pub fn parse_manifest_content(content: &str) -> Result<Manifest, AppError> {
    let manifest: Manifest = toml::from_str(content)?;
    manifest.api.validate()?;
    Ok(manifest)
}
