pub mod api_config;
pub mod error;
pub mod manifest;
pub mod ordered_map;
pub mod provisioned;
pub mod resource_kind;
pub mod setup_mode;

pub use api_config::{API_TOKEN_ENV, ApiConfig};
pub use error::{AppError, BUG_REMEDIATION};
pub use manifest::{
    ItemSetup, MANIFEST_FILE, Manifest, ResourceSetupSpec, SetupSection, StoreSetup,
    parse_manifest_content,
};
pub use ordered_map::OrderedMap;
pub use provisioned::{ProvisionedEntry, ProvisionedResource, SecretValue};
pub use resource_kind::{ProvisionPhase, ResourceKind};
pub use setup_mode::SetupMode;
