//! Remote resource API port definition.

use crate::domain::AppError;

/// Store as assigned by the remote service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RemoteStore {
    pub id: String,
    pub name: String,
}

/// Request to link a created resource to a service version.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinkRequest {
    pub service_id: String,
    pub service_version: u32,
    /// Remote name of the resource.
    pub name: String,
    /// Remote identifier of the resource.
    pub resource_id: String,
}

/// Link as recorded by the remote service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RemoteLink {
    pub id: String,
}

/// Port for remote resource operations.
///
/// Every call is a single independent remote operation; callers get no
/// idempotency or retry from implementations.
pub trait ResourceClient {
    fn create_secret_store(&self, name: &str) -> Result<RemoteStore, AppError>;

    fn create_secret(&self, store_id: &str, name: &str, secret: &[u8]) -> Result<(), AppError>;

    fn create_config_store(&self, name: &str) -> Result<RemoteStore, AppError>;

    fn create_config_store_item(
        &self,
        store_id: &str,
        key: &str,
        value: &str,
    ) -> Result<(), AppError>;

    fn create_resource_link(&self, request: &LinkRequest) -> Result<RemoteLink, AppError>;
}
