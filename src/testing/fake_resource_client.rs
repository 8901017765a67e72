use std::sync::{Arc, Mutex};

use crate::domain::AppError;
use crate::ports::{LinkRequest, RemoteLink, RemoteStore, ResourceClient};

/// One call observed by [`FakeResourceClient`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RemoteCall {
    CreateSecretStore { name: String },
    CreateSecret { store_id: String, name: String, secret: Vec<u8> },
    CreateConfigStore { name: String },
    CreateConfigStoreItem { store_id: String, key: String, value: String },
    CreateResourceLink(LinkRequest),
}

impl RemoteCall {
    pub fn is_link(&self) -> bool {
        matches!(self, RemoteCall::CreateResourceLink(_))
    }
}

/// Recording resource client. Optionally fails the call at a given index.
#[derive(Clone, Default)]
pub struct FakeResourceClient {
    calls: Arc<Mutex<Vec<RemoteCall>>>,
    fail_at: Option<usize>,
}

impl FakeResourceClient {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fail the zero-based `index`-th call. The failing call is still recorded.
    pub fn failing_at(index: usize) -> Self {
        Self { calls: Arc::default(), fail_at: Some(index) }
    }

    pub fn calls(&self) -> Vec<RemoteCall> {
        self.calls.lock().unwrap().clone()
    }

    fn record(&self, call: RemoteCall) -> Result<usize, AppError> {
        let mut calls = self.calls.lock().unwrap();
        calls.push(call);
        let index = calls.len() - 1;
        if self.fail_at == Some(index) {
            return Err(AppError::Api {
                message: format!("injected failure at call {}", index),
                status: Some(500),
            });
        }
        Ok(index)
    }
}

impl ResourceClient for FakeResourceClient {
    fn create_secret_store(&self, name: &str) -> Result<RemoteStore, AppError> {
        let index = self.record(RemoteCall::CreateSecretStore { name: name.to_string() })?;
        Ok(RemoteStore { id: format!("store-{}", index), name: name.to_string() })
    }

    fn create_secret(&self, store_id: &str, name: &str, secret: &[u8]) -> Result<(), AppError> {
        self.record(RemoteCall::CreateSecret {
            store_id: store_id.to_string(),
            name: name.to_string(),
            secret: secret.to_vec(),
        })?;
        Ok(())
    }

    fn create_config_store(&self, name: &str) -> Result<RemoteStore, AppError> {
        let index = self.record(RemoteCall::CreateConfigStore { name: name.to_string() })?;
        Ok(RemoteStore { id: format!("store-{}", index), name: name.to_string() })
    }

    fn create_config_store_item(
        &self,
        store_id: &str,
        key: &str,
        value: &str,
    ) -> Result<(), AppError> {
        self.record(RemoteCall::CreateConfigStoreItem {
            store_id: store_id.to_string(),
            key: key.to_string(),
            value: value.to_string(),
        })?;
        Ok(())
    }

    fn create_resource_link(&self, request: &LinkRequest) -> Result<RemoteLink, AppError> {
        let index = self.record(RemoteCall::CreateResourceLink(request.clone()))?;
        Ok(RemoteLink { id: format!("link-{}", index) })
    }
}
