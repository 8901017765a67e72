//! Secret stores declared under `[setup.secret_stores]`.

use log::debug;

use super::{Provisioner, link_to_service, remote_step, require_progress};
use crate::app::AppContext;
use crate::domain::{
    AppError, ProvisionedEntry, ProvisionedResource, ResourceKind, ResourceSetupSpec, SecretValue,
};
use crate::ports::PromptRequest;

const KIND: ResourceKind = ResourceKind::SecretStore;

/// Provisions secret stores and their secrets, then links them to the service.
pub struct SecretStores<'a> {
    ctx: AppContext<'a>,
    setup: &'a ResourceSetupSpec,
    required: Vec<ProvisionedResource>,
}

impl<'a> SecretStores<'a> {
    pub fn new(ctx: AppContext<'a>, setup: &'a ResourceSetupSpec) -> Self {
        Self { ctx, setup, required: Vec::new() }
    }

    /// Resources resolved by the last successful configure.
    pub fn required(&self) -> &[ProvisionedResource] {
        &self.required
    }
}

impl Provisioner for SecretStores<'_> {
    fn kind(&self) -> ResourceKind {
        KIND
    }

    fn predefined(&self) -> bool {
        !self.setup.is_empty()
    }

    fn configure(&mut self) -> Result<(), AppError> {
        let prompts = self.ctx.mode().prompts();
        let prompt = self.ctx.prompt();
        let mut required = Vec::with_capacity(self.setup.len());

        for (name, settings) in self.setup.iter() {
            if prompts {
                prompt.announce(
                    &format!("Configuring secret store '{}'", name),
                    settings.description.as_deref(),
                );
            }

            let mut store = ProvisionedResource::new(name, settings.items.len());

            for (key, item) in settings.items.iter() {
                let value = if prompts {
                    prompt.announce(&format!("Create a secret store entry called '{}'", key), None);
                    let request = PromptRequest::masked("Value", item.description.as_deref());
                    prompt.read_line(&request).map_err(|source| AppError::PromptInput {
                        kind: KIND,
                        resource: name.to_string(),
                        entry: key.to_string(),
                        source,
                    })?
                } else {
                    item.value.clone().unwrap_or_default()
                };

                let value = SecretValue::new(value);
                if value.is_empty() {
                    return Err(AppError::BlankValue {
                        kind: KIND,
                        resource: name.to_string(),
                        entry: key.to_string(),
                    });
                }

                store.entries.push(ProvisionedEntry { name: key.to_string(), value });
            }

            required.push(store);
        }

        self.required = required;
        Ok(())
    }

    fn create(&mut self) -> Result<(), AppError> {
        let progress = require_progress(&self.ctx, KIND)?;
        let client = self.ctx.client();
        // Dropping the list at return wipes every resolved secret.
        let required = std::mem::take(&mut self.required);

        for store in &required {
            debug!("creating secret store '{}' with {} entries", store.name, store.entries.len());
            let remote = remote_step(
                progress,
                &format!("Creating secret store '{}'...", store.name),
                || format!("error creating secret store '{}'", store.name),
                || client.create_secret_store(&store.name),
            )?;

            for entry in &store.entries {
                remote_step(
                    progress,
                    &format!("Creating secret store entry '{}'...", entry.name),
                    || format!("error creating secret store entry '{}' in '{}'", entry.name, store.name),
                    || client.create_secret(&remote.id, &entry.name, entry.value.as_bytes()),
                )?;
            }

            link_to_service(&self.ctx, progress, KIND, &remote)?;
        }

        Ok(())
    }
}
