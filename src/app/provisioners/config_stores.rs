//! Config stores declared under `[setup.config_stores]`.

use log::debug;

use super::{Provisioner, link_to_service, remote_step, require_progress};
use crate::app::AppContext;
use crate::domain::{
    AppError, ItemSetup, ProvisionedEntry, ProvisionedResource, ResourceKind, ResourceSetupSpec,
    SecretValue,
};
use crate::ports::PromptRequest;

const KIND: ResourceKind = ResourceKind::ConfigStore;

/// Provisions config stores and their items, then links them to the service.
///
/// Items are not secret: prompts echo input and offer the manifest value as
/// the default answer.
pub struct ConfigStores<'a> {
    ctx: AppContext<'a>,
    setup: &'a ResourceSetupSpec,
    required: Vec<ProvisionedResource>,
}

impl<'a> ConfigStores<'a> {
    pub fn new(ctx: AppContext<'a>, setup: &'a ResourceSetupSpec) -> Self {
        Self { ctx, setup, required: Vec::new() }
    }

    pub fn required(&self) -> &[ProvisionedResource] {
        &self.required
    }

    fn read_item(&self, store: &str, key: &str, item: &ItemSetup) -> Result<String, AppError> {
        let prompt = self.ctx.prompt();
        prompt.announce(&format!("Create a config store entry called '{}'", key), None);

        let request =
            PromptRequest::plain("Value", item.description.as_deref(), item.value.as_deref());
        let answer = prompt.read_line(&request).map_err(|source| AppError::PromptInput {
            kind: KIND,
            resource: store.to_string(),
            entry: key.to_string(),
            source,
        })?;
        if answer.is_empty() {
            return Ok(item.value.clone().unwrap_or_default());
        }
        Ok(answer)
    }
}

impl Provisioner for ConfigStores<'_> {
    fn kind(&self) -> ResourceKind {
        KIND
    }

    fn predefined(&self) -> bool {
        !self.setup.is_empty()
    }

    fn configure(&mut self) -> Result<(), AppError> {
        let prompts = self.ctx.mode().prompts();
        let mut required = Vec::with_capacity(self.setup.len());

        for (name, settings) in self.setup.iter() {
            if prompts {
                self.ctx.prompt().announce(
                    &format!("Configuring config store '{}'", name),
                    settings.description.as_deref(),
                );
            }

            let mut store = ProvisionedResource::new(name, settings.items.len());

            for (key, item) in settings.items.iter() {
                let value = if prompts {
                    self.read_item(name, key, item)?
                } else {
                    item.value.clone().unwrap_or_default()
                };

                if value.is_empty() {
                    return Err(AppError::BlankValue {
                        kind: KIND,
                        resource: name.to_string(),
                        entry: key.to_string(),
                    });
                }

                store
                    .entries
                    .push(ProvisionedEntry { name: key.to_string(), value: SecretValue::new(value) });
            }

            required.push(store);
        }

        self.required = required;
        Ok(())
    }

    fn create(&mut self) -> Result<(), AppError> {
        let progress = require_progress(&self.ctx, KIND)?;
        let client = self.ctx.client();
        let required = std::mem::take(&mut self.required);

        for store in &required {
            debug!("creating config store '{}' with {} items", store.name, store.entries.len());
            let remote = remote_step(
                progress,
                &format!("Creating config store '{}'...", store.name),
                || format!("error creating config store '{}'", store.name),
                || client.create_config_store(&store.name),
            )?;

            for entry in &store.entries {
                remote_step(
                    progress,
                    &format!("Creating config store entry '{}'...", entry.name),
                    || format!("error creating config store entry '{}' in '{}'", entry.name, store.name),
                    || client.create_config_store_item(&remote.id, &entry.name, entry.value.expose()),
                )?;
            }

            link_to_service(&self.ctx, progress, KIND, &remote)?;
        }

        Ok(())
    }
}
