use crate::domain::SetupMode;
use crate::ports::{ProgressSink, PromptReader, ResourceClient};

/// Service version that provisioned resources are linked to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceTarget {
    pub service_id: String,
    pub service_version: u32,
}

impl ServiceTarget {
    pub fn new(service_id: impl Into<String>, service_version: u32) -> Self {
        Self { service_id: service_id.into(), service_version }
    }
}

/// Collaborators shared by every provisioner in one run.
///
/// All ports are borrowed; a run is single-threaded so none of them need
/// synchronization beyond what their own `&self` methods require.
#[derive(Clone, Copy)]
pub struct AppContext<'a> {
    client: &'a dyn ResourceClient,
    prompt: &'a dyn PromptReader,
    progress: Option<&'a dyn ProgressSink>,
    target: &'a ServiceTarget,
    mode: SetupMode,
}

impl<'a> AppContext<'a> {
    /// Create a new context without a progress sink attached.
    pub fn new(
        client: &'a dyn ResourceClient,
        prompt: &'a dyn PromptReader,
        target: &'a ServiceTarget,
        mode: SetupMode,
    ) -> Self {
        Self { client, prompt, progress: None, target, mode }
    }

    /// Attach the progress sink required by create.
    pub fn with_progress(mut self, progress: &'a dyn ProgressSink) -> Self {
        self.progress = Some(progress);
        self
    }

    pub fn client(&self) -> &'a dyn ResourceClient {
        self.client
    }

    pub fn prompt(&self) -> &'a dyn PromptReader {
        self.prompt
    }

    pub fn progress(&self) -> Option<&'a dyn ProgressSink> {
        self.progress
    }

    pub fn target(&self) -> &'a ServiceTarget {
        self.target
    }

    pub fn mode(&self) -> SetupMode {
        self.mode
    }
}
