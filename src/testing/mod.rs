mod fake_resource_client;
mod recording_progress;
mod scripted_prompt;

pub use fake_resource_client::{FakeResourceClient, RemoteCall};
pub use recording_progress::{ProgressEvent, RecordingProgress};
pub use scripted_prompt::ScriptedPrompt;
