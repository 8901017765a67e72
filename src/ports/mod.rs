mod progress_sink;
mod prompt_reader;
mod resource_client;

pub use progress_sink::ProgressSink;
pub use prompt_reader::{PromptReader, PromptRequest};
pub use resource_client::{LinkRequest, RemoteLink, RemoteStore, ResourceClient};
