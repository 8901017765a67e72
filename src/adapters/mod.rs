pub mod manifest_filesystem;
pub mod progress_terminal;
pub mod prompt_dialoguer;
pub mod resource_client_http;

pub use manifest_filesystem::load_manifest;
pub use progress_terminal::TerminalProgress;
pub use prompt_dialoguer::DialoguerPrompt;
pub use resource_client_http::HttpResourceClient;
