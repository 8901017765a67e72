use std::io;

/// A single line of operator input to collect.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PromptRequest {
    /// Prompt label shown before the cursor.
    pub label: String,
    /// Optional explanatory text shown above the prompt.
    pub description: Option<String>,
    /// Suppress echo of typed characters.
    pub masked: bool,
    /// Value returned when the operator submits an empty line.
    pub default: Option<String>,
}

impl PromptRequest {
    pub fn masked(label: impl Into<String>, description: Option<&str>) -> Self {
        Self {
            label: label.into(),
            description: description.map(ToOwned::to_owned),
            masked: true,
            default: None,
        }
    }

    pub fn plain(label: impl Into<String>, description: Option<&str>, default: Option<&str>) -> Self {
        Self {
            label: label.into(),
            description: description.map(ToOwned::to_owned),
            masked: false,
            default: default.map(ToOwned::to_owned),
        }
    }
}

/// Port for interactive operator input.
pub trait PromptReader {
    /// Show a heading, optionally followed by a description.
    fn announce(&self, title: &str, description: Option<&str>);

    /// Read one line. Masked reads never echo and never apply a default.
    fn read_line(&self, request: &PromptRequest) -> io::Result<String>;
}
