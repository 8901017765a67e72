/// Operating mode flags supplied by the caller.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SetupMode {
    pub accept_defaults: bool,
    pub non_interactive: bool,
}

impl SetupMode {
    pub fn interactive() -> Self {
        Self::default()
    }

    pub fn non_interactive() -> Self {
        Self { accept_defaults: false, non_interactive: true }
    }

    /// Whether configure may ask the operator for values.
    pub fn prompts(&self) -> bool {
        !self.accept_defaults && !self.non_interactive
    }
}
