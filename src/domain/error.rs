use std::io;

use thiserror::Error;

use super::{ProvisionPhase, ResourceKind};

/// Remediation shown for failures that indicate a defect in stowage itself.
pub const BUG_REMEDIATION: &str = "This is a bug in stowage. Please report it together with the command you ran and the output of `RUST_LOG=debug`.";

/// Library-wide error type for stowage operations.
#[derive(Debug, Error)]
pub enum AppError {
    /// Underlying I/O failure.
    #[error(transparent)]
    Io(#[from] io::Error),

    /// Manifest file not found at the given path.
    #[error("Manifest not found: {0}")]
    ManifestMissing(String),

    /// TOML parsing error.
    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),

    /// Configuration value rejected during validation.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// Required environment variable is not set.
    #[error("Environment variable '{0}' is not set")]
    EnvironmentVariableMissing(String),

    /// A resolved entry value was empty.
    #[error("value cannot be blank ({kind} '{resource}', entry '{entry}')")]
    BlankValue { kind: ResourceKind, resource: String, entry: String },

    /// Reading interactive input for an entry failed.
    #[error("error reading prompt input ({kind} '{resource}', entry '{entry}'): {source}")]
    PromptInput {
        kind: ResourceKind,
        resource: String,
        entry: String,
        #[source]
        source: io::Error,
    },

    /// A caller broke an internal contract; never user-correctable.
    #[error("internal logic error: {message}")]
    InternalContract { message: String, remediation: &'static str },

    /// Raw failure reported by the remote API.
    #[error("{message}")]
    Api { message: String, status: Option<u16> },

    /// Remote operation failed; `context` names what was being created.
    #[error("{context}: {source}")]
    Remote {
        context: String,
        #[source]
        source: Box<AppError>,
    },

    /// A provisioner failed and the remaining pipeline was abandoned.
    #[error("{kind} setup failed during {phase}: {source}")]
    Provisioning {
        kind: ResourceKind,
        phase: ProvisionPhase,
        #[source]
        source: Box<AppError>,
    },
}

impl AppError {
    pub fn internal<S: Into<String>>(message: S) -> Self {
        AppError::InternalContract { message: message.into(), remediation: BUG_REMEDIATION }
    }

    pub fn remote<S: Into<String>>(context: S, source: AppError) -> Self {
        AppError::Remote { context: context.into(), source: Box::new(source) }
    }

    /// Remediation hint for bug-class errors, looking through wrappers.
    pub fn remediation(&self) -> Option<&'static str> {
        match self {
            AppError::InternalContract { remediation, .. } => Some(*remediation),
            AppError::Remote { source, .. } | AppError::Provisioning { source, .. } => {
                source.remediation()
            }
            _ => None,
        }
    }

    /// Provide an `io::ErrorKind`-like view of the failure.
    pub fn kind(&self) -> io::ErrorKind {
        match self {
            AppError::Io(err) | AppError::PromptInput { source: err, .. } => err.kind(),
            AppError::TomlParse(_)
            | AppError::InvalidConfig(_)
            | AppError::BlankValue { .. }
            | AppError::EnvironmentVariableMissing(_) => io::ErrorKind::InvalidInput,
            AppError::ManifestMissing(_) => io::ErrorKind::NotFound,
            AppError::Remote { source, .. } | AppError::Provisioning { source, .. } => {
                source.kind()
            }
            AppError::InternalContract { .. } | AppError::Api { .. } => io::ErrorKind::Other,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_value_message_names_entry() {
        let err = AppError::BlankValue {
            kind: ResourceKind::SecretStore,
            resource: "tokens".into(),
            entry: "api-key".into(),
        };
        let message = err.to_string();
        assert!(message.starts_with("value cannot be blank"));
        assert!(message.contains("secret store 'tokens'"));
        assert!(message.contains("api-key"));
        assert_eq!(err.kind(), io::ErrorKind::InvalidInput);
    }

    #[test]
    fn prompt_input_names_store_and_entry() {
        let err = AppError::PromptInput {
            kind: ResourceKind::ConfigStore,
            resource: "routing".into(),
            entry: "origin".into(),
            source: io::Error::new(io::ErrorKind::UnexpectedEof, "stdin closed"),
        };
        assert_eq!(
            err.to_string(),
            "error reading prompt input (config store 'routing', entry 'origin'): stdin closed"
        );
        assert_eq!(err.kind(), io::ErrorKind::UnexpectedEof);
    }

    #[test]
    fn remediation_survives_wrapping() {
        let inner = AppError::internal("no progress sink configured");
        let wrapped = AppError::Provisioning {
            kind: ResourceKind::ConfigStore,
            phase: ProvisionPhase::Create,
            source: Box::new(inner),
        };
        assert_eq!(wrapped.remediation(), Some(BUG_REMEDIATION));
        assert!(wrapped.to_string().contains("internal logic error"));
    }

    #[test]
    fn remote_error_keeps_api_message() {
        let err = AppError::remote(
            "error creating secret store 'tokens'",
            AppError::Api { message: "quota exceeded".into(), status: Some(403) },
        );
        assert_eq!(err.to_string(), "error creating secret store 'tokens': quota exceeded");
        assert_eq!(err.remediation(), None);
    }
}
