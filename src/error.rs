//! Error types for kafka-compose
//!
//! Uses `thiserror` for library errors; the binary wraps them in `anyhow`.

use std::path::PathBuf;
use thiserror::Error;

use crate::domain::value_objects::ServiceKind;

/// Result type alias for kafka-compose operations
pub type ComposeResult<T> = Result<T, ComposeError>;

/// Main error type for kafka-compose operations
#[derive(Error, Debug)]
pub enum ComposeError {
    /// The same raw address token appears twice in one input list
    #[error("duplicate {kind} address '{token}'")]
    DuplicateAddress { kind: ServiceKind, token: String },

    /// Address token is not `host` or `host:port`
    #[error("malformed address '{token}': {reason}")]
    MalformedAddress { token: String, reason: String },

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// YAML serialization error
    #[error("YAML serialization error: {0}")]
    Yaml(#[from] serde_yaml_ng::Error),

    /// Configuration file could not be loaded
    #[error("invalid configuration in {file}: {message}")]
    Config { file: PathBuf, message: String },
}

impl ComposeError {
    /// Stable machine-readable code used by JSON output.
    pub fn code(&self) -> &'static str {
        match self {
            ComposeError::DuplicateAddress { .. } => "duplicate_address",
            ComposeError::MalformedAddress { .. } => "malformed_address",
            ComposeError::Io(_) => "io",
            ComposeError::Yaml(_) => "yaml",
            ComposeError::Config { .. } => "config",
        }
    }

    pub(crate) fn malformed(token: &str, reason: impl Into<String>) -> Self {
        ComposeError::MalformedAddress {
            token: token.to_string(),
            reason: reason.into(),
        }
    }
}
