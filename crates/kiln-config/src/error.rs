//! Error types for option loading, rule compilation and validation.

use std::path::PathBuf;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, ConfigError>;

#[derive(Debug, Error)]
pub enum ConfigError {
    // Filesystem validation errors (for CLI use)
    #[error("entry point not found: {}", path.display())]
    EntryNotFound { path: PathBuf },

    #[error("HTML template not found: {}", path.display())]
    TemplateNotFound { path: PathBuf },

    // Option loading errors
    #[error("config not found")]
    NotFound,

    #[error("invalid config value for '{field}'{}", hint.as_ref().map(|h| format!(": {h}")).unwrap_or_default())]
    InvalidValue { field: String, hint: Option<String> },

    // Rule compilation errors
    #[error("invalid rule pattern '{pattern}': {source}")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: regex::Error,
    },

    // Schema validation errors (no filesystem checks)
    #[error("schema validation failed: {message}{}", hint.as_ref().map(|h| format!("\n\nHint: {h}")).unwrap_or_default())]
    SchemaValidation {
        message: String,
        hint: Option<String>,
    },

    #[error("serialization failed: {0}")]
    Serialization(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl ConfigError {
    pub(crate) fn schema(message: impl Into<String>, hint: impl Into<String>) -> Self {
        Self::SchemaValidation {
            message: message.into(),
            hint: Some(hint.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_value_renders_hint() {
        let err = ConfigError::InvalidValue {
            field: "port".to_string(),
            hint: Some("expected an integer".to_string()),
        };
        assert_eq!(
            err.to_string(),
            "invalid config value for 'port': expected an integer"
        );
    }

    #[test]
    fn invalid_value_without_hint() {
        let err = ConfigError::InvalidValue {
            field: "port".to_string(),
            hint: None,
        };
        assert_eq!(err.to_string(), "invalid config value for 'port'");
    }
}
