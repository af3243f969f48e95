//! Miette diagnostic conversion for CLI errors.

use ::miette::Report;

use crate::error::{CliError, ConfigError};

/// Convert CliError to miette Report
pub fn cli_error_to_miette(err: CliError) -> Report {
    match err {
        CliError::Config(e) => config_error_to_miette(e),
        CliError::FileNotFound(path) => ::miette::miette!(
            help = "Check the path or run from the project root",
            "File not found: {}",
            path.display()
        ),
        _ => ::miette::miette!("{}", err),
    }
}

/// Convert ConfigError to miette Report
pub fn config_error_to_miette(err: ConfigError) -> Report {
    match err {
        ConfigError::EntryNotFound { path } => ::miette::miette!(
            help = "Check 'entry_points' in kiln.toml",
            "Entry point not found: {}",
            path.display()
        ),
        ConfigError::TemplateNotFound { path } => ::miette::miette!(
            help = "Check 'template' in kiln.toml",
            "HTML template not found: {}",
            path.display()
        ),
        ConfigError::InvalidValue { field, hint } => match hint {
            Some(hint) => ::miette::miette!(help = hint, "Invalid value for '{}'", field),
            None => ::miette::miette!("Invalid value for '{}'", field),
        },
        other => ::miette::miette!("Configuration error: {}", other),
    }
}
