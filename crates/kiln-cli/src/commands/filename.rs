//! Filename command implementation.

use std::fs;

use kiln_config::{content_hash, render_filename};

use crate::cli::FilenameArgs;
use crate::commands::utils;
use crate::error::{CliError, Result, ResultExt};

/// Execute the filename command.
pub fn execute(args: FilenameArgs) -> Result<()> {
    let ext = args.ext.trim_start_matches('.');
    if ext.is_empty() || !ext.chars().all(|c| c.is_ascii_alphanumeric()) {
        return Err(CliError::InvalidArgument(format!(
            "'{}' is not a file extension",
            args.ext
        )));
    }

    let mode = utils::mode_from_process(&args.mode);
    let pattern = kiln_config::filename_pattern(mode, ext);

    let line = match &args.file {
        Some(path) => {
            let contents = fs::read(path).with_path(path)?;
            let hash = content_hash(&contents);
            tracing::debug!(path = %path.display(), hash = %hash, "hashed emitted file");
            render_filename(&pattern, &args.name, Some(&hash))
        }
        None => pattern,
    };

    println!("{line}");
    Ok(())
}
