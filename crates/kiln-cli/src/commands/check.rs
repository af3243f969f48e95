//! Check command implementation.
//!
//! Validates the resolved configuration without emitting it.

use kiln_config::{ConfigValidator, FsValidator, SchemaValidator};

use crate::cli::CheckArgs;
use crate::commands::utils;
use crate::error::Result;
use crate::ui;

/// Execute the check command.
///
/// # Validation Steps
///
/// 1. Load options and resolve the configuration
/// 2. Check structural invariants
/// 3. Check entry modules and template on disk (if --fs)
pub fn execute(args: CheckArgs) -> Result<()> {
    let (root, config) = utils::load_config(&args.mode)?;
    ui::info(&format!("Checking {} configuration...", config.mode));

    if args.fs {
        FsValidator::new(&root).validate(&config)?;
        ui::success("Project files are present");
    } else {
        SchemaValidator.validate(&config)?;
    }

    ui::success(&format!(
        "{} rules, {} plugins, {} minimizers",
        config.rules.len(),
        config.plugins.len(),
        config.optimization.minimizers.len()
    ));
    ui::success("All checks passed!");
    Ok(())
}
