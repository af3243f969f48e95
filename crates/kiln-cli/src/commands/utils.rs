//! Shared helpers for command implementations.

use std::path::PathBuf;

use kiln_config::{resolve_with, BuildConfig, ConfigDiscovery, Mode, NODE_ENV};

use crate::cli::ModeArgs;
use crate::error::{Result, ResultExt};
use crate::ui;

/// Pick the build mode: the explicit flag wins, then `NODE_ENV`.
///
/// `node_env` is passed in rather than read here so the decision stays
/// testable; [`mode_from_process`] is the only place the variable is read.
pub fn select_mode(args: &ModeArgs, node_env: Option<&str>) -> Mode {
    match args.mode {
        Some(mode) => mode.into(),
        None => Mode::from_node_env(node_env),
    }
}

/// [`select_mode`] with the process environment.
pub fn mode_from_process(args: &ModeArgs) -> Mode {
    let node_env = std::env::var(NODE_ENV).ok();
    select_mode(args, node_env.as_deref())
}

/// Project root: `--cwd`, else the current directory.
pub fn project_root(args: &ModeArgs) -> Result<PathBuf> {
    match &args.cwd {
        Some(dir) => Ok(dir.clone()),
        None => Ok(std::env::current_dir()?),
    }
}

/// Load options for the project and resolve the configuration.
pub fn load_config(args: &ModeArgs) -> Result<(PathBuf, BuildConfig)> {
    let root = project_root(args)?;
    let mode = mode_from_process(args);

    let discovery = ConfigDiscovery::new(&root);
    let options = match &args.config {
        Some(file) => {
            let path = root.join(file);
            discovery
                .load_from(&path)
                .with_hint(format!("Check that {} exists", path.display()))?
        }
        None => discovery.load().context("Failed to load kiln options")?,
    };
    let config = resolve_with(mode, &options);

    tracing::debug!(
        mode = %config.mode,
        root = %root.display(),
        rules = config.rules.len(),
        plugins = config.plugins.len(),
        "resolved configuration"
    );

    if config.has_mode_discrepancy() {
        ui::warning(&format!(
            "host mode is '{}' while the configuration targets '{}'",
            config.bundler_mode, config.mode
        ));
    }

    Ok((root, config))
}
