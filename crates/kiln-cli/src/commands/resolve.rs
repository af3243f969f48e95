//! Resolve command implementation.

use std::fs;

use kiln_config::{to_host_json, to_host_module, BuildConfig};

use crate::cli::{OutputFormat, ResolveArgs};
use crate::commands::utils;
use crate::error::{Result, ResultExt};
use crate::ui;

/// Execute the resolve command.
pub fn execute(args: ResolveArgs) -> Result<()> {
    let (_, config) = utils::load_config(&args.mode)?;
    let rendered = render(&config, args.format)?;

    match &args.output {
        Some(path) => {
            if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
                fs::create_dir_all(parent).with_path(parent)?;
            }
            fs::write(path, &rendered).with_path(path)?;
            ui::success(&format!(
                "Wrote {} configuration to {}",
                config.mode,
                path.display()
            ));
        }
        None => print!("{rendered}"),
    }

    Ok(())
}

/// Render the configuration in the requested format, newline-terminated.
pub fn render(config: &BuildConfig, format: OutputFormat) -> Result<String> {
    let mut text = match format {
        OutputFormat::Json => serde_json::to_string_pretty(config)?,
        OutputFormat::Toml => toml::to_string_pretty(config)?,
        OutputFormat::Host => to_host_json(config)?,
        OutputFormat::Module => to_host_module(config),
    };
    if !text.ends_with('\n') {
        text.push('\n');
    }
    Ok(text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use kiln_config::{resolve, Mode};

    #[test]
    fn json_output_is_the_record() {
        let config = resolve(Mode::Development);
        let text = render(&config, OutputFormat::Json).unwrap();
        let parsed: BuildConfig = serde_json::from_str(&text).unwrap();
        assert_eq!(parsed, config);
    }

    #[test]
    fn toml_output_contains_dev_server() {
        let text = render(&resolve(Mode::Production), OutputFormat::Toml).unwrap();
        assert!(text.contains("[dev_server]"));
        assert!(text.contains("port = 5000"));
    }

    #[test]
    fn module_output_is_newline_terminated_once() {
        let text = render(&resolve(Mode::Production), OutputFormat::Module).unwrap();
        assert!(text.ends_with("};\n"));
        assert!(!text.ends_with("\n\n"));
    }
}
