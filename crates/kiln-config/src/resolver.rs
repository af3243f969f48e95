//! Mode → [`BuildConfig`] resolution.
//!
//! Pure and total: no I/O, no environment access, no failure paths. The
//! caller decides the mode (see [`Mode::from_node_env`]) and passes it in.

use crate::bundle::{
    BabelPreset, BuildConfig, ChunkSplitting, Optimization, PluginDescriptor, ProcessingRule,
    ProcessingStep, RuleFamily,
};
use crate::dev::DevServer;
use crate::filename::filename_pattern;
use crate::mode::Mode;
use crate::options::ResolveOptions;

/// Resolve the stock configuration for `mode`.
///
/// # Example
///
/// ```
/// use kiln_config::{resolve, Mode};
///
/// let dev = resolve(Mode::Development);
/// assert_eq!(dev.filename_pattern("js"), "[name].js");
/// assert!(dev.dev_server.hot);
/// assert!(dev.optimization.minimizers.is_empty());
///
/// let prod = resolve(Mode::Production);
/// assert_eq!(prod.filename_pattern("css"), "[name].[contenthash].css");
/// assert_eq!(prod.optimization.minimizers.len(), 2);
/// ```
pub fn resolve(mode: Mode) -> BuildConfig {
    resolve_with(mode, &ResolveOptions::default())
}

/// Resolve with project-level overrides.
pub fn resolve_with(mode: Mode, options: &ResolveOptions) -> BuildConfig {
    BuildConfig {
        mode,
        bundler_mode: Mode::Development,
        entry_name: options.entry_name.clone(),
        entry_points: options.entry_points.clone(),
        output_path: options.output_dir.clone(),
        output_filename: filename_pattern(mode, "js"),
        resolve_extensions: options.extensions.clone(),
        rules: rules(mode, &options.dependency_dir),
        plugins: plugins(mode, options),
        dev_server: DevServer {
            port: options.port,
            hot: mode.is_development(),
        },
        optimization: Optimization {
            split_chunks: ChunkSplitting::All,
            minimizers: minimizers(mode),
        },
    }
}

/// `[extract, css-loader]` plus the family's preprocessor, if any.
fn stylesheet_steps(mode: Mode, preprocessor: Option<ProcessingStep>) -> Vec<ProcessingStep> {
    [
        ProcessingStep::ExtractStyles {
            hmr: mode.is_development(),
            reload_all: true,
        },
        ProcessingStep::Css,
    ]
    .into_iter()
    .chain(preprocessor)
    .collect()
}

fn babel(presets: &[BabelPreset]) -> Vec<ProcessingStep> {
    vec![ProcessingStep::Babel {
        presets: presets.to_vec(),
    }]
}

fn rules(mode: Mode, dependency_dir: &str) -> Vec<ProcessingRule> {
    let exclude = regex::escape(dependency_dir);

    RuleFamily::ALL
        .into_iter()
        .map(|family| match family {
            RuleFamily::Css => ProcessingRule::new(family, stylesheet_steps(mode, None)),
            RuleFamily::Less => {
                ProcessingRule::new(family, stylesheet_steps(mode, Some(ProcessingStep::Less)))
            }
            RuleFamily::Sass => {
                ProcessingRule::new(family, stylesheet_steps(mode, Some(ProcessingStep::Sass)))
            }
            RuleFamily::Images => ProcessingRule::new(family, vec![ProcessingStep::File]),
            RuleFamily::Js => {
                ProcessingRule::new(family, babel(&[BabelPreset::Env])).excluding(exclude.clone())
            }
            RuleFamily::Jsx => {
                ProcessingRule::new(family, babel(&[BabelPreset::Env, BabelPreset::React]))
                    .excluding(exclude.clone())
            }
        })
        .collect()
}

fn plugins(mode: Mode, options: &ResolveOptions) -> Vec<PluginDescriptor> {
    vec![
        PluginDescriptor::HtmlGeneration {
            template: options.template.clone(),
            collapse_whitespace: mode.is_production(),
        },
        PluginDescriptor::Clean,
        PluginDescriptor::CssExtract {
            filename: filename_pattern(mode, "css"),
        },
    ]
}

fn minimizers(mode: Mode) -> Vec<PluginDescriptor> {
    match mode {
        Mode::Development => Vec::new(),
        Mode::Production => vec![PluginDescriptor::CssMinimizer, PluginDescriptor::JsMinimizer],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bundler_mode_is_always_development() {
        assert_eq!(resolve(Mode::Production).bundler_mode, Mode::Development);
        assert!(resolve(Mode::Production).has_mode_discrepancy());
        assert!(!resolve(Mode::Development).has_mode_discrepancy());
    }

    #[test]
    fn extract_step_follows_mode() {
        let dev = resolve(Mode::Development);
        let prod = resolve(Mode::Production);

        let first = |config: &BuildConfig| config.rule(RuleFamily::Css).unwrap().steps[0].clone();
        assert_eq!(
            first(&dev),
            ProcessingStep::ExtractStyles {
                hmr: true,
                reload_all: true
            }
        );
        assert_eq!(
            first(&prod),
            ProcessingStep::ExtractStyles {
                hmr: false,
                reload_all: true
            }
        );
    }

    #[test]
    fn html_whitespace_collapses_only_in_production() {
        let collapse = |mode| match resolve(mode).html_plugin() {
            Some(PluginDescriptor::HtmlGeneration {
                collapse_whitespace,
                ..
            }) => *collapse_whitespace,
            other => panic!("unexpected html plugin: {other:?}"),
        };
        assert!(!collapse(Mode::Development));
        assert!(collapse(Mode::Production));
    }

    #[test]
    fn options_flow_into_config() {
        let options = ResolveOptions::default()
            .with_port(8080)
            .with_output_dir("build");
        let config = resolve_with(Mode::Development, &options);

        assert_eq!(config.dev_server.port, 8080);
        assert_eq!(config.output_path, std::path::PathBuf::from("build"));
    }

    #[test]
    fn dependency_dir_is_escaped() {
        let options = ResolveOptions {
            dependency_dir: "web.modules".to_string(),
            ..ResolveOptions::default()
        };
        let config = resolve_with(Mode::Development, &options);
        assert_eq!(
            config.rule(RuleFamily::Js).unwrap().exclude.as_deref(),
            Some(r"web\.modules")
        );
    }
}
