//! Pluggable config validation strategies
//!
//! Separates structural checks of a resolved [`BuildConfig`] from checks
//! that need the project on disk.

use std::path::{Path, PathBuf};

use crate::bundle::{BuildConfig, PluginDescriptor, ProcessingStep, RuleFamily, RuleMatcher};
use crate::error::{ConfigError, Result};
use crate::filename::{CONTENT_HASH_TOKEN, NAME_TOKEN};

/// Trait for pluggable config validation strategies
pub trait ConfigValidator {
    fn validate(&self, config: &BuildConfig) -> Result<()>;
}

/// Structural validation (no filesystem checks)
///
/// Holds for every config produced by [`crate::resolve`]; useful when a
/// config was deserialized or edited by hand.
///
/// # Example
///
/// ```
/// use kiln_config::{resolve, ConfigValidator, Mode, SchemaValidator};
///
/// SchemaValidator.validate(&resolve(Mode::Production)).unwrap();
/// ```
pub struct SchemaValidator;

impl ConfigValidator for SchemaValidator {
    fn validate(&self, config: &BuildConfig) -> Result<()> {
        validate_entries(config)?;
        validate_rules(config)?;
        validate_plugins(config)?;

        if config.dev_server.port == 0 {
            return Err(ConfigError::schema(
                "dev server port cannot be 0",
                "Set 'port' to a value between 1 and 65535",
            ));
        }

        if config.dev_server.hot != config.mode.is_development() {
            return Err(ConfigError::schema(
                format!("hot reload does not match {} mode", config.mode),
                "The dev server hot-reloads in development only",
            ));
        }

        validate_filename(config, "output_filename", &config.output_filename)?;
        Ok(())
    }
}

/// `[name]` always; `[contenthash]` exactly in production.
fn validate_filename(config: &BuildConfig, field: &str, pattern: &str) -> Result<()> {
    if !pattern.contains(NAME_TOKEN) {
        return Err(ConfigError::schema(
            format!("{field} '{pattern}' has no {NAME_TOKEN} placeholder"),
            "Every emitted file needs its chunk name",
        ));
    }
    if pattern.contains(CONTENT_HASH_TOKEN) != config.mode.is_production() {
        return Err(ConfigError::schema(
            format!("{field} '{pattern}' does not match {} mode", config.mode),
            format!("Expected a pattern like '{}'", config.filename_pattern("ext")),
        ));
    }
    Ok(())
}

fn validate_entries(config: &BuildConfig) -> Result<()> {
    if config.entry_name.trim().is_empty() {
        return Err(ConfigError::schema(
            "entry name cannot be empty",
            "Set 'entry_name', e.g. \"main\"",
        ));
    }
    if config.entry_points.is_empty() {
        return Err(ConfigError::schema(
            "no entry points specified",
            "Add at least one module to 'entry_points'",
        ));
    }
    if config.entry_points.iter().any(|e| e.trim().is_empty()) {
        return Err(ConfigError::schema(
            "entry points cannot be empty strings",
            "Remove empty strings from 'entry_points'",
        ));
    }
    Ok(())
}

fn validate_rules(config: &BuildConfig) -> Result<()> {
    for family in RuleFamily::ALL {
        let count = config.rules.iter().filter(|r| r.family == family).count();
        if count != 1 {
            return Err(ConfigError::schema(
                format!("expected exactly one '{family}' rule, found {count}"),
                "Each file family must be handled by a single rule",
            ));
        }
    }

    let css_len = config
        .rule(RuleFamily::Css)
        .map_or(0, |rule| rule.steps.len());

    for rule in config.rules.iter().filter(|r| r.family.is_stylesheet()) {
        let prefix_ok = matches!(
            rule.steps.as_slice(),
            [ProcessingStep::ExtractStyles { .. }, ProcessingStep::Css, ..]
        );
        if !prefix_ok {
            return Err(ConfigError::schema(
                format!("'{}' rule must start with the style extractor and css-loader", rule.family),
                "Style chains run right to left; the extractor goes first",
            ));
        }

        if let Some(ProcessingStep::ExtractStyles { hmr, .. }) = rule.steps.first() {
            if *hmr != config.mode.is_development() {
                return Err(ConfigError::schema(
                    format!("'{}' rule style hot reload does not match {} mode", rule.family, config.mode),
                    "The style extractor hot-reloads in development only",
                ));
            }
        }

        if !rule.steps[2..].iter().all(ProcessingStep::is_preprocessor) {
            return Err(ConfigError::schema(
                format!("'{}' rule has a non-preprocessor step after css-loader", rule.family),
                "Only the LESS or SASS preprocessor may follow css-loader",
            ));
        }

        let expected = if rule.family == RuleFamily::Css {
            css_len
        } else {
            css_len + 1
        };
        if rule.steps.len() != expected {
            return Err(ConfigError::schema(
                format!(
                    "'{}' rule has {} steps, expected {expected}",
                    rule.family,
                    rule.steps.len()
                ),
                "Preprocessed style sheets add exactly one preprocessor step",
            ));
        }
    }

    for rule in config.rules.iter().filter(|r| r.family.is_script()) {
        if !matches!(rule.steps.as_slice(), [ProcessingStep::Babel { .. }]) {
            return Err(ConfigError::schema(
                format!("'{}' rule must be a single babel-loader step", rule.family),
                "Scripts are transpiled by babel-loader only",
            ));
        }
        if rule.exclude.is_none() {
            return Err(ConfigError::schema(
                format!("'{}' rule does not exclude the dependency directory", rule.family),
                "Set 'exclude' so installed packages are not transpiled",
            ));
        }
    }

    RuleMatcher::new(&config.rules)?;
    Ok(())
}

fn validate_plugins(config: &BuildConfig) -> Result<()> {
    let html = config
        .plugins
        .iter()
        .filter(|p| matches!(p, PluginDescriptor::HtmlGeneration { .. }))
        .count();
    let extract = config
        .plugins
        .iter()
        .filter(|p| matches!(p, PluginDescriptor::CssExtract { .. }))
        .count();

    if html != 1 || extract != 1 {
        return Err(ConfigError::schema(
            format!("expected one HTML and one CSS extraction plugin, found {html} and {extract}"),
            "Remove duplicated plugin descriptors",
        ));
    }

    for plugin in &config.plugins {
        match plugin {
            PluginDescriptor::HtmlGeneration {
                collapse_whitespace, ..
            } if *collapse_whitespace != config.mode.is_production() => {
                return Err(ConfigError::schema(
                    format!("HTML whitespace collapsing does not match {} mode", config.mode),
                    "Generated HTML is minified in production only",
                ));
            }
            PluginDescriptor::CssExtract { filename } => {
                validate_filename(config, "CSS extraction filename", filename)?;
            }
            _ => {}
        }
    }

    if config.optimization.minimizers.is_empty() != config.mode.is_development() {
        return Err(ConfigError::schema(
            format!("minimizers do not match {} mode", config.mode),
            "Minimizers run in production builds only",
        ));
    }

    if let Some(p) = config.optimization.minimizers.iter().find(|p| !p.is_minimizer()) {
        return Err(ConfigError::schema(
            format!("'{}' is not a minimizer", p.package_name()),
            "Move it to 'plugins'",
        ));
    }

    Ok(())
}

/// Filesystem validator (for CLI use)
///
/// Runs [`SchemaValidator`] first, then checks that local entry modules and
/// the HTML template exist under `root`. Package specifiers such as
/// `@babel/polyfill` are left to the host's resolver.
pub struct FsValidator {
    root: PathBuf,
}

impl FsValidator {
    pub fn new(root: impl AsRef<Path>) -> Self {
        Self {
            root: root.as_ref().to_path_buf(),
        }
    }
}

impl ConfigValidator for FsValidator {
    fn validate(&self, config: &BuildConfig) -> Result<()> {
        SchemaValidator.validate(config)?;

        for entry in &config.entry_points {
            if !is_local_module(entry) {
                tracing::debug!(entry = %entry, "skipping package specifier");
                continue;
            }
            let path = self.root.join(entry);
            if !path.exists() {
                return Err(ConfigError::EntryNotFound { path });
            }
        }

        if let Some(PluginDescriptor::HtmlGeneration { template, .. }) = config.html_plugin() {
            let path = self.root.join(template);
            if !path.exists() {
                return Err(ConfigError::TemplateNotFound { path });
            }
        }

        Ok(())
    }
}

/// Relative or absolute path, as opposed to a package specifier.
fn is_local_module(entry: &str) -> bool {
    entry.starts_with("./") || entry.starts_with("../") || Path::new(entry).is_absolute()
}

/// Convenience function for schema-only validation
pub fn validate_schema(config: &BuildConfig) -> Result<()> {
    SchemaValidator.validate(config)
}

/// Convenience function for filesystem validation
pub fn validate_fs(config: &BuildConfig, root: impl AsRef<Path>) -> Result<()> {
    FsValidator::new(root).validate(config)
}
