//! Resolved build configuration record and its parts.

mod matcher;
mod plugin;
mod rule;
mod step;

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::path::{Path, PathBuf};

pub use matcher::RuleMatcher;
pub use plugin::{ChunkSplitting, Optimization, PluginDescriptor};
pub use rule::{ProcessingRule, RuleFamily};
pub use step::{BabelPreset, ProcessingStep};

use crate::dev::DevServer;
use crate::error::{ConfigError, Result};
use crate::filename::filename_pattern;
use crate::mode::Mode;

/// Everything the host needs for one build, derived from a [`Mode`].
///
/// Built once by [`crate::resolve`] and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BuildConfig {
    /// Mode every conditional field was computed for
    pub mode: Mode,

    /// Mode reported to the host.
    ///
    /// Always [`Mode::Development`], even for production builds. Not derived
    /// from `mode`; see [`BuildConfig::has_mode_discrepancy`].
    pub bundler_mode: Mode,

    /// Name of the entry chunk
    pub entry_name: String,

    /// Modules of the entry chunk, in load order
    /// (relative paths or package specifiers)
    pub entry_points: Vec<String>,

    /// Output directory, relative to the project root
    pub output_path: PathBuf,

    /// Filename pattern of emitted scripts
    pub output_filename: String,

    /// Extensions tried for extensionless imports
    pub resolve_extensions: Vec<String>,

    pub rules: Vec<ProcessingRule>,

    pub plugins: Vec<PluginDescriptor>,

    pub dev_server: DevServer,

    pub optimization: Optimization,
}

impl BuildConfig {
    /// Filename pattern for any output extension under this config's mode.
    pub fn filename_pattern(&self, ext: &str) -> String {
        filename_pattern(self.mode, ext)
    }

    /// True when the host is told a different mode than the one the rest of
    /// the config was computed for.
    pub fn has_mode_discrepancy(&self) -> bool {
        self.mode != self.bundler_mode
    }

    /// Output directory joined onto a project root.
    pub fn output_path_in(&self, root: impl AsRef<Path>) -> PathBuf {
        root.as_ref().join(&self.output_path)
    }

    pub fn rule(&self, family: RuleFamily) -> Option<&ProcessingRule> {
        self.rules.iter().find(|rule| rule.family == family)
    }

    /// Compile the rule list for path lookups.
    pub fn matcher(&self) -> Result<RuleMatcher<'_>> {
        RuleMatcher::new(&self.rules)
    }

    pub fn html_plugin(&self) -> Option<&PluginDescriptor> {
        self.plugins
            .iter()
            .find(|p| matches!(p, PluginDescriptor::HtmlGeneration { .. }))
    }

    /// Convert to serde_json::Value (the record itself, not the host shape)
    pub fn to_value(&self) -> Result<Value> {
        serde_json::to_value(self).map_err(|e| ConfigError::Serialization(e.to_string()))
    }

    /// Create from serde_json::Value, e.g. a previously dumped record
    pub fn from_value(value: Value) -> Result<Self> {
        serde_json::from_value(value).map_err(|e| ConfigError::InvalidValue {
            field: "config".to_string(),
            hint: Some(e.to_string()),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::resolve;

    #[test]
    fn value_roundtrip_preserves_record() {
        let config = resolve(Mode::Production);
        let value = config.to_value().unwrap();
        assert_eq!(value["mode"], "production");
        assert_eq!(value["bundler_mode"], "development");
        assert_eq!(BuildConfig::from_value(value).unwrap(), config);
    }

    #[test]
    fn from_value_rejects_garbage() {
        let err = BuildConfig::from_value(serde_json::json!({ "mode": 1 })).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidValue { .. }));
    }

    #[test]
    fn output_path_is_joined_onto_root() {
        let config = resolve(Mode::Development);
        assert_eq!(
            config.output_path_in("/project"),
            PathBuf::from("/project/dist")
        );
    }
}
