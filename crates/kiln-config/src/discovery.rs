//! File-based option discovery for CLI use
//!
//! Finds the project's option file and layers it with the environment:
//! defaults < `kiln.toml` / `package.json#kiln` < `KILN_*` variables.

use std::fs;
use std::path::{Path, PathBuf};

use figment::providers::{Env, Format, Serialized, Toml};
use figment::Figment;
use serde_json::Value;

use crate::error::{ConfigError, Result};
use crate::options::ResolveOptions;

pub const CONFIG_FILE: &str = "kiln.toml";
pub const PACKAGE_JSON_FIELD: &str = "kiln";
pub const ENV_PREFIX: &str = "KILN_";

/// File-based option discovery
///
/// # Example
///
/// ```no_run
/// use kiln_config::ConfigDiscovery;
///
/// let options = ConfigDiscovery::new(".").load().unwrap();
/// println!("dev server on port {}", options.port);
/// ```
pub struct ConfigDiscovery {
    root: PathBuf,
}

impl ConfigDiscovery {
    pub fn new(root: impl AsRef<Path>) -> Self {
        Self {
            root: root.as_ref().to_path_buf(),
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Find an option file in the root directory
    ///
    /// Searches in this order:
    /// 1. kiln.toml
    /// 2. package.json (kiln field)
    pub fn find(&self) -> Option<PathBuf> {
        let toml_path = self.root.join(CONFIG_FILE);
        if toml_path.exists() {
            return Some(toml_path);
        }

        let pkg_path = self.root.join("package.json");
        if let Ok(content) = fs::read_to_string(&pkg_path) {
            if let Ok(parsed) = serde_json::from_str::<Value>(&content) {
                if parsed.get(PACKAGE_JSON_FIELD).is_some_and(|v| !v.is_null()) {
                    return Some(pkg_path);
                }
            }
        }

        None
    }

    /// Load options, falling back to defaults when no file exists.
    pub fn load(&self) -> Result<ResolveOptions> {
        let found = self.find();
        match &found {
            Some(path) => tracing::debug!(path = %path.display(), "loading options"),
            None => tracing::debug!(root = %self.root.display(), "no option file, using defaults"),
        }
        self.figment(found.as_deref())?.extract().map_err(|e| ConfigError::InvalidValue {
            field: e.path.join("."),
            hint: Some(e.kind.to_string()),
        })
    }

    /// Load options from a specific file, which must exist.
    ///
    /// A file named `package.json` contributes its `kiln` field; any other
    /// file is read as TOML.
    pub fn load_from(&self, path: &Path) -> Result<ResolveOptions> {
        if !path.exists() {
            return Err(ConfigError::NotFound);
        }
        self.figment(Some(path))?.extract().map_err(|e| ConfigError::InvalidValue {
            field: e.path.join("."),
            hint: Some(e.kind.to_string()),
        })
    }

    fn figment(&self, file: Option<&Path>) -> Result<Figment> {
        let mut figment = Figment::new().merge(Serialized::defaults(ResolveOptions::default()));

        if let Some(path) = file {
            figment = if path.file_name() == Some(std::ffi::OsStr::new("package.json")) {
                figment.merge(Serialized::defaults(package_json_field(path)?))
            } else {
                figment.merge(Toml::file(path))
            };
        }

        Ok(figment.merge(Env::prefixed(ENV_PREFIX)))
    }
}

fn package_json_field(path: &Path) -> Result<Value> {
    let content = fs::read_to_string(path)?;
    let parsed: Value = serde_json::from_str(&content).map_err(|e| ConfigError::InvalidValue {
        field: "package.json".to_string(),
        hint: Some(format!("Invalid JSON: {e}")),
    })?;

    match parsed.get(PACKAGE_JSON_FIELD) {
        Some(value) if !value.is_null() => Ok(value.clone()),
        _ => Err(ConfigError::InvalidValue {
            field: PACKAGE_JSON_FIELD.to_string(),
            hint: Some("Add a 'kiln' object to your package.json".to_string()),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn find_returns_none_when_no_config() {
        let dir = TempDir::new().unwrap();
        assert!(ConfigDiscovery::new(dir.path()).find().is_none());
    }

    #[test]
    fn find_prefers_toml_over_package_json() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join(CONFIG_FILE), "port = 3000\n").unwrap();
        fs::write(dir.path().join("package.json"), r#"{"kiln": {"port": 4000}}"#).unwrap();

        let found = ConfigDiscovery::new(dir.path()).find().unwrap();
        assert_eq!(found.file_name().unwrap(), CONFIG_FILE);
    }

    #[test]
    fn package_json_without_field_is_ignored() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("package.json"), r#"{"name": "app", "kiln": null}"#).unwrap();
        assert!(ConfigDiscovery::new(dir.path()).find().is_none());
    }

    #[test]
    fn load_from_missing_file_is_not_found() {
        let dir = TempDir::new().unwrap();
        let discovery = ConfigDiscovery::new(dir.path());
        let err = discovery.load_from(&dir.path().join("nope.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::NotFound));
    }

    #[test]
    fn load_from_reads_any_named_toml_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("kiln.staging.toml");
        fs::write(&path, "port = 7000\nentry_name = \"app\"\n").unwrap();

        let options = ConfigDiscovery::new(dir.path()).load_from(&path).unwrap();
        assert_eq!(options.port, 7000);
        assert_eq!(options.entry_name, "app");
    }
}
