//! Project-level knobs of the resolver.
//!
//! Every field defaults to the conventional single-page React layout, so an
//! empty `kiln.toml` (or none at all) yields the stock configuration.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::dev::DEFAULT_DEV_PORT;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolveOptions {
    /// Name of the entry chunk
    #[serde(default = "default_entry_name")]
    pub entry_name: String,

    /// Modules of the entry chunk, loaded in order
    #[serde(default = "default_entry_points")]
    pub entry_points: Vec<String>,

    /// Output directory, relative to the project root
    #[serde(default = "default_output_dir")]
    pub output_dir: PathBuf,

    /// HTML template for the generated entry page
    #[serde(default = "default_template")]
    pub template: PathBuf,

    /// Development server port
    #[serde(default = "default_port")]
    pub port: u16,

    /// Directory of installed dependencies, never transpiled
    #[serde(default = "default_dependency_dir")]
    pub dependency_dir: String,

    /// Extensions tried when resolving extensionless imports
    #[serde(default = "default_extensions")]
    pub extensions: Vec<String>,
}

impl Default for ResolveOptions {
    fn default() -> Self {
        Self {
            entry_name: default_entry_name(),
            entry_points: default_entry_points(),
            output_dir: default_output_dir(),
            template: default_template(),
            port: default_port(),
            dependency_dir: default_dependency_dir(),
            extensions: default_extensions(),
        }
    }
}

impl ResolveOptions {
    /// Create from serde_json::Value (for programmatic use)
    ///
    /// Missing fields keep their defaults.
    ///
    /// ```
    /// use kiln_config::ResolveOptions;
    /// use serde_json::json;
    ///
    /// let options = ResolveOptions::from_value(json!({ "port": 8080 })).unwrap();
    /// assert_eq!(options.port, 8080);
    /// assert_eq!(options.entry_name, "main");
    /// ```
    pub fn from_value(value: serde_json::Value) -> crate::error::Result<Self> {
        serde_json::from_value(value).map_err(|e| crate::error::ConfigError::InvalidValue {
            field: "options".to_string(),
            hint: Some(e.to_string()),
        })
    }

    pub fn with_port(mut self, port: u16) -> Self {
        self.port = port;
        self
    }

    pub fn with_output_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.output_dir = dir.into();
        self
    }
}

fn default_entry_name() -> String {
    "main".to_string()
}

fn default_entry_points() -> Vec<String> {
    vec!["@babel/polyfill".to_string(), "./src/index.jsx".to_string()]
}

fn default_output_dir() -> PathBuf {
    PathBuf::from("dist")
}

fn default_template() -> PathBuf {
    PathBuf::from("./src/index.html")
}

fn default_port() -> u16 {
    DEFAULT_DEV_PORT
}

fn default_dependency_dir() -> String {
    "node_modules".to_string()
}

fn default_extensions() -> Vec<String> {
    [".js", ".json", ".jsx", ".png", ".jpg"]
        .into_iter()
        .map(String::from)
        .collect()
}
