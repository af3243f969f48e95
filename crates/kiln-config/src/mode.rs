//! Build mode selection.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Environment variable that selects the build mode.
pub const NODE_ENV: &str = "NODE_ENV";

/// Development/production selector driving every conditional choice of the resolver.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    Development,
    /// Anything that is not explicitly development builds for production.
    #[default]
    Production,
}

impl Mode {
    /// Map a raw `NODE_ENV` value to a mode.
    ///
    /// Only the exact string `"development"` selects [`Mode::Development`];
    /// any other value, including an absent variable, selects production.
    ///
    /// ```
    /// use kiln_config::Mode;
    ///
    /// assert_eq!(Mode::from_node_env(Some("development")), Mode::Development);
    /// assert_eq!(Mode::from_node_env(Some("staging")), Mode::Production);
    /// assert_eq!(Mode::from_node_env(None), Mode::Production);
    /// ```
    pub fn from_node_env(value: Option<&str>) -> Self {
        match value {
            Some("development") => Mode::Development,
            _ => Mode::Production,
        }
    }

    pub fn is_development(self) -> bool {
        self == Mode::Development
    }

    pub fn is_production(self) -> bool {
        self == Mode::Production
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Mode::Development => "development",
            Mode::Production => "production",
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Mode {
    type Err = String;

    /// Strict parser for explicit user input (e.g. `--mode`), unlike
    /// [`Mode::from_node_env`] which never fails.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "development" | "dev" => Ok(Mode::Development),
            "production" | "prod" => Ok(Mode::Production),
            other => Err(format!(
                "unknown mode '{other}', expected 'development' or 'production'"
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn node_env_is_case_sensitive() {
        assert_eq!(Mode::from_node_env(Some("Development")), Mode::Production);
        assert_eq!(Mode::from_node_env(Some("")), Mode::Production);
    }

    #[test]
    fn from_str_accepts_short_names() {
        assert_eq!("dev".parse::<Mode>().unwrap(), Mode::Development);
        assert_eq!(" PROD ".parse::<Mode>().unwrap(), Mode::Production);
        assert!("test".parse::<Mode>().is_err());
    }

    #[test]
    fn serializes_lowercase() {
        assert_eq!(
            serde_json::to_value(Mode::Development).unwrap(),
            serde_json::json!("development")
        );
        assert_eq!(Mode::Production.to_string(), "production");
    }
}
