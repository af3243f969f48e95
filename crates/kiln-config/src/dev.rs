//! Development server parameters.

use serde::{Deserialize, Serialize};

/// Port the development server listens on unless overridden.
pub const DEFAULT_DEV_PORT: u16 = 5000;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DevServer {
    #[serde(default = "default_port")]
    pub port: u16,

    /// Push hot-reload updates to connected clients
    #[serde(default)]
    pub hot: bool,
}

impl Default for DevServer {
    fn default() -> Self {
        Self {
            port: default_port(),
            hot: false,
        }
    }
}

fn default_port() -> u16 {
    DEFAULT_DEV_PORT
}
