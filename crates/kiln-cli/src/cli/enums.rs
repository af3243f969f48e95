use clap::ValueEnum;
use kiln_config::Mode;

/// Build mode as accepted on the command line
#[derive(Copy, Clone, PartialEq, Eq, Debug, ValueEnum)]
pub enum ModeArg {
    /// Unhashed names, hot reload, no minification
    #[value(name = "development", alias = "dev")]
    Development,

    /// Content-hashed names, minification, collapsed HTML
    #[value(name = "production", alias = "prod")]
    Production,
}

impl From<ModeArg> for Mode {
    fn from(value: ModeArg) -> Self {
        match value {
            ModeArg::Development => Mode::Development,
            ModeArg::Production => Mode::Production,
        }
    }
}

/// Output format of `kiln resolve`
#[derive(Copy, Clone, PartialEq, Eq, Debug, Default, ValueEnum)]
pub enum OutputFormat {
    /// The resolved record as JSON
    #[default]
    #[value(name = "json")]
    Json,

    /// The resolved record as TOML
    #[value(name = "toml")]
    Toml,

    /// Data-only view of the host bundler's configuration object, as JSON
    #[value(name = "host")]
    Host,

    /// A CommonJS configuration module for the host bundler
    #[value(name = "module")]
    Module,
}
