use serde::{Deserialize, Serialize};

/// Babel preset referenced by the transpilation step
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BabelPreset {
    /// General-purpose syntax lowering (`@babel/preset-env`)
    Env,
    /// JSX component syntax (`@babel/preset-react`)
    React,
}

impl BabelPreset {
    pub fn package_name(self) -> &'static str {
        match self {
            BabelPreset::Env => "@babel/preset-env",
            BabelPreset::React => "@babel/preset-react",
        }
    }
}

/// One link of a rule's loader chain.
///
/// Each variant names an external loader; the host runs them, the resolver
/// only records which ones and with what options.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "loader", rename_all = "kebab-case")]
pub enum ProcessingStep {
    /// Extract styles into a standalone file, or inject them with hot reload
    ExtractStyles {
        /// Emit hot-reload events for changed style sheets
        hmr: bool,
        /// Reload every style sheet on change instead of the changed one
        reload_all: bool,
    },
    /// Resolve `@import`/`url()` in CSS
    Css,
    /// LESS preprocessor
    Less,
    /// SASS/SCSS preprocessor
    Sass,
    /// Emit the file as-is and return its URL
    File,
    /// Transpile ECMAScript with the listed presets
    Babel { presets: Vec<BabelPreset> },
}

impl ProcessingStep {
    /// Module specifier of the loader the host should load.
    pub fn loader_name(&self) -> &'static str {
        match self {
            ProcessingStep::ExtractStyles { .. } => "mini-css-extract-plugin/dist/loader",
            ProcessingStep::Css => "css-loader",
            ProcessingStep::Less => "less-loader",
            ProcessingStep::Sass => "sass-loader",
            ProcessingStep::File => "file-loader",
            ProcessingStep::Babel { .. } => "babel-loader",
        }
    }

    pub fn is_preprocessor(&self) -> bool {
        matches!(self, ProcessingStep::Less | ProcessingStep::Sass)
    }
}
