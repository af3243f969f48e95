use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use std::path::PathBuf;

/// Post-processing unit applied to the whole build output
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "plugin", rename_all = "kebab-case")]
pub enum PluginDescriptor {
    /// Generate the HTML entry file from a template
    HtmlGeneration {
        /// Template path, relative to the project root
        template: PathBuf,
        /// Collapse whitespace in the generated HTML
        collapse_whitespace: bool,
    },
    /// Clear the output directory before each build
    Clean,
    /// Write extracted style sheets to their own files
    CssExtract {
        /// Filename pattern of the extracted style sheets
        filename: String,
    },
    /// Minify emitted CSS
    CssMinimizer,
    /// Minify emitted JavaScript
    JsMinimizer,
}

impl PluginDescriptor {
    /// Package the host loads the plugin from.
    pub fn package_name(&self) -> &'static str {
        match self {
            PluginDescriptor::HtmlGeneration { .. } => "html-webpack-plugin",
            PluginDescriptor::Clean => "clean-webpack-plugin",
            PluginDescriptor::CssExtract { .. } => "mini-css-extract-plugin",
            PluginDescriptor::CssMinimizer => "optimize-css-assets-webpack-plugin",
            PluginDescriptor::JsMinimizer => "terser-webpack-plugin",
        }
    }

    /// Identifier the configuration module binds the plugin class to.
    pub fn host_binding(&self) -> &'static str {
        match self {
            PluginDescriptor::HtmlGeneration { .. } => "HtmlWebpackPlugin",
            PluginDescriptor::Clean => "CleanWebpackPlugin",
            PluginDescriptor::CssExtract { .. } => "MiniCssExtractPlugin",
            PluginDescriptor::CssMinimizer => "OptimizeCssAssetsPlugin",
            PluginDescriptor::JsMinimizer => "TerserPlugin",
        }
    }

    /// The class is a named export of its package, not the module itself.
    pub fn is_named_export(&self) -> bool {
        matches!(self, PluginDescriptor::Clean)
    }

    /// Constructor options in the host's naming.
    pub fn host_options(&self) -> Value {
        match self {
            PluginDescriptor::HtmlGeneration {
                template,
                collapse_whitespace,
            } => json!({
                "template": template.to_string_lossy(),
                "minify": { "collapseWhitespace": collapse_whitespace },
            }),
            PluginDescriptor::CssExtract { filename } => json!({ "filename": filename }),
            PluginDescriptor::Clean
            | PluginDescriptor::CssMinimizer
            | PluginDescriptor::JsMinimizer => json!({}),
        }
    }

    pub fn is_minimizer(&self) -> bool {
        matches!(
            self,
            PluginDescriptor::CssMinimizer | PluginDescriptor::JsMinimizer
        )
    }
}

/// How shared modules are split into chunks
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChunkSplitting {
    /// Split both initial and async chunks
    #[default]
    All,
    /// Only split dynamically imported chunks
    Async,
    /// Only split chunks loaded at startup
    Initial,
}

impl ChunkSplitting {
    pub fn as_str(self) -> &'static str {
        match self {
            ChunkSplitting::All => "all",
            ChunkSplitting::Async => "async",
            ChunkSplitting::Initial => "initial",
        }
    }
}

/// Optimization settings forwarded to the host
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Optimization {
    #[serde(default)]
    pub split_chunks: ChunkSplitting,

    /// Minimizers, run in order (empty in development)
    #[serde(default)]
    pub minimizers: Vec<PluginDescriptor>,
}
