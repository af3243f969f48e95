//! Rendering of a [`BuildConfig`] in the host bundler's own object shape.
//!
//! The host (webpack) consumes a configuration object with `mode`, `entry`,
//! `output`, `resolve`, `optimization`, `devServer`, `plugins` and
//! `module.rules`. Two renderings are provided:
//!
//! - [`to_host_value`] / [`to_host_json`]: a data-only view in that shape.
//!   Rule conditions stay regex source strings, `output.path` stays relative
//!   to the project and plugins are `{ plugin, options }` records. Good for
//!   inspection and diffing; the host cannot load it as is.
//! - [`to_host_module`]: a CommonJS configuration module the host loads
//!   directly, with regex literals, an absolute output path and constructed
//!   plugin instances.

mod js;

use indexmap::IndexMap;
use serde::Serialize;
use serde_json::Value;

use crate::bundle::{BuildConfig, PluginDescriptor, ProcessingRule, ProcessingStep};
use crate::error::{ConfigError, Result};

use self::js::Js;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct HostConfig<'a> {
    mode: &'static str,
    entry: IndexMap<&'a str, &'a [String]>,
    output: HostOutput<'a>,
    resolve: HostResolve<'a>,
    optimization: HostOptimization,
    dev_server: HostDevServer,
    plugins: Vec<HostPlugin>,
    module: HostModule,
}

#[derive(Debug, Serialize)]
struct HostOutput<'a> {
    path: String,
    filename: &'a str,
}

#[derive(Debug, Serialize)]
struct HostResolve<'a> {
    extensions: &'a [String],
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct HostOptimization {
    split_chunks: HostSplitChunks,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    minimizer: Vec<HostPlugin>,
}

#[derive(Debug, Serialize)]
struct HostSplitChunks {
    chunks: &'static str,
}

#[derive(Debug, Serialize)]
struct HostDevServer {
    port: u16,
    hot: bool,
}

#[derive(Debug, Serialize)]
struct HostPlugin {
    plugin: &'static str,
    options: Value,
}

#[derive(Debug, Serialize)]
struct HostModule {
    rules: Vec<HostRule>,
}

#[derive(Debug, Serialize)]
struct HostRule {
    test: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    exclude: Option<String>,
    #[serde(rename = "use")]
    uses: Vec<HostLoader>,
}

#[derive(Debug, Serialize)]
struct HostLoader {
    loader: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    options: Option<Value>,
}

impl<'a> From<&'a BuildConfig> for HostConfig<'a> {
    fn from(config: &'a BuildConfig) -> Self {
        Self {
            mode: config.bundler_mode.as_str(),
            entry: IndexMap::from([(config.entry_name.as_str(), config.entry_points.as_slice())]),
            output: HostOutput {
                path: config.output_path.to_string_lossy().into_owned(),
                filename: &config.output_filename,
            },
            resolve: HostResolve {
                extensions: &config.resolve_extensions,
            },
            optimization: HostOptimization {
                split_chunks: HostSplitChunks {
                    chunks: config.optimization.split_chunks.as_str(),
                },
                minimizer: config.optimization.minimizers.iter().map(plugin).collect(),
            },
            dev_server: HostDevServer {
                port: config.dev_server.port,
                hot: config.dev_server.hot,
            },
            plugins: config.plugins.iter().map(plugin).collect(),
            module: HostModule {
                rules: config.rules.iter().map(rule).collect(),
            },
        }
    }
}

fn plugin(descriptor: &PluginDescriptor) -> HostPlugin {
    HostPlugin {
        plugin: descriptor.package_name(),
        options: descriptor.host_options(),
    }
}

fn rule(rule: &ProcessingRule) -> HostRule {
    HostRule {
        test: rule.test.clone(),
        exclude: rule.exclude.clone(),
        uses: rule.steps.iter().map(loader).collect(),
    }
}

fn loader(step: &ProcessingStep) -> HostLoader {
    HostLoader {
        loader: step.loader_name(),
        options: loader_options(step),
    }
}

fn loader_options(step: &ProcessingStep) -> Option<Value> {
    match step {
        ProcessingStep::ExtractStyles { hmr, reload_all } => Some(serde_json::json!({
            "hmr": hmr,
            "reloadAll": reload_all,
        })),
        ProcessingStep::Babel { presets } => Some(serde_json::json!({
            "presets": presets.iter().map(|p| p.package_name()).collect::<Vec<_>>(),
        })),
        ProcessingStep::Css | ProcessingStep::Less | ProcessingStep::Sass | ProcessingStep::File => {
            None
        }
    }
}

/// Data-only host view as a JSON value.
pub fn to_host_value(config: &BuildConfig) -> Result<Value> {
    serde_json::to_value(HostConfig::from(config))
        .map_err(|e| ConfigError::Serialization(e.to_string()))
}

/// Data-only host view as pretty JSON text, keys in host order.
pub fn to_host_json(config: &BuildConfig) -> Result<String> {
    serde_json::to_string_pretty(&HostConfig::from(config))
        .map_err(|e| ConfigError::Serialization(e.to_string()))
}

/// CommonJS configuration module the host can load directly.
///
/// Plugin packages are required once at the top, `output.path` is resolved
/// against the module's own directory and the style extractor's loader is
/// taken from the plugin package.
///
/// ```
/// use kiln_config::{resolve, to_host_module, Mode};
///
/// let module = to_host_module(&resolve(Mode::Development));
/// assert!(module.starts_with("const path = require(\"path\");\n"));
/// assert!(module.contains("test: /\\.css$/"));
/// assert!(module.ends_with("};\n"));
/// ```
pub fn to_host_module(config: &BuildConfig) -> String {
    let mut out = String::from("const path = require(\"path\");\n");
    for import in imports(config) {
        out.push_str(&import.render());
        out.push('\n');
    }
    out.push_str("\nmodule.exports = ");
    out.push_str(&module_object(config).render());
    out.push_str(";\n");
    out
}

/// `require` binding at the top of the module.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Import {
    binding: &'static str,
    package: &'static str,
    named: bool,
}

impl Import {
    fn of(descriptor: &PluginDescriptor) -> Self {
        Self {
            binding: descriptor.host_binding(),
            package: descriptor.package_name(),
            named: descriptor.is_named_export(),
        }
    }

    fn render(self) -> String {
        let package = js::string_literal(self.package);
        if self.named {
            format!("const {{ {} }} = require({package});", self.binding)
        } else {
            format!("const {} = require({package});", self.binding)
        }
    }
}

/// The style extractor's loader ships with its plugin.
const EXTRACT_PLUGIN: Import = Import {
    binding: "MiniCssExtractPlugin",
    package: "mini-css-extract-plugin",
    named: false,
};

/// Plugins, then minimizers, then loaders; each package once.
fn imports(config: &BuildConfig) -> Vec<Import> {
    let extracts = config
        .rules
        .iter()
        .flat_map(|rule| &rule.steps)
        .any(|step| matches!(step, ProcessingStep::ExtractStyles { .. }));

    let mut imports: Vec<Import> = Vec::new();
    let candidates = config
        .plugins
        .iter()
        .chain(&config.optimization.minimizers)
        .map(Import::of)
        .chain(extracts.then_some(EXTRACT_PLUGIN));
    for import in candidates {
        if !imports.iter().any(|i| i.binding == import.binding) {
            imports.push(import);
        }
    }
    imports
}

fn module_object(config: &BuildConfig) -> Js {
    let output_dir = js::string_literal(&config.output_path.to_string_lossy());

    let mut optimization = vec![(
        "splitChunks",
        Js::object([("chunks", Js::str(config.optimization.split_chunks.as_str()))]),
    )];
    if !config.optimization.minimizers.is_empty() {
        optimization.push((
            "minimizer",
            Js::Array(config.optimization.minimizers.iter().map(instance).collect()),
        ));
    }

    Js::object([
        ("mode", Js::str(config.bundler_mode.as_str())),
        (
            "entry",
            Js::object([(
                config.entry_name.as_str(),
                Js::Array(config.entry_points.iter().map(Js::str).collect()),
            )]),
        ),
        (
            "output",
            Js::object([
                ("path", Js::Expr(format!("path.resolve(__dirname, {output_dir})"))),
                ("filename", Js::str(config.output_filename.as_str())),
            ]),
        ),
        (
            "resolve",
            Js::object([(
                "extensions",
                Js::Array(config.resolve_extensions.iter().map(Js::str).collect()),
            )]),
        ),
        ("optimization", Js::object(optimization)),
        (
            "devServer",
            Js::object([
                ("port", Js::Num(config.dev_server.port.into())),
                ("hot", Js::Bool(config.dev_server.hot)),
            ]),
        ),
        ("plugins", Js::Array(config.plugins.iter().map(instance).collect())),
        (
            "module",
            Js::object([("rules", Js::Array(config.rules.iter().map(module_rule).collect()))]),
        ),
    ])
}

fn instance(descriptor: &PluginDescriptor) -> Js {
    let args = match descriptor {
        PluginDescriptor::HtmlGeneration {
            template,
            collapse_whitespace,
        } => vec![Js::object([
            ("template", Js::str(template.to_string_lossy())),
            (
                "minify",
                Js::object([("collapseWhitespace", Js::Bool(*collapse_whitespace))]),
            ),
        ])],
        PluginDescriptor::CssExtract { filename } => {
            vec![Js::object([("filename", Js::str(filename.as_str()))])]
        }
        PluginDescriptor::Clean | PluginDescriptor::CssMinimizer | PluginDescriptor::JsMinimizer => {
            Vec::new()
        }
    };
    Js::New {
        ctor: descriptor.host_binding(),
        args,
    }
}

fn module_rule(rule: &ProcessingRule) -> Js {
    let mut entries = vec![("test", Js::Regex(rule.test.clone()))];
    if let Some(exclude) = &rule.exclude {
        entries.push(("exclude", Js::Regex(exclude.clone())));
    }
    entries.push(("use", Js::Array(rule.steps.iter().map(module_loader).collect())));
    Js::object(entries)
}

fn module_loader(step: &ProcessingStep) -> Js {
    let loader = match step {
        ProcessingStep::ExtractStyles { .. } => {
            Js::Expr(format!("{}.loader", EXTRACT_PLUGIN.binding))
        }
        _ => Js::str(step.loader_name()),
    };

    let mut entries = vec![("loader", loader)];
    if let Some(options) = loader_options(step) {
        entries.push(("options", Js::from(&options)));
    }
    Js::object(entries)
}
