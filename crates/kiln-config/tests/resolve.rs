//! Tests for mode-dependent resolution.

use kiln_config::{
    resolve, BabelPreset, ChunkSplitting, Mode, PluginDescriptor, ProcessingStep, RuleFamily,
};
use std::collections::HashSet;

fn is_hashed_js(name: &str) -> bool {
    let Some(rest) = name.strip_prefix("[name].") else {
        return false;
    };
    let Some(token) = rest.strip_suffix(".js") else {
        return false;
    };
    !token.is_empty() && !token.contains('.')
}

#[test]
fn development_filenames_have_no_hash() {
    let config = resolve(Mode::Development);
    assert_eq!(config.filename_pattern("js"), "[name].js");
    assert_eq!(config.output_filename, "[name].js");
}

#[test]
fn production_filenames_carry_a_hash_token() {
    let config = resolve(Mode::Production);
    assert!(is_hashed_js(&config.filename_pattern("js")));
    assert!(is_hashed_js(&config.output_filename));
    assert_eq!(config.filename_pattern("css"), "[name].[contenthash].css");
}

#[test]
fn minimizers_are_empty_iff_development() {
    for mode in [Mode::Development, Mode::Production] {
        let config = resolve(mode);
        assert_eq!(
            config.optimization.minimizers.is_empty(),
            mode == Mode::Development
        );
        assert_eq!(config.optimization.split_chunks, ChunkSplitting::All);
    }
}

#[test]
fn hot_reload_iff_development() {
    assert!(resolve(Mode::Development).dev_server.hot);
    assert!(!resolve(Mode::Production).dev_server.hot);
}

#[test]
fn exactly_one_rule_per_family() {
    for mode in [Mode::Development, Mode::Production] {
        let config = resolve(mode);
        let families: Vec<_> = config.rules.iter().map(|r| r.family).collect();
        let unique: HashSet<_> = families.iter().copied().collect();

        assert_eq!(families.len(), RuleFamily::ALL.len());
        assert_eq!(unique.len(), RuleFamily::ALL.len());
        assert_eq!(families, RuleFamily::ALL.to_vec());
    }
}

#[test]
fn preprocessed_styles_add_one_step() {
    let config = resolve(Mode::Development);
    let len = |family| config.rule(family).unwrap().steps.len();

    assert_eq!(len(RuleFamily::Less), len(RuleFamily::Css) + 1);
    assert_eq!(len(RuleFamily::Sass), len(RuleFamily::Css) + 1);
    assert_eq!(
        config.rule(RuleFamily::Less).unwrap().steps.last(),
        Some(&ProcessingStep::Less)
    );
    assert_eq!(
        config.rule(RuleFamily::Sass).unwrap().loader_names(),
        vec!["mini-css-extract-plugin/dist/loader", "css-loader", "sass-loader"]
    );
}

#[test]
fn script_rules_use_babel_and_skip_dependencies() {
    let config = resolve(Mode::Production);

    let js = config.rule(RuleFamily::Js).unwrap();
    assert_eq!(
        js.steps,
        vec![ProcessingStep::Babel {
            presets: vec![BabelPreset::Env]
        }]
    );
    assert_eq!(js.exclude.as_deref(), Some("node_modules"));

    let jsx = config.rule(RuleFamily::Jsx).unwrap();
    assert_eq!(
        jsx.steps,
        vec![ProcessingStep::Babel {
            presets: vec![BabelPreset::Env, BabelPreset::React]
        }]
    );
    assert_eq!(jsx.exclude.as_deref(), Some("node_modules"));

    let images = config.rule(RuleFamily::Images).unwrap();
    assert_eq!(images.steps, vec![ProcessingStep::File]);
    assert!(images.exclude.is_none());
}

#[test]
fn resolve_is_idempotent() {
    assert_eq!(resolve(Mode::Development), resolve(Mode::Development));
    assert_eq!(resolve(Mode::Production), resolve(Mode::Production));
    assert_ne!(resolve(Mode::Development), resolve(Mode::Production));
}

#[test]
fn development_end_to_end() {
    let config = resolve(Mode::Development);

    assert_eq!(config.dev_server.port, 5000);
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
    assert_eq!(html, 1);
    assert_eq!(extract, 1);
    assert!(config.optimization.minimizers.is_empty());
}

#[test]
fn production_end_to_end() {
    let config = resolve(Mode::Production);

    assert_eq!(config.filename_pattern("css"), "[name].[contenthash].css");
    assert_eq!(
        config.optimization.minimizers,
        vec![PluginDescriptor::CssMinimizer, PluginDescriptor::JsMinimizer]
    );
    assert!(config.plugins.contains(&PluginDescriptor::CssExtract {
        filename: "[name].[contenthash].css".to_string()
    }));
}

#[test]
fn plugins_keep_their_order() {
    let names: Vec<_> = resolve(Mode::Development)
        .plugins
        .iter()
        .map(PluginDescriptor::package_name)
        .collect();
    assert_eq!(
        names,
        vec![
            "html-webpack-plugin",
            "clean-webpack-plugin",
            "mini-css-extract-plugin"
        ]
    );
}

#[test]
fn stock_entry_and_resolution() {
    let config = resolve(Mode::Development);
    assert_eq!(config.entry_name, "main");
    assert_eq!(
        config.entry_points,
        vec!["@babel/polyfill".to_string(), "./src/index.jsx".to_string()]
    );
    assert_eq!(
        config.resolve_extensions,
        vec![".js", ".json", ".jsx", ".png", ".jpg"]
    );
}

#[test]
fn production_config_reports_mode_discrepancy() {
    let config = resolve(Mode::Production);
    assert_eq!(config.bundler_mode, Mode::Development);
    assert!(config.has_mode_discrepancy());
}
