//! Tests for option discovery and layering.
//!
//! `figment::Jail` isolates the working directory and environment of each test.

use figment::Jail;
use kiln_config::{resolve_with, ConfigDiscovery, ConfigError, Mode, ResolveOptions};
use std::path::PathBuf;

#[test]
fn missing_file_yields_defaults() {
    Jail::expect_with(|jail| {
        let options = ConfigDiscovery::new(jail.directory()).load().expect("load");
        assert_eq!(options, ResolveOptions::default());
        Ok(())
    });
}

#[test]
fn toml_overrides_defaults() {
    Jail::expect_with(|jail| {
        jail.create_file(
            "kiln.toml",
            r#"
port = 3000
output_dir = "build"
entry_points = ["./src/main.jsx"]
"#,
        )?;

        let options = ConfigDiscovery::new(jail.directory()).load().expect("load");
        assert_eq!(options.port, 3000);
        assert_eq!(options.output_dir, PathBuf::from("build"));
        assert_eq!(options.entry_points, vec!["./src/main.jsx".to_string()]);
        // untouched fields keep defaults
        assert_eq!(options.entry_name, "main");
        assert_eq!(options.template, PathBuf::from("./src/index.html"));
        Ok(())
    });
}

#[test]
fn environment_overrides_file() {
    Jail::expect_with(|jail| {
        jail.create_file("kiln.toml", "port = 3000\n")?;
        jail.set_env("KILN_PORT", 8080);
        jail.set_env("KILN_ENTRY_NAME", "app");

        let options = ConfigDiscovery::new(jail.directory()).load().expect("load");
        assert_eq!(options.port, 8080);
        assert_eq!(options.entry_name, "app");
        Ok(())
    });
}

#[test]
fn package_json_field_is_used() {
    Jail::expect_with(|jail| {
        jail.create_file(
            "package.json",
            r#"{
  "name": "shop",
  "kiln": { "port": 4100, "template": "./public/index.html" }
}"#,
        )?;

        let options = ConfigDiscovery::new(jail.directory()).load().expect("load");
        assert_eq!(options.port, 4100);
        assert_eq!(options.template, PathBuf::from("./public/index.html"));
        Ok(())
    });
}

#[test]
fn invalid_value_names_the_field() {
    Jail::expect_with(|jail| {
        jail.create_file("kiln.toml", "port = \"not a number\"\n")?;

        let err = ConfigDiscovery::new(jail.directory()).load().unwrap_err();
        match err {
            ConfigError::InvalidValue { field, .. } => assert_eq!(field, "port"),
            other => panic!("unexpected error: {other:?}"),
        }
        Ok(())
    });
}

#[test]
fn loaded_options_reach_the_resolved_config() {
    Jail::expect_with(|jail| {
        jail.create_file(
            "kiln.toml",
            "port = 7000\ndependency_dir = \"vendor\"\n",
        )?;

        let options = ConfigDiscovery::new(jail.directory()).load().expect("load");
        let config = resolve_with(Mode::Development, &options);
        assert_eq!(config.dev_server.port, 7000);

        let matcher = config.matcher().expect("matcher");
        assert!(matcher.find("vendor/jquery.js").is_none());
        assert!(matcher.find("node_modules/react/index.js").is_some());
        Ok(())
    });
}
