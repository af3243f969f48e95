#[cfg(test)]
mod tests {
    use crate::cli::{Cli, Command, ModeArg, OutputFormat};
    use clap::{CommandFactory, Parser, ValueEnum};
    use std::path::PathBuf;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_mode_enum_values() {
        let modes: Vec<_> = ModeArg::value_variants()
            .iter()
            .map(|v| v.to_possible_value().unwrap().get_name().to_string())
            .collect();
        assert_eq!(modes, vec!["development", "production"]);
    }

    #[test]
    fn test_resolve_defaults() {
        let cli = Cli::try_parse_from(["kiln", "resolve"]).unwrap();
        match cli.command {
            Command::Resolve(args) => {
                assert_eq!(args.format, OutputFormat::Json);
                assert!(args.mode.mode.is_none());
                assert!(args.output.is_none());
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_resolve_with_flags() {
        let cli = Cli::try_parse_from([
            "kiln", "resolve", "--mode", "prod", "--format", "host", "-o", "webpack.json",
        ])
        .unwrap();
        match cli.command {
            Command::Resolve(args) => {
                assert_eq!(args.mode.mode, Some(ModeArg::Production));
                assert_eq!(args.format, OutputFormat::Host);
                assert_eq!(args.output, Some(PathBuf::from("webpack.json")));
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_match_requires_paths() {
        assert!(Cli::try_parse_from(["kiln", "match"]).is_err());
        let cli = Cli::try_parse_from(["kiln", "match", "a.css", "b.jsx"]).unwrap();
        match cli.command {
            Command::Match(args) => assert_eq!(args.paths.len(), 2),
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_filename_defaults_to_main_chunk() {
        let cli = Cli::try_parse_from(["kiln", "filename", "css"]).unwrap();
        match cli.command {
            Command::Filename(args) => {
                assert_eq!(args.ext, "css");
                assert_eq!(args.name, "main");
                assert!(args.file.is_none());
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_config_flag_is_shared() {
        let cli = Cli::try_parse_from(["kiln", "check", "-c", "kiln.ci.toml"]).unwrap();
        match cli.command {
            Command::Check(args) => {
                assert_eq!(args.mode.config, Some(PathBuf::from("kiln.ci.toml")))
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_verbose_conflicts_with_quiet() {
        assert!(Cli::try_parse_from(["kiln", "-v", "-q", "check"]).is_err());
    }

    #[test]
    fn test_unknown_mode_is_rejected() {
        assert!(Cli::try_parse_from(["kiln", "check", "--mode", "staging"]).is_err());
    }
}
