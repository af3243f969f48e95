//! Kiln CLI entry point: argument parsing, logging setup and dispatch.

use clap::Parser;
use kiln_cli::{cli, commands, error, logger, ui};
use miette::Result;

fn main() -> Result<()> {
    let args = cli::Cli::parse();

    logger::init_logger(args.verbose, args.quiet, args.no_color);
    ui::init_colors(args.no_color);

    let result = match args.command {
        cli::Command::Resolve(resolve_args) => commands::resolve_execute(resolve_args),
        cli::Command::Check(check_args) => commands::check_execute(check_args),
        cli::Command::Match(match_args) => commands::match_execute(match_args),
        cli::Command::Filename(filename_args) => commands::filename_execute(filename_args),
    };

    result.map_err(error::cli_error_to_miette)
}
