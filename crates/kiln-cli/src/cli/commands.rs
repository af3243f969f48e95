use clap::{Args, Subcommand};
use std::path::PathBuf;

use crate::cli::enums::*;

/// Available Kiln subcommands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Resolve the configuration and print or write it
    ///
    /// The mode comes from --mode, or from NODE_ENV when the flag is absent:
    /// "development" selects development, anything else production.
    Resolve(ResolveArgs),

    /// Validate the resolved configuration
    ///
    /// Checks structural invariants (one rule per file family, minimizers
    /// only in production, ...). With --fs also checks that local entry
    /// modules and the HTML template exist.
    Check(CheckArgs),

    /// Show which rule and loader chain handle the given files
    Match(MatchArgs),

    /// Show the output filename pattern for an extension
    ///
    /// With --file, renders the concrete name using the file's content hash.
    Filename(FilenameArgs),
}

/// Mode and project selection shared by every command
#[derive(Args, Debug, Clone, Default)]
pub struct ModeArgs {
    /// Build mode (defaults to NODE_ENV)
    #[arg(short, long, value_enum, value_name = "MODE")]
    pub mode: Option<ModeArg>,

    /// Project root containing kiln.toml or package.json
    ///
    /// Defaults to the current working directory.
    #[arg(long, value_name = "DIR")]
    pub cwd: Option<PathBuf>,

    /// Option file to use instead of discovering one
    ///
    /// Relative paths are taken from the project root. The file must exist.
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,
}

/// Arguments for the resolve command
#[derive(Args, Debug)]
pub struct ResolveArgs {
    #[command(flatten)]
    pub mode: ModeArgs,

    /// Output format
    #[arg(short, long, value_enum, default_value = "json")]
    pub format: OutputFormat,

    /// Write to this file instead of stdout
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,
}

/// Arguments for the check command
#[derive(Args, Debug)]
pub struct CheckArgs {
    #[command(flatten)]
    pub mode: ModeArgs,

    /// Also check entry modules and the HTML template on disk
    #[arg(long)]
    pub fs: bool,
}

/// Arguments for the match command
#[derive(Args, Debug)]
pub struct MatchArgs {
    #[command(flatten)]
    pub mode: ModeArgs,

    /// Files to look up
    #[arg(required = true, value_name = "PATH")]
    pub paths: Vec<PathBuf>,
}

/// Arguments for the filename command
#[derive(Args, Debug)]
pub struct FilenameArgs {
    #[command(flatten)]
    pub mode: ModeArgs,

    /// Output extension, e.g. js or css
    #[arg(value_name = "EXT")]
    pub ext: String,

    /// Emitted file whose contents determine the hash
    #[arg(long, value_name = "FILE")]
    pub file: Option<PathBuf>,

    /// Chunk name substituted for [name]
    #[arg(long, value_name = "NAME", default_value = "main")]
    pub name: String,
}
