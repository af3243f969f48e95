//! Command-line interface definition for Kiln.
//!
//! # Command Structure
//!
//! - `kiln resolve` - Print or write the resolved configuration
//! - `kiln check` - Validate the resolved configuration (and project files)
//! - `kiln match` - Show which rule handles given files
//! - `kiln filename` - Show or render the output filename for an extension

mod commands;
pub mod enums;
mod tests;

use clap::Parser;

pub use commands::{CheckArgs, Command, FilenameArgs, MatchArgs, ModeArgs, ResolveArgs};
pub use enums::*;

/// Kiln - build configuration resolver for webpack-style bundlers
#[derive(Parser, Debug)]
#[command(
    name = "kiln",
    version,
    about = "Resolve bundler build configurations for development and production",
    long_about = "Kiln turns a build mode (NODE_ENV or --mode) into a complete bundler\n\
                  configuration: entries, hashed output names, loader chains for styles,\n\
                  images and scripts, plugins and dev-server settings."
)]
pub struct Cli {
    /// Enable verbose logging (debug level)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Suppress all output except errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,
}
