//! Kiln CLI - build configuration resolver for webpack-style bundlers.
//!
//! # Architecture
//!
//! - [`cli`] - Argument definitions (clap derive)
//! - [`commands`] - One module per subcommand
//! - [`error`] - Error types and miette conversion
//! - [`logger`] - Structured logging with tracing
//! - [`ui`] - Status messages on stderr
//!
//! `NODE_ENV` is read in exactly one place, the command layer, and passed to
//! the pure resolver in `kiln-config` as an explicit mode.

pub mod cli;
pub mod commands;
pub mod error;
pub mod logger;
pub mod ui;

pub use error::{CliError, Result, ResultExt};
