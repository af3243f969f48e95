//! Logging infrastructure for the Kiln CLI.
//!
//! Structured logging on top of `tracing`, written to stderr so stdout stays
//! reserved for resolved configurations.
//!
//! The logging level is determined in this order:
//! 1. `--verbose` flag: DEBUG for kiln crates
//! 2. `--quiet` flag: ERROR only
//! 3. `RUST_LOG` environment variable: custom filter
//! 4. Default: INFO for kiln crates

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

const VERBOSE_FILTER: &str = "kiln=debug,kiln_config=debug,kiln_cli=debug";
const QUIET_FILTER: &str = "kiln=error,kiln_config=error,kiln_cli=error";
const DEFAULT_FILTER: &str = "kiln=info,kiln_config=info,kiln_cli=info";

/// Build the filter for the given verbosity flags.
pub fn filter_for(verbose: bool, quiet: bool) -> EnvFilter {
    if verbose {
        EnvFilter::new(VERBOSE_FILTER)
    } else if quiet {
        EnvFilter::new(QUIET_FILTER)
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
    }
}

/// Initialize the tracing subscriber. Call once, before any logging.
///
/// ```rust,no_run
/// use kiln_cli::logger::init_logger;
///
/// init_logger(false, false, false);
/// tracing::info!("resolving configuration");
/// ```
pub fn init_logger(verbose: bool, quiet: bool, no_color: bool) {
    let fmt_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_level(true)
        .with_ansi(!no_color)
        .compact();

    tracing_subscriber::registry()
        .with(filter_for(verbose, quiet))
        .with(fmt_layer)
        .init();
}
