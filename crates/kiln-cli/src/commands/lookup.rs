//! Match command implementation.

use std::path::Path;

use kiln_config::RuleMatcher;

use crate::cli::MatchArgs;
use crate::commands::utils;
use crate::error::Result;

/// Execute the match command: one line per path on stdout.
pub fn execute(args: MatchArgs) -> Result<()> {
    let (_, config) = utils::load_config(&args.mode)?;
    let matcher = config.matcher()?;

    for path in &args.paths {
        println!("{}", describe(&matcher, path));
    }

    Ok(())
}

/// `<path>: <family> [loader, ...]`, or `<path>: no rule`.
pub fn describe(matcher: &RuleMatcher<'_>, path: &Path) -> String {
    match matcher.find(path) {
        Some(rule) => format!(
            "{}: {} [{}]",
            path.display(),
            rule.family,
            rule.loader_names().join(", ")
        ),
        None => format!("{}: no rule", path.display()),
    }
}
