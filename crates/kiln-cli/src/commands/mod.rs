//! Command implementations for the Kiln CLI.
//!
//! Each command lives in its own module and exposes an `execute` function
//! taking the parsed arguments.

pub mod check;
pub mod filename;
pub mod lookup;
pub mod resolve;
pub(crate) mod utils;

pub use check::execute as check_execute;
pub use filename::execute as filename_execute;
pub use lookup::execute as match_execute;
pub use resolve::execute as resolve_execute;
