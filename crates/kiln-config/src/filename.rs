//! Output filename patterns and content hashes.
//!
//! Patterns use the host's placeholder syntax: `[name]` is replaced with the
//! chunk name and `[contenthash]` with a digest of the emitted contents.

use crate::mode::Mode;

pub const NAME_TOKEN: &str = "[name]";
pub const CONTENT_HASH_TOKEN: &str = "[contenthash]";

/// Number of hex characters kept from the digest (the host's default digest length).
pub const CONTENT_HASH_LENGTH: usize = 20;

/// Filename pattern for an output extension.
///
/// Production artifacts carry a content hash for long-term caching.
///
/// ```
/// use kiln_config::{filename_pattern, Mode};
///
/// assert_eq!(filename_pattern(Mode::Development, "js"), "[name].js");
/// assert_eq!(filename_pattern(Mode::Production, "css"), "[name].[contenthash].css");
/// ```
pub fn filename_pattern(mode: Mode, ext: &str) -> String {
    let ext = ext.trim_start_matches('.');
    match mode {
        Mode::Development => format!("{NAME_TOKEN}.{ext}"),
        Mode::Production => format!("{NAME_TOKEN}.{CONTENT_HASH_TOKEN}.{ext}"),
    }
}

/// Digest of emitted contents, truncated to [`CONTENT_HASH_LENGTH`] hex characters.
pub fn content_hash(contents: &[u8]) -> String {
    let hash = blake3::hash(contents);
    let mut hex = hash.to_hex().to_string();
    hex.truncate(CONTENT_HASH_LENGTH);
    hex
}

/// Substitute the placeholders of `pattern`.
///
/// A `[contenthash]` placeholder without a hash is left in place so the
/// caller can tell the name is incomplete.
pub fn render_filename(pattern: &str, name: &str, hash: Option<&str>) -> String {
    let rendered = pattern.replace(NAME_TOKEN, name);
    match hash {
        Some(hash) => rendered.replace(CONTENT_HASH_TOKEN, hash),
        None => rendered,
    }
}
