//! Header file selection.
//!
//! The scan scope is deliberately narrow: direct children of one directory,
//! extension exactly `.hpp`. There is no recursive walk and no configurable
//! include/ignore list.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use glob::{MatchOptions, glob_with};

/// Glob suffix appended to the target directory.
pub const HEADER_GLOB: &str = "*.hpp";

/// Build the `<dir>/*.hpp` pattern string that names the scan scope.
///
/// The joined pattern doubles as the report's top-level heading, so it keeps
/// whatever form (relative or absolute) the user passed for `dir`.
pub fn header_pattern(dir: &Path) -> String {
    dir.join(HEADER_GLOB).display().to_string()
}

/// Expand the pattern to the matching header files, in alphabetical order.
///
/// `*` must not match a leading dot, so hidden headers stay hidden, and it
/// never crosses a path separator, so the scan stays non-recursive.
pub fn matching_headers(pattern: &str) -> Result<Vec<PathBuf>> {
    let options = MatchOptions {
        require_literal_leading_dot: true,
        ..MatchOptions::new()
    };

    glob_with(pattern, options)
        .with_context(|| format!("Invalid glob pattern: \"{pattern}\""))?
        .map(|entry| entry.context("Cannot access globbed path"))
        .collect()
}
