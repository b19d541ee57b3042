//! Markdown report rendering.
//!
//! Kept separate from the extraction pipeline so the whole report can be
//! written into any `io::Write` sink and byte-compared in tests.

use std::fs;
use std::io::Write;
use std::path::Path;

use anyhow::{Context, Result};

use crate::{extract, scan};

/// Write the full Markdown report for `dir`.
///
/// Layout: a level-1 heading naming the glob pattern, then one level-2
/// section per matched header with its cleaned comment lines, each section
/// followed by a blank line. Files are processed strictly one at a time:
/// each is read to completion and rendered before the next is opened. A
/// file is read before its heading is written, so a failed read aborts the
/// report without leaving a dangling heading.
pub fn write_report<W: Write>(dir: &Path, writer: &mut W) -> Result<()> {
    let pattern = scan::header_pattern(dir);

    writeln!(writer, "# `{pattern}`")?;
    writeln!(writer)?;

    for path in scan::matching_headers(&pattern)? {
        let source = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read file: {}", path.display()))?;

        writeln!(writer, "## `{}`", path.display())?;
        writeln!(writer)?;
        for line in extract::clean_comments(&source) {
            writeln!(writer, "{line}")?;
        }
        writeln!(writer)?;
    }

    Ok(())
}
