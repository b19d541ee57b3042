//! Run loop: resolve the directory argument and emit the report.

use std::env;
use std::io::Write;

use anyhow::Result;

use super::{args::Arguments, exit_status::ExitStatus};
use crate::report;

/// Fallback program name when `argv[0]` is unavailable.
const PROGRAM: &str = "docskim";

pub(crate) fn run<W: Write>(Arguments { dir }: Arguments, writer: &mut W) -> Result<ExitStatus> {
    let Some(dir) = dir.filter(|dir| dir.is_dir()) else {
        write_usage(writer)?;
        return Ok(ExitStatus::Usage);
    };

    report::write_report(&dir, writer)?;
    Ok(ExitStatus::Success)
}

/// Two-line usage text, written to standard output. `<program>` is the
/// process name as invoked.
fn write_usage<W: Write>(writer: &mut W) -> Result<()> {
    let program = env::args().next().unwrap_or_else(|| PROGRAM.to_string());
    writeln!(writer, "USAGE:")?;
    writeln!(writer, "    {program} [DIR]")?;
    Ok(())
}
