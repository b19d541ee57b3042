use std::io;

use anyhow::Result;

pub use args::Arguments;
pub use exit_status::ExitStatus;

mod args;
mod exit_status;
mod run;

/// Parse-free entry point for the CLI: takes already-parsed arguments and
/// writes to the process stdout. The usage text and the Markdown report
/// share the same sink.
pub fn run_cli(args: Arguments) -> Result<ExitStatus> {
    let mut stdout = io::stdout().lock();
    run::run(args, &mut stdout)
}
