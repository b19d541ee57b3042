//! CLI argument definitions using clap.
//!
//! Docskim has a single operation, so there are no subcommands: the whole
//! interface is one optional positional directory argument. Directory
//! validation happens in the run loop, not here, because a missing and an
//! invalid directory must produce the same usage message.

use std::path::PathBuf;

use clap::Parser;

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
pub struct Arguments {
    /// Directory whose `*.hpp` files should be summarized
    pub dir: Option<PathBuf>,
}
