//! Docskim - Markdown summaries from C++ header comments
//!
//! Docskim is a CLI tool and library that scans a directory for C++ header
//! files, pulls every `/* */` and `//` comment out of them with a single
//! regular expression, strips common documentation markup (Doxygen tags,
//! XML-like tags, include-guard identifiers, fenced code examples), and
//! prints one flattened Markdown section per header.
//!
//! ## Module Structure
//!
//! - `cli`: Command-line interface layer (arguments, exit codes, run loop)
//! - `extract`: Comment matching and the cleanup/filter pipeline
//! - `report`: Markdown report rendering
//! - `scan`: Header file selection via glob patterns

pub mod cli;
pub mod extract;
pub mod report;
pub mod scan;
