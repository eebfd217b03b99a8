//! Code to parse the command line using `clap`, and the conventional paths of
//! the two operands

use clap::Parser;
use std::path::PathBuf;

/// The "single" operand is read from this path, relative to the current
/// directory.
pub const SINGLE_PATH: &str = "single-b.txt";

/// The "multi" operand is read from this path, relative to the current
/// directory.
pub const MULTI_PATH: &str = "multi-b.txt";

/// Returns the parsed command line. The operand paths are fixed by convention
/// rather than passed as arguments, so parsing only provides `--help` and
/// `--version` and rejects anything else before either file is touched.
#[must_use]
pub fn parsed() -> Args {
    CliArgs::parse();
    Args { single: PathBuf::from(SINGLE_PATH), multi: PathBuf::from(MULTI_PATH) }
}

/// The resolved operand paths
pub struct Args {
    /// `single` is the path of the "single" operand
    pub single: PathBuf,
    /// `multi` is the path of the "multi" operand
    pub multi: PathBuf,
}

#[derive(Debug, Parser)]
#[command(name = "linediff", version)]
/// Print the lines found in just one of single-b.txt and multi-b.txt: first
/// the lines only in single-b.txt, then a `-----` line, then the lines only
/// in multi-b.txt
struct CliArgs {}
