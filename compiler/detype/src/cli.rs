//! Command-line arguments.

use std::path::PathBuf;

use clap::{ArgGroup, Parser};

/// Default input size limit: 1 MiB.
pub const DEFAULT_MAX_SIZE: usize = 1024 * 1024;

#[derive(Debug, Parser)]
#[command(name = "detype", version)]
#[command(about = "TypeScript/Flow type stripper - converts TypeScript to JavaScript")]
#[command(group(ArgGroup::new("source").required(true).args(["file", "stdin"])))]
pub struct Cli {
    /// Path to the TypeScript file to process
    #[arg(short, long, value_name = "FILE")]
    pub file: Option<PathBuf>,

    /// Read code from stdin instead of a file
    #[arg(short, long)]
    pub stdin: bool,

    /// Path to write the output; `-` is stdout (defaults to stdout for
    /// stdin input, and to the input file otherwise)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Reject input larger than this many bytes
    #[arg(long, value_name = "BYTES", default_value_t = DEFAULT_MAX_SIZE)]
    pub max_size: usize,

    /// Also remove the type after `?:` (`age?: number` becomes `age`)
    #[arg(long)]
    pub elide_optional_types: bool,

    /// Print the token sequence instead of stripping
    #[arg(long)]
    pub dump_tokens: bool,

    /// Log progress to stderr (same as `RUST_LOG=debug`)
    #[arg(short, long)]
    pub verbose: bool,
}
