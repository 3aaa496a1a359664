//! CLI command definitions

use clap::Parser;
use std::path::PathBuf;

/// Copy all iTunes-compatible tags from an MP4 source file to an MP4 target file.
///
/// Help and version are plain flags so that their output goes to stderr
/// alongside the rest of the usage text.
#[derive(Parser, Debug, Default, PartialEq, Eq)]
#[command(name = "mp4tagcopy")]
#[command(disable_help_flag = true, disable_version_flag = true)]
#[command(args_override_self = true)]
pub struct Cli {
    /// Display this help text and exit
    #[arg(short = 'h', long)]
    pub help: bool,

    /// Display version information and exit
    #[arg(short = 'V', long)]
    pub version: bool,

    /// Copy the tags only if the content IDs of source and target are the same
    #[arg(short = 'c', long)]
    pub compare: bool,

    /// Source and target files
    #[arg(value_name = "FILE")]
    pub files: Vec<PathBuf>,
}

/// Short flags understood by [`Cli`]
pub const SHORT_FLAGS: &[char] = &['h', 'V', 'c'];

/// Long flags understood by [`Cli`]
pub const LONG_FLAGS: &[&str] = &["help", "version", "compare"];
