//! CLI layer - Command-line interface

pub mod commands;
pub mod options;
pub mod output;

pub use commands::Cli;
pub use options::{parse_args, Action, ParsedArgs};
pub use output::{
    format_banner, format_ignored_option, format_report, format_usage, format_version,
};
