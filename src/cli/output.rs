//! Output formatting utilities

use crate::application::CopyReport;

const USAGE: &str = concat!(
    "OPTION... source_file target_file\n",
    "Copy all iTunes-compatible tags from MP4 source file to MP4 target file.\n",
    "\n",
    "      -h, --help      Display this help text and exit\n",
    "      -V, --version   Display version information and exit\n",
    "      -c, --compare   Copy the tags only if the content IDs of source and target are the same",
);

/// Usage text shown for --help and for argument errors
pub fn format_usage(program: &str) -> String {
    format!("usage: {} {}", program, USAGE)
}

/// Version line shown for --version
pub fn format_version(program: &str) -> String {
    format!(
        "{} - {} {}",
        program,
        env!("CARGO_PKG_NAME"),
        env!("CARGO_PKG_VERSION")
    )
}

/// Banner printed before a copy starts
pub fn format_banner(program: &str) -> String {
    format!("{} version {}", program, env!("CARGO_PKG_VERSION"))
}

pub fn format_ignored_option(program: &str, option: &str) -> String {
    format!("{}: unknown option specified, ignoring: {}", program, option)
}

/// Summary line for a finished copy
pub fn format_report(report: &CopyReport) -> String {
    format!(
        "Copied {} tag item(s) from {} to {}, replacing {}",
        report.items_copied,
        report.source.display(),
        report.target.display(),
        report.items_replaced
    )
}
