//! Argument parsing
//!
//! Unknown options are not fatal: they are reported as warnings and dropped
//! before the remaining arguments reach clap.

use crate::application::CopyRequest;
use crate::cli::commands::{Cli, LONG_FLAGS, SHORT_FLAGS};
use crate::error::{Result, TagCopyError};
use clap::Parser;
use std::ffi::OsString;
use std::path::PathBuf;

/// Outcome of parsing the command line, before positional validation
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParsedArgs {
    pub help: bool,
    pub version: bool,
    pub compare: bool,
    pub positional: Vec<PathBuf>,
    /// Unknown options that were ignored, as typed
    pub ignored: Vec<String>,
}

/// What the program should do
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    Help,
    Version,
    Copy(CopyRequest),
}

impl ParsedArgs {
    /// Resolve into an action. Help and version win over everything else.
    pub fn into_action(self) -> Result<Action> {
        if self.help {
            return Ok(Action::Help);
        }
        if self.version {
            return Ok(Action::Version);
        }

        let mut positional = self.positional.into_iter();
        match (positional.next(), positional.next(), positional.next()) {
            (Some(source), Some(target), None) => Ok(Action::Copy(CopyRequest {
                source,
                target,
                compare: self.compare,
            })),
            _ => Err(TagCopyError::Argument(
                "expected exactly two files: source_file target_file".to_string(),
            )),
        }
    }
}

/// Parse the full argument list, program name included.
pub fn parse_args<I, T>(args: I) -> Result<ParsedArgs>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString>,
{
    let (kept, ignored) = strip_unknown_options(args.into_iter().map(Into::into));
    let cli = Cli::try_parse_from(kept).map_err(|e| TagCopyError::Argument(e.to_string()))?;

    Ok(ParsedArgs {
        help: cli.help,
        version: cli.version,
        compare: cli.compare,
        positional: cli.files,
        ignored,
    })
}

/// Split off options that [`Cli`] does not know.
///
/// Bundled short flags are filtered letter by letter, so `-cx` keeps `-c`
/// and reports `-x`. None of the flags take a value, so `--compare=yes` or
/// `-c=1` is reported whole. Everything after `--` is positional.
pub fn strip_unknown_options<I>(args: I) -> (Vec<OsString>, Vec<String>)
where
    I: IntoIterator<Item = OsString>,
{
    let mut kept = Vec::new();
    let mut ignored = Vec::new();
    let mut args = args.into_iter();

    if let Some(program) = args.next() {
        kept.push(program);
    }

    let mut options_done = false;
    for arg in args {
        if options_done {
            kept.push(arg);
            continue;
        }
        let Some(text) = arg.to_str().map(str::to_string) else {
            if arg.as_encoded_bytes().starts_with(b"-") {
                ignored.push(arg.to_string_lossy().into_owned());
            } else {
                kept.push(arg);
            }
            continue;
        };

        if text == "--" {
            options_done = true;
            kept.push(arg);
        } else if let Some(long) = text.strip_prefix("--") {
            if LONG_FLAGS.contains(&long) {
                kept.push(arg);
            } else {
                ignored.push(text);
            }
        } else if let Some(shorts) = text.strip_prefix('-').filter(|s| !s.is_empty()) {
            if !shorts.chars().all(|c| c.is_ascii_alphanumeric()) {
                ignored.push(text);
                continue;
            }
            let (known, unknown): (String, String) =
                shorts.chars().partition(|c| SHORT_FLAGS.contains(c));
            ignored.extend(unknown.chars().map(|c| format!("-{}", c)));
            if !known.is_empty() {
                kept.push(OsString::from(format!("-{}", known)));
            }
        } else {
            kept.push(arg);
        }
    }

    (kept, ignored)
}
