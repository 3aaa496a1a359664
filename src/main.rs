use mp4tagcopy::application::CopyTagsService;
use mp4tagcopy::cli::{
    format_banner, format_ignored_option, format_report, format_usage, format_version, parse_args,
    Action,
};
use mp4tagcopy::error::TagCopyError;
use mp4tagcopy::infrastructure::{init_logging, Mp4TagStore};
use std::ffi::OsString;
use std::io::{self, Write};
use std::path::Path;

fn main() {
    init_logging();

    let args: Vec<OsString> = std::env::args_os().collect();
    let program = program_name(&args);

    let result = run(&program, args);

    match result {
        Ok(_) => std::process::exit(0),
        Err(e) => {
            eprintln!("{}: {}", program, e.display_with_suggestions());
            if e.wants_usage() {
                eprintln!("{}", format_usage(&program));
            }
            std::process::exit(e.exit_code());
        }
    }
}

fn run(program: &str, args: Vec<OsString>) -> Result<(), TagCopyError> {
    let parsed = parse_args(args)?;
    for option in &parsed.ignored {
        eprintln!("{}", format_ignored_option(program, option));
    }

    match parsed.into_action()? {
        Action::Help => {
            eprintln!("{}", format_usage(program));
            Ok(())
        }
        Action::Version => {
            eprintln!("{}", format_version(program));
            Ok(())
        }
        Action::Copy(request) => {
            let stdout = io::stdout();
            let mut out = stdout.lock();
            writeln!(out, "{}", format_banner(program))?;

            let service = CopyTagsService::new(Mp4TagStore::new());
            let report = service.execute(&request, &mut out)?;
            writeln!(out, "{}", format_report(&report))?;
            Ok(())
        }
    }
}

fn program_name(args: &[OsString]) -> String {
    args.first()
        .and_then(|arg0| Path::new(arg0).file_name())
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| env!("CARGO_PKG_NAME").to_string())
}
