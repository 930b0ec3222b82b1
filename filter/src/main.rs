use std::ffi::OsString;
use std::io::{self, Write};
use std::os::unix::ffi::OsStringExt;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use sysforge::report::{self, Flow};
use sysforge::search::LineFilter;
use sysforge::{Error, Input};
use tracing::debug;

/// Print lines that contain PATTERN as a literal substring.
#[derive(Parser, Debug)]
#[command(name = "filter", version, about)]
struct Args {
    /// Text to search for, matched byte for byte (no regular expressions)
    #[arg(allow_hyphen_values = true)]
    pattern: OsString,

    /// Files to search; standard input when none are given
    files: Vec<PathBuf>,
}

fn filter_input<W: Write>(
    filter: &mut LineFilter,
    input: &Input,
    out: &mut W,
) -> Result<(), Error> {
    let reader = input.open()?;
    let matched = filter
        .filter(reader, out)
        .map_err(|e| e.for_input(input.name()))?;

    debug!(input = %input, matched, "filtered input");
    Ok(())
}

fn main() -> ExitCode {
    sysforge::logging::init();
    // A missing pattern makes clap print usage and exit with status 2.
    let args = Args::parse();

    let mut filter = LineFilter::new(args.pattern.into_vec());
    let stdout = io::stdout();
    let mut out = stdout.lock();

    for input in Input::from_args(args.files) {
        if let Err(err) = filter_input(&mut filter, &input, &mut out) {
            if let Flow::Exit(code) = report::handle(&err) {
                return ExitCode::from(code);
            }
        }
    }

    ExitCode::from(report::finish(&mut out))
}
