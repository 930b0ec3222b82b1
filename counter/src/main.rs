use std::io::{self, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use sysforge::count::{self, Counts};
use sysforge::report::{self, Flow};
use sysforge::{Error, Input};
use tracing::debug;

/// Print line, word and byte counts for each input.
#[derive(Parser, Debug)]
#[command(name = "counter", version, about)]
struct Args {
    /// Files to count; standard input when none are given
    files: Vec<PathBuf>,
}

/// Counts one input and prints its summary row. The input is closed before
/// this returns.
fn count_input<W: Write>(input: &Input, out: &mut W) -> Result<(), Error> {
    let reader = input.open()?;
    let counts = Counts::read_from(reader).map_err(|source| Error::Read {
        name: input.name().into_owned(),
        source,
    })?;

    debug!(
        input = %input,
        lines = counts.lines,
        words = counts.words,
        bytes = counts.bytes,
        "counted input"
    );
    count::write_summary(out, &counts, input).map_err(Error::Write)
}

fn main() -> ExitCode {
    sysforge::logging::init();
    let args = Args::parse();

    let stdout = io::stdout();
    let mut out = stdout.lock();

    for input in Input::from_args(args.files) {
        if let Err(err) = count_input(&input, &mut out) {
            if let Flow::Exit(code) = report::handle(&err) {
                return ExitCode::from(code);
            }
        }
    }

    ExitCode::from(report::finish(&mut out))
}
