use std::io::{self, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use sysforge::copy::Printer;
use sysforge::report::{self, Flow};
use sysforge::{Error, Input};
use tracing::debug;

/// Copy each input to standard output, unchanged.
#[derive(Parser, Debug)]
#[command(name = "printer", version, about)]
struct Args {
    /// Files to print; standard input when none are given
    files: Vec<PathBuf>,
}

fn print_input<W: Write>(
    printer: &mut Printer,
    input: &Input,
    out: &mut W,
) -> Result<(), Error> {
    let reader = input.open()?;
    let copied = printer
        .copy(reader, out)
        .map_err(|e| e.for_input(input.name()))?;

    debug!(input = %input, bytes = copied, "printed input");
    Ok(())
}

fn main() -> ExitCode {
    sysforge::logging::init();
    let args = Args::parse();

    let mut printer = Printer::new();
    let stdout = io::stdout();
    let mut out = stdout.lock();

    for input in Input::from_args(args.files) {
        if let Err(err) = print_input(&mut printer, &input, &mut out) {
            if let Flow::Exit(code) = report::handle(&err) {
                return ExitCode::from(code);
            }
        }
    }

    ExitCode::from(report::finish(&mut out))
}
