use std::io;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use sysforge::listing;
use sysforge::report::{self, Flow};
use tracing::debug;

/// Print every entry of a directory, one per line, unsorted.
#[derive(Parser, Debug)]
#[command(name = "lister", version, about)]
struct Args {
    /// Directory to list
    #[arg(default_value = ".")]
    dir: PathBuf,
}

fn main() -> ExitCode {
    sysforge::logging::init();
    let args = Args::parse();

    let stdout = io::stdout();
    let mut out = stdout.lock();

    match listing::list_dir(&args.dir, &mut out) {
        Ok(entries) => {
            debug!(dir = %args.dir.display(), entries, "listed directory");
            ExitCode::from(report::finish(&mut out))
        }
        // Listing errors are all fatal, so `handle` never says to continue.
        Err(err) => match report::handle(&err) {
            Flow::Exit(code) => ExitCode::from(code),
            Flow::Continue => ExitCode::FAILURE,
        },
    }
}
