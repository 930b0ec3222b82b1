//! Turning errors into user-visible messages and exit statuses.

use std::error::Error as _;
use std::io::{self, Write};

use tracing::debug;

use crate::Error;

pub const SUCCESS: u8 = 0;
pub const FAILURE: u8 = 1;

/// What a tool does after an error has been reported.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    /// Move on to the next input.
    Continue,
    /// Stop the run with this exit status.
    Exit(u8),
}

/// Reports `err` on stderr.
pub fn handle(err: &Error) -> Flow {
    handle_to(err, &mut io::stderr().lock())
}

/// Reports `err` on `stderr` and decides whether the run goes on.
///
/// Per-input open and read failures continue the run. A closed output pipe
/// ends it quietly with a success status. Everything else ends it with
/// [`FAILURE`].
pub fn handle_to<W: Write>(err: &Error, stderr: &mut W) -> Flow {
    if err.is_broken_pipe() {
        debug!("output closed by reader, stopping");
        return Flow::Exit(SUCCESS);
    }

    match err.source() {
        Some(cause) => debug!(error = %err, cause = %cause, "operation failed"),
        None => debug!(error = %err, "operation failed"),
    }
    let _ = writeln!(stderr, "{}", err);

    if err.is_fatal() {
        Flow::Exit(FAILURE)
    } else {
        Flow::Continue
    }
}

/// Flushes the tool's output and returns the exit status for a run that
/// got to the end of its inputs.
pub fn finish<W: Write>(out: &mut W) -> u8 {
    match out.flush() {
        Ok(()) => SUCCESS,
        Err(e) => match handle(&Error::Write(e)) {
            Flow::Exit(code) => code,
            Flow::Continue => SUCCESS,
        },
    }
}
