use std::io;

use nix::errno::Errno;
use thiserror::Error;

/// Every failure a sysforge tool reports to the user.
#[derive(Debug, Error)]
pub enum Error {
    /// The input could not be opened. The cause is kept as the source but
    /// is not part of the message.
    #[error("Could not open file: {name}")]
    Open {
        name: String,
        #[source]
        source: io::Error,
    },

    #[error("Could not read file: {name}: {source}")]
    Read {
        name: String,
        #[source]
        source: io::Error,
    },

    #[error("Could not open directory: {path}")]
    OpenDir {
        path: String,
        #[source]
        source: Errno,
    },

    #[error("Could not read directory: {path}: {source}")]
    ReadDir {
        path: String,
        #[source]
        source: Errno,
    },

    #[error("Could not write output: {0}")]
    Write(#[source] io::Error),
}

impl Error {
    /// True if this error ends the run rather than just the current input.
    pub fn is_fatal(&self) -> bool {
        !matches!(self, Error::Open { .. } | Error::Read { .. })
    }

    /// The downstream reader went away; the run should stop without a message.
    pub fn is_broken_pipe(&self) -> bool {
        matches!(self, Error::Write(e) if e.kind() == io::ErrorKind::BrokenPipe)
    }
}

/// A failure inside a read-then-write loop, before the input's name is known.
#[derive(Debug, Error)]
pub enum StreamError {
    #[error("read error: {0}")]
    Read(#[source] io::Error),

    #[error("write error: {0}")]
    Write(#[source] io::Error),
}

impl StreamError {
    pub fn for_input(self, name: impl Into<String>) -> Error {
        match self {
            StreamError::Read(source) => Error::Read {
                name: name.into(),
                source,
            },
            StreamError::Write(e) => Error::Write(e),
        }
    }
}
