//! Opening a named input, or falling back to standard input when no name
//! was given.

use std::borrow::Cow;
use std::fmt;
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::Error;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Input {
    Stdin,
    Path(PathBuf),
}

impl Input {
    /// Turns command-line paths into inputs. No paths means a single
    /// standard-input input.
    pub fn from_args<I>(paths: I) -> Vec<Input>
    where
        I: IntoIterator<Item = PathBuf>,
    {
        let inputs: Vec<Input> = paths.into_iter().map(Input::Path).collect();
        if inputs.is_empty() {
            vec![Input::Stdin]
        } else {
            inputs
        }
    }

    /// The path given on the command line, if any.
    pub fn path(&self) -> Option<&Path> {
        match self {
            Input::Stdin => None,
            Input::Path(path) => Some(path),
        }
    }

    /// Human-readable name used in messages; `stdin` when unnamed.
    pub fn name(&self) -> Cow<'_, str> {
        match self {
            Input::Stdin => Cow::Borrowed("stdin"),
            Input::Path(path) => path.to_string_lossy(),
        }
    }

    /// Opens the input for buffered reading. The returned reader owns the
    /// file handle, so dropping it closes the file. Standard input is locked,
    /// never closed.
    pub fn open(&self) -> Result<Box<dyn BufRead>, Error> {
        match self {
            Input::Stdin => Ok(Box::new(io::stdin().lock())),
            Input::Path(path) => {
                let file = File::open(path).map_err(|source| Error::Open {
                    name: self.name().into_owned(),
                    source,
                })?;
                debug!(input = %path.display(), "opened input");
                Ok(Box::new(BufReader::new(file)))
            }
        }
    }
}

impl fmt::Display for Input {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name())
    }
}
