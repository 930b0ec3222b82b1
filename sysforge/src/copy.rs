//! Raw byte passthrough for `printer`.

use std::io::{self, Read, Write};

use crate::StreamError;

pub const BUFFER_SIZE: usize = 8 * 1024;

/// Copies inputs to an output through one bounded buffer that is reused for
/// every input.
pub struct Printer {
    buf: Box<[u8]>,
}

impl Printer {
    pub fn new() -> Self {
        Printer {
            buf: vec![0; BUFFER_SIZE].into_boxed_slice(),
        }
    }

    /// Writes every byte of `reader` to `out` unchanged and returns how many
    /// bytes were copied.
    pub fn copy<R, W>(&mut self, mut reader: R, out: &mut W) -> Result<u64, StreamError>
    where
        R: Read,
        W: Write,
    {
        let mut copied = 0u64;
        loop {
            let n = match reader.read(&mut self.buf) {
                Ok(0) => break,
                Ok(n) => n,
                Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
                Err(e) => return Err(StreamError::Read(e)),
            };
            out.write_all(&self.buf[..n]).map_err(StreamError::Write)?;
            copied += n as u64;
        }
        Ok(copied)
    }
}

impl Default for Printer {
    fn default() -> Self {
        Printer::new()
    }
}
