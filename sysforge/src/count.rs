//! Line, word and byte counting for `counter`.

use std::fmt;
use std::io::{self, BufRead, Write};
use std::os::unix::ffi::OsStrExt;

use crate::Input;

/// ASCII whitespace as classified by the C locale's `isspace`. Unlike
/// `u8::is_ascii_whitespace` this includes vertical tab.
pub fn is_space(byte: u8) -> bool {
    matches!(byte, b' ' | b'\t' | b'\n' | b'\r' | 0x0b | 0x0c)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum WordState {
    Start,
    Whitespace,
    Word,
}

/// The three totals for one input.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Counts {
    pub lines: u64,
    pub words: u64,
    pub bytes: u64,
}

impl Counts {
    /// Counts everything `reader` yields until end of stream.
    pub fn read_from<R: BufRead>(mut reader: R) -> io::Result<Self> {
        let mut counter = Counter::new();
        loop {
            let consumed = match reader.fill_buf() {
                Ok([]) => break,
                Ok(buf) => {
                    counter.consume(buf);
                    buf.len()
                }
                Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
                Err(e) => return Err(e),
            };
            reader.consume(consumed);
        }
        Ok(counter.counts())
    }
}

impl fmt::Display for Counts {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:7} {:7} {:7}", self.lines, self.words, self.bytes)
    }
}

/// Streaming counter. Feed it bytes in chunks of any size; word state
/// carries across chunk boundaries.
#[derive(Debug, Clone)]
pub struct Counter {
    counts: Counts,
    state: WordState,
}

impl Counter {
    pub fn new() -> Self {
        Counter {
            counts: Counts::default(),
            state: WordState::Start,
        }
    }

    pub fn consume(&mut self, buf: &[u8]) {
        self.counts.bytes += buf.len() as u64;
        for &byte in buf {
            if byte == b'\n' {
                self.counts.lines += 1;
            }
            if is_space(byte) {
                self.state = WordState::Whitespace;
            } else if self.state != WordState::Word {
                self.counts.words += 1;
                self.state = WordState::Word;
            }
        }
    }

    /// True iff the last consumed byte was part of a word.
    pub fn in_word(&self) -> bool {
        self.state == WordState::Word
    }

    pub fn counts(&self) -> Counts {
        self.counts
    }
}

impl Default for Counter {
    fn default() -> Self {
        Counter::new()
    }
}

/// Writes one summary row: the counts, then the input's name when the input
/// was named on the command line. The name is written as raw bytes.
pub fn write_summary<W: Write>(out: &mut W, counts: &Counts, input: &Input) -> io::Result<()> {
    write!(out, "{}", counts)?;
    if let Some(path) = input.path() {
        out.write_all(b" ")?;
        out.write_all(path.as_os_str().as_bytes())?;
    }
    out.write_all(b"\n")
}
