//! Literal substring line filtering for `filter`.

use std::io::{BufRead, Write};

use crate::StreamError;

/// Prints lines that contain a fixed byte pattern.
///
/// Lines are read whole into a growable buffer, so a match is never missed
/// because a line is long. The buffer is kept between inputs.
#[derive(Debug, Clone)]
pub struct LineFilter {
    pattern: Vec<u8>,
    line: Vec<u8>,
}

impl LineFilter {
    pub fn new(pattern: impl Into<Vec<u8>>) -> Self {
        LineFilter {
            pattern: pattern.into(),
            line: Vec::new(),
        }
    }

    /// An empty pattern matches every line.
    pub fn matches(&self, line: &[u8]) -> bool {
        contains(line, &self.pattern)
    }

    /// Copies each matching line of `reader` to `out`, terminator included.
    /// A final line without a terminator is copied as-is. Returns the number
    /// of matching lines.
    pub fn filter<R, W>(&mut self, mut reader: R, out: &mut W) -> Result<u64, StreamError>
    where
        R: BufRead,
        W: Write,
    {
        let mut matched = 0;
        loop {
            self.line.clear();
            match reader.read_until(b'\n', &mut self.line) {
                Ok(0) => break,
                Ok(_) => {}
                Err(e) => return Err(StreamError::Read(e)),
            }
            if contains(&self.line, &self.pattern) {
                out.write_all(&self.line).map_err(StreamError::Write)?;
                matched += 1;
            }
        }
        Ok(matched)
    }
}

fn contains(haystack: &[u8], needle: &[u8]) -> bool {
    needle.is_empty() || haystack.windows(needle.len()).any(|window| window == needle)
}

#[cfg(test)]
mod test {
    use super::*;
    use std::io::{self, BufReader, Read};

    struct FailingReader;

    impl Read for FailingReader {
        fn read(&mut self, _buf: &mut [u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::Other, "disk went away"))
        }
    }

    fn run(pattern: &str, input: &[u8]) -> (Vec<u8>, u64) {
        let mut out = Vec::new();
        let matched = LineFilter::new(pattern).filter(input, &mut out).unwrap();
        (out, matched)
    }

    #[test]
    fn prints_only_matching_lines() {
        let (out, matched) = run("an", b"apple\nbanana\ngrape\n");
        assert_eq!(out, b"banana\n");
        assert_eq!(matched, 1);
    }

    #[test]
    fn empty_pattern_matches_everything() {
        let (out, matched) = run("", b"a\n\nb\n");
        assert_eq!(out, b"a\n\nb\n");
        assert_eq!(matched, 3);
    }

    #[test]
    fn pattern_is_literal() {
        let (out, _) = run("a.c", b"abc\na.c\n[a.c]\n");
        assert_eq!(out, b"a.c\n[a.c]\n");
    }

    #[test]
    fn match_is_case_sensitive() {
        let (out, _) = run("Foo", b"foo\nFOO\nFoo\n");
        assert_eq!(out, b"Foo\n");
    }

    #[test]
    fn unterminated_last_line_is_kept_as_is() {
        let (out, matched) = run("end", b"start\nthe end");
        assert_eq!(out, b"the end");
        assert_eq!(matched, 1);
    }

    #[test]
    fn crlf_terminators_are_preserved() {
        let (out, _) = run("x", b"x1\r\ny\r\nx2\r\n");
        assert_eq!(out, b"x1\r\nx2\r\n");
    }

    #[test]
    fn match_past_one_kilobyte_is_found() {
        let mut line = vec![b'.'; 5000];
        line.extend_from_slice(b"needle\n");
        let mut input = b"short\n".to_vec();
        input.extend_from_slice(&line);

        let mut out = Vec::new();
        let reader = BufReader::with_capacity(16, &input[..]);
        LineFilter::new("needle").filter(reader, &mut out).unwrap();
        assert_eq!(out, line);
    }

    #[test]
    fn pattern_never_spans_lines() {
        let (out, matched) = run("a\nb", b"a\nb\n");
        assert!(out.is_empty());
        assert_eq!(matched, 0);
    }

    #[test]
    fn line_buffer_is_reused_across_inputs() {
        let mut filter = LineFilter::new("x");
        let mut out = Vec::new();
        filter.filter(&b"x1\nno\n"[..], &mut out).unwrap();
        filter.filter(&b"nope\nx2"[..], &mut out).unwrap();
        assert_eq!(out, b"x1\nx2");
        assert!(filter.matches(b"xyz"));
        assert!(!filter.matches(b"abc"));
    }

    #[test]
    fn non_utf8_pattern_matches_bytes() {
        let mut filter = LineFilter::new(vec![0xff, 0xfe]);
        let mut out = Vec::new();
        filter
            .filter(&b"ok\n\x00\xff\xfe\x01\n"[..], &mut out)
            .unwrap();
        assert_eq!(out, b"\x00\xff\xfe\x01\n");
    }

    #[test]
    fn read_failure_mid_input_is_a_read_error() {
        let reader = BufReader::new((&b"hit one
miss
"[..]).chain(FailingReader));
        let mut out = Vec::new();

        match LineFilter::new("hit").filter(reader, &mut out) {
            Err(StreamError::Read(e)) => assert_eq!(e.to_string(), "disk went away"),
            other => panic!("unexpected result: {:?}", other),
        }
        assert_eq!(out, b"hit one\n");
    }
}
