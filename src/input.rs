//! Line-oriented console input.
//!
//! The session and filter collector read through [`LineSource`] so they can
//! run against stdin or a scripted list of answers.

use std::collections::VecDeque;
use std::io::{self, BufRead};

/// A source of user-typed lines.
pub trait LineSource {
    /// Returns the next line without its line terminator, or `None` once the
    /// input is exhausted.
    fn next_line(&mut self) -> io::Result<Option<String>>;
}

/// Reads lines from any buffered reader, typically locked stdin.
pub struct ReaderSource<R>(R);

impl<R: BufRead> ReaderSource<R> {
    pub fn new(reader: R) -> Self {
        Self(reader)
    }
}

impl ReaderSource<io::StdinLock<'static>> {
    pub fn stdin() -> Self {
        Self(io::stdin().lock())
    }
}

impl<R: BufRead> LineSource for ReaderSource<R> {
    fn next_line(&mut self) -> io::Result<Option<String>> {
        let mut line = String::new();
        if self.0.read_line(&mut line)? == 0 {
            return Ok(None);
        }

        let trimmed_len = line.trim_end_matches(['\n', '\r']).len();
        line.truncate(trimmed_len);
        Ok(Some(line))
    }
}

/// A fixed queue of answers, consumed front to back.
#[derive(Debug, Default)]
pub struct ScriptedSource {
    lines: VecDeque<String>,
}

impl ScriptedSource {
    pub fn new<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            lines: lines.into_iter().map(Into::into).collect(),
        }
    }

    /// Answers not yet consumed.
    pub fn remaining(&self) -> usize {
        self.lines.len()
    }
}

impl LineSource for ScriptedSource {
    fn next_line(&mut self) -> io::Result<Option<String>> {
        Ok(self.lines.pop_front())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reader_source_strips_terminators_only() {
        let mut source = ReaderSource::new("Chicago\r\n  all \nmonday".as_bytes());

        assert_eq!(source.next_line().unwrap().as_deref(), Some("Chicago"));
        assert_eq!(source.next_line().unwrap().as_deref(), Some("  all "));
        assert_eq!(source.next_line().unwrap().as_deref(), Some("monday"));
        assert_eq!(source.next_line().unwrap(), None);
    }

    #[test]
    fn test_reader_source_empty_line_is_not_eof() {
        let mut source = ReaderSource::new("\n".as_bytes());

        assert_eq!(source.next_line().unwrap().as_deref(), Some(""));
        assert_eq!(source.next_line().unwrap(), None);
    }

    #[test]
    fn test_scripted_source_drains_in_order() {
        let mut source = ScriptedSource::new(["a", "b"]);
        assert_eq!(source.remaining(), 2);
        assert_eq!(source.next_line().unwrap().as_deref(), Some("a"));
        assert_eq!(source.next_line().unwrap().as_deref(), Some("b"));
        assert_eq!(source.next_line().unwrap(), None);
        assert_eq!(source.remaining(), 0);
    }
}
