//! Utilities for reading realizations.

use std::io;

use crate::{input, Frequencies, Input};

use super::text::decode;

/// A builder to read realizations.
#[derive(Debug, Default)]
pub struct Builder {
    input: Option<Input>,
}

impl Builder {
    /// Builds a reader from the input.
    ///
    /// If no input has been set, stdin will be used.
    pub fn build(self) -> io::Result<Reader<input::Reader>> {
        self.input
            .as_ref()
            .unwrap_or(&Input::Stdin)
            .open()
            .map(Reader::new)
    }

    /// Set input.
    pub fn set_input(mut self, input: Input) -> Self {
        self.input = Some(input);
        self
    }
}

/// A reader of realizations in the text format, one per line.
///
/// Blank lines are skipped.
#[derive(Debug)]
pub struct Reader<R> {
    inner: R,
    buf: String,
    line: usize,
}

impl<R> Reader<R>
where
    R: io::BufRead,
{
    /// Returns the inner reader.
    pub fn into_inner(self) -> R {
        self.inner
    }

    /// Returns the number of lines read so far.
    pub fn lines_read(&self) -> usize {
        self.line
    }

    /// Creates a new reader.
    pub fn new(inner: R) -> Self {
        Self {
            inner,
            buf: String::new(),
            line: 0,
        }
    }

    /// Reads the next realization.
    ///
    /// Returns `None` at the end of the stream. Malformed lines are returned as errors of kind
    /// [`io::ErrorKind::InvalidData`], including the line number.
    pub fn read_frequencies(&mut self) -> io::Result<Option<Frequencies>> {
        loop {
            self.buf.clear();
            if self.inner.read_line(&mut self.buf)? == 0 {
                return Ok(None);
            }
            self.line += 1;

            if !self.buf.trim().is_empty() {
                break;
            }
        }

        decode(&self.buf).map(Some).map_err(|e| {
            io::Error::new(
                io::ErrorKind::InvalidData,
                format!("line {line}: {e}", line = self.line),
            )
        })
    }
}

impl<R> Iterator for Reader<R>
where
    R: io::BufRead,
{
    type Item = io::Result<Frequencies>;

    fn next(&mut self) -> Option<Self::Item> {
        self.read_frequencies().transpose()
    }
}
