//! Utilities for writing realizations.

use std::{fs, io, path::Path};

use crate::Frequencies;

use super::text::{format_frequencies, DEFAULT_PRECISION};

/// A builder to write realizations.
#[derive(Debug)]
pub struct Builder {
    precision: usize,
}

impl Builder {
    /// Builds a writer to the provided inner writer.
    pub fn build<W>(self, inner: W) -> Writer<W>
    where
        W: io::Write,
    {
        Writer {
            inner,
            precision: self.precision,
        }
    }

    /// Builds a writer to stdout.
    pub fn build_stdout(self) -> Writer<io::StdoutLock<'static>> {
        self.build(io::stdout().lock())
    }

    /// Builds a writer to path.
    ///
    /// If path already exists, it will be overwritten.
    pub fn build_path<P>(self, path: P) -> io::Result<Writer<io::BufWriter<fs::File>>>
    where
        P: AsRef<Path>,
    {
        fs::File::create(path)
            .map(io::BufWriter::new)
            .map(|inner| self.build(inner))
    }

    /// Builds a writer to path or stdout.
    ///
    /// If the provided path is `None`, write to stdout.
    /// If path already exists, it will be overwritten.
    pub fn build_path_or_stdout<P>(self, path: Option<P>) -> io::Result<Writer<Box<dyn io::Write>>>
    where
        P: AsRef<Path>,
    {
        let inner: Box<dyn io::Write> = match path {
            Some(path) => Box::new(io::BufWriter::new(fs::File::create(path)?)),
            None => Box::new(io::stdout().lock()),
        };

        Ok(self.build(inner))
    }

    /// Set precision.
    ///
    /// If unset, a precision of six digits will be used.
    pub fn set_precision(mut self, precision: usize) -> Self {
        self.precision = precision;
        self
    }
}

impl Default for Builder {
    fn default() -> Self {
        Builder {
            precision: DEFAULT_PRECISION,
        }
    }
}

/// A writer of realizations in the text format, one per line.
#[derive(Debug)]
pub struct Writer<W> {
    inner: W,
    precision: usize,
}

impl<W> Writer<W>
where
    W: io::Write,
{
    /// Returns the inner writer.
    pub fn into_inner(self) -> W {
        self.inner
    }

    /// Flushes the inner writer.
    pub fn flush(&mut self) -> io::Result<()> {
        self.inner.flush()
    }

    /// Returns the precision used when writing.
    pub fn precision(&self) -> usize {
        self.precision
    }

    /// Writes lines of realizations that have already been formatted.
    ///
    /// This can be used to write realizations formatted in a separate buffer, for instance when
    /// sampling on multiple threads. The lines are not checked.
    pub fn write_encoded(&mut self, lines: &[u8]) -> io::Result<()> {
        self.inner.write_all(lines)
    }

    /// Writes a realization as a single line.
    ///
    /// The line is written with a single call to the inner writer.
    pub fn write_frequencies(&mut self, frequencies: &Frequencies) -> io::Result<()> {
        self.inner
            .write_all(format_frequencies(frequencies, self.precision).as_bytes())
    }
}
