//! Reading and writing for the text format.
//!
//! The plain text format holds a single realization per line. A line contains the frequencies
//! of every node and variant in flat, node-major order, each value followed by a single space.
//! No labels are written, so the layout is given entirely by [`crate::tree::index`].

use std::{
    fmt::{self, Write},
    str::FromStr,
};

use crate::{frequencies::NO_VALUES, Frequencies};

/// The default number of decimals when formatting frequencies.
pub const DEFAULT_PRECISION: usize = 6;

/// Formats a realization as a single line, including the trailing newline.
pub fn encode(frequencies: &Frequencies) -> String {
    format_frequencies(frequencies, DEFAULT_PRECISION)
}

pub(crate) fn format_frequencies(frequencies: &Frequencies, precision: usize) -> String {
    let mut s = String::new();

    for x in frequencies.as_slice() {
        write!(s, "{x:.precision$} ").unwrap();
    }
    s.push('\n');

    s
}

/// Parses a realization from a single line.
///
/// The line must contain exactly one value per node and variant, separated by whitespace.
/// Values are not checked to form valid frequencies.
pub fn decode(line: &str) -> Result<Frequencies, MalformedInput> {
    let mut values = [0.0; NO_VALUES];
    let mut tokens = line.split_ascii_whitespace();

    for (position, value) in values.iter_mut().enumerate() {
        let token = tokens.next().ok_or(MalformedInput::MissingValues {
            expected: NO_VALUES,
            actual: position,
        })?;

        *value = f64::from_str(token).map_err(|_| MalformedInput::InvalidValue {
            position,
            token: String::from(token),
        })?;
    }

    match tokens.count() {
        0 => Ok(Frequencies::new(values)),
        surplus => Err(MalformedInput::SurplusValues {
            expected: NO_VALUES,
            actual: NO_VALUES + surplus,
        }),
    }
}

impl FromStr for Frequencies {
    type Err = MalformedInput;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        decode(s)
    }
}

/// An error associated with parsing a realization from the text format.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum MalformedInput {
    /// Fewer values than required.
    MissingValues {
        /// The required number of values.
        expected: usize,
        /// The number of values found.
        actual: usize,
    },
    /// More values than required.
    SurplusValues {
        /// The required number of values.
        expected: usize,
        /// The number of values found.
        actual: usize,
    },
    /// A value could not be parsed as a number.
    InvalidValue {
        /// The zero-based position of the value in the line.
        position: usize,
        /// The offending value.
        token: String,
    },
}

impl fmt::Display for MalformedInput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MalformedInput::MissingValues { expected, actual } => {
                write!(f, "expected {expected} frequencies, found only {actual}")
            }
            MalformedInput::SurplusValues { expected, actual } => {
                write!(f, "expected {expected} frequencies, found {actual}")
            }
            MalformedInput::InvalidValue { position, token } => write!(
                f,
                "failed to parse '{token}' at position {position} as frequency"
            ),
        }
    }
}

impl std::error::Error for MalformedInput {}
