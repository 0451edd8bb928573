//! Reading and writing realizations.
//!
//! Realizations are stored in a plain text format with one realization per line, see [`text`].
//! Use [`read::Builder`] and [`write::Builder`] to read and write streams of realizations.

pub mod read;

pub mod text;
pub use text::{decode, encode, MalformedInput};

pub mod write;
