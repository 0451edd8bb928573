#![deny(unsafe_code)]
#![warn(missing_docs)]

//! Tools for sampling ancestral allele frequencies.
//!
//! This serves as the core library implementation for the `ancpoly` CLI, but can also be used as
//! a free-standing library for sampling allele frequencies on the tree.
//!
//! # Overview
//!
//! Allele frequencies evolve on a fixed tree (see [`tree`]) under a Wright-Fisher model with
//! mutation. A [`Sampler`] draws frequencies at the root and propagates them towards the leaves,
//! applying drift and mutation along each branch according to the branch lengths. Each call
//! produces one [`Frequencies`] realization, holding a frequency vector for every node.
//!
//! Realizations can be written and read back in a plain text format, see [`io`].
//!
//! # Example
//!
//! Sample a realization without any drift or mutation, so that every node has the root
//! frequencies, and write it in the text format.
//!
//! ```
//! use ancpoly_core::{io, tree::NO_BRANCHES, RootDistribution, Sampler};
//!
//! let sampler = Sampler::new(RootDistribution::fixed(&[1., 0., 0., 0.]).unwrap());
//! let lengths = [0.; NO_BRANCHES];
//!
//! let frequencies = sampler
//!     .sample(&mut rand::rng(), &lengths, &lengths)
//!     .expect("valid branch lengths");
//!
//! let line = io::encode(&frequencies);
//! assert_eq!(line, "1.000000 0.000000 0.000000 0.000000 ".repeat(9) + "\n");
//! assert_eq!(io::decode(&line), Ok(frequencies));
//! ```

#[cfg(test)]
#[macro_use]
pub(crate) mod approx;

pub mod branch;
pub use branch::{Branches, InvalidParameter};

pub mod frequencies;
pub use frequencies::Frequencies;

pub mod input;
pub use input::Input;

pub mod io;

pub mod sample;
pub use sample::{RootDistribution, Sampler};

pub mod tree;
