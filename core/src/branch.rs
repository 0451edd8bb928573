//! Branch lengths for drift and mutation.

use std::{fmt, ops::Deref};

use crate::tree::NO_BRANCHES;

/// The kind of a branch length.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Kind {
    /// Genetic drift, in units of 2N generations.
    Drift,
    /// Mutation, in expected substitutions per site.
    Mutation,
}

impl Kind {
    /// Returns a lowercase name for the kind.
    pub fn name(&self) -> &'static str {
        match self {
            Kind::Drift => "drift",
            Kind::Mutation => "mutation",
        }
    }
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Validated lengths of one kind for every branch in the tree.
///
/// Lengths are indexed by branch, see [`crate::tree::branch_of`].
#[derive(Clone, Debug, PartialEq)]
pub struct BranchLengths {
    kind: Kind,
    lengths: [f64; NO_BRANCHES],
}

impl BranchLengths {
    /// Creates new branch lengths.
    ///
    /// Fails if the number of lengths differs from the number of branches, or if any length is
    /// negative or not finite.
    pub fn new(kind: Kind, lengths: &[f64]) -> Result<Self, InvalidParameter> {
        let lengths: [f64; NO_BRANCHES] =
            lengths
                .try_into()
                .map_err(|_| InvalidParameter::WrongLength {
                    kind,
                    expected: NO_BRANCHES,
                    actual: lengths.len(),
                })?;

        if let Some((branch, &length)) = lengths
            .iter()
            .enumerate()
            .find(|(_, length)| !(length.is_finite() && **length >= 0.0))
        {
            return Err(InvalidParameter::InvalidLength {
                kind,
                branch,
                length,
            });
        }

        Ok(Self { kind, lengths })
    }

    /// Creates new branch lengths with the same length on every branch.
    pub fn from_element(kind: Kind, length: f64) -> Result<Self, InvalidParameter> {
        Self::new(kind, &[length; NO_BRANCHES])
    }

    /// Creates new branch lengths of zero on every branch.
    pub fn from_zeros(kind: Kind) -> Self {
        Self {
            kind,
            lengths: [0.0; NO_BRANCHES],
        }
    }

    /// Returns the kind of lengths.
    pub fn kind(&self) -> Kind {
        self.kind
    }
}

impl Deref for BranchLengths {
    type Target = [f64];

    fn deref(&self) -> &Self::Target {
        &self.lengths
    }
}

/// Validated drift and mutation lengths for every branch in the tree.
#[derive(Clone, Debug, PartialEq)]
pub struct Branches {
    mutation: BranchLengths,
    drift: BranchLengths,
}

impl Branches {
    /// Returns the drift lengths.
    pub fn drift(&self) -> &BranchLengths {
        &self.drift
    }

    /// Returns the mutation lengths.
    pub fn mutation(&self) -> &BranchLengths {
        &self.mutation
    }

    /// Creates new branches from mutation and drift lengths.
    ///
    /// Mutation lengths are validated first.
    pub fn new(mutation: &[f64], drift: &[f64]) -> Result<Self, InvalidParameter> {
        Ok(Self {
            mutation: BranchLengths::new(Kind::Mutation, mutation)?,
            drift: BranchLengths::new(Kind::Drift, drift)?,
        })
    }

    /// Creates new branches where no drift or mutation occurs.
    pub fn from_zeros() -> Self {
        Self {
            mutation: BranchLengths::from_zeros(Kind::Mutation),
            drift: BranchLengths::from_zeros(Kind::Drift),
        }
    }
}

/// An error associated with an invalid model parameter.
#[derive(Clone, Debug, PartialEq)]
pub enum InvalidParameter {
    /// The number of branch lengths does not match the number of branches.
    WrongLength {
        /// The kind of branch lengths.
        kind: Kind,
        /// The number of branches.
        expected: usize,
        /// The number of lengths provided.
        actual: usize,
    },
    /// A branch length is negative or not finite.
    InvalidLength {
        /// The kind of branch lengths.
        kind: Kind,
        /// The branch with the invalid length.
        branch: usize,
        /// The invalid length.
        length: f64,
    },
    /// Root frequencies do not form a valid frequency vector.
    RootFrequencies {
        /// The invalid frequencies.
        frequencies: Vec<f64>,
    },
    /// Root Dirichlet concentration is not positive and finite.
    RootConcentration {
        /// The invalid concentration.
        concentration: f64,
    },
}

impl fmt::Display for InvalidParameter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InvalidParameter::WrongLength {
                kind,
                expected,
                actual,
            } => write!(
                f,
                "expected {expected} {kind} branch lengths, found {actual}"
            ),
            InvalidParameter::InvalidLength {
                kind,
                branch,
                length,
            } => write!(
                f,
                "{kind} branch length {length} on branch {branch} is not a non-negative number"
            ),
            InvalidParameter::RootFrequencies { frequencies } => write!(
                f,
                "root frequencies {frequencies:?} are not non-negative values summing to one"
            ),
            InvalidParameter::RootConcentration { concentration } => write!(
                f,
                "root concentration {concentration} is not a positive number"
            ),
        }
    }
}

impl std::error::Error for InvalidParameter {}
