//! Sampling frequencies on the tree.
//!
//! A realization is sampled by drawing frequencies at the root, and then propagating them
//! towards the leaves. Along each branch, frequencies first undergo [`drift`](drift::drift)
//! and then [`mutation`](mutation::mutate).

use rand::Rng;

pub mod drift;
use drift::drift;

mod dirichlet;

pub mod mutation;
use mutation::mutate;

pub mod root;
pub use root::RootDistribution;

use crate::{
    branch::{Branches, InvalidParameter},
    tree::Node,
    Frequencies,
};

/// A sampler of frequency realizations.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Sampler {
    root: RootDistribution,
}

impl Sampler {
    /// Creates a new sampler with the provided root distribution.
    pub fn new(root: RootDistribution) -> Self {
        Self { root }
    }

    /// Returns the root distribution of the sampler.
    pub fn root(&self) -> &RootDistribution {
        &self.root
    }

    /// Samples a single realization.
    ///
    /// Branch lengths are indexed by branch, see [`crate::tree::branch_of`]. Fails if either
    /// sequence of lengths does not contain exactly one non-negative, finite length per branch.
    /// No randomness is consumed on failure.
    pub fn sample<R>(
        &self,
        rng: &mut R,
        mutation_lengths: &[f64],
        drift_lengths: &[f64],
    ) -> Result<Frequencies, InvalidParameter>
    where
        R: Rng + ?Sized,
    {
        let branches = Branches::new(mutation_lengths, drift_lengths)?;

        Ok(self.sample_branches(rng, &branches))
    }

    /// Samples a single realization from validated branches.
    pub fn sample_branches<R>(&self, rng: &mut R, branches: &Branches) -> Frequencies
    where
        R: Rng + ?Sized,
    {
        let mut frequencies = Frequencies::from_zeros();
        frequencies.set_node(Node::ROOT, &self.root.sample(rng));

        for node in Node::iter() {
            let (Some(parent), Some(branch)) = (node.parent(), node.branch()) else {
                continue;
            };

            let parent = *frequencies.get_node(parent);
            let drifted = drift(rng, &parent, branches.drift()[branch]);
            let mutated = mutate(&drifted, branches.mutation()[branch]);

            frequencies.set_node(node, &mutated);
        }

        frequencies
    }

    /// Returns an infinite iterator of independent realizations from validated branches.
    pub fn samples<'a, R>(&'a self, rng: &'a mut R, branches: &'a Branches) -> Samples<'a, R>
    where
        R: Rng + ?Sized,
    {
        Samples {
            sampler: self,
            rng,
            branches,
        }
    }
}

/// An iterator of independent realizations.
///
/// Created by [`Sampler::samples`].
#[derive(Debug)]
pub struct Samples<'a, R: ?Sized> {
    sampler: &'a Sampler,
    rng: &'a mut R,
    branches: &'a Branches,
}

impl<'a, R> Iterator for Samples<'a, R>
where
    R: Rng + ?Sized,
{
    type Item = Frequencies;

    fn next(&mut self) -> Option<Self::Item> {
        Some(self.sampler.sample_branches(self.rng, self.branches))
    }
}
