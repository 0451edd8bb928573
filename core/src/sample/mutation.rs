//! Mutation along a branch.
//!
//! Mutation uses the symmetric (Jukes-Cantor) kernel, in which every variant mutates to each
//! other variant at the same rate. Frequencies decay exponentially towards the uniform
//! equilibrium, with branch lengths measured in expected substitutions per site.

use crate::{frequencies::Vector, tree::NO_VARIANTS};

const K: f64 = NO_VARIANTS as f64;

/// Returns frequencies after mutation of the provided length.
///
/// A length of zero returns the frequencies unchanged.
pub fn mutate(frequencies: &Vector, length: f64) -> Vector {
    if length == 0.0 {
        return *frequencies;
    }

    let rate = length * K / (K - 1.0);
    let retained = (-rate).exp();
    let equilibrium = -(-rate).exp_m1() / K;

    frequencies.map(|x| x * retained + equilibrium)
}
