//! Genetic drift along a branch.
//!
//! Drift follows the Balding-Nichols model: given parent frequencies `p` and a drift length `t`
//! in units of 2N generations, the child frequencies are drawn from a Dirichlet distribution
//! with concentration `p (1 - F) / F`, where `F = 1 - exp(-t)`. This keeps the expected
//! frequencies at `p` with variance `p (1 - p) F`, as under the Wright-Fisher diffusion.

use rand::Rng;

use crate::frequencies::Vector;

use super::dirichlet::{dirichlet, fixation};

/// Returns frequencies after drift of the provided length.
///
/// A length of zero returns the parent frequencies unchanged. Variants absent in the parent
/// remain absent. For lengths long enough that all variants but one are lost, the child is
/// fixed for a variant chosen with probability equal to its parent frequency.
pub fn drift<R>(rng: &mut R, parent: &Vector, length: f64) -> Vector
where
    R: Rng + ?Sized,
{
    if length == 0.0 {
        return *parent;
    }

    // (1 - F) / F
    let concentration = 1.0 / length.exp_m1();

    if !concentration.is_finite() {
        // Branch too short to be distinguished from no drift
        *parent
    } else if concentration == 0.0 {
        fixation(rng, parent)
    } else {
        let alpha = parent.map(|p| p * concentration);
        dirichlet(rng, &alpha).unwrap_or_else(|| fixation(rng, parent))
    }
}
