use rand::{distr::weighted::WeightedIndex, Rng};
use rand_distr::{Distribution, Gamma};

use crate::{frequencies::Vector, tree::NO_VARIANTS};

/// Draws from a Dirichlet distribution by normalising independent Gamma draws.
///
/// Variants with zero concentration are never drawn. If all Gamma draws underflow to zero,
/// which happens for very small concentrations, `None` is returned. Concentrations so large that
/// a draw overflows give the mean of the distribution.
pub(super) fn dirichlet<R>(rng: &mut R, alpha: &Vector) -> Option<Vector>
where
    R: Rng + ?Sized,
{
    let mut draw = [0.0; NO_VARIANTS];

    for (x, &shape) in draw.iter_mut().zip(alpha.iter()) {
        if shape > 0.0 {
            *x = Gamma::new(shape, 1.0)
                .expect("gamma shape is positive and finite")
                .sample(rng);
        }
    }

    let max = draw.iter().copied().fold(0.0, f64::max);
    if max == 0.0 {
        None
    } else if max.is_infinite() {
        Some(normalize(alpha))
    } else {
        // Scaled by the maximum first, so that the sum cannot overflow
        Some(normalize(&draw))
    }
}

/// Returns a frequency vector fixed for a single variant, drawn with probability proportional to
/// the provided weights.
///
/// # Panics
///
/// Panics if weights are not finite and non-negative with at least one positive weight.
pub(super) fn fixation<R>(rng: &mut R, weights: &Vector) -> Vector
where
    R: Rng + ?Sized,
{
    let variant = WeightedIndex::new(normalize(weights).iter())
        .expect("weights are non-negative with positive sum")
        .sample(rng);

    let mut fixed = [0.0; NO_VARIANTS];
    fixed[variant] = 1.0;
    fixed
}

/// Returns non-negative, finite values with at least one positive value rescaled to sum to one.
fn normalize(values: &Vector) -> Vector {
    let max = values.iter().copied().fold(0.0, f64::max);
    let scaled = values.map(|x| x / max);
    let sum = scaled.iter().sum::<f64>();

    scaled.map(|x| x / sum)
}

#[cfg(test)]
mod tests {
    use super::*;

    use rand::SeedableRng;
    use rand_xoshiro::Xoshiro256PlusPlus;

    use crate::frequencies::is_simplex;

    #[test]
    fn test_dirichlet_is_simplex() {
        let mut rng = Xoshiro256PlusPlus::seed_from_u64(1);

        for _ in 0..100 {
            let draw = dirichlet(&mut rng, &[0.5, 2.0, 10.0, 0.1]).unwrap();
            assert!(is_simplex(&draw, 1e-12));
        }
    }

    #[test]
    fn test_dirichlet_zero_concentration_never_drawn() {
        let mut rng = Xoshiro256PlusPlus::seed_from_u64(2);

        for _ in 0..100 {
            let draw = dirichlet(&mut rng, &[0.0, 1.0, 0.0, 3.0]).unwrap();
            assert_eq!(draw[0], 0.0);
            assert_eq!(draw[2], 0.0);
        }
    }

    #[test]
    fn test_dirichlet_mean() {
        let mut rng = Xoshiro256PlusPlus::seed_from_u64(3);
        let alpha = [1.0, 2.0, 3.0, 4.0];
        let n = 20_000;

        let mut mean = [0.0; NO_VARIANTS];
        for _ in 0..n {
            let draw = dirichlet(&mut rng, &alpha).unwrap();
            mean.iter_mut().zip(draw).for_each(|(m, x)| *m += x / n as f64);
        }

        assert_approx_eq!(mean[..], [0.1, 0.2, 0.3, 0.4][..], epsilon = 1e-2);
    }

    #[test]
    fn test_dirichlet_huge_concentration() {
        let mut rng = Xoshiro256PlusPlus::seed_from_u64(5);

        for alpha in [
            [1e308; NO_VARIANTS],
            [f64::MAX; NO_VARIANTS],
            [f64::MAX, 0.0, 1e308, 1.0],
        ] {
            let draw = dirichlet(&mut rng, &alpha).unwrap();
            assert!(is_simplex(&draw, 1e-9), "{draw:?} from {alpha:?}");
        }

        let draw = dirichlet(&mut rng, &[f64::MAX; NO_VARIANTS]).unwrap();
        assert_approx_eq!(draw[..], [0.25; NO_VARIANTS][..], epsilon = 1e-6);
    }

    #[test]
    fn test_normalize() {
        assert_approx_eq!(
            normalize(&[1.0, 3.0, 0.0, 4.0])[..],
            [0.125, 0.375, 0.0, 0.5][..],
            epsilon = 1e-15
        );
        assert!(is_simplex(&normalize(&[f64::MAX; NO_VARIANTS]), 1e-12));
    }

    #[test]
    fn test_fixation_huge_weights() {
        let mut rng = Xoshiro256PlusPlus::seed_from_u64(6);

        let fixed = fixation(&mut rng, &[f64::MAX, 0.0, 1e308, 0.0]);
        assert!(fixed == [1.0, 0.0, 0.0, 0.0] || fixed == [0.0, 0.0, 1.0, 0.0]);
    }

    #[test]
    fn test_fixation() {
        let mut rng = Xoshiro256PlusPlus::seed_from_u64(4);

        for _ in 0..100 {
            let fixed = fixation(&mut rng, &[0.0, 0.3, 0.0, 0.7]);
            assert!(fixed == [0.0, 1.0, 0.0, 0.0] || fixed == [0.0, 0.0, 0.0, 1.0]);
        }
    }
}
