//! Frequencies at the root of the tree.

use std::{fmt, str::FromStr};

use rand::Rng;

use crate::{
    branch::InvalidParameter,
    frequencies::{is_simplex, Vector},
    tree::NO_VARIANTS,
};

use super::dirichlet::{dirichlet, fixation};

/// Tolerance for root frequencies summing to one.
pub const TOLERANCE: f64 = 1e-9;

/// A policy for choosing root frequencies.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum RootDistribution {
    /// The same frequencies in every realization.
    ///
    /// Use [`RootDistribution::fixed`] to construct with validation.
    Fixed(Vector),
    /// Equal frequencies of all variants in every realization.
    #[default]
    Uniform,
    /// Frequencies drawn from a symmetric Dirichlet distribution in each realization.
    ///
    /// Use [`RootDistribution::dirichlet`] to construct with validation.
    Dirichlet {
        /// The concentration of each variant.
        concentration: f64,
    },
}

impl RootDistribution {
    /// Creates a symmetric Dirichlet root distribution.
    ///
    /// Fails if the concentration is not positive and finite.
    pub fn dirichlet(concentration: f64) -> Result<Self, InvalidParameter> {
        if concentration.is_finite() && concentration > 0.0 {
            Ok(Self::Dirichlet { concentration })
        } else {
            Err(InvalidParameter::RootConcentration { concentration })
        }
    }

    /// Creates a fixed root distribution.
    ///
    /// Fails if there is not one frequency per variant, or if frequencies are not non-negative
    /// and summing to one.
    pub fn fixed(frequencies: &[f64]) -> Result<Self, InvalidParameter> {
        let error = || InvalidParameter::RootFrequencies {
            frequencies: frequencies.to_vec(),
        };

        let vector = Vector::try_from(frequencies).map_err(|_| error())?;

        if is_simplex(&vector, TOLERANCE) {
            Ok(Self::Fixed(vector))
        } else {
            Err(error())
        }
    }

    /// Returns root frequencies for a single realization.
    pub fn sample<R>(&self, rng: &mut R) -> Vector
    where
        R: Rng + ?Sized,
    {
        match self {
            RootDistribution::Fixed(vector) => *vector,
            RootDistribution::Uniform => [1.0 / NO_VARIANTS as f64; NO_VARIANTS],
            RootDistribution::Dirichlet { concentration } => {
                let alpha = [*concentration; NO_VARIANTS];
                dirichlet(rng, &alpha)
                    .unwrap_or_else(|| fixation(rng, &[1.0 / NO_VARIANTS as f64; NO_VARIANTS]))
            }
        }
    }
}

impl fmt::Display for RootDistribution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RootDistribution::Fixed(vector) => {
                let fmt = vector
                    .iter()
                    .map(|x| x.to_string())
                    .collect::<Vec<_>>()
                    .join(",");

                f.write_str(&fmt)
            }
            RootDistribution::Uniform => f.write_str("uniform"),
            RootDistribution::Dirichlet { concentration } => {
                write!(f, "dirichlet:{concentration}")
            }
        }
    }
}

impl FromStr for RootDistribution {
    type Err = ParseRootDistributionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parse_error = || ParseRootDistributionError::Format(String::from(s));

        if s == "uniform" {
            Ok(Self::Uniform)
        } else if let Some(concentration) = s.strip_prefix("dirichlet:") {
            let concentration = f64::from_str(concentration).map_err(|_| parse_error())?;
            Ok(Self::dirichlet(concentration)?)
        } else {
            let frequencies = s
                .split(',')
                .map(|x| f64::from_str(x.trim()))
                .collect::<Result<Vec<_>, _>>()
                .map_err(|_| parse_error())?;
            Ok(Self::fixed(&frequencies)?)
        }
    }
}

/// An error associated with parsing a root distribution.
#[derive(Debug, PartialEq)]
pub enum ParseRootDistributionError {
    /// The string is not of a recognised form.
    Format(String),
    /// The string is well-formed, but the parameters are invalid.
    Invalid(InvalidParameter),
}

impl From<InvalidParameter> for ParseRootDistributionError {
    fn from(e: InvalidParameter) -> Self {
        Self::Invalid(e)
    }
}

impl fmt::Display for ParseRootDistributionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseRootDistributionError::Format(s) => write!(
                f,
                "failed to parse '{s}' as root distribution, \
                expected 'uniform', 'dirichlet:<alpha>', or {NO_VARIANTS} comma-separated frequencies"
            ),
            ParseRootDistributionError::Invalid(e) => write!(f, "{e}"),
        }
    }
}

impl std::error::Error for ParseRootDistributionError {}

#[cfg(test)]
mod tests {
    use super::*;

    use rand::SeedableRng;
    use rand_xoshiro::Xoshiro256PlusPlus;

    #[test]
    fn test_parse() {
        assert_eq!("uniform".parse::<RootDistribution>(), Ok(RootDistribution::Uniform));
        assert_eq!(
            "dirichlet:0.5".parse::<RootDistribution>(),
            Ok(RootDistribution::Dirichlet { concentration: 0.5 })
        );
        assert_eq!(
            "1,0,0,0".parse::<RootDistribution>(),
            Ok(RootDistribution::Fixed([1.0, 0.0, 0.0, 0.0]))
        );
        assert_eq!(
            "0.1, 0.2, 0.3, 0.4".parse::<RootDistribution>(),
            Ok(RootDistribution::Fixed([0.1, 0.2, 0.3, 0.4]))
        );
    }

    #[test]
    fn test_parse_invalid_format() {
        assert_eq!(
            "normal".parse::<RootDistribution>(),
            Err(ParseRootDistributionError::Format(String::from("normal")))
        );
        assert_eq!(
            "dirichlet:x".parse::<RootDistribution>(),
            Err(ParseRootDistributionError::Format(String::from(
                "dirichlet:x"
            )))
        );
    }

    #[test]
    fn test_parse_invalid_parameters() {
        assert_eq!(
            "dirichlet:0".parse::<RootDistribution>(),
            Err(ParseRootDistributionError::Invalid(
                InvalidParameter::RootConcentration { concentration: 0.0 }
            ))
        );
        assert!(matches!(
            "0.5,0.5,0.5,0.5".parse::<RootDistribution>(),
            Err(ParseRootDistributionError::Invalid(
                InvalidParameter::RootFrequencies { .. }
            ))
        ));
        assert!(matches!(
            "0.5,0.5".parse::<RootDistribution>(),
            Err(ParseRootDistributionError::Invalid(
                InvalidParameter::RootFrequencies { .. }
            ))
        ));
    }

    #[test]
    fn test_display_parse() {
        for root in [
            RootDistribution::Uniform,
            RootDistribution::dirichlet(2.5).unwrap(),
            RootDistribution::fixed(&[0.5, 0.25, 0.125, 0.125]).unwrap(),
        ] {
            assert_eq!(root.to_string().parse::<RootDistribution>(), Ok(root));
        }
    }

    #[test]
    fn test_fixed_negative() {
        assert!(RootDistribution::fixed(&[1.5, -0.5, 0.0, 0.0]).is_err());
    }

    #[test]
    fn test_sample_fixed_and_uniform() {
        let mut rng = Xoshiro256PlusPlus::seed_from_u64(1);

        assert_eq!(
            RootDistribution::fixed(&[0.0, 1.0, 0.0, 0.0])
                .unwrap()
                .sample(&mut rng),
            [0.0, 1.0, 0.0, 0.0]
        );
        assert_eq!(
            RootDistribution::Uniform.sample(&mut rng),
            [0.25; NO_VARIANTS]
        );
    }

    #[test]
    fn test_sample_huge_concentration() {
        let mut rng = Xoshiro256PlusPlus::seed_from_u64(3);

        for s in ["dirichlet:1e308", "dirichlet:1.7976931348623157e308"] {
            let root = s.parse::<RootDistribution>().unwrap();
            let sample = root.sample(&mut rng);
            assert_approx_eq!(sample[..], [0.25; NO_VARIANTS][..], epsilon = 1e-6);
        }
    }

    #[test]
    fn test_sample_dirichlet() {
        let mut rng = Xoshiro256PlusPlus::seed_from_u64(2);

        for concentration in [1e-300, 0.01, 1.0, 100.0, 1e308, f64::MAX] {
            let root = RootDistribution::dirichlet(concentration).unwrap();
            for _ in 0..20 {
                assert!(is_simplex(&root.sample(&mut rng), 1e-9));
            }
        }
    }
}
