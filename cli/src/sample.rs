use std::{num::NonZeroUsize, path::PathBuf};

use anyhow::{Context, Error};

use clap::Parser;
use rand::Rng;

use ancpoly_core::{io, tree::NO_BRANCHES, Branches, RootDistribution, Sampler};

mod runner;
use runner::Runner;

/// Sample allele frequencies on the tree.
///
/// Each realization is written as a single line of frequencies for every node and variant, in
/// node-major order.
#[derive(Debug, Parser)]
pub struct Sample {
    /// Number of realizations to sample.
    #[arg(short = 'n', long, default_value_t = NonZeroUsize::new(1).unwrap(), value_name = "INT")]
    samples: NonZeroUsize,

    /// Drift branch lengths.
    ///
    /// Lengths are in units of 2N generations. Either a single length may be provided, in which
    /// case it will be used for all branches, or one length per branch may be provided. Use comma
    /// to separate lengths. Branches are ordered by the node below them, excluding the root.
    #[arg(
        short = 'd',
        long,
        default_value = "0",
        use_value_delimiter = true,
        value_delimiter = ',',
        allow_negative_numbers = true,
        value_name = "FLOAT,..."
    )]
    drift: Vec<f64>,

    /// Mutation branch lengths.
    ///
    /// Lengths are in expected substitutions per site. Either a single length may be provided, in
    /// which case it will be used for all branches, or one length per branch may be provided. Use
    /// comma to separate lengths. Branches are ordered as for drift lengths.
    #[arg(
        short = 'm',
        long,
        default_value = "0",
        use_value_delimiter = true,
        value_delimiter = ',',
        allow_negative_numbers = true,
        value_name = "FLOAT,..."
    )]
    mutation: Vec<f64>,

    /// Root distribution.
    ///
    /// Either 'uniform' for equal frequencies of all variants, 'dirichlet:<alpha>' for
    /// frequencies drawn from a symmetric Dirichlet distribution with concentration alpha, or
    /// comma-separated frequencies of each variant to use fixed root frequencies.
    #[arg(short = 'r', long, default_value = "uniform", value_name = "ROOT")]
    root: RootDistribution,

    /// Output path.
    ///
    /// If no path is given, realizations will be output to stdout.
    #[arg(short = 'o', long, value_name = "PATH")]
    output: Option<PathBuf>,

    /// Precision to use when printing frequencies.
    #[arg(short = 'p', long, default_value_t = io::text::DEFAULT_PRECISION, value_name = "INT")]
    precision: usize,

    /// Seed for the random number generator.
    ///
    /// If no seed is given, a random seed will be used. The seed is logged at the info level, so
    /// that a run can be reproduced. Output for a given seed also depends on the number of threads.
    #[arg(short = 's', long, value_name = "INT")]
    seed: Option<u64>,

    /// Number of threads to use.
    #[arg(short = 't', long, default_value_t = NonZeroUsize::new(1).unwrap(), value_name = "INT")]
    threads: NonZeroUsize,
}

/// Returns one length per branch, broadcasting a single length to all branches.
fn broadcast(lengths: &[f64]) -> Vec<f64> {
    match lengths {
        &[length] => vec![length; NO_BRANCHES],
        lengths => lengths.to_vec(),
    }
}

impl Sample {
    pub fn run(self) -> Result<(), Error> {
        let branches = Branches::new(&broadcast(&self.mutation), &broadcast(&self.drift))?;

        let seed = self.seed.unwrap_or_else(|| rand::rng().random());
        log::info!("Using seed {seed}");

        let runner = Runner::new(
            Sampler::new(self.root),
            branches,
            self.samples,
            self.threads,
            seed,
        );

        let mut writer = io::write::Builder::default()
            .set_precision(self.precision)
            .build_path_or_stdout(self.output.as_ref())
            .with_context(|| match &self.output {
                Some(path) => format!("Failed to create output file '{}'", path.display()),
                None => String::from("Failed to open stdout"),
            })?;

        runner.run(&mut writer)
    }
}
