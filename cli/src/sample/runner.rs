use std::{io, num::NonZeroUsize, thread};

use anyhow::{anyhow, Error};

use rand::SeedableRng;
use rand_xoshiro::Xoshiro256PlusPlus;

use ancpoly_core::{
    io::write::{Builder, Writer},
    Branches, Sampler,
};

/// Number of realizations sampled by each thread before output is written.
const BATCH_SIZE: usize = 4096;

#[derive(Debug)]
pub struct Runner {
    sampler: Sampler,
    branches: Branches,
    samples: usize,
    threads: usize,
    batch_size: usize,
    rng: Xoshiro256PlusPlus,
}

impl Runner {
    pub fn new(
        sampler: Sampler,
        branches: Branches,
        samples: NonZeroUsize,
        threads: NonZeroUsize,
        seed: u64,
    ) -> Self {
        Self {
            sampler,
            branches,
            samples: samples.get(),
            threads: threads.get().min(samples.get()),
            batch_size: BATCH_SIZE,
            rng: Xoshiro256PlusPlus::seed_from_u64(seed),
        }
    }

    /// Returns the number of samples and random number generator for each thread.
    ///
    /// Each generator is jumped ahead of the previous one, giving non-overlapping streams.
    fn chunks(&self) -> Vec<(usize, Xoshiro256PlusPlus)> {
        let (size, remainder) = (self.samples / self.threads, self.samples % self.threads);
        let mut rng = self.rng.clone();

        (0..self.threads)
            .map(|i| {
                let chunk = (size + usize::from(i < remainder), rng.clone());
                rng.jump();
                chunk
            })
            .collect()
    }

    pub fn run<W>(&self, writer: &mut Writer<W>) -> Result<(), Error>
    where
        W: io::Write,
    {
        log::info!(
            "Sampling {samples} realizations using {threads} thread(s)",
            samples = self.samples,
            threads = self.threads,
        );

        if self.threads == 1 {
            let mut rng = self.rng.clone();

            for frequencies in self
                .sampler
                .samples(&mut rng, &self.branches)
                .take(self.samples)
            {
                writer.write_frequencies(&frequencies)?;
            }
        } else {
            let precision = writer.precision();
            let mut chunks = self.chunks();
            let mut round = 0;

            // At most one batch per thread is held in memory
            while chunks.iter().any(|(remaining, _)| *remaining > 0) {
                log::debug!("Sampling batch {round} on all threads");

                let buffers = thread::scope(|scope| {
                    let handles = chunks
                        .iter_mut()
                        .map(|(remaining, rng)| {
                            let samples = (*remaining).min(self.batch_size);
                            *remaining -= samples;

                            scope.spawn(move || self.run_batch(samples, rng, precision))
                        })
                        .collect::<Vec<_>>();

                    handles
                        .into_iter()
                        .map(|handle| -> Result<Vec<u8>, Error> {
                            handle
                                .join()
                                .map_err(|_| anyhow!("sampling thread panicked"))?
                                .map_err(Error::from)
                        })
                        .collect::<Result<Vec<_>, _>>()
                })?;

                // Buffers hold whole lines, and are written in thread order
                for buffer in buffers {
                    writer.write_encoded(&buffer)?;
                }

                round += 1;
            }
        }

        writer.flush()?;

        log::info!("Done sampling");

        Ok(())
    }

    fn run_batch(
        &self,
        samples: usize,
        rng: &mut Xoshiro256PlusPlus,
        precision: usize,
    ) -> io::Result<Vec<u8>> {
        let mut writer = Builder::default().set_precision(precision).build(Vec::new());

        for frequencies in self.sampler.samples(rng, &self.branches).take(samples) {
            writer.write_frequencies(&frequencies)?;
        }

        Ok(writer.into_inner())
    }
}
