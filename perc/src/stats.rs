use log::{debug, info};
use rand::{rngs::StdRng, Rng, SeedableRng};
use rayon::prelude::*;

use crate::{
    error::{ensure_positive, Result},
    grid::Percolation,
};

////////////////////////////////////////////////////////////////////////////////

/// Z-score of the two-sided 95% confidence interval.
pub const CONFIDENCE_95: f64 = 1.96;

////////////////////////////////////////////////////////////////////////////////

/// Source of uniform integers: called with `n`, returns a value in `[0, n)`.
pub trait SiteSampler: FnMut(usize) -> usize {}

impl<S: FnMut(usize) -> usize> SiteSampler for S {}

/// Wraps any `rand` generator as a [`SiteSampler`].
pub fn sampler_from_rng<R: Rng>(mut rng: R) -> impl SiteSampler {
    move |n: usize| rng.gen_range(0..n)
}

////////////////////////////////////////////////////////////////////////////////

pub trait Statistics {
    fn mean(&self, samples: &[f64]) -> f64;
    fn stddev(&self, samples: &[f64]) -> f64;
}

/// Sample mean and sample standard deviation (divisor `len - 1`).
///
/// The deviation of a single sample is `NaN`, as is everything over an empty
/// slice.
#[derive(Clone, Copy, Debug, Default)]
pub struct SampleStatistics;

impl Statistics for SampleStatistics {
    fn mean(&self, samples: &[f64]) -> f64 {
        samples.iter().sum::<f64>() / samples.len() as f64
    }

    fn stddev(&self, samples: &[f64]) -> f64 {
        if samples.len() < 2 {
            return f64::NAN;
        }
        let mean = self.mean(samples);
        let sum_sq = samples.iter().map(|x| (x - mean) * (x - mean)).sum::<f64>();
        (sum_sq / (samples.len() - 1) as f64).sqrt()
    }
}

////////////////////////////////////////////////////////////////////////////////

/// Opens uniformly drawn sites of a fresh `n`x`n` grid until it percolates and
/// returns the fraction of sites that had to be opened.
///
/// Draws hitting an already open site are skipped.
pub fn run_trial<S: SiteSampler>(n: usize, sampler: &mut S) -> Result<f64> {
    let mut grid = Percolation::new(n)?;
    let mut opened = 0usize;
    while !grid.percolates() {
        let (row, col) = (sampler(n), sampler(n));
        if !grid.is_open(row, col)? {
            grid.open(row, col)?;
            opened += 1;
        }
    }
    Ok(opened as f64 / (n * n) as f64)
}

////////////////////////////////////////////////////////////////////////////////

/// Monte Carlo estimate of the percolation threshold of an `n`x`n` grid over
/// `trials` independent experiments.
#[derive(Debug, Clone)]
pub struct PercolationStats {
    thresholds: Vec<f64>,
    mean: f64,
    stddev: f64,
}

impl PercolationStats {
    pub fn new(n: usize, trials: usize) -> Result<Self> {
        Self::with_collaborators(
            n,
            trials,
            sampler_from_rng(rand::thread_rng()),
            &SampleStatistics,
        )
    }

    /// Reproducible run driven by a single seeded generator.
    pub fn with_seed(n: usize, trials: usize, seed: u64) -> Result<Self> {
        Self::with_collaborators(
            n,
            trials,
            sampler_from_rng(StdRng::seed_from_u64(seed)),
            &SampleStatistics,
        )
    }

    pub fn with_collaborators<S: SiteSampler>(
        n: usize,
        trials: usize,
        mut sampler: S,
        statistics: &dyn Statistics,
    ) -> Result<Self> {
        ensure_positive("grid size", n)?;
        ensure_positive("trials", trials)?;

        let thresholds = (0..trials)
            .map(|trial| -> Result<f64> {
                let threshold = run_trial(n, &mut sampler)?;
                debug!("trial {trial}: threshold {threshold}");
                Ok(threshold)
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(Self::from_thresholds(thresholds, statistics))
    }

    /// Runs trials on the rayon pool. Trial `i` draws from its own generator
    /// seeded with `(seed, i)`, so the result does not depend on scheduling.
    pub fn par_with_seed(n: usize, trials: usize, seed: u64) -> Result<Self> {
        ensure_positive("grid size", n)?;
        ensure_positive("trials", trials)?;

        let thresholds = (0..trials)
            .into_par_iter()
            .map(|trial| -> Result<f64> {
                let rng = StdRng::seed_from_u64(trial_seed(seed, trial));
                let mut sampler = sampler_from_rng(rng);
                let threshold = run_trial(n, &mut sampler)?;
                debug!("trial {trial}: threshold {threshold}");
                Ok(threshold)
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(Self::from_thresholds(thresholds, &SampleStatistics))
    }

    fn from_thresholds(thresholds: Vec<f64>, statistics: &dyn Statistics) -> Self {
        let mean = statistics.mean(&thresholds);
        let stddev = statistics.stddev(&thresholds);
        info!("{} trials: mean {mean}, stddev {stddev}", thresholds.len());
        Self {
            thresholds,
            mean,
            stddev,
        }
    }

    pub fn trials(&self) -> usize {
        self.thresholds.len()
    }

    pub fn thresholds(&self) -> &[f64] {
        &self.thresholds
    }

    pub fn mean(&self) -> f64 {
        self.mean
    }

    pub fn stddev(&self) -> f64 {
        self.stddev
    }

    fn margin(&self) -> f64 {
        CONFIDENCE_95 * self.stddev / (self.trials() as f64).sqrt()
    }

    pub fn confidence_low(&self) -> f64 {
        self.mean - self.margin()
    }

    pub fn confidence_high(&self) -> f64 {
        self.mean + self.margin()
    }
}

// splitmix64 finalizer
fn trial_seed(seed: u64, trial: usize) -> u64 {
    let mut z = seed.wrapping_add((trial as u64).wrapping_mul(0x9e37_79b9_7f4a_7c15));
    z = (z ^ (z >> 30)).wrapping_mul(0xbf58_476d_1ce4_e5b9);
    z = (z ^ (z >> 27)).wrapping_mul(0x94d0_49bb_1331_11eb);
    z ^ (z >> 31)
}

////////////////////////////////////////////////////////////////////////////////
