use std::fmt;

use rand::rngs::StdRng;
use rand::{thread_rng, Rng, SeedableRng};
use serde_json::Value;

use error::{PercolationError, Result};
use percolation::Percolation;

/// z-score for a two-sided 95% interval.
const CONFIDENCE_95: f64 = 1.96;

/// Monte Carlo estimate of the percolation threshold over independent trials.
#[derive(Debug, Clone)]
pub struct PercolationStats {
    n: usize,
    results: Vec<f64>,
}

/// Everything the command line reports, in one value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Summary {
    pub n: usize,
    pub trials: usize,
    pub mean: f64,
    pub stddev: f64,
    pub confidence_lo: f64,
    pub confidence_hi: f64,
}

impl Summary {
    pub fn to_json(&self) -> Value {
        json!({
            "n": self.n,
            "trials": self.trials,
            "mean": self.mean,
            "stddev": self.stddev,
            "confidence_lo": self.confidence_lo,
            "confidence_hi": self.confidence_hi,
        })
    }
}

impl fmt::Display for Summary {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "mean                    = {}", self.mean)?;
        writeln!(f, "stddev                  = {}", self.stddev)?;
        write!(f, "95% confidence interval = [{}, {}]", self.confidence_lo, self.confidence_hi)
    }
}

/// Opens uniformly random blocked sites on a fresh n×n grid until it percolates.
fn percolate<R: Rng>(n: usize, rng: &mut R) -> Result<Percolation> {
    let mut grid = Percolation::new(n)?;
    while !grid.percolates() {
        let (row, col) = loop {
            let row = rng.gen_range(1..=n);
            let col = rng.gen_range(1..=n);
            if !grid.is_open(row, col)? {
                break (row, col);
            }
        };
        grid.open(row, col)?;
    }
    Ok(grid)
}

/// One trial: the fraction of sites open when the grid first percolates.
pub fn run_trial<R: Rng>(n: usize, rng: &mut R) -> Result<f64> {
    Ok(percolate(n, rng)?.open_fraction())
}

impl PercolationStats {
    /// Runs `trials` experiments on an n×n grid, drawing from the thread-local RNG.
    pub fn new(n: usize, trials: usize) -> Result<PercolationStats> {
        PercolationStats::with_rng(n, trials, &mut thread_rng())
    }

    /// Same as `new`, but reproducible: equal seeds give equal results.
    pub fn with_seed(n: usize, trials: usize, seed: u64) -> Result<PercolationStats> {
        let mut rng = StdRng::seed_from_u64(seed);
        PercolationStats::with_rng(n, trials, &mut rng)
    }

    pub fn with_rng<R: Rng>(n: usize, trials: usize, rng: &mut R) -> Result<PercolationStats> {
        if n == 0 {
            return Err(PercolationError::InvalidSize { what: "grid size", value: 0 });
        }
        if trials == 0 {
            return Err(PercolationError::InvalidSize { what: "trial count", value: 0 });
        }

        let mut results = Vec::with_capacity(trials);
        for trial in 0..trials {
            let grid = percolate(n, rng)?;
            let threshold = grid.open_fraction();
            info!("{}", json!({
                "trial": trial,
                "n": n,
                "open_sites": grid.number_of_open_sites(),
                "threshold": threshold,
            }));
            results.push(threshold);
        }

        let stats = PercolationStats { n, results };
        info!("{}", stats.summary().to_json());
        Ok(stats)
    }

    pub fn size(&self) -> usize {
        self.n
    }

    pub fn trials(&self) -> usize {
        self.results.len()
    }

    /// Per-trial thresholds, in trial order.
    pub fn results(&self) -> &[f64] {
        &self.results
    }

    /// Sample mean of the percolation threshold.
    pub fn mean(&self) -> f64 {
        self.results.iter().sum::<f64>() / self.results.len() as f64
    }

    fn sample_stddev(&self, mean: f64) -> f64 {
        let t = self.results.len();
        if t == 1 {
            warn!("stddev over a single trial is undefined");
        }
        let sum_sq: f64 = self.results.iter().map(|x| (x - mean) * (x - mean)).sum();
        (sum_sq / (t as f64 - 1.0)).sqrt()
    }

    /// Sample standard deviation (divisor `trials - 1`). NaN for a single trial.
    pub fn stddev(&self) -> f64 {
        self.sample_stddev(self.mean())
    }

    fn half_width(&self, stddev: f64) -> f64 {
        CONFIDENCE_95 * stddev / (self.results.len() as f64).sqrt()
    }

    /// Low endpoint of the 95% confidence interval.
    pub fn confidence_lo(&self) -> f64 {
        self.summary().confidence_lo
    }

    /// High endpoint of the 95% confidence interval.
    pub fn confidence_hi(&self) -> f64 {
        self.summary().confidence_hi
    }

    /// Mean, spread and interval from a single pass over the results.
    pub fn summary(&self) -> Summary {
        let mean = self.mean();
        let stddev = self.sample_stddev(mean);
        let half_width = self.half_width(stddev);
        Summary {
            n: self.n,
            trials: self.trials(),
            mean,
            stddev,
            confidence_lo: mean - half_width,
            confidence_hi: mean + half_width,
        }
    }
}
