use rand::Rng;

use crate::error::{Error, Result};

/// Validate that a population of `n` rows and a requested sample count (e.g. an
/// ensemble's `ensemble_size`) are both usable before drawing any bootstrap samples.
pub fn validate_sample_size(n: usize, requested: usize) -> Result<()> {
    if n == 0 {
        return Err(Error::EmptyDataset);
    }
    if requested == 0 {
        return Err(Error::EmptyEnsemble);
    }
    Ok(())
}

/// Draw `n` row indices uniformly at random, with replacement, from `[0, n)`.
///
/// This is the bootstrap-resampling primitive bagging is built on: each draw is
/// independent, so the same row index may appear zero, one, or many times.
pub fn bootstrap_sample_indices(n: usize, rng: &mut impl Rng) -> Vec<usize> {
    (0..n).map(|_| rng.gen_range(0..n)).collect()
}
