//! Rayon-based parallelisation utilities.
//!
//! Portfolio valuation maps every trade to a present value and then sums.
//! The map may run on the rayon pool; the sum never does. Results come back
//! in input order and are added left to right, so the parallel path gives
//! bit-identical totals to the sequential one.

use num_traits::Float;
use rayon::prelude::*;

/// Minimum number of items each rayon task processes.
pub const DEFAULT_BATCH_SIZE: usize = 64;

/// Portfolio size at which valuation switches to the rayon pool.
pub const DEFAULT_PARALLEL_THRESHOLD: usize = 256;

/// Configuration for parallel execution.
///
/// # Examples
///
/// ```
/// use pricer_risk::parallel::ParallelConfig;
///
/// let config = ParallelConfig::default();
/// assert!(!config.should_parallelize(10));
/// assert!(config.should_parallelize(256));
///
/// assert!(!ParallelConfig::sequential().should_parallelize(1_000_000));
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ParallelConfig {
    /// Minimum items per rayon task
    pub batch_size: usize,
    /// Minimum items before using parallelism
    pub parallel_threshold: usize,
}

impl Default for ParallelConfig {
    fn default() -> Self {
        Self {
            batch_size: DEFAULT_BATCH_SIZE,
            parallel_threshold: DEFAULT_PARALLEL_THRESHOLD,
        }
    }
}

impl ParallelConfig {
    /// Creates a new parallel configuration.
    pub fn new(batch_size: usize, parallel_threshold: usize) -> Self {
        Self {
            batch_size: batch_size.max(1),
            parallel_threshold,
        }
    }

    /// Configuration that never leaves the calling thread.
    pub fn sequential() -> Self {
        Self {
            batch_size: DEFAULT_BATCH_SIZE,
            parallel_threshold: usize::MAX,
        }
    }

    /// Returns whether to use parallel processing for the given item count.
    #[inline]
    pub fn should_parallelize(&self, n_items: usize) -> bool {
        n_items >= self.parallel_threshold
    }
}

/// Maps every item, preserving input order in the output.
///
/// Runs on the rayon pool when `config.should_parallelize(items.len())`,
/// otherwise on the calling thread.
pub fn ordered_map<I, R, F>(items: &[I], config: &ParallelConfig, mapper: F) -> Vec<R>
where
    I: Sync,
    R: Send,
    F: Fn(&I) -> R + Sync + Send,
{
    if config.should_parallelize(items.len()) {
        items
            .par_iter()
            .with_min_len(config.batch_size.max(1))
            .map(mapper)
            .collect()
    } else {
        items.iter().map(mapper).collect()
    }
}

/// Sums fallible values left to right, stopping at the first error.
///
/// # Examples
///
/// ```
/// use pricer_risk::parallel::ordered_sum;
///
/// let ok: Vec<Result<f64, String>> = vec![Ok(1.0), Ok(2.5)];
/// assert_eq!(ordered_sum(ok), Ok(3.5));
///
/// let failed: Vec<Result<f64, String>> = vec![Ok(1.0), Err("first".into()), Err("second".into())];
/// assert_eq!(ordered_sum(failed), Err("first".to_string()));
/// ```
pub fn ordered_sum<T, E>(values: impl IntoIterator<Item = Result<T, E>>) -> Result<T, E>
where
    T: Float,
{
    let mut total = T::zero();
    for value in values {
        total = total + value?;
    }
    Ok(total)
}
