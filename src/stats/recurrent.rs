use tracing::trace;

use super::recurrence::{update_mean, update_sum_squares};
use super::InsufficientSamples;

/// Online computation of the mean and variance of a stream of samples, using Welford's algorithm.
///
/// Samples aren't stored. Instead, the accumulator keeps the number of samples, the running mean
/// and the running sum of squared differences from the mean, which avoids the catastrophic
/// cancellation of the naive `Σx² / n - mean²` formula.
///
/// Updating requires `&mut self`, so sharing an accumulator between threads needs external
/// synchronization.
///
/// ```
/// use searchstat::stats::RecurrentStatistics;
///
/// let mut stats = RecurrentStatistics::new();
/// for sample in [2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0] {
///     stats.update_with(sample);
/// }
/// assert_eq!(stats.mean(), 5.0);
/// assert_eq!(stats.variance(), Ok(4.0));
/// ```
///
/// # Time Complexity
/// All methods are `O(1)`.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct RecurrentStatistics {
    count: usize,
    mean: f64,
    sum_squares: f64,
}

impl RecurrentStatistics {
    /// Creates a new, empty accumulator with a mean and sum of squares of `0`.
    pub const fn new() -> RecurrentStatistics {
        RecurrentStatistics::with_initial(0.0, 0.0)
    }

    /// Creates a new, empty accumulator starting from the provided `mean` and `sum_squares`.
    pub const fn with_initial(mean: f64, sum_squares: f64) -> RecurrentStatistics {
        RecurrentStatistics {
            count: 0,
            mean,
            sum_squares,
        }
    }

    /// Resets the accumulator, setting the number of samples to 0 and starting again from the
    /// provided `mean` and `sum_squares`.
    pub fn reset(&mut self, mean: f64, sum_squares: f64) {
        trace!(count = self.count, mean, sum_squares, "statistics reset");
        *self = RecurrentStatistics::with_initial(mean, sum_squares);
    }

    /// Absorbs a new `sample` into the statistics.
    pub fn update_with<T: Into<f64>>(&mut self, sample: T) {
        let sample = sample.into();
        self.count += 1;
        // The sum of squares needs both the old and the new mean, so the mean is only replaced
        // afterwards.
        let new_mean = update_mean(sample, self.mean, self.count);
        self.sum_squares = update_sum_squares(sample, self.sum_squares, new_mean, self.mean);
        self.mean = new_mean;
    }

    /// Returns the number of samples absorbed since creation or the last reset.
    pub const fn count(&self) -> usize {
        self.count
    }

    /// Returns the current mean.
    pub const fn mean(&self) -> f64 {
        self.mean
    }

    /// Returns the current sum of squared differences from the mean.
    pub const fn sum_squares(&self) -> f64 {
        self.sum_squares
    }

    /// Returns the population variance, `sum_squares / count`.
    ///
    /// # Errors
    /// Returns [`InsufficientSamples`] if no sample has been absorbed.
    pub fn variance(&self) -> Result<f64, InsufficientSamples> {
        InsufficientSamples::check(1, self.count)?;
        Ok(self.sum_squares / self.count as f64)
    }

    /// Returns the sample (unbiased) variance, `sum_squares / (count - 1)`.
    ///
    /// # Errors
    /// Returns [`InsufficientSamples`] if fewer than two samples have been absorbed.
    pub fn sample_variance(&self) -> Result<f64, InsufficientSamples> {
        InsufficientSamples::check(2, self.count)?;
        Ok(self.sum_squares / (self.count - 1) as f64)
    }

    /// Returns the population standard deviation, the square root of
    /// [`variance`](RecurrentStatistics::variance).
    ///
    /// # Errors
    /// Returns [`InsufficientSamples`] if no sample has been absorbed.
    pub fn std_dev(&self) -> Result<f64, InsufficientSamples> {
        self.variance().map(f64::sqrt)
    }

    /// Returns the sample standard deviation, the square root of
    /// [`sample_variance`](RecurrentStatistics::sample_variance).
    ///
    /// # Errors
    /// Returns [`InsufficientSamples`] if fewer than two samples have been absorbed.
    pub fn sample_std_dev(&self) -> Result<f64, InsufficientSamples> {
        self.sample_variance().map(f64::sqrt)
    }
}

impl Extend<f64> for RecurrentStatistics {
    fn extend<I: IntoIterator<Item = f64>>(&mut self, iter: I) {
        for sample in iter {
            self.update_with(sample);
        }
    }
}

impl<'a> Extend<&'a f64> for RecurrentStatistics {
    fn extend<I: IntoIterator<Item = &'a f64>>(&mut self, iter: I) {
        self.extend(iter.into_iter().copied());
    }
}

impl FromIterator<f64> for RecurrentStatistics {
    fn from_iter<I: IntoIterator<Item = f64>>(iter: I) -> Self {
        let mut stats = RecurrentStatistics::new();
        stats.extend(iter);
        stats
    }
}
