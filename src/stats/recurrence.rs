//! The single-step recurrences behind [`RecurrentStatistics`](super::RecurrentStatistics), for
//! callers that want to keep the state themselves.
//!
//! `n` is always the number of samples *including* the new one. The first sample uses `n = 1`.
//!
//! See <https://en.wikipedia.org/wiki/Algorithms_for_calculating_variance>.

/// Computes the mean `M_n` of `n` samples from the mean `M_n-1` of the first `n - 1` and the new
/// sample `X_n`: `M_n = M_n-1 + (X_n - M_n-1) / n`.
pub const fn update_mean(sample: f64, old_mean: f64, n: usize) -> f64 {
    old_mean + (sample - old_mean) / n as f64
}

/// Computes the variance `V_n` of `n` samples from the previous variance and both means:
/// `V_n = V_n-1 + ((X_n - M_n) * (X_n - M_n-1) - V_n-1) / n`.
///
/// This form can lose precision over long streams, [`update_sum_squares`] is more stable.
pub const fn update_variance(sample: f64, old_variance: f64, new_mean: f64, old_mean: f64, n: usize) -> f64 {
    old_variance + ((sample - new_mean) * (sample - old_mean) - old_variance) / n as f64
}

/// Computes the sum of squared differences from the mean `S_n` from the previous sum and both
/// means: `S_n = S_n-1 + (X_n - M_n) * (X_n - M_n-1)`.
///
/// The variance is then `S_n / n` and the sample variance `S_n / (n - 1)`.
pub const fn update_sum_squares(sample: f64, old_sum_squares: f64, new_mean: f64, old_mean: f64) -> f64 {
    old_sum_squares + (sample - new_mean) * (sample - old_mean)
}
