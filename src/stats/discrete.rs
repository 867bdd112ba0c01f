//! Batch statistics over a complete slice of samples.
//!
//! These need every sample in memory and walk the data twice, which makes them a good reference
//! for checking [`RecurrentStatistics`](super::RecurrentStatistics), but a poor fit for streams.

use super::InsufficientSamples;

/// Returns the arithmetic mean of `samples`.
///
/// # Errors
/// Returns [`InsufficientSamples`] if `samples` is empty.
pub fn mean(samples: &[f64]) -> Result<f64, InsufficientSamples> {
    InsufficientSamples::check(1, samples.len())?;
    Ok(samples.iter().sum::<f64>() / samples.len() as f64)
}

/// Returns the population variance of `samples`, `Σ(x - mean)² / n`. If the mean is already
/// known, it can be provided as `known_mean` to skip computing it again.
///
/// # Errors
/// Returns [`InsufficientSamples`] if `samples` is empty.
pub fn variance(samples: &[f64], known_mean: Option<f64>) -> Result<f64, InsufficientSamples> {
    InsufficientSamples::check(1, samples.len())?;
    let center = match known_mean {
        Some(known) => known,
        None => mean(samples)?,
    };

    let sum_squares: f64 = samples.iter().map(|sample| (sample - center).powi(2)).sum();
    Ok(sum_squares / samples.len() as f64)
}

/// Returns the population standard deviation of `samples`.
///
/// # Errors
/// Returns [`InsufficientSamples`] if `samples` is empty.
pub fn std_dev(samples: &[f64], known_mean: Option<f64>) -> Result<f64, InsufficientSamples> {
    variance(samples, known_mean).map(f64::sqrt)
}
