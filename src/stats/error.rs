use derive_more::{Display, Error};

/// The error returned when a statistic is requested before enough samples have been seen.
///
/// The variance needs at least one sample and the sample variance needs at least two.
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, Error)]
#[display("need at least {required} samples, only {available} available")]
pub struct InsufficientSamples {
    /// The number of samples the statistic requires.
    pub required: usize,
    /// The number of samples absorbed so far.
    pub available: usize,
}

impl InsufficientSamples {
    /// Returns `Ok(())` if `available` is at least `required`.
    pub(crate) const fn check(required: usize, available: usize) -> Result<(), InsufficientSamples> {
        if available < required {
            Err(InsufficientSamples { required, available })
        } else {
            Ok(())
        }
    }
}
