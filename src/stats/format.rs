use std::fmt::{self, Display, Formatter};

use super::RecurrentStatistics;

const NOT_ENOUGH_SAMPLES: &str = " -> Not enough samples yet";

/// Formats `stats` as a short report, with a placeholder for each variance that doesn't have enough
/// samples yet.
///
/// ```
/// use searchstat::stats::{self, RecurrentStatistics};
///
/// let mut accumulator = RecurrentStatistics::new();
/// accumulator.update_with(3.0);
/// assert_eq!(
///     stats::format(&accumulator),
///     "Stats [N = 1]\nMean: 3\nVar : 0\nSVar:  -> Not enough samples yet"
/// );
/// ```
pub fn format(stats: &RecurrentStatistics) -> String {
    stats.to_string()
}

impl Display for RecurrentStatistics {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "Stats [N = {}]\nMean: {}", self.count(), self.mean())?;

        match self.variance() {
            Ok(variance) => write!(f, "\nVar : {}", variance)?,
            Err(_) => write!(f, "\nVar : {}", NOT_ENOUGH_SAMPLES)?,
        }

        match self.sample_variance() {
            Ok(sample_variance) => write!(f, "\nSVar: {}", sample_variance),
            Err(_) => write!(f, "\nSVar: {}", NOT_ENOUGH_SAMPLES),
        }
    }
}
