//! Streaming statistics over samples that arrive one at a time.
//!
//! [`RecurrentStatistics`] is the main type: it keeps a numerically stable running mean and
//! variance without storing the samples. [`recurrence`] exposes the single-step updates it's built
//! on, and [`discrete`] holds batch computations over complete slices.
//!
//! Variances which need more samples than have been absorbed return an [`InsufficientSamples`]
//! error rather than panicking.
#![warn(missing_docs)]

pub mod discrete;
pub mod recurrence;

mod error;
mod format;
mod recurrent;

pub use error::*;
pub use format::*;
pub use recurrent::*;
