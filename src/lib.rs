//! A small toolbox of generic, numerics-light algorithms: an A* shortest-path search over a
//! caller-described graph, and a streaming mean/variance accumulator.
//!
//! # Purpose
//! Both components are meant to be dropped into host applications that already own their data.
//! The path search never materializes a graph: it asks the caller for a heuristic and for the
//! neighbours of a position, on demand. The statistics accumulator never stores samples: it keeps
//! a count, a mean and a sum of squares, updated one sample at a time.
//!
//! # Method
//! - [`path`] implements A* with a binary heap frontier and lazy deletion of stale entries. The
//!   graph is described through the [`SearchSpace`](path::SearchSpace) trait, which closures can
//!   implement through [`Weighted`](path::Weighted) and [`Unit`](path::Unit).
//! - [`stats`] implements Welford's recurrence in
//!   [`RecurrentStatistics`](stats::RecurrentStatistics), plus the standalone recurrence helpers
//!   and batch reference computations.
//!
//! # Error Handling
//! Not finding a path isn't an error, so searches return an empty [`Vec`] (or [`None`]) instead of
//! a [`Result`]. Asking for a variance before enough samples have been seen is a foreseeable
//! mistake rather than a bug, so it is reported as an
//! [`InsufficientSamples`](stats::InsufficientSamples) error instead of a panic.
//!
//! Errors are strongly typed structs and enums which implement [`Error`](std::error::Error),
//! derived with `derive_more` to remove the repetitive `Display` implementations.
//!
//! # Logging
//! The search emits [`tracing`] events at `debug` and `trace` level. This crate never installs a
//! subscriber, that's left to the application.
#![warn(missing_docs)]
#![warn(clippy::missing_safety_doc)]
#![warn(clippy::undocumented_unsafe_blocks)]
#![warn(clippy::missing_const_for_fn)]
#![warn(clippy::missing_panics_doc)]
#![warn(clippy::unwrap_used)]
#![allow(clippy::module_inception)]

#[cfg(feature = "path")]
pub mod path;
#[cfg(feature = "stats")]
pub mod stats;

pub(crate) mod util;
