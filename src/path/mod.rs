//! A* shortest-path search over a caller-described graph.
//!
//! The quickest entry points are [`find_path`] (weighted edges) and [`find_unit_path`] (every edge
//! weighs `1.0`), which take the heuristic and neighbour functions as closures. For reusable or
//! configured searches, implement [`SearchSpace`] and use a [`PathFinder`].
//!
//! All returned paths are **reversed**: goal first, without the start position. Reverse-iterate
//! them (or use [`Path::iter_forward`]) to walk from start to goal.
//!
//! [`Grid`] is a ready-made search space for weighted 2D maps described as text.
#![warn(missing_docs)]

pub mod heuristic;

mod a_star;
mod error;
mod grid;
mod node;
mod options;
mod space;
mod tests;

pub use a_star::*;
pub use error::*;
pub use grid::*;
pub use options::*;
pub use space::*;
