//! Common heuristics for positions on a 2D grid, as `(row, column)` pairs.
//!
//! Each function returns the estimated cost between two cells when moving costs at least `1.0` per
//! orthogonal step. Use them with a closure capturing the goal:
//!
//! ```
//! use searchstat::path::heuristic;
//!
//! let goal = (4, 3);
//! let estimate = |cell: &(i64, i64)| heuristic::manhattan(*cell, goal);
//! assert_eq!(estimate(&(0, 0)), 7.0);
//! ```

use std::f64::consts::SQRT_2;

/// A position on a 2D grid.
pub type Cell = (i64, i64);

/// The "no information" heuristic. Always admissible, turns A* into Dijkstra's algorithm.
pub const fn zero<P>(_: &P) -> f64 {
    0.0
}

/// Distance when moving in 4 directions.
pub fn manhattan(from: Cell, to: Cell) -> f64 {
    from.0.abs_diff(to.0) as f64 + from.1.abs_diff(to.1) as f64
}

/// Distance when moving in 8 directions and diagonal steps cost the same as orthogonal ones.
pub fn chebyshev(from: Cell, to: Cell) -> f64 {
    from.0.abs_diff(to.0).max(from.1.abs_diff(to.1)) as f64
}

/// Distance when moving in 8 directions and diagonal steps cost `√2`.
pub fn octile(from: Cell, to: Cell) -> f64 {
    let rows = from.0.abs_diff(to.0) as f64;
    let columns = from.1.abs_diff(to.1) as f64;
    let (long, short) = (rows.max(columns), rows.min(columns));
    (long - short) + short * SQRT_2
}

/// Straight line distance, admissible for any movement with costs of at least the travelled
/// length.
pub fn euclidean(from: Cell, to: Cell) -> f64 {
    let rows = from.0.abs_diff(to.0) as f64;
    let columns = from.1.abs_diff(to.1) as f64;
    rows.hypot(columns)
}
