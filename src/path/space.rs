use std::fmt::{self, Debug, Formatter};
use std::hash::Hash;
use std::marker::PhantomData;

/// The capability a graph needs to be searched: an estimate of the remaining cost from a position
/// and the weighted edges leaving it.
///
/// Nothing about the graph is stored by the search, so implementors are free to compute edges on
/// demand (a grid, a game board, a state machine...).
///
/// # Contract
/// - Edge weights must be non-negative. A* doesn't support negative weights, and a negative cycle
///   can make the search loop for as long as the cycle keeps "improving".
/// - The returned path is only guaranteed to be the shortest if the heuristic is admissible (never
///   overestimates) and consistent. Returning `0.0` everywhere is always admissible, it just turns
///   the search into Dijkstra's algorithm.
pub trait SearchSpace {
    /// The type used as a coordinate/key inside the graph.
    type Position: Clone + Eq + Hash;

    /// Returns the estimated cost from `position` to the goal.
    fn heuristic(&self, position: &Self::Position) -> f64;

    /// Appends the neighbours of `position`, paired with the weight of the edge leading to them,
    /// into `edges`. The caller clears `edges` before calling.
    fn neighbors(&self, position: &Self::Position, edges: &mut Vec<(Self::Position, f64)>);
}

impl<S: SearchSpace + ?Sized> SearchSpace for &S {
    type Position = S::Position;

    fn heuristic(&self, position: &Self::Position) -> f64 {
        (**self).heuristic(position)
    }

    fn neighbors(&self, position: &Self::Position, edges: &mut Vec<(Self::Position, f64)>) {
        (**self).neighbors(position, edges)
    }
}

/// A [`SearchSpace`] built from two closures, one for the heuristic and one returning weighted
/// neighbours.
pub struct Weighted<P, I, H, N> {
    heuristic: H,
    neighbors: N,
    _phantom: PhantomData<fn(&P) -> I>,
}

impl<P, I, H, N> Weighted<P, I, H, N>
where
    H: Fn(&P) -> f64,
    N: Fn(&P) -> I,
    I: IntoIterator<Item = (P, f64)>,
{
    /// Creates a new search space from the provided `heuristic` and `neighbors` functions.
    pub const fn new(heuristic: H, neighbors: N) -> Weighted<P, I, H, N> {
        Weighted {
            heuristic,
            neighbors,
            _phantom: PhantomData,
        }
    }
}

impl<P, I, H, N> SearchSpace for Weighted<P, I, H, N>
where
    P: Clone + Eq + Hash,
    H: Fn(&P) -> f64,
    N: Fn(&P) -> I,
    I: IntoIterator<Item = (P, f64)>,
{
    type Position = P;

    fn heuristic(&self, position: &P) -> f64 {
        (self.heuristic)(position)
    }

    fn neighbors(&self, position: &P, edges: &mut Vec<(P, f64)>) {
        edges.extend((self.neighbors)(position));
    }
}

impl<P, I, H, N> Debug for Weighted<P, I, H, N> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("Weighted").finish_non_exhaustive()
    }
}

/// A [`SearchSpace`] built from two closures, where the neighbour function returns plain
/// positions. Every edge has a weight of `1.0`.
pub struct Unit<P, I, H, N> {
    heuristic: H,
    neighbors: N,
    _phantom: PhantomData<fn(&P) -> I>,
}

impl<P, I, H, N> Unit<P, I, H, N>
where
    H: Fn(&P) -> f64,
    N: Fn(&P) -> I,
    I: IntoIterator<Item = P>,
{
    /// Creates a new unit-weight search space from the provided `heuristic` and `neighbors`
    /// functions.
    pub const fn new(heuristic: H, neighbors: N) -> Unit<P, I, H, N> {
        Unit {
            heuristic,
            neighbors,
            _phantom: PhantomData,
        }
    }
}

impl<P, I, H, N> SearchSpace for Unit<P, I, H, N>
where
    P: Clone + Eq + Hash,
    H: Fn(&P) -> f64,
    N: Fn(&P) -> I,
    I: IntoIterator<Item = P>,
{
    type Position = P;

    fn heuristic(&self, position: &P) -> f64 {
        (self.heuristic)(position)
    }

    fn neighbors(&self, position: &P, edges: &mut Vec<(P, f64)>) {
        edges.extend((self.neighbors)(position).into_iter().map(|neighbor| (neighbor, 1.0)));
    }
}

impl<P, I, H, N> Debug for Unit<P, I, H, N> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("Unit").finish_non_exhaustive()
    }
}
