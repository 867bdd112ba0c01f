use std::collections::{BinaryHeap, HashMap, HashSet};
use std::hash::Hash;
use std::iter::Rev;
use std::slice;

use tracing::{debug, trace};

use super::node::FrontierNode;
use super::{PathOptions, SearchSpace, Unit, Weighted};

/// Computes the shortest path from `start` to `goal` using A*.
///
/// The search is unaware of the graph: `heuristic` estimates the remaining cost from a position
/// and `neighbors` returns the valid neighbours of a position, each with the (non-negative) weight
/// of the edge leading to it.
///
/// # Returned Order
/// The path is **reversed**: it starts with `goal` and ends with the position right after
/// `start`, which isn't included. Iterate it in reverse to walk from start to goal. If
/// `start == goal`, the path is `[goal]`. If the goal can't be reached, the path is empty.
///
/// ```
/// use searchstat::path;
///
/// let path = path::find_path(
///     &'a',
///     &'c',
///     |_| 0.0,
///     |p: &char| match p {
///         'a' => vec![('b', 1.0)],
///         'b' => vec![('c', 1.0)],
///         _ => vec![],
///     },
/// );
/// assert_eq!(path, ['c', 'b']);
/// ```
pub fn find_path<P, H, N, I>(start: &P, goal: &P, heuristic: H, neighbors: N) -> Vec<P>
where
    P: Clone + Eq + Hash,
    H: Fn(&P) -> f64,
    N: Fn(&P) -> I,
    I: IntoIterator<Item = (P, f64)>,
{
    PathFinder::new(Weighted::new(heuristic, neighbors)).find_path(start, goal)
}

/// Computes the shortest path from `start` to `goal` using A*, where every edge has a weight of
/// `1.0` and `neighbors` returns plain positions.
///
/// The returned path follows the same reversed order as [`find_path`].
pub fn find_unit_path<P, H, N, I>(start: &P, goal: &P, heuristic: H, neighbors: N) -> Vec<P>
where
    P: Clone + Eq + Hash,
    H: Fn(&P) -> f64,
    N: Fn(&P) -> I,
    I: IntoIterator<Item = P>,
{
    PathFinder::new(Unit::new(heuristic, neighbors)).find_path(start, goal)
}

/// An A* search over a [`SearchSpace`], configured with [`PathOptions`].
///
/// A PathFinder holds no state between searches, so the same instance can be reused for any number
/// of start/goal pairs (as long as the heuristic of the space matches the goal).
///
/// # Time Complexity
/// For this analysis of time complexity, variables are defined as follows:
/// - `v`: The number of positions reached by the search.
/// - `e`: The number of edges leaving expanded positions.
///
/// | Method | Complexity |
/// |-|-|
/// | `find_path` | `O((v + e) log(e))`* |
/// | `search` | `O((v + e) log(e))`* |
///
/// \* Assuming `O(1)` hashing and neighbour enumeration. Stale frontier entries aren't removed,
/// they're skipped when popped, so the frontier can hold up to `e` entries.
#[derive(Debug, Clone)]
pub struct PathFinder<S: SearchSpace> {
    space: S,
    options: PathOptions,
}

impl<S: SearchSpace> PathFinder<S> {
    /// Creates a new PathFinder over `space` with the default options.
    pub const fn new(space: S) -> PathFinder<S> {
        PathFinder {
            space,
            options: PathOptions::new(),
        }
    }

    /// Creates a new PathFinder over `space` with the provided `options`.
    pub const fn with_options(space: S, options: PathOptions) -> PathFinder<S> {
        PathFinder {
            space,
            options,
        }
    }

    /// Returns a reference to the underlying search space.
    pub const fn space(&self) -> &S {
        &self.space
    }

    /// Returns the options used by this PathFinder.
    pub const fn options(&self) -> PathOptions {
        self.options
    }

    /// Consumes the PathFinder, returning the underlying search space.
    pub fn into_space(self) -> S {
        self.space
    }

    /// Computes the shortest path from `start` to `goal`. The path is reversed (goal first), see
    /// [`find_path`](super::find_path) for the exact contract. An empty Vec is returned when no
    /// path exists or when the expansion limit is reached.
    pub fn find_path(&self, start: &S::Position, goal: &S::Position) -> Vec<S::Position> {
        self.search(start, goal)
            .map(Path::into_positions)
            .unwrap_or_default()
    }

    /// Runs the search from `start` to `goal`, returning the path found alongside its cost, or
    /// None if the goal can't be reached.
    pub fn search(&self, start: &S::Position, goal: &S::Position) -> Option<Path<S::Position>> {
        let mut frontier = BinaryHeap::new();
        let mut g_scores: HashMap<S::Position, f64> = HashMap::new();
        let mut came_from: HashMap<S::Position, (S::Position, f64)> = HashMap::new();
        let mut finalized: HashSet<S::Position> = HashSet::new();
        let mut edges = Vec::new();
        let mut expanded = 0_usize;

        g_scores.insert(start.clone(), 0.0);
        frontier.push(FrontierNode::new(start.clone(), self.space.heuristic(start)));
        trace!("A* search started");

        while let Some(FrontierNode { position: current, .. }) = frontier.pop() {
            // Lazy deletion: an older, worse entry for an already finalized position.
            if !finalized.insert(current.clone()) {
                continue;
            }

            let current_g = g_scores.get(&current).copied().unwrap_or(f64::INFINITY);

            if current == *goal {
                let (positions, cost) = self.reconstruct(start, &current, &came_from);
                debug!(cost, expanded, "A* reached the goal");
                return Some(Path {
                    positions,
                    cost,
                    expanded,
                });
            }

            if self.options.max_expansions.is_some_and(|limit| expanded >= limit) {
                debug!(expanded, "A* expansion limit reached");
                return None;
            }
            expanded += 1;

            edges.clear();
            self.space.neighbors(&current, &mut edges);

            for (neighbor, weight) in edges.drain(..) {
                let tentative_g = current_g + weight;
                let neighbor_g = g_scores.get(&neighbor).copied().unwrap_or(f64::INFINITY);

                if tentative_g >= neighbor_g {
                    continue;
                }

                came_from.insert(neighbor.clone(), (current.clone(), weight));
                g_scores.insert(neighbor.clone(), tentative_g);

                if !finalized.contains(&neighbor) {
                    let f_score = tentative_g + self.space.heuristic(&neighbor);
                    frontier.push(FrontierNode::new(neighbor, f_score));
                }
            }
        }

        debug!(expanded, "A* frontier exhausted without reaching the goal");
        None
    }

    /// Walks `came_from` back from the goal, stopping before `start`, and sums the weights of the
    /// walked edges.
    ///
    /// The goal's g-score can't be used as the cost: relaxing an already finalized position rewires
    /// its `came_from` entry without updating the g-scores of the positions reached through it.
    fn reconstruct(
        &self,
        start: &S::Position,
        goal: &S::Position,
        came_from: &HashMap<S::Position, (S::Position, f64)>,
    ) -> (Vec<S::Position>, f64) {
        let mut positions = vec![goal.clone()];
        let mut cost = 0.0;
        let mut cursor = goal;

        while let Some((previous, weight)) = came_from.get(cursor) {
            cost += weight;
            if previous == start {
                break;
            }
            positions.push(previous.clone());
            cursor = previous;
        }

        if self.options.include_start && goal != start {
            positions.push(start.clone());
        }

        positions.shrink_to_fit();
        (positions, cost)
    }
}

/// A path found by [`PathFinder::search`].
///
/// Positions are stored goal first, as returned by [`find_path`](super::find_path). Use
/// [`iter_forward`](Path::iter_forward) to walk them from the start instead.
#[derive(Debug, Clone, PartialEq)]
pub struct Path<P> {
    positions: Vec<P>,
    cost: f64,
    expanded: usize,
}

impl<P> Path<P> {
    /// Returns the positions of the path, goal first.
    pub fn positions(&self) -> &[P] {
        &self.positions
    }

    /// Returns the sum of the weights of the edges walked by the path, from the start to the goal.
    ///
    /// With a consistent heuristic this is also the goal's g-score. An admissible but inconsistent
    /// heuristic can leave the goal's g-score above the weight of the returned path.
    pub const fn cost(&self) -> f64 {
        self.cost
    }

    /// Returns the number of positions that were expanded before the goal was reached.
    pub const fn expanded(&self) -> usize {
        self.expanded
    }

    /// Returns the number of positions in the path.
    pub fn len(&self) -> usize {
        self.positions.len()
    }

    /// Returns true if the path contains no positions.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns an iterator over the positions in walking order, from the start to the goal.
    pub fn iter_forward(&self) -> Rev<slice::Iter<'_, P>> {
        self.positions.iter().rev()
    }

    /// Consumes the path, returning its positions, goal first.
    pub fn into_positions(self) -> Vec<P> {
        self.positions
    }
}
