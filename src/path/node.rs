use std::cmp::Ordering;

/// An entry of the search frontier: a position and its `f = g + h` priority.
///
/// [`BinaryHeap`](std::collections::BinaryHeap) is a max-heap, so the ordering is reversed to pop
/// the lowest f-score first. A NaN f-score sorts after every other score.
#[derive(Debug, Clone)]
pub(crate) struct FrontierNode<P> {
    pub position: P,
    pub f_score: f64,
}

impl<P> FrontierNode<P> {
    pub const fn new(position: P, f_score: f64) -> FrontierNode<P> {
        FrontierNode {
            position,
            f_score,
        }
    }
}

impl<P> PartialEq for FrontierNode<P> {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl<P> Eq for FrontierNode<P> {}

impl<P> PartialOrd for FrontierNode<P> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<P> Ord for FrontierNode<P> {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self.f_score.is_nan(), other.f_score.is_nan()) {
            (true, true) => Ordering::Equal,
            (true, false) => Ordering::Less,
            (false, true) => Ordering::Greater,
            // Reversed, the lowest f-score is the "greatest" node.
            (false, false) => other.f_score.total_cmp(&self.f_score),
        }
    }
}
