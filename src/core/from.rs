use compare::natural;

use super::*;
use crate::config::DEFAULT_EXPAND_FACTOR;

impl <P: Ord, E> From<Vec<(P, E)>> for PriorityDeque<P, E> {
    /// Builds a min-oriented queue from `(priority, element)` pairs with a
    /// single linear-time rebuild. Takes the same shape that
    /// [`into_vec`](PriorityDeque::into_vec) returns.
    ///
    /// # Examples
    /// ```
    /// use depq::PriorityDeque;
    /// let mut pq = PriorityDeque::from(vec![(3, "x"), (1, "y"), (2, "z")]);
    /// assert_eq!(pq.capacity(), 3);
    /// assert_eq!(pq.extract_min().unwrap(), (1, "y"));
    /// ```
    fn from(vec: Vec<(P, E)>) -> Self {
        let nodes = vec
            .into_iter()
            .map(|(priority, element)| Node { priority, element })
            .collect();
        let mut heap = PriorityDeque {
            nodes: NodeVec::from_vec(nodes, DEFAULT_EXPAND_FACTOR),
            orientation: Orientation::Min,
            cmp: natural(),
        };
        heap.rebuild();
        heap
    }
}

impl <P: Ord, E, const N: usize> From<[(P, E); N]> for PriorityDeque<P, E> {
    fn from(array: [(P, E); N]) -> Self {
        PriorityDeque::from(Vec::from(array))
    }
}
