use compare::Natural;

use crate::config::Orientation;
use crate::nodevec::NodeVec;

/// A double-ended priority queue on a single array-backed binary heap.
///
/// The array is heap ordered toward one extreme at a time. Asking for the
/// other extreme rebuilds it in place in linear time, after which repeated
/// requests for that extreme are cheap again.
///
/// # Functionality
/// `insert`: Add an element with its priority.
/// `peek_min` / `peek_max`: Borrow the entry with the least / greatest priority.
/// `extract_min` / `extract_max`: Remove and return that entry.
/// `reassign_priority`: Change the priority of a stored element.
/// `reorient`: Switch the extreme kept at the root.
///
/// # Examples
/// ```
/// use depq::PriorityDeque;
/// let mut pq = PriorityDeque::new();
/// for (e, p) in [("e", 5), ("a", 1), ("h", 8)] {
///     pq.insert(e, p).unwrap();
/// }
/// assert_eq!(pq.extract_max().unwrap(), (8, "h"));
/// assert_eq!(pq.extract_min().unwrap(), (1, "a"));
/// assert_eq!(pq.len(), 1);
/// ```
pub struct PriorityDeque <P, E, C = Natural<P>> {
    pub(crate) nodes: NodeVec<Node<P, E>>,
    pub(crate) orientation: Orientation,
    pub(crate) cmp: C,
}

pub(crate) struct Node <P, E> {
    pub(crate) priority: P,
    pub(crate) element: E,
}

impl <P, E> Node<P, E> {
    pub(crate) fn into_pair(self) -> (P, E) {
        (self.priority, self.element)
    }
}

mod construct;
mod push;
mod bubble;
mod view;
mod reassign;
mod property;
mod iter;
mod into;
mod from;
mod extend;
mod debug;

pub use iter::Iter;
