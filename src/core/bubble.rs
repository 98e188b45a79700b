use compare::Compare;
use log::debug;

use super::*;
use crate::order;

impl <P, E, C: Compare<P>> PriorityDeque<P, E, C> {
    /// Sift-up under the current orientation. Returns the final position.
    pub(crate) fn swim(&mut self, index: usize) -> usize {
        let cmp = &self.cmp;
        let mut f = |a: &Node<P, E>, b: &Node<P, E>| cmp.compare(&a.priority, &b.priority);
        let slice = self.nodes.as_mut_slice();
        match self.orientation {
            Orientation::Min => order::sift_up::<_, _, true>(slice, index, &mut f),
            Orientation::Max => order::sift_up::<_, _, false>(slice, index, &mut f),
        }
    }

    /// Sift-down under the current orientation. Returns the final position.
    pub(crate) fn sink(&mut self, index: usize) -> usize {
        let cmp = &self.cmp;
        let mut f = |a: &Node<P, E>, b: &Node<P, E>| cmp.compare(&a.priority, &b.priority);
        let slice = self.nodes.as_mut_slice();
        match self.orientation {
            Orientation::Min => order::sift_down::<_, _, true>(slice, index, &mut f),
            Orientation::Max => order::sift_down::<_, _, false>(slice, index, &mut f),
        }
    }

    /// Rebuilds the whole array for the current orientation.
    pub(crate) fn rebuild(&mut self) {
        let cmp = &self.cmp;
        let f = |a: &Node<P, E>, b: &Node<P, E>| cmp.compare(&a.priority, &b.priority);
        let slice = self.nodes.as_mut_slice();
        match self.orientation {
            Orientation::Min => order::build_min_heap(slice, f),
            Orientation::Max => order::build_max_heap(slice, f),
        }
    }

    /// Switches the extreme kept at the root to `target`, rebuilding the heap
    /// in linear time. Does nothing if the queue already has that orientation.
    ///
    /// # Examples
    /// ```
    /// use depq::{Orientation, PriorityDeque};
    /// let mut pq = PriorityDeque::new();
    /// pq.insert('a', 4).unwrap();
    /// pq.insert('b', 7).unwrap();
    /// pq.reorient(Orientation::Max);
    /// assert_eq!(pq.orientation(), Orientation::Max);
    /// assert_eq!(pq.iter().next(), Some((&7, &'b')));
    /// ```
    pub fn reorient(&mut self, target: Orientation) {
        if self.orientation == target {
            return;
        }
        debug!("reorienting {} nodes from {:?} to {:?}", self.nodes.len(), self.orientation, target);
        self.orientation = target;
        self.rebuild();
    }
}
