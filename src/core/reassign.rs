use std::cmp::Ordering;

use compare::Compare;
use log::trace;

use super::*;
use crate::error::{HeapError, Result};
use crate::order::{left, parent, right};

/// Repair chosen after a priority changed in place.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Repair {
    Up,
    Down,
    Keep,
}

impl <P, E, C: Compare<P>> PriorityDeque<P, E, C> {
    /// Replaces the priority of the first element for which
    /// `matches(stored, element)` returns `Ordering::Equal`, and returns the old
    /// priority.
    ///
    /// The element is found by a linear scan. Afterwards the node is compared
    /// with its parent and children only, and is moved either up or down.
    ///
    /// # Examples
    /// ```
    /// use depq::{HeapError, PriorityDeque};
    /// let mut pq = PriorityDeque::new();
    /// pq.insert(("id", 7), 30).unwrap();
    /// pq.insert(("id", 8), 10).unwrap();
    /// let by_id = |a: &(&str, i32), b: &(&str, i32)| a.1.cmp(&b.1);
    /// let old = pq.reassign_priority_by(&("", 7), 1, by_id).unwrap();
    /// assert_eq!(old, 30);
    /// assert_eq!(pq.extract_min().unwrap(), (1, ("id", 7)));
    /// let missing = pq.reassign_priority_by(&("", 9), 1, by_id);
    /// assert_eq!(missing, Err(HeapError::NotFound));
    /// ```
    pub fn reassign_priority_by<F>(&mut self, element: &E, new_priority: P, mut matches: F) -> Result<P>
    where
        F: FnMut(&E, &E) -> Ordering,
    {
        let index = self
            .nodes
            .as_slice()
            .iter()
            .position(|node| matches(&node.element, element) == Ordering::Equal)
            .ok_or(HeapError::NotFound)?;
        let node = &mut self.nodes.as_mut_slice()[index];
        let old = std::mem::replace(&mut node.priority, new_priority);
        let repair = self.repair_at(index);
        trace!("priority reassigned at {}, repair {:?}", index, repair);
        match repair {
            Repair::Up => {
                self.swim(index);
            }
            Repair::Down => {
                self.sink(index);
            }
            Repair::Keep => {}
        }
        Ok(old)
    }

    /// [`reassign_priority_by`](Self::reassign_priority_by) using `PartialEq`
    /// on the elements.
    ///
    /// # Examples
    /// ```
    /// use depq::PriorityDeque;
    /// let mut pq = PriorityDeque::new();
    /// pq.insert("low", 10).unwrap();
    /// pq.insert("high", 20).unwrap();
    /// assert_eq!(pq.reassign_priority(&"low", 99).unwrap(), 10);
    /// assert_eq!(pq.extract_max().unwrap(), (99, "low"));
    /// ```
    pub fn reassign_priority(&mut self, element: &E, new_priority: P) -> Result<P>
    where
        E: PartialEq,
    {
        self.reassign_priority_by(element, new_priority, |a, b| {
            if a == b {
                Ordering::Equal
            } else {
                Ordering::Less
            }
        })
    }

    /// Decides from the parent and both children which way the node at
    /// `index` has to move. A single change can only break one side.
    fn repair_at(&self, index: usize) -> Repair {
        let nodes = self.nodes.as_slice();
        let this = &nodes[index].priority;
        let with_parent = if index == 0 {
            Ordering::Equal
        } else {
            self.cmp.compare(this, &nodes[parent(index)].priority)
        };
        let with_left = nodes
            .get(left(index))
            .map_or(Ordering::Equal, |child| self.cmp.compare(this, &child.priority));
        let with_right = nodes
            .get(right(index))
            .map_or(Ordering::Equal, |child| self.cmp.compare(this, &child.priority));
        let (rises, falls) = match self.orientation {
            Orientation::Min => (Ordering::Less, Ordering::Greater),
            Orientation::Max => (Ordering::Greater, Ordering::Less),
        };
        if with_parent == rises {
            Repair::Up
        } else if with_left == falls || with_right == falls {
            Repair::Down
        } else {
            Repair::Keep
        }
    }
}
