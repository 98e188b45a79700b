use compare::Compare;

use super::*;
use crate::error::{HeapError, Result};

impl <P, E, C: Compare<P>> PriorityDeque<P, E, C> {
    fn peek_toward(&mut self, target: Orientation) -> Result<(&P, &E)> {
        if self.nodes.is_empty() {
            return Err(HeapError::EmptyQueue);
        }
        self.reorient(target);
        let root = &self.nodes.as_slice()[0];
        Ok((&root.priority, &root.element))
    }

    fn extract_toward(&mut self, target: Orientation) -> Result<(P, E)> {
        if self.nodes.is_empty() {
            return Err(HeapError::EmptyQueue);
        }
        self.reorient(target);
        let root = self.nodes.swap_remove(0).ok_or(HeapError::EmptyQueue)?;
        if !self.nodes.is_empty() {
            self.sink(0);
        }
        Ok(root.into_pair())
    }

    /// Returns the entry with the least priority as `(priority, element)`.
    ///
    /// If the queue is max-oriented it is rebuilt as a min-heap first, so this
    /// takes `&mut self` and may change [`orientation`](Self::orientation).
    ///
    /// # Examples
    /// ```
    /// use depq::{HeapError, PriorityDeque};
    /// let mut pq = PriorityDeque::<i32, &str>::new();
    /// assert_eq!(pq.peek_min(), Err(HeapError::EmptyQueue));
    /// pq.insert("b", 2).unwrap();
    /// pq.insert("a", 1).unwrap();
    /// assert_eq!(pq.peek_min(), Ok((&1, &"a")));
    /// ```
    pub fn peek_min(&mut self) -> Result<(&P, &E)> {
        self.peek_toward(Orientation::Min)
    }

    /// Returns the entry with the greatest priority as `(priority, element)`.
    ///
    /// # Examples
    /// ```
    /// use depq::{Orientation, PriorityDeque};
    /// let mut pq = PriorityDeque::new();
    /// pq.insert("b", 2).unwrap();
    /// pq.insert("a", 1).unwrap();
    /// assert_eq!(pq.peek_max(), Ok((&2, &"b")));
    /// assert_eq!(pq.orientation(), Orientation::Max);
    /// ```
    pub fn peek_max(&mut self) -> Result<(&P, &E)> {
        self.peek_toward(Orientation::Max)
    }

    /// Removes the entry with the least priority and hands it back.
    ///
    /// # Examples
    /// ```
    /// use depq::PriorityDeque;
    /// let mut pq = PriorityDeque::new();
    /// for p in [5, 1, 8] {
    ///     pq.insert(p * 10, p).unwrap();
    /// }
    /// assert_eq!(pq.extract_min().unwrap(), (1, 10));
    /// assert_eq!(pq.extract_min().unwrap(), (5, 50));
    /// ```
    pub fn extract_min(&mut self) -> Result<(P, E)> {
        self.extract_toward(Orientation::Min)
    }

    /// Removes the entry with the greatest priority and hands it back.
    ///
    /// # Examples
    /// ```
    /// use depq::PriorityDeque;
    /// let mut pq = PriorityDeque::new();
    /// for p in [5, 1, 8] {
    ///     pq.insert(p * 10, p).unwrap();
    /// }
    /// assert_eq!(pq.extract_max().unwrap(), (8, 80));
    /// assert_eq!(pq.extract_max().unwrap(), (5, 50));
    /// ```
    pub fn extract_max(&mut self) -> Result<(P, E)> {
        self.extract_toward(Orientation::Max)
    }
}
