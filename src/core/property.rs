use super::*;

impl <P, E, C> PriorityDeque<P, E, C> {
    /// Returns the number of stored entries.
    ///
    /// # Examples
    /// ```
    /// use depq::PriorityDeque;
    /// let mut pq = PriorityDeque::new();
    /// assert_eq!(pq.len(), 0);
    /// pq.insert((), 1).unwrap();
    /// assert_eq!(pq.len(), 1);
    /// ```
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Number of slots available before the next growth. Never shrinks.
    pub fn capacity(&self) -> usize {
        self.nodes.capacity()
    }

    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    pub fn expand_factor(&self) -> usize {
        self.nodes.expand_factor()
    }

    pub fn comparator(&self) -> &C {
        &self.cmp
    }

    /// Drops every entry. The capacity and orientation are kept.
    ///
    /// # Examples
    /// ```
    /// use depq::PriorityDeque;
    /// let mut pq = PriorityDeque::new();
    /// pq.insert("a", 1).unwrap();
    /// pq.insert("b", 2).unwrap();
    /// pq.clear();
    /// assert!(pq.is_empty());
    /// ```
    pub fn clear(&mut self) {
        self.nodes.clear();
    }

    /// Consumes the queue, dropping every remaining priority and element
    /// exactly once before the storage is released.
    pub fn destroy(self) {
        drop(self)
    }
}

impl <P, E, C: compare::Compare<P>> PriorityDeque<P, E, C> {
    #[cfg(test)]
    pub(crate) fn check(&self) -> bool {
        use crate::order::is_heap;

        let cmp = &self.cmp;
        let mut f = |a: &Node<P, E>, b: &Node<P, E>| cmp.compare(&a.priority, &b.priority);
        let slice = self.nodes.as_slice();
        assert!(self.nodes.len() <= self.nodes.capacity());
        match self.orientation {
            Orientation::Min => is_heap::<_, _, true>(slice, &mut f),
            Orientation::Max => is_heap::<_, _, false>(slice, &mut f),
        }
    }
}
