use compare::Compare;

use super::*;

impl <P, E, C> PriorityDeque<P, E, C> {
    /// Consumes the queue and returns its `(priority, element)` entries in
    /// storage order.
    pub fn into_vec(self) -> Vec<(P, E)> {
        self.nodes.into_vec().into_iter().map(Node::into_pair).collect()
    }
}

impl <P, E, C: Compare<P>> PriorityDeque<P, E, C> {
    /// Consumes the queue and returns its entries by ascending priority.
    ///
    /// # Examples
    /// ```
    /// use depq::PriorityDeque;
    /// let mut pq = PriorityDeque::new();
    /// pq.insert('c', 3).unwrap();
    /// pq.insert('a', 1).unwrap();
    /// pq.insert('b', 2).unwrap();
    /// assert_eq!(pq.into_sorted_vec(), vec![(1, 'a'), (2, 'b'), (3, 'c')]);
    /// ```
    pub fn into_sorted_vec(mut self) -> Vec<(P, E)> {
        let mut sorted = Vec::with_capacity(self.len());
        while let Ok(entry) = self.extract_min() {
            sorted.push(entry);
        }
        sorted
    }
}
