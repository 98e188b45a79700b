use super::*;

/// Borrowing iterator over `(priority, element)` in array order.
pub struct Iter <'a, P, E> {
    pub(crate) inner: std::slice::Iter<'a, Node<P, E>>,
}

impl <'a, P, E> Iterator for Iter<'a, P, E> {

    type Item = (&'a P, &'a E);

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.inner.next()?;
        Some((&node.priority, &node.element))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }

}

impl <P, E> ExactSizeIterator for Iter<'_, P, E> {}

impl <'a, P, E, C> IntoIterator for &'a PriorityDeque<P, E, C> {
    type Item = (&'a P, &'a E);

    type IntoIter = Iter<'a, P, E>;

    fn into_iter(self) -> Self::IntoIter {
        Iter {
            inner: self.nodes.as_slice().iter(),
        }
    }
}

impl <P, E, C> PriorityDeque<P, E, C> {
    /// Iterates over every entry in storage order, which is heap order for the
    /// current orientation, not sorted order.
    ///
    /// # Examples
    /// ```
    /// use depq::PriorityDeque;
    /// let mut pq = PriorityDeque::new();
    /// for p in 0..5 {
    ///     pq.insert(p, p).unwrap();
    /// }
    /// assert_eq!(pq.iter().count(), 5);
    /// assert_eq!(pq.iter().next(), Some((&0, &0)));
    /// ```
    pub fn iter(&self) -> Iter<'_, P, E> {
        self.into_iter()
    }
}
