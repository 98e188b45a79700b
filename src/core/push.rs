use compare::Compare;

use super::*;
use crate::error::InsertError;

impl <P, E, C: Compare<P>> PriorityDeque<P, E, C> {
    /// Inserts `element` with `priority`.
    ///
    /// Grows the storage by the expand factor when it is full. If that
    /// allocation fails the queue is unchanged and the entry is handed back
    /// inside the [`InsertError`].
    ///
    /// # Examples
    /// ```
    /// use depq::PriorityDeque;
    /// let mut pq = PriorityDeque::new();
    /// pq.insert("job", 3).unwrap();
    /// assert_eq!(pq.len(), 1);
    /// ```
    pub fn insert(&mut self, element: E, priority: P) -> Result<(), InsertError<P, E>> {
        if let Err((error, node)) = self.nodes.push(Node { priority, element }) {
            return Err(InsertError {
                error,
                priority: node.priority,
                element: node.element,
            });
        }
        let len = self.nodes.len();
        if len > 1 {
            self.swim(len - 1);
        }
        Ok(())
    }
}
