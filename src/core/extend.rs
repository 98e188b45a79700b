use compare::Compare;

use super::*;
use crate::error::InsertError;

impl <P, E, C: Compare<P>> PriorityDeque<P, E, C> {
    /// Inserts every `(priority, element)` pair in order, the same shape
    /// [`into_vec`](Self::into_vec) and the `extract_*` methods hand out.
    ///
    /// Stops at the first failed growth: entries inserted before it stay in
    /// the queue, the failing entry comes back in the error, and the rest of
    /// `iter` is not pulled.
    ///
    /// # Examples
    /// ```
    /// use depq::PriorityDeque;
    /// let mut pq = PriorityDeque::new();
    /// pq.try_extend((0..25).map(|i| (25 - i, i))).unwrap();
    /// assert_eq!(pq.len(), 25);
    /// assert_eq!(pq.extract_min().unwrap(), (1, 24));
    /// ```
    pub fn try_extend<I: IntoIterator<Item = (P, E)>>(&mut self, iter: I) -> Result<(), InsertError<P, E>> {
        for (priority, element) in iter {
            self.insert(element, priority)?;
        }
        Ok(())
    }
}
