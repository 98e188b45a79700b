use compare::{natural, Compare};

use super::*;
use crate::config::HeapConfig;
use crate::error::Result;

impl <P: Ord, E> PriorityDeque<P, E> {
    /// Create an empty min-oriented queue ordered by `P: Ord`, with the
    /// default capacity and expand factor.
    ///
    /// # Examples
    /// ```
    /// use depq::PriorityDeque;
    /// let mut pq = PriorityDeque::<i32, &str>::new();
    /// pq.insert("four", 4).unwrap();
    /// ```
    pub fn new() -> Self {
        PriorityDeque::with_comparator(natural())
    }
}

impl <P, E, C: Compare<P>> PriorityDeque<P, E, C> {
    /// Create an empty min-oriented queue ordered by `cmp`.
    ///
    /// `cmp` has to be a total preorder over the priorities, otherwise the
    /// local repair done by `reassign_priority` may leave the heap unordered.
    ///
    /// # Examples
    /// ```
    /// use depq::PriorityDeque;
    /// let mut pq = PriorityDeque::with_comparator(|a: &f64, b: &f64| a.total_cmp(b));
    /// pq.insert('x', 0.5).unwrap();
    /// pq.insert('y', -1.5).unwrap();
    /// assert_eq!(pq.peek_min().unwrap(), (&-1.5, &'y'));
    /// ```
    pub fn with_comparator(cmp: C) -> Self {
        PriorityDeque {
            nodes: NodeVec::new(),
            orientation: Orientation::Min,
            cmp,
        }
    }

    /// Create an empty queue with an explicit orientation, initial capacity
    /// and expand factor.
    ///
    /// Fails with `InvalidArgument` for a zero capacity or an expand factor
    /// below 2, and with `AllocationFailure` if the slots cannot be allocated.
    ///
    /// # Examples
    /// ```
    /// use depq::{HeapError, Orientation, PriorityDeque};
    /// let pq = PriorityDeque::<u32, u32, _>::init(Orientation::Max, 4, 2, |a: &u32, b: &u32| a.cmp(b));
    /// assert_eq!(pq.unwrap().capacity(), 4);
    /// let bad = PriorityDeque::<u32, u32, _>::init(Orientation::Max, 4, 1, |a: &u32, b: &u32| a.cmp(b));
    /// assert!(matches!(bad, Err(HeapError::InvalidArgument(_))));
    /// ```
    pub fn init(orientation: Orientation, initial_capacity: usize, expand_factor: usize, cmp: C) -> Result<Self> {
        let config = HeapConfig::new()
            .orientation(orientation)
            .initial_capacity(initial_capacity)
            .expand_factor(expand_factor);
        Self::from_config(config, cmp)
    }

    pub fn from_config(config: HeapConfig, cmp: C) -> Result<Self> {
        config.validate()?;
        let nodes = NodeVec::try_with_capacity(config.initial_capacity, config.expand_factor)?;
        Ok(PriorityDeque {
            nodes,
            orientation: config.orientation,
            cmp,
        })
    }
}

impl <P: Ord, E> Default for PriorityDeque<P, E> {
    fn default() -> Self {
        PriorityDeque::new()
    }
}
