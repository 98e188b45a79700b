//! A double-ended priority queue on one array-backed binary heap.
//!
//! [`PriorityDeque`] keeps its array ordered toward a single extreme, either
//! the minimum or the maximum. Asking for the other extreme flips the whole
//! heap in place with a linear-time rebuild, so runs of same-sided requests
//! stay cheap while mixed requests never need a second structure.
//!
//! ```
//! use depq::{Orientation, PriorityDeque};
//! let mut pq = PriorityDeque::new();
//! for (e, p) in [("d", 4), ("b", 2), ("g", 7)] {
//!     pq.insert(e, p).unwrap();
//! }
//! assert_eq!(pq.peek_max().unwrap(), (&7, &"g"));
//! assert_eq!(pq.orientation(), Orientation::Max);
//! assert_eq!(pq.extract_min().unwrap(), (2, "b"));
//! ```

pub mod config;
pub mod error;
pub mod order;

mod core;
mod nodevec;

#[cfg(test)]
mod tests;

pub use crate::config::{HeapConfig, Orientation};
pub use crate::core::{Iter, PriorityDeque};
pub use crate::error::{HeapError, InsertError, Result};
pub use compare::{natural, Compare, Natural};
