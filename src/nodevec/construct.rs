use log::warn;

use super::NodeVec;
use crate::config::{DEFAULT_CAPACITY, DEFAULT_EXPAND_FACTOR, MIN_EXPAND_FACTOR};
use crate::error::{HeapError, Result};

impl <T> NodeVec<T> {
    /// Default sized storage. Aborts on allocation failure like `Vec::with_capacity`.
    pub fn new() -> Self {
        NodeVec {
            contents: Vec::with_capacity(DEFAULT_CAPACITY),
            capacity: DEFAULT_CAPACITY,
            expand_factor: DEFAULT_EXPAND_FACTOR,
        }
    }
}

impl <T> NodeVec<T> {
    pub fn try_with_capacity(capacity: usize, expand_factor: usize) -> Result<Self> {
        if capacity == 0 {
            return Err(HeapError::InvalidArgument("initial capacity must be at least 1"));
        }
        if expand_factor < MIN_EXPAND_FACTOR {
            return Err(HeapError::InvalidArgument("expand factor must be at least 2"));
        }
        let mut contents = Vec::new();
        contents.try_reserve_exact(capacity).map_err(|err| {
            warn!("initial allocation of {} nodes failed: {}", capacity, err);
            HeapError::AllocationFailure { requested: capacity }
        })?;
        Ok(NodeVec {
            contents,
            capacity,
            expand_factor,
        })
    }

    /// Adopts already filled storage. The capacity is at least one slot and at
    /// least the number of given values.
    pub fn from_vec(contents: Vec<T>, expand_factor: usize) -> Self {
        let capacity = contents.len().max(1);
        NodeVec {
            contents,
            capacity,
            expand_factor: expand_factor.max(MIN_EXPAND_FACTOR),
        }
    }
}

#[test]
fn test_new() {
    let v : NodeVec<i32> = NodeVec::new();
    assert_eq!(v.len(), 0);
    assert_eq!(v.capacity(), DEFAULT_CAPACITY);
    assert_eq!(v.expand_factor(), DEFAULT_EXPAND_FACTOR);
}

#[test]
fn test_with_capacity() {
    let v : NodeVec<String> = NodeVec::try_with_capacity(20, 3).unwrap();
    assert_eq!(v.len(), 0);
    assert_eq!(v.capacity(), 20);
    assert_eq!(v.expand_factor(), 3);
}

#[test]
fn test_with_capacity_rejects() {
    let zero = NodeVec::<u8>::try_with_capacity(0, 2);
    assert!(matches!(zero, Err(HeapError::InvalidArgument(_))));
    let factor = NodeVec::<u8>::try_with_capacity(4, 1);
    assert!(matches!(factor, Err(HeapError::InvalidArgument(_))));
    let huge = NodeVec::<u64>::try_with_capacity(usize::MAX, 2);
    assert_eq!(huge.err(), Some(HeapError::AllocationFailure { requested: usize::MAX }));
}

#[test]
fn test_from_vec() {
    let v = NodeVec::from_vec(vec![3, 1, 2], 0);
    assert_eq!(v.len(), 3);
    assert_eq!(v.capacity(), 3);
    assert_eq!(v.expand_factor(), MIN_EXPAND_FACTOR);
    let empty = NodeVec::<i32>::from_vec(Vec::new(), 5);
    assert_eq!(empty.capacity(), 1);
}
