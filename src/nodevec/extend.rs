use log::{debug, warn};

use super::NodeVec;
use crate::config::MIN_EXPAND_FACTOR;
use crate::error::{HeapError, Result};

impl <T> NodeVec<T> {
    /// Multiplies the capacity by the expand factor.
    ///
    /// The new storage is allocated first, every node is moved across, and the
    /// old storage is released last. On failure nothing changes.
    pub fn grow(&mut self) -> Result<()> {
        if self.expand_factor < MIN_EXPAND_FACTOR {
            return Err(HeapError::InvalidArgument("expand factor must be at least 2"));
        }
        let old_capacity = self.capacity;
        let new_capacity = old_capacity
            .checked_mul(self.expand_factor)
            .ok_or(HeapError::AllocationFailure { requested: usize::MAX })?;
        let mut contents = Vec::new();
        if let Err(err) = contents.try_reserve_exact(new_capacity) {
            warn!("growing from {} to {} nodes failed: {}", old_capacity, new_capacity, err);
            return Err(HeapError::AllocationFailure { requested: new_capacity });
        }
        contents.extend(self.contents.drain(..));
        let old = std::mem::replace(&mut self.contents, contents);
        drop(old);
        self.capacity = new_capacity;
        debug!("node storage grew from {} to {} slots", old_capacity, new_capacity);
        Ok(())
    }

    /// Drops every stored value. The capacity is kept.
    pub fn clear(&mut self) {
        self.contents.clear();
    }
}

#[test]
fn grow_1() {
    let mut v : NodeVec<i32> = NodeVec::try_with_capacity(3, 2).unwrap();
    v.contents.extend([1, 2, 3]);
    v.grow().unwrap();
    assert_eq!(v.capacity(), 6);
    assert_eq!(v.as_slice(), &[1, 2, 3]);
    v.grow().unwrap();
    assert_eq!(v.capacity(), 12);
}

#[test]
fn grow_overflow() {
    let mut v : NodeVec<i32> = NodeVec::try_with_capacity(2, usize::MAX).unwrap();
    v.contents.extend([7, 8]);
    assert!(matches!(v.grow(), Err(HeapError::AllocationFailure { .. })));
    assert_eq!(v.capacity(), 2);
    assert_eq!(v.as_slice(), &[7, 8]);
}

#[test]
fn clear_keeps_capacity() {
    let mut v : NodeVec<i32> = NodeVec::try_with_capacity(2, 2).unwrap();
    v.push(1).unwrap();
    v.push(2).unwrap();
    v.push(3).unwrap();
    v.clear();
    assert!(v.is_empty());
    assert_eq!(v.capacity(), 4);
}
