use super::NodeVec;
use crate::error::HeapError;

impl <T> NodeVec<T> {
    /// Appends `value`, growing first when every slot is taken.
    /// If growth fails the storage is left untouched and `value` comes back
    /// with the error.
    pub fn push(&mut self, value: T) -> Result<(), (HeapError, T)> {
        if self.contents.len() == self.capacity {
            if let Err(err) = self.grow() {
                return Err((err, value));
            }
        }
        self.contents.push(value);
        Ok(())
    }
}

#[test]
fn push_until_full() {
    let mut v = NodeVec::try_with_capacity(2, 3).unwrap();
    v.push("a").unwrap();
    v.push("b").unwrap();
    assert_eq!(v.capacity(), 2);
    v.push("c").unwrap();
    assert_eq!(v.capacity(), 6);
    assert_eq!(v.as_slice(), &["a", "b", "c"]);
}

#[test]
fn push_hands_back_on_failure() {
    let mut v = NodeVec::try_with_capacity(1, usize::MAX).unwrap();
    v.push(String::from("kept")).unwrap();
    let (err, back) = v.push(String::from("rejected")).unwrap_err();
    assert!(matches!(err, HeapError::AllocationFailure { .. }));
    assert_eq!(back, "rejected");
    assert_eq!(v.as_slice(), &[String::from("kept")]);
}
