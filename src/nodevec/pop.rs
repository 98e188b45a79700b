use super::NodeVec;

impl <T> NodeVec<T> {
    /// Removes the value at `index` and fills the hole with the last value.
    pub fn swap_remove(&mut self, index: usize) -> Option<T> {
        if index >= self.contents.len() {
            return None;
        }
        Some(self.contents.swap_remove(index))
    }
}

#[test]
fn just_pop() {
    let mut v : NodeVec<i32> = NodeVec::new();
    assert_eq!(v.swap_remove(0), None);
}

#[test]
fn swap_first() {
    let mut v = NodeVec::new();
    v.push(1).unwrap();
    v.push(2).unwrap();
    v.push(3).unwrap();
    assert_eq!(v.swap_remove(0), Some(1));
    assert_eq!(v.as_slice(), &[3, 2]);
    assert_eq!(v.swap_remove(1), Some(2));
    assert_eq!(v.swap_remove(0), Some(3));
    assert!(v.is_empty());
}
