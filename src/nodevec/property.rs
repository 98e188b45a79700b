use super::NodeVec;

impl <T> NodeVec<T> {
    pub fn len(&self) -> usize {
        self.contents.len()
    }
    pub fn is_empty(&self) -> bool {
        self.contents.is_empty()
    }
    pub fn capacity(&self) -> usize {
        self.capacity
    }
    pub fn expand_factor(&self) -> usize {
        self.expand_factor
    }
}
