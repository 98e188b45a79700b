use super::NodeVec;

impl <T> NodeVec<T> {
    pub fn as_slice(&self) -> &[T] {
        &self.contents
    }
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.contents
    }
    pub fn into_vec(self) -> Vec<T> {
        self.contents
    }
}
