use thiserror::Error;

/// Every way an operation on a [`PriorityDeque`](crate::PriorityDeque) can fail.
///
/// A failing operation leaves the queue exactly as it was before the call.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HeapError {
    #[error("invalid argument: {0}")]
    InvalidArgument(&'static str),
    #[error("could not allocate room for {requested} nodes")]
    AllocationFailure { requested: usize },
    #[error("element not found in the queue")]
    NotFound,
    #[error("the queue is empty")]
    EmptyQueue,
}

pub type Result<T> = std::result::Result<T, HeapError>;

/// A failed insertion. The queue never took ownership of the rejected entry,
/// so it is handed back together with the cause.
#[derive(Clone, PartialEq, Eq)]
pub struct InsertError <P, E> {
    pub error: HeapError,
    pub priority: P,
    pub element: E,
}

impl <P, E> InsertError<P, E> {
    /// Returns the rejected `(priority, element)` pair.
    pub fn into_pair(self) -> (P, E) {
        (self.priority, self.element)
    }
}

impl <P, E> std::fmt::Display for InsertError<P, E> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "insert rejected: {}", self.error)
    }
}

// The payload is not required to be `Debug`, so only the cause is shown.
impl <P, E> std::fmt::Debug for InsertError<P, E> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("InsertError")
            .field("error", &self.error)
            .finish_non_exhaustive()
    }
}

impl <P, E> std::error::Error for InsertError<P, E> {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(&self.error)
    }
}

impl <P, E> From<InsertError<P, E>> for HeapError {
    fn from(err: InsertError<P, E>) -> Self {
        err.error
    }
}
