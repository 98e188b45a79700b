//! Growable node storage with an explicit, multiplicative capacity.
//!
//! The logical `capacity` is tracked separately from the backing `Vec` so that
//! growth happens exactly when `len == capacity`, by `expand_factor`.

pub struct NodeVec <T> {
    pub(crate) contents: Vec<T>,
    pub(crate) capacity: usize,
    pub(crate) expand_factor: usize,
}

mod construct;
mod extend;
mod push;
mod pop;
mod property;
mod view;
