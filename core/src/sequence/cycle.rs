use alloc::vec::Vec;

use super::Sequence;
use crate::{Error, MaterializeOptions, Result};

/// An endless view repeating a buffered sequence.
///
/// Created by [`Sequence::cycle`]. `has_next` is true for as long as the
/// buffer is non-empty, so the caller has to bound the iteration, e.g. with
/// [`Sequence::next_n`].
///
/// `to_vec` returns one full revolution starting at the current position,
/// which leaves the cycle where it was.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cycle<T> {
    buffer: Vec<T>,
    index: usize,
}

static_assertions::assert_impl_all!(Cycle<u8>: Send, Sync);

impl<T> Cycle<T> {
    pub fn new(buffer: Vec<T>) -> Self {
        Self { buffer, index: 0 }
    }

    /// Number of elements in one revolution.
    pub fn period(&self) -> usize {
        self.buffer.len()
    }

    /// Position of the next element within the revolution.
    pub fn position(&self) -> usize {
        self.index
    }
}

impl<T: Clone> Sequence for Cycle<T> {
    type Item = T;

    #[inline]
    fn has_next(&mut self) -> bool {
        !self.buffer.is_empty()
    }

    fn next(&mut self) -> Result<T> {
        let item = self.buffer.get(self.index).ok_or(Error::Exhausted)?.clone();
        self.index = (self.index + 1) % self.buffer.len();
        Ok(item)
    }

    fn cycle(self) -> Cycle<T>
    where
        Self: Sized,
        T: Clone,
    {
        self
    }

    fn to_vec(&mut self) -> Vec<T> {
        let (head, tail) = self.buffer.split_at(self.index);
        let mut items = Vec::with_capacity(self.buffer.len());
        items.extend_from_slice(tail);
        items.extend_from_slice(head);
        items
    }

    fn to_vec_with(&mut self, options: &MaterializeOptions) -> Result<Vec<T>> {
        if !options.allows(self.buffer.len()) {
            let limit = options.max_len.unwrap_or(self.buffer.len());
            tracing::debug!(limit, "materialization exceeded buffer limit");
            return Err(Error::BufferLimit { limit });
        }
        Ok(self.to_vec())
    }
}
