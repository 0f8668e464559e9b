use alloc::{collections::VecDeque, vec::Vec};

use super::Sequence;
use crate::{Error, Result};

/// The root sequence: an owned, ordered buffer and a read position.
///
/// The cursor owns its elements, so sorting or draining it can never be
/// observed through the collection it was built from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cursor<T> {
    remaining: VecDeque<T>,
    // Number of elements already handed out. `index + remaining.len()` is the
    // length of the original buffer.
    index: usize,
}

static_assertions::assert_impl_all!(Cursor<u8>: Send, Sync);

impl<T> Cursor<T> {
    pub fn new(items: Vec<T>) -> Self {
        Self {
            remaining: items.into(),
            index: 0,
        }
    }

    /// Zero-based position of the next element to be returned.
    pub fn position(&self) -> usize {
        self.index
    }

    /// Length of the buffer the cursor was built from.
    pub fn len(&self) -> usize {
        self.index + self.remaining.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Number of elements not yet returned.
    pub fn remaining(&self) -> usize {
        self.remaining.len()
    }

    /// Look at the next element without taking it.
    pub fn peek(&self) -> Option<&T> {
        self.remaining.front()
    }
}

impl<T> Default for Cursor<T> {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}

impl<T> Sequence for Cursor<T> {
    type Item = T;

    #[inline]
    fn has_next(&mut self) -> bool {
        !self.remaining.is_empty()
    }

    #[inline]
    fn next(&mut self) -> Result<T> {
        let item = self.remaining.pop_front().ok_or(Error::Exhausted)?;
        self.index += 1;
        Ok(item)
    }

    fn to_vec(&mut self) -> Vec<T> {
        self.index += self.remaining.len();
        core::mem::take(&mut self.remaining).into()
    }
}

impl<T> From<Vec<T>> for Cursor<T> {
    fn from(items: Vec<T>) -> Self {
        Self::new(items)
    }
}

impl<T: Clone> From<&[T]> for Cursor<T> {
    fn from(items: &[T]) -> Self {
        Self::new(items.to_vec())
    }
}

impl<T, const N: usize> From<[T; N]> for Cursor<T> {
    fn from(items: [T; N]) -> Self {
        Self::new(items.into())
    }
}

impl<T> FromIterator<T> for Cursor<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

/// Build a cursor over the elements of `items`, in order.
pub fn of<T>(items: impl IntoIterator<Item = T>) -> Cursor<T> {
    items.into_iter().collect()
}
