//! Bridge from [`Sequence`] to [`core::iter::Iterator`].

use super::{Cursor, Cycle, Filter, Map, Sequence, Take};

/// A standard iterator that drains a sequence.
///
/// Returned by the `IntoIterator` implementations of the sequence types, so
/// a chain can be consumed with `for` or handed to `Iterator` adapters.
#[derive(Debug)]
pub struct IntoIter<S> {
    sequence: S,
}

impl<S> IntoIter<S> {
    pub fn new(sequence: S) -> Self {
        Self { sequence }
    }

    pub fn into_inner(self) -> S {
        self.sequence
    }
}

impl<S: Sequence> Iterator for IntoIter<S> {
    type Item = S::Item;

    #[inline]
    fn next(&mut self) -> Option<S::Item> {
        self.sequence.pull()
    }
}

impl<T> IntoIterator for Cursor<T> {
    type Item = T;
    type IntoIter = IntoIter<Self>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter::new(self)
    }
}

impl<T: Clone> IntoIterator for Cycle<T> {
    type Item = T;
    type IntoIter = IntoIter<Self>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter::new(self)
    }
}

impl<S, P> IntoIterator for Filter<S, P>
where
    S: Sequence,
    P: FnMut(&S::Item) -> bool,
{
    type Item = S::Item;
    type IntoIter = IntoIter<Self>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter::new(self)
    }
}

impl<S, F, U> IntoIterator for Map<S, F>
where
    S: Sequence,
    F: FnMut(S::Item) -> U,
{
    type Item = U;
    type IntoIter = IntoIter<Self>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter::new(self)
    }
}

impl<S: Sequence> IntoIterator for Take<S> {
    type Item = S::Item;
    type IntoIter = IntoIter<Self>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter::new(self)
    }
}
