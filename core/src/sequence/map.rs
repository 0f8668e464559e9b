use core::fmt;

use super::Sequence;
use crate::Result;

/// A lazy view applying a transform to each upstream element.
///
/// Created by [`Sequence::map`] or [`crate::map`]. The transform runs exactly
/// once per element, at the moment the element is pulled.
pub struct Map<S, F> {
    upstream: S,
    transform: F,
}

impl<S, F> Map<S, F> {
    pub(crate) fn new(upstream: S, transform: F) -> Self {
        Self {
            upstream,
            transform,
        }
    }
}

impl<S, F, U> Sequence for Map<S, F>
where
    S: Sequence,
    F: FnMut(S::Item) -> U,
{
    type Item = U;

    #[inline]
    fn has_next(&mut self) -> bool {
        self.upstream.has_next()
    }

    #[inline]
    fn next(&mut self) -> Result<U> {
        self.upstream.next().map(&mut self.transform)
    }
}

impl<S: fmt::Debug, F> fmt::Debug for Map<S, F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Map")
            .field("upstream", &self.upstream)
            .finish_non_exhaustive()
    }
}
