use core::{fmt, mem};

use super::Sequence;
use crate::{Error, Result};

/// One element of lookahead taken from the upstream.
enum Lookahead<T> {
    /// Nothing pulled yet; the upstream has to be asked.
    Empty,
    /// A matching element waiting to be returned.
    Cached(T),
    /// The upstream ran out without another match.
    Exhausted,
}

/// A lazy view keeping the upstream elements that satisfy a predicate.
///
/// Created by [`Sequence::filter`]. Answering `has_next` requires pulling
/// from the upstream until a match is found, so the view caches at most one
/// matching element. After `next` hands that element out the view
/// immediately looks for the following match.
pub struct Filter<S: Sequence, P> {
    upstream: S,
    predicate: P,
    lookahead: Lookahead<S::Item>,
}

impl<S, P> Filter<S, P>
where
    S: Sequence,
    P: FnMut(&S::Item) -> bool,
{
    pub(crate) fn new(upstream: S, predicate: P) -> Self {
        Self {
            upstream,
            predicate,
            lookahead: Lookahead::Empty,
        }
    }
}

impl<S, P> Sequence for Filter<S, P>
where
    S: Sequence,
    P: FnMut(&S::Item) -> bool,
{
    type Item = S::Item;

    fn has_next(&mut self) -> bool {
        match self.lookahead {
            Lookahead::Cached(_) => return true,
            Lookahead::Exhausted => return false,
            Lookahead::Empty => {}
        }
        while let Some(item) = self.upstream.pull() {
            if (self.predicate)(&item) {
                self.lookahead = Lookahead::Cached(item);
                return true;
            }
        }
        self.lookahead = Lookahead::Exhausted;
        false
    }

    fn next(&mut self) -> Result<S::Item> {
        self.has_next();
        let Lookahead::Cached(item) = mem::replace(&mut self.lookahead, Lookahead::Empty) else {
            self.lookahead = Lookahead::Exhausted;
            return Err(Error::Exhausted);
        };
        // Settle the lookahead for the next call.
        self.has_next();
        Ok(item)
    }
}

impl<S, P> fmt::Debug for Filter<S, P>
where
    S: Sequence + fmt::Debug,
    S::Item: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let cached = match &self.lookahead {
            Lookahead::Cached(item) => Some(item),
            _ => None,
        };
        f.debug_struct("Filter")
            .field("upstream", &self.upstream)
            .field("cached", &cached)
            .field("exhausted", &matches!(self.lookahead, Lookahead::Exhausted))
            .finish_non_exhaustive()
    }
}
