use super::Sequence;
use crate::{Error, Result};

/// A lazy view yielding at most a fixed number of upstream elements.
///
/// Created by [`Sequence::take`]. Once the budget is spent the upstream is
/// never pulled again, which makes it the way to bound a [`Cycle`](super::Cycle)
/// without buffering its output.
#[derive(Debug, Clone)]
pub struct Take<S> {
    upstream: S,
    remaining: usize,
}

impl<S> Take<S> {
    pub(crate) fn new(upstream: S, remaining: usize) -> Self {
        Self {
            upstream,
            remaining,
        }
    }

    /// How many more elements this view may still yield.
    pub fn remaining(&self) -> usize {
        self.remaining
    }
}

impl<S: Sequence> Sequence for Take<S> {
    type Item = S::Item;

    #[inline]
    fn has_next(&mut self) -> bool {
        self.remaining > 0 && self.upstream.has_next()
    }

    fn next(&mut self) -> Result<S::Item> {
        if self.remaining == 0 {
            return Err(Error::Exhausted);
        }
        let item = self.upstream.next()?;
        self.remaining -= 1;
        Ok(item)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Cursor, Cycle};
    use alloc::{vec, vec::Vec};
    use core::cell::Cell;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_take_prefix() {
        assert_eq!(Cursor::new(vec![1, 2, 3, 4]).take(2).to_vec(), vec![1, 2]);
        assert_eq!(Cursor::new(vec![1, 2]).take(5).to_vec(), vec![1, 2]);
        assert_eq!(Cursor::new(vec![1, 2]).take(0).to_vec(), Vec::<i32>::new());
    }

    #[test]
    fn test_take_exhausted() {
        let mut taken = Cursor::new(vec![1, 2, 3]).take(1);
        assert_eq!(taken.next(), Ok(1));
        assert!(!taken.has_next());
        assert_eq!(taken.next(), Err(Error::Exhausted));
        assert_eq!(taken.remaining(), 0);
    }

    #[test]
    fn test_take_bounds_cycle() {
        let taken = Cycle::new(vec![1, 2, 3]).take(7).to_vec();
        assert_eq!(taken, vec![1, 2, 3, 1, 2, 3, 1]);
    }

    #[test]
    fn test_take_huge_bound_is_lazy() {
        let mut taken = Cursor::new(vec![1, 2, 3]).cycle().take(usize::MAX);
        assert_eq!(taken.next_n(4), vec![1, 2, 3, 1]);
        assert_eq!(taken.remaining(), usize::MAX - 4);

        let mut empty = Cursor::<i64>::default().cycle().take(usize::MAX);
        assert!(!empty.has_next());
        assert!(empty.to_vec().is_empty());
    }

    #[test]
    fn test_take_stops_pulling() {
        let pulled = Cell::new(0);
        let mut taken = Cursor::new(vec![1, 2, 3, 4])
            .map(|v| {
                pulled.set(pulled.get() + 1);
                v
            })
            .take(2);
        assert_eq!(taken.to_vec(), vec![1, 2]);
        assert!(!taken.has_next());
        assert_eq!(pulled.get(), 2);
    }

    #[test]
    fn test_any_stops_early_on_cycle() {
        let mut taken = Cycle::new(vec![1, 3, 4]).take(usize::MAX);
        assert!(taken.any(|v| v % 2 == 0));
        assert_eq!(taken.remaining(), usize::MAX - 3);
    }
}
