//! The `Sequence` trait and its variants.
//!
//! There are five producers:
//!
//! - [`Cursor`]: the root, backed by an owned buffer and a read position.
//! - [`Filter`]: keeps the upstream elements matching a predicate.
//! - [`Map`]: transforms each upstream element.
//! - [`Cycle`]: repeats a buffered sequence forever.
//! - [`Take`]: stops after a fixed number of elements.
//!
//! Each view owns exactly one upstream and pulls from it on demand. Nothing
//! is evaluated until a terminal operation runs.
//!
//! # Materialization boundary
//!
//! `Filter` and `Map` are forward-only and cannot be restarted, so any
//! operation that needs to see the elements more than once or in a different
//! order drains the upstream into a buffer first:
//!
//! - [`Sequence::sort_by`] / [`Sequence::sort`] buffer, sort, and return a
//!   new [`Cursor`].
//! - [`Sequence::cycle`] buffers and hands the buffer to a [`Cycle`].
//!
//! An infinite upstream (such as a mapped cycle) never finishes buffering;
//! use [`Sequence::cycle_with`] or [`Sequence::to_vec_with`] to bound it.

mod cursor;
mod cycle;
mod filter;
mod iter;
mod map;
mod take;

pub use cursor::{Cursor, of};
pub use cycle::Cycle;
pub use filter::Filter;
pub use iter::IntoIter;
pub use map::Map;
pub use take::Take;

use alloc::{boxed::Box, vec::Vec};
use core::cmp::Ordering;

use crate::{Error, MaterializeOptions, Result};

/// A pull-based sequence of elements.
///
/// Implementors provide [`has_next`](Sequence::has_next) and
/// [`next`](Sequence::next); everything else is built on those two.
///
/// `has_next` may be called any number of times without losing elements.
/// It takes `&mut self` because some views ([`Filter`]) have to look ahead
/// in their upstream to answer it.
///
/// A sequence is meant to be driven by a single consumer. No operation is
/// synchronized, so sharing one instance between threads needs an external
/// lock.
pub trait Sequence {
    /// The type of the elements produced.
    type Item;

    /// Whether another element is available.
    fn has_next(&mut self) -> bool;

    /// Take the next element.
    ///
    /// Fails with [`Error::Exhausted`] if `has_next()` is false.
    fn next(&mut self) -> Result<Self::Item>;

    /// Take the next element if there is one.
    #[inline]
    fn pull(&mut self) -> Option<Self::Item> {
        if self.has_next() {
            self.next().ok()
        } else {
            None
        }
    }

    // ------------------------------------------------------------------------
    // Views
    // ------------------------------------------------------------------------

    /// Lazily keep only the elements for which `predicate` holds.
    ///
    /// Filtering a filter chains the two; predicates run in order and stop
    /// at the first one that rejects an element.
    fn filter<P>(self, predicate: P) -> Filter<Self, P>
    where
        Self: Sized,
        P: FnMut(&Self::Item) -> bool,
    {
        Filter::new(self, predicate)
    }

    /// Lazily apply `transform` to every element.
    fn map<U, F>(self, transform: F) -> Map<Self, F>
    where
        Self: Sized,
        F: FnMut(Self::Item) -> U,
    {
        Map::new(self, transform)
    }

    /// Buffer the remaining elements, stable sort them using the strict
    /// ordering `less`, and return a cursor over the result.
    ///
    /// `less` must be a strict weak order: irreflexive, transitive, and with
    /// transitive incomparability. A non-strict comparison such as
    /// `|a, b| a <= b`, or [`ord::lt`](crate::ord::lt) over floats that
    /// include NaN, violates this.
    ///
    /// # Panics
    ///
    /// May panic if `less` is not a strict weak order.
    fn sort_by<L>(mut self, mut less: L) -> Cursor<Self::Item>
    where
        Self: Sized,
        L: FnMut(&Self::Item, &Self::Item) -> bool,
    {
        let mut items = self.to_vec();
        tracing::trace!(len = items.len(), "sorting buffered sequence");
        items.sort_by(|a, b| {
            if less(a, b) {
                Ordering::Less
            } else if less(b, a) {
                Ordering::Greater
            } else {
                Ordering::Equal
            }
        });
        Cursor::new(items)
    }

    /// Sort in ascending order. See [`sort_by`](Sequence::sort_by).
    fn sort(self) -> Cursor<Self::Item>
    where
        Self: Sized,
        Self::Item: Ord,
    {
        self.sort_by(|a, b| a < b)
    }

    /// Lazily yield at most `n` more elements.
    ///
    /// Unlike [`next_n`](Sequence::next_n) nothing is pulled up front, so
    /// `cycle().take(n)` stays lazy for any `n`.
    fn take(self, n: usize) -> Take<Self>
    where
        Self: Sized,
    {
        Take::new(self, n)
    }

    /// Buffer the remaining elements and repeat them forever.
    ///
    /// The returned view only reports exhaustion when the buffer is empty.
    /// Bound it with [`take`](Sequence::take), [`next_n`](Sequence::next_n)
    /// or a counted loop.
    fn cycle(mut self) -> Cycle<Self::Item>
    where
        Self: Sized,
        Self::Item: Clone,
    {
        let buffer = self.to_vec();
        tracing::trace!(len = buffer.len(), "buffered sequence for cycling");
        Cycle::new(buffer)
    }

    /// Like [`cycle`](Sequence::cycle), but refuses to buffer more elements
    /// than `options` allow.
    fn cycle_with(mut self, options: &MaterializeOptions) -> Result<Cycle<Self::Item>>
    where
        Self: Sized,
        Self::Item: Clone,
    {
        let buffer = self.to_vec_with(options)?;
        tracing::trace!(len = buffer.len(), "buffered sequence for cycling");
        Ok(Cycle::new(buffer))
    }

    // ------------------------------------------------------------------------
    // Terminal operations
    // ------------------------------------------------------------------------

    /// Drain the remaining elements into a vector.
    ///
    /// Calling it again on the same sequence returns an empty vector.
    fn to_vec(&mut self) -> Vec<Self::Item> {
        let mut items = Vec::new();
        while let Some(item) = self.pull() {
            items.push(item);
        }
        items
    }

    /// Drain the remaining elements into a vector, failing with
    /// [`Error::BufferLimit`] as soon as the limit in `options` is passed.
    ///
    /// Elements pulled before the failure are dropped.
    fn to_vec_with(&mut self, options: &MaterializeOptions) -> Result<Vec<Self::Item>> {
        let mut items = Vec::new();
        while let Some(item) = self.pull() {
            if !options.allows(items.len() + 1) {
                let limit = options.max_len.unwrap_or(items.len());
                tracing::debug!(limit, "materialization exceeded buffer limit");
                return Err(Error::BufferLimit { limit });
            }
            items.push(item);
        }
        Ok(items)
    }

    /// Pull at most `n` elements.
    fn next_n(&mut self, n: usize) -> Vec<Self::Item>
    where
        Self: Sized,
    {
        // `n` is only an upper bound; it may far exceed what is left.
        let mut items = Vec::new();
        while items.len() < n {
            match self.pull() {
                Some(item) => items.push(item),
                None => break,
            }
        }
        items
    }

    /// Call `f` with every remaining element and its zero-based index.
    fn for_each<F>(&mut self, mut f: F)
    where
        Self: Sized,
        F: FnMut(Self::Item, usize),
    {
        let mut index = 0;
        while let Some(item) = self.pull() {
            f(item, index);
            index += 1;
        }
    }

    /// Whether `predicate` holds for every element. Stops at the first
    /// element that fails it.
    fn all<P>(&mut self, mut predicate: P) -> bool
    where
        Self: Sized,
        P: FnMut(Self::Item) -> bool,
    {
        while let Some(item) = self.pull() {
            if !predicate(item) {
                return false;
            }
        }
        true
    }

    /// Whether `predicate` holds for any element. Stops at the first
    /// element that passes it.
    fn any<P>(&mut self, mut predicate: P) -> bool
    where
        Self: Sized,
        P: FnMut(Self::Item) -> bool,
    {
        while let Some(item) = self.pull() {
            if predicate(item) {
                return true;
            }
        }
        false
    }

    /// Left fold in pull order: `acc = f(acc, element)`.
    fn fold<B, F>(&mut self, initial: B, mut f: F) -> B
    where
        Self: Sized,
        F: FnMut(B, Self::Item) -> B,
    {
        let mut acc = initial;
        while let Some(item) = self.pull() {
            acc = f(acc, item);
        }
        acc
    }

    /// Fold using the first element as the seed.
    ///
    /// Returns `None` for an empty sequence.
    fn reduce<F>(&mut self, f: F) -> Option<Self::Item>
    where
        Self: Sized,
        F: FnMut(Self::Item, Self::Item) -> Self::Item,
    {
        let first = self.pull()?;
        Some(self.fold(first, f))
    }

    /// The smallest element according to the strict ordering `less`.
    ///
    /// Among equal elements the first one seen wins.
    fn min_by<L>(&mut self, mut less: L) -> Option<Self::Item>
    where
        Self: Sized,
        L: FnMut(&Self::Item, &Self::Item) -> bool,
    {
        self.reduce(|acc, item| if less(&item, &acc) { item } else { acc })
    }

    /// The largest element according to the strict ordering `less`.
    ///
    /// Among equal elements the first one seen wins.
    fn max_by<L>(&mut self, mut less: L) -> Option<Self::Item>
    where
        Self: Sized,
        L: FnMut(&Self::Item, &Self::Item) -> bool,
    {
        self.reduce(|acc, item| if less(&acc, &item) { item } else { acc })
    }
}

impl<S: Sequence + ?Sized> Sequence for &mut S {
    type Item = S::Item;

    #[inline]
    fn has_next(&mut self) -> bool {
        (**self).has_next()
    }

    #[inline]
    fn next(&mut self) -> Result<S::Item> {
        (**self).next()
    }

    fn to_vec(&mut self) -> Vec<S::Item> {
        (**self).to_vec()
    }

    fn to_vec_with(&mut self, options: &MaterializeOptions) -> Result<Vec<S::Item>> {
        (**self).to_vec_with(options)
    }
}

impl<S: Sequence + ?Sized> Sequence for Box<S> {
    type Item = S::Item;

    #[inline]
    fn has_next(&mut self) -> bool {
        (**self).has_next()
    }

    #[inline]
    fn next(&mut self) -> Result<S::Item> {
        (**self).next()
    }

    fn to_vec(&mut self) -> Vec<S::Item> {
        (**self).to_vec()
    }

    fn to_vec_with(&mut self, options: &MaterializeOptions) -> Result<Vec<S::Item>> {
        (**self).to_vec_with(options)
    }
}

#[cfg(test)]
mod sequence_test;
