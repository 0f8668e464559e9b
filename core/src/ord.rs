//! Ordering helpers for sequences of comparable elements.
//!
//! Everything here is a thin layer over [`Sequence::reduce`]: the
//! reductions return `None` for an empty sequence and, among equal
//! elements, keep the first one pulled.

use core::ops::Add;

use crate::Sequence;

/// Strict less-than, usable as the `less` argument of
/// [`Sequence::sort_by`], [`Sequence::min_by`] and [`Sequence::max_by`].
#[inline]
pub fn lt<T: PartialOrd>(a: &T, b: &T) -> bool {
    a < b
}

/// Strict greater-than. Sorting with it gives descending order.
#[inline]
pub fn gt<T: PartialOrd>(a: &T, b: &T) -> bool {
    a > b
}

/// The smaller of two values, `a` on a tie.
#[inline]
pub fn min2<T: PartialOrd>(a: T, b: T) -> T {
    if b < a { b } else { a }
}

/// The larger of two values, `a` on a tie.
#[inline]
pub fn max2<T: PartialOrd>(a: T, b: T) -> T {
    if b > a { b } else { a }
}

/// The smallest element of `sequence`.
pub fn min<S>(mut sequence: S) -> Option<S::Item>
where
    S: Sequence,
    S::Item: PartialOrd,
{
    sequence.reduce(min2)
}

/// The largest element of `sequence`.
pub fn max<S>(mut sequence: S) -> Option<S::Item>
where
    S: Sequence,
    S::Item: PartialOrd,
{
    sequence.reduce(max2)
}

/// The sum of the elements of `sequence`.
pub fn sum<S>(mut sequence: S) -> Option<S::Item>
where
    S: Sequence,
    S::Item: Add<Output = S::Item>,
{
    sequence.reduce(|acc, item| acc + item)
}

/// The element whose key is smallest.
pub fn min_by_key<S, K, F>(mut sequence: S, mut key: F) -> Option<S::Item>
where
    S: Sequence,
    K: PartialOrd,
    F: FnMut(&S::Item) -> K,
{
    sequence.min_by(|a, b| key(a) < key(b))
}

/// The element whose key is largest.
pub fn max_by_key<S, K, F>(mut sequence: S, mut key: F) -> Option<S::Item>
where
    S: Sequence,
    K: PartialOrd,
    F: FnMut(&S::Item) -> K,
{
    sequence.max_by(|a, b| key(a) < key(b))
}

/// The sum of a slice, or `None` if it is empty.
pub fn sum_slice<T>(items: &[T]) -> Option<T>
where
    T: Copy + Add<Output = T>,
{
    let (first, rest) = items.split_first()?;
    Some(rest.iter().fold(*first, |acc, item| acc + *item))
}

/// `min`, `max` and `sum` as methods on any sequence of ordered elements.
pub trait OrdSequence: Sequence + Sized
where
    Self::Item: PartialOrd,
{
    fn min_value(&mut self) -> Option<Self::Item> {
        min(self)
    }

    fn max_value(&mut self) -> Option<Self::Item> {
        max(self)
    }

    fn sum_value(&mut self) -> Option<Self::Item>
    where
        Self::Item: Add<Output = Self::Item>,
    {
        sum(self)
    }
}

impl<S> OrdSequence for S
where
    S: Sequence,
    S::Item: PartialOrd,
{
}
