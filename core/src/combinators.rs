//! Free-standing operations over one or two sequences.
//!
//! These mirror the trait methods where both exist, and add the operations
//! that do not belong to a single sequence (`zip`) or that need extra type
//! parameters (`group_by`).

use alloc::vec::Vec;
use core::hash::Hash;

use hashbrown::HashMap;

use crate::sequence::{Cursor, Map, Sequence};

/// Lazily apply `transform` to every element of `sequence`.
pub fn map<S, F, U>(sequence: S, transform: F) -> Map<S, F>
where
    S: Sequence,
    F: FnMut(S::Item) -> U,
{
    sequence.map(transform)
}

/// Left fold over `sequence` in pull order, starting from `initial`.
pub fn fold<S, F, B>(mut sequence: S, f: F, initial: B) -> B
where
    S: Sequence,
    F: FnMut(B, S::Item) -> B,
{
    sequence.fold(initial, f)
}

/// Fold using the first element as the seed.
///
/// Returns `None` if `sequence` is empty.
pub fn reduce<S, F>(mut sequence: S, f: F) -> Option<S::Item>
where
    S: Sequence,
    F: FnMut(S::Item, S::Item) -> S::Item,
{
    sequence.reduce(f)
}

/// Pair up the elements of two sequences, stopping as soon as either runs
/// out.
///
/// The pairs are collected eagerly into a new cursor.
pub fn zip<A, B>(mut a: A, mut b: B) -> Cursor<(A::Item, B::Item)>
where
    A: Sequence,
    B: Sequence,
{
    let mut pairs = Vec::new();
    while a.has_next() && b.has_next() {
        match (a.next(), b.next()) {
            (Ok(x), Ok(y)) => pairs.push((x, y)),
            _ => break,
        }
    }
    tracing::trace!(len = pairs.len(), "zipped sequences");
    Cursor::new(pairs)
}

/// Group the elements of `sequence` by `key`.
///
/// Within a group, elements keep the order in which they were pulled. The
/// iteration order of the groups themselves is unspecified.
pub fn group_by<S, K, F>(sequence: S, mut key: F) -> HashMap<K, Vec<S::Item>>
where
    S: Sequence,
    K: Eq + Hash,
    F: FnMut(&S::Item) -> K,
{
    let groups = fold(
        sequence,
        |mut groups: HashMap<K, Vec<S::Item>>, item| {
            groups.entry(key(&item)).or_default().push(item);
            groups
        },
        HashMap::new(),
    );
    tracing::trace!(groups = groups.len(), "grouped sequence");
    groups
}
