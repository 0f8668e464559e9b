//! Behavioural tests shared by all sequence variants.

use alloc::{boxed::Box, string::String, vec, vec::Vec};
use core::cell::RefCell;

use pretty_assertions::assert_eq;

use super::*;
use crate::{MaterializeOptions, fold, group_by, map, reduce, zip};

fn inputs() -> Vec<Vec<i32>> {
    vec![
        vec![],
        vec![1],
        vec![4, 3, 2, 1],
        vec![1, 2, 3, 4, 5, 6, 7, 8, 9, 10],
        vec![5, -2, 5, 0, -2, 9],
    ]
}

// ============================================================================
// Round trips
// ============================================================================

#[test]
fn test_cursor_round_trip() {
    for input in inputs() {
        assert_eq!(Cursor::new(input.clone()).to_vec(), input);
    }
}

#[test]
fn test_filter_is_ordered_subsequence() {
    let predicates: [fn(&i32) -> bool; 4] = [
        |v| v % 2 == 0,
        |v| *v > 1,
        |_| true,
        |_| false,
    ];
    for input in inputs() {
        for predicate in predicates {
            let expected: Vec<i32> = input.iter().copied().filter(|v| predicate(v)).collect();
            assert_eq!(Cursor::new(input.clone()).filter(predicate).to_vec(), expected);
        }
    }
}

#[test]
fn test_map_is_elementwise() {
    for input in inputs() {
        let result = Cursor::new(input.clone()).map(|v| v * 3 - 1).to_vec();
        assert_eq!(result.len(), input.len());
        for (i, v) in input.iter().enumerate() {
            assert_eq!(result[i], v * 3 - 1);
        }
    }
}

// ============================================================================
// Cycle
// ============================================================================

#[test]
fn test_cycle_two_revolutions_plus_one() {
    for input in inputs().into_iter().filter(|input| !input.is_empty()) {
        let n = input.len();
        let mut cycle = Cursor::new(input.clone()).cycle();
        let pulled: Vec<i32> = (0..2 * n + 1).map(|_| cycle.next().unwrap()).collect();

        let mut expected = input.clone();
        expected.extend(input.iter().copied());
        expected.push(input[0]);
        assert_eq!(pulled, expected);
    }
}

#[test]
fn test_cycle_of_empty() {
    let mut cycle = Cursor::<i32>::new(vec![]).cycle();
    assert!(!cycle.has_next());
    assert_eq!(cycle.next(), Err(Error::Exhausted));
}

// ============================================================================
// Combinators
// ============================================================================

#[test]
fn test_zip_length_is_shorter_length() {
    for a in inputs() {
        for b in inputs() {
            let len = zip(Cursor::new(a.clone()), Cursor::new(b.clone())).to_vec().len();
            assert_eq!(len, a.len().min(b.len()));
        }
    }
}

#[test]
fn test_group_by_parity() {
    let groups = group_by(Cursor::new(vec![1, 2, 3]), |v| v % 2 == 0);
    assert_eq!(groups.get(&false), Some(&vec![1, 3]));
    assert_eq!(groups.get(&true), Some(&vec![2]));
}

#[test]
fn test_reduce_sum() {
    assert_eq!(reduce(Cursor::<i32>::new(vec![]), |a, b| a + b), None);
    assert_eq!(reduce(Cursor::new((1..=10).collect()), |a, b| a + b), Some(55));
}

#[test]
fn test_reduce_pulls_seed_once() {
    let pulled = RefCell::new(0);
    let total = Cursor::new(vec![1, 2, 3])
        .map(|v| {
            *pulled.borrow_mut() += 1;
            v
        })
        .reduce(|a, b| a + b);
    assert_eq!(total, Some(6));
    assert_eq!(*pulled.borrow(), 3);
}

#[test]
fn test_scenarios() {
    assert_eq!(Cursor::new(vec![1, 2, 3]).filter(|v| *v > 1).to_vec(), vec![2, 3]);
    assert_eq!(map(Cursor::new(vec![1, 2, 3]), |v| v * 2).to_vec(), vec![2, 4, 6]);
    assert_eq!(fold(Cursor::new(vec![1, 2, 3]), |acc, v| acc + v, 0), 6);
}

// ============================================================================
// Sort
// ============================================================================

#[test]
fn test_sort_is_stable() {
    let pairs = vec![(2, 'a'), (1, 'b'), (2, 'c'), (1, 'd'), (0, 'e')];
    let sorted = Cursor::new(pairs).sort_by(|a, b| a.0 < b.0).to_vec();
    assert_eq!(sorted, vec![(0, 'e'), (1, 'b'), (1, 'd'), (2, 'a'), (2, 'c')]);
}

#[test]
fn test_sort_is_idempotent() {
    for input in inputs() {
        let once = Cursor::new(input.clone()).sort().to_vec();
        let twice = Cursor::new(input.clone()).sort().sort().to_vec();
        assert_eq!(once, twice);

        let again = Cursor::new(once.clone()).sort().to_vec();
        assert_eq!(again, once);
    }
}

#[test]
fn test_sort_floats_with_strict_order() {
    let sorted = Cursor::new(vec![2.5, -1.0, 0.0, 2.5, -0.5])
        .sort_by(crate::ord::lt)
        .to_vec();
    assert_eq!(sorted, vec![-1.0, -0.5, 0.0, 2.5, 2.5]);

    // Filtering NaN out first keeps `lt` a strict weak order.
    let sorted = Cursor::new(vec![1.0, f64::NAN, -3.0])
        .filter(|v: &f64| !v.is_nan())
        .sort_by(crate::ord::gt)
        .to_vec();
    assert_eq!(sorted, vec![1.0, -3.0]);
}

#[test]
fn test_sort_after_filter() {
    let sorted = Cursor::new(vec![5, 2, 8, 1, 9])
        .filter(|v| *v > 1)
        .sort_by(|a, b| a > b)
        .to_vec();
    assert_eq!(sorted, vec![9, 8, 5, 2]);
}

// ============================================================================
// Terminal operations
// ============================================================================

#[test]
fn test_for_each_passes_index() {
    let mut seen = Vec::new();
    Cursor::new(vec![4, 3, 2, 1]).for_each(|v, i| seen.push((v, i)));
    assert_eq!(seen, vec![(4, 0), (3, 1), (2, 2), (1, 3)]);
}

#[test]
fn test_all_any_short_circuit() {
    let mut cursor = Cursor::new(vec![1, -1, 2, 3]);
    assert!(!cursor.all(|v| v > 0));
    // Stopped right after the failing element.
    assert_eq!(cursor.to_vec(), vec![2, 3]);

    let mut cursor = Cursor::new(vec![-1, 1, 2]);
    assert!(cursor.any(|v| v > 0));
    assert_eq!(cursor.to_vec(), vec![2]);

    assert!(Cursor::<i32>::default().all(|_| false));
    assert!(!Cursor::<i32>::default().any(|_| true));
}

#[test]
fn test_min_max_first_seen_wins() {
    let words = || Cursor::new(vec!["bb", "a", "cc", "d"]);
    assert_eq!(words().min_by(|a, b| a.len() < b.len()), Some("a"));
    assert_eq!(words().max_by(|a, b| a.len() < b.len()), Some("bb"));
    assert_eq!(Cursor::<&str>::default().min_by(|a, b| a < b), None);
}

#[test]
fn test_next_n_bounds() {
    let mut cursor = Cursor::new(vec![1, 2, 3]);
    assert_eq!(cursor.next_n(2), vec![1, 2]);
    assert_eq!(cursor.next_n(5), vec![3]);
    assert!(cursor.next_n(1).is_empty());
}

#[test]
fn test_next_n_bound_larger_than_sequence() {
    assert_eq!(Cursor::new(vec![1, 2, 3]).next_n(usize::MAX), vec![1, 2, 3]);
    assert!(Cursor::<i64>::default().cycle().next_n(1 << 62).is_empty());
    assert_eq!(
        Cursor::new(vec![1, 2, 3, 4]).filter(|v| v % 2 == 0).next_n(usize::MAX),
        vec![2, 4]
    );
}

#[test]
fn test_to_vec_with_limit() {
    let options = MaterializeOptions::bounded(3);
    assert_eq!(Cursor::new(vec![1, 2, 3]).to_vec_with(&options), Ok(vec![1, 2, 3]));
    assert_eq!(
        Cursor::new(vec![1, 2, 3, 4]).to_vec_with(&options),
        Err(Error::BufferLimit { limit: 3 })
    );
    assert_eq!(
        Cursor::new(vec![1, 2, 3, 4])
            .filter(|v| v % 2 == 0)
            .to_vec_with(&options),
        Ok(vec![2, 4])
    );
}

// ============================================================================
// Composition
// ============================================================================

#[test]
fn test_long_chain() {
    let result: Vec<String> = Cursor::new((1..=20).collect())
        .filter(|v| v % 2 == 0)
        .map(|v| v * v)
        .filter(|v| v % 3 != 0)
        .map(|v| alloc::format!("<{v}>"))
        .to_vec();
    let expected: Vec<String> = ["<4>", "<16>", "<64>", "<100>", "<196>", "<256>", "<400>"]
        .map(String::from)
        .to_vec();
    assert_eq!(result, expected);
}

#[test]
fn test_borrowed_upstream() {
    let mut cursor = Cursor::new(vec![1, 2, 3, 4]);
    let firsts = (&mut cursor).map(|v| v * 10).next_n(2);
    assert_eq!(firsts, vec![10, 20]);
    assert_eq!(cursor.to_vec(), vec![3, 4]);
}

#[test]
fn test_boxed_chain() {
    let mut chain: Box<dyn Sequence<Item = i32>> = Box::new(Cursor::new(vec![1, 2, 3, 4]));
    chain = Box::new(chain.filter(|v| *v > 1));
    chain = Box::new(chain.map(|v| v * 2));
    assert_eq!(chain.to_vec(), vec![4, 6, 8]);
}

#[test]
fn test_boxed_cycle_to_vec_is_finite() {
    let mut chain: Box<dyn Sequence<Item = i32>> = Box::new(Cycle::new(vec![1, 2]));
    assert_eq!(chain.to_vec(), vec![1, 2]);
    assert_eq!(chain.sort_by(|a, b| a > b).to_vec(), vec![2, 1]);
}
