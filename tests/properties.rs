//! Property-based and scenario tests for `List`, exercising the public API
//! the way a consumer would: sequence round-trips, reversal involution,
//! deduplication, length accounting and the documented end-to-end traces.

use forward_list::{Error, List};
use proptest::prelude::*;
use rstest::rstest;
use std::iter::FromIterator;

proptest! {
    #[test]
    fn prop_from_iter_round_trips(source in prop::collection::vec(any::<i32>(), 0..64)) {
        let list = List::from_iter(source.clone());
        prop_assert_eq!(list.len(), source.len());
        prop_assert_eq!(list.into_vec(), source);
    }

    #[test]
    fn prop_reverse_is_an_involution(source in prop::collection::vec(any::<i32>(), 0..64)) {
        let mut list = List::from_iter(source.clone());
        list.reverse();
        list.reverse();
        prop_assert_eq!(list.into_vec(), source);
    }

    #[test]
    fn prop_reverse_matches_reversed_vec(source in prop::collection::vec(any::<i32>(), 0..64)) {
        let mut list = List::from_iter(source.clone());
        list.reverse();
        let mut expected = source;
        expected.reverse();
        prop_assert_eq!(list.into_vec(), expected);
    }

    #[test]
    fn prop_dedup_keeps_unique_first_occurrences(
        source in prop::collection::vec(0u8..8, 0..64),
    ) {
        let mut list = List::from_iter(source.clone());
        list.dedup();
        let deduped = list.into_vec();

        // no two remaining elements are equal
        for (i, a) in deduped.iter().enumerate() {
            for b in &deduped[i + 1..] {
                prop_assert_ne!(a, b);
            }
        }

        // first-occurrence order is preserved
        let mut expected = Vec::new();
        for x in source {
            if !expected.contains(&x) {
                expected.push(x);
            }
        }
        prop_assert_eq!(deduped, expected);
    }

    #[test]
    fn prop_insert_then_get_returns_the_inserted(
        source in prop::collection::vec(any::<i32>(), 0..32),
        at_seed in any::<usize>(),
        value in any::<i32>(),
    ) {
        let mut list = List::from_iter(source.clone());
        let at = at_seed % (source.len() + 1);
        list.insert(at, value).unwrap();
        prop_assert_eq!(list.len(), source.len() + 1);
        prop_assert_eq!(list.get(at), Ok(&value));
    }

    #[test]
    fn prop_len_counts_insertions_minus_removals(
        ops in prop::collection::vec(any::<i8>(), 0..64),
    ) {
        let mut list = List::new();
        let mut expected_len = 0usize;
        for op in ops {
            if op >= 0 {
                if op % 2 == 0 {
                    list.push_back(op);
                } else {
                    list.push_front(op);
                }
                expected_len += 1;
            } else if list.pop_front().is_ok() {
                expected_len -= 1;
            }
            prop_assert_eq!(list.len(), expected_len);
            prop_assert_eq!(list.is_empty(), expected_len == 0);
        }
    }

    #[test]
    fn prop_nth_from_end_mirrors_indexing(
        source in prop::collection::vec(any::<i32>(), 1..32),
    ) {
        let list = List::from_iter(source.clone());
        let len = source.len();
        for n in 1..=len {
            prop_assert_eq!(list.nth_from_end(n), Ok(&source[len - n]));
        }
        prop_assert!(list.nth_from_end(len + 1).is_err());
    }

    #[test]
    fn prop_built_lists_are_acyclic(source in prop::collection::vec(any::<i32>(), 0..64)) {
        let mut list = List::from_iter(source);
        prop_assert!(!list.has_cycle());
        prop_assert!(list.cycle_start().is_none());
        list.reverse();
        list.dedup();
        prop_assert!(!list.has_cycle());
    }

    #[test]
    fn prop_middle_is_the_element_at_half_len(
        source in prop::collection::vec(any::<i32>(), 1..64),
    ) {
        let list = List::from_iter(source.clone());
        prop_assert_eq!(list.middle().unwrap().get(), &source[source.len() / 2]);
    }
}

/// The end-to-end trace from the crate documentation, step by step.
#[test]
fn scenario_mutation_trace() {
    let mut list = List::new();
    list.push_back(1);
    list.push_back(2);
    list.push_back(3);
    assert_eq!(list.to_vec(), vec![1, 2, 3]);

    list.push_front(0);
    assert_eq!(list.to_vec(), vec![0, 1, 2, 3]);

    list.insert(2, 99).unwrap();
    assert_eq!(list.to_vec(), vec![0, 1, 99, 2, 3]);

    assert_eq!(list.pop_front(), Ok(0));
    assert_eq!(list.to_vec(), vec![1, 99, 2, 3]);

    assert_eq!(list.pop_back(), Ok(3));
    assert_eq!(list.to_vec(), vec![1, 99, 2]);

    assert!(list.remove_value(&99));
    assert_eq!(list.to_vec(), vec![1, 2]);

    list.extend([2, 2, 3, 3]);
    assert_eq!(list.to_vec(), vec![1, 2, 2, 2, 3, 3]);

    list.dedup();
    assert_eq!(list.to_vec(), vec![1, 2, 3]);
}

#[rstest]
#[case(vec![1, 2, 3, 4, 5], 3)]
#[case(vec![1, 2, 3, 4], 3)]
#[case(vec![7], 7)]
#[case(vec![7, 8], 8)]
fn scenario_middle(#[case] source: Vec<i32>, #[case] expected: i32) {
    let list = List::from_iter(source);
    assert_eq!(list.middle().unwrap().get(), &expected);
}

#[rstest]
#[case(0, true)]
#[case(1, true)]
#[case(3, true)] // index == len appends
#[case(4, false)]
fn scenario_insert_bounds(#[case] at: usize, #[case] ok: bool) {
    let mut list = List::from_iter([1, 2, 3]);
    let result = list.insert(at, 9);
    assert_eq!(result.is_ok(), ok);
    if !ok {
        assert_eq!(result, Err(Error::OutOfRange { index: at, len: 3 }));
    }
}

#[rstest]
#[case(vec![], Err(Error::Empty))]
#[case(vec![5], Ok(5))]
#[case(vec![5, 6], Ok(6))]
fn scenario_pop_back(#[case] source: Vec<i32>, #[case] expected: Result<i32, Error>) {
    let mut list = List::from_iter(source);
    assert_eq!(list.pop_back(), expected);
}

#[test]
fn scenario_nth_from_end_errors() {
    let list = List::from_iter([1, 2, 3]);
    assert_eq!(
        list.nth_from_end(0),
        Err(Error::InvalidArgument("n must be at least 1"))
    );
    assert_eq!(
        list.nth_from_end(4),
        Err(Error::OutOfRange { index: 4, len: 3 })
    );
}

#[test]
fn scenario_errors_display() {
    assert_eq!(
        Error::OutOfRange { index: 4, len: 3 }.to_string(),
        "index 4 is out of range for a list of length 3"
    );
    assert_eq!(
        Error::InvalidArgument("n must be at least 1").to_string(),
        "invalid argument: n must be at least 1"
    );
    assert_eq!(Error::Empty.to_string(), "the list is empty");
}
