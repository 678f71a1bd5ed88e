//! Reduction
//! ---
//! `reduce` threads an accumulator of the element type through the collection; `fold`
//! threads an accumulator of any type, mutated in place.  `contains`, `every` and `some`
//! are folds, which fixes how often their callbacks run: once a fold has its answer it stops
//! evaluating the callback, but still walks the remaining elements.

use crate::interfaces::{Collection, Truthy};

/// Folds the collection into a single value of its element type.
///
/// With `Some(seed)`, `combine(accumulator, value, index_or_key, collection)` runs once per
/// element starting from `seed`.  With `None`, the first element becomes the accumulator
/// and is never passed to `combine`.  An empty collection without a seed gives `None`.
/// ```rust
///   use underbar_collection::reduce;
///
///   assert_eq!(reduce(&vec![1, 2, 3], |total, n, _, _| total + n, Some(0)), Some(6));
///   assert_eq!(reduce(&vec![5], |total, n, _, _| total + n * n, None), Some(5));
///   assert_eq!(reduce(&Vec::<i32>::new(), |total, n, _, _| total + n, None), None);
/// ```
pub fn reduce<'a, C, F>(collection: &'a C, mut combine: F, seed: Option<C::Item>) -> Option<C::Item>
        where C: Collection + ?Sized,
              C::Item: Clone,
              F: FnMut(C::Item, &'a C::Item, C::Key, &'a C) -> C::Item {
    let mut accumulator = seed;
    collection.each(|item, key, list| {
        accumulator = Some(match accumulator.take() {
            Some(previous) => combine(previous, item, key, list),
            None => item.clone()
        });
    });
    accumulator
}

/// Folds the collection into `seed`, calling `combine(&mut accumulator, value, index_or_key,
/// collection)` once per element.
/// ```rust
///   use underbar_collection::fold;
///
///   let lengths = fold(&vec!["ab", "cde"], |total, word, _, _| *total += word.len(), 0);
///   assert_eq!(lengths, 5);
/// ```
pub fn fold<'a, C, B, F>(collection: &'a C, mut combine: F, seed: B) -> B
        where C: Collection + ?Sized,
              F: FnMut(&mut B, &'a C::Item, C::Key, &'a C) {
    let mut accumulator = seed;
    collection.each(|item, key, list| {
        combine(&mut accumulator, item, key, list);
    });
    accumulator
}

/// Whether any element equals `target`.
/// ```rust
///   use underbar_collection::contains;
///
///   assert!(contains(&vec![1, 2, 3], &2));
///   assert!(!contains(&vec![1, 2, 3], &4));
/// ```
pub fn contains<'a, C>(collection: &'a C, target: &C::Item) -> bool
        where C: Collection + ?Sized,
              C::Item: PartialEq {
    fold(collection, |found, item, _, _| {
        if !*found {
            *found = item == target;
        }
    }, false)
}

/// Whether the predicate result is truthy for every element.  Once one result is falsy the
/// predicate is not called again.  Pass `underbar::identity` to test the elements themselves.
/// ```rust
///   use underbar::identity;
///   use underbar_collection::every;
///
///   assert!(every(&vec![2, 4, 6], |n| n % 2 == 0));
///   assert!(!every(&vec![true, false], identity));
///   assert!(every(&Vec::<u8>::new(), identity));
/// ```
pub fn every<'a, C, P, F>(collection: &'a C, mut predicate: F) -> bool
        where C: Collection + ?Sized,
              P: Truthy,
              F: FnMut(&'a C::Item) -> P {
    fold(collection, |passing, item, _, _| {
        if *passing {
            *passing = predicate(item).truthy();
        }
    }, true)
}

/// Whether the predicate result is truthy for at least one element, computed as "not every
/// element fails".
/// ```rust
///   use underbar::identity;
///   use underbar_collection::some;
///
///   assert!(some(&vec![1, 3, 4], |n| n % 2 == 0));
///   assert!(!some(&vec![0, 0], identity));
///   assert!(!some(&Vec::<u8>::new(), identity));
/// ```
pub fn some<'a, C, P, F>(collection: &'a C, mut predicate: F) -> bool
        where C: Collection + ?Sized,
              P: Truthy,
              F: FnMut(&'a C::Item) -> P {
    !every(collection, move |item| !predicate(item).truthy())
}

#[cfg(test)]
mod test_lib {
    use super::*;
    use std::collections::BTreeMap;
    use underbar::identity;

    #[test]
    fn test_unseeded_skips_first_element() {
        let mut calls = Vec::new();
        let total = reduce(&vec![1, 2, 3], |acc, n, i, _| {
            calls.push(i);
            acc + n
        }, None);
        assert_eq!(total, Some(6));
        assert_eq!(calls, vec![1, 2]);
    }

    #[test]
    fn test_single_element_never_combines() {
        let mut called = false;
        let out = reduce(&vec![5], |acc, n, _, _| {
            called = true;
            acc + n * n
        }, None);
        assert_eq!(out, Some(5));
        assert!(!called);
    }

    #[test]
    fn test_seeded_combines_every_element() {
        let mut calls = 0;
        let out = reduce(&vec![1, 2, 3], |acc, n, _, _| {
            calls += 1;
            acc * n
        }, Some(10));
        assert_eq!(out, Some(60));
        assert_eq!(calls, 3);
    }

    #[test]
    fn test_reduce_mapping_uses_first_value() {
        let mut parts = BTreeMap::new();
        parts.insert("b", "y".to_owned());
        parts.insert("a", "x".to_owned());
        let joined = reduce(&parts, |acc, part, key, _| format!("{}{}{}", acc, key, part), None);
        assert_eq!(joined, Some("xby".to_owned()));
    }

    #[test]
    fn test_contains_mapping_values() {
        let mut ages = BTreeMap::new();
        ages.insert("leah", 12);
        assert!(contains(&ages, &12));
        assert!(!contains(&ages, &13));
    }

    #[test]
    fn test_every_stops_calling_after_failure() {
        let mut seen = Vec::new();
        let all_small = every(&vec![1, 9, 2, 3], |n| {
            seen.push(*n);
            *n < 5
        });
        assert!(!all_small);
        assert_eq!(seen, vec![1, 9]);
    }

    #[test]
    fn test_some_stops_calling_after_success() {
        let mut seen = Vec::new();
        let any_big = some(&vec![1, 9, 2, 30], |n| {
            seen.push(*n);
            *n > 5
        });
        assert!(any_big);
        assert_eq!(seen, vec![1, 9]);
    }

    #[test]
    fn test_identity_truthiness() {
        assert!(every(&vec![1, 2, 3], identity));
        assert!(!every(&vec![1, 0, 3], identity));
        assert!(some(&vec!["", "x"], identity));
        assert!(!some(&vec![None::<u8>, None], identity));
    }

    #[test]
    fn test_de_morgan() {
        let values = vec![0, 3, 6, 7];
        for limit in 0..10 {
            let p = |n: &i32| *n < limit;
            assert_eq!(every(&values, p), !some(&values, |n| !p(n)));
            assert_eq!(some(&values, p), !every(&values, |n| !p(n)));
        }
    }
}
