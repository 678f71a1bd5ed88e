//! Derived traversal: map, filter, reject, uniq and pluck, all built on `each`.

use crate::collection::sequence::index_of;
use crate::interfaces::{Collection, Record, Truthy};

/// Returns a new vector holding `iterator(value, index_or_key, collection)` for each element.
/// ```rust
///   use underbar_collection::map;
///
///   let labels = map(&vec![1, 2, 3], |n, i, _| format!("{}:{}", i, n));
///   assert_eq!(labels, vec!["0:1", "1:2", "2:3"]);
/// ```
pub fn map<'a, C, B, F>(collection: &'a C, mut iterator: F) -> Vec<B>
        where C: Collection + ?Sized,
              F: FnMut(&'a C::Item, C::Key, &'a C) -> B {
    let mut mapped = Vec::with_capacity(collection.size());
    collection.each(|item, key, list| {
        mapped.push(iterator(item, key, list));
    });
    mapped
}

/// Returns the values, not the keys, whose predicate result is truthy.
/// ```rust
///   use underbar_collection::filter;
///
///   assert_eq!(filter(&vec![1, 2, 3, 4], |n| n % 2 == 0), vec![2, 4]);
/// ```
pub fn filter<'a, C, P, F>(collection: &'a C, mut predicate: F) -> Vec<C::Item>
        where C: Collection + ?Sized,
              C::Item: Clone,
              P: Truthy,
              F: FnMut(&'a C::Item) -> P {
    let mut filtered = Vec::new();
    collection.each(|item, _, _| {
        if predicate(item).truthy() {
            filtered.push(item.clone());
        }
    });
    filtered
}

/// Returns the values whose predicate result is falsy; the complement of `filter`.
/// ```rust
///   use underbar_collection::reject;
///
///   assert_eq!(reject(&vec![1, 2, 3, 4], |n| n % 2 == 0), vec![1, 3]);
/// ```
pub fn reject<'a, C, P, F>(collection: &'a C, mut predicate: F) -> Vec<C::Item>
        where C: Collection + ?Sized,
              C::Item: Clone,
              P: Truthy,
              F: FnMut(&'a C::Item) -> P {
    filter(collection, move |item| !predicate(item).truthy())
}

/// Returns each distinct value once, in order of first occurrence.  Values are compared
/// with `==` through `index_of`, never by hash.
/// ```rust
///   use underbar_collection::uniq;
///
///   assert_eq!(uniq(&[1, 2, 1, 3, 2]), vec![1, 2, 3]);
/// ```
pub fn uniq<A: PartialEq + Clone>(sequence: &[A]) -> Vec<A> {
    let mut unique = Vec::new();
    sequence.each(|item, _, _| {
        if index_of(&unique, item).is_none() {
            unique.push(item.clone());
        }
    });
    unique
}

/// Returns the property named `key` of each element; `None` where an element lacks it.
/// ```rust
///   use std::collections::BTreeMap;
///   use underbar_collection::pluck;
///
///   let people: Vec<BTreeMap<String, u32>> = vec![
///       vec![("age".to_owned(), 33)].into_iter().collect(),
///       vec![("age".to_owned(), 12)].into_iter().collect(),
///   ];
///   assert_eq!(pluck(&people, "age"), vec![Some(33), Some(12)]);
/// ```
pub fn pluck<'a, C>(collection: &'a C, key: &str) -> Vec<Option<<C::Item as Record>::Value>>
        where C: Collection + ?Sized,
              C::Item: Record,
              <C::Item as Record>::Value: Clone {
    map(collection, |item, _, _| item.property(key).cloned())
}
