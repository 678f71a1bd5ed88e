//! Advanced collection operations: shuffling, method invocation, sorting, zipping,
//! flattening and set-like combination of sequences.
//!
//! `intersection` and `difference` compare elements with `Eq` and `Hash` on their own
//! type; nothing is coerced to a string first, so `1` and `"1"` can never meet.

use std::cmp::Ordering;
use std::collections::{HashMap, HashSet};
use std::hash::Hash;

use rand::seq::SliceRandom;
use rand::{thread_rng, Rng};

use underbar::Result;

use crate::interfaces::{Collection, Invocable, Record};
use crate::nested::Nested;
use crate::reduce::{fold, reduce};
use crate::traversal::map;

/// Returns a shuffled copy of `sequence`, leaving the input untouched.
pub fn shuffle<A: Clone>(sequence: &[A]) -> Vec<A> {
    shuffle_with(sequence, &mut thread_rng())
}

/// Returns a copy of `sequence` shuffled with the given random source.
/// ```rust
///   extern crate rand;
///   extern crate underbar_collection;
///
///   use rand::SeedableRng;
///   use rand::rngs::StdRng;
///   use underbar_collection::shuffle_with;
///
///   let mut rng = StdRng::seed_from_u64(7);
///   let mut shuffled = shuffle_with(&[1, 2, 3, 4], &mut rng);
///   shuffled.sort();
///   assert_eq!(shuffled, vec![1, 2, 3, 4]);
/// ```
pub fn shuffle_with<A: Clone, R: Rng + ?Sized>(sequence: &[A], rng: &mut R) -> Vec<A> {
    let mut copy = sequence.to_vec();
    copy.shuffle(rng);
    copy
}

/// Calls the method named `method` on each element with `args`, collecting the results in
/// order.  The first failure aborts the whole call; no partial results are returned.
/// ```rust
///   use underbar_collection::{invoke, Invocable, Result, UnderbarError};
///
///   struct Counter(u32);
///
///   impl Invocable for Counter {
///       type Args = u32;
///       type Output = u32;
///
///       fn invoke_method(&self, name: &str, by: &u32) -> Result<u32> {
///           match name {
///               "add" => Ok(self.0 + by),
///               other => Err(UnderbarError::NoSuchMethod(other.to_owned()))
///           }
///       }
///   }
///
///   let counters = vec![Counter(1), Counter(5)];
///   assert_eq!(invoke(&counters, "add", &10).unwrap(), vec![11, 15]);
///   assert!(invoke(&counters, "reset", &0).is_err());
/// ```
pub fn invoke<'a, C>(
    collection: &'a C,
    method: &str,
    args: &<C::Item as Invocable>::Args
) -> Result<Vec<<C::Item as Invocable>::Output>>
        where C: Collection + ?Sized,
              C::Item: Invocable {
    fold(collection, |results, item, _, _| {
        let failure = match *results {
            Ok(ref mut outputs) => {
                match item.invoke_method(method, args) {
                    Ok(output) => {
                        outputs.push(output);
                        None
                    },
                    Err(e) => Some(e)
                }
            },
            Err(_) => None
        };
        if let Some(e) = failure {
            *results = Err(e);
        }
    }, Ok(Vec::with_capacity(collection.size())))
}

/// Calls `func(element, args)` for each element, collecting the results in order.
/// ```rust
///   use underbar_collection::invoke_with;
///
///   let padded = invoke_with(&vec!["a", "bc"], |s, width: &usize| format!("{:>1$}", s, *width), &3);
///   assert_eq!(padded, vec!["  a", " bc"]);
/// ```
pub fn invoke_with<'a, C, A, R, F>(collection: &'a C, mut func: F, args: &A) -> Vec<R>
        where C: Collection + ?Sized,
              A: ?Sized,
              F: FnMut(&'a C::Item, &A) -> R {
    map(collection, |item, _, _| func(item, args))
}

// Keys incomparable with themselves, such as NaN, rank after every other key and tie
// with each other
fn rank<K: PartialOrd + ?Sized>(a: &K, b: &K) -> Ordering {
    match a.partial_cmp(b) {
        Some(order) => order,
        None => {
            match (a.partial_cmp(a).is_some(), b.partial_cmp(b).is_some()) {
                (true, false) => Ordering::Less,
                (false, true) => Ordering::Greater,
                _ => Ordering::Equal
            }
        }
    }
}

/// Returns the values sorted ascending by `key(value)`.  Keys that cannot be compared with
/// themselves, such as NaN, sort last.  Ties keep no guaranteed order.
/// ```rust
///   use underbar_collection::sort_by;
///
///   assert_eq!(sort_by(&vec!["ccc", "a", "bb"], |s| s.len()), vec!["a", "bb", "ccc"]);
/// ```
pub fn sort_by<'a, C, K, F>(collection: &'a C, mut key: F) -> Vec<C::Item>
        where C: Collection + ?Sized,
              C::Item: Clone,
              K: PartialOrd,
              F: FnMut(&'a C::Item) -> K {
    let mut keyed = map(collection, |item, _, _| (key(item), item));
    keyed.sort_by(|a, b| rank(&a.0, &b.0));
    keyed.into_iter().map(|(_, item)| item.clone()).collect()
}

/// Returns the values sorted ascending by their property named `key`.  Values lacking the
/// property sort last, after values whose property cannot be compared with itself.
/// ```rust
///   use std::collections::BTreeMap;
///   use underbar_collection::{pluck, sort_by_property};
///
///   let rows: Vec<BTreeMap<String, u32>> = vec![
///       vec![("rank".to_owned(), 3)].into_iter().collect(),
///       BTreeMap::new(),
///       vec![("rank".to_owned(), 1)].into_iter().collect(),
///   ];
///   let sorted = sort_by_property(&rows, "rank");
///   assert_eq!(pluck(&sorted, "rank"), vec![Some(1), Some(3), None]);
/// ```
pub fn sort_by_property<'a, C>(collection: &'a C, key: &str) -> Vec<C::Item>
        where C: Collection + ?Sized,
              C::Item: Clone + Record,
              <C::Item as Record>::Value: PartialOrd {
    let mut keyed = map(collection, |item, _, _| (item.property(key), item));
    keyed.sort_by(|a, b| {
        match (a.0, b.0) {
            (Some(x), Some(y)) => rank(x, y),
            (Some(_), None) => Ordering::Less,
            (None, Some(_)) => Ordering::Greater,
            (None, None) => Ordering::Equal
        }
    });
    keyed.into_iter().map(|(_, item)| item.clone()).collect()
}

/// Groups the `i`-th element of every sequence into tuple `i`.  There are as many tuples as
/// the longest sequence has elements; shorter sequences contribute `None`.
/// ```rust
///   use underbar_collection::zip;
///
///   let zipped = zip(&[vec![1, 2, 3], vec![4]]);
///   assert_eq!(zipped, vec![
///       vec![Some(1), Some(4)],
///       vec![Some(2), None],
///       vec![Some(3), None],
///   ]);
/// ```
pub fn zip<A: Clone, S: AsRef<[A]>>(sequences: &[S]) -> Vec<Vec<Option<A>>> {
    let lengths = map(sequences, |sequence, _, _| sequence.as_ref().len());
    let longest = reduce(&lengths, |longest, length, _, _| longest.max(*length), None)
        .unwrap_or(0);

    let mut zipped = Vec::with_capacity(longest);
    for index in 0..longest {
        zipped.push(map(sequences, |sequence, _, _| sequence.as_ref().get(index).cloned()));
    }
    zipped
}

/// Pairs up two sequences of different element types, padding the shorter with `None`.
/// ```rust
///   use underbar_collection::zip2;
///
///   let zipped = zip2(&['a', 'b', 'c', 'd'], &[1, 2, 3]);
///   assert_eq!(zipped[0], (Some('a'), Some(1)));
///   assert_eq!(zipped[3], (Some('d'), None));
/// ```
pub fn zip2<A: Clone, B: Clone>(left: &[A], right: &[B]) -> Vec<(Option<A>, Option<B>)> {
    let longest = left.len().max(right.len());
    (0..longest)
        .map(|index| (left.get(index).cloned(), right.get(index).cloned()))
        .collect()
}

/// Flattens arbitrarily nested lists into their scalars, depth first and left to right.
/// ```rust
///   use underbar_collection::{flatten, Nested};
///
///   let nested = vec![
///       Nested::item(1),
///       Nested::list(vec![Nested::item(2), Nested::flat(vec![3, 4])]),
///   ];
///   assert_eq!(flatten(&nested), vec![1, 2, 3, 4]);
/// ```
pub fn flatten<T: Clone>(nested: &[Nested<T>]) -> Vec<T> {
    fold(nested, |flat, element, _, _| {
        match *element {
            Nested::Item(ref value) => flat.push(value.clone()),
            Nested::List(ref inner) => flat.extend(flatten(inner))
        }
    }, Vec::new())
}

/// Returns the values present in every sequence, once each, in the order they first appear
/// in the first sequence.
/// ```rust
///   use underbar_collection::intersection;
///
///   assert_eq!(intersection(&[vec![1, 2, 3], vec![2, 3, 4]]), vec![2, 3]);
/// ```
pub fn intersection<A, S>(sequences: &[S]) -> Vec<A>
        where A: Eq + Hash + Clone,
              S: AsRef<[A]> {
    // Number of sequences each distinct value appears in
    let mut counts: HashMap<&A, usize> = HashMap::new();
    sequences.each(|sequence, _, _| {
        let mut seen = HashSet::new();
        sequence.as_ref().each(|item, _, _| {
            if seen.insert(item) {
                *counts.entry(item).or_insert(0) += 1;
            }
        });
    });

    let total = sequences.len();
    let mut emitted = HashSet::new();
    let mut shared = Vec::new();
    if let Some(head) = sequences.first() {
        head.as_ref().each(|item, _, _| {
            if counts.get(item) == Some(&total) && emitted.insert(item) {
                shared.push(item.clone());
            }
        });
    }
    shared
}

/// Returns the elements of `sequence` that appear in none of `others`, once each and in
/// their original order.
/// ```rust
///   use underbar_collection::difference;
///
///   assert_eq!(difference(&[1, 2, 3, 4, 5], &[vec![5, 2, 10]]), vec![1, 3, 4]);
/// ```
pub fn difference<A, S>(sequence: &[A], others: &[S]) -> Vec<A>
        where A: Eq + Hash + Clone,
              S: AsRef<[A]> {
    let mut excluded = HashSet::new();
    others.each(|other, _, _| {
        other.as_ref().each(|item, _, _| {
            excluded.insert(item);
        });
    });

    // Emitted values join the excluded set, which also deduplicates
    let mut kept = Vec::new();
    sequence.each(|item, _, _| {
        if excluded.insert(item) {
            kept.push(item.clone());
        }
    });
    kept
}
