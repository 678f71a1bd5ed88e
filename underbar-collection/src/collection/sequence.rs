//! Sequences
//! ---
//! Slices and vectors traverse by index, `0..len`, handing each iterator the position as
//! its key.  The positional accessors below only make sense for sequences.

use crate::interfaces::Collection;

impl <A> Collection for [A] {
    type Item = A;
    type Key = usize;

    fn each<'a, F>(&'a self, mut iterator: F)
            where F: FnMut(&'a Self::Item, Self::Key, &'a Self) {
        for (index, item) in self.iter().enumerate() {
            iterator(item, index, self);
        }
    }

    fn size(&self) -> usize {
        self.len()
    }
}

impl <A> Collection for Vec<A> {
    type Item = A;
    type Key = usize;

    fn each<'a, F>(&'a self, mut iterator: F)
            where F: FnMut(&'a Self::Item, Self::Key, &'a Self) {
        for (index, item) in self.iter().enumerate() {
            iterator(item, index, self);
        }
    }

    fn size(&self) -> usize {
        self.len()
    }
}

/// Returns the lowest index holding a value equal to `target`, or `None` when absent.
/// ```rust
///   use underbar_collection::index_of;
///
///   assert_eq!(index_of(&[10, 20, 30, 20], &20), Some(1));
///   assert_eq!(index_of(&[10, 20, 30], &40), None);
/// ```
pub fn index_of<A: PartialEq>(sequence: &[A], target: &A) -> Option<usize> {
    let mut result = None;
    sequence.each(|item, index, _| {
        if result.is_none() && item == target {
            result = Some(index);
        }
    });
    result
}

/// Returns the first element, or `None` for an empty sequence.
pub fn first<A>(sequence: &[A]) -> Option<&A> {
    sequence.first()
}

/// Returns a new vector of at most the first `n` elements.
/// ```rust
///   use underbar_collection::first_n;
///
///   assert_eq!(first_n(&[1, 2, 3], 2), vec![1, 2]);
///   assert_eq!(first_n(&[1, 2, 3], 5), vec![1, 2, 3]);
///   assert!(first_n(&[1, 2, 3], 0).is_empty());
/// ```
pub fn first_n<A: Clone>(sequence: &[A], n: usize) -> Vec<A> {
    sequence[..n.min(sequence.len())].to_vec()
}

/// Returns the last element, or `None` for an empty sequence.
pub fn last<A>(sequence: &[A]) -> Option<&A> {
    sequence.last()
}

/// Returns a new vector of at most the last `n` elements, in their original order.
/// ```rust
///   use underbar_collection::last_n;
///
///   assert_eq!(last_n(&[1, 2, 3], 2), vec![2, 3]);
///   assert_eq!(last_n(&[1, 2, 3], 5), vec![1, 2, 3]);
///   assert!(last_n(&[1, 2, 3], 0).is_empty());
/// ```
pub fn last_n<A: Clone>(sequence: &[A], n: usize) -> Vec<A> {
    sequence[sequence.len().saturating_sub(n)..].to_vec()
}
