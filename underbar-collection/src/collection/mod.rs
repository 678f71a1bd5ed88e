//! Contains the two collection shapes: sequences and mappings

/// `Collection` for slices and vectors, plus the positional accessors
pub mod sequence;

/// `Collection`, `Mapping` and `Record` for ordered and hashed maps
pub mod mapping;

use crate::interfaces::Collection;

/// Calls `iterator(value, index_or_key, collection)` for each element of `collection`.
///
/// This is the traversal every other operation is described against.
/// ```rust
///   use std::collections::BTreeMap;
///   use underbar_collection::each;
///
///   let mut seen = Vec::new();
///   each(&vec!['a', 'b'], |c, i, _| seen.push(format!("{}{}", i, c)));
///   assert_eq!(seen, vec!["0a", "1b"]);
///
///   let mut ages = BTreeMap::new();
///   ages.insert("leah".to_owned(), 12);
///   ages.insert("andrew".to_owned(), 33);
///   let mut keys = Vec::new();
///   each(&ages, |_age, name, _| keys.push(name));
///   assert_eq!(keys, vec!["andrew", "leah"]);
/// ```
pub fn each<'a, C, F>(collection: &'a C, iterator: F)
        where C: Collection + ?Sized,
              F: FnMut(&'a C::Item, C::Key, &'a C) {
    collection.each(iterator)
}
