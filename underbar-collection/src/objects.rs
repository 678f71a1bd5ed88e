//! Object merge helpers.  Both walk `sources` left to right and each source in its own
//! traversal order, writing into `target` in place.

use crate::interfaces::{Collection, Mapping};

/// Copies every entry of every source into `target`, overwriting existing keys, and
/// returns `target`.  Later sources win.
/// ```rust
///   use std::collections::BTreeMap;
///   use underbar_collection::extend;
///
///   let mut target: BTreeMap<&str, i32> = vec![("key1", 1)].into_iter().collect();
///   let sources: Vec<BTreeMap<&str, i32>> = vec![
///       vec![("key2", 2)].into_iter().collect(),
///       vec![("key1", 3)].into_iter().collect(),
///   ];
///   extend(&mut target, &sources);
///   assert_eq!(target, vec![("key1", 3), ("key2", 2)].into_iter().collect::<BTreeMap<_, _>>());
/// ```
pub fn extend<'t, M, S>(target: &'t mut M, sources: &[S]) -> &'t mut M
        where M: Mapping,
              M::Item: Clone,
              S: Collection<Key = M::Key, Item = M::Item> {
    sources.each(|source, _, _| {
        source.each(|value, key, _| target.put(key, value.clone()));
    });
    target
}

/// Copies entries into `target` only for keys it does not already have, and returns
/// `target`.  Earlier sources win.
/// ```rust
///   use std::collections::BTreeMap;
///   use underbar_collection::defaults;
///
///   let mut target: BTreeMap<&str, i32> = vec![("a", 1)].into_iter().collect();
///   let source: BTreeMap<&str, i32> = vec![("a", 2), ("b", 2)].into_iter().collect();
///   defaults(&mut target, &[source]);
///   assert_eq!(target, vec![("a", 1), ("b", 2)].into_iter().collect::<BTreeMap<_, _>>());
/// ```
pub fn defaults<'t, M, S>(target: &'t mut M, sources: &[S]) -> &'t mut M
        where M: Mapping,
              M::Item: Clone,
              S: Collection<Key = M::Key, Item = M::Item> {
    sources.each(|source, _, _| {
        source.each(|value, key, _| {
            if !target.has_key(&key) {
                target.put(key, value.clone());
            }
        });
    });
    target
}

#[cfg(test)]
mod test_lib {
    use super::*;
    use std::collections::{BTreeMap, HashMap};

    fn object(pairs: &[(&'static str, i32)]) -> BTreeMap<&'static str, i32> {
        pairs.iter().cloned().collect()
    }

    #[test]
    fn test_extend_returns_target() {
        let mut target = object(&[("key1", 1)]);
        let merged = extend(&mut target, &[object(&[("key2", 2)]), object(&[("key1", 3)])]).clone();
        assert_eq!(merged, object(&[("key1", 3), ("key2", 2)]));
        assert_eq!(target, merged);
    }

    #[test]
    fn test_extend_no_sources() {
        let mut target = object(&[("a", 1)]);
        let sources: Vec<BTreeMap<&str, i32>> = Vec::new();
        extend(&mut target, &sources);
        assert_eq!(target, object(&[("a", 1)]));
    }

    #[test]
    fn test_defaults_first_source_wins() {
        let mut target = object(&[("a", 1)]);
        defaults(&mut target, &[object(&[("a", 2), ("b", 2)]), object(&[("b", 3), ("c", 3)])]);
        assert_eq!(target, object(&[("a", 1), ("b", 2), ("c", 3)]));
    }

    #[test]
    fn test_extend_hash_from_btree() {
        let mut target: HashMap<&str, i32> = HashMap::new();
        target.insert("x", 0);
        extend(&mut target, &[object(&[("x", 9), ("y", 8)])]);
        assert_eq!(target.get("x"), Some(&9));
        assert_eq!(target.get("y"), Some(&8));
    }
}
