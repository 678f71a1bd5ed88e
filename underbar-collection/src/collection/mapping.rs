//! Mappings
//! ---
//! Ordered and hashed maps traverse their values, handing each iterator the entry's key.
//! `BTreeMap` visits keys in sorted order; `HashMap` visits them in its own arbitrary
//! (but, for an unmodified map, repeatable) order.

use std::collections::{BTreeMap, HashMap};
use std::hash::{BuildHasher, Hash};

use crate::interfaces::{Collection, Mapping, Record};

impl <K: Clone + Ord, V> Collection for BTreeMap<K, V> {
    type Item = V;
    type Key = K;

    fn each<'a, F>(&'a self, mut iterator: F)
            where F: FnMut(&'a Self::Item, Self::Key, &'a Self) {
        for (key, value) in self.iter() {
            iterator(value, key.clone(), self);
        }
    }

    fn size(&self) -> usize {
        self.len()
    }
}

impl <K: Clone + Ord, V> Mapping for BTreeMap<K, V> {
    fn has_key(&self, key: &K) -> bool {
        self.contains_key(key)
    }

    fn put(&mut self, key: K, value: V) {
        self.insert(key, value);
    }
}

impl <V> Record for BTreeMap<String, V> {
    type Value = V;

    fn property(&self, key: &str) -> Option<&V> {
        self.get(key)
    }
}

impl <K: Clone + Eq + Hash, V, S: BuildHasher> Collection for HashMap<K, V, S> {
    type Item = V;
    type Key = K;

    fn each<'a, F>(&'a self, mut iterator: F)
            where F: FnMut(&'a Self::Item, Self::Key, &'a Self) {
        for (key, value) in self.iter() {
            iterator(value, key.clone(), self);
        }
    }

    fn size(&self) -> usize {
        self.len()
    }
}

impl <K: Clone + Eq + Hash, V, S: BuildHasher> Mapping for HashMap<K, V, S> {
    fn has_key(&self, key: &K) -> bool {
        self.contains_key(key)
    }

    fn put(&mut self, key: K, value: V) {
        self.insert(key, value);
    }
}

impl <V, S: BuildHasher> Record for HashMap<String, V, S> {
    type Value = V;

    fn property(&self, key: &str) -> Option<&V> {
        self.get(key)
    }
}

#[cfg(test)]
mod test_lib {
    use super::*;

    #[test]
    fn test_btree_each_sorted_keys() {
        let mut scores = BTreeMap::new();
        scores.insert("c", 3);
        scores.insert("a", 1);
        scores.insert("b", 2);

        let mut visited = Vec::new();
        scores.each(|value, key, map| {
            assert_eq!(map.len(), 3);
            visited.push((key, *value));
        });
        assert_eq!(visited, vec![("a", 1), ("b", 2), ("c", 3)]);
    }

    #[test]
    fn test_hash_each_visits_all() {
        let mut scores = HashMap::new();
        scores.insert(1u8, "one");
        scores.insert(2u8, "two");

        let mut visited = Vec::new();
        scores.each(|value, key, _| visited.push((key, *value)));
        visited.sort();
        assert_eq!(visited, vec![(1, "one"), (2, "two")]);
        assert_eq!(scores.size(), 2);
    }

    #[test]
    fn test_record_property() {
        let mut person = HashMap::new();
        person.insert("name".to_owned(), "leah");
        assert_eq!(person.property("name"), Some(&"leah"));
        assert_eq!(person.property("age"), None);
    }
}
