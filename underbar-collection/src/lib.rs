//! Underbar-Collection
//! ---
//! Underbar-Collection is the collection half of underbar: generic traversal, reduction,
//! object merging and set-like operations over sequences and key/value mappings.
//!
//! What is it?
//! ---
//! Every operation is written against the `Collection` trait, which supplies a single
//! primitive, `each`.  Slices and vectors traverse in index order and report their index;
//! `BTreeMap` and `HashMap` traverse their entries and report the key.  The rest of the
//! library (`map`, `filter`, `reduce`, `every`, ...) is derived from that one walk.
//!
//! Predicates may return anything `Truthy`, so `bool`, numbers, strings and options all work
//! as filter results, and `underbar::identity` serves as the "test the value itself"
//! predicate.
//!
//! Example - Filtering and reducing
//! ---
//! ```rust
//! extern crate underbar;
//! extern crate underbar_collection;
//!
//! use underbar::identity;
//! use underbar_collection::{every, filter, reduce, uniq};
//!
//! let counts = vec![3, 0, 2, 3, 0, 7];
//! let nonzero = filter(&counts, identity);
//! assert_eq!(nonzero, vec![3, 2, 3, 7]);
//! assert!(every(&nonzero, identity));
//! assert_eq!(uniq(&nonzero), vec![3, 2, 7]);
//! assert_eq!(reduce(&nonzero, |a, b, _, _| a + b, None), Some(15));
//! ```
//!
//! Example - Merging objects
//! ---
//! ```rust
//! use std::collections::HashMap;
//! use underbar_collection::{defaults, extend, pluck};
//!
//! let mut config: HashMap<String, String> = HashMap::new();
//! config.insert("host".into(), "localhost".into());
//!
//! let mut overrides = HashMap::new();
//! overrides.insert("host".to_owned(), "example.org".to_owned());
//! let mut fallbacks = HashMap::new();
//! fallbacks.insert("port".to_owned(), "8080".to_owned());
//!
//! extend(&mut config, &[overrides]);
//! defaults(&mut config, &[fallbacks]);
//! assert_eq!(pluck(&vec![config], "port"), vec![Some("8080".to_owned())]);
//! ```

#![warn(missing_docs)]

#[macro_use]
extern crate serde_derive;

/// Traits describing what the operations may traverse, merge, look up and invoke
pub mod interfaces;

/// The `each` primitive and its implementations for sequences and mappings
pub mod collection;

/// map, filter, reject, uniq and pluck
pub mod traversal;

/// reduce, fold and the boolean folds built on it
pub mod reduce;

/// extend and defaults
pub mod objects;

/// shuffle, invoke, sortBy, zip, flatten, intersection and difference
pub mod advanced;

/// Input shape for `flatten`
pub mod nested;

/// Reference-identity wrapper
pub mod shared;

pub use crate::advanced::{difference, flatten, intersection, invoke, invoke_with, shuffle, shuffle_with};
pub use crate::advanced::{sort_by, sort_by_property, zip, zip2};
pub use crate::collection::each;
pub use crate::collection::sequence::{first, first_n, index_of, last, last_n};
pub use crate::interfaces::{Collection, Invocable, Mapping, Record, Truthy};
pub use crate::nested::Nested;
pub use crate::objects::{defaults, extend};
pub use crate::reduce::{contains, every, fold, reduce, some};
pub use crate::shared::Shared;
pub use crate::traversal::{filter, map, pluck, reject, uniq};

pub use underbar::{identity, Result, UnderbarError};
