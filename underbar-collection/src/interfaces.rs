//! The capabilities collection operations are written against.  A sequence and a mapping
//! both provide `each`; everything else is layered on top of it.

use underbar::Result;

/// Something that can be traversed element by element.
///
/// Sequences visit elements in ascending index order with `Key = usize`.  Mappings visit
/// values in the container's natural key order with the entry's key.
pub trait Collection {

    /// Element type
    type Item;

    /// Index or key handed to iterators alongside each element
    type Key: Clone;

    /// Calls `iterator(value, index_or_key, collection)` once per element.
    fn each<'a, F>(&'a self, iterator: F)
            where F: FnMut(&'a Self::Item, Self::Key, &'a Self);

    /// Number of elements
    fn size(&self) -> usize;
}

/// A keyed collection that can be written to, used by `extend` and `defaults`.
pub trait Mapping: Collection {

    /// Whether the mapping has its own entry for `key`
    fn has_key(&self, key: &Self::Key) -> bool;

    /// Sets `key` to `value`, replacing any existing entry
    fn put(&mut self, key: Self::Key, value: Self::Item);
}

/// Property access by name, used by `pluck` and `sort_by_property`.
pub trait Record {

    /// Property value type
    type Value;

    /// Returns the property named `key`, if present
    fn property(&self, key: &str) -> Option<&Self::Value>;
}

/// Method invocation by name, used by `invoke`.
pub trait Invocable {

    /// Arguments every invocation receives
    type Args: ?Sized;

    /// Method return type
    type Output;

    /// Calls the method named `name` with this value as receiver.  Unknown names should
    /// fail with `UnderbarError::NoSuchMethod`.
    fn invoke_method(&self, name: &str, args: &Self::Args) -> Result<Self::Output>;
}

/// JavaScript-style truthiness of a predicate result.
///
/// `false`, zero, NaN, the empty string, `None` and empty vectors are falsy; everything
/// else is truthy.
pub trait Truthy {

    /// Whether the value counts as true
    fn truthy(&self) -> bool;
}

impl Truthy for bool {
    fn truthy(&self) -> bool {
        *self
    }
}

macro_rules! truthy_number {
    ($($t:ty),*) => {
        $(impl Truthy for $t {
            fn truthy(&self) -> bool {
                *self != 0
            }
        })*
    }
}

truthy_number!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

impl Truthy for f32 {
    fn truthy(&self) -> bool {
        *self != 0.0 && !self.is_nan()
    }
}

impl Truthy for f64 {
    fn truthy(&self) -> bool {
        *self != 0.0 && !self.is_nan()
    }
}

impl Truthy for str {
    fn truthy(&self) -> bool {
        !self.is_empty()
    }
}

impl Truthy for String {
    fn truthy(&self) -> bool {
        !self.is_empty()
    }
}

impl <T> Truthy for Option<T> {
    fn truthy(&self) -> bool {
        self.is_some()
    }
}

impl <T> Truthy for Vec<T> {
    fn truthy(&self) -> bool {
        !self.is_empty()
    }
}

impl <'a, T: Truthy + ?Sized> Truthy for &'a T {
    fn truthy(&self) -> bool {
        (**self).truthy()
    }
}

#[cfg(test)]
mod test_lib {
    use super::*;

    #[test]
    fn test_truthiness() {
        assert!(true.truthy());
        assert!(!0u8.truthy());
        assert!((-3i32).truthy());
        assert!(!std::f64::NAN.truthy());
        assert!(!0.0f32.truthy());
        assert!(!"".truthy());
        assert!("a".to_owned().truthy());
        assert!(!None::<u8>.truthy());
        assert!(Some(0).truthy());
        assert!(!Vec::<u8>::new().truthy());
        assert!((&&1usize).truthy());
    }
}
