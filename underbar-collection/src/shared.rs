use std::fmt;
use std::hash::{Hash, Hasher};
use std::ops::Deref;
use std::rc::Rc;

/// A reference-counted value compared by identity.
///
/// Two `Shared` handles are equal only when they point at the same allocation, no matter
/// what the values look like.  Wrapping elements in `Shared` gives `uniq`, `index_of`,
/// `contains`, `intersection` and `difference` object-identity semantics.
/// ```rust
///   use underbar_collection::{uniq, Shared};
///
///   let a = Shared::new(vec![1, 2]);
///   let b = Shared::new(vec![1, 2]);
///   assert_eq!(uniq(&[a.clone(), b.clone(), a.clone()]).len(), 2);
/// ```
pub struct Shared<T>(Rc<T>);

impl <T> Shared<T> {

    /// Moves `value` into a new allocation
    pub fn new(value: T) -> Self {
        Shared(Rc::new(value))
    }
}

impl <T> Clone for Shared<T> {
    fn clone(&self) -> Self {
        Shared(Rc::clone(&self.0))
    }
}

impl <T> Deref for Shared<T> {
    type Target = T;

    fn deref(&self) -> &T {
        &self.0
    }
}

impl <T> PartialEq for Shared<T> {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

impl <T> Eq for Shared<T> {}

impl <T> Hash for Shared<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        Rc::as_ptr(&self.0).hash(state)
    }
}

impl <T: fmt::Debug> fmt::Debug for Shared<T> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "Shared({:?})", self.0)
    }
}
