use std::cell::RefCell;
use std::collections::HashMap;
use std::marker::PhantomData;

use serde::Serialize;

use crate::error::Result;

/// A function whose results are cached per distinct argument list.  See `memoize`.
pub struct Memoized<F, A, R> {
    func: F,
    memo: RefCell<HashMap<Vec<u8>, R>>,
    args: PhantomData<fn(A)>,
}

/// Wraps `func` so that each distinct argument list is computed only once.
///
/// The argument list (a single value or a tuple) is encoded with bincode and the encoding
/// is the cache key, so two calls hit the same entry exactly when their arguments encode
/// identically.  This is only meaningful for primitive-valued arguments: numbers, strings,
/// booleans, and tuples or options of those.
/// ```rust
///   use underbar::memoize;
///
///   let slow_add = memoize(|(a, b): (i64, i64)| a + b);
///   assert_eq!(slow_add.call((2, 3)).unwrap(), 5);
///   assert_eq!(slow_add.cached(), 1);
///   assert_eq!(slow_add.call((2, 3)).unwrap(), 5);
///   assert_eq!(slow_add.cached(), 1);
/// ```
pub fn memoize<F, A, R>(func: F) -> Memoized<F, A, R>
        where F: Fn(A) -> R {
    Memoized {
        func: func,
        memo: RefCell::new(HashMap::new()),
        args: PhantomData,
    }
}

impl <F: Fn(A) -> R, A: Serialize, R: Clone> Memoized<F, A, R> {

    /// Returns the stored result for `args`, computing and storing it on first sight.
    pub fn call(&self, args: A) -> Result<R> {
        let key = bincode::serialize(&args)?;
        if let Some(hit) = self.memo.borrow().get(&key) {
            trace!("memoize: hit for {} byte key", key.len());
            return Ok(hit.clone());
        }

        trace!("memoize: miss for {} byte key", key.len());
        let result = (self.func)(args);
        self.memo.borrow_mut().insert(key, result.clone());
        Ok(result)
    }
}

impl <F, A, R> Memoized<F, A, R> {

    /// Number of distinct argument lists computed so far
    pub fn cached(&self) -> usize {
        self.memo.borrow().len()
    }
}

#[cfg(test)]
mod test_lib {
    use super::*;
    use std::cell::Cell;

    #[test]
    fn test_computes_once_per_args() {
        let calls = Cell::new(0);
        let shout = memoize(|(word, times): (String, usize)| {
            calls.set(calls.get() + 1);
            word.to_uppercase().repeat(times)
        });

        assert_eq!(shout.call(("ab".into(), 2)).unwrap(), "ABAB");
        assert_eq!(shout.call(("ab".into(), 2)).unwrap(), "ABAB");
        assert_eq!(calls.get(), 1);

        assert_eq!(shout.call(("ab".into(), 3)).unwrap(), "ABABAB");
        assert_eq!(calls.get(), 2);
        assert_eq!(shout.cached(), 2);
    }

    #[test]
    fn test_separate_tables() {
        let calls = Cell::new(0);
        let inc = |x: u32| { calls.set(calls.get() + 1); x + 1 };
        let first = memoize(&inc);
        let second = memoize(&inc);

        first.call(1).unwrap();
        second.call(1).unwrap();
        first.call(1).unwrap();
        assert_eq!(calls.get(), 2);
    }

    #[test]
    fn test_distinguishes_types() {
        let describe = memoize(|v: Option<u8>| format!("{:?}", v));
        assert_eq!(describe.call(None).unwrap(), "None");
        assert_eq!(describe.call(Some(0)).unwrap(), "Some(0)");
        assert_eq!(describe.cached(), 2);
    }
}
