use std::cell::OnceCell;
use std::marker::PhantomData;

/// A function that runs at most one time.  See `once`.
pub struct Once<F, A, R> {
    func: F,
    result: OnceCell<R>,
    args: PhantomData<fn(A)>,
}

/// Wraps `func` so that it is only ever invoked once.  The first call runs `func` with
/// its arguments; every later call, whatever its arguments, returns the first result.
/// ```rust
///   use underbar::once;
///
///   let init = once(|name: &str| format!("hello {}", name));
///   assert_eq!(init.call("first"), "hello first");
///   assert_eq!(init.call("second"), "hello first");
/// ```
pub fn once<F, A, R>(func: F) -> Once<F, A, R>
        where F: Fn(A) -> R {
    Once {
        func: func,
        result: OnceCell::new(),
        args: PhantomData,
    }
}

impl <F: Fn(A) -> R, A, R: Clone> Once<F, A, R> {

    /// Invokes the wrapped function if it has not run yet, returning the cached result.
    pub fn call(&self, args: A) -> R {
        self.result.get_or_init(|| {
            trace!("once: invoking wrapped function");
            (self.func)(args)
        }).clone()
    }

    /// Whether the wrapped function has already run
    pub fn called(&self) -> bool {
        self.result.get().is_some()
    }
}

#[cfg(test)]
mod test_lib {
    use super::*;
    use std::cell::Cell;

    #[test]
    fn test_invokes_once() {
        let calls = Cell::new(0);
        let add = once(|(x, y): (i32, i32)| {
            calls.set(calls.get() + 1);
            x + y
        });

        assert!(!add.called());
        assert_eq!(add.call((1, 2)), 3);
        assert_eq!(add.call((10, 20)), 3);
        assert_eq!(add.call((100, 200)), 3);
        assert_eq!(calls.get(), 1);
        assert!(add.called());
    }

    #[test]
    fn test_independent_wrappers() {
        let double = |x: u8| x * 2;
        let first = once(double);
        let second = once(double);
        assert_eq!(first.call(1), 2);
        assert_eq!(second.call(5), 10);
        assert_eq!(first.call(5), 2);
    }
}
