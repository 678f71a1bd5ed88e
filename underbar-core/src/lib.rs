//! underbar
//!
//! `underbar` provides the function-level half of a small functional utility library:
//! an identity function, function decorators, and the timer queue those decorators
//! schedule deferred work on.
//!
//! What is it?
//! ---
//!
//! A decorator wraps a function and returns a new callable value with different
//! invocation semantics:
//!
//! 1. `once` - The wrapped function runs on the first call only; every later call returns the cached result.
//! 2. `memoize` - Results are cached per distinct argument list.
//! 3. `delay` - The function runs once, on a timer, no sooner than the given wait.
//! 4. `throttle` - The function runs at most once per cooldown window.
//!
//! Collection operations (`each`, `map`, `reduce`, ...) live in the companion
//! `underbar-collection` crate.
//!
//! Example - Memoize
//! ---
//! ```rust
//! use std::cell::Cell;
//! use underbar::memoize;
//!
//! let calls = Cell::new(0);
//! let square = memoize(|x: u64| { calls.set(calls.get() + 1); x * x });
//! assert_eq!(square.call(12).unwrap(), 144);
//! assert_eq!(square.call(12).unwrap(), 144);
//! assert_eq!(calls.get(), 1);
//! ```
//!
//! Example - Delay
//! ---
//! ```rust
//! use std::sync::mpsc;
//! use std::time::Duration;
//! use underbar::delay;
//!
//! let (tx, rx) = mpsc::channel();
//! delay(move |(a, b): (&str, &str)| tx.send(format!("{} {}", a, b)), Duration::from_millis(10), ("a", "b")).unwrap();
//! assert_eq!(rx.recv_timeout(Duration::from_secs(5)).unwrap(), "a b");
//! ```

#![warn(missing_docs)]

#[macro_use]
extern crate log;

/// Error type shared by the underbar crates
pub mod error;

/// Timer queue that runs deferred callbacks
pub mod timer;

/// Function decorators: once, memoize, delay and throttle
pub mod decorators;

pub use decorators::{delay, delay_on, memoize, once, throttle, throttle_on};
pub use decorators::{Memoized, Once, Throttled};
pub use error::{Result, UnderbarError};
pub use timer::{TimerId, TimerQueue, DEFAULT_WORKERS};

/// Returns whatever value is passed in.
///
/// This is the default iterator wherever an operation's iterator is optional.
/// ```rust
///   assert_eq!(underbar::identity(3), 3);
///   assert_eq!(underbar::identity(&"abc"), &"abc");
/// ```
pub fn identity<T>(value: T) -> T {
    value
}
