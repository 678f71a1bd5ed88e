//! Function decorators.  Each decorator returns a small struct owning the wrapped function
//! along with whatever private state gates its invocation; nothing is shared between two
//! decorated values, even when they wrap the same function.

/// One-shot invocation
pub mod once;

/// Per-argument-list result caching
pub mod memoize;

/// Rate limiting
pub mod throttle;

use std::time::Duration;

use crate::error::Result;
use crate::timer::TimerQueue;

pub use self::memoize::{memoize, Memoized};
pub use self::once::{once, Once};
pub use self::throttle::{throttle, throttle_on, Throttled};

/// Calls `func(args)` once, no sooner than `wait` from now, on the global timer queue.
/// Returns as soon as the call is scheduled; the eventual result is discarded.
/// ```rust
///   use std::sync::mpsc;
///   use std::time::Duration;
///   use underbar::delay;
///
///   let (tx, rx) = mpsc::channel();
///   delay(move |n: u32| tx.send(n * 2), Duration::from_millis(5), 21).unwrap();
///   assert_eq!(rx.recv_timeout(Duration::from_secs(5)), Ok(42));
/// ```
pub fn delay<A, R, F>(func: F, wait: Duration, args: A) -> Result<()>
        where F: 'static + Send + FnOnce(A) -> R,
              A: 'static + Send {
    delay_on(TimerQueue::global(), func, wait, args)
}

/// Like `delay`, but schedules onto the given queue.
pub fn delay_on<A, R, F>(timers: &TimerQueue, func: F, wait: Duration, args: A) -> Result<()>
        where F: 'static + Send + FnOnce(A) -> R,
              A: 'static + Send {
    let id = timers.schedule(wait, move || {
        func(args);
    })?;
    trace!("Delayed call registered as {}", id);
    Ok(())
}
