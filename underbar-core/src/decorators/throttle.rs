use std::sync::{Arc, Mutex};
use std::time::Duration;

use crate::error::{Result, UnderbarError};
use crate::timer::TimerQueue;

#[derive(Debug)]
struct Gate {
    open: bool,

    // Bumped on every trigger; a reopen timer armed under an older epoch does nothing
    epoch: u64,

    // A reopen timer is pending for the current epoch
    armed: bool,
}

/// A rate-limited function.  See `throttle`.
pub struct Throttled<F, A> {
    func: F,
    args: A,
    wait: Duration,
    gate: Arc<Mutex<Gate>>,
    timers: TimerQueue,
}

/// Wraps `func` so that it triggers at most once per cooldown window, using the global
/// timer queue.
///
/// `args` are captured here, once; every triggered call passes those same arguments.
/// The first `call` triggers and closes the gate.  While the gate is closed each `call`
/// returns `None`; the first of them arms a timer that reopens the gate `wait` later,
/// unless the function has triggered again in the meantime.  Later suppressed calls
/// find that timer pending and arm nothing.
/// ```rust
///   use std::time::Duration;
///   use underbar::throttle;
///
///   let ping = throttle(|host: &String| format!("ping {}", host), Duration::from_secs(60), "db".to_owned());
///   assert_eq!(ping.call().unwrap(), Some("ping db".to_owned()));
///   assert_eq!(ping.call().unwrap(), None);
/// ```
pub fn throttle<F, A, R>(func: F, wait: Duration, args: A) -> Throttled<F, A>
        where F: Fn(&A) -> R {
    throttle_on(TimerQueue::global(), func, wait, args)
}

/// Like `throttle`, but arms its reopen timers on the given queue.
pub fn throttle_on<F, A, R>(timers: &TimerQueue, func: F, wait: Duration, args: A) -> Throttled<F, A>
        where F: Fn(&A) -> R {
    Throttled {
        func: func,
        args: args,
        wait: wait,
        gate: Arc::new(Mutex::new(Gate { open: true, epoch: 0, armed: false })),
        timers: timers.clone(),
    }
}

impl <F, A> Throttled<F, A> {

    /// Triggers the wrapped function if the gate is open, returning its result.  Returns
    /// `None` when suppressed.
    pub fn call<R>(&self) -> Result<Option<R>>
            where F: Fn(&A) -> R {
        let suppressed = {
            let mut gate = self.gate.lock()
                .map_err(|_| UnderbarError::Poisoned)?;
            if gate.open {
                gate.open = false;
                gate.epoch += 1;
                gate.armed = false;
                None
            } else if gate.armed {
                Some(None)
            } else {
                gate.armed = true;
                Some(Some(gate.epoch))
            }
        };

        match suppressed {
            None => {
                trace!("throttle: triggered");
                Ok(Some((self.func)(&self.args)))
            },
            Some(Some(epoch)) => {
                self.arm(epoch)?;
                Ok(None)
            },
            Some(None) => Ok(None)
        }
    }

    /// Whether the next `call` would trigger
    pub fn is_open(&self) -> bool {
        self.gate.lock().map(|gate| gate.open).unwrap_or(false)
    }

    fn arm(&self, epoch: u64) -> Result<()> {
        let gate = Arc::clone(&self.gate);
        let scheduled = self.timers.schedule(self.wait, move || {
            if let Ok(mut gate) = gate.lock() {
                if gate.epoch == epoch && !gate.open {
                    trace!("throttle: gate reopened");
                    gate.open = true;
                    gate.armed = false;
                }
            }
        });

        match scheduled {
            Ok(id) => {
                trace!("throttle: suppressed, reopen armed as {}", id);
                Ok(())
            },
            Err(e) => {
                // Let the next suppressed call try again
                if let Ok(mut gate) = self.gate.lock() {
                    if gate.epoch == epoch {
                        gate.armed = false;
                    }
                }
                Err(e)
            }
        }
    }
}

#[cfg(test)]
mod test_lib {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::thread::sleep;

    #[test]
    fn test_suppresses_until_reopened() {
        let timers = TimerQueue::new(1);
        let calls = AtomicUsize::new(0);
        let hit = throttle_on(&timers, |n: &usize| {
            calls.fetch_add(1, Ordering::SeqCst);
            *n * 10
        }, Duration::from_millis(50), 4);

        assert_eq!(hit.call().unwrap(), Some(40));
        assert_eq!(hit.call().unwrap(), None);
        assert_eq!(hit.call().unwrap(), None);
        assert_eq!(calls.load(Ordering::SeqCst), 1);

        sleep(Duration::from_millis(250));
        assert!(hit.is_open());
        assert_eq!(hit.call().unwrap(), Some(40));
        assert_eq!(calls.load(Ordering::SeqCst), 2);
    }

    #[test]
    fn test_gate_stays_closed_without_suppressed_calls() {
        let timers = TimerQueue::new(1);
        let hit = throttle_on(&timers, |_: &()| 1, Duration::from_millis(10), ());
        assert_eq!(hit.call().unwrap(), Some(1));
        sleep(Duration::from_millis(60));
        assert!(!hit.is_open());
        assert_eq!(hit.call().unwrap(), None);
    }

    #[test]
    fn test_one_reopen_timer_per_window() {
        let timers = TimerQueue::new(1);
        let hit = throttle_on(&timers, |_: &()| (), Duration::from_millis(50), ());

        assert!(hit.call().unwrap().is_some());
        for _ in 0..100 {
            assert!(hit.call().unwrap().is_none());
        }
        assert_eq!(timers.scheduled(), 1);

        sleep(Duration::from_millis(250));
        assert!(hit.is_open());
        assert!(hit.call().unwrap().is_some());
        for _ in 0..100 {
            assert!(hit.call().unwrap().is_none());
        }
        assert_eq!(timers.scheduled(), 2);
    }

    #[test]
    fn test_new_window_after_reopen() {
        let timers = TimerQueue::new(1);
        let hit = throttle_on(&timers, |_: &()| (), Duration::from_millis(200), ());

        // t=0: trigger, then a suppressed call arms a reopen at t=200
        assert!(hit.call().unwrap().is_some());
        assert!(hit.call().unwrap().is_none());

        // t=100: the reopen is already pending, so nothing new is armed
        sleep(Duration::from_millis(100));
        assert!(hit.call().unwrap().is_none());
        assert_eq!(timers.scheduled(), 1);

        // t=250: reopened by the first timer; trigger again
        sleep(Duration::from_millis(150));
        assert!(hit.is_open());
        assert!(hit.call().unwrap().is_some());

        // t=260: a suppressed call in the new epoch arms a reopen at t=460
        sleep(Duration::from_millis(10));
        assert!(hit.call().unwrap().is_none());
        assert_eq!(timers.scheduled(), 2);

        // t=360: still inside the new window
        sleep(Duration::from_millis(100));
        assert!(!hit.is_open());
    }
}
