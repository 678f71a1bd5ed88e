//! TimerQueue
//! ---
//! The event queue deferred callbacks are enqueued onto.  A single dispatcher thread owns a
//! deadline-ordered priority queue; whenever the earliest timer comes due its callback is
//! handed to a worker pool, so a slow callback never holds up the timers behind it.
//!
//! The dispatcher is started lazily, on the first `schedule`.  Dropping the last handle to
//! a queue closes it for new work, but timers already scheduled still fire before the
//! dispatcher exits.

use std::cmp::Reverse;
use std::collections::HashMap;
use std::fmt;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::mpsc::{self, Receiver, RecvTimeoutError, Sender};
use std::sync::{Arc, Mutex, OnceLock};
use std::thread;
use std::time::{Duration, Instant};

use jobpool::JobPool;
use priority_queue::PriorityQueue;
use uuid::Uuid;

use crate::error::{Result, UnderbarError};

/// Worker count used by the global queue
pub const DEFAULT_WORKERS: usize = 2;

type Job = Box<dyn FnOnce() + Send>;

/// Unique value identifying one scheduled timer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TimerId(Uuid);

impl fmt::Display for TimerId {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "Timer<{}>", self.0)
    }
}

struct Timer {
    id: TimerId,
    deadline: Instant,
    job: Job,
}

struct Dispatcher {
    workers: usize,
    sender: Mutex<Option<Sender<Timer>>>,
    scheduled: AtomicUsize,
}

/// Handle to a timer queue.  Clones share the same dispatcher.
#[derive(Clone)]
pub struct TimerQueue {
    inner: Arc<Dispatcher>,
}

impl TimerQueue {

    /// Creates a new queue whose callbacks run on `workers` threads.
    pub fn new(workers: usize) -> Self {
        TimerQueue {
            inner: Arc::new(Dispatcher {
                workers: workers.max(1),
                sender: Mutex::new(None),
                scheduled: AtomicUsize::new(0),
            }),
        }
    }

    /// Process-wide queue used by `delay` and `throttle`.
    pub fn global() -> &'static TimerQueue {
        static GLOBAL: OnceLock<TimerQueue> = OnceLock::new();
        GLOBAL.get_or_init(|| TimerQueue::new(DEFAULT_WORKERS))
    }

    /// Number of worker threads callbacks run on
    pub fn workers(&self) -> usize {
        self.inner.workers
    }

    /// Number of timers accepted so far, fired or not
    pub fn scheduled(&self) -> usize {
        self.inner.scheduled.load(Ordering::SeqCst)
    }

    /// Schedules `job` to run once, no sooner than `wait` from now.
    /// ```rust
    ///   use std::sync::mpsc;
    ///   use std::time::Duration;
    ///   use underbar::TimerQueue;
    ///
    ///   let timers = TimerQueue::new(1);
    ///   let (tx, rx) = mpsc::channel();
    ///   timers.schedule(Duration::from_millis(5), move || tx.send("fired").unwrap()).unwrap();
    ///   assert_eq!(rx.recv_timeout(Duration::from_secs(5)), Ok("fired"));
    /// ```
    pub fn schedule<F: FnOnce() + Send + 'static>(&self, wait: Duration, job: F) -> Result<TimerId> {
        let id = TimerId(Uuid::new_v4());
        let timer = Timer {
            id: id,
            deadline: Instant::now() + wait,
            job: Box::new(job),
        };

        let tx = {
            let mut sender = self.inner.sender.lock()
                .map_err(|_| UnderbarError::Poisoned)?;
            match *sender {
                Some(ref tx) => tx.clone(),
                None => {
                    let tx = start(self.inner.workers)?;
                    *sender = Some(tx.clone());
                    tx
                }
            }
        };

        tx.send(timer).map_err(|_| UnderbarError::TimerStopped)?;
        self.inner.scheduled.fetch_add(1, Ordering::SeqCst);
        trace!("Scheduled {} in {:?}", id, wait);
        Ok(id)
    }
}

fn start(workers: usize) -> Result<Sender<Timer>> {
    let (tx, rx) = mpsc::channel();
    thread::Builder::new()
        .name("underbar-timer".into())
        .spawn(move || dispatch(rx, workers))
        .map_err(UnderbarError::Spawn)?;
    debug!("Started timer queue with {} workers", workers);
    Ok(tx)
}

fn dispatch(rx: Receiver<Timer>, workers: usize) {
    let mut queue: PriorityQueue<TimerId, Reverse<Instant>> = PriorityQueue::new();
    let mut jobs: HashMap<TimerId, Job> = HashMap::new();
    let mut pool = JobPool::new(workers);
    let mut open = true;

    loop {
        // Hand everything that is due to the pool
        let now = Instant::now();
        loop {
            let due = match queue.peek() {
                Some((_, deadline)) => deadline.0 <= now,
                None => false
            };
            if !due {
                break;
            }
            if let Some((id, _)) = queue.pop() {
                if let Some(job) = jobs.remove(&id) {
                    trace!("Firing {}", id);
                    pool.queue(move || job());
                }
            }
        }

        let next = queue.peek().map(|(_, deadline)| deadline.0);

        // Closed: sleep out the remaining timers, then exit
        if !open {
            match next {
                Some(deadline) => {
                    thread::sleep(deadline.saturating_duration_since(Instant::now()));
                    continue;
                },
                None => break
            }
        }

        let received = match next {
            Some(deadline) => {
                match rx.recv_timeout(deadline.saturating_duration_since(Instant::now())) {
                    Ok(timer) => Some(timer),
                    Err(RecvTimeoutError::Timeout) => None,
                    Err(RecvTimeoutError::Disconnected) => {
                        trace!("Timer queue closed with {} timers pending", queue.len());
                        open = false;
                        None
                    }
                }
            },
            None => {
                match rx.recv() {
                    Ok(timer) => Some(timer),
                    Err(_) => {
                        open = false;
                        None
                    }
                }
            }
        };

        if let Some(timer) = received {
            queue.push(timer.id, Reverse(timer.deadline));
            jobs.insert(timer.id, timer.job);
        }
    }

    pool.shutdown();
    debug!("Timer queue stopped");
}
