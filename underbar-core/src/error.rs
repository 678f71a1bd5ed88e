use std::io;

use thiserror::Error;

/// Failures surfaced by decorators, the timer queue and method invocation.
#[derive(Debug, Error)]
pub enum UnderbarError {

    /// A memoize argument list could not be encoded into a cache key
    #[error("unable to encode memoize key: {0}")]
    Serialize(#[from] bincode::Error),

    /// The timer dispatcher thread could not be started
    #[error("unable to start timer thread: {0}")]
    Spawn(#[source] io::Error),

    /// The timer dispatcher is no longer accepting work
    #[error("timer queue has stopped")]
    TimerStopped,

    /// A decorator's shared state was poisoned by a panicking holder
    #[error("decorator state poisoned")]
    Poisoned,

    /// `invoke` named a method the element does not provide
    #[error("no method named `{0}`")]
    NoSuchMethod(String),
}

/// Result alias used throughout underbar
pub type Result<T> = ::std::result::Result<T, UnderbarError>;
