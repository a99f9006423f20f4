//! Async operation runtime.
//!
//! Every endpoint call becomes a named operation that emits exactly one
//! `Pending` event followed by exactly one terminal event — `Fulfilled`
//! with the result or `Rejected` with a user-facing message. Reducers
//! pattern-match the variant; nothing observes futures directly.
//!
//! Concurrent dispatches of the same operation are allowed; each runs its
//! own lifecycle and the latest terminal event wins for single-flag state.
//! There is no cancellation: an in-flight operation always completes its
//! lifecycle.

#[cfg(test)]
#[path = "op_test.rs"]
mod op_test;

use crate::net::error::ApiError;

/// Lifecycle of one dispatched operation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Lifecycle<T> {
    Pending,
    Fulfilled(T),
    Rejected(String),
}

impl<T> Lifecycle<T> {
    /// Map the fulfilled payload, keeping the other variants.
    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Lifecycle<U> {
        match self {
            Lifecycle::Pending => Lifecycle::Pending,
            Lifecycle::Fulfilled(v) => Lifecycle::Fulfilled(f(v)),
            Lifecycle::Rejected(msg) => Lifecycle::Rejected(msg),
        }
    }
}

/// A slice that owns its mutations: state advances only by applying events.
pub trait Reduce {
    type Event;

    fn apply(&mut self, event: Self::Event);
}

/// Map an operation outcome to its terminal lifecycle event.
///
/// On rejection the message is the server's `message` when there is one,
/// otherwise the per-operation `fallback` phrase.
pub fn terminal<T>(outcome: Result<T, ApiError>, fallback: &str) -> Lifecycle<T> {
    match outcome {
        Ok(value) => Lifecycle::Fulfilled(value),
        Err(err) => Lifecycle::Rejected(err.user_message(fallback)),
    }
}

/// Dispatch an operation against a slice.
///
/// Emits `Pending` synchronously, runs the future, then emits the terminal
/// event. `wrap` gives the lifecycle its stable operation identity within
/// the slice's event type.
#[cfg(feature = "csr")]
pub fn dispatch<S, T, F, W>(
    slice: leptos::prelude::RwSignal<S>,
    fallback: &'static str,
    fut: F,
    wrap: W,
) where
    S: Reduce + 'static,
    T: 'static,
    F: Future<Output = Result<T, ApiError>> + 'static,
    W: Fn(Lifecycle<T>) -> S::Event + 'static,
{
    dispatch_with(slice, fallback, fut, wrap, |_| ());
}

/// [`dispatch`], additionally reporting the raw outcome to `on_done` after
/// the terminal event has been applied, so the caller can choose between
/// navigation and a toast without re-deriving it from state.
#[cfg(feature = "csr")]
pub fn dispatch_with<S, T, F, W, D>(
    slice: leptos::prelude::RwSignal<S>,
    fallback: &'static str,
    fut: F,
    wrap: W,
    on_done: D,
) where
    S: Reduce + 'static,
    T: 'static,
    F: Future<Output = Result<T, ApiError>> + 'static,
    W: Fn(Lifecycle<T>) -> S::Event + 'static,
    D: FnOnce(Result<(), String>) + 'static,
{
    use leptos::prelude::Update;

    slice.update(|s| s.apply(wrap(Lifecycle::Pending)));
    leptos::task::spawn_local(async move {
        let outcome = fut.await;
        let done = match &outcome {
            Ok(_) => Ok(()),
            Err(err) => Err(err.user_message(fallback)),
        };
        slice.update(|s| s.apply(wrap(terminal(outcome, fallback))));
        on_done(done);
    });
}
