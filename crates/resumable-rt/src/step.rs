// SPDX-License-Identifier: (MIT OR Apache-2.0)
//! Explicit step functions.
//!
//! For bodies written as a hand-maintained state machine instead of an
//! `async` block: each call advances one step and says whether it
//! suspended or finished.

use std::future::Future;
use std::pin::Pin;
use std::task::{Context, Poll};

/// Result of one call to a step function.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Step<T = ()> {
    /// Suspension point; call again to continue.
    Yield,
    /// Finished with a value. The function is never called again.
    Done(T),
}

/// Adapts `FnMut() -> Step<T>` into a task body.
pub struct StepFn<F> {
    /// Dropped once the function reports `Done`, releasing its captures.
    f: Option<F>,
}

impl<F> StepFn<F> {
    pub fn new(f: F) -> Self {
        Self { f: Some(f) }
    }
}

// The function is only ever called through `&mut`; it is never pinned.
impl<F> Unpin for StepFn<F> {}

impl<T, F> Future for StepFn<F>
where
    F: FnMut() -> Step<T>,
{
    type Output = T;

    fn poll(self: Pin<&mut Self>, _cx: &mut Context<'_>) -> Poll<T> {
        let this = self.get_mut();
        let f = this
            .f
            .as_mut()
            .expect("StepFn polled after it returned Done");

        match f() {
            Step::Yield => Poll::Pending,
            Step::Done(value) => {
                this.f = None;
                Poll::Ready(value)
            }
        }
    }
}

impl<F> std::fmt::Debug for StepFn<F> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StepFn")
            .field("done", &self.f.is_none())
            .finish()
    }
}
