// SPDX-License-Identifier: (MIT OR Apache-2.0)
//! Computation core: lifecycle state plus the boxed future a handle drives.
//!
//! Stackless: the body is a state machine compiled from an `async` block
//! (or a step function). One `poll` per resume. `Pending` is a suspension
//! point, `Ready` is completion.

use std::any::Any;
use std::future::Future;
use std::panic::{self, AssertUnwindSafe};
use std::pin::Pin;
use std::sync::Arc;
use std::task::{Context, Poll, Wake, Waker};

/// Task lifecycle states.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TaskState {
    /// Parked at its entry point. No body code has run.
    NotStarted,
    /// Parked at a suspension point inside the body.
    Suspended,
    /// Body returned.
    Completed,
    /// Body panicked and the failure was captured.
    Failed,
    /// The handle owns no computation.
    Empty,
}

impl TaskState {
    /// True for states `resume()` can no longer leave.
    pub fn is_terminal(self) -> bool {
        matches!(self, Self::Completed | Self::Failed | Self::Empty)
    }
}

/// Type-erased body. Not `Send`: a task never leaves the thread that
/// drives it, so bodies are free to hold `Rc` and `Cell` state.
pub(crate) type BoxFuture<T> = Pin<Box<dyn Future<Output = T>>>;

/// What one poll of the body produced.
#[derive(Debug)]
pub(crate) enum StepOutcome<T> {
    Suspended,
    Completed(T),
    Panicked(String),
}

/// The computation owned by a handle.
pub(crate) struct RawTask<T> {
    state: TaskState,
    /// `None` once the body completed or failed.
    future: Option<BoxFuture<T>>,
    waker: Waker,
}

impl<T> std::fmt::Debug for RawTask<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RawTask")
            .field("state", &self.state)
            .field("live", &self.future.is_some())
            .finish()
    }
}

impl<T> RawTask<T> {
    pub fn new(future: BoxFuture<T>) -> Self {
        Self {
            state: TaskState::NotStarted,
            future: Some(future),
            waker: Waker::from(Arc::new(NoopWaker)),
        }
    }

    pub fn state(&self) -> TaskState {
        self.state
    }

    /// Poll the body once. Returns `None` if there is nothing left to poll.
    ///
    /// Panics inside the body are caught here and turned into
    /// `StepOutcome::Panicked`; what happens next is the handle's call.
    /// The body (and everything it captured) is dropped as soon as it
    /// completes or fails.
    pub fn poll_step(&mut self) -> Option<StepOutcome<T>> {
        let fut = self.future.as_mut()?;
        let mut cx = Context::from_waker(&self.waker);

        match panic::catch_unwind(AssertUnwindSafe(|| fut.as_mut().poll(&mut cx))) {
            Ok(Poll::Pending) => {
                self.state = TaskState::Suspended;
                Some(StepOutcome::Suspended)
            }
            Ok(Poll::Ready(value)) => {
                self.future = None;
                self.state = TaskState::Completed;
                Some(StepOutcome::Completed(value))
            }
            Err(payload) => {
                self.future = None;
                self.state = TaskState::Failed;
                Some(StepOutcome::Panicked(panic_message(payload.as_ref())))
            }
        }
    }
}

/// The caller drives every step explicitly, so wake-ups carry no
/// information and are dropped.
struct NoopWaker;

impl Wake for NoopWaker {
    fn wake(self: Arc<Self>) {}

    fn wake_by_ref(self: &Arc<Self>) {}
}

/// Best-effort text for a panic payload.
pub(crate) fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        s.to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "unknown panic".to_string()
    }
}
