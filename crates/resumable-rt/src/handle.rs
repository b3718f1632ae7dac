// SPDX-License-Identifier: (MIT OR Apache-2.0)
//! Task handle.
//!
//! Exclusive, move-only owner of one computation. The caller drives it
//! with `resume()` until it returns `false`. Dropping the handle drops the
//! computation wherever it is parked.

use std::future::Future;

use tracing::{debug, error, trace, warn};

use crate::builder::{FailurePolicy, TaskBuilder};
use crate::error::TaskError;
use crate::step::Step;
use crate::task::{RawTask, StepOutcome, TaskState};

/// Handle to a resumable computation producing `T`.
///
/// ```
/// use resumable_rt::{suspend, TaskHandle};
///
/// let mut task = TaskHandle::new(async {
///     suspend().await;
///     suspend().await;
///     "done"
/// });
///
/// let mut yields = 0;
/// while task.resume() {
///     yields += 1;
/// }
/// assert_eq!(yields, 2);
/// assert_eq!(task.into_output(), Ok("done"));
/// ```
pub struct TaskHandle<T = ()> {
    /// `None` for empty handles.
    raw: Option<RawTask<T>>,
    /// Completion value, held until taken.
    output: Option<T>,
    /// Panic message of a captured failure.
    failure: Option<String>,
    /// `resume()` calls that returned `true`.
    steps: usize,
    name: Option<String>,
    policy: FailurePolicy,
}

impl<T: 'static> TaskHandle<T> {
    /// Wrap an `async` body with default configuration.
    ///
    /// The body is parked at its entry point; nothing in it runs until
    /// the first `resume()`.
    pub fn new<F>(future: F) -> Self
    where
        F: Future<Output = T> + 'static,
    {
        TaskBuilder::new().build(future)
    }

    /// Wrap an explicit step function with default configuration.
    pub fn from_fn<F>(step: F) -> Self
    where
        F: FnMut() -> Step<T> + 'static,
    {
        TaskBuilder::new().build_fn(step)
    }
}

impl<T> TaskHandle<T> {
    pub(crate) fn from_raw(raw: RawTask<T>, name: Option<String>, policy: FailurePolicy) -> Self {
        let handle = Self {
            raw: Some(raw),
            output: None,
            failure: None,
            steps: 0,
            name,
            policy,
        };
        debug!(task = handle.label(), ?policy, "initial suspension point");
        handle
    }

    /// A handle that owns no computation.
    pub fn empty() -> Self {
        Self {
            raw: None,
            output: None,
            failure: None,
            steps: 0,
            name: None,
            policy: FailurePolicy::default(),
        }
    }

    /// Run the computation up to its next suspension point.
    ///
    /// Returns `true` if it suspended (more work remains) and `false` if it
    /// finished during this call, had already finished, or the handle is
    /// empty. A panic in the body aborts the process under
    /// `FailurePolicy::Abort`; under `Capture` it makes this return `false`.
    pub fn resume(&mut self) -> bool {
        self.try_resume().unwrap_or(false)
    }

    /// Like `resume()`, but reports a captured failure as
    /// `Err(TaskError::Panicked)` on the step where it happened.
    pub fn try_resume(&mut self) -> Result<bool, TaskError> {
        let outcome = match self.raw.as_mut() {
            Some(raw) => raw.poll_step(),
            None => return Ok(false),
        };

        match outcome {
            None => Ok(false),
            Some(StepOutcome::Suspended) => {
                self.steps += 1;
                trace!(task = self.label(), step = self.steps, "suspended");
                Ok(true)
            }
            Some(StepOutcome::Completed(value)) => {
                self.output = Some(value);
                debug!(task = self.label(), steps = self.steps, "final suspension point");
                Ok(false)
            }
            Some(StepOutcome::Panicked(msg)) => match self.policy {
                FailurePolicy::Abort => {
                    error!(task = self.label(), step = self.steps + 1, "task panicked: {}; aborting", msg);
                    std::process::abort();
                }
                FailurePolicy::Capture => {
                    warn!(task = self.label(), step = self.steps + 1, "task panicked: {}", msg);
                    self.failure = Some(msg.clone());
                    Err(TaskError::Panicked(msg))
                }
            },
        }
    }

    pub fn state(&self) -> TaskState {
        self.raw.as_ref().map_or(TaskState::Empty, RawTask::state)
    }

    /// True once `resume()` can only return `false`.
    pub fn is_done(&self) -> bool {
        self.state().is_terminal()
    }

    pub fn is_empty(&self) -> bool {
        self.raw.is_none()
    }

    /// Number of suspension points passed so far.
    pub fn steps(&self) -> usize {
        self.steps
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn policy(&self) -> FailurePolicy {
        self.policy
    }

    /// Panic message of a captured failure.
    pub fn failure(&self) -> Option<&str> {
        self.failure.as_deref()
    }

    /// The completion value, if the body finished and it was not taken yet.
    pub fn output(&self) -> Option<&T> {
        self.output.as_ref()
    }

    /// Move the completion value out of the handle.
    pub fn take_output(&mut self) -> Result<T, TaskError> {
        match self.state() {
            TaskState::Empty => Err(TaskError::Empty),
            TaskState::NotStarted | TaskState::Suspended => Err(TaskError::NotFinished),
            TaskState::Failed => Err(TaskError::Failed(self.failure.clone().unwrap_or_default())),
            TaskState::Completed => self.output.take().ok_or(TaskError::OutputTaken),
        }
    }

    pub fn into_output(mut self) -> Result<T, TaskError> {
        self.take_output()
    }

    /// Drive the computation until it finishes and return its value.
    pub fn run_to_completion(mut self) -> Result<T, TaskError> {
        while self.try_resume()? {}
        self.take_output()
    }

    /// Move the computation into a new handle, leaving this one empty.
    pub fn take(&mut self) -> Self {
        std::mem::take(self)
    }

    fn label(&self) -> &str {
        self.name.as_deref().unwrap_or("<unnamed>")
    }
}

impl<T> Default for TaskHandle<T> {
    fn default() -> Self {
        Self::empty()
    }
}

impl<T> std::fmt::Debug for TaskHandle<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TaskHandle")
            .field("name", &self.name)
            .field("state", &self.state())
            .field("steps", &self.steps)
            .field("policy", &self.policy)
            .finish()
    }
}

impl<T> Drop for TaskHandle<T> {
    fn drop(&mut self) {
        let state = self.state();
        if !state.is_terminal() {
            trace!(task = self.label(), ?state, steps = self.steps, "destroying unfinished task");
        }
        // `raw` drops after this, taking the body and its captures with it.
    }
}
