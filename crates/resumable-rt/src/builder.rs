// SPDX-License-Identifier: (MIT OR Apache-2.0)
//! Task configuration.
//!
//! Defaults match the plain constructors: unnamed, fatal on failure.

use std::future::Future;

use crate::handle::TaskHandle;
use crate::step::{Step, StepFn};
use crate::task::RawTask;

/// What a handle does when its body panics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FailurePolicy {
    /// Log the failure and abort the process. The panic never unwinds
    /// into the caller of `resume()`.
    #[default]
    Abort,
    /// Tear the body down, mark the handle `Failed`, and report the
    /// panic message through `try_resume()` and `failure()`.
    Capture,
}

/// Builder for configured task handles.
///
/// ```
/// use resumable_rt::{suspend, FailurePolicy, TaskBuilder};
///
/// let mut task = TaskBuilder::new()
///     .name("ticker")
///     .on_failure(FailurePolicy::Capture)
///     .build(async {
///         suspend().await;
///     });
/// assert!(task.resume());
/// assert!(!task.resume());
/// ```
#[derive(Debug, Clone, Default)]
pub struct TaskBuilder {
    name: Option<String>,
    on_failure: FailurePolicy,
}

impl TaskBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Name used in log events.
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn on_failure(mut self, policy: FailurePolicy) -> Self {
        self.on_failure = policy;
        self
    }

    /// Wrap an `async` body. Nothing in it runs until the first `resume()`.
    pub fn build<T, F>(self, future: F) -> TaskHandle<T>
    where
        T: 'static,
        F: Future<Output = T> + 'static,
    {
        TaskHandle::from_raw(RawTask::new(Box::pin(future)), self.name, self.on_failure)
    }

    /// Wrap a step function. It is not called until the first `resume()`.
    pub fn build_fn<T, F>(self, step: F) -> TaskHandle<T>
    where
        T: 'static,
        F: FnMut() -> Step<T> + 'static,
    {
        self.build(StepFn::new(step))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let task = TaskBuilder::new().build(async {});
        assert_eq!(task.name(), None);
        assert_eq!(task.policy(), FailurePolicy::Abort);
    }

    #[test]
    fn configured() {
        let task = TaskBuilder::new()
            .name("worker")
            .on_failure(FailurePolicy::Capture)
            .build_fn(|| Step::Done(5));
        assert_eq!(task.name(), Some("worker"));
        assert_eq!(task.policy(), FailurePolicy::Capture);
        assert_eq!(task.run_to_completion(), Ok(5));
    }
}
