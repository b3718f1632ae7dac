// SPDX-License-Identifier: (MIT OR Apache-2.0)
//! Task errors.

use thiserror::Error;

/// Errors surfaced by a `TaskHandle`.
///
/// Misuse such as resuming a finished handle is not an error; `resume()`
/// just returns `false`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TaskError {
    /// The body panicked during this step (captured failure policy only).
    #[error("task panicked: {0}")]
    Panicked(String),

    /// The output was requested before the computation finished.
    #[error("task has not finished yet")]
    NotFinished,

    /// The computation failed on an earlier step.
    #[error("task failed earlier: {0}")]
    Failed(String),

    /// The output was already taken out of the handle.
    #[error("task output was already taken")]
    OutputTaken,

    /// The handle owns no computation.
    #[error("handle owns no computation")]
    Empty,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_failure() {
        assert_eq!(
            TaskError::Panicked("boom".to_string()).to_string(),
            "task panicked: boom"
        );
        assert_eq!(TaskError::Empty.to_string(), "handle owns no computation");
    }
}
