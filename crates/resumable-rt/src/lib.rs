// SPDX-License-Identifier: (MIT OR Apache-2.0)
//! Resumable tasks driven one step at a time by their caller.
//!
//! Single-threaded and cooperative. A task body runs only inside
//! `resume()`, and only up to its next suspension point; there is no
//! scheduler and no background thread.
//!
//! Components:
//! - `task`    — lifecycle state and the boxed body a handle polls
//! - `handle`  — `TaskHandle` (resume, output, teardown)
//! - `suspend` — `suspend().await` suspension points
//! - `step`    — explicit step-function bodies
//! - `builder` — names and failure policy
//! - `error`   — `TaskError`

pub mod builder;
pub mod error;
pub mod handle;
pub mod step;
pub mod suspend;
pub mod task;

pub use builder::{FailurePolicy, TaskBuilder};
pub use error::TaskError;
pub use handle::TaskHandle;
pub use step::{Step, StepFn};
pub use suspend::{suspend, Suspend};
pub use task::TaskState;
