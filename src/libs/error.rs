//! Typed error taxonomy for the task core.
//!
//! Every fallible core operation returns [`Result`]. The variants split into
//! two groups that the command layer treats differently:
//!
//! - **Recoverable**: [`TaskError::Validation`] and [`TaskError::NotFound`]
//!   are reported to the user and nothing is written.
//! - **Fatal for the command**: [`TaskError::CorruptStore`],
//!   [`TaskError::Io`] and [`TaskError::IdsExhausted`] halt the command. A
//!   corrupt file is left untouched on disk for inspection.
//!
//! [`exit_status`] maps any command error to the process exit code.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum TaskError {
    /// Input failed a Task Model rule.
    #[error("invalid {field}: {reason}")]
    Validation { field: &'static str, reason: String },

    #[error("task with id {0} not found")]
    NotFound(u32),

    /// The backing file exists but does not hold a valid task collection.
    #[error("task store {} is corrupt: {reason}", path.display())]
    CorruptStore { path: PathBuf, reason: String },

    /// The id counter has reached `u32::MAX`.
    #[error("no task ids left after {0}")]
    IdsExhausted(u32),

    #[error("i/o error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl TaskError {
    pub fn validation(field: &'static str, reason: impl Into<String>) -> Self {
        TaskError::Validation { field, reason: reason.into() }
    }

    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        TaskError::Io { path: path.into(), source }
    }

    /// Whether the error should abort the current command rather than be
    /// reported as a user mistake.
    pub fn is_fatal(&self) -> bool {
        matches!(
            self,
            TaskError::CorruptStore { .. } | TaskError::Io { .. } | TaskError::IdsExhausted(_)
        )
    }
}

pub type Result<T> = std::result::Result<T, TaskError>;

/// Exit code for a failed command: 2 for fatal store and I/O failures,
/// 1 for everything else.
pub fn exit_status(err: &anyhow::Error) -> u8 {
    let fatal = match err.downcast_ref::<TaskError>() {
        Some(task_err) => task_err.is_fatal(),
        None => err.chain().any(|cause| cause.is::<std::io::Error>()),
    };
    if fatal {
        2
    } else {
        1
    }
}
