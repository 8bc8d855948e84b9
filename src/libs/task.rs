//! Task record, its validation rules and pure update operations.
//!
//! All constructors and mutators validate their inputs up front, so a
//! [`Task`] value that exists always satisfies the record invariants:
//!
//! - `title` is trimmed, non-empty and at most [`MAX_TITLE_LEN`] characters
//! - `tags` are trimmed, lower-cased and deduplicated
//! - `due`, when present, is a real calendar date
//!
//! Nothing here touches the file system. Timestamps are passed in by the
//! caller so the functions stay deterministic.
//!
//! ## Usage
//!
//! ```rust
//! use todo::libs::task::{Task, TaskPatch};
//!
//! let task = Task::create("Finish report", Some("high"), Some("2025-10-31"), &["Work".to_string()])?;
//! assert_eq!(task.tags.iter().next().map(String::as_str), Some("work"));
//! # Ok::<(), todo::libs::error::TaskError>(())
//! ```

use crate::libs::error::{Result, TaskError};
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

pub const MAX_TITLE_LEN: usize = 255;

/// Accepted input format for due dates.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    Low,
    #[default]
    Medium,
    High,
}

impl Priority {
    pub fn as_str(&self) -> &'static str {
        match self {
            Priority::Low => "low",
            Priority::Medium => "medium",
            Priority::High => "high",
        }
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Priority {
    type Err = TaskError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "low" => Ok(Priority::Low),
            "medium" => Ok(Priority::Medium),
            "high" => Ok(Priority::High),
            other => Err(TaskError::validation(
                "priority",
                format!("'{}' is not one of low, medium, high", other),
            )),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    /// Store-assigned identifier; `0` until the task is added to a collection.
    pub id: u32,
    pub title: String,
    #[serde(default)]
    pub priority: Priority,
    #[serde(default)]
    pub due: Option<NaiveDate>,
    #[serde(default)]
    pub tags: BTreeSet<String>,
    #[serde(default)]
    pub done: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Partial update for an existing task. `None` leaves a field untouched.
#[derive(Debug, Clone, Default)]
pub struct TaskPatch {
    pub title: Option<String>,
    pub priority: Option<String>,
    /// `Some(None)` clears the due date.
    pub due: Option<Option<String>>,
    /// Replaces the whole tag set; `Some(vec![])` clears it.
    pub tags: Option<Vec<String>>,
    pub done: Option<bool>,
}

impl TaskPatch {
    pub fn is_empty(&self) -> bool {
        self.title.is_none() && self.priority.is_none() && self.due.is_none() && self.tags.is_none() && self.done.is_none()
    }
}

impl Task {
    /// Validates the inputs and builds an unsaved task.
    ///
    /// Priority defaults to medium. The returned task has `id == 0` and both
    /// timestamps set to now; the store assigns the real id and stamps.
    pub fn create(title: &str, priority: Option<&str>, due: Option<&str>, tags: &[String]) -> Result<Task> {
        let now = Utc::now();
        Ok(Task {
            id: 0,
            title: validate_title(title)?,
            priority: priority.map(Priority::from_str).transpose()?.unwrap_or_default(),
            due: due.map(parse_date).transpose()?,
            tags: normalize_tags(tags)?,
            done: false,
            created_at: now,
            updated_at: now,
        })
    }

    /// Applies `patch` and returns the updated task, leaving `self` untouched.
    ///
    /// Every present field is validated before anything changes, so a failed
    /// update never yields a half-applied task. `updated_at` is set to `now`
    /// on success.
    pub fn apply_update(&self, patch: &TaskPatch, now: DateTime<Utc>) -> Result<Task> {
        let mut task = self.clone();

        if let Some(title) = &patch.title {
            task.title = validate_title(title)?;
        }
        if let Some(priority) = &patch.priority {
            task.priority = priority.parse()?;
        }
        if let Some(due) = &patch.due {
            task.due = due.as_deref().map(parse_date).transpose()?;
        }
        if let Some(tags) = &patch.tags {
            task.tags = normalize_tags(tags)?;
        }
        if let Some(done) = patch.done {
            task.done = done;
        }

        task.updated_at = now;
        Ok(task)
    }

    /// Marks the task done. Completing an already completed task returns it
    /// unchanged, timestamp included.
    pub fn mark_complete(&self, now: DateTime<Utc>) -> Task {
        let mut task = self.clone();
        if !task.done {
            task.done = true;
            task.updated_at = now;
        }
        task
    }

    pub fn has_tag(&self, tag: &str) -> bool {
        let tag = tag.trim().to_lowercase();
        self.tags.contains(&tag)
    }

    /// Checks the invariants a persisted record must satisfy.
    pub(crate) fn check_invariants(&self) -> std::result::Result<(), String> {
        if self.id == 0 {
            return Err("task id must be positive".to_string());
        }
        if self.title.trim().is_empty() {
            return Err(format!("task {} has an empty title", self.id));
        }
        if self.title.chars().count() > MAX_TITLE_LEN {
            return Err(format!("task {} has a title longer than {} characters", self.id, MAX_TITLE_LEN));
        }
        if self.tags.iter().any(|t| t.is_empty() || t.trim() != t || t.to_lowercase() != *t) {
            return Err(format!("task {} has non-normalized tags", self.id));
        }
        if self.updated_at < self.created_at {
            return Err(format!("task {} was updated before it was created", self.id));
        }
        Ok(())
    }
}

pub fn validate_title(title: &str) -> Result<String> {
    let title = title.trim();
    if title.is_empty() {
        return Err(TaskError::validation("title", "must not be empty"));
    }
    if title.chars().count() > MAX_TITLE_LEN {
        return Err(TaskError::validation(
            "title",
            format!("must be at most {} characters", MAX_TITLE_LEN),
        ));
    }
    Ok(title.to_string())
}

/// Parses a `YYYY-MM-DD` date.
pub fn parse_date(input: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(input.trim(), DATE_FORMAT)
        .map_err(|_| TaskError::validation("due", format!("'{}' is not a valid YYYY-MM-DD date", input.trim())))
}

/// Trims, lower-cases and deduplicates tags. An empty tag is an error.
pub fn normalize_tags(tags: &[String]) -> Result<BTreeSet<String>> {
    tags.iter()
        .map(|tag| {
            let tag = tag.trim();
            if tag.is_empty() {
                Err(TaskError::validation("tags", "tags must not be empty"))
            } else {
                Ok(tag.to_lowercase())
            }
        })
        .collect()
}
