//! In-memory task collection and its mutating operations.
//!
//! A [`TaskCollection`] is loaded wholesale by [`Store`](super::store::Store),
//! changed in memory by a single command and written back wholesale. It keeps
//! tasks sorted by ascending id and remembers the highest id it ever handed
//! out, so ids are never reused even after the newest task is deleted.

use crate::libs::error::{Result, TaskError};
use crate::libs::task::{Task, TaskPatch};
use chrono::{DateTime, Duration, Utc};
use serde::Serialize;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct TaskCollection {
    /// Highest id ever assigned by this collection.
    last_id: u32,
    tasks: Vec<Task>,
}

impl TaskCollection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a collection from already persisted tasks, checking the record
    /// invariants and restoring ascending-id order.
    pub(crate) fn from_parts(last_id: u32, mut tasks: Vec<Task>) -> std::result::Result<Self, String> {
        for task in &tasks {
            task.check_invariants()?;
        }
        tasks.sort_by_key(|t| t.id);
        if let Some(pair) = tasks.windows(2).find(|w| w[0].id == w[1].id) {
            return Err(format!("duplicate task id {}", pair[0].id));
        }
        let max_id = tasks.last().map_or(0, |t| t.id);
        Ok(Self {
            last_id: last_id.max(max_id),
            tasks,
        })
    }

    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    pub fn last_id(&self) -> u32 {
        self.last_id
    }

    /// One greater than the largest id present or previously assigned.
    pub fn next_id(&self) -> Result<u32> {
        let max_present = self.tasks.last().map_or(0, |t| t.id);
        let highest = self.last_id.max(max_present);
        highest.checked_add(1).ok_or(TaskError::IdsExhausted(highest))
    }

    pub fn get(&self, id: u32) -> Result<&Task> {
        self.position(id).map(|idx| &self.tasks[idx])
    }

    /// Assigns the next id, stamps both timestamps and appends the task.
    pub fn add(&mut self, mut task: Task) -> Result<&Task> {
        let now = Utc::now();
        task.id = self.next_id()?;
        task.created_at = now;
        task.updated_at = now;
        self.last_id = task.id;

        tracing::debug!(id = task.id, title = %task.title, "task added");
        self.tasks.push(task);
        Ok(&self.tasks[self.tasks.len() - 1])
    }

    /// Validates and applies `patch` to the task with `id`. On any error the
    /// collection is left as it was.
    pub fn update(&mut self, id: u32, patch: &TaskPatch) -> Result<&Task> {
        let idx = self.position(id)?;
        let now = advance(self.tasks[idx].updated_at);
        self.tasks[idx] = self.tasks[idx].apply_update(patch, now)?;

        tracing::debug!(id, "task updated");
        Ok(&self.tasks[idx])
    }

    pub fn complete(&mut self, id: u32) -> Result<&Task> {
        let idx = self.position(id)?;
        let now = advance(self.tasks[idx].updated_at);
        self.tasks[idx] = self.tasks[idx].mark_complete(now);

        tracing::debug!(id, "task completed");
        Ok(&self.tasks[idx])
    }

    pub fn remove(&mut self, id: u32) -> Result<Task> {
        let idx = self.position(id)?;
        tracing::debug!(id, "task removed");
        Ok(self.tasks.remove(idx))
    }

    fn position(&self, id: u32) -> Result<usize> {
        self.tasks.binary_search_by_key(&id, |t| t.id).map_err(|_| TaskError::NotFound(id))
    }
}

// Clock reads can repeat or step backwards; an edit must still move
// `updated_at` forward.
fn advance(previous: DateTime<Utc>) -> DateTime<Utc> {
    let now = Utc::now();
    if now > previous {
        now
    } else {
        previous + Duration::microseconds(1)
    }
}
