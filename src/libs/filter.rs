//! Read-only filtering over a task sequence.
//!
//! Criteria fields are independent and optional; every supplied field must
//! match (logical AND). Filtering keeps the input order.

use super::task::{Priority, Task};
use chrono::NaiveDate;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Criteria {
    /// Case-insensitive exact tag match.
    pub tag: Option<String>,
    pub priority: Option<Priority>,
    /// Inclusive upper bound on the due date.
    pub due_before: Option<NaiveDate>,
    /// Inclusive lower bound on the due date.
    pub due_after: Option<NaiveDate>,
    pub done: Option<bool>,
    /// Case-insensitive substring of the title.
    pub text: Option<String>,
}

impl Criteria {
    pub fn matches(&self, task: &Task) -> bool {
        if let Some(tag) = &self.tag {
            if !task.has_tag(tag) {
                return false;
            }
        }
        if let Some(priority) = self.priority {
            if task.priority != priority {
                return false;
            }
        }
        if self.due_before.is_some() || self.due_after.is_some() {
            let Some(due) = task.due else {
                return false;
            };
            if self.due_before.is_some_and(|bound| due > bound) {
                return false;
            }
            if self.due_after.is_some_and(|bound| due < bound) {
                return false;
            }
        }
        if let Some(done) = self.done {
            if task.done != done {
                return false;
            }
        }
        if let Some(text) = &self.text {
            if !task.title.to_lowercase().contains(&text.to_lowercase()) {
                return false;
            }
        }
        true
    }
}

/// Returns the tasks that satisfy `criteria`, in input order.
pub fn filter<'a>(tasks: &'a [Task], criteria: &Criteria) -> Vec<&'a Task> {
    tasks.iter().filter(|task| criteria.matches(task)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::libs::task::parse_date;

    fn task(id: u32, priority: &str, due: Option<&str>, tags: &[&str], done: bool) -> Task {
        let tags: Vec<String> = tags.iter().map(|t| t.to_string()).collect();
        let mut task = Task::create(&format!("Task {}", id), Some(priority), due, &tags).unwrap();
        task.id = id;
        task.done = done;
        task
    }

    fn sample() -> Vec<Task> {
        vec![
            task(1, "high", Some("2025-01-10"), &["work"], false),
            task(2, "low", None, &["home"], false),
            task(3, "high", Some("2025-03-01"), &["Work", "urgent"], true),
            task(4, "medium", Some("2025-02-01"), &[], false),
        ]
    }

    fn ids(tasks: &[&Task]) -> Vec<u32> {
        tasks.iter().map(|t| t.id).collect()
    }

    #[test]
    fn empty_criteria_returns_everything_in_order() {
        let tasks = sample();
        assert_eq!(ids(&filter(&tasks, &Criteria::default())), vec![1, 2, 3, 4]);
    }

    #[test]
    fn criteria_are_combined_with_and() {
        let tasks = sample();
        let criteria = Criteria {
            tag: Some("WORK".to_string()),
            priority: Some(Priority::High),
            done: Some(false),
            ..Criteria::default()
        };
        assert_eq!(ids(&filter(&tasks, &criteria)), vec![1]);
    }

    #[test]
    fn due_bounds_are_inclusive_and_skip_undated() {
        let tasks = sample();
        let criteria = Criteria {
            due_after: Some(parse_date("2025-01-10").unwrap()),
            due_before: Some(parse_date("2025-02-01").unwrap()),
            ..Criteria::default()
        };
        assert_eq!(ids(&filter(&tasks, &criteria)), vec![1, 4]);
    }

    #[test]
    fn contradictory_bounds_return_nothing() {
        let tasks = sample();
        let criteria = Criteria {
            due_after: Some(parse_date("2025-03-01").unwrap()),
            due_before: Some(parse_date("2025-01-01").unwrap()),
            ..Criteria::default()
        };
        assert!(filter(&tasks, &criteria).is_empty());
    }

    #[test]
    fn text_matches_title_substring() {
        let tasks = sample();
        let criteria = Criteria {
            text: Some("task 2".to_string()),
            ..Criteria::default()
        };
        assert_eq!(ids(&filter(&tasks, &criteria)), vec![2]);
    }
}
