//! `Display` text for every [`Message`].
//!
//! All user-facing wording is kept in this one match so commands only ever
//! name a message, never spell it out.

use super::types::Message;
use std::fmt::{Display, Formatter, Result};

impl Display for Message {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        let text = match self {
            // === TASK MESSAGES ===
            Message::TaskAdded(id, title) => format!("Task {} added: {}", id, title),
            Message::TaskUpdated(id) => format!("Task {} updated", id),
            Message::TaskCompleted(id) => format!("Task {} marked as complete", id),
            Message::TaskAlreadyCompleted(id) => format!("Task {} was already complete", id),
            Message::TaskDeleted(id) => format!("Task {} deleted", id),
            Message::TasksHeader => "📋 To-Do List".to_string(),
            Message::NoTasksFound => "No tasks found".to_string(),
            Message::NothingToUpdate => "Nothing to update: pass at least one field to change".to_string(),
            Message::ConfirmDeleteTask(id, title) => format!("Delete task {} \"{}\"?", id, title),

            // === SEARCH MESSAGES ===
            Message::SearchHeader => "🔍 Filtered Tasks".to_string(),
            Message::NoMatchingTasks => "No matching tasks found".to_string(),

            // === EXPORT MESSAGES ===
            Message::ExportCompleted(count, path) => format!("Exported {} task(s) to {}", count, path.display()),
            Message::NothingToExport => "No tasks available to export".to_string(),

            // === CONFIGURATION MESSAGES ===
            Message::ConfigHeader => "⚙️  Configuration".to_string(),
            Message::ConfigSaved(path) => format!("Configuration saved to {}", path.display()),
            Message::PromptStorePath => "Task file".to_string(),
            Message::PromptExportDir => "Export directory".to_string(),

            // === STORE MESSAGES ===
            Message::StoreCorrupt(path) => format!(
                "The task file {} could not be read. It was left untouched; fix or move it and try again",
                path.display()
            ),
            Message::UsingStore(path) => format!("Using task file {}", path.display()),

            // === GENERAL MESSAGES ===
            Message::OperationCancelled => "Operation cancelled".to_string(),
        };
        write!(f, "{}", text)
    }
}
