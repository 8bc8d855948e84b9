//! Core library modules for the todo application.
//!
//! - **Task Model**: [`task`] record, validation and pure updates
//! - **Query Engine**: [`filter`] criteria over task sequences
//! - **Exporter**: [`export`] JSON, CSV and Markdown rendering
//! - **Errors**: [`error`] typed failure taxonomy
//! - **Infrastructure**: configuration, data directory, messages, tables
//!
//! ## Usage
//!
//! ```rust,no_run
//! use todo::db::store::Store;
//! use todo::libs::filter::{filter, Criteria};
//! use todo::libs::task::Task;
//!
//! let store = Store::new("tasks.json");
//! let mut tasks = store.load()?;
//! tasks.add(Task::create("Write tests", Some("high"), None, &[])?);
//! store.save(&tasks)?;
//!
//! let open = filter(tasks.tasks(), &Criteria { done: Some(false), ..Criteria::default() });
//! # Ok::<(), todo::libs::error::TaskError>(())
//! ```

pub mod config;
pub mod data_storage;
pub mod error;
pub mod export;
pub mod filter;
pub mod messages;
pub mod task;
pub mod view;
