//! # todo - local command-line task manager
//!
//! Tasks are kept in a single JSON file and managed from the command line.
//!
//! ## Features
//!
//! - **Task Management**: add, update, complete and delete tasks
//! - **Validation**: titles, priorities, due dates and tags are checked before
//!   anything is stored
//! - **Safe Storage**: the task file is replaced atomically on every save
//! - **Search**: filter by tag, priority, due date range, completion and title
//! - **Data Export**: JSON, CSV and Markdown
//!
//! ## Usage
//!
//! ```rust,no_run
//! use todo::commands::Cli;
//!
//! fn main() -> anyhow::Result<()> {
//!     Cli::menu()
//! }
//! ```

pub mod commands;
pub mod db;
pub mod libs;
