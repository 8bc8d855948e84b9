//! Persistence layer: the task collection and the file store behind it.

pub mod store;
pub mod tasks;
