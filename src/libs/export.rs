//! Serialization of task sequences to JSON, CSV and Markdown.
//!
//! Rendering is pure: the same tasks in the same order always produce the
//! same text. Writing the text somewhere is the caller's job, see
//! [`Exporter::write`].
//!
//! ## Columns
//!
//! All three formats use the fixed field set of [`FIELDS`], in that order.
//! Due dates are ISO-8601 dates (`2025-10-31`), timestamps are RFC 3339.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use todo::libs::export::{Exporter, ExportFormat};
//! use todo::libs::task::Task;
//!
//! let tasks: Vec<Task> = Vec::new();
//! let text = Exporter::render(ExportFormat::Csv, &tasks)?;
//! # Ok::<(), anyhow::Error>(())
//! ```

use super::error::TaskError;
use super::task::Task;
use anyhow::Result;
use chrono::{DateTime, SecondsFormat, Utc};
use std::fs;
use std::path::{Path, PathBuf};

pub const FIELDS: [&str; 8] = ["id", "title", "priority", "due", "tags", "done", "created_at", "updated_at"];

/// Glyphs used for the `done` column in Markdown tables.
pub const DONE_GLYPH: &str = "✅";
pub const PENDING_GLYPH: &str = "❌";

#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum ExportFormat {
    /// Pretty-printed JSON array of task objects.
    Json,
    /// Comma-separated values with a header row.
    Csv,
    /// Pipe-delimited Markdown table.
    #[value(name = "md", alias = "markdown")]
    Markdown,
}

impl ExportFormat {
    pub fn extension(&self) -> &'static str {
        match self {
            ExportFormat::Json => "json",
            ExportFormat::Csv => "csv",
            ExportFormat::Markdown => "md",
        }
    }

    pub fn default_file_name(&self) -> String {
        format!("tasks.{}", self.extension())
    }
}

pub struct Exporter;

impl Exporter {
    pub fn render<'a>(format: ExportFormat, tasks: impl IntoIterator<Item = &'a Task>) -> Result<String> {
        match format {
            ExportFormat::Json => to_json(tasks),
            ExportFormat::Csv => to_csv(tasks),
            ExportFormat::Markdown => Ok(to_markdown(tasks)),
        }
    }

    /// Renders `tasks` and writes them to `path`, creating parent directories.
    /// Returns the path written.
    pub fn write<'a>(format: ExportFormat, tasks: impl IntoIterator<Item = &'a Task>, path: &Path) -> Result<PathBuf> {
        let text = Self::render(format, tasks)?;
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|e| TaskError::io(parent, e))?;
        }
        fs::write(path, text).map_err(|e| TaskError::io(path, e))?;
        Ok(path.to_path_buf())
    }
}

pub fn to_json<'a>(tasks: impl IntoIterator<Item = &'a Task>) -> Result<String> {
    let tasks: Vec<&Task> = tasks.into_iter().collect();
    let mut json = serde_json::to_string_pretty(&tasks)?;
    json.push('\n');
    Ok(json)
}

pub fn to_csv<'a>(tasks: impl IntoIterator<Item = &'a Task>) -> Result<String> {
    // Every field quoted, so the tags column is one quoted field even with a
    // single tag or none.
    let mut wtr = csv::WriterBuilder::new()
        .quote_style(csv::QuoteStyle::Always)
        .from_writer(Vec::new());
    wtr.write_record(FIELDS)?;

    for task in tasks {
        wtr.write_record(&[
            task.id.to_string(),
            task.title.clone(),
            task.priority.to_string(),
            task.due.map(|d| d.to_string()).unwrap_or_default(),
            join_tags(task, ","),
            task.done.to_string(),
            timestamp(&task.created_at),
            timestamp(&task.updated_at),
        ])?;
    }

    wtr.flush()?;
    let bytes = wtr.into_inner().map_err(|e| e.into_error())?;
    Ok(String::from_utf8(bytes)?)
}

pub fn to_markdown<'a>(tasks: impl IntoIterator<Item = &'a Task>) -> String {
    let mut out = String::new();
    out.push_str(&format!("| {} |\n", FIELDS.join(" | ")));
    out.push_str(&format!("|{}\n", "---|".repeat(FIELDS.len())));

    for task in tasks {
        let cells = [
            task.id.to_string(),
            md_cell(&task.title),
            task.priority.to_string(),
            task.due.map(|d| d.to_string()).unwrap_or_else(|| "-".to_string()),
            if task.tags.is_empty() { "-".to_string() } else { md_cell(&join_tags(task, ", ")) },
            (if task.done { DONE_GLYPH } else { PENDING_GLYPH }).to_string(),
            timestamp(&task.created_at),
            timestamp(&task.updated_at),
        ];
        out.push_str(&format!("| {} |\n", cells.join(" | ")));
    }
    out
}

fn join_tags(task: &Task, sep: &str) -> String {
    task.tags.iter().map(String::as_str).collect::<Vec<_>>().join(sep)
}

fn timestamp(at: &DateTime<Utc>) -> String {
    at.to_rfc3339_opts(SecondsFormat::Secs, true)
}

// Pipes would split the cell; line breaks would end the row.
fn md_cell(text: &str) -> String {
    text.replace('|', "\\|").replace(['\r', '\n'], " ")
}
