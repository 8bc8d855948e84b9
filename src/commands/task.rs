//! Task lifecycle commands: add, list, update, complete and delete.
//!
//! Each handler follows the same sequence: load the collection, apply at
//! most one change in memory, save exactly once if something changed, then
//! report. A failed validation or unknown id returns before the save, so
//! the file on disk is untouched.

use super::Context;
use crate::{
    libs::{
        filter::{filter, Criteria},
        messages::Message,
        task::{Task, TaskPatch},
        view::View,
    },
    msg_bail_anyhow, msg_info, msg_print, msg_success,
};
use anyhow::Result;
use clap::{Args, Subcommand};
use dialoguer::{theme::ColorfulTheme, Confirm};

#[derive(Debug, Args)]
pub struct TaskArgs {
    #[command(subcommand)]
    command: TaskCommand,
}

#[derive(Debug, Subcommand)]
enum TaskCommand {
    /// Add a new task
    Add {
        title: String,
        /// low, medium or high
        #[arg(short, long, default_value = "medium")]
        priority: String,
        /// Due date (YYYY-MM-DD)
        #[arg(short, long)]
        due: Option<String>,
        /// One or more tags, e.g. --tags work --tags coding
        #[arg(short, long, num_args = 1..)]
        tags: Vec<String>,
    },
    /// List all tasks
    List {
        #[arg(long)]
        hide_completed: bool,
        /// Print JSON instead of a table
        #[arg(long)]
        raw: bool,
    },
    /// Update an existing task
    Update {
        id: u32,
        #[arg(long)]
        title: Option<String>,
        #[arg(short, long)]
        priority: Option<String>,
        #[arg(short, long, conflicts_with = "clear_due")]
        due: Option<String>,
        #[arg(long)]
        clear_due: bool,
        /// Replace tags completely
        #[arg(short, long, num_args = 1.., conflicts_with = "clear_tags")]
        tags: Option<Vec<String>>,
        #[arg(long)]
        clear_tags: bool,
    },
    /// Mark a task as completed
    Complete { id: u32 },
    /// Delete a task permanently
    Delete {
        id: u32,
        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },
}

pub fn cmd(ctx: &Context, args: TaskArgs) -> Result<()> {
    match args.command {
        TaskCommand::Add { title, priority, due, tags } => handle_add(ctx, &title, &priority, due.as_deref(), &tags),
        TaskCommand::List { hide_completed, raw } => handle_list(ctx, hide_completed, raw),
        TaskCommand::Update {
            id,
            title,
            priority,
            due,
            clear_due,
            tags,
            clear_tags,
        } => {
            let patch = TaskPatch {
                title,
                priority,
                due: if clear_due { Some(None) } else { due.map(Some) },
                tags: if clear_tags { Some(Vec::new()) } else { tags },
                done: None,
            };
            handle_update(ctx, id, patch)
        }
        TaskCommand::Complete { id } => handle_complete(ctx, id),
        TaskCommand::Delete { id, yes } => handle_delete(ctx, id, yes),
    }
}

fn handle_add(ctx: &Context, title: &str, priority: &str, due: Option<&str>, tags: &[String]) -> Result<()> {
    // Validate before touching the store
    let task = Task::create(title, Some(priority), due, tags)?;

    let mut tasks = ctx.store.load()?;
    let added = tasks.add(task)?.clone();
    ctx.store.save(&tasks)?;

    msg_success!(Message::TaskAdded(added.id, added.title));
    Ok(())
}

fn handle_list(ctx: &Context, hide_completed: bool, raw: bool) -> Result<()> {
    let tasks = ctx.store.load()?;
    let criteria = Criteria {
        done: hide_completed.then_some(false),
        ..Criteria::default()
    };
    let visible = filter(tasks.tasks(), &criteria);

    if raw {
        print!("{}", crate::libs::export::to_json(visible)?);
        return Ok(());
    }

    if visible.is_empty() {
        msg_info!(Message::NoTasksFound);
        return Ok(());
    }

    msg_print!(Message::TasksHeader, true);
    View::tasks(visible);
    Ok(())
}

fn handle_update(ctx: &Context, id: u32, patch: TaskPatch) -> Result<()> {
    if patch.is_empty() {
        msg_bail_anyhow!(Message::NothingToUpdate);
    }

    let mut tasks = ctx.store.load()?;
    tasks.update(id, &patch)?;
    ctx.store.save(&tasks)?;

    msg_success!(Message::TaskUpdated(id));
    Ok(())
}

fn handle_complete(ctx: &Context, id: u32) -> Result<()> {
    let mut tasks = ctx.store.load()?;

    if tasks.get(id)?.done {
        msg_info!(Message::TaskAlreadyCompleted(id));
        return Ok(());
    }

    tasks.complete(id)?;
    ctx.store.save(&tasks)?;

    msg_success!(Message::TaskCompleted(id));
    Ok(())
}

fn handle_delete(ctx: &Context, id: u32, yes: bool) -> Result<()> {
    let mut tasks = ctx.store.load()?;
    let title = tasks.get(id)?.title.clone();

    if !yes {
        let confirmed = Confirm::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::ConfirmDeleteTask(id, title).to_string())
            .default(false)
            .interact()?;
        if !confirmed {
            msg_info!(Message::OperationCancelled);
            return Ok(());
        }
    }

    tasks.remove(id)?;
    ctx.store.save(&tasks)?;

    msg_success!(Message::TaskDeleted(id));
    Ok(())
}
