//! Search command and the filter flags shared with `export`.

use super::Context;
use crate::{
    libs::{
        export::to_json,
        filter::{filter, Criteria},
        messages::Message,
        task::{parse_date, Priority},
        view::View,
    },
    msg_info, msg_print,
};
use anyhow::Result;
use clap::{Args, Subcommand};

#[derive(Debug, Args)]
pub struct SearchArgs {
    #[command(subcommand)]
    command: SearchCommand,
}

#[derive(Debug, Subcommand)]
enum SearchCommand {
    /// Filter tasks by one or more criteria
    By {
        #[command(flatten)]
        filter: FilterArgs,
        /// Print JSON instead of a table
        #[arg(long)]
        raw: bool,
    },
}

/// Filter flags; all optional and combined with AND.
#[derive(Debug, Clone, Default, Args)]
pub struct FilterArgs {
    /// Tasks carrying this tag (case-insensitive)
    #[arg(long)]
    pub tag: Option<String>,
    /// low, medium or high
    #[arg(long)]
    pub priority: Option<String>,
    /// Due on or before this date (YYYY-MM-DD)
    #[arg(long)]
    pub due_before: Option<String>,
    /// Due on or after this date (YYYY-MM-DD)
    #[arg(long)]
    pub due_after: Option<String>,
    /// Only completed tasks
    #[arg(long, conflicts_with = "pending")]
    pub done: bool,
    /// Only open tasks
    #[arg(long)]
    pub pending: bool,
    /// Title contains this text (case-insensitive)
    #[arg(long)]
    pub text: Option<String>,
}

impl FilterArgs {
    pub fn to_criteria(&self) -> Result<Criteria> {
        let done = match (self.done, self.pending) {
            (true, _) => Some(true),
            (_, true) => Some(false),
            _ => None,
        };

        Ok(Criteria {
            tag: self.tag.clone(),
            priority: self.priority.as_deref().map(str::parse::<Priority>).transpose()?,
            due_before: self.due_before.as_deref().map(parse_date).transpose()?,
            due_after: self.due_after.as_deref().map(parse_date).transpose()?,
            done,
            text: self.text.clone(),
        })
    }
}

pub fn cmd(ctx: &Context, args: SearchArgs) -> Result<()> {
    match args.command {
        SearchCommand::By { filter, raw } => handle_by(ctx, &filter, raw),
    }
}

fn handle_by(ctx: &Context, args: &FilterArgs, raw: bool) -> Result<()> {
    let criteria = args.to_criteria()?;
    let tasks = ctx.store.load()?;
    let found = filter(tasks.tasks(), &criteria);

    if raw {
        print!("{}", to_json(found)?);
        return Ok(());
    }

    if found.is_empty() {
        msg_info!(Message::NoMatchingTasks);
        return Ok(());
    }

    msg_print!(Message::SearchHeader, true);
    View::tasks(found);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flags_convert_to_criteria() {
        let args = FilterArgs {
            tag: Some("work".to_string()),
            priority: Some("High".to_string()),
            due_before: Some("2025-12-01".to_string()),
            pending: true,
            ..FilterArgs::default()
        };
        let criteria = args.to_criteria().unwrap();
        assert_eq!(criteria.priority, Some(Priority::High));
        assert_eq!(criteria.due_before, Some(parse_date("2025-12-01").unwrap()));
        assert_eq!(criteria.done, Some(false));
        assert!(criteria.due_after.is_none());
    }

    #[test]
    fn bad_flags_are_rejected() {
        let args = FilterArgs {
            due_after: Some("12/01/2025".to_string()),
            ..FilterArgs::default()
        };
        assert!(args.to_criteria().is_err());
    }
}
