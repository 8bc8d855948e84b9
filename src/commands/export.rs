//! Export command: writes the task list, or a filtered part of it, as JSON,
//! CSV or Markdown.
//!
//! Without `--output` the file goes to `<export_dir>/tasks.<ext>`. An output
//! of `-` prints to stdout instead.

use super::{search::FilterArgs, Context};
use crate::{
    libs::{
        export::{ExportFormat, Exporter},
        filter::filter,
        messages::Message,
    },
    msg_success, msg_warning,
};
use anyhow::Result;
use clap::Args;
use std::path::PathBuf;

#[derive(Debug, Args)]
pub struct ExportArgs {
    /// Output format
    #[arg(value_enum)]
    format: ExportFormat,

    /// Output file path, or `-` for stdout
    #[arg(short, long)]
    output: Option<PathBuf>,

    #[command(flatten)]
    filter: FilterArgs,
}

pub fn cmd(ctx: &Context, args: ExportArgs) -> Result<()> {
    let criteria = args.filter.to_criteria()?;
    let tasks = ctx.store.load()?;
    let selected = filter(tasks.tasks(), &criteria);

    if args.output.as_deref().is_some_and(|p| p.as_os_str() == "-") {
        print!("{}", Exporter::render(args.format, selected)?);
        return Ok(());
    }

    if selected.is_empty() {
        msg_warning!(Message::NothingToExport);
        return Ok(());
    }

    let path = args
        .output
        .unwrap_or_else(|| ctx.config.export_dir().join(args.format.default_file_name()));
    let count = selected.len();
    let written = Exporter::write(args.format, selected, &path)?;

    msg_success!(Message::ExportCompleted(count, written));
    Ok(())
}
