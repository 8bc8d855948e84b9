pub mod export;
pub mod init;
pub mod search;
pub mod task;

use crate::db::store::Store;
use crate::libs::config::Config;
use crate::libs::messages::Message;
use crate::msg_debug;
use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Debug, Subcommand)]
enum Commands {
    #[command(about = "Configuration initialization")]
    Init(init::InitArgs),
    #[command(about = "Manage tasks", arg_required_else_help = true)]
    Task(task::TaskArgs),
    #[command(about = "Search or filter tasks", arg_required_else_help = true)]
    Search(search::SearchArgs),
    #[command(about = "Export tasks to JSON, CSV or Markdown")]
    Export(export::ExportArgs),
}

#[derive(Debug, Parser)]
#[command(name = "todo", author, version, about, long_about = None)]
#[command(arg_required_else_help(true))]
pub struct Cli {
    /// Task file to use instead of the configured one
    #[arg(short, long, global = true, env = "TODO_FILE")]
    file: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    pub fn menu() -> Result<()> {
        Self::parse().run()
    }

    pub fn run(self) -> Result<()> {
        // Init does not read the current configuration, so it can repair it
        match self.command {
            Commands::Init(args) => init::cmd(args),
            Commands::Task(args) => task::cmd(&Context::new(self.file)?, args),
            Commands::Search(args) => search::cmd(&Context::new(self.file)?, args),
            Commands::Export(args) => export::cmd(&Context::new(self.file)?, args),
        }
    }
}

/// What every command needs: the loaded configuration and the store it
/// points at. Built fresh for each invocation.
pub struct Context {
    pub config: Config,
    pub store: Store,
}

impl Context {
    pub fn new(file: Option<PathBuf>) -> Result<Self> {
        let config = Config::read()?;
        let store = Store::new(config.resolve_store_path(file)?);
        msg_debug!(Message::UsingStore(store.path().to_path_buf()));

        Ok(Self { config, store })
    }
}
