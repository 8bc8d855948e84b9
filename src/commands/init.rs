//! Interactive configuration of the task file and export directory.

use crate::{
    libs::{
        config::{Config, CONFIG_FILE_NAME},
        data_storage::DataStorage,
        messages::Message,
    },
    msg_success,
};
use anyhow::Result;
use clap::Args;

#[derive(Debug, Args)]
pub struct InitArgs {
    /// Reset the configuration to defaults
    #[arg(short, long)]
    reset: bool,
}

pub fn cmd(init_args: InitArgs) -> Result<()> {
    let config_path = DataStorage::new().get_path(CONFIG_FILE_NAME)?;

    if init_args.reset {
        Config::default().save()?;
        msg_success!(Message::ConfigSaved(config_path));
        return Ok(());
    }

    Config::init()?.save()?;

    msg_success!(Message::ConfigSaved(config_path));
    Ok(())
}
