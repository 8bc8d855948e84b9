//! User configuration for the todo application.
//!
//! Settings live in `config.json` inside the per-user data directory
//! resolved by [`DataStorage`]. A missing file means defaults.
//!
//! ## Settings
//!
//! - **`store_path`**: task file to use instead of `<data dir>/tasks.json`
//! - **`export_dir`**: directory that exports land in when no explicit output
//!   path is given (default `exports`, relative to the working directory)
//!
//! ## Task file resolution
//!
//! 1. `--file` flag or `TODO_FILE` environment variable
//! 2. `store_path` from the configuration file
//! 3. `tasks.json` in the data directory
//!
//! ## Usage
//!
//! ```rust,no_run
//! use todo::libs::config::Config;
//!
//! let config = Config::read()?;
//! let store_path = config.resolve_store_path(None)?;
//! # Ok::<(), anyhow::Error>(())
//! ```

use super::data_storage::DataStorage;
use crate::db::store::STORE_FILE_NAME;
use crate::libs::error::TaskError;
use crate::libs::messages::Message;
use crate::msg_print;
use anyhow::Result;
use dialoguer::{theme::ColorfulTheme, Input};
use serde::{Deserialize, Serialize};
use std::fs::{self, File};
use std::path::{Path, PathBuf};

pub const CONFIG_FILE_NAME: &str = "config.json";
pub const DEFAULT_EXPORT_DIR: &str = "exports";

#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct Config {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub store_path: Option<PathBuf>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub export_dir: Option<PathBuf>,
}

impl Config {
    pub fn read() -> Result<Config> {
        let config_file_path = DataStorage::new().get_path(CONFIG_FILE_NAME)?;
        Self::read_from(&config_file_path)
    }

    pub fn read_from(path: &Path) -> Result<Config> {
        // No file yet: run with defaults
        if !path.exists() {
            return Ok(Config::default());
        }

        let config_str = fs::read_to_string(path).map_err(|e| TaskError::io(path, e))?;
        let config: Config = serde_json::from_str(&config_str)?;
        Ok(config)
    }

    pub fn save(&self) -> Result<()> {
        let config_file_path = DataStorage::new().get_path(CONFIG_FILE_NAME)?;
        self.save_to(&config_file_path)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        let config_file = File::create(path).map_err(|e| TaskError::io(path, e))?;
        serde_json::to_writer_pretty(&config_file, &self)?;
        Ok(())
    }

    /// Task file to use, honouring an explicit override first.
    pub fn resolve_store_path(&self, explicit: Option<PathBuf>) -> Result<PathBuf> {
        if let Some(path) = explicit.or_else(|| self.store_path.clone()) {
            return Ok(path);
        }
        DataStorage::new().get_path(STORE_FILE_NAME)
    }

    pub fn export_dir(&self) -> PathBuf {
        self.export_dir.clone().unwrap_or_else(|| PathBuf::from(DEFAULT_EXPORT_DIR))
    }

    /// Interactive setup; current values are offered as defaults.
    pub fn init() -> Result<Self> {
        let config = Self::read().unwrap_or_default();
        let default_store = config.resolve_store_path(None)?;

        msg_print!(Message::ConfigHeader, true);

        let store_path: String = Input::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::PromptStorePath.to_string())
            .default(default_store.display().to_string())
            .interact_text()?;

        let export_dir: String = Input::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::PromptExportDir.to_string())
            .default(config.export_dir().display().to_string())
            .interact_text()?;

        Ok(Config {
            store_path: Some(PathBuf::from(store_path.trim())),
            export_dir: Some(PathBuf::from(export_dir.trim())),
        })
    }
}
