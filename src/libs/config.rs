//! Configuration management for the agenda application.
//!
//! Settings are stored as JSON in the platform data directory and kept
//! deliberately small: an optional override for the directory the
//! snapshots and backups live in. `Config::init` runs the interactive
//! setup wizard; `Config::read` falls back to defaults when no file
//! exists yet so first runs need no setup at all.

use crate::libs::data_storage::DataStorage;
use crate::libs::messages::Message;
use crate::msg_error_anyhow;
use anyhow::Result;
use dialoguer::{theme::ColorfulTheme, Input};
use serde::{Deserialize, Serialize};
use std::fs::{self, File};
use std::path::PathBuf;

pub const CONFIG_FILE_NAME: &str = "config.json";

#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct Config {
    /// Directory holding snapshots and backups; `None` means the
    /// platform default under the vendor/app data path.
    pub data_dir: Option<PathBuf>,
}

impl Config {
    /// Reads the configuration file, or returns defaults when the file
    /// does not exist yet.
    pub fn read() -> Result<Self> {
        let config_path = DataStorage::new().get_path(CONFIG_FILE_NAME)?;
        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path)?;
        serde_json::from_str(&content).map_err(|_| msg_error_anyhow!(Message::ConfigParseError))
    }

    pub fn save(&self) -> Result<()> {
        let config_path = DataStorage::new().get_path(CONFIG_FILE_NAME)?;
        let file = File::create(config_path)?;
        serde_json::to_writer_pretty(file, self)?;
        Ok(())
    }

    /// Interactive setup wizard. Prompts for each setting with the
    /// current value as the default.
    pub fn init() -> Result<Self> {
        let current = Self::read().unwrap_or_default();

        let data_dir: String = Input::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::PromptDataDir.to_string())
            .with_initial_text(current.data_dir.as_ref().map(|p| p.display().to_string()).unwrap_or_default())
            .allow_empty(true)
            .interact_text()?;

        let data_dir = data_dir.trim();
        Ok(Self {
            data_dir: if data_dir.is_empty() { None } else { Some(PathBuf::from(data_dir)) },
        })
    }

    /// The storage the session should use, honoring the override.
    pub fn storage(&self) -> DataStorage {
        match &self.data_dir {
            Some(dir) => DataStorage::with_base(dir.clone()),
            None => DataStorage::new(),
        }
    }
}
