use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;
use tracing::info;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum Theme {
    #[default]
    Dark,
    Light,
}

/// How listings are laid out on the catalog view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum ViewMode {
    #[default]
    Grid,
    List,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PersistedSettings {
    pub language: String,
    pub theme: Theme,
    pub view_mode: ViewMode,
}

impl Default for PersistedSettings {
    fn default() -> Self {
        Self {
            language: "uz".to_string(),
            theme: Theme::default(),
            view_mode: ViewMode::default(),
        }
    }
}

pub struct SettingsPersistence {
    file_path: PathBuf,
}

impl SettingsPersistence {
    pub fn new() -> Result<Self> {
        let home = std::env::var("HOME").context("Could not find HOME directory")?;
        Self::in_dir(PathBuf::from(home).join(".joybor"))
    }

    /// Store settings under an explicit directory. Used by tests.
    pub fn in_dir(config_dir: PathBuf) -> Result<Self> {
        if !config_dir.exists() {
            fs::create_dir_all(&config_dir).context("Failed to create config directory")?;
        }

        Ok(Self {
            file_path: config_dir.join("settings.json"),
        })
    }

    pub fn load(&self) -> Result<Option<PersistedSettings>> {
        if !self.file_path.exists() {
            return Ok(None);
        }

        let content =
            fs::read_to_string(&self.file_path).context("Failed to read settings file")?;
        let settings: PersistedSettings =
            serde_json::from_str(&content).context("Failed to parse settings JSON")?;

        info!("Loaded settings from {:?}", self.file_path);
        Ok(Some(settings))
    }

    pub fn save(&self, settings: &PersistedSettings) -> Result<()> {
        let content =
            serde_json::to_string_pretty(settings).context("Failed to serialize settings")?;

        // Atomic write: write to temp file then rename
        let temp_path = self.file_path.with_extension("tmp");
        fs::write(&temp_path, content).context("Failed to write temp settings file")?;
        fs::rename(&temp_path, &self.file_path).context("Failed to rename settings file")?;

        info!("Saved settings to {:?}", self.file_path);
        Ok(())
    }
}
