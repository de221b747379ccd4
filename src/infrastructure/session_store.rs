use crate::domain::users::User;
use crate::infrastructure::auth::SessionTokens;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;
use tracing::info;

/// Session state that survives restarts, so a logged-in landlord lands
/// straight on the dashboard.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PersistedSession {
    pub access_token: String,
    pub refresh_token: Option<String>,
    pub landlord_user: User,
}

impl PersistedSession {
    pub fn new(user: User, tokens: SessionTokens) -> Self {
        Self {
            access_token: tokens.access,
            refresh_token: tokens.refresh,
            landlord_user: user,
        }
    }
}

pub struct SessionStore {
    file_path: PathBuf,
}

impl SessionStore {
    pub fn new() -> Result<Self> {
        let home = std::env::var("HOME").context("Could not find HOME directory")?;
        Self::in_dir(PathBuf::from(home).join(".joybor"))
    }

    /// Store the session under an explicit directory. Used by tests.
    pub fn in_dir(config_dir: PathBuf) -> Result<Self> {
        if !config_dir.exists() {
            fs::create_dir_all(&config_dir).context("Failed to create config directory")?;
        }

        Ok(Self {
            file_path: config_dir.join("session.json"),
        })
    }

    pub fn load(&self) -> Result<Option<PersistedSession>> {
        if !self.file_path.exists() {
            return Ok(None);
        }

        let content = fs::read_to_string(&self.file_path).context("Failed to read session file")?;
        let session: PersistedSession =
            serde_json::from_str(&content).context("Failed to parse session JSON")?;

        info!(user = %session.landlord_user.name, "Restored saved session");
        Ok(Some(session))
    }

    pub fn save(&self, session: &PersistedSession) -> Result<()> {
        let content =
            serde_json::to_string_pretty(session).context("Failed to serialize session")?;

        // Atomic write: write to temp file then rename
        let temp_path = self.file_path.with_extension("tmp");
        fs::write(&temp_path, content).context("Failed to write temp session file")?;
        fs::rename(&temp_path, &self.file_path).context("Failed to rename session file")?;

        info!("Saved session to {:?}", self.file_path);
        Ok(())
    }

    /// Logout removes the file entirely.
    pub fn clear(&self) -> Result<()> {
        if self.file_path.exists() {
            fs::remove_file(&self.file_path).context("Failed to remove session file")?;
            info!("Cleared saved session");
        }
        Ok(())
    }
}
