use anyhow::Result;
use std::env;
use std::str::FromStr;

/// Data mode for the catalog side of the app.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// Seeded in-memory dataset, no catalog backend.
    Mock,
}

impl FromStr for Mode {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "mock" => Ok(Mode::Mock),
            _ => anyhow::bail!("Invalid MODE: {}. Must be 'mock'", s),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Config {
    pub mode: Mode,
    /// Base URL of the authentication API.
    pub auth_base_url: String,
    /// Accept the built-in demo credentials when the API is unreachable.
    pub demo_login: bool,
    /// Language code used before the user picks one ("uz" or "ru").
    pub default_language: String,
    pub http_timeout_secs: u64,
    /// Pending applications older than this are shown as expired.
    pub application_expiry_days: i64,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        let mode_str = env::var("MODE").unwrap_or_else(|_| "mock".to_string());
        let mode = Mode::from_str(&mode_str)?;

        let auth_base_url = env::var("AUTH_BASE_URL")
            .unwrap_or_else(|_| "https://joyboryangi.pythonanywhere.com".to_string());

        let demo_login = env::var("DEMO_LOGIN")
            .map(|v| v.to_lowercase() != "false")
            .unwrap_or(true);

        let default_language = env::var("DEFAULT_LANGUAGE").unwrap_or_else(|_| "uz".to_string());

        let http_timeout_secs = env::var("HTTP_TIMEOUT_SECS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(30);

        let application_expiry_days = env::var("APPLICATION_EXPIRY_DAYS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(30);

        Ok(Self {
            mode,
            auth_base_url,
            demo_login,
            default_language,
            http_timeout_secs,
            application_expiry_days,
        })
    }

    /// Applies command-line flags on top of the environment-derived config.
    pub fn with_overrides(
        mut self,
        base_url: Option<String>,
        language: Option<String>,
        no_demo: bool,
    ) -> Self {
        if let Some(base_url) = base_url {
            self.auth_base_url = base_url;
        }
        if let Some(language) = language {
            self.default_language = language;
        }
        if no_demo {
            self.demo_login = false;
        }
        self
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            mode: Mode::Mock,
            auth_base_url: "https://joyboryangi.pythonanywhere.com".to_string(),
            demo_login: true,
            default_language: "uz".to_string(),
            http_timeout_secs: 30,
            application_expiry_days: 30,
        }
    }
}
