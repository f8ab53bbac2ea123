use crate::api::constants::{API_BASE_URL_ENV, DEFAULT_API_BASE_URL};
use crate::questionnaire::review::DEFAULT_TRUNCATE_AT;
use anyhow::{Context, Result};
use chrono::{DateTime, Duration, Utc};
use log::{debug, info};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// How long a login stays valid
pub const SESSION_DAYS: i64 = 7;

/// Logged-in organization
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    pub token: String,
    pub organizacao_id: Option<i64>,
    pub organizacao_name: Option<String>,
    pub expires_at: DateTime<Utc>,
}

impl Session {
    pub fn new(
        token: impl Into<String>,
        organizacao_id: Option<i64>,
        organizacao_name: Option<String>,
    ) -> Self {
        Self {
            token: token.into(),
            organizacao_id,
            organizacao_name,
            expires_at: Utc::now() + Duration::days(SESSION_DAYS),
        }
    }

    pub fn is_expired(&self) -> bool {
        self.is_expired_at(Utc::now())
    }

    pub fn is_expired_at(&self, now: DateTime<Utc>) -> bool {
        now >= self.expires_at
    }
}

#[derive(Debug, Serialize, Deserialize, Default)]
pub struct Config {
    pub api_base_url: Option<String>,
    pub session: Option<Session>,
    #[serde(default)]
    pub settings: Settings,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct Settings {
    /// Characters shown of a long answer before it is collapsed
    #[serde(default = "default_review_truncate_at")]
    pub review_truncate_at: usize,
}

fn default_review_truncate_at() -> usize {
    DEFAULT_TRUNCATE_AT
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            review_truncate_at: default_review_truncate_at(),
        }
    }
}

impl Config {
    pub fn get_config_path() -> Result<PathBuf> {
        let config_dir = if cfg!(target_os = "linux") {
            // XDG config directory on Linux
            dirs::config_dir()
                .context("Failed to get XDG config directory")?
                .join("adote-cli")
        } else {
            dirs::home_dir()
                .context("Failed to get home directory")?
                .join(".adote-cli")
        };

        if !config_dir.exists() {
            fs::create_dir_all(&config_dir)
                .with_context(|| format!("Failed to create config directory: {:?}", config_dir))?;
            info!("Created config directory: {:?}", config_dir);
        }

        Ok(config_dir.join("config.toml"))
    }

    pub fn load() -> Result<Self> {
        Self::load_from(&Self::get_config_path()?)
    }

    pub fn load_from(config_path: &Path) -> Result<Self> {
        debug!("Loading config from: {:?}", config_path);

        if !config_path.exists() {
            info!("Config file doesn't exist, using defaults");
            return Ok(Self::default());
        }

        let config_content = fs::read_to_string(config_path)
            .with_context(|| format!("Failed to read config file: {:?}", config_path))?;

        let config: Config = toml::from_str(&config_content)
            .with_context(|| format!("Failed to parse config file: {:?}", config_path))?;

        debug!("Loaded config (logged in: {})", config.session.is_some());
        Ok(config)
    }

    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::get_config_path()?)
    }

    pub fn save_to(&self, config_path: &Path) -> Result<()> {
        debug!("Saving config to: {:?}", config_path);

        let config_content =
            toml::to_string_pretty(self).context("Failed to serialize config to TOML")?;

        fs::write(config_path, config_content)
            .with_context(|| format!("Failed to write config file: {:?}", config_path))?;

        info!("Config saved successfully");
        Ok(())
    }

    /// Base URL in effect: environment, then config file, then the default
    pub fn effective_base_url(&self) -> String {
        std::env::var(API_BASE_URL_ENV)
            .ok()
            .filter(|url| !url.trim().is_empty())
            .or_else(|| self.api_base_url.clone())
            .unwrap_or_else(|| DEFAULT_API_BASE_URL.to_string())
    }

    pub fn set_api_base_url(&mut self, url: &str) -> Result<()> {
        let url = url.trim();
        if !(url.starts_with("http://") || url.starts_with("https://")) {
            anyhow::bail!("API base URL must start with http:// or https://: {}", url);
        }
        info!("Setting API base URL to: {}", url);
        self.api_base_url = Some(url.trim_end_matches('/').to_string());
        Ok(())
    }

    pub fn set_session(&mut self, session: Session) {
        info!(
            "Storing session for organization {:?} until {}",
            session.organizacao_id, session.expires_at
        );
        self.session = Some(session);
    }

    pub fn clear_session(&mut self) -> Option<Session> {
        self.session.take()
    }

    /// The stored session if it has not expired
    pub fn active_session(&self) -> Option<&Session> {
        self.session.as_ref().filter(|s| !s.is_expired())
    }
}
