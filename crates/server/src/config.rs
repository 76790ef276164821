use std::env;
use std::path::{Path, PathBuf};

use anyhow::{Context, bail};
use serde::Deserialize;
use tracing::info;

type Result<T> = anyhow::Result<T>;

pub const DEFAULT_CONFIG_PATH: &str = "trivia.toml";

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub bind_addr: String,
    pub database_url: String,
    pub page_size: u64,
    pub max_connections: u32,
    pub run_migrations: bool,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_addr: "127.0.0.1:5000".to_string(),
            database_url: "sqlite://trivia.db?mode=rwc".to_string(),
            page_size: 10,
            max_connections: 10,
            run_migrations: true,
        }
    }
}

impl ServerConfig {
    /// Reads `TRIVIA_CONFIG` (or `trivia.toml`) when present, then applies `DATABASE_URL` and
    /// `BIND_ADDR` from the environment.
    pub fn load() -> Result<Self> {
        let path = env::var_os("TRIVIA_CONFIG")
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_PATH));

        let mut config = if path.exists() {
            info!(path = %path.display(), "loading server config");
            Self::from_file(&path)?
        } else {
            info!(path = %path.display(), "config file not found, using defaults");
            Self::default()
        };

        config.apply_overrides(|key| env::var(key).ok());
        config.validate()?;
        Ok(config)
    }

    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config file: {}", path.display()))?;
        Self::from_str(&content)
            .with_context(|| format!("failed to parse config file: {}", path.display()))
    }

    #[allow(clippy::should_implement_trait)]
    pub fn from_str(s: &str) -> Result<Self> {
        let config: Self = toml::from_str(s).context("failed to deserialize server config")?;
        config.validate()?;
        Ok(config)
    }

    fn apply_overrides(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        if let Some(url) = lookup("DATABASE_URL") {
            self.database_url = url;
        }
        if let Some(addr) = lookup("BIND_ADDR") {
            self.bind_addr = addr;
        }
    }

    fn validate(&self) -> Result<()> {
        if self.page_size == 0 {
            bail!("page_size must be at least 1");
        }
        if self.max_connections == 0 {
            bail!("max_connections must be at least 1");
        }
        Ok(())
    }

    /// Database URL with any password replaced, for logs and error messages.
    pub fn redacted_database_url(&self) -> String {
        let url = &self.database_url;
        let Some(scheme_end) = url.find("://") else {
            return url.clone();
        };
        let rest = &url[scheme_end + 3..];
        let Some(at) = rest.find('@') else {
            return url.clone();
        };
        let credentials = &rest[..at];
        match credentials.find(':') {
            Some(colon) => format!(
                "{}{}:***{}",
                &url[..scheme_end + 3],
                &credentials[..colon],
                &rest[at..]
            ),
            None => url.clone(),
        }
    }
}
