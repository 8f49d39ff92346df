use anyhow::bail;
use anyhow::{Context, Result};
use serde::Deserialize;
use std::env;
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

/// Trakt credentials for the sync step. Nothing in the grouping core reads these.
#[derive(Deserialize, Default, Clone, PartialEq, Eq)]
pub struct Settings {
    pub client_id: Option<String>,
    pub client_secret: Option<String>,
    pub trakt_username: Option<String>,
}

impl fmt::Debug for Settings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Settings")
            .field("client_id", &self.client_id)
            .field("client_secret", &self.client_secret.as_ref().map(|_| "<redacted>"))
            .field("trakt_username", &self.trakt_username)
            .finish()
    }
}

impl Settings {
    pub fn has_credentials(&self) -> bool {
        self.client_id.is_some() && self.client_secret.is_some()
    }

    fn apply_env<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(id) = lookup("TRAKT_CLIENT_ID") {
            self.client_id = Some(id);
        }
        if let Some(secret) = lookup("TRAKT_CLIENT_SECRET") {
            self.client_secret = Some(secret);
        }
        if let Some(username) = lookup("TRAKT_USERNAME") {
            self.trakt_username = Some(username);
        }
    }
}

/// Environment variables win over the config file, key by key.
pub fn load_settings(path: Option<&Path>) -> Result<Settings> {
    let mut settings = load_settings_from(path, &get_config_path())?;
    settings.apply_env(|key| env::var(key).ok());
    Ok(settings)
}

/// An explicit `path` must exist. Without one, `default_path` is optional and
/// its absence yields empty settings.
fn load_settings_from(path: Option<&Path>, default_path: &Path) -> Result<Settings> {
    match path {
        Some(path) => {
            if !path.exists() {
                bail!("Config file not found: {}", path.display());
            }
            read_settings(path)
        }
        None if default_path.exists() => read_settings(default_path),
        None => {
            tracing::debug!(path = %default_path.display(), "no config file");
            Ok(Settings::default())
        }
    }
}

fn read_settings(path: &Path) -> Result<Settings> {
    tracing::debug!(path = %path.display(), "loading config file");
    let config_content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file {}", path.display()))?;
    toml::from_str(&config_content)
        .with_context(|| format!("Invalid config file {}", path.display()))
}

fn get_config_dir_path() -> PathBuf {
    xdir::config()
        .map(|path| path.join("tvtime-history"))
        // If the standard path could not be found (e.g.`$HOME` is not set),
        // default to the current directory.
        .unwrap_or_default()
}

pub fn get_config_path() -> PathBuf {
    get_config_dir_path().join("config.toml")
}
