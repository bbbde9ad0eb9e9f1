//! # Configuration
//!
//! User preferences stored in `~/.config/fitlazy/config.json`.
//!
//! Only the colour theme is kept here; onboarding answers and workout
//! progress are never written to disk. The `directories` crate resolves the
//! platform config directory.

use super::theme::Theme;
use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Name of a built-in theme.
    #[serde(default = "default_theme_name")]
    pub theme: String,
}

fn default_theme_name() -> String {
    Theme::default_theme().name.to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            theme: default_theme_name(),
        }
    }
}

impl Config {
    /// Load from the default location, falling back to defaults on any
    /// failure. The error is returned alongside so the caller can warn.
    pub fn load() -> (Self, Option<anyhow::Error>) {
        match Self::config_path().and_then(|path| Self::load_from(&path)) {
            Ok(config) => (config, None),
            Err(e) => (Self::default(), Some(e)),
        }
    }

    /// Load from `path`. A missing file yields the defaults.
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        serde_json::from_str(&contents)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))
    }

    pub fn save(&self) -> Result<()> {
        let path = Self::config_path()?;
        self.save_to(&path)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create config directory: {}", parent.display())
            })?;
        }

        let contents = serde_json::to_string_pretty(self).context("Failed to serialize config")?;
        fs::write(path, contents)
            .with_context(|| format!("Failed to write config file: {}", path.display()))
    }

    /// Pick the theme to start with: an explicit override wins over the
    /// stored name. An unknown override is an error, an unknown stored name
    /// silently falls back to the default theme.
    pub fn resolve_theme(&self, override_name: Option<&str>) -> Result<&'static Theme> {
        if let Some(name) = override_name {
            return match Theme::by_name(name) {
                Some(theme) => Ok(theme),
                None => bail!(
                    "Unknown theme '{}'. Available themes: {}",
                    name,
                    Theme::names().join(", ")
                ),
            };
        }
        Ok(Theme::by_name(&self.theme).unwrap_or_else(Theme::default_theme))
    }

    fn config_path() -> Result<PathBuf> {
        let dirs = directories::ProjectDirs::from("", "", "fitlazy")
            .context("Could not determine config directory")?;
        Ok(dirs.config_dir().join("config.json"))
    }
}
