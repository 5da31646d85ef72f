// SPDX-License-Identifier: MPL-2.0
//! User preferences, stored as `settings.toml` in the application config
//! directory.
//!
//! The preferred language deliberately does not live here: it has its own
//! fixed-layout file (see [`crate::i18n::store`]) so external tooling can
//! read it as a bare string.

use crate::error::Result;
use crate::i18n::store::config_dir_with_override;
use crate::ui::theming::ThemeMode;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILE: &str = "settings.toml";

#[derive(Debug, Default, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Config {
    #[serde(default)]
    pub theme_mode: ThemeMode,
}

fn config_file_path(base_dir: Option<PathBuf>) -> Option<PathBuf> {
    config_dir_with_override(base_dir).map(|mut path| {
        path.push(CONFIG_FILE);
        path
    })
}

/// Loads preferences, falling back to defaults when the file is missing.
/// Returns a notification key alongside the config when the file exists but
/// could not be read or parsed.
#[must_use]
pub fn load(base_dir: Option<PathBuf>) -> (Config, Option<String>) {
    let Some(path) = config_file_path(base_dir) else {
        return (Config::default(), None);
    };

    if !path.exists() {
        return (Config::default(), None);
    }

    match fs::read_to_string(&path) {
        Ok(content) => match toml::from_str(&content) {
            Ok(config) => (config, None),
            Err(_) => (
                Config::default(),
                Some("notification.settings.loadError".to_string()),
            ),
        },
        Err(_) => (
            Config::default(),
            Some("notification.settings.loadError".to_string()),
        ),
    }
}

/// Saves preferences, creating the config directory if needed.
pub fn save(config: &Config, base_dir: Option<PathBuf>) -> Result<()> {
    if let Some(path) = config_file_path(base_dir) {
        return save_to_path(config, &path);
    }
    Ok(())
}

pub fn save_to_path(config: &Config, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = toml::to_string_pretty(config)?;
    fs::write(path, content)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn save_and_load_round_trip_preserves_theme_mode() {
        let dir = tempdir().expect("create temp dir");
        let config = Config {
            theme_mode: ThemeMode::Dark,
        };

        save(&config, Some(dir.path().to_path_buf())).expect("save config");
        let (loaded, warning) = load(Some(dir.path().to_path_buf()));

        assert!(warning.is_none());
        assert_eq!(loaded, config);
    }

    #[test]
    fn load_returns_default_when_file_missing() {
        let dir = tempdir().expect("create temp dir");
        let (config, warning) = load(Some(dir.path().to_path_buf()));

        assert!(warning.is_none());
        assert_eq!(config, Config::default());
    }

    #[test]
    fn load_returns_default_with_warning_on_invalid_toml() {
        let dir = tempdir().expect("create temp dir");
        fs::write(dir.path().join(CONFIG_FILE), "not = valid = toml").expect("write file");

        let (config, warning) = load(Some(dir.path().to_path_buf()));

        assert_eq!(config, Config::default());
        assert_eq!(warning.as_deref(), Some("notification.settings.loadError"));
    }

    #[test]
    fn save_to_path_creates_parent_directories() {
        let dir = tempdir().expect("create temp dir");
        let path = dir.path().join("deep").join("path").join(CONFIG_FILE);

        save_to_path(&Config::default(), &path).expect("save should create directories");
        assert!(path.exists());
    }
}
