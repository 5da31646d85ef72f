// SPDX-License-Identifier: MPL-2.0
//! Durable storage for the preferred locale.
//!
//! The choice is a single file named `preferred-language` in the application
//! config directory, containing nothing but the bare locale code (e.g.
//! `tr`). No schema, no versioning.
//!
//! # Path Resolution
//!
//! 1. Explicit base directory passed to [`LanguageStore::new`] (tests, CLI)
//! 2. `ICED_FOLIO_CONFIG_DIR` environment variable (if set and non-empty)
//! 3. Platform config directory via `dirs`, with the app name appended

use std::fs;
use std::path::PathBuf;

/// Application name used for directory naming.
const APP_NAME: &str = "IcedFolio";

/// Environment variable to override the config directory.
pub const ENV_CONFIG_DIR: &str = "ICED_FOLIO_CONFIG_DIR";

/// File name for the persisted locale code.
const LANGUAGE_FILE: &str = "preferred-language";

/// Returns the application config directory, honoring the override order
/// documented at module level.
#[must_use]
pub fn config_dir_with_override(override_dir: Option<PathBuf>) -> Option<PathBuf> {
    if let Some(path) = override_dir {
        return Some(path);
    }

    if let Ok(env_path) = std::env::var(ENV_CONFIG_DIR) {
        if !env_path.is_empty() {
            return Some(PathBuf::from(env_path));
        }
    }

    dirs::config_dir().map(|mut path| {
        path.push(APP_NAME);
        path
    })
}

/// Reads and writes the `preferred-language` file.
///
/// The store is constructed with an optional base directory so independent
/// instances (tests, portable deployments) do not share state.
#[derive(Debug, Clone, Default)]
pub struct LanguageStore {
    base_dir: Option<PathBuf>,
}

impl LanguageStore {
    #[must_use]
    pub fn new(base_dir: Option<PathBuf>) -> Self {
        Self { base_dir }
    }

    fn file_path(&self) -> Option<PathBuf> {
        config_dir_with_override(self.base_dir.clone()).map(|mut path| {
            path.push(LANGUAGE_FILE);
            path
        })
    }

    /// Returns the persisted locale code, if any. Unreadable or empty
    /// content is treated the same as no persisted choice.
    #[must_use]
    pub fn load(&self) -> Option<String> {
        let path = self.file_path()?;
        let content = fs::read_to_string(path).ok()?;
        let code = content.trim();
        if code.is_empty() {
            None
        } else {
            Some(code.to_string())
        }
    }

    /// Persists the given code, creating the config directory if needed.
    /// Returns a notification key when the write fails; persistence problems
    /// must never interrupt a locale switch.
    pub fn save(&self, code: &str) -> Option<String> {
        let Some(path) = self.file_path() else {
            return Some("notification.language.pathError".to_string());
        };

        if let Some(parent) = path.parent() {
            if fs::create_dir_all(parent).is_err() {
                return Some("notification.language.dirError".to_string());
            }
        }

        if fs::write(&path, code).is_err() {
            return Some("notification.language.writeError".to_string());
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn save_and_load_round_trip() {
        let dir = tempdir().expect("create temp dir");
        let store = LanguageStore::new(Some(dir.path().to_path_buf()));

        assert!(store.save("tr").is_none());
        assert_eq!(store.load(), Some("tr".to_string()));
    }

    #[test]
    fn load_returns_none_when_file_missing() {
        let dir = tempdir().expect("create temp dir");
        let store = LanguageStore::new(Some(dir.path().to_path_buf()));
        assert_eq!(store.load(), None);
    }

    #[test]
    fn load_ignores_blank_content() {
        let dir = tempdir().expect("create temp dir");
        fs::write(dir.path().join(LANGUAGE_FILE), "  \n").expect("write file");

        let store = LanguageStore::new(Some(dir.path().to_path_buf()));
        assert_eq!(store.load(), None);
    }

    #[test]
    fn load_trims_surrounding_whitespace() {
        let dir = tempdir().expect("create temp dir");
        fs::write(dir.path().join(LANGUAGE_FILE), "ar\n").expect("write file");

        let store = LanguageStore::new(Some(dir.path().to_path_buf()));
        assert_eq!(store.load(), Some("ar".to_string()));
    }

    #[test]
    fn save_creates_parent_directories() {
        let dir = tempdir().expect("create temp dir");
        let nested = dir.path().join("deep").join("config");
        let store = LanguageStore::new(Some(nested.clone()));

        assert!(store.save("it").is_none());
        assert!(nested.join(LANGUAGE_FILE).exists());
    }

    #[test]
    fn file_content_is_the_bare_code() {
        let dir = tempdir().expect("create temp dir");
        let store = LanguageStore::new(Some(dir.path().to_path_buf()));
        store.save("en");

        let content = fs::read_to_string(dir.path().join(LANGUAGE_FILE)).expect("read file");
        assert_eq!(content, "en");
    }

    #[test]
    fn independent_stores_do_not_interfere() {
        let dir_a = tempdir().expect("create temp dir a");
        let dir_b = tempdir().expect("create temp dir b");
        let store_a = LanguageStore::new(Some(dir_a.path().to_path_buf()));
        let store_b = LanguageStore::new(Some(dir_b.path().to_path_buf()));

        store_a.save("tr");
        store_b.save("it");

        assert_eq!(store_a.load(), Some("tr".to_string()));
        assert_eq!(store_b.load(), Some("it".to_string()));
    }
}
