//! Console settings - persisted connection preferences.
//!
//! Settings are loaded from the platform config directory at startup. The
//! first run writes the defaults back so the operator has a file to edit.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use vetemr_client::DEFAULT_BASE_URL;

/// Console settings.
///
/// Serialized to TOML and stored in the user's config directory. Every field
/// has a default, so a partial file is valid.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Base URL of the records server API.
    pub server_url: String,

    /// Email offered as the default at the sign-in prompt.
    pub email: Option<String>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            server_url: DEFAULT_BASE_URL.to_string(),
            email: None,
        }
    }
}

impl Settings {
    /// Load settings from the default path, writing the defaults back on
    /// first run.
    pub fn load() -> Self {
        let path = Self::config_path();
        if path.exists() {
            return Self::load_from(&path);
        }
        let settings = Self::default();
        if let Err(error) = settings.save_to(&path) {
            tracing::debug!(%error, "first-run settings file not written");
        }
        settings
    }

    /// Load settings from a specific path.
    ///
    /// A missing or unreadable file yields the defaults.
    pub fn load_from(path: &Path) -> Self {
        std::fs::read_to_string(path)
            .ok()
            .and_then(|content| toml::from_str(&content).ok())
            .unwrap_or_default()
    }

    /// Save settings to a specific path, creating parent directories.
    pub fn save_to(&self, path: &Path) -> Result<(), String> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .map_err(|e| format!("Failed to create config directory: {e}"))?;
        }

        let content =
            toml::to_string_pretty(self).map_err(|e| format!("Failed to serialize settings: {e}"))?;

        std::fs::write(path, content).map_err(|e| format!("Failed to write settings: {e}"))
    }

    /// Get the default config file path.
    pub fn config_path() -> PathBuf {
        directories::ProjectDirs::from("com", "VetEMR", "vetemr")
            .map(|dirs| dirs.config_dir().join("settings.toml"))
            .unwrap_or_else(|| PathBuf::from("settings.toml"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn save_then_load_round_trips() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("settings.toml");
        let settings = Settings {
            server_url: "https://clinic.example/api".to_string(),
            email: Some("vet@clinic.example".to_string()),
        };

        settings.save_to(&path).unwrap();
        assert_eq!(Settings::load_from(&path), settings);
    }

    #[test]
    fn missing_file_yields_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let loaded = Settings::load_from(&dir.path().join("absent.toml"));
        assert_eq!(loaded.server_url, DEFAULT_BASE_URL);
        assert_eq!(loaded.email, None);
    }

    #[test]
    fn unreadable_file_yields_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.toml");
        std::fs::write(&path, "server_url = [not toml").unwrap();
        assert_eq!(Settings::load_from(&path), Settings::default());
    }

    #[test]
    fn partial_file_fills_missing_fields() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.toml");
        std::fs::write(&path, "email = \"front-desk@clinic.example\"\n").unwrap();

        let loaded = Settings::load_from(&path);
        assert_eq!(loaded.server_url, DEFAULT_BASE_URL);
        assert_eq!(loaded.email.as_deref(), Some("front-desk@clinic.example"));
    }
}
