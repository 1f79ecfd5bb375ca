//! Settings storage
//!
//! Manages persistence of UI preferences, including demo playback timing.

use crate::storage::{get_data_dir, StorageError};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Playback options for the scripted chat demo
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DemoSettings {
    /// Advance to the next scenario when a script finishes
    #[serde(default = "default_auto_play")]
    pub auto_play: bool,
    /// How long the typing indicator shows before an assistant line
    #[serde(default = "default_typing_lead_ms")]
    pub typing_lead_ms: u64,
    /// Pause after the last line before advancing
    #[serde(default = "default_advance_delay_ms")]
    pub advance_delay_ms: u64,
}

fn default_auto_play() -> bool {
    true
}

fn default_typing_lead_ms() -> u64 {
    1000
}

fn default_advance_delay_ms() -> u64 {
    4000
}

impl Default for DemoSettings {
    fn default() -> Self {
        Self {
            auto_play: default_auto_play(),
            typing_lead_ms: default_typing_lead_ms(),
            advance_delay_ms: default_advance_delay_ms(),
        }
    }
}

/// UI settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UiSettings {
    /// UI theme: "dark" or "light"
    #[serde(default = "default_theme")]
    pub theme: String,
    #[serde(default)]
    pub demo: DemoSettings,
    /// Open the privacy panel on startup
    #[serde(default)]
    pub show_privacy_panel: bool,
}

fn default_theme() -> String {
    "dark".to_string()
}

impl Default for UiSettings {
    fn default() -> Self {
        Self {
            theme: default_theme(),
            demo: DemoSettings::default(),
            show_privacy_panel: false,
        }
    }
}

impl UiSettings {
    /// Validate settings values
    ///
    /// Resets unknown values and clamps timings to sane ranges.
    pub fn validate(&mut self) {
        if self.theme != "dark" && self.theme != "light" {
            self.theme = default_theme();
        }
        self.demo.typing_lead_ms = self.demo.typing_lead_ms.min(5_000);
        self.demo.advance_delay_ms = self.demo.advance_delay_ms.clamp(500, 60_000);
    }
}

/// Get the settings file path
fn get_settings_path() -> Result<PathBuf, StorageError> {
    Ok(get_data_dir()?.join("settings.json"))
}

/// Load settings from disk
///
/// Returns default settings if the file doesn't exist or is corrupted
pub fn load_settings() -> UiSettings {
    match get_settings_path().and_then(|path| load_settings_from(&path)) {
        Ok(settings) => settings,
        Err(e) => {
            tracing::warn!("Failed to load settings, using defaults: {}", e);
            UiSettings::default()
        }
    }
}

/// Load and validate settings from `path`; a missing file yields defaults.
pub fn load_settings_from(path: &Path) -> Result<UiSettings, StorageError> {
    if !path.exists() {
        tracing::info!("Settings file not found, using defaults");
        return Ok(UiSettings::default());
    }

    let json = fs::read_to_string(path)?;
    let mut settings: UiSettings = serde_json::from_str(&json)?;
    settings.validate();

    tracing::debug!("Loaded settings from {}", path.display());
    Ok(settings)
}

/// Save settings to disk
pub fn save_settings(settings: &UiSettings) -> Result<(), StorageError> {
    save_settings_to(&get_settings_path()?, settings)
}

pub fn save_settings_to(path: &Path, settings: &UiSettings) -> Result<(), StorageError> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }

    let json = serde_json::to_string_pretty(settings)?;
    fs::write(path, json)?;

    tracing::debug!("Saved settings to {}", path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_settings() {
        let settings = UiSettings::default();
        assert_eq!(settings.theme, "dark");
        assert!(settings.demo.auto_play);
        assert_eq!(settings.demo.typing_lead_ms, 1000);
        assert_eq!(settings.demo.advance_delay_ms, 4000);
        assert!(!settings.show_privacy_panel);
    }

    #[test]
    fn test_settings_validation() {
        let mut settings = UiSettings::default();

        settings.theme = "invalid".to_string();
        settings.validate();
        assert_eq!(settings.theme, "dark");

        settings.demo.typing_lead_ms = 99_999;
        settings.demo.advance_delay_ms = 10;
        settings.validate();
        assert_eq!(settings.demo.typing_lead_ms, 5_000);
        assert_eq!(settings.demo.advance_delay_ms, 500);
    }

    #[test]
    fn test_missing_fields_use_defaults() {
        let settings: UiSettings =
            serde_json::from_str(r#"{"theme":"light","demo":{"auto_play":false}}"#).unwrap();
        assert_eq!(settings.theme, "light");
        assert!(!settings.demo.auto_play);
        assert_eq!(settings.demo.advance_delay_ms, 4000);
    }

    #[test]
    fn test_settings_persistence() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("settings.json");

        let mut settings = UiSettings::default();
        settings.theme = "light".to_string();
        settings.demo.advance_delay_ms = 2500;
        save_settings_to(&path, &settings).unwrap();

        let loaded = load_settings_from(&path).unwrap();
        assert_eq!(loaded, settings);
    }

    #[test]
    fn test_missing_file_yields_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let loaded = load_settings_from(&dir.path().join("absent.json")).unwrap();
        assert_eq!(loaded, UiSettings::default());
    }

    #[test]
    fn test_corrupt_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.json");
        fs::write(&path, "{not json").unwrap();
        assert!(matches!(load_settings_from(&path), Err(StorageError::Json(_))));
    }
}
