use crate::domain::{Locale, Theme};
use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// User preferences stored in settings.json
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub locale: Locale,
    #[serde(default)]
    pub theme: Theme,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            username: String::new(),
            locale: Locale::En,
            theme: Theme::Light,
        }
    }
}

/// Load settings from settings.json, falling back to defaults when the
/// file doesn't exist yet
pub fn load_settings<P: AsRef<Path>>(path: P) -> Result<Settings> {
    let content = crate::persistence::read_file(path)?;

    if content.is_empty() {
        return Ok(Settings::default());
    }

    let settings: Settings = serde_json::from_str(&content)?;
    Ok(settings)
}

/// Save settings to settings.json
pub fn save_settings<P: AsRef<Path>>(path: P, settings: &Settings) -> Result<()> {
    let json = serde_json::to_string_pretty(settings)?;
    crate::persistence::atomic_write(path, &json)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_load_nonexistent_settings() {
        let temp_dir = tempdir().unwrap();
        let path = temp_dir.path().join("settings.json");

        let settings = load_settings(&path).unwrap();
        assert_eq!(settings.username, "");
        assert_eq!(settings.locale, Locale::En);
        assert_eq!(settings.theme, Theme::Light);
    }

    #[test]
    fn test_save_and_load_settings() {
        let temp_dir = tempdir().unwrap();
        let path = temp_dir.path().join("settings.json");

        let settings = Settings {
            username: "maya".to_string(),
            locale: Locale::Fr,
            theme: Theme::Dark,
        };
        save_settings(&path, &settings).unwrap();

        let loaded = load_settings(&path).unwrap();
        assert_eq!(loaded.username, "maya");
        assert_eq!(loaded.locale, Locale::Fr);
        assert_eq!(loaded.theme, Theme::Dark);
    }

    #[test]
    fn test_partial_file_uses_field_defaults() {
        let temp_dir = tempdir().unwrap();
        let path = temp_dir.path().join("settings.json");
        std::fs::write(&path, r#"{"username": "sam"}"#).unwrap();

        let loaded = load_settings(&path).unwrap();
        assert_eq!(loaded.username, "sam");
        assert_eq!(loaded.locale, Locale::En);
        assert_eq!(loaded.theme, Theme::Light);
    }
}
