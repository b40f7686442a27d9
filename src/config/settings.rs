// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Settings management for Sift
//!
//! Handles loading and saving settings from ~/.sift/settings.json

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

mod io;
mod migration;
mod validation;

/// Main settings structure, stored in ~/.sift/settings.json
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Settings {
    /// Where session listings come from and how many to show
    #[serde(default)]
    pub history: HistoryConfig,

    /// Appearance settings
    #[serde(default)]
    pub appearance: AppearanceConfig,
}

/// Session history settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HistoryConfig {
    /// Saved `GET /api/sessions` response to browse.
    /// Falls back to `$SIFT_HOME/sessions.json` when unset.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sessions_file: Option<PathBuf>,

    /// Maximum rows printed by `sift list` without `--limit`
    #[serde(default = "default_history_limit")]
    pub default_limit: usize,
}

impl Default for HistoryConfig {
    fn default() -> Self {
        Self {
            sessions_file: None,
            default_limit: default_history_limit(),
        }
    }
}

fn default_history_limit() -> usize {
    50
}

/// Appearance settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppearanceConfig {
    /// chrono format string for session timestamps
    #[serde(default = "default_date_format")]
    pub date_format: String,

    /// Prompts longer than this many characters are truncated in listings
    #[serde(default = "default_prompt_width")]
    pub prompt_width: usize,
}

impl Default for AppearanceConfig {
    fn default() -> Self {
        Self {
            date_format: default_date_format(),
            prompt_width: default_prompt_width(),
        }
    }
}

fn default_date_format() -> String {
    "%Y-%m-%d %H:%M".to_string()
}

fn default_prompt_width() -> usize {
    100
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_settings_default() {
        let settings = Settings::default();
        assert!(settings.history.sessions_file.is_none());
        assert_eq!(settings.history.default_limit, 50);
        assert_eq!(settings.appearance.date_format, "%Y-%m-%d %H:%M");
        assert_eq!(settings.appearance.prompt_width, 100);
    }

    #[test]
    fn test_settings_partial_json_uses_defaults() {
        let json = r#"{"history": {"sessions_file": "/tmp/s.json"}}"#;
        let settings: Settings = serde_json::from_str(json).unwrap();
        assert_eq!(
            settings.history.sessions_file,
            Some(PathBuf::from("/tmp/s.json"))
        );
        assert_eq!(settings.history.default_limit, 50);
        assert_eq!(settings.appearance.prompt_width, 100);
    }

    #[test]
    fn test_settings_serialization_skips_unset_file() {
        let value = serde_json::to_value(Settings::default()).unwrap();
        assert!(value["history"].get("sessions_file").is_none());
        assert_eq!(value["history"]["default_limit"], 50);
    }

    #[test]
    fn test_load_from_missing_file_is_default() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("settings.json");
        let settings = Settings::load_from(&path).unwrap();
        assert_eq!(settings.history.default_limit, 50);
    }

    #[test]
    fn test_save_and_load_roundtrip() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("nested").join("settings.json");

        let mut settings = Settings::default();
        settings.history.default_limit = 7;
        settings.appearance.date_format = "%d/%m/%Y".to_string();
        settings.save_to(&path).unwrap();

        let loaded = Settings::load_from(&path).unwrap();
        assert_eq!(loaded.history.default_limit, 7);
        assert_eq!(loaded.appearance.date_format, "%d/%m/%Y");
    }

    #[test]
    fn test_save_preserves_unknown_keys() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("settings.json");
        std::fs::write(
            &path,
            r#"{"history": {"default_limit": 5, "pinned": [1, 2]}, "theme": "dark"}"#,
        )
        .unwrap();

        let mut settings = Settings::load_from(&path).unwrap();
        settings.history.default_limit = 9;
        settings.save_to(&path).unwrap();

        let raw: serde_json::Value =
            serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(raw["theme"], "dark");
        assert_eq!(raw["history"]["pinned"][1], 2);
        assert_eq!(raw["history"]["default_limit"], 9);
    }

    #[test]
    fn test_save_clean_drops_unknown_keys() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("settings.json");
        std::fs::write(&path, r#"{"theme": "dark"}"#).unwrap();

        Settings::default().save_to_clean(&path).unwrap();

        let raw: serde_json::Value =
            serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
        assert!(raw.get("theme").is_none());
    }

    #[test]
    fn test_load_from_malformed_file_errors() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("settings.json");
        std::fs::write(&path, "{ nope").unwrap();
        assert!(Settings::load_from(&path).is_err());
    }

    #[test]
    fn test_sessions_path_prefers_configured_file() {
        let mut settings = Settings::default();
        settings.history.sessions_file = Some(PathBuf::from("/data/sessions.json"));
        assert_eq!(
            settings.sessions_path(),
            PathBuf::from("/data/sessions.json")
        );
    }
}
