// Ruleset Compare - Configuration
// Copyright (C) 2026 Christos Daggas
// SPDX-License-Identifier: MIT

//! Application settings management using a local JSON file.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

/// Environment variable overriding the configured server endpoint.
pub const ENDPOINT_ENV: &str = "RULESET_COMPARE_ENDPOINT";

/// Application settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppSettings {
    /// Base URL of the server providing `/comparisons`.
    #[serde(default = "default_endpoint")]
    pub endpoint: String,
    /// Timeout for the comparisons request, in seconds.
    #[serde(default = "default_timeout")]
    pub request_timeout_secs: u64,
    /// Window width.
    #[serde(default = "default_width")]
    pub window_width: i32,
    /// Window height.
    #[serde(default = "default_height")]
    pub window_height: i32,
    /// Whether window is maximized.
    #[serde(default)]
    pub is_maximized: bool,
    /// Theme preference: "system", "light", or "dark".
    #[serde(default = "default_theme")]
    pub theme: String,
}

fn default_endpoint() -> String { "http://127.0.0.1:8000".to_string() }
fn default_timeout() -> u64 { 10 }
fn default_width() -> i32 { 900 }
fn default_height() -> i32 { 720 }
fn default_theme() -> String { "system".to_string() }

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            endpoint: default_endpoint(),
            request_timeout_secs: default_timeout(),
            window_width: default_width(),
            window_height: default_height(),
            is_maximized: false,
            theme: default_theme(),
        }
    }
}

/// Settings manager that persists to a JSON file.
#[derive(Debug)]
pub struct Settings {
    settings: AppSettings,
    path: PathBuf,
}

impl Default for Settings {
    fn default() -> Self {
        Self::new()
    }
}

impl Settings {
    /// Create a new Settings instance, loading from the user config directory.
    pub fn new() -> Self {
        let path = dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("ruleset-compare")
            .join("settings.json");
        Self::load_from(path)
    }

    /// Load settings from `path`, falling back to defaults if missing or unreadable.
    pub fn load_from(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let settings = if path.exists() {
            match fs::read_to_string(&path) {
                Ok(content) => match serde_json::from_str(&content) {
                    Ok(s) => s,
                    Err(e) => {
                        warn!("Failed to parse settings: {}", e);
                        AppSettings::default()
                    }
                },
                Err(e) => {
                    warn!("Failed to read settings: {}", e);
                    AppSettings::default()
                }
            }
        } else {
            debug!("No settings at {}, using defaults", path.display());
            AppSettings::default()
        };

        Self { settings, path }
    }

    /// Save settings to disk.
    pub fn save(&self) {
        if let Some(parent) = self.path.parent() {
            let _ = fs::create_dir_all(parent);
        }

        match serde_json::to_string_pretty(&self.settings) {
            Ok(content) => {
                if let Err(e) = fs::write(&self.path, content) {
                    warn!("Failed to save settings: {}", e);
                }
            }
            Err(e) => {
                warn!("Failed to serialize settings: {}", e);
            }
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Server endpoint, honouring the environment override.
    pub fn endpoint(&self) -> String {
        Self::resolve_endpoint(std::env::var(ENDPOINT_ENV).ok(), &self.settings.endpoint)
    }

    fn resolve_endpoint(from_env: Option<String>, configured: &str) -> String {
        match from_env {
            Some(e) if !e.trim().is_empty() => e.trim().to_string(),
            _ => configured.to_string(),
        }
    }

    /// Endpoint stored in the settings file, ignoring the environment.
    pub fn configured_endpoint(&self) -> &str {
        &self.settings.endpoint
    }

    /// Set the server endpoint.
    pub fn set_endpoint(&mut self, endpoint: &str) {
        self.settings.endpoint = endpoint.to_string();
        self.save();
    }

    /// Timeout for the comparisons request.
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.settings.request_timeout_secs.max(1))
    }

    /// Get the window width.
    pub fn window_width(&self) -> i32 {
        self.settings.window_width
    }

    /// Get the window height.
    pub fn window_height(&self) -> i32 {
        self.settings.window_height
    }

    /// Record the window size.
    pub fn set_window_size(&mut self, width: i32, height: i32) {
        self.settings.window_width = width;
        self.settings.window_height = height;
        self.save();
    }

    /// Get whether the window is maximized.
    pub fn is_maximized(&self) -> bool {
        self.settings.is_maximized
    }

    /// Set whether the window is maximized.
    pub fn set_maximized(&mut self, maximized: bool) {
        self.settings.is_maximized = maximized;
        self.save();
    }

    /// Get the theme preference.
    pub fn theme(&self) -> &str {
        &self.settings.theme
    }

    /// Set the theme preference.
    pub fn set_theme(&mut self, theme: &str) {
        self.settings.theme = theme.to_string();
        self.save();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let settings = Settings::load_from(dir.path().join("settings.json"));
        assert_eq!(settings.settings, AppSettings::default());
        assert_eq!(settings.request_timeout(), Duration::from_secs(10));
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.json");
        fs::write(&path, r#"{"endpoint": "http://rules.example:9000", "theme": "dark"}"#).unwrap();

        let settings = Settings::load_from(&path);
        assert_eq!(settings.settings.endpoint, "http://rules.example:9000");
        assert_eq!(settings.theme(), "dark");
        assert_eq!(settings.window_width(), default_width());
    }

    #[test]
    fn test_corrupt_file_falls_back() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.json");
        fs::write(&path, "{ nope").unwrap();
        assert_eq!(Settings::load_from(&path).settings, AppSettings::default());
    }

    #[test]
    fn test_save_round_trips() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("settings.json");
        let mut settings = Settings::load_from(&path);
        settings.set_theme("light");
        settings.set_window_size(640, 480);

        let reloaded = Settings::load_from(&path);
        assert_eq!(reloaded.theme(), "light");
        assert_eq!(reloaded.window_width(), 640);
        assert_eq!(reloaded.window_height(), 480);
    }

    #[test]
    fn test_set_endpoint_persists_configured_value() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.json");
        let mut settings = Settings::load_from(&path);
        assert_eq!(settings.configured_endpoint(), default_endpoint());

        settings.set_endpoint("http://rules.example:9000");
        let reloaded = Settings::load_from(&path);
        assert_eq!(reloaded.configured_endpoint(), "http://rules.example:9000");
    }

    #[test]
    fn test_endpoint_override() {
        assert_eq!(
            Settings::resolve_endpoint(Some(" http://env:1 ".to_string()), "http://cfg"),
            "http://env:1"
        );
        assert_eq!(Settings::resolve_endpoint(Some(String::new()), "http://cfg"), "http://cfg");
        assert_eq!(Settings::resolve_endpoint(None, "http://cfg"), "http://cfg");
    }
}
