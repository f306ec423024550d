//! User settings stored as settings.json in the app data directory

use crate::constants::{DEFAULT_LANG, DEFAULT_SERVER_URL, DEFAULT_TIMEOUT_SECS};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;
use tracing::{debug, warn};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    // Window geometry
    pub window_x: Option<f32>,
    pub window_y: Option<f32>,
    pub window_w: Option<f32>,
    pub window_h: Option<f32>,

    // Server
    pub server_url: String,
    pub request_timeout_secs: u64,

    // Input
    pub last_lang: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            window_x: None,
            window_y: None,
            window_w: None,
            window_h: None,
            server_url: DEFAULT_SERVER_URL.to_string(),
            request_timeout_secs: DEFAULT_TIMEOUT_SECS,
            last_lang: DEFAULT_LANG.to_string(),
        }
    }
}

impl Settings {
    pub fn load(data_dir: &Path) -> Self {
        let path = data_dir.join("settings.json");
        match std::fs::read_to_string(&path) {
            Ok(s) => match serde_json::from_str(&s) {
                Ok(settings) => {
                    debug!(path = %path.display(), "Settings loaded");
                    settings
                }
                Err(e) => {
                    warn!(error = %e, "Failed to parse settings, using defaults");
                    Self::default()
                }
            },
            Err(_) => {
                debug!("No settings file found, using defaults");
                Self::default()
            }
        }
    }

    pub fn save(&self, data_dir: &Path) {
        let path = data_dir.join("settings.json");
        match serde_json::to_string_pretty(self) {
            Ok(json) => {
                if let Err(e) = std::fs::write(&path, json) {
                    warn!(error = %e, "Failed to save settings");
                }
            }
            Err(e) => warn!(error = %e, "Failed to serialize settings"),
        }
    }

    /// Request timeout, never shorter than one second
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs.max(1))
    }

    pub fn server_url_or_default(&self) -> &str {
        let url = self.server_url.trim();
        if url.is_empty() {
            DEFAULT_SERVER_URL
        } else {
            url
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_yields_defaults() {
        let dir = tempfile::tempdir().unwrap();
        assert_eq!(Settings::load(dir.path()), Settings::default());
    }

    #[test]
    fn save_then_load_keeps_values() {
        let dir = tempfile::tempdir().unwrap();
        let settings = Settings {
            window_w: Some(900.0),
            window_h: Some(640.0),
            server_url: "http://classifier.local:9000".into(),
            request_timeout_secs: 5,
            last_lang: "de".into(),
            ..Settings::default()
        };
        settings.save(dir.path());
        assert_eq!(Settings::load(dir.path()), settings);
    }

    #[test]
    fn corrupt_file_yields_defaults() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("settings.json"), "{ nope").unwrap();
        assert_eq!(Settings::load(dir.path()), Settings::default());
    }

    #[test]
    fn partial_file_fills_in_defaults() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("settings.json"), r#"{"last_lang":"es"}"#).unwrap();
        let settings = Settings::load(dir.path());
        assert_eq!(settings.last_lang, "es");
        assert_eq!(settings.server_url, DEFAULT_SERVER_URL);
        assert_eq!(settings.request_timeout_secs, DEFAULT_TIMEOUT_SECS);
    }

    #[test]
    fn blank_server_url_and_zero_timeout_fall_back() {
        let settings = Settings {
            server_url: "  ".into(),
            request_timeout_secs: 0,
            ..Settings::default()
        };
        assert_eq!(settings.server_url_or_default(), DEFAULT_SERVER_URL);
        assert_eq!(settings.request_timeout(), Duration::from_secs(1));
    }
}
