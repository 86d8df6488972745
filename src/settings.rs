//! Persisted application settings
//!
//! JSON file under the platform config dir. Loading never fails: a missing
//! file produces defaults (written back for the user to edit), a malformed
//! file produces defaults with a warning. Env vars override the file, and
//! everything is clamped to safe ranges afterwards.

use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use tracing::{error, info, warn};

use crate::constants::{config, timing, validation};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Auto-advance the carousel (off unless asked for)
    #[serde(default)]
    pub autoplay: bool,

    #[serde(default = "default_autoplay_interval_ms")]
    pub autoplay_interval_ms: u64,

    /// Animate the hero headline
    #[serde(default = "default_typewriter")]
    pub typewriter: bool,
}

fn default_autoplay_interval_ms() -> u64 {
    timing::AUTOPLAY_DEFAULT_MS
}

fn default_typewriter() -> bool {
    true
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            autoplay: false,
            autoplay_interval_ms: default_autoplay_interval_ms(),
            typewriter: default_typewriter(),
        }
    }
}

impl Settings {
    fn config_path() -> PathBuf {
        let mut path = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
        path.push(config::APP_DIR);
        path.push(config::FILENAME);
        path
    }

    /// Load from the config dir, apply env overrides, clamp. Writes a fresh
    /// file when none exists so the user has something to edit.
    pub fn load() -> Self {
        let path = Self::config_path();
        let mut settings = match fs::read_to_string(&path) {
            Ok(contents) => match serde_json::from_str(&contents) {
                Ok(settings) => settings,
                Err(err) => {
                    warn!(path = %path.display(), error = %err, "malformed settings file, using defaults");
                    Self::default()
                }
            },
            Err(_) => {
                let settings = Self::default();
                if let Err(err) = settings.save_to(&path) {
                    error!(error = ?err, "failed to write default settings");
                } else {
                    info!(path = %path.display(), "generated settings file (env vars still override)");
                }
                settings
            }
        };
        settings.apply_env_overrides();
        settings.validate_and_clamp();
        settings
    }

    pub fn load_from(path: &Path) -> Self {
        let mut settings = match fs::read_to_string(path) {
            Ok(contents) => serde_json::from_str(&contents).unwrap_or_else(|err| {
                warn!(path = %path.display(), error = %err, "malformed settings file, using defaults");
                Self::default()
            }),
            Err(_) => Self::default(),
        };
        settings.validate_and_clamp();
        settings
    }

    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_path())
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).context(format!(
                "Failed to create config directory: {}",
                parent.display()
            ))?;
        }
        let contents =
            serde_json::to_string_pretty(self).context("Failed to serialize settings")?;
        fs::write(path, contents)
            .context(format!("Failed to write settings file to {}", path.display()))?;
        Ok(())
    }

    fn apply_env_overrides(&mut self) {
        if let Ok(raw) = env::var("FOLIO_AUTOPLAY") {
            match raw.trim().parse::<bool>() {
                Ok(enabled) => self.autoplay = enabled,
                Err(_) => match raw.trim() {
                    "1" => self.autoplay = true,
                    "0" => self.autoplay = false,
                    other => error!(value = %other, "failed to parse FOLIO_AUTOPLAY"),
                },
            }
        }
        if let Ok(raw) = env::var("FOLIO_AUTOPLAY_INTERVAL_MS") {
            match raw.trim().parse::<u64>() {
                Ok(ms) => self.autoplay_interval_ms = ms,
                Err(err) => {
                    error!(value = %raw, error = %err, "failed to parse FOLIO_AUTOPLAY_INTERVAL_MS")
                }
            }
        }
    }

    /// Clamp user-editable values to safe ranges
    pub fn validate_and_clamp(&mut self) {
        if self.autoplay_interval_ms < validation::MIN_AUTOPLAY_MS {
            warn!(
                interval_ms = self.autoplay_interval_ms,
                min = validation::MIN_AUTOPLAY_MS,
                "autoplay interval below minimum, clamping"
            );
            self.autoplay_interval_ms = validation::MIN_AUTOPLAY_MS;
        } else if self.autoplay_interval_ms > validation::MAX_AUTOPLAY_MS {
            warn!(
                interval_ms = self.autoplay_interval_ms,
                max = validation::MAX_AUTOPLAY_MS,
                "autoplay interval exceeds maximum, clamping"
            );
            self.autoplay_interval_ms = validation::MAX_AUTOPLAY_MS;
        }
    }

    pub fn autoplay_interval(&self) -> Duration {
        Duration::from_millis(self.autoplay_interval_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let settings = Settings::default();
        assert!(!settings.autoplay);
        assert_eq!(settings.autoplay_interval_ms, 5000);
        assert!(settings.typewriter);
    }

    #[test]
    fn test_clamp_interval_bounds() {
        let mut settings = Settings {
            autoplay_interval_ms: 10,
            ..Settings::default()
        };
        settings.validate_and_clamp();
        assert_eq!(settings.autoplay_interval_ms, validation::MIN_AUTOPLAY_MS);

        settings.autoplay_interval_ms = 1_000_000;
        settings.validate_and_clamp();
        assert_eq!(settings.autoplay_interval_ms, validation::MAX_AUTOPLAY_MS);
    }

    #[test]
    fn test_save_and_load_round_trip() {
        let dir = tempfile::tempdir().expect("temp dir");
        let path = dir.path().join("settings.json");
        let settings = Settings {
            autoplay: true,
            autoplay_interval_ms: 3000,
            typewriter: false,
        };
        settings.save_to(&path).expect("save");

        let loaded = Settings::load_from(&path);
        assert!(loaded.autoplay);
        assert_eq!(loaded.autoplay_interval_ms, 3000);
        assert!(!loaded.typewriter);
    }

    #[test]
    fn test_malformed_file_yields_defaults() {
        let dir = tempfile::tempdir().expect("temp dir");
        let path = dir.path().join("settings.json");
        fs::write(&path, "{broken").expect("write");
        let loaded = Settings::load_from(&path);
        assert!(!loaded.autoplay);
        assert_eq!(loaded.autoplay_interval_ms, 5000);
    }

    #[test]
    fn test_missing_fields_get_defaults() {
        let dir = tempfile::tempdir().expect("temp dir");
        let path = dir.path().join("settings.json");
        fs::write(&path, r#"{"autoplay": true}"#).expect("write");
        let loaded = Settings::load_from(&path);
        assert!(loaded.autoplay);
        assert_eq!(loaded.autoplay_interval_ms, 5000);
        assert!(loaded.typewriter);
    }

    #[test]
    fn test_load_clamps_file_values() {
        let dir = tempfile::tempdir().expect("temp dir");
        let path = dir.path().join("settings.json");
        fs::write(&path, r#"{"autoplay_interval_ms": 5}"#).expect("write");
        let loaded = Settings::load_from(&path);
        assert_eq!(loaded.autoplay_interval_ms, validation::MIN_AUTOPLAY_MS);
    }
}
