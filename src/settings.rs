use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::{fs, path::PathBuf};

const ENABLE_LOGS: bool = true;

use crate::log_warn;

/// Env var pointing at the JSON settings file.
pub const SETTINGS_ENV: &str = "VIBE_CLOCK_SETTINGS";
/// Env var that turns on debug-level logs.
pub const DEBUG_ENV: &str = "VIBE_CLOCK_DEBUG";

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum DriverKind {
    Audio,
    Log,
}

impl Default for DriverKind {
    fn default() -> Self {
        DriverKind::Log
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct HapticSettings {
    pub driver: DriverKind,
    /// Pitch used when pulses are rendered as sound.
    pub tone_hz: f32,
    /// 0.0 to 1.0
    pub volume: f32,
}

impl Default for HapticSettings {
    fn default() -> Self {
        Self {
            driver: DriverKind::default(),
            tone_hz: 180.0,
            volume: 0.6,
        }
    }
}

pub struct SettingsStore {
    path: Option<PathBuf>,
    data: HapticSettings,
}

impl SettingsStore {
    pub fn new(path: PathBuf) -> Result<Self> {
        let data = if path.exists() {
            let contents = fs::read_to_string(&path)
                .with_context(|| format!("Failed to read settings from {}", path.display()))?;
            serde_json::from_str(&contents).unwrap_or_else(|err| {
                log_warn!("ignoring malformed settings in {}: {}", path.display(), err);
                HapticSettings::default()
            })
        } else {
            HapticSettings::default()
        };

        Ok(Self {
            path: Some(path),
            data,
        })
    }

    /// Loads from `VIBE_CLOCK_SETTINGS` if set, otherwise defaults.
    pub fn from_env() -> Result<Self> {
        match std::env::var_os(SETTINGS_ENV) {
            Some(path) => Self::new(PathBuf::from(path)),
            None => Ok(Self {
                path: None,
                data: HapticSettings::default(),
            }),
        }
    }

    pub fn path(&self) -> Option<&PathBuf> {
        self.path.as_ref()
    }

    pub fn haptics(&self) -> HapticSettings {
        let mut settings = self.data.clone();
        settings.volume = settings.volume.clamp(0.0, 1.0);
        settings
    }
}

pub fn debug_mode() -> bool {
    std::env::var(DEBUG_ENV)
        .map(|value| value == "1" || value.eq_ignore_ascii_case("true"))
        .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_settings(name: &str, contents: &str) -> PathBuf {
        let path = std::env::temp_dir().join(format!(
            "vibe-clock-{}-{}.json",
            name,
            std::process::id()
        ));
        fs::write(&path, contents).unwrap();
        path
    }

    #[test]
    fn test_missing_file_uses_defaults() {
        let path = std::env::temp_dir().join("vibe-clock-does-not-exist.json");
        let store = SettingsStore::new(path).unwrap();
        assert_eq!(store.haptics(), HapticSettings::default());
    }

    #[test]
    fn test_reads_partial_file() {
        let path = temp_settings("partial", r#"{ "driver": "audio", "tone_hz": 220.0 }"#);
        let store = SettingsStore::new(path.clone()).unwrap();
        let haptics = store.haptics();
        assert_eq!(haptics.driver, DriverKind::Audio);
        assert_eq!(haptics.tone_hz, 220.0);
        assert_eq!(haptics.volume, 0.6);
        fs::remove_file(path).unwrap();
    }

    #[test]
    fn test_unparsable_file_falls_back() {
        let path = temp_settings("garbage", "not json");
        let store = SettingsStore::new(path.clone()).unwrap();
        assert_eq!(store.haptics(), HapticSettings::default());
        fs::remove_file(path).unwrap();
    }

    #[test]
    fn test_volume_is_clamped() {
        let path = temp_settings("loud", r#"{ "volume": 3.5 }"#);
        let store = SettingsStore::new(path.clone()).unwrap();
        assert_eq!(store.haptics().volume, 1.0);
        fs::remove_file(path).unwrap();
    }
}
