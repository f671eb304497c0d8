//! Settings for the voxlaunch host.
//!
//! The interpretation engine itself is configuration-free; these
//! settings cover the host concerns around it: where the apps file
//! lives and how the capture worker is sized.

use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use fs2::FileExt;
use serde::{Deserialize, Serialize};

/// Host settings, stored as TOML.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Path to the apps registry file (JSON name/path pairs)
    #[serde(default = "default_apps_file")]
    pub apps_file: PathBuf,

    /// Capacity of the bounded utterance queue between capture and
    /// interpretation
    #[serde(default = "default_queue_capacity")]
    pub queue_capacity: usize,

    /// Samples per audio frame read from the capture device
    #[serde(default = "default_frame_samples")]
    pub frame_samples: usize,
}

fn default_apps_file() -> PathBuf {
    PathBuf::from("apps.json")
}

fn default_queue_capacity() -> usize {
    8
}

fn default_frame_samples() -> usize {
    4096 // matches the 16kHz/16-bit mono capture format's usual buffer
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            apps_file: default_apps_file(),
            queue_capacity: default_queue_capacity(),
            frame_samples: default_frame_samples(),
        }
    }
}

impl Settings {
    /// Get the global config directory path (~/.voxlaunch/)
    pub fn global_config_dir() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".voxlaunch")
    }

    /// Get the global config file path (~/.voxlaunch/config.toml)
    pub fn global_config_path() -> PathBuf {
        Self::global_config_dir().join("config.toml")
    }

    /// Load settings from a file.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let settings: Settings = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        Ok(settings)
    }

    /// Load the global settings, falling back to defaults when no config
    /// file exists yet.
    pub fn load() -> Result<Self> {
        let global_path = Self::global_config_path();
        if !global_path.exists() {
            return Ok(Self::default());
        }
        Self::from_file(&global_path)
    }

    /// Save settings to a file with atomic write and file locking.
    ///
    /// An exclusive lock prevents concurrent writes; the temp-file plus
    /// rename pattern prevents corruption on crash.
    pub fn save_to_file(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create config directory: {}", parent.display())
            })?;
        }

        let content = toml::to_string_pretty(self).context("Failed to serialize config")?;

        let lock_path = path.with_extension("toml.lock");
        let lock_file = OpenOptions::new()
            .write(true)
            .create(true)
            .truncate(true)
            .open(&lock_path)
            .with_context(|| format!("Failed to create lock file: {}", lock_path.display()))?;
        lock_file
            .lock_exclusive()
            .context("Failed to acquire config lock")?;

        let temp_path = path.with_extension("toml.tmp");
        let mut temp_file = OpenOptions::new()
            .write(true)
            .create(true)
            .truncate(true)
            .open(&temp_path)
            .with_context(|| format!("Failed to create temp file: {}", temp_path.display()))?;

        temp_file
            .write_all(content.as_bytes())
            .context("Failed to write config content")?;
        temp_file.sync_all().context("Failed to sync config file")?;

        std::fs::rename(&temp_path, path)
            .with_context(|| format!("Failed to rename config file: {}", path.display()))?;

        // Lock is released when lock_file is dropped
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let settings = Settings::default();
        assert_eq!(settings.apps_file, PathBuf::from("apps.json"));
        assert_eq!(settings.queue_capacity, 8);
        assert_eq!(settings.frame_samples, 4096);
    }

    #[test]
    fn test_partial_config_fills_defaults() {
        let settings: Settings = toml::from_str("apps_file = \"/etc/voxlaunch/apps.json\"").unwrap();
        assert_eq!(settings.apps_file, PathBuf::from("/etc/voxlaunch/apps.json"));
        assert_eq!(settings.queue_capacity, 8);
    }

    #[test]
    fn test_save_and_reload() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");

        let mut settings = Settings::default();
        settings.queue_capacity = 16;
        settings.save_to_file(&path).unwrap();

        let loaded = Settings::from_file(&path).unwrap();
        assert_eq!(loaded.queue_capacity, 16);
    }
}
