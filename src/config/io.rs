//! Configuration file I/O operations

use std::fs::{self, File, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use fs2::FileExt;

use super::Config;

impl Config {
    /// Get the global config directory path (~/.cyberforge/)
    pub fn global_config_dir() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".cyberforge")
    }

    /// Get the global config file path (~/.cyberforge/config.toml)
    pub fn global_config_path() -> PathBuf {
        Self::global_config_dir().join("config.toml")
    }

    /// Load configuration from a file
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let config: Config = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        Ok(config)
    }

    /// Save configuration, replacing any existing file in one step
    pub fn save_to_file(&self, path: &Path) -> Result<()> {
        let content = toml::to_string_pretty(self).context("Failed to serialize config")?;
        write_replacing(path, content.as_bytes())
    }

    /// Load the config at `path`, writing defaults there first if it is missing
    pub fn load_or_init(path: &Path) -> Result<Self> {
        if !path.exists() {
            tracing::info!("No config at {}, writing defaults", path.display());
            Self::default().save_to_file(path)?;
        }
        Self::from_file(path)
    }

    /// Load global configuration from ~/.cyberforge/config.toml
    /// If no config exists, auto-creates one with defaults.
    pub fn load() -> Result<Self> {
        Self::load_or_init(&Self::global_config_path())
    }
}

/// Open `path` for writing from scratch
fn open_truncated(path: &Path) -> Result<File> {
    OpenOptions::new()
        .write(true)
        .create(true)
        .truncate(true)
        .open(path)
        .with_context(|| format!("Failed to open {}", path.display()))
}

/// Write `bytes` to `path` under an exclusive lock on `<path>.lock`.
///
/// Readers see either the old file or the new one: the content lands in
/// `<path>.tmp` first and is renamed over the target. The lock is held until
/// the guard file drops at the end of this function.
fn write_replacing(path: &Path, bytes: &[u8]) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create config directory: {}", parent.display()))?;
    }

    let guard = open_truncated(&path.with_extension("toml.lock"))?;
    guard
        .lock_exclusive()
        .context("Failed to acquire config lock")?;

    let staged = path.with_extension("toml.tmp");
    let mut file = open_truncated(&staged)?;
    file.write_all(bytes)
        .and_then(|()| file.sync_all())
        .with_context(|| format!("Failed to write {}", staged.display()))?;

    fs::rename(&staged, path)
        .with_context(|| format!("Failed to replace config file: {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::BackendKind;
    use tempfile::tempdir;

    #[test]
    fn test_save_and_reload() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nested").join("config.toml");

        let mut config = Config::default();
        config.backend.kind = BackendKind::Local;
        config.activity.max_entries = 7;
        config.save_to_file(&path).unwrap();

        let loaded = Config::from_file(&path).unwrap();
        assert_eq!(loaded, config);
        assert!(!path.with_extension("toml.tmp").exists());
    }

    #[test]
    fn test_load_or_init_writes_defaults() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.toml");

        let config = Config::load_or_init(&path).unwrap();
        assert!(path.exists());
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_save_replaces_existing_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "stale = true\n".repeat(200)).unwrap();

        let config = Config::default();
        config.save_to_file(&path).unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        assert!(!content.contains("stale"));
        assert_eq!(Config::from_file(&path).unwrap(), config);
    }

    #[test]
    fn test_concurrent_saves_leave_valid_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.toml");

        let handles: Vec<_> = (1..=4usize)
            .map(|n| {
                let path = path.clone();
                std::thread::spawn(move || {
                    let mut config = Config::default();
                    config.activity.max_entries = n * 10;
                    config.save_to_file(&path).unwrap();
                })
            })
            .collect();
        for handle in handles {
            handle.join().unwrap();
        }

        let loaded = Config::from_file(&path).unwrap();
        assert!([10, 20, 30, 40].contains(&loaded.activity.max_entries));
    }

    #[test]
    fn test_invalid_file_reports_path() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[backend\nkind = ").unwrap();

        let err = Config::from_file(&path).unwrap_err();
        assert!(format!("{:#}", err).contains("config.toml"));
    }
}
