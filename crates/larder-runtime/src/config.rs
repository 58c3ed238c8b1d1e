use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use std::time::Duration;

pub const CONFIG_FILE: &str = "config.toml";
pub const DATABASE_FILE: &str = "larder.db";
pub const SYNC_DOCUMENT_FILE: &str = "larder.json";

const DEFAULT_POLL_INTERVAL_MS: u64 = 500;

/// Resolve the workspace data directory path based on priority:
/// 1. Explicit path (with tilde expansion)
/// 2. LARDER_PATH environment variable (with tilde expansion)
/// 3. XDG data directory (recommended default)
/// 4. ~/.larder (fallback for systems without XDG)
pub fn resolve_workspace_path(explicit_path: Option<&str>) -> Result<PathBuf> {
    if let Some(path) = explicit_path {
        return Ok(expand_tilde(path));
    }

    if let Ok(env_path) = std::env::var("LARDER_PATH") {
        return Ok(expand_tilde(&env_path));
    }

    if let Some(data_dir) = dirs::data_dir() {
        return Ok(data_dir.join("larder"));
    }

    if let Some(home) = std::env::var_os("HOME") {
        return Ok(PathBuf::from(home).join(".larder"));
    }

    Err(Error::Config(
        "Could not determine data directory: no HOME directory or XDG data directory found"
            .to_string(),
    ))
}

/// Expand tilde (~) in paths to the user's home directory
pub fn expand_tilde(path: &str) -> PathBuf {
    if let Some(stripped) = path.strip_prefix("~/")
        && let Some(home) = std::env::var_os("HOME")
    {
        return PathBuf::from(home).join(stripped);
    }
    PathBuf::from(path)
}

/// Which persistence backend the item store is wired to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BackendKind {
    /// SQLite database on this device
    #[default]
    Local,
    /// Shared JSON document, watched for changes from other devices
    Sync,
}

impl BackendKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            BackendKind::Local => "local",
            BackendKind::Sync => "sync",
        }
    }
}

impl fmt::Display for BackendKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for BackendKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "local" => Ok(BackendKind::Local),
            "sync" => Ok(BackendKind::Sync),
            other => Err(Error::Config(format!(
                "Unknown backend '{}': expected 'local' or 'sync'",
                other
            ))),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StorageConfig {
    #[serde(default)]
    pub backend: BackendKind,

    /// Shared document for the sync backend. Defaults to `larder.json` in
    /// the data directory.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sync_path: Option<PathBuf>,

    #[serde(default = "default_poll_interval_ms")]
    pub poll_interval_ms: u64,
}

fn default_poll_interval_ms() -> u64 {
    DEFAULT_POLL_INTERVAL_MS
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            backend: BackendKind::default(),
            sync_path: None,
            poll_interval_ms: DEFAULT_POLL_INTERVAL_MS,
        }
    }
}

impl StorageConfig {
    pub fn poll_interval(&self) -> Duration {
        Duration::from_millis(self.poll_interval_ms)
    }

    /// Location of the shared document, relative paths resolved against
    /// `data_dir`.
    pub fn sync_document(&self, data_dir: &Path) -> PathBuf {
        match &self.sync_path {
            Some(path) => {
                let expanded = expand_tilde(&path.to_string_lossy());
                if expanded.is_absolute() {
                    expanded
                } else {
                    data_dir.join(expanded)
                }
            }
            None => data_dir.join(SYNC_DOCUMENT_FILE),
        }
    }

    /// Where items of this configuration live on disk.
    pub fn storage_path(&self, data_dir: &Path) -> PathBuf {
        match self.backend {
            BackendKind::Local => data_dir.join(DATABASE_FILE),
            BackendKind::Sync => self.sync_document(data_dir),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub storage: StorageConfig,
}

impl Config {
    pub fn path_in(data_dir: &Path) -> PathBuf {
        data_dir.join(CONFIG_FILE)
    }

    /// Load the configuration; a missing file yields the defaults.
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    fn validate(&self) -> Result<()> {
        if self.storage.poll_interval_ms == 0 {
            return Err(Error::Config(
                "storage.poll_interval_ms must be greater than 0".to_string(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_config_default() {
        let config = Config::default();
        assert_eq!(config.storage.backend, BackendKind::Local);
        assert_eq!(config.storage.sync_path, None);
        assert_eq!(config.storage.poll_interval_ms, 500);
    }

    #[test]
    fn test_config_save_and_load() -> Result<()> {
        let temp_dir = TempDir::new()?;
        let config_path = temp_dir.path().join("nested").join("config.toml");

        let config = Config {
            storage: StorageConfig {
                backend: BackendKind::Sync,
                sync_path: Some(PathBuf::from("/mnt/shared/larder.json")),
                poll_interval_ms: 250,
            },
        };

        config.save_to(&config_path)?;
        assert!(config_path.exists());

        let loaded = Config::load_from(&config_path)?;
        assert_eq!(loaded, config);

        Ok(())
    }

    #[test]
    fn test_load_nonexistent_returns_default() -> Result<()> {
        let temp_dir = TempDir::new()?;
        let config = Config::load_from(&temp_dir.path().join("nonexistent.toml"))?;
        assert_eq!(config, Config::default());
        Ok(())
    }

    #[test]
    fn test_partial_file_fills_defaults() -> Result<()> {
        let temp_dir = TempDir::new()?;
        let path = temp_dir.path().join("config.toml");
        std::fs::write(&path, "[storage]\nbackend = \"sync\"\n")?;

        let config = Config::load_from(&path)?;
        assert_eq!(config.storage.backend, BackendKind::Sync);
        assert_eq!(config.storage.poll_interval_ms, 500);
        Ok(())
    }

    #[test]
    fn test_unknown_backend_is_config_error() -> Result<()> {
        let temp_dir = TempDir::new()?;
        let path = temp_dir.path().join("config.toml");
        std::fs::write(&path, "[storage]\nbackend = \"cloud\"\n")?;

        let err = Config::load_from(&path).unwrap_err();
        assert!(matches!(err, Error::Config(_)));
        Ok(())
    }

    #[test]
    fn test_zero_poll_interval_rejected() -> Result<()> {
        let temp_dir = TempDir::new()?;
        let path = temp_dir.path().join("config.toml");
        std::fs::write(&path, "[storage]\npoll_interval_ms = 0\n")?;

        assert!(Config::load_from(&path).is_err());
        Ok(())
    }

    #[test]
    fn test_storage_paths() {
        let data_dir = Path::new("/data/larder");
        let mut storage = StorageConfig::default();
        assert_eq!(
            storage.storage_path(data_dir),
            PathBuf::from("/data/larder/larder.db")
        );

        storage.backend = BackendKind::Sync;
        assert_eq!(
            storage.storage_path(data_dir),
            PathBuf::from("/data/larder/larder.json")
        );

        storage.sync_path = Some(PathBuf::from("shared/items.json"));
        assert_eq!(
            storage.storage_path(data_dir),
            PathBuf::from("/data/larder/shared/items.json")
        );
    }

    #[test]
    fn test_backend_kind_parse() {
        assert_eq!("Local".parse::<BackendKind>().unwrap(), BackendKind::Local);
        assert_eq!("sync".parse::<BackendKind>().unwrap(), BackendKind::Sync);
        assert!("firebase".parse::<BackendKind>().is_err());
    }

    #[test]
    fn test_explicit_path_wins() {
        let path = resolve_workspace_path(Some("/explicit/larder")).unwrap();
        assert_eq!(path, PathBuf::from("/explicit/larder"));
    }

    #[test]
    fn test_expand_tilde() {
        if let Some(home) = std::env::var_os("HOME") {
            assert_eq!(expand_tilde("~/larder"), PathBuf::from(home).join("larder"));
        }
        assert_eq!(expand_tilde("/abs/path"), PathBuf::from("/abs/path"));
    }
}
