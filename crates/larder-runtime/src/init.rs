use larder_store::{Backend, ItemStore};
use std::path::PathBuf;
use tracing::info;

use crate::config::{BackendKind, Config, StorageConfig};
use crate::workspace::open_backend;
use crate::{Error, Result};

#[derive(Debug, Clone, Default)]
pub struct InitOptions {
    pub backend: BackendKind,
    pub sync_path: Option<PathBuf>,
    /// Overwrite an existing `config.toml`.
    pub force: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigStatus {
    Created,
    Overwritten,
}

#[derive(Debug, Clone)]
pub struct InitResult {
    pub config_path: PathBuf,
    pub config_status: ConfigStatus,
    pub backend: BackendKind,
    pub storage_path: PathBuf,
    /// Items already present in the selected storage.
    pub item_count: usize,
}

pub(crate) fn run(data_dir: PathBuf, options: InitOptions) -> Result<InitResult> {
    let config_path = Config::path_in(&data_dir);
    let config_status = if config_path.exists() {
        if !options.force {
            return Err(Error::AlreadyInitialized(config_path));
        }
        ConfigStatus::Overwritten
    } else {
        ConfigStatus::Created
    };

    let config = Config {
        storage: StorageConfig {
            backend: options.backend,
            sync_path: options.sync_path,
            ..StorageConfig::default()
        },
    };

    // Opening the backend first means a broken storage location never
    // leaves a config behind.
    let backend: Box<dyn Backend> = open_backend(&data_dir, &config.storage)?;
    let store = ItemStore::open(backend)?;
    config.save_to(&config_path)?;

    let storage_path = config.storage.storage_path(&data_dir);
    info!(
        backend = %config.storage.backend,
        path = %storage_path.display(),
        "initialized larder workspace"
    );

    Ok(InitResult {
        config_path,
        config_status,
        backend: config.storage.backend,
        storage_path,
        item_count: store.len(),
    })
}
