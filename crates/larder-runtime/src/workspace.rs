use larder_store::{Backend, ItemStore, LocalBackend, SyncBackend};
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::config::{BackendKind, Config, DATABASE_FILE, StorageConfig};
use crate::controller::Controller;
use crate::init::{self, InitOptions, InitResult};
use crate::Result;

/// An opened data directory: its configuration and a controller over the
/// configured backend.
pub struct Larder {
    data_dir: PathBuf,
    config: Config,
    controller: Controller,
}

impl Larder {
    /// Write `config.toml` for a new (or, with `force`, existing) data
    /// directory.
    pub fn init(data_dir: impl Into<PathBuf>, options: InitOptions) -> Result<InitResult> {
        init::run(data_dir.into(), options)
    }

    /// Open the data directory. Without a `config.toml` the local backend
    /// is used.
    pub fn open(data_dir: impl Into<PathBuf>) -> Result<Self> {
        let data_dir = data_dir.into();
        let config = Config::load_from(&Config::path_in(&data_dir))?;
        let store = ItemStore::open(open_backend(&data_dir, &config.storage)?)?;
        debug!(
            data_dir = %data_dir.display(),
            backend = store.backend_name(),
            items = store.len(),
            "opened larder"
        );

        Ok(Self {
            data_dir,
            config,
            controller: Controller::new(store),
        })
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn storage_path(&self) -> PathBuf {
        self.config.storage.storage_path(&self.data_dir)
    }

    pub fn controller(&self) -> &Controller {
        &self.controller
    }

    pub fn controller_mut(&mut self) -> &mut Controller {
        &mut self.controller
    }
}

pub(crate) fn open_backend(data_dir: &Path, storage: &StorageConfig) -> Result<Box<dyn Backend>> {
    let backend: Box<dyn Backend> = match storage.backend {
        BackendKind::Local => Box::new(LocalBackend::open(&data_dir.join(DATABASE_FILE))?),
        BackendKind::Sync => Box::new(
            SyncBackend::new(storage.sync_document(data_dir))
                .with_poll_interval(storage.poll_interval()),
        ),
    };
    Ok(backend)
}
