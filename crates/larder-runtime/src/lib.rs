pub mod config;
pub mod controller;
pub mod error;
pub mod init;
pub mod workspace;

pub use config::{BackendKind, Config, StorageConfig, resolve_workspace_path};
pub use controller::{Controller, Modal, SaveOutcome, SyncUpdate};
pub use error::{Error, Result};
pub use init::{ConfigStatus, InitOptions, InitResult};
pub use workspace::Larder;
