// Item store: canonical in-memory collection plus a swappable persistence backend

pub mod backend;
mod error;
mod store;

// Public API
pub use backend::{
    Backend, LocalBackend, MemoryBackend, RemoteHandle, Subscription, SyncBackend, SyncEvent,
};
pub use error::{Error, ErrorKind, Result};
pub use store::ItemStore;
