// NOTE: Backend Design Rationale
//
// Why one trait with per-item writes (not "save the whole list")?
// - The sync document is shared with other devices; rewriting only the touched
//   entry keeps their concurrent additions intact
// - SQLite maps naturally onto upsert/delete by primary key
//
// Why are subscriptions optional?
// - Local storage never changes behind our back, so it has nothing to report
// - Live backends hand out a receiver of full snapshots; the store replaces its
//   collection wholesale (last writer wins, no field-level merge)

mod local;
mod memory;
mod schema;
mod sync;

pub use local::LocalBackend;
pub use memory::{MemoryBackend, RemoteHandle};
pub use sync::SyncBackend;

use larder_types::{Item, ItemId};
use std::any::Any;
use std::sync::mpsc::{Receiver, TryRecvError};

use crate::Result;

/// Persistence capability behind an [`crate::ItemStore`].
pub trait Backend: Send {
    /// Short name for logs and status output ("local", "sync", "memory").
    fn name(&self) -> &'static str;

    fn read_all(&self) -> Result<Vec<Item>>;

    /// Insert or replace one item, keyed by id.
    fn write_one(&mut self, item: &Item) -> Result<()>;

    /// Delete one item. Deleting an id the backend does not hold is not an
    /// error here; the store decides what NotFound means.
    fn delete_one(&mut self, id: &ItemId) -> Result<()>;

    /// Start receiving external changes, if the backend supports live sync.
    fn subscribe(&mut self) -> Result<Option<Subscription>> {
        Ok(None)
    }
}

/// Change notification from a live backend.
#[derive(Debug, Clone)]
pub enum SyncEvent {
    /// Complete collection as currently persisted.
    Snapshot(Vec<Item>),
    /// Non-fatal problem while reading the remote state.
    Error(String),
}

/// Receiving end of a backend subscription.
///
/// Keeps whatever the backend needs alive (e.g. the file watcher) for as
/// long as the subscription exists.
pub struct Subscription {
    rx: Receiver<SyncEvent>,
    closed: bool,
    _guard: Option<Box<dyn Any + Send>>,
}

impl Subscription {
    pub fn new(rx: Receiver<SyncEvent>) -> Self {
        Self {
            rx,
            closed: false,
            _guard: None,
        }
    }

    pub fn with_guard(rx: Receiver<SyncEvent>, guard: impl Any + Send) -> Self {
        Self {
            rx,
            closed: false,
            _guard: Some(Box::new(guard)),
        }
    }

    pub fn receiver(&self) -> &Receiver<SyncEvent> {
        &self.rx
    }

    /// Drain everything queued so far.
    ///
    /// Only the newest snapshot matters since each one fully replaces the
    /// previous; errors are returned in arrival order. A disconnected
    /// sender is reported once.
    pub fn drain(&mut self) -> (Option<Vec<Item>>, Vec<String>) {
        let mut latest = None;
        let mut errors = Vec::new();
        if self.closed {
            return (latest, errors);
        }
        loop {
            match self.rx.try_recv() {
                Ok(SyncEvent::Snapshot(items)) => latest = Some(items),
                Ok(SyncEvent::Error(msg)) => errors.push(msg),
                Err(TryRecvError::Empty) => break,
                Err(TryRecvError::Disconnected) => {
                    self.closed = true;
                    errors.push("sync subscription disconnected".to_string());
                    break;
                }
            }
        }
        (latest, errors)
    }
}

impl std::fmt::Debug for Subscription {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Subscription")
            .field("closed", &self.closed)
            .field("guarded", &self._guard.is_some())
            .finish()
    }
}
