use larder_types::{Item, ItemId};
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::mpsc::{Receiver, Sender, channel};

use super::{Backend, Subscription, SyncEvent};
use crate::{Error, Result};

/// Volatile backend for ephemeral sessions and tests.
///
/// [`MemoryBackend::with_remote`] pairs it with a [`RemoteHandle`] that plays
/// the part of another device pushing snapshots, and
/// [`MemoryBackend::with_offline_switch`] lets a test make writes fail.
#[derive(Default)]
pub struct MemoryBackend {
    items: Vec<Item>,
    remote: Option<Receiver<SyncEvent>>,
    offline: Option<Arc<AtomicBool>>,
}

/// Sender side of a simulated live backend.
#[derive(Clone)]
pub struct RemoteHandle {
    tx: Sender<SyncEvent>,
}

impl RemoteHandle {
    /// Deliver a full snapshot, as if another client changed the collection.
    /// Returns false once the subscriber is gone.
    pub fn push_snapshot(&self, items: Vec<Item>) -> bool {
        self.tx.send(SyncEvent::Snapshot(items)).is_ok()
    }

    pub fn push_error(&self, message: impl Into<String>) -> bool {
        self.tx.send(SyncEvent::Error(message.into())).is_ok()
    }
}

impl MemoryBackend {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_items(items: Vec<Item>) -> Self {
        Self {
            items,
            ..Self::default()
        }
    }

    pub fn with_remote(self) -> (Self, RemoteHandle) {
        let (tx, rx) = channel();
        (
            Self {
                remote: Some(rx),
                ..self
            },
            RemoteHandle { tx },
        )
    }

    /// While the returned flag is `true`, writes and deletes fail.
    pub fn with_offline_switch(self) -> (Self, Arc<AtomicBool>) {
        let flag = Arc::new(AtomicBool::new(false));
        (
            Self {
                offline: Some(flag.clone()),
                ..self
            },
            flag,
        )
    }

    fn ensure_online(&self) -> Result<()> {
        match &self.offline {
            Some(flag) if flag.load(Ordering::SeqCst) => {
                Err(Error::Unavailable("memory backend is offline".to_string()))
            }
            _ => Ok(()),
        }
    }
}

impl Backend for MemoryBackend {
    fn name(&self) -> &'static str {
        "memory"
    }

    fn read_all(&self) -> Result<Vec<Item>> {
        Ok(self.items.clone())
    }

    fn write_one(&mut self, item: &Item) -> Result<()> {
        self.ensure_online()?;
        match self.items.iter_mut().find(|i| i.id == item.id) {
            Some(existing) => *existing = item.clone(),
            None => self.items.push(item.clone()),
        }
        Ok(())
    }

    fn delete_one(&mut self, id: &ItemId) -> Result<()> {
        self.ensure_online()?;
        self.items.retain(|i| &i.id != id);
        Ok(())
    }

    fn subscribe(&mut self) -> Result<Option<Subscription>> {
        Ok(self.remote.take().map(Subscription::new))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use larder_types::Location;

    fn item(id: &str) -> Item {
        Item::new(
            ItemId::new(id),
            id,
            Location::Pantry,
            NaiveDate::from_ymd_opt(2027, 3, 1).unwrap(),
        )
    }

    #[test]
    fn test_remote_snapshots_reach_subscriber() {
        let (mut backend, remote) = MemoryBackend::new().with_remote();
        let mut subscription = backend.subscribe().unwrap().expect("live backend");

        assert!(remote.push_snapshot(vec![item("a")]));
        assert!(remote.push_snapshot(vec![item("a"), item("b")]));

        let (latest, errors) = subscription.drain();
        assert_eq!(latest.unwrap().len(), 2);
        assert!(errors.is_empty());
    }

    #[test]
    fn test_without_remote_there_is_no_subscription() {
        let mut backend = MemoryBackend::new();
        assert!(backend.subscribe().unwrap().is_none());
    }

    #[test]
    fn test_offline_switch_rejects_writes() {
        let (mut backend, offline) = MemoryBackend::new().with_offline_switch();
        offline.store(true, Ordering::SeqCst);

        let err = backend.write_one(&item("a")).unwrap_err();
        assert_eq!(err.kind(), crate::ErrorKind::Persistence);

        offline.store(false, Ordering::SeqCst);
        backend.write_one(&item("a")).unwrap();
        assert_eq!(backend.read_all().unwrap().len(), 1);
    }
}
