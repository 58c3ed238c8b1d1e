use larder_types::{Item, ItemFields, ItemId};
use std::collections::{HashMap, HashSet};
use tracing::debug;

use crate::backend::{Backend, Subscription};
use crate::{Error, Result};

/// Sole owner of the canonical item collection.
///
/// Mutations land in memory first and are then handed to the backend. When
/// the backend fails, the error is returned but the in-memory change is
/// kept; the two may diverge until the next successful write or reload.
pub struct ItemStore {
    items: Vec<Item>,
    backend: Box<dyn Backend>,
}

impl ItemStore {
    /// Load the current collection from `backend`.
    pub fn open(backend: Box<dyn Backend>) -> Result<Self> {
        let items = dedup_by_id(backend.read_all()?);
        debug!(backend = backend.name(), count = items.len(), "item store opened");
        Ok(Self { items, backend })
    }

    pub fn backend_name(&self) -> &'static str {
        self.backend.name()
    }

    /// Snapshot of all items, in no particular order.
    pub fn all(&self) -> Vec<Item> {
        self.items.clone()
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn get(&self, id: &ItemId) -> Option<&Item> {
        self.items.iter().find(|item| &item.id == id)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Find an item by exact id or by unambiguous id prefix.
    pub fn resolve(&self, id_or_prefix: &str) -> Result<ItemId> {
        let needle = id_or_prefix.trim();
        if needle.is_empty() {
            return Err(Error::NotFound(id_or_prefix.to_string()));
        }

        if let Some(item) = self.items.iter().find(|item| item.id.as_str() == needle) {
            return Ok(item.id.clone());
        }

        let mut matches = self
            .items
            .iter()
            .filter(|item| item.id.as_str().starts_with(needle));
        match (matches.next(), matches.next()) {
            (None, _) => Err(Error::NotFound(needle.to_string())),
            (Some(item), None) => Ok(item.id.clone()),
            (Some(_), Some(_)) => Err(Error::AmbiguousId {
                prefix: needle.to_string(),
                matches: 2 + matches.count(),
            }),
        }
    }

    /// Create a new item with a freshly generated id.
    pub fn add(&mut self, fields: &ItemFields) -> Result<Item> {
        let (name, date) = fields.validate()?;
        let item = Item::new(self.fresh_id(), name, fields.location, date);

        self.items.push(item.clone());
        self.backend.write_one(&item)?;
        debug!(id = %item.id, location = %item.location, "item added");

        Ok(item)
    }

    /// Replace name, location and date of an existing item. The id never
    /// changes.
    pub fn update(&mut self, id: &ItemId, fields: &ItemFields) -> Result<Item> {
        let index = self.position(id)?;
        let (name, date) = fields.validate()?;

        let item = &mut self.items[index];
        item.name = name;
        item.location = fields.location;
        item.date = date;
        let item = item.clone();

        self.backend.write_one(&item)?;
        debug!(id = %item.id, "item updated");

        Ok(item)
    }

    pub fn remove(&mut self, id: &ItemId) -> Result<Item> {
        let index = self.position(id)?;
        let removed = self.items.remove(index);

        self.backend.delete_one(id)?;
        debug!(id = %id, "item removed");

        Ok(removed)
    }

    /// Replace the whole collection with an externally sourced snapshot.
    ///
    /// Last writer wins: nothing is merged with the local state. Returns
    /// whether the collection actually changed. Order is not significant;
    /// a snapshot holding the same items keeps the local order.
    pub fn apply_snapshot(&mut self, items: Vec<Item>) -> bool {
        let items = dedup_by_id(items);
        if same_items(&self.items, &items) {
            return false;
        }
        self.items = items;
        true
    }

    /// Re-read the collection from the backend, dropping any local
    /// divergence.
    pub fn reload(&mut self) -> Result<bool> {
        let items = self.backend.read_all()?;
        Ok(self.apply_snapshot(items))
    }

    pub fn subscribe(&mut self) -> Result<Option<Subscription>> {
        self.backend.subscribe()
    }

    fn position(&self, id: &ItemId) -> Result<usize> {
        self.items
            .iter()
            .position(|item| &item.id == id)
            .ok_or_else(|| Error::not_found(id))
    }

    fn fresh_id(&self) -> ItemId {
        loop {
            let id = ItemId::generate();
            if self.get(&id).is_none() {
                return id;
            }
        }
    }
}

/// Same set of items by id and value, whatever the order. Both sides hold
/// unique ids.
fn same_items(current: &[Item], incoming: &[Item]) -> bool {
    if current.len() != incoming.len() {
        return false;
    }
    let by_id: HashMap<&ItemId, &Item> = current.iter().map(|item| (&item.id, item)).collect();
    incoming
        .iter()
        .all(|item| by_id.get(&item.id).is_some_and(|known| *known == item))
}

/// Keep the last occurrence of every id, in first-seen position.
fn dedup_by_id(items: Vec<Item>) -> Vec<Item> {
    let mut seen = HashSet::new();
    let mut deduped: Vec<Item> = items
        .into_iter()
        .rev()
        .filter(|item| seen.insert(item.id.clone()))
        .collect();
    deduped.reverse();
    deduped
}
