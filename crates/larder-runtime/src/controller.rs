use chrono::NaiveDate;
use larder_engine::{Shelves, present};
use larder_store::{ItemStore, Subscription};
use larder_types::{Item, ItemFields, ItemId, Location};
use tracing::{info, warn};

use crate::Result;

// NOTE: Controller Design
//
// The controller is the only writer of the item store. User interfaces hold
// the controller, send it intents (open, edit draft, save, delete) and render
// `shelves(today)` afterwards; they never keep items of their own.
//
// - The modal remembers the *id* of the item being edited, never a copy of
//   the item, so a sync snapshot that replaces the collection cannot be
//   overwritten by a stale value
// - Validation failures leave the modal open with the draft intact
// - NotFound is downgraded to a warning: the item vanished (most often
//   because another device deleted it) and there is nothing left to do

/// Modal form state.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Modal {
    #[default]
    Closed,
    Adding(ItemFields),
    Editing {
        id: ItemId,
        draft: ItemFields,
    },
}

impl Modal {
    pub fn is_open(&self) -> bool {
        !matches!(self, Modal::Closed)
    }

    pub fn draft(&self) -> Option<&ItemFields> {
        match self {
            Modal::Closed => None,
            Modal::Adding(draft) | Modal::Editing { draft, .. } => Some(draft),
        }
    }

    fn draft_mut(&mut self) -> Option<&mut ItemFields> {
        match self {
            Modal::Closed => None,
            Modal::Adding(draft) | Modal::Editing { draft, .. } => Some(draft),
        }
    }
}

/// What `save` did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SaveOutcome {
    Added(Item),
    Updated(Item),
    /// The edited item no longer exists; nothing was written.
    Vanished(ItemId),
    /// No modal was open.
    Idle,
}

/// Result of draining the live-sync subscription.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SyncUpdate {
    /// The collection was replaced and differs from before.
    pub changed: bool,
    pub errors: Vec<String>,
}

pub struct Controller {
    store: ItemStore,
    modal: Modal,
    pending_delete: Option<ItemId>,
    subscription: Option<Subscription>,
}

impl Controller {
    pub fn new(store: ItemStore) -> Self {
        Self {
            store,
            modal: Modal::Closed,
            pending_delete: None,
            subscription: None,
        }
    }

    pub fn store(&self) -> &ItemStore {
        &self.store
    }

    pub fn modal(&self) -> &Modal {
        &self.modal
    }

    pub fn draft(&self) -> Option<&ItemFields> {
        self.modal.draft()
    }

    /// Start listening for external changes. Returns whether the backend
    /// supports live sync. Calling it twice keeps the first subscription.
    pub fn start_sync(&mut self) -> Result<bool> {
        if self.subscription.is_none() {
            self.subscription = self.store.subscribe()?;
        }
        Ok(self.subscription.is_some())
    }

    pub fn is_live(&self) -> bool {
        self.subscription.is_some()
    }

    /// Open an empty form: no name, date today, location Fridge. Any form
    /// already open is discarded.
    pub fn open_for_add(&mut self, today: NaiveDate) {
        self.modal = Modal::Adding(ItemFields::new("", Location::default(), today));
    }

    /// Open the form pre-filled with an existing item. Unknown ids leave the
    /// modal closed.
    pub fn open_for_edit(&mut self, id: &ItemId) -> bool {
        match self.store.get(id) {
            Some(item) => {
                self.modal = Modal::Editing {
                    id: item.id.clone(),
                    draft: item.fields(),
                };
                true
            }
            None => {
                warn!(id = %id, "cannot edit unknown item");
                false
            }
        }
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        if let Some(draft) = self.modal.draft_mut() {
            draft.name = name.into();
        }
    }

    pub fn set_date(&mut self, date: Option<NaiveDate>) {
        if let Some(draft) = self.modal.draft_mut() {
            draft.date = date;
        }
    }

    pub fn set_location(&mut self, location: Location) {
        if let Some(draft) = self.modal.draft_mut() {
            draft.location = location;
        }
    }

    /// Commit the open form.
    ///
    /// Validation errors keep the modal open. Persistence errors close it:
    /// the store already holds the change.
    pub fn save(&mut self) -> Result<SaveOutcome> {
        let outcome = match &self.modal {
            Modal::Closed => return Ok(SaveOutcome::Idle),
            Modal::Adding(draft) => {
                draft.validate()?;
                let result = self.store.add(draft);
                self.modal = Modal::Closed;
                SaveOutcome::Added(result?)
            }
            Modal::Editing { id, draft } => {
                draft.validate()?;
                let id = id.clone();
                let result = self.store.update(&id, draft);
                self.modal = Modal::Closed;
                match result {
                    Ok(item) => SaveOutcome::Updated(item),
                    Err(err) if err.is_not_found() => {
                        warn!(id = %id, "edited item no longer exists, discarding changes");
                        SaveOutcome::Vanished(id)
                    }
                    Err(err) => return Err(err.into()),
                }
            }
        };
        Ok(outcome)
    }

    pub fn cancel(&mut self) {
        self.modal = Modal::Closed;
    }

    /// Ask for confirmation before deleting. Unknown ids are ignored.
    pub fn request_delete(&mut self, id: &ItemId) -> bool {
        if self.store.get(id).is_some() {
            self.pending_delete = Some(id.clone());
            true
        } else {
            warn!(id = %id, "cannot delete unknown item");
            false
        }
    }

    /// The item awaiting confirmation, if it still exists.
    pub fn pending_delete(&self) -> Option<&Item> {
        self.pending_delete
            .as_ref()
            .and_then(|id| self.store.get(id))
    }

    /// Delete the pending item. Returns the removed item, or `None` when
    /// nothing was pending or the item had already disappeared.
    pub fn confirm_delete(&mut self) -> Result<Option<Item>> {
        let Some(id) = self.pending_delete.take() else {
            return Ok(None);
        };
        match self.store.remove(&id) {
            Ok(item) => Ok(Some(item)),
            Err(err) if err.is_not_found() => {
                warn!(id = %id, "item to delete no longer exists");
                Ok(None)
            }
            Err(err) => Err(err.into()),
        }
    }

    pub fn decline_delete(&mut self) {
        self.pending_delete = None;
    }

    pub fn shelves(&self, today: NaiveDate) -> Shelves {
        present(self.store.items(), today)
    }

    /// Apply the newest external snapshot, if any arrived.
    pub fn poll_sync(&mut self) -> SyncUpdate {
        let Some(subscription) = self.subscription.as_mut() else {
            return SyncUpdate::default();
        };

        let (latest, errors) = subscription.drain();
        for error in &errors {
            warn!("sync: {}", error);
        }

        let changed = match latest {
            Some(items) => {
                let count = items.len();
                let changed = self.store.apply_snapshot(items);
                if changed {
                    info!(count, "applied sync snapshot");
                }
                changed
            }
            None => false,
        };

        SyncUpdate { changed, errors }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use larder_store::{ErrorKind, MemoryBackend, RemoteHandle};
    use std::sync::atomic::Ordering;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 10, 18).unwrap()
    }

    fn controller() -> Controller {
        Controller::new(ItemStore::open(Box::new(MemoryBackend::new())).unwrap())
    }

    fn live_controller() -> (Controller, RemoteHandle) {
        let (backend, remote) = MemoryBackend::new().with_remote();
        let mut controller = Controller::new(ItemStore::open(Box::new(backend)).unwrap());
        assert!(controller.start_sync().unwrap());
        (controller, remote)
    }

    fn add(controller: &mut Controller, name: &str, location: Location, days: i64) -> Item {
        controller.open_for_add(today());
        controller.set_name(name);
        controller.set_location(location);
        controller.set_date(Some(today() + chrono::Duration::days(days)));
        match controller.save().unwrap() {
            SaveOutcome::Added(item) => item,
            other => panic!("expected Added, got {:?}", other),
        }
    }

    #[test]
    fn test_open_for_add_defaults() {
        let mut controller = controller();
        controller.open_for_add(today());

        let draft = controller.draft().unwrap();
        assert_eq!(draft.name, "");
        assert_eq!(draft.location, Location::Fridge);
        assert_eq!(draft.date, Some(today()));
        assert!(matches!(controller.modal(), Modal::Adding(_)));
    }

    #[test]
    fn test_milk_tomorrow_end_to_end() {
        let mut controller = controller();
        add(&mut controller, "Milk", Location::Fridge, 1);

        assert!(!controller.modal().is_open());
        let shelves = controller.shelves(today());
        let fridge = shelves.get(Location::Fridge);
        assert_eq!(fridge.len(), 1);
        assert_eq!(fridge[0].item.name, "Milk");
        assert_eq!(fridge[0].expiry.status, "Expires tomorrow!");
        assert_eq!(fridge[0].expiry.urgency.as_str(), "red");
    }

    #[test]
    fn test_save_with_empty_name_keeps_modal_open() {
        let mut controller = controller();
        controller.open_for_add(today());
        controller.set_name("   ");

        let err = controller.save().unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Validation);
        assert!(matches!(controller.modal(), Modal::Adding(_)));
        assert!(controller.store().is_empty());
    }

    #[test]
    fn test_save_without_date_keeps_modal_open() {
        let mut controller = controller();
        controller.open_for_add(today());
        controller.set_name("Bread");
        controller.set_date(None);

        let err = controller.save().unwrap_err();
        assert_eq!(err.to_string(), "Please select a date");
        assert_eq!(controller.draft().unwrap().name, "Bread");
    }

    #[test]
    fn test_edit_replaces_fields_and_keeps_id() {
        let mut controller = controller();
        let milk = add(&mut controller, "Milk", Location::Fridge, 1);

        assert!(controller.open_for_edit(&milk.id));
        assert_eq!(controller.draft().unwrap().name, "Milk");
        controller.set_location(Location::Freezer);
        controller.set_name("Frozen milk");

        match controller.save().unwrap() {
            SaveOutcome::Updated(item) => {
                assert_eq!(item.id, milk.id);
                assert_eq!(item.location, Location::Freezer);
            }
            other => panic!("expected Updated, got {:?}", other),
        }
        assert_eq!(controller.store().len(), 1);
    }

    #[test]
    fn test_open_for_edit_unknown_id_stays_closed() {
        let mut controller = controller();
        assert!(!controller.open_for_edit(&ItemId::new("nope")));
        assert_eq!(controller.modal(), &Modal::Closed);
    }

    #[test]
    fn test_cancel_discards_draft() {
        let mut controller = controller();
        controller.open_for_add(today());
        controller.set_name("Cheese");
        controller.cancel();

        assert_eq!(controller.modal(), &Modal::Closed);
        assert_eq!(controller.save().unwrap(), SaveOutcome::Idle);
        assert!(controller.store().is_empty());
    }

    #[test]
    fn test_draft_setters_ignored_when_closed() {
        let mut controller = controller();
        controller.set_name("ignored");
        assert_eq!(controller.draft(), None);
    }

    #[test]
    fn test_delete_requires_confirmation() {
        let mut controller = controller();
        let milk = add(&mut controller, "Milk", Location::Fridge, 1);

        assert!(controller.request_delete(&milk.id));
        assert_eq!(controller.pending_delete(), Some(&milk));
        controller.decline_delete();
        assert_eq!(controller.pending_delete(), None);
        assert_eq!(controller.store().len(), 1);

        assert!(controller.request_delete(&milk.id));
        assert_eq!(controller.confirm_delete().unwrap(), Some(milk));
        assert!(controller.store().is_empty());
        assert_eq!(controller.confirm_delete().unwrap(), None);
    }

    #[test]
    fn test_request_delete_unknown_is_noop() {
        let mut controller = controller();
        assert!(!controller.request_delete(&ItemId::new("ghost")));
        assert_eq!(controller.confirm_delete().unwrap(), None);
    }

    #[test]
    fn test_persistence_failure_closes_modal_and_keeps_item() {
        let (backend, offline) = MemoryBackend::new().with_offline_switch();
        let mut controller = Controller::new(ItemStore::open(Box::new(backend)).unwrap());
        offline.store(true, Ordering::SeqCst);

        controller.open_for_add(today());
        controller.set_name("Eggs");
        let err = controller.save().unwrap_err();

        assert_eq!(err.kind(), ErrorKind::Persistence);
        assert!(!controller.modal().is_open());
        assert_eq!(controller.store().len(), 1);
    }

    #[test]
    fn test_sync_snapshot_replaces_collection() {
        let (mut controller, remote) = live_controller();
        add(&mut controller, "Milk", Location::Fridge, 1);

        let peas = Item::new(
            ItemId::new("remote-peas"),
            "Peas",
            Location::Freezer,
            today() + chrono::Duration::days(30),
        );
        assert!(remote.push_snapshot(vec![peas.clone()]));

        let update = controller.poll_sync();
        assert!(update.changed);
        assert_eq!(controller.store().all(), vec![peas]);

        assert_eq!(controller.poll_sync(), SyncUpdate::default());
    }

    #[test]
    fn test_edit_of_item_removed_by_sync_is_discarded() {
        let (mut controller, remote) = live_controller();
        let milk = add(&mut controller, "Milk", Location::Fridge, 1);

        controller.open_for_edit(&milk.id);
        controller.set_name("Skim milk");
        remote.push_snapshot(Vec::new());
        controller.poll_sync();

        assert_eq!(controller.save().unwrap(), SaveOutcome::Vanished(milk.id));
        assert!(!controller.modal().is_open());
        assert!(controller.store().is_empty());
    }

    #[test]
    fn test_sync_errors_are_reported() {
        let (mut controller, remote) = live_controller();
        remote.push_error("document unreadable");

        let update = controller.poll_sync();
        assert!(!update.changed);
        assert_eq!(update.errors, vec!["document unreadable".to_string()]);
    }

    #[test]
    fn test_poll_without_subscription_is_quiet() {
        let mut controller = controller();
        assert!(!controller.start_sync().unwrap());
        assert_eq!(controller.poll_sync(), SyncUpdate::default());
    }
}
