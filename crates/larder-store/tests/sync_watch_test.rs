use chrono::NaiveDate;
use larder_store::{Backend, ItemStore, SyncBackend, SyncEvent};
use larder_types::{ItemFields, Location};
use std::time::{Duration, Instant};
use tempfile::TempDir;

const POLL: Duration = Duration::from_millis(50);

/// Wait for a snapshot with `expected` items, skipping intermediate events.
fn wait_for_snapshot(
    rx: &std::sync::mpsc::Receiver<SyncEvent>,
    expected: usize,
) -> Vec<larder_types::Item> {
    let deadline = Instant::now() + Duration::from_secs(5);
    while Instant::now() < deadline {
        match rx.recv_timeout(Duration::from_millis(250)) {
            Ok(SyncEvent::Snapshot(items)) if items.len() == expected => return items,
            Ok(_) | Err(_) => continue,
        }
    }
    panic!("no snapshot with {} items within timeout", expected);
}

#[test]
fn test_external_write_is_delivered_as_snapshot() {
    let dir = TempDir::new().unwrap();
    let doc = dir.path().join("larder.json");

    let mut watched = SyncBackend::new(&doc).with_poll_interval(POLL);
    let subscription = watched.subscribe().unwrap().expect("sync backend is live");

    // Give the poll watcher its initial scan before the file appears.
    std::thread::sleep(POLL * 4);

    // A second client shares the same document.
    let mut other = ItemStore::open(Box::new(SyncBackend::new(&doc))).unwrap();
    other
        .add(&ItemFields::new(
            "Milk",
            Location::Fridge,
            NaiveDate::from_ymd_opt(2026, 10, 19).unwrap(),
        ))
        .unwrap();

    let items = wait_for_snapshot(subscription.receiver(), 1);
    assert_eq!(items[0].name, "Milk");
    assert_eq!(items[0].location, Location::Fridge);
}

#[test]
fn test_store_applies_latest_snapshot() {
    let dir = TempDir::new().unwrap();
    let doc = dir.path().join("larder.json");

    let mut store =
        ItemStore::open(Box::new(SyncBackend::new(&doc).with_poll_interval(POLL))).unwrap();
    let mut subscription = store.subscribe().unwrap().expect("sync backend is live");
    std::thread::sleep(POLL * 4);

    let mut other = ItemStore::open(Box::new(SyncBackend::new(&doc))).unwrap();
    for name in ["Peas", "Ice cream"] {
        other
            .add(&ItemFields::new(
                name,
                Location::Freezer,
                NaiveDate::from_ymd_opt(2027, 1, 1).unwrap(),
            ))
            .unwrap();
    }

    let deadline = Instant::now() + Duration::from_secs(5);
    while store.len() < 2 && Instant::now() < deadline {
        if let (Some(items), _) = subscription.drain() {
            store.apply_snapshot(items);
        }
        std::thread::sleep(POLL);
    }

    assert_eq!(store.len(), 2);
    let mut names: Vec<_> = store.all().into_iter().map(|item| item.name).collect();
    names.sort();
    assert_eq!(names, vec!["Ice cream", "Peas"]);
}

#[test]
fn test_reading_back_own_writes_is_not_a_change() {
    let dir = TempDir::new().unwrap();
    let doc = dir.path().join("larder.json");
    let mut store = ItemStore::open(Box::new(SyncBackend::new(&doc))).unwrap();

    for n in 0..20 {
        store
            .add(&ItemFields::new(
                format!("Item {}", n),
                Location::Pantry,
                NaiveDate::from_ymd_opt(2026, 11, 1).unwrap(),
            ))
            .unwrap();
        assert!(!store.reload().unwrap(), "own write #{} read back as a change", n);
    }
    assert_eq!(store.len(), 20);

    // A write from another client still counts.
    let mut other = ItemStore::open(Box::new(SyncBackend::new(&doc))).unwrap();
    let id = store.items()[0].id.clone();
    other.remove(&id).unwrap();
    assert!(store.reload().unwrap());
    assert_eq!(store.len(), 19);
}
