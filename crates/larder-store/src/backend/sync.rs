use larder_types::{Item, ItemId, Location, format_date, parse_date};
use notify::{Event, EventKind, PollWatcher, RecursiveMode, Watcher};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::path::{Path, PathBuf};
use std::sync::mpsc::{Sender, channel};
use std::time::Duration;
use tracing::{debug, info, warn};

use super::{Backend, Subscription, SyncEvent};
use crate::Result;

// NOTE: Sync document layout
//
// {
//   "items": {
//     "<id>": { "name": "Milk", "location": "Fridge", "date": "2026-10-19" },
//     ...
//   }
// }
//
// - Keyed by id like a realtime-database node, so each client only rewrites
//   the entry it touched
// - Entries we cannot decode are skipped on read but preserved on write;
//   another client may understand them
// - Every change seen by the watcher is delivered as the full collection

pub const DEFAULT_POLL_INTERVAL: Duration = Duration::from_millis(500);

#[derive(Debug, Serialize, Deserialize)]
struct ItemRecord {
    name: String,
    location: String,
    date: String,
}

impl ItemRecord {
    fn from_item(item: &Item) -> Self {
        Self {
            name: item.name.clone(),
            location: item.location.as_str().to_string(),
            date: format_date(item.date),
        }
    }

    fn into_item(self, id: &str) -> std::result::Result<Item, String> {
        let name = self.name.trim();
        if name.is_empty() {
            return Err("empty name".to_string());
        }
        let location = self
            .location
            .parse::<Location>()
            .map_err(|e| e.to_string())?;
        let date = parse_date(&self.date).map_err(|e| e.to_string())?;
        Ok(Item::new(ItemId::new(id), name, location, date))
    }
}

/// Items kept in a JSON document shared with other devices (for example in
/// a synchronized folder), watched for external changes.
pub struct SyncBackend {
    path: PathBuf,
    poll_interval: Duration,
}

impl SyncBackend {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            poll_interval: DEFAULT_POLL_INTERVAL,
        }
    }

    pub fn with_poll_interval(mut self, interval: Duration) -> Self {
        self.poll_interval = interval;
        self
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn write_document(&self, entries: Map<String, Value>) -> Result<()> {
        write_document(&self.path, entries)
    }
}

impl Backend for SyncBackend {
    fn name(&self) -> &'static str {
        "sync"
    }

    fn read_all(&self) -> Result<Vec<Item>> {
        let entries = read_entries(&self.path)?;
        Ok(decode_entries(entries))
    }

    fn write_one(&mut self, item: &Item) -> Result<()> {
        let mut entries = read_entries(&self.path)?;
        entries.insert(
            item.id.to_string(),
            serde_json::to_value(ItemRecord::from_item(item))?,
        );
        self.write_document(entries)?;
        debug!(id = %item.id, path = %self.path.display(), "pushed item to sync document");
        Ok(())
    }

    fn delete_one(&mut self, id: &ItemId) -> Result<()> {
        let mut entries = read_entries(&self.path)?;
        if entries.remove(id.as_str()).is_some() {
            self.write_document(entries)?;
            debug!(id = %id, path = %self.path.display(), "removed item from sync document");
        }
        Ok(())
    }

    fn subscribe(&mut self) -> Result<Option<Subscription>> {
        let (tx, rx) = channel();

        let watch_dir = match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
            _ => PathBuf::from("."),
        };
        std::fs::create_dir_all(&watch_dir)?;

        let document = self.path.clone();
        let file_name = document.file_name().map(|name| name.to_os_string());
        let config = notify::Config::default()
            .with_poll_interval(self.poll_interval)
            .with_compare_contents(true);

        let mut watcher = PollWatcher::new(
            move |res: notify::Result<Event>| match res {
                Ok(event) => {
                    let touches_document = event
                        .paths
                        .iter()
                        .any(|p| p.file_name().map(|n| n.to_os_string()) == file_name);
                    if touches_document && is_content_change(&event.kind) {
                        send_snapshot(&document, &tx);
                    }
                }
                Err(err) => {
                    let _ = tx.send(SyncEvent::Error(format!("watcher error: {}", err)));
                }
            },
            config,
        )?;

        watcher.watch(&watch_dir, RecursiveMode::NonRecursive)?;
        info!(path = %self.path.display(), "watching sync document for external changes");

        Ok(Some(Subscription::with_guard(rx, watcher)))
    }
}

fn is_content_change(kind: &EventKind) -> bool {
    matches!(
        kind,
        EventKind::Create(_) | EventKind::Modify(_) | EventKind::Remove(_) | EventKind::Any
    )
}

fn send_snapshot(path: &Path, tx: &Sender<SyncEvent>) {
    let event = match read_entries(path) {
        Ok(entries) => SyncEvent::Snapshot(decode_entries(entries)),
        Err(err) => SyncEvent::Error(format!("failed to read {}: {}", path.display(), err)),
    };
    let _ = tx.send(event);
}

/// Raw entries of the document. A missing or empty file is an empty
/// collection.
fn read_entries(path: &Path) -> Result<Map<String, Value>> {
    let content = match std::fs::read_to_string(path) {
        Ok(content) => content,
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => return Ok(Map::new()),
        Err(err) => return Err(err.into()),
    };
    if content.trim().is_empty() {
        return Ok(Map::new());
    }

    let mut document: Value = serde_json::from_str(&content)?;
    match document.get_mut("items").map(Value::take) {
        Some(Value::Object(entries)) => Ok(entries),
        Some(Value::Null) | None => Ok(Map::new()),
        Some(other) => {
            warn!(
                path = %path.display(),
                "sync document 'items' is not an object (found {}), treating as empty",
                type_name(&other)
            );
            Ok(Map::new())
        }
    }
}

fn decode_entries(entries: Map<String, Value>) -> Vec<Item> {
    entries
        .into_iter()
        .filter_map(|(id, value)| {
            let decoded = serde_json::from_value::<ItemRecord>(value)
                .map_err(|e| e.to_string())
                .and_then(|record| record.into_item(&id));
            match decoded {
                Ok(item) => Some(item),
                Err(reason) => {
                    warn!(id = %id, "skipping malformed sync entry: {}", reason);
                    None
                }
            }
        })
        .collect()
}

fn write_document(path: &Path, entries: Map<String, Value>) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }

    let mut document = Map::new();
    document.insert("items".to_string(), Value::Object(entries));
    let content = serde_json::to_string_pretty(&Value::Object(document))?;

    let mut tmp_name = path.as_os_str().to_os_string();
    tmp_name.push(".tmp");
    let tmp_path = PathBuf::from(tmp_name);
    std::fs::write(&tmp_path, content)?;
    std::fs::rename(&tmp_path, path)?;
    Ok(())
}

fn type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
